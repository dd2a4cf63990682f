use std::cell::RefCell;
use std::ops::Range;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use csstag_editor::{ActiveDocument, EditorHost, Message, MessageKind};
use csstag_filesystem::FileSystemRef;

/// Editor host backed by a single file on disk.
///
/// Edits are written straight back to the file. Messages go to stdout and
/// no action is ever picked, since there is nobody to ask.
#[derive(Debug)]
pub struct FileHost {
  fs: FileSystemRef,
  document: RefCell<ActiveDocument>,
}

impl FileHost {
  pub fn open(
    fs: FileSystemRef,
    path: PathBuf,
    language_id: Option<String>,
    selection: Option<Range<usize>>,
  ) -> anyhow::Result<Self> {
    let text = fs
      .read_to_string(&path)
      .with_context(|| format!("Unable to read {}", path.display()))?;
    let language_id = language_id.unwrap_or_else(|| language_from_extension(&path));

    Ok(FileHost {
      fs,
      document: RefCell::new(ActiveDocument {
        path,
        language_id,
        text,
        selection,
      }),
    })
  }
}

fn language_from_extension(path: &Path) -> String {
  path
    .extension()
    .map(|extension| extension.to_string_lossy().to_ascii_lowercase())
    .unwrap_or_else(|| String::from("plaintext"))
}

impl EditorHost for FileHost {
  fn active_document(&self) -> Option<ActiveDocument> {
    Some(self.document.borrow().clone())
  }

  fn replace_document_range(&self, range: Range<usize>, text: String) -> anyhow::Result<()> {
    let mut document = self.document.borrow_mut();
    if document.text.get(range.clone()).is_none() {
      anyhow::bail!(
        "Edit range {:?} is outside of {}",
        range,
        document.path.display()
      );
    }

    let mut updated = document.text.clone();
    updated.replace_range(range, &text);
    self
      .fs
      .write(&document.path, updated.as_bytes())
      .with_context(|| format!("Unable to write {}", document.path.display()))?;

    tracing::debug!("Saved {}", document.path.display());
    document.text = updated;
    document.selection = None;
    Ok(())
  }

  fn open_document(&self, path: &Path) -> anyhow::Result<()> {
    println!("Created {}", path.display());
    Ok(())
  }

  fn show_message(&self, message: Message) -> Option<String> {
    let prefix = match message.kind {
      MessageKind::Info => "info",
      MessageKind::Warning => "warning",
      MessageKind::Error => "error",
    };
    println!("{prefix}: {}", message.text);
    for action in &message.actions {
      println!("  [{action}]");
    }
    None
  }

  fn open_external_url(&self, url: &str) {
    println!("Open {url} in a browser");
  }
}
