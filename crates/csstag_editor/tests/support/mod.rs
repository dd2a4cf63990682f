use std::cell::RefCell;
use std::ops::Range;
use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDate;
use csstag_editor::{
  ActiveDocument, Capabilities, CommandContext, CssTagConfig, EditorHost, Message,
};
use csstag_filesystem::FileSystemRef;

/// Editor host keeping everything it is asked to do in memory
#[derive(Default)]
pub struct RecordingHost {
  pub document: RefCell<Option<ActiveDocument>>,
  pub messages: RefCell<Vec<Message>>,
  pub opened_documents: RefCell<Vec<PathBuf>>,
  pub opened_urls: RefCell<Vec<String>>,
  /// Action picked for every message that offers one
  pub action: Option<String>,
  pub reject_edits: bool,
}

impl RecordingHost {
  pub fn with_document(path: &str, language_id: &str, text: &str) -> Self {
    RecordingHost {
      document: RefCell::new(Some(ActiveDocument {
        path: PathBuf::from(path),
        language_id: language_id.into(),
        text: text.into(),
        selection: None,
      })),
      ..RecordingHost::default()
    }
  }

  pub fn select(&self, selection: Range<usize>) {
    if let Some(document) = self.document.borrow_mut().as_mut() {
      document.selection = Some(selection);
    }
  }

  pub fn text(&self) -> String {
    self
      .document
      .borrow()
      .as_ref()
      .map(|document| document.text.clone())
      .unwrap_or_default()
  }

  pub fn messages(&self) -> Vec<Message> {
    self.messages.borrow().clone()
  }
}

impl EditorHost for RecordingHost {
  fn active_document(&self) -> Option<ActiveDocument> {
    self.document.borrow().clone()
  }

  fn replace_document_range(&self, range: Range<usize>, text: String) -> anyhow::Result<()> {
    if self.reject_edits {
      anyhow::bail!("The document changed while the edit was pending");
    }

    let mut document = self.document.borrow_mut();
    let document = document
      .as_mut()
      .ok_or_else(|| anyhow::anyhow!("No document to edit"))?;
    document.text.replace_range(range, &text);
    document.selection = None;
    Ok(())
  }

  fn open_document(&self, path: &Path) -> anyhow::Result<()> {
    self.opened_documents.borrow_mut().push(path.to_path_buf());
    Ok(())
  }

  fn show_message(&self, message: Message) -> Option<String> {
    let picked = self
      .action
      .clone()
      .filter(|action| message.actions.contains(action));
    self.messages.borrow_mut().push(message);
    picked
  }

  fn open_external_url(&self, url: &str) {
    self.opened_urls.borrow_mut().push(url.to_string());
  }
}

pub fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

pub fn context<'a>(
  host: &'a RecordingHost,
  file_system: FileSystemRef,
  config: &'a CssTagConfig,
  capabilities: Capabilities,
) -> CommandContext<'a> {
  CommandContext {
    host,
    file_system,
    capabilities,
    config,
    today: today(),
  }
}
