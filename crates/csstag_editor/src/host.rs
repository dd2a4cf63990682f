use std::ops::Range;
use std::path::Path;
use std::path::PathBuf;

use mockall::automock;

/// The document currently focused in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
  pub path: PathBuf,
  /// Language identifier reported by the editor, e.g. `css`
  pub language_id: String,
  pub text: String,
  /// Selected byte range of `text`, if any
  pub selection: Option<Range<usize>>,
}

impl ActiveDocument {
  /// The selected text, or `None` when the selection is missing, out of
  /// bounds or not on a character boundary
  pub fn selected_text(&self) -> Option<&str> {
    let selection = self.selection.clone()?;
    self.text.get(selection)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
  Info,
  Warning,
  Error,
}

/// A notification shown to the user, optionally offering actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
  pub kind: MessageKind,
  pub text: String,
  pub actions: Vec<String>,
}

impl Message {
  pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
    Message {
      kind,
      text: text.into(),
      actions: Vec::new(),
    }
  }

  pub fn info(text: impl Into<String>) -> Self {
    Message::new(MessageKind::Info, text)
  }

  pub fn warning(text: impl Into<String>) -> Self {
    Message::new(MessageKind::Warning, text)
  }

  pub fn error(text: impl Into<String>) -> Self {
    Message::new(MessageKind::Error, text)
  }

  pub fn with_action(mut self, label: impl Into<String>) -> Self {
    self.actions.push(label.into());
    self
  }
}

/// Operations the host editor provides to commands
#[automock]
pub trait EditorHost {
  fn active_document(&self) -> Option<ActiveDocument>;

  /// Replace `range` of the active document with `text`
  fn replace_document_range(&self, range: Range<usize>, text: String) -> anyhow::Result<()>;

  /// Show a file to the user, typically one a command just wrote
  fn open_document(&self, path: &Path) -> anyhow::Result<()>;

  /// Show a message and return the label of the action the user picked
  fn show_message(&self, message: Message) -> Option<String>;

  fn open_external_url(&self, url: &str);
}
