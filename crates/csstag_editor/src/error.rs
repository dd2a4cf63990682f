use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("No active editor, open a stylesheet first")]
  NoActiveDocument,

  #[error("Unsupported document language \"{language_id}\", expected one of: {}", .expected.join(", "))]
  UnsupportedDocument {
    language_id: String,
    expected: Vec<String>,
  },

  #[error("Error creating file: {source}")]
  Write {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("{0}")]
  Host(anyhow::Error),
}

impl CommandError {
  /// Errors about the editor state, shown as warnings instead of failures
  pub fn is_warning(&self) -> bool {
    matches!(
      self,
      CommandError::NoActiveDocument | CommandError::UnsupportedDocument { .. }
    )
  }
}
