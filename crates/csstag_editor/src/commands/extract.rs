use std::path::Path;

use csstag_core::{extract_tags, extracted_file_path, render_extracted_file, CssTag};

use super::{CommandContext, CommandOutcome};
use crate::error::CommandError;
use crate::host::Message;

pub const ALL_SUFFIX: &str = "all";
pub const SELECTED_SUFFIX: &str = "selected";

/// Writes every block of the active document to `<stem>-extracted-all.css`.
pub fn extract_all(context: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
  let document = context.validate_editor()?;
  let tags = extract_tags(&document.text);

  create_output_file(context, &tags, &document.path, ALL_SUFFIX)
}

/// Writes the blocks inside the selection to `<stem>-extracted-selected.css`.
pub fn extract_selected(context: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
  let document = context.validate_editor()?;

  let Some(selected) = document
    .selected_text()
    .filter(|text| !text.trim().is_empty())
  else {
    context
      .host
      .show_message(Message::warning("Select the CSS you want to extract first"));
    return Ok(CommandOutcome::Skipped);
  };

  let tags = extract_tags(selected);
  create_output_file(context, &tags, &document.path, SELECTED_SUFFIX)
}

/// Writes `tags` next to `source_path` and opens the new file.
///
/// Nothing is written when `tags` is empty; the user is warned instead.
pub fn create_output_file(
  context: &CommandContext<'_>,
  tags: &[CssTag],
  source_path: &Path,
  suffix: &str,
) -> Result<CommandOutcome, CommandError> {
  if tags.is_empty() {
    context
      .host
      .show_message(Message::warning("No CSS tags found to extract"));
    return Ok(CommandOutcome::Skipped);
  }

  let path = extracted_file_path(source_path, suffix);
  let source_file_name = source_path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();
  let content = render_extracted_file(tags, &source_file_name, context.today);

  context
    .file_system
    .write(&path, content.as_bytes())
    .map_err(|source| CommandError::Write {
      path: path.clone(),
      source,
    })?;

  context
    .host
    .open_document(&path)
    .map_err(CommandError::Host)?;

  tracing::info!(
    "Created {} with {} selectors in source order",
    path.display(),
    tags.len()
  );

  Ok(CommandOutcome::FileCreated(path))
}
