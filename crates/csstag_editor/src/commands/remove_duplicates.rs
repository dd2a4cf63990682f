use super::{Command, CommandContext, CommandOutcome};
use crate::error::CommandError;
use crate::host::Message;

/// Drops repeated properties in every block of the active document, keeping
/// the last value of each.
pub fn remove_duplicates(context: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
  if !context.allows(Command::RemoveDuplicates) {
    return Ok(CommandOutcome::Skipped);
  }

  let document = context.validate_editor()?;
  let deduplicated = csstag_core::remove_duplicate_properties(&document.text);
  context.replace_document(&document, deduplicated)?;

  context
    .host
    .show_message(Message::info("Duplicate properties removed"));

  Ok(CommandOutcome::DocumentUpdated)
}
