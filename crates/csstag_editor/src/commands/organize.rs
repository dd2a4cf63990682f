use super::{Command, CommandContext, CommandOutcome};
use crate::error::CommandError;
use crate::host::Message;

/// Reorders the declarations of every block in the active document by
/// logical category.
pub fn organize_by_category(context: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
  if !context.allows(Command::OrganizeByCategory) {
    return Ok(CommandOutcome::Skipped);
  }

  let document = context.validate_editor()?;
  let organized = csstag_core::organize_by_category(&document.text);
  context.replace_document(&document, organized)?;

  context
    .host
    .show_message(Message::info("CSS organized by logical categories"));

  Ok(CommandOutcome::DocumentUpdated)
}
