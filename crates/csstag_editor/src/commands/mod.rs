use std::ops::Range;
use std::path::PathBuf;

use chrono::NaiveDate;
use csstag_filesystem::FileSystemRef;

use crate::config::CssTagConfig;
use crate::error::CommandError;
use crate::host::{ActiveDocument, EditorHost, Message};
use crate::license::{Capabilities, PremiumFeature};

pub mod extract;
pub mod organize;
pub mod remove_duplicates;

/// Commands registered with the host editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  ExtractAll,
  ExtractSelected,
  RemoveDuplicates,
  OrganizeByCategory,
}

impl Command {
  pub const ALL: [Command; 4] = [
    Command::ExtractAll,
    Command::ExtractSelected,
    Command::RemoveDuplicates,
    Command::OrganizeByCategory,
  ];

  pub fn id(self) -> &'static str {
    match self {
      Command::ExtractAll => "cssTagMaster.extractAll",
      Command::ExtractSelected => "cssTagMaster.extractSelected",
      Command::RemoveDuplicates => "cssTagMaster.removeDuplicates",
      Command::OrganizeByCategory => "cssTagMaster.organizeByCategory",
    }
  }

  pub fn from_id(id: &str) -> Option<Command> {
    Command::ALL.into_iter().find(|command| command.id() == id)
  }

  pub fn premium_feature(self) -> Option<PremiumFeature> {
    match self {
      Command::ExtractAll | Command::ExtractSelected => None,
      Command::RemoveDuplicates => Some(PremiumFeature::RemoveDuplicates),
      Command::OrganizeByCategory => Some(PremiumFeature::OrganizeByCategory),
    }
  }

  fn failure_title(self) -> &'static str {
    match self {
      Command::ExtractAll => "Error extracting CSS",
      Command::ExtractSelected => "Error extracting selected CSS",
      Command::RemoveDuplicates => "Error removing duplicates",
      Command::OrganizeByCategory => "Error organizing by category",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
  DocumentUpdated,
  FileCreated(PathBuf),
  /// The command stopped early after telling the user why
  Skipped,
}

/// Everything a command needs from its caller
pub struct CommandContext<'a> {
  pub host: &'a dyn EditorHost,
  pub file_system: FileSystemRef,
  pub capabilities: Capabilities,
  pub config: &'a CssTagConfig,
  /// Date written into extracted file headers
  pub today: NaiveDate,
}

impl CommandContext<'_> {
  /// Runs the license check for premium commands; `false` means stop.
  fn allows(&self, command: Command) -> bool {
    match command.premium_feature() {
      None => true,
      Some(feature) => self.capabilities.validate_premium_feature(
        feature,
        self.host,
        self.config.purchase_url.as_deref(),
      ),
    }
  }

  /// The active document, provided the editor has one in a supported language
  fn validate_editor(&self) -> Result<ActiveDocument, CommandError> {
    let document = self
      .host
      .active_document()
      .ok_or(CommandError::NoActiveDocument)?;

    if !self.config.supports_language(&document.language_id) {
      return Err(CommandError::UnsupportedDocument {
        language_id: document.language_id,
        expected: self.config.languages.clone(),
      });
    }

    Ok(document)
  }

  fn replace_document(&self, document: &ActiveDocument, text: String) -> Result<(), CommandError> {
    let range: Range<usize> = 0..document.text.len();
    self
      .host
      .replace_document_range(range, text)
      .map_err(CommandError::Host)
  }
}

/// Runs `command` and reports any failure to the user.
///
/// Editor state problems are shown as warnings, everything else as an error
/// prefixed with the command's failure title.
#[tracing::instrument(level = "info", skip_all, fields(command = command.id()))]
pub fn execute(
  command: Command,
  context: &CommandContext<'_>,
) -> Result<CommandOutcome, CommandError> {
  let result = match command {
    Command::ExtractAll => extract::extract_all(context),
    Command::ExtractSelected => extract::extract_selected(context),
    Command::RemoveDuplicates => remove_duplicates::remove_duplicates(context),
    Command::OrganizeByCategory => organize::organize_by_category(context),
  };

  if let Err(error) = &result {
    let message = if error.is_warning() {
      tracing::warn!("{error}");
      Message::warning(error.to_string())
    } else {
      tracing::error!("{}: {error:?}", command.failure_title());
      Message::error(format!("{}: {error}", command.failure_title()))
    };
    context.host.show_message(message);
  }

  result
}
