use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use csstag_editor::{
  execute, Capabilities, Command, CommandContext, ConfigLoader, CssTagConfig,
};

use crate::context::Context;
use crate::file_host::FileHost;

#[derive(Debug, Parser)]
pub struct DocumentArgs {
  /// Stylesheet to work on
  pub file: PathBuf,
  /// Language id of the file [default: the file extension]
  #[arg(long)]
  pub language: Option<String>,
}

#[derive(Debug, Parser)]
pub struct SelectionArgs {
  #[command(flatten)]
  pub document: DocumentArgs,
  /// Byte range to extract from, written as `start..end`
  #[arg(long, value_parser = parse_selection)]
  pub selection: Range<usize>,
}

pub fn parse_selection(value: &str) -> Result<Range<usize>, String> {
  let (start, end) = value
    .split_once("..")
    .ok_or_else(|| format!("Expected `start..end`, got `{value}`"))?;
  let start = start
    .trim()
    .parse::<usize>()
    .map_err(|err| format!("Invalid selection start `{start}`: {err}"))?;
  let end = end
    .trim()
    .parse::<usize>()
    .map_err(|err| format!("Invalid selection end `{end}`: {err}"))?;

  if start > end {
    return Err(format!("Selection start {start} is after its end {end}"));
  }

  Ok(start..end)
}

/// Runs one editor command against `args.file`.
///
/// Failures were already reported through the host, so they only change the
/// exit code.
pub fn main(
  ctx: Context,
  command: Command,
  args: DocumentArgs,
  selection: Option<Range<usize>>,
) -> anyhow::Result<ExitCode> {
  let path = if args.file.is_absolute() {
    args.file
  } else {
    ctx.fs.cwd()?.join(args.file)
  };

  let host = FileHost::open(ctx.fs.clone(), path.clone(), args.language, selection)?;

  let search_path = path
    .parent()
    .map(PathBuf::from)
    .unwrap_or_else(|| ctx.project_root.clone());
  let config = CssTagConfig::load(&ConfigLoader {
    fs: ctx.fs.clone(),
    project_root: ctx.project_root.clone(),
    search_path,
  })?;

  let context = CommandContext {
    host: &host,
    file_system: ctx.fs.clone(),
    capabilities: Capabilities {
      premium: ctx.premium || config.premium,
    },
    config: &config,
    today: Local::now().date_naive(),
  };

  match execute(command, &context) {
    Ok(outcome) => {
      tracing::debug!(?outcome, "Finished {}", command.id());
      Ok(ExitCode::SUCCESS)
    }
    Err(_) => Ok(ExitCode::FAILURE),
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn parses_selection_ranges() {
    assert_eq!(parse_selection("4..20"), Ok(4..20));
    assert_eq!(parse_selection(" 0 .. 0 "), Ok(0..0));
  }

  #[test]
  fn rejects_malformed_selections() {
    assert_eq!(
      parse_selection("4-20"),
      Err(String::from("Expected `start..end`, got `4-20`"))
    );
    assert_eq!(
      parse_selection("9..3"),
      Err(String::from("Selection start 9 is after its end 3"))
    );
    assert!(parse_selection("a..3").is_err());
  }
}
