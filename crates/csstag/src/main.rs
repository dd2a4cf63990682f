mod cmd;
mod context;
mod file_host;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use csstag_editor::Command;
use csstag_filesystem::os_file_system::OsFileSystem;
use csstag_filesystem::FileSystemRef;
use csstag_monitoring::{close_monitoring, initialize_monitoring, MonitoringOptions};

#[derive(Debug, Subcommand)]
pub enum CssTagCommandType {
  /// Copy every selector block into <name>-extracted-all.css
  ExtractAll(cmd::document::DocumentArgs),
  /// Copy the selector blocks inside a byte range into <name>-extracted-selected.css
  ExtractSelected(cmd::document::SelectionArgs),
  /// Keep only the last declaration of each property in every block (premium)
  RemoveDuplicates(cmd::document::DocumentArgs),
  /// Group the declarations of every block by category (premium)
  Organize(cmd::document::DocumentArgs),
  /// List the editor command ids
  Commands(cmd::list::ListCommand),
}

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CssTagCommand {
  #[clap(subcommand)]
  pub command: CssTagCommandType,
  /// Directory config lookups stop at [default: current directory]
  #[arg(long, global = true, env = "CSSTAG_PROJECT_ROOT")]
  pub project_root: Option<PathBuf>,
  /// Unlock premium commands
  #[arg(long, global = true, env = "CSSTAG_PREMIUM")]
  pub premium: bool,
}

fn main() -> anyhow::Result<ExitCode> {
  initialize_monitoring(MonitoringOptions::from_env()?)?;

  let result = run(CssTagCommand::parse());

  close_monitoring();
  result
}

fn run(args: CssTagCommand) -> anyhow::Result<ExitCode> {
  let fs: FileSystemRef = Arc::new(OsFileSystem);
  let ctx = context::Context {
    project_root: match args.project_root {
      Some(project_root) => project_root,
      None => fs.cwd()?,
    },
    fs,
    premium: args.premium,
  };

  match args.command {
    CssTagCommandType::ExtractAll(cmd) => {
      cmd::document::main(ctx, Command::ExtractAll, cmd, None)
    }
    CssTagCommandType::ExtractSelected(cmd) => cmd::document::main(
      ctx,
      Command::ExtractSelected,
      cmd.document,
      Some(cmd.selection),
    ),
    CssTagCommandType::RemoveDuplicates(cmd) => {
      cmd::document::main(ctx, Command::RemoveDuplicates, cmd, None)
    }
    CssTagCommandType::Organize(cmd) => {
      cmd::document::main(ctx, Command::OrganizeByCategory, cmd, None)
    }
    CssTagCommandType::Commands(cmd) => cmd::list::main(cmd).map(|_| ExitCode::SUCCESS),
  }
}
