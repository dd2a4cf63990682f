//! Commands exposed to a host editor.
//!
//! The editor is reached only through [`host::EditorHost`], and files are
//! written through a [`csstag_filesystem::FileSystem`], so every command can
//! run against an in-memory host in tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod license;

pub use commands::{execute, Command, CommandContext, CommandOutcome};
pub use config::{ConfigLoader, CssTagConfig};
pub use error::CommandError;
pub use host::{ActiveDocument, EditorHost, Message, MessageKind};
pub use license::{Capabilities, PremiumFeature};
