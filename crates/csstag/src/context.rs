use std::path::PathBuf;

use csstag_filesystem::FileSystemRef;

#[derive(Debug, Clone)]
pub struct Context {
  pub fs: FileSystemRef,
  pub project_root: PathBuf,
  /// Unlock premium commands regardless of the project config
  pub premium: bool,
}
