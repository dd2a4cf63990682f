use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

#[derive(Default, Debug)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    std::env::current_dir()
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }
}

#[cfg(test)]
mod tests {
  use assert_fs::prelude::*;
  use assert_fs::TempDir;
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn writes_and_reads_back_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.child("styles-extracted-all.css");
    let fs = OsFileSystem;

    fs.write(path.path(), b".a {\n  top: 0;\n}\n").unwrap();

    path.assert(".a {\n  top: 0;\n}\n");
    assert!(fs.is_file(path.path()));
    assert_eq!(
      fs.read_to_string(path.path()).unwrap(),
      ".a {\n  top: 0;\n}\n"
    );
  }

  #[test]
  fn write_fails_when_the_directory_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.child("missing").child("out.css");

    let error = OsFileSystem.write(path.path(), b"").unwrap_err();

    assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
  }
}
