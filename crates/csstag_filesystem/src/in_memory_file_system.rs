use std::collections::HashMap;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::FileSystem;

#[cfg(not(target_os = "windows"))]
fn root_dir() -> PathBuf {
  PathBuf::from("/")
}

#[cfg(target_os = "windows")]
fn root_dir() -> PathBuf {
  PathBuf::from("C:/")
}

/// In memory implementation of the `FileSystem` trait, for testing purposes.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, Vec<u8>>>,
  current_working_directory: RwLock<PathBuf>,
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: Default::default(),
      current_working_directory: RwLock::new(root_dir()),
    }
  }
}

impl InMemoryFileSystem {
  /// Write a file at path, for test set-up.
  pub fn write_file(&self, path: &Path, contents: String) {
    let path = self.canonicalize_impl(path);
    let mut files = self.files.write();
    files.insert(path, contents.into_bytes());
  }

  /// Paths of every file written so far, sorted
  pub fn file_paths(&self) -> Vec<PathBuf> {
    let files = self.files.read();
    let mut paths: Vec<PathBuf> = files.keys().cloned().collect();
    paths.sort();
    paths
  }

  fn canonicalize_impl(&self, path: &Path) -> PathBuf {
    let cwd = self.current_working_directory.read();
    let mut result = if path.is_absolute() {
      vec![]
    } else {
      cwd.components().collect()
    };

    for component in path.components() {
      match component {
        Component::Prefix(prefix) => {
          result = vec![Component::Prefix(prefix)];
        }
        Component::RootDir => {
          result.push(Component::RootDir);
        }
        Component::CurDir => {}
        Component::ParentDir => {
          result.pop();
        }
        Component::Normal(path) => {
          result.push(Component::Normal(path));
        }
      }
    }

    PathBuf::from_iter(result)
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    Ok(self.current_working_directory.read().clone())
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    let path = self.canonicalize_impl(path);
    let files = self.files.read();
    match files.get(&path) {
      None => Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "File not found",
      )),
      Some(contents) => String::from_utf8(contents.clone())
        .map_err(|_| std::io::Error::other("Unable to read file as string")),
    }
  }

  fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let path = self.canonicalize_impl(path);
    let mut files = self.files.write();
    files.insert(path, contents.to_vec());
    Ok(())
  }

  fn is_file(&self, path: &Path) -> bool {
    let path = self.canonicalize_impl(path);
    let files = self.files.read();
    files.contains_key(&path)
  }
}
