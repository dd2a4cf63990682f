use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// Finds the closest ancestor directory of `from` holding one of `filenames`.
///
/// The walk stops after checking `root`; files above it are not returned.
pub fn find_ancestor_file<P: AsRef<Path>>(
  fs: &dyn FileSystem,
  filenames: &[&str],
  from: P,
  root: P,
) -> Option<PathBuf> {
  let root = root.as_ref();

  for directory in from.as_ref().ancestors() {
    for filename in filenames {
      let candidate = directory.join(filename);
      if fs.is_file(&candidate) {
        return Some(candidate);
      }
    }

    if directory == root {
      break;
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::in_memory_file_system::InMemoryFileSystem;

  #[test]
  fn finds_closest_file() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(Path::new("/project/package.json"), "{}".into());
    fs.write_file(Path::new("/project/app/package.json"), "{}".into());

    assert_eq!(
      find_ancestor_file(
        &fs,
        &["package.json"],
        Path::new("/project/app/styles"),
        Path::new("/project")
      ),
      Some(PathBuf::from("/project/app/package.json"))
    );
  }

  #[test]
  fn stops_at_root() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(Path::new("/package.json"), "{}".into());

    assert_eq!(
      find_ancestor_file(
        &fs,
        &["package.json"],
        Path::new("/project/app"),
        Path::new("/project")
      ),
      None
    );
  }
}
