use std::path::PathBuf;

use csstag_filesystem::search::find_ancestor_file;
use csstag_filesystem::FileSystemRef;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Key of the csstag section in `package.json`
pub const PACKAGE_JSON_KEY: &str = "cssTagMaster";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Unable to locate {filename} config file from {}", .search_path.display())]
  NotFound {
    filename: String,
    search_path: PathBuf,
  },

  #[error("Unable to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("Error parsing {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CssTagConfig {
  /// Unlocks the premium commands
  pub premium: bool,
  /// Page offered to users hitting a premium command without a license
  pub purchase_url: Option<String>,
  /// Editor language identifiers the commands accept
  pub languages: Vec<String>,
}

impl Default for CssTagConfig {
  fn default() -> Self {
    CssTagConfig {
      premium: false,
      purchase_url: None,
      languages: vec!["css".into(), "scss".into(), "less".into()],
    }
  }
}

#[derive(Deserialize)]
struct PackageJson {
  #[serde(rename = "cssTagMaster")]
  config: Option<CssTagConfig>,
}

impl CssTagConfig {
  /// Reads the `cssTagMaster` section of the closest `package.json`.
  ///
  /// A missing file or section yields the defaults.
  pub fn load(loader: &ConfigLoader) -> Result<Self, ConfigError> {
    match loader.load_package_json::<PackageJson>() {
      Ok(file) => {
        tracing::debug!("Loaded {} from {}", PACKAGE_JSON_KEY, file.path.display());
        Ok(file.contents.config.unwrap_or_default())
      }
      Err(ConfigError::NotFound { .. }) => Ok(CssTagConfig::default()),
      Err(err) => Err(err),
    }
  }

  pub fn supports_language(&self, language_id: &str) -> bool {
    self
      .languages
      .iter()
      .any(|language| language.eq_ignore_ascii_case(language_id))
  }
}

/// Enables config to be loaded from JSON files above a search path
#[derive(Debug)]
pub struct ConfigLoader {
  pub fs: FileSystemRef,
  pub project_root: PathBuf,
  pub search_path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct ConfigFile<T> {
  pub contents: T,
  pub path: PathBuf,
  pub raw: String,
}

impl ConfigLoader {
  pub fn load_json_config<Config: DeserializeOwned>(
    &self,
    filename: &str,
  ) -> Result<ConfigFile<Config>, ConfigError> {
    let path = find_ancestor_file(
      &*self.fs,
      &[filename],
      &self.search_path,
      &self.project_root,
    )
    .ok_or_else(|| ConfigError::NotFound {
      filename: filename.to_string(),
      search_path: self.search_path.clone(),
    })?;

    let code = self
      .fs
      .read_to_string(&path)
      .map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
      })?;

    let contents =
      serde_json::from_str::<Config>(&code).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
      })?;

    Ok(ConfigFile {
      contents,
      path,
      raw: code,
    })
  }

  pub fn load_package_json<Config: DeserializeOwned>(
    &self,
  ) -> Result<ConfigFile<Config>, ConfigError> {
    self.load_json_config::<Config>("package.json")
  }
}
