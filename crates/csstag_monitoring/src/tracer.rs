//! This module configures `tracing_subscriber` to write to a log file and,
//! optionally, standard output.
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::anyhow;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::from_env::{optional_var, FromEnvError};

pub const TRACING_MODE_VAR: &str = "CSSTAG_TRACING_MODE";

#[derive(Debug, PartialEq, Eq)]
pub enum TracerMode {
  /// Output the Tracer logs to Stdout
  Stdout,
}

impl TracerMode {
  pub fn from_env() -> Result<Vec<Self>, FromEnvError> {
    let Some(mode) = optional_var(TRACING_MODE_VAR) else {
      return Ok(vec![]);
    };

    let mut tracer_modes = vec![];
    for mode in mode.split(',').map(|s| s.trim()) {
      match mode {
        "stdout" => {
          if !tracer_modes.contains(&Self::Stdout) {
            tracer_modes.push(Self::stdout());
          }
        }
        // The log file is always written
        "file" => {}
        value => {
          return Err(FromEnvError::InvalidKey(
            String::from(TRACING_MODE_VAR),
            anyhow!("Invalid value: {}", value),
          ))
        }
      }
    }

    Ok(tracer_modes)
  }

  /// Default STDOUT configuration
  pub fn stdout() -> Self {
    Self::Stdout
  }
}

pub struct Tracer {
  #[allow(unused)]
  worker_guards: Arc<Mutex<Vec<WorkerGuard>>>,
}

impl Tracer {
  pub fn new(options: &[TracerMode]) -> anyhow::Result<Self> {
    let mut worker_guards = vec![];

    let directory = std::env::temp_dir()
      .join("csstag_trace")
      .to_string_lossy()
      .to_string();
    let file_appender = tracing_appender::rolling::Builder::new()
      .rotation(tracing_appender::rolling::Rotation::DAILY)
      .max_log_files(4)
      .filename_prefix("csstag-tracing")
      .build(&directory)
      .map_err(|err| anyhow!(err))?;
    let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

    let layer = tracing_subscriber::fmt::layer()
      .with_writer(non_blocking)
      .with_span_events(FmtSpan::CLOSE)
      .with_filter(EnvFilter::from_default_env());

    worker_guards.push(worker_guard);

    let stdout_layer = if options
      .iter()
      .any(|mode| matches!(mode, TracerMode::Stdout))
    {
      let (non_blocking, worker_guard) = tracing_appender::non_blocking(std::io::stdout());
      let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(EnvFilter::from_default_env());

      worker_guards.push(worker_guard);

      Some(stdout_layer)
    } else {
      None
    };

    let subscriber = Registry::default().with(layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Self {
      worker_guards: Arc::new(Mutex::new(worker_guards)),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

  #[test]
  fn test_tracing_options_sets_to_none_if_no_mode_is_set() {
    let _guard = TEST_LOCK.lock();
    std::env::remove_var(TRACING_MODE_VAR);
    let options = TracerMode::from_env().unwrap();
    assert!(options.is_empty());
  }

  #[test]
  fn test_tracing_options_sets_to_stdout() {
    let _guard = TEST_LOCK.lock();
    std::env::set_var(TRACING_MODE_VAR, "file, stdout,stdout");
    let options = TracerMode::from_env().unwrap();
    std::env::remove_var(TRACING_MODE_VAR);
    assert_eq!(options, vec![TracerMode::stdout()]);
  }

  #[test]
  fn test_tracing_options_rejects_unknown_mode() {
    let _guard = TEST_LOCK.lock();
    std::env::set_var(TRACING_MODE_VAR, "chrome");
    let result = TracerMode::from_env();
    std::env::remove_var(TRACING_MODE_VAR);
    assert_eq!(
      result.map_err(|err| err.to_string()),
      Err(format!("Invalid value for {TRACING_MODE_VAR}: Invalid value: chrome"))
    );
  }
}
