use std::{io, path::PathBuf};

/// Every failure aborts the whole run. There is no partial bundle.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
  #[error("You must supply options.input to minipack")]
  MissingInput,

  #[error("Invalid option `{option}`: {reason}")]
  InvalidOption { option: &'static str, reason: String },

  #[error("Could not resolve entry module \"{specifier}\" from {}", .cwd.display())]
  UnresolvedEntry { specifier: String, cwd: PathBuf },

  #[error("Could not resolve \"{specifier}\" from {}", .importer.display())]
  Resolution { specifier: String, importer: PathBuf },

  #[error("Failed to read {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to extract import specifiers from {}: {source}", .path.display())]
  Extraction {
    path: PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("Failed to write {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The asset graph handed to the generator is not closed. This is a bug in the graph builder.
  #[error("Invariant violation: {0}")]
  InvariantViolation(String),
}

impl BuildError {
  pub fn extraction(path: impl Into<PathBuf>, error: anyhow::Error) -> Self {
    Self::Extraction { path: path.into(), source: error.into() }
  }

  pub fn is_resolution_error(&self) -> bool {
    matches!(self, Self::Resolution { .. } | Self::UnresolvedEntry { .. })
  }
}

#[test]
fn test_resolution_error_names_specifier_and_importer() {
  let err = BuildError::Resolution {
    specifier: "./missing".to_string(),
    importer: PathBuf::from("/project/a.js"),
  };
  assert!(err.is_resolution_error());
  assert_eq!(err.to_string(), "Could not resolve \"./missing\" from /project/a.js");
}

#[test]
fn test_extraction_error_keeps_source() {
  use std::error::Error;

  let err = BuildError::extraction("/project/a.js", anyhow::anyhow!("Unexpected token"));
  assert!(!err.is_resolution_error());
  assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("Unexpected token"));
}
