use std::path::PathBuf;

/// The single artifact produced by a bundling run.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: PathBuf,
  pub content: String,
}

