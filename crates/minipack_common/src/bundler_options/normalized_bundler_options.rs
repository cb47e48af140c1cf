use std::path::PathBuf;

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: String,
  /// Always absolute.
  pub cwd: PathBuf,

  // --- Output
  pub name: Option<String>,
  pub entry_filenames: String,
  pub dir: String,
  pub file: Option<String>,

  // --- Resolve
  /// Every extension starts with a `.`.
  pub extensions: Vec<String>,
}
