pub mod normalized_bundler_options;
pub mod resolve_options;

use std::path::PathBuf;

use crate::ResolveOptions;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  /// Path of the entry module, relative to `cwd` or absolute.
  pub input: Option<String>,
  pub cwd: Option<PathBuf>,

  // --- Output
  /// Expose the entry's exports as a global variable with this name.
  pub name: Option<String>,
  pub entry_filenames: Option<String>,
  pub dir: Option<String>,
  pub file: Option<String>,

  // --- Resolve
  pub resolve: Option<ResolveOptions>,
}
