use minipack_common::OutputAsset;
use minipack_error::BuildWarning;

#[derive(Debug)]
pub struct BundleOutput {
  pub asset: OutputAsset,
  /// Number of modules in the bundle.
  pub module_count: usize,
  pub warnings: Vec<BuildWarning>,
}
