mod bundler;
mod generate_stage;
mod graph;
mod module_loader;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  generate_stage::GenerateStage,
  graph::AssetGraph,
  module_loader::{ModuleLoader, ModuleLoaderOutput, asset_registry::AssetRegistry},
  types::bundle_output::BundleOutput,
};
pub use minipack_common::*;
pub use minipack_ecmascript::EcmaSpecifierExtractor;
pub use minipack_error::{BuildError, BuildResult, BuildWarning};
pub use minipack_fs::{FileSystem, OsFileSystem};
pub use minipack_resolver::{DEFAULT_EXTENSIONS, Resolver};
