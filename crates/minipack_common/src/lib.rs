mod bundler_options;
mod types;

pub use bundler_options::{
  BundlerOptions, normalized_bundler_options::NormalizedBundlerOptions,
  resolve_options::ResolveOptions,
};

pub use crate::types::{
  asset::Asset,
  module_id::ModuleId,
  output_asset::OutputAsset,
  raw_idx::AssetIdx,
  source::Source,
  source_joiner::SourceJoiner,
  specifier_extractor::{SharedSpecifierExtractor, SpecifierExtractor},
};
