use std::{path::PathBuf, sync::Arc};

use minipack_common::{BundlerOptions, OutputAsset, SharedSpecifierExtractor};
use minipack_ecmascript::EcmaSpecifierExtractor;
use minipack_error::{BuildError, BuildResult};
use minipack_fs::{FileSystem, OsFileSystem};
use minipack_resolver::Resolver;
use minipack_utils::path_ext::PathExt;

use crate::{
  generate_stage::GenerateStage,
  module_loader::{ModuleLoader, ModuleLoaderOutput},
  types::{SharedOptions, SharedResolver, bundle_output::BundleOutput},
  utils::normalize_options::normalize_options,
};

pub struct Bundler<F: FileSystem = OsFileSystem> {
  pub(crate) options: SharedOptions,
  pub(crate) resolver: SharedResolver<F>,
  pub(crate) extractor: SharedSpecifierExtractor,
}

impl Bundler {
  /// A bundler reading from disk and extracting specifiers with the oxc parser.
  pub fn new(options: BundlerOptions) -> BuildResult<Self> {
    Self::with_collaborators(options, OsFileSystem, Arc::new(EcmaSpecifierExtractor))
  }
}

impl<F: FileSystem> Bundler<F> {
  pub fn with_collaborators(
    options: BundlerOptions,
    fs: F,
    extractor: SharedSpecifierExtractor,
  ) -> BuildResult<Self> {
    let options = normalize_options(options)?;
    let resolver: SharedResolver<F> =
      Resolver::new(options.cwd.clone(), options.extensions.clone(), fs).into();

    Ok(Bundler { options: Arc::new(options), resolver, extractor })
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  /// Discovers every asset reachable from the entry.
  pub fn scan(&self) -> BuildResult<ModuleLoaderOutput> {
    let _span = tracing::debug_span!("scan", input = %self.options.input).entered();
    ModuleLoader::new(&self.resolver, self.extractor.as_ref())
      .fetch_all_modules(&self.options.input)
  }

  /// Builds the bundle in memory.
  pub fn generate(&self) -> BuildResult<BundleOutput> {
    let ModuleLoaderOutput { graph, warnings } = self.scan()?;
    let content = GenerateStage::new(&graph, &self.options).generate()?;
    let filename = self.output_filename(&graph.entry().id.as_path().sanitized_file_name());

    Ok(BundleOutput {
      asset: OutputAsset { filename, content },
      module_count: graph.len(),
      warnings,
    })
  }

  /// Builds the bundle and writes it to the output location.
  pub fn write(&self) -> BuildResult<BundleOutput> {
    let output = self.generate()?;
    let OutputAsset { filename, content } = &output.asset;
    self
      .resolver
      .fs()
      .write(filename, content.as_bytes())
      .map_err(|source| BuildError::Write { path: filename.clone(), source })?;
    tracing::debug!(filename = %filename.display(), bytes = content.len(), "bundle written");
    Ok(output)
  }

  fn output_filename(&self, entry_name: &str) -> PathBuf {
    match &self.options.file {
      Some(file) => self.options.cwd.join(file),
      None => self
        .options
        .cwd
        .join(&self.options.dir)
        .join(self.options.entry_filenames.replace("[name]", entry_name)),
    }
  }
}
