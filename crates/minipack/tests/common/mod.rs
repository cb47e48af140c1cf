#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use arcstr::ArcStr;
use minipack::{Bundler, BundlerOptions, EcmaSpecifierExtractor, SharedSpecifierExtractor};
use minipack_fs::MemoryFileSystem;

pub const CWD: &str = "/project";

/// Treats every line of the form `import <specifier>` as a dependency. Keeps synthetic graphs
/// independent from JavaScript syntax.
pub fn line_extractor() -> SharedSpecifierExtractor {
  Arc::new(|source: &str, _: &Path| -> anyhow::Result<Vec<ArcStr>> {
    Ok(
      source
        .lines()
        .filter_map(|line| line.strip_prefix("import "))
        .map(|specifier| ArcStr::from(specifier.trim()))
        .collect(),
    )
  })
}

pub fn options(input: &str) -> BundlerOptions {
  BundlerOptions {
    input: Some(input.to_string()),
    cwd: Some(CWD.into()),
    ..Default::default()
  }
}

pub fn bundler_with(
  files: &[(&str, &str)],
  options: BundlerOptions,
  extractor: SharedSpecifierExtractor,
) -> (Bundler<MemoryFileSystem>, MemoryFileSystem) {
  let fs = MemoryFileSystem::new(files.iter().copied());
  let bundler = Bundler::with_collaborators(options, fs.clone(), extractor).unwrap();
  (bundler, fs)
}

/// A bundler over `files` using the oxc based extractor and the entry `a.js`.
pub fn ecma_bundler(files: &[(&str, &str)]) -> Bundler<MemoryFileSystem> {
  bundler_with(files, options("a.js"), Arc::new(EcmaSpecifierExtractor)).0
}

/// A bundler over `files` using [`line_extractor`] and the entry `a.js`.
pub fn line_bundler(files: &[(&str, &str)]) -> Bundler<MemoryFileSystem> {
  bundler_with(files, options("a.js"), line_extractor()).0
}
