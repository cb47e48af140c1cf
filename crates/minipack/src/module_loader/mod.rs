pub mod asset_registry;

use std::path::Path;

use minipack_common::{AssetIdx, SpecifierExtractor};
use minipack_error::{BuildError, BuildResult, BuildWarning};
use minipack_fs::FileSystem;
use minipack_resolver::Resolver;
use minipack_utils::indexmap::FxIndexSet;

use crate::{graph::AssetGraph, utils::load_source::load_source};

use self::asset_registry::AssetRegistry;

/// Builds the asset graph of one bundling run by depth-first discovery from the entry.
pub struct ModuleLoader<'a, F: FileSystem> {
  resolver: &'a Resolver<F>,
  extractor: &'a dyn SpecifierExtractor,
  registry: AssetRegistry,
  warnings: Vec<BuildWarning>,
}

#[derive(Debug)]
pub struct ModuleLoaderOutput {
  pub graph: AssetGraph,
  pub warnings: Vec<BuildWarning>,
}

/// An asset whose dependencies are being visited.
struct Frame {
  idx: AssetIdx,
  next_specifier: usize,
}

impl<'a, F: FileSystem> ModuleLoader<'a, F> {
  pub fn new(resolver: &'a Resolver<F>, extractor: &'a dyn SpecifierExtractor) -> Self {
    Self { resolver, extractor, registry: AssetRegistry::default(), warnings: Vec::new() }
  }

  /// Discovers every asset reachable from `entry`.
  ///
  /// Ids are assigned in the order a recursive pre-order traversal would assign them: each new
  /// dependency is fully visited before the next specifier of its importer is looked at. The
  /// traversal keeps its own stack so deep graphs don't overflow the call stack.
  pub fn fetch_all_modules(mut self, entry: &str) -> BuildResult<ModuleLoaderOutput> {
    let resolver = self.resolver;
    let entry_path = resolver.resolve_entry(entry)?;
    let (entry_idx, _) =
      self.registry.get_or_create(&entry_path, |path| load_source(resolver.fs(), path))?;
    self.extract_specifiers(entry_idx)?;

    let mut stack = vec![Frame { idx: entry_idx, next_specifier: 0 }];
    // Mirrors `stack`, used to detect edges pointing back into the current path.
    let mut active = FxIndexSet::from_iter([entry_idx]);

    while let Some(frame) = stack.last_mut() {
      let importer = frame.idx;
      let Some(specifier) =
        self.registry[importer].dependency_specifiers.get(frame.next_specifier).cloned()
      else {
        stack.pop();
        active.pop();
        continue;
      };
      frame.next_specifier += 1;

      // Duplicated specifiers resolve to the same asset, no need to probe the file system again.
      if self.registry[importer].dependency_map.contains_key(specifier.as_str()) {
        continue;
      }

      let resolved = resolver.resolve(&specifier, self.registry[importer].id.as_path())?;
      let (dependency, is_new) =
        self.registry.get_or_create(&resolved, |path| load_source(resolver.fs(), path))?;
      self.registry[importer].dependency_map.insert(specifier, dependency);

      if is_new {
        self.extract_specifiers(dependency)?;
        stack.push(Frame { idx: dependency, next_specifier: 0 });
        active.insert(dependency);
      } else if let Some(start) = active.get_index_of(&dependency) {
        self.warn_circular_dependency(&active, start, dependency);
      }
    }

    let graph = AssetGraph::new(self.registry.into_assets(), entry_idx);
    tracing::debug!(assets = graph.len(), "asset graph built");
    Ok(ModuleLoaderOutput { graph, warnings: self.warnings })
  }

  fn extract_specifiers(&mut self, idx: AssetIdx) -> BuildResult<()> {
    let asset = &mut self.registry[idx];
    let path: &Path = asset.id.as_path();
    let specifiers = self
      .extractor
      .extract(&asset.source, path)
      .map_err(|err| BuildError::extraction(path, err))?;
    tracing::debug!(id = %asset.id, idx = idx.index(), dependencies = specifiers.len(), "discovered");
    asset.dependency_specifiers = specifiers;
    Ok(())
  }

  fn warn_circular_dependency(
    &mut self,
    active: &FxIndexSet<AssetIdx>,
    start: usize,
    dependency: AssetIdx,
  ) {
    let cwd = self.resolver.cwd();
    let cycle = active
      .iter()
      .skip(start)
      .chain(std::iter::once(&dependency))
      .map(|idx| self.registry[*idx].id.stabilize(cwd))
      .collect::<Vec<_>>();
    tracing::debug!(?cycle, "circular dependency");
    self.warnings.push(BuildWarning::CircularDependency { cycle });
  }
}
