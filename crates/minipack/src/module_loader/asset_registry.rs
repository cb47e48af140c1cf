use std::{
  ops::{Index, IndexMut},
  path::Path,
};

use arcstr::ArcStr;
use minipack_common::{Asset, AssetIdx, ModuleId};
use minipack_error::BuildResult;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Owns the id counter and the canonical path -> id table of a single bundling run.
///
/// Looking a path up and registering it is one operation behind `&mut self`, so there is exactly
/// one asset per canonical path.
#[derive(Debug, Default)]
pub struct AssetRegistry {
  assets: IndexVec<AssetIdx, Asset>,
  visited: FxHashMap<ModuleId, AssetIdx>,
}

impl AssetRegistry {
  /// Returns the asset registered for `path`, or loads the content with `load` and registers a new
  /// asset under the next id. The flag is `true` for a newly created asset.
  ///
  /// `load` is not called for known paths, and a failing `load` registers nothing.
  pub fn get_or_create(
    &mut self,
    path: &Path,
    load: impl FnOnce(&Path) -> BuildResult<ArcStr>,
  ) -> BuildResult<(AssetIdx, bool)> {
    match self.visited.entry(ModuleId::from(path)) {
      Entry::Occupied(entry) => Ok((*entry.get(), false)),
      Entry::Vacant(entry) => {
        let source = load(path)?;
        let idx = AssetIdx::from_usize(self.assets.len());
        self.assets.push(Asset::new(idx, entry.key().clone(), source));
        entry.insert(idx);
        Ok((idx, true))
      }
    }
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }

  pub fn into_assets(self) -> IndexVec<AssetIdx, Asset> {
    self.assets
  }
}

impl Index<AssetIdx> for AssetRegistry {
  type Output = Asset;

  fn index(&self, idx: AssetIdx) -> &Self::Output {
    &self.assets[idx]
  }
}

impl IndexMut<AssetIdx> for AssetRegistry {
  fn index_mut(&mut self, idx: AssetIdx) -> &mut Self::Output {
    &mut self.assets[idx]
  }
}
