use minipack_common::{Asset, AssetIdx};
use minipack_error::{BuildError, BuildResult};
use oxc_index::IndexVec;
use rustc_hash::FxHashSet;

/// Result of the scan stage. Immutable once built.
#[derive(Debug)]
pub struct AssetGraph {
  assets: IndexVec<AssetIdx, Asset>,
  entry: AssetIdx,
}

impl AssetGraph {
  pub fn new(assets: IndexVec<AssetIdx, Asset>, entry: AssetIdx) -> Self {
    Self { assets, entry }
  }

  pub fn entry_idx(&self) -> AssetIdx {
    self.entry
  }

  pub fn entry(&self) -> &Asset {
    &self.assets[self.entry]
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }

  pub fn get(&self, idx: AssetIdx) -> Option<&Asset> {
    self.assets.get(idx)
  }

  /// Assets in ascending id order.
  pub fn iter(&self) -> impl Iterator<Item = &Asset> + '_ {
    self.assets.iter()
  }

  /// Finds an asset by its canonical path.
  pub fn find_by_id(&self, id: &str) -> Option<&Asset> {
    self.assets.iter().find(|asset| &*asset.id == id)
  }

  /// Checks that ids are contiguous, canonical paths unique and that every specifier of every
  /// asset maps to an asset of this graph.
  pub fn validate(&self) -> BuildResult<()> {
    if self.assets.get(self.entry).is_none() {
      return Err(invariant_violation(format!("entry {} is not in the graph", self.entry.index())));
    }

    let mut seen_ids = FxHashSet::default();
    for (idx, asset) in self.assets.iter_enumerated() {
      if asset.idx != idx {
        return Err(invariant_violation(format!(
          "{} is stored at {} but has id {}",
          asset.id,
          idx.index(),
          asset.idx.index()
        )));
      }
      if !seen_ids.insert(&asset.id) {
        return Err(invariant_violation(format!("{} is registered more than once", asset.id)));
      }
      if let Some(specifier) = asset.unresolved_specifiers().next() {
        return Err(invariant_violation(format!(
          "{specifier:?} imported by {} is not mapped to any asset",
          asset.id
        )));
      }
      if let Some((specifier, target)) =
        asset.dependency_map.iter().find(|(_, target)| self.assets.get(**target).is_none())
      {
        return Err(invariant_violation(format!(
          "{specifier:?} imported by {} points to missing asset {}",
          asset.id,
          target.index()
        )));
      }
    }

    Ok(())
  }
}

fn invariant_violation(message: String) -> BuildError {
  BuildError::InvariantViolation(message)
}
