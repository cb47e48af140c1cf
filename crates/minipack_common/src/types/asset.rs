use arcstr::ArcStr;
use minipack_utils::indexmap::FxIndexMap;

use crate::{AssetIdx, ModuleId};

/// One discovered source file plus its resolved dependency metadata.
#[derive(Debug)]
pub struct Asset {
  pub idx: AssetIdx,
  /// Canonical path.
  pub id: ModuleId,
  /// Original source text. It is emitted unchanged.
  pub source: ArcStr,
  /// Raw specifiers in source order, duplicates preserved.
  pub dependency_specifiers: Vec<ArcStr>,
  /// Raw specifier -> resolved asset. Ordered by first occurrence in `dependency_specifiers`.
  pub dependency_map: FxIndexMap<ArcStr, AssetIdx>,
}

impl Asset {
  pub fn new(idx: AssetIdx, id: ModuleId, source: ArcStr) -> Self {
    Self {
      idx,
      id,
      source,
      dependency_specifiers: Vec::new(),
      dependency_map: FxIndexMap::default(),
    }
  }

  pub fn resolved_dependency(&self, specifier: &str) -> Option<AssetIdx> {
    self.dependency_map.get(specifier).copied()
  }

  /// Specifiers that have not been mapped to an asset yet.
  pub fn unresolved_specifiers(&self) -> impl Iterator<Item = &ArcStr> + '_ {
    self
      .dependency_specifiers
      .iter()
      .filter(|specifier| !self.dependency_map.contains_key(specifier.as_str()))
  }
}
