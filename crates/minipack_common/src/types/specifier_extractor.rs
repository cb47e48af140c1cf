use std::{path::Path, sync::Arc};

use arcstr::ArcStr;

/// Finds the import specifiers a module uses.
///
/// Implementations must return specifiers in source order, keep duplicates and must not try to
/// resolve or validate them.
pub trait SpecifierExtractor: Send + Sync {
  fn extract(&self, source: &str, path: &Path) -> anyhow::Result<Vec<ArcStr>>;
}

impl<F> SpecifierExtractor for F
where
  F: Fn(&str, &Path) -> anyhow::Result<Vec<ArcStr>> + Send + Sync,
{
  fn extract(&self, source: &str, path: &Path) -> anyhow::Result<Vec<ArcStr>> {
    self(source, path)
  }
}

pub type SharedSpecifierExtractor = Arc<dyn SpecifierExtractor>;
