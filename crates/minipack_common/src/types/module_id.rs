use std::path::{Path, PathBuf};

use arcstr::ArcStr;
use sugar_path::SugarPath;

/// `ModuleId` is the canonical path of an asset.
/// - It is the de-duplication key of the whole bundle: two specifiers resolving to the same
///   `ModuleId` share one asset.
/// - It never appears as a cross-reference key in the generated code, `AssetIdx` does.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn as_path(&self) -> &Path {
    Path::new(self.0.as_str())
  }

  /// A representation that is stable across machines: relative to `cwd` and `/`-separated.
  pub fn stabilize(&self, cwd: &Path) -> String {
    if self.as_path().is_absolute() {
      self.as_path().relative(cwd).to_slash_lossy().into_owned()
    } else {
      self.0.to_string()
    }
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl From<&Path> for ModuleId {
  fn from(value: &Path) -> Self {
    Self::new(value.to_string_lossy().as_ref())
  }
}

impl From<ModuleId> for PathBuf {
  fn from(value: ModuleId) -> Self {
    PathBuf::from(value.0.as_str())
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[test]
fn test_stabilize() {
  let cwd = Path::new("/project");
  assert_eq!(ModuleId::new("/project/src/a.js").stabilize(cwd), "src/a.js");
  assert_eq!(ModuleId::new("/other/b.js").stabilize(cwd), "../other/b.js");
  assert_eq!(ModuleId::new("virtual").stabilize(cwd), "virtual");
}
