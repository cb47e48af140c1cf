use std::fmt::Display;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
  /// Modules listed in import order, starting and ending with the same module.
  CircularDependency { cycle: Vec<String> },
}

impl Display for BuildWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CircularDependency { cycle } => {
        write!(f, "Circular dependency: {}", cycle.iter().join(" -> "))
      }
    }
  }
}

#[test]
fn test_display_circular_dependency() {
  let warning = BuildWarning::CircularDependency {
    cycle: vec!["a.js".to_string(), "b.js".to_string(), "a.js".to_string()],
  };
  assert_eq!(warning.to_string(), "Circular dependency: a.js -> b.js -> a.js");
}
