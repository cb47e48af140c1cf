#[derive(Default, Debug, Clone)]
pub struct ResolveOptions {
  /// Extensions probed, in order, for specifiers without one. Defaults to `.js`, `.mjs`, `.cjs`.
  pub extensions: Option<Vec<String>>,
}
