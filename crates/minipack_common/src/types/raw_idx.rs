oxc_index::define_index_type! {
  /// Identity of a discovered asset. Allocated in discovery order, starting at 0.
  #[derive(Default)]
  pub struct AssetIdx = u32;
}
