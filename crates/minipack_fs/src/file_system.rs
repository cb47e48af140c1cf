use std::{io, path::Path};

/// File-system access needed by the bundler. Resolution only probes, loading only reads and the
/// final write step is the sole mutation.
pub trait FileSystem: Send + Sync {
  /// Whether `path` points to an existing regular file.
  fn is_file(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Writes `content` to `path`, creating missing parent directories.
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}
