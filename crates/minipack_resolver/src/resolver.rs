use std::path::{Path, PathBuf};

use minipack_error::{BuildError, BuildResult};
use minipack_fs::{FileSystem, OsFileSystem};
use sugar_path::SugarPath;

pub const DEFAULT_EXTENSIONS: [&str; 3] = [".js", ".mjs", ".cjs"];

/// Resolves specifiers relative to the directory of the importing module.
///
/// - `.` and `..` segments are normalized away.
/// - A path without an extension is completed by probing `extensions` in order, then
///   `index` + each extension inside a directory of that name.
/// - A path with an extension is used as-is when it exists, otherwise extensions are appended
///   (`./foo.config` -> `./foo.config.js`).
/// - `.`, `..` and specifiers ending in `/`, `/.` or `/..` name a directory and only probe its
///   `index` files.
#[derive(Debug)]
pub struct Resolver<F: FileSystem = OsFileSystem> {
  cwd: PathBuf,
  extensions: Vec<String>,
  fs: F,
}

impl<F: FileSystem> Resolver<F> {
  pub fn new(cwd: PathBuf, extensions: Vec<String>, fs: F) -> Self {
    Self { cwd, extensions, fs }
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn fs(&self) -> &F {
    &self.fs
  }

  /// Resolves the user supplied entry, relative to `cwd`.
  pub fn resolve_entry(&self, specifier: &str) -> BuildResult<PathBuf> {
    self.resolve_in_dir(&self.cwd, specifier).ok_or_else(|| BuildError::UnresolvedEntry {
      specifier: specifier.to_string(),
      cwd: self.cwd.clone(),
    })
  }

  /// Resolves `specifier` as written in the module at `importer`, which must be a canonical path.
  pub fn resolve(&self, specifier: &str, importer: &Path) -> BuildResult<PathBuf> {
    let dir = importer
      .parent()
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path());

    self.resolve_in_dir(dir, specifier).ok_or_else(|| BuildError::Resolution {
      specifier: specifier.to_string(),
      importer: importer.to_path_buf(),
    })
  }

  fn resolve_in_dir(&self, dir: &Path, specifier: &str) -> Option<PathBuf> {
    let path = dir.join(specifier).normalize();

    let resolved = if is_directory_specifier(specifier) {
      self.probe_extensions(&path.join("index"))
    } else {
      let has_extension = path.extension().is_some();
      if has_extension && self.fs.is_file(&path) {
        tracing::trace!(specifier, resolved = %path.display(), "resolved");
        return Some(path);
      }

      self.probe_extensions(&path).or_else(|| {
        if has_extension { None } else { self.probe_extensions(&path.join("index")) }
      })
    };

    match &resolved {
      Some(resolved) => tracing::trace!(specifier, resolved = %resolved.display(), "resolved"),
      None => tracing::trace!(specifier, dir = %dir.display(), "unresolved"),
    }
    resolved
  }

  fn probe_extensions(&self, path: &Path) -> Option<PathBuf> {
    self.extensions.iter().find_map(|ext| {
      let mut candidate = path.as_os_str().to_os_string();
      candidate.push(ext);
      let candidate = PathBuf::from(candidate);
      self.fs.is_file(&candidate).then_some(candidate)
    })
  }
}

fn is_directory_specifier(specifier: &str) -> bool {
  matches!(specifier, "." | "..")
    || specifier.ends_with('/')
    || specifier.ends_with("/.")
    || specifier.ends_with("/..")
}
