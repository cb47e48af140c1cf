use std::{
  io::{self, Read, Write},
  path::Path,
  sync::Arc,
};

use vfs::{FileSystem as _, MemoryFS, VfsFileType};

use crate::FileSystem;

/// An in-memory file system keyed by absolute, `/`-separated paths.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  fs: Arc<MemoryFS>,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { fs: Arc::new(MemoryFS::new()) }
  }
}

impl MemoryFileSystem {
  pub fn new<P: AsRef<Path>, C: AsRef<str>>(files: impl IntoIterator<Item = (P, C)>) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      // Seeding only happens in tests and embedders' setup code, a failure here is a setup bug.
      fs.add_file(path.as_ref(), content.as_ref()).unwrap_or_else(|err| {
        panic!("Failed to add {:?} to memory file system: {err}", path.as_ref().display())
      });
    }
    fs
  }

  pub fn add_file(&self, path: &Path, content: &str) -> io::Result<()> {
    self.write(path, content.as_bytes())
  }

  fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
    let mut ancestors = dir.ancestors().map(vfs_path).collect::<Vec<_>>();
    ancestors.reverse();
    for ancestor in ancestors {
      // The root of `MemoryFS` is the empty path and always exists.
      if ancestor.is_empty() || ancestor == "/" {
        continue;
      }
      if !self.fs.exists(&ancestor).map_err(into_io_error)? {
        self.fs.create_dir(&ancestor).map_err(into_io_error)?;
      }
    }
    Ok(())
  }
}

impl FileSystem for MemoryFileSystem {
  fn is_file(&self, path: &Path) -> bool {
    self
      .fs
      .metadata(&vfs_path(path))
      .is_ok_and(|meta| matches!(meta.file_type, VfsFileType::File))
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let path = vfs_path(path);
    if !self.fs.exists(&path).map_err(into_io_error)? {
      return Err(io::Error::new(io::ErrorKind::NotFound, format!("{path} does not exist")));
    }
    let mut file = self.fs.open_file(&path).map_err(into_io_error)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      self.create_dir_all(parent)?;
    }
    let mut file = self.fs.create_file(&vfs_path(path)).map_err(into_io_error)?;
    file.write_all(content)?;
    file.flush()
  }
}

fn vfs_path(path: &Path) -> String {
  let path = path.to_string_lossy().replace('\\', "/");
  path.trim_end_matches('/').to_string()
}

#[allow(clippy::needless_pass_by_value)]
fn into_io_error(err: vfs::VfsError) -> io::Error {
  io::Error::other(err.to_string())
}

#[test]
fn test_memory_file_system() {
  use std::path::PathBuf;

  let fs = MemoryFileSystem::new([("/project/src/a.js", "require('./b')")]);
  assert!(fs.is_file(Path::new("/project/src/a.js")));
  assert!(!fs.is_file(Path::new("/project/src")));
  assert!(!fs.is_file(Path::new("/project/src/b.js")));
  assert_eq!(fs.read_to_string(Path::new("/project/src/a.js")).unwrap(), "require('./b')");
  assert!(fs.read_to_string(Path::new("/project/src/b.js")).is_err());

  let out = PathBuf::from("/project/dist/bundle.js");
  fs.write(&out, b"bundle").unwrap();
  assert_eq!(fs.read_to_string(&out).unwrap(), "bundle");
}
