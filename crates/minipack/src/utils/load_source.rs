use std::path::Path;

use arcstr::ArcStr;
use minipack_error::{BuildError, BuildResult};
use minipack_fs::FileSystem;

pub fn load_source(fs: &dyn FileSystem, path: &Path) -> BuildResult<ArcStr> {
  fs.read_to_string(path)
    .map(ArcStr::from)
    .map_err(|source| BuildError::Read { path: path.to_path_buf(), source })
}
