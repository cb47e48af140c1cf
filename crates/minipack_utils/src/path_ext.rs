use std::{borrow::Cow, ffi::OsStr, path::Path};

use crate::sanitize_file_name::sanitize_file_name;

pub trait PathExt {
  fn representative_file_name(&self) -> Cow<str>;

  /// `representative_file_name` restricted to characters that are safe in any file name.
  fn sanitized_file_name(&self) -> String;
}

impl PathExt for Path {
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy());

    let file_name = match &*file_name {
      // "index": Node.js use `index` as a special name for directory import.
      "index" | "mod" => self
        .parent()
        .and_then(Self::file_stem)
        .map(OsStr::to_string_lossy)
        .map_or(file_name, |parent_dir_name| parent_dir_name),
      _ => file_name,
    };

    file_name
  }

  fn sanitized_file_name(&self) -> String {
    sanitize_file_name(&self.representative_file_name())
  }
}

#[test]
fn test_representative_file_name() {
  let cwd = Path::new(".").join("project");
  let path = cwd.join("src").join("vue.js");
  assert_eq!(path.representative_file_name(), "vue");

  let path = cwd.join("vue").join("index.js");
  assert_eq!(path.representative_file_name(), "vue");

  let path = cwd.join("src").join("my app.entry.js");
  assert_eq!(path.sanitized_file_name(), "my_app_entry");
}
