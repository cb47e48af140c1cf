pub mod ecmascript;
pub mod indexmap;
pub mod path_ext;
pub mod sanitize_file_name;

/// Concatenates string-like values into a new `String`, allocating exactly once.
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let name = String::from("bundle");
  assert_eq!(concat_string!("var ", name, " = ", "1;"), "var bundle = 1;");
  assert_eq!(concat_string!(), "");
}
