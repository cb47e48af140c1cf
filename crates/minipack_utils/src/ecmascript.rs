use oxc::syntax::{identifier, keyword};

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Whether `name` can be declared with `var name`. Reserved words are identifier names but not
/// bindings.
pub fn is_validate_binding_name(name: &str) -> bool {
  is_validate_identifier_name(name) && !keyword::is_reserved_keyword(name)
}

/// Renders `value` as a double-quoted JS string literal.
pub fn to_js_string_literal(value: &str) -> String {
  // A JSON string is a valid JS string literal except for U+2028/U+2029 in very old engines.
  serde_json::Value::String(value.to_string())
    .to_string()
    .replace('\u{2028}', "\\u2028")
    .replace('\u{2029}', "\\u2029")
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(is_validate_identifier_name("$bundle_1"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("my-lib"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_is_validate_binding_name() {
  assert!(is_validate_binding_name("MyLib"));
  assert!(is_validate_binding_name("classes"));
  assert!(!is_validate_binding_name("class"));
  assert!(!is_validate_binding_name("return"));
  assert!(!is_validate_binding_name("my-lib"));
}

#[test]
fn test_to_js_string_literal() {
  assert_eq!(to_js_string_literal("./b.js"), "\"./b.js\"");
  assert_eq!(to_js_string_literal("./\"quoted\".js"), "\"./\\\"quoted\\\".js\"");
  assert_eq!(to_js_string_literal("a\u{2028}b"), "\"a\\u2028b\"");
}
