use minipack_common::Asset;
use minipack_utils::{concat_string, ecmascript::to_js_string_literal};

use super::runtime::MODULE_FACTORY_OPEN;

/// Renders one registry entry: `<id>: [<factory>, <specifier map>],`.
pub fn render_asset(asset: &Asset, stable_id: &str) -> String {
  let id = asset.idx.index().to_string();
  let mapping = render_dependency_map(asset);
  let source = neutralize_hashbang(&asset.source);
  let comment = escape_line_comment(stable_id);

  concat_string!(
    "// ",
    comment,
    "\n",
    id,
    ": [",
    MODULE_FACTORY_OPEN,
    "\n",
    source,
    // The source may end with a line comment.
    "\n}, ",
    mapping,
    "],"
  )
}

/// `{"./b.js":1,"./c.js":2}`, in first-occurrence order of the specifiers.
fn render_dependency_map(asset: &Asset) -> String {
  let mut rendered = String::from("{");
  for (index, (specifier, target)) in asset.dependency_map.iter().enumerate() {
    if index > 0 {
      rendered.push(',');
    }
    let key = to_js_string_literal(specifier);
    // A literal `__proto__` key sets the prototype instead of defining a property.
    if specifier.as_str() == "__proto__" {
      rendered.push_str(&concat_string!("[", key, "]"));
    } else {
      rendered.push_str(&key);
    }
    rendered.push(':');
    rendered.push_str(&target.index().to_string());
  }
  rendered.push('}');
  rendered
}

/// A hashbang is only valid at the very start of a script, inside the factory it would be a
/// syntax error.
fn neutralize_hashbang(source: &str) -> String {
  if source.starts_with("#!") {
    concat_string!("//", source)
  } else {
    source.to_string()
  }
}

fn escape_line_comment(text: &str) -> String {
  text
    .replace('\r', "\\r")
    .replace('\n', "\\n")
    .replace('\u{2028}', "\\u2028")
    .replace('\u{2029}', "\\u2029")
}
