use std::path::Path;

use arcstr::ArcStr;
use minipack_common::SpecifierExtractor;
use oxc::span::SourceType;

use crate::EcmaCompiler;

/// The default extractor, backed by the oxc parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct EcmaSpecifierExtractor;

impl SpecifierExtractor for EcmaSpecifierExtractor {
  fn extract(&self, source: &str, path: &Path) -> anyhow::Result<Vec<ArcStr>> {
    let source_type = SourceType::from_path(path).unwrap_or_default();
    EcmaCompiler::scan_specifiers(source, source_type)
  }
}

#[test]
fn test_extract_uses_file_extension() {
  let extractor = EcmaSpecifierExtractor;
  let specifiers = extractor
    .extract("const b = require('./b.cjs');\nmodule.exports = b;", Path::new("/project/a.cjs"))
    .unwrap();
  assert_eq!(specifiers, [ArcStr::from("./b.cjs")]);
}
