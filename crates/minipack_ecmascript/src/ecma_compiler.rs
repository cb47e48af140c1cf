use arcstr::ArcStr;
use itertools::Itertools;
use oxc::{
  allocator::Allocator,
  ast::ast::{
    Argument, CallExpression, ExportAllDeclaration, ExportNamedDeclaration, Expression,
    ImportDeclaration,
  },
  ast_visit::{Visit, walk},
  parser::Parser,
  span::SourceType,
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source` and returns the specifiers of its static imports, re-exports and
  /// `require("...")` calls, in source order.
  pub fn scan_specifiers(source: &str, source_type: SourceType) -> anyhow::Result<Vec<ArcStr>> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
      // CommonJS code may rely on sloppy mode, give it a second chance as a script.
      if source_type.is_module() {
        if let Ok(specifiers) = Self::scan_specifiers(source, source_type.with_script(true)) {
          return Ok(specifiers);
        }
      }
      let reason = ret.errors.iter().map(ToString::to_string).join("; ");
      return Err(anyhow::anyhow!("Failed to parse: {reason}"));
    }

    let mut collector = SpecifierCollector::default();
    collector.visit_program(&ret.program);
    Ok(collector.specifiers)
  }
}

#[derive(Default)]
struct SpecifierCollector {
  specifiers: Vec<ArcStr>,
}

impl<'a> Visit<'a> for SpecifierCollector {
  fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
    if !it.import_kind.is_type() {
      self.specifiers.push(it.source.value.as_str().into());
    }
    walk::walk_import_declaration(self, it);
  }

  fn visit_export_named_declaration(&mut self, it: &ExportNamedDeclaration<'a>) {
    if let Some(source) = it.source.as_ref().filter(|_| !it.export_kind.is_type()) {
      self.specifiers.push(source.value.as_str().into());
    }
    walk::walk_export_named_declaration(self, it);
  }

  fn visit_export_all_declaration(&mut self, it: &ExportAllDeclaration<'a>) {
    if !it.export_kind.is_type() {
      self.specifiers.push(it.source.value.as_str().into());
    }
    walk::walk_export_all_declaration(self, it);
  }

  fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
    // Only `require("literal")`, computed requests are not statically known.
    if let Expression::Identifier(callee) = &it.callee {
      if callee.name.as_str() == "require" && it.arguments.len() == 1 {
        if let Argument::StringLiteral(request) = &it.arguments[0] {
          self.specifiers.push(request.value.as_str().into());
        }
      }
    }
    walk::walk_call_expression(self, it);
  }
}
