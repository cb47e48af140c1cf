mod ecma_compiler;
mod specifier_extractor;

pub use crate::{ecma_compiler::EcmaCompiler, specifier_extractor::EcmaSpecifierExtractor};
