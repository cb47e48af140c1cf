mod render_asset;
mod runtime;

use minipack_common::{NormalizedBundlerOptions, SourceJoiner};
use minipack_error::BuildResult;
use minipack_utils::concat_string;

use crate::graph::AssetGraph;

use self::{render_asset::render_asset, runtime::RUNTIME_PRELUDE};

/// Turns a closed asset graph into the text of a single self-executing bundle.
///
/// The output only depends on the graph and the options, assets are emitted in ascending id order.
pub struct GenerateStage<'a> {
  graph: &'a AssetGraph,
  options: &'a NormalizedBundlerOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(graph: &'a AssetGraph, options: &'a NormalizedBundlerOptions) -> Self {
    Self { graph, options }
  }

  pub fn generate(&self) -> BuildResult<String> {
    let _span = tracing::debug_span!("generate").entered();
    self.graph.validate()?;

    let mut source_joiner = SourceJoiner::default();

    match self.options.name.as_deref() {
      Some(name) => source_joiner.append_source(concat_string!("var ", name, " = ", RUNTIME_PRELUDE)),
      None => source_joiner.append_source(RUNTIME_PRELUDE),
    }

    let entry = self.graph.entry_idx().index().to_string();
    source_joiner.append_source(concat_string!("  return load(", entry, ");\n})({"));

    for asset in self.graph.iter() {
      source_joiner.append_source(render_asset(asset, &asset.id.stabilize(&self.options.cwd)));
    }

    source_joiner.append_source("});\n");

    Ok(source_joiner.join())
  }
}
