mod common;

use std::collections::HashSet;

use minipack::{AssetGraph, AssetIdx, BuildError, BuildWarning};
use pretty_assertions::assert_eq;

use common::{ecma_bundler, line_bundler};

fn idx(value: usize) -> AssetIdx {
  AssetIdx::from_usize(value)
}

fn ids(graph: &AssetGraph) -> Vec<(usize, String)> {
  graph.iter().map(|asset| (asset.idx.index(), asset.id.to_string())).collect()
}

fn assert_closed(graph: &AssetGraph) {
  assert!(graph.validate().is_ok());
  for asset in graph.iter() {
    for specifier in &asset.dependency_specifiers {
      let target = asset.resolved_dependency(specifier).expect("every specifier is mapped");
      assert!(graph.get(target).is_some());
    }
  }
}

#[test]
fn single_dependency() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "import \"./b.js\";"),
    ("/project/b.js", "export const b = 1;"),
  ]);
  let output = bundler.scan().unwrap();
  let graph = output.graph;

  assert_eq!(ids(&graph), [(0, "/project/a.js".to_string()), (1, "/project/b.js".to_string())]);
  assert_eq!(graph.entry_idx(), idx(0));
  assert_eq!(graph.entry().resolved_dependency("./b.js"), Some(idx(1)));
  assert!(output.warnings.is_empty());
  assert_closed(&graph);
}

#[test]
fn diamond_dependency_is_shared() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "import \"./b.js\";\nimport \"./c.js\";"),
    ("/project/b.js", "import \"./d.js\";"),
    ("/project/c.js", "import \"./d.js\";"),
    ("/project/d.js", "export default 1;"),
  ]);
  let graph = bundler.scan().unwrap().graph;

  assert_eq!(graph.len(), 4);
  // Pre-order: d is discovered through b before c is looked at.
  assert_eq!(
    ids(&graph),
    [
      (0, "/project/a.js".to_string()),
      (1, "/project/b.js".to_string()),
      (2, "/project/d.js".to_string()),
      (3, "/project/c.js".to_string()),
    ]
  );
  let b = graph.find_by_id("/project/b.js").unwrap();
  let c = graph.find_by_id("/project/c.js").unwrap();
  assert_eq!(b.resolved_dependency("./d.js"), c.resolved_dependency("./d.js"));
  assert_closed(&graph);
}

#[test]
fn different_specifiers_for_the_same_file_share_one_asset() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "require('./lib/util');\nrequire('./lib/../lib/util.js');\nrequire('./lib');"),
    ("/project/lib/util.js", "module.exports = 1;"),
    ("/project/lib/index.js", "module.exports = require('./util.js');"),
  ]);
  let graph = bundler.scan().unwrap().graph;

  assert_eq!(graph.len(), 3);
  let entry = graph.entry();
  assert_eq!(entry.resolved_dependency("./lib/util"), Some(idx(1)));
  assert_eq!(entry.resolved_dependency("./lib/../lib/util.js"), Some(idx(1)));
  assert_eq!(entry.resolved_dependency("./lib"), Some(idx(2)));
  assert_eq!(graph.get(idx(2)).unwrap().resolved_dependency("./util.js"), Some(idx(1)));
}

#[test]
fn duplicated_specifiers_are_preserved() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "const x = require('./b');\nconst y = require('./b');"),
    ("/project/b.js", "module.exports = {};"),
  ]);
  let graph = bundler.scan().unwrap().graph;

  let entry = graph.entry();
  assert_eq!(entry.dependency_specifiers, ["./b", "./b"]);
  assert_eq!(entry.dependency_map.len(), 1);
  assert_eq!(graph.len(), 2);
}

#[test]
fn cycle_terminates_and_warns() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "import './b.js';"),
    ("/project/b.js", "import './a.js';"),
  ]);
  let output = bundler.scan().unwrap();

  assert_eq!(output.graph.len(), 2);
  assert_eq!(output.graph.get(idx(1)).unwrap().resolved_dependency("./a.js"), Some(idx(0)));
  assert_eq!(
    output.warnings,
    [BuildWarning::CircularDependency {
      cycle: vec!["a.js".to_string(), "b.js".to_string(), "a.js".to_string()]
    }]
  );
  assert_closed(&output.graph);
}

#[test]
fn self_import_is_a_cycle() {
  let bundler = line_bundler(&[("/project/a.js", "import ./a.js")]);
  let output = bundler.scan().unwrap();

  assert_eq!(output.graph.len(), 1);
  assert_eq!(output.graph.entry().resolved_dependency("./a.js"), Some(idx(0)));
  assert_eq!(output.warnings.len(), 1);
}

#[test]
fn revisiting_a_finished_asset_is_not_a_cycle() {
  let bundler = line_bundler(&[
    ("/project/a.js", "import ./b.js\nimport ./c.js"),
    ("/project/b.js", "import ./c.js"),
    ("/project/c.js", ""),
  ]);
  let output = bundler.scan().unwrap();

  assert_eq!(output.graph.len(), 3);
  assert!(output.warnings.is_empty());
}

#[test]
fn unresolvable_specifier_fails_the_build() {
  let bundler = ecma_bundler(&[("/project/a.js", "import './missing';")]);
  let err = bundler.scan().unwrap_err();

  match err {
    BuildError::Resolution { specifier, importer } => {
      assert_eq!(specifier, "./missing");
      assert_eq!(importer, std::path::PathBuf::from("/project/a.js"));
    }
    other => panic!("unexpected error: {other}"),
  }
  assert!(bundler.generate().is_err());
}

#[test]
fn unresolvable_entry_fails_the_build() {
  let bundler = ecma_bundler(&[("/project/b.js", "")]);
  assert!(matches!(bundler.scan(), Err(BuildError::UnresolvedEntry { .. })));
}

#[test]
fn syntax_error_fails_with_the_offending_path() {
  let bundler = ecma_bundler(&[
    ("/project/a.js", "import './b.js';"),
    ("/project/b.js", "import { from './c.js'"),
  ]);
  match bundler.scan().unwrap_err() {
    BuildError::Extraction { path, .. } => {
      assert_eq!(path, std::path::PathBuf::from("/project/b.js"));
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn ids_are_contiguous_and_deterministic() {
  let files = [
    ("/project/a.js", "import ./x/one.js\nimport ./two\nimport ./x/one.js"),
    ("/project/x/one.js", "import ../two.js\nimport ./three"),
    ("/project/two.js", "import ./x/three.js"),
    ("/project/x/three.js", "import ../a.js"),
  ];
  let first = ids(&line_bundler(&files).scan().unwrap().graph);
  let second = ids(&line_bundler(&files).scan().unwrap().graph);

  assert_eq!(first, second);
  assert_eq!(
    first,
    [
      (0, "/project/a.js".to_string()),
      (1, "/project/x/one.js".to_string()),
      (2, "/project/two.js".to_string()),
      (3, "/project/x/three.js".to_string()),
    ]
  );
}

#[test]
fn deep_chains_do_not_overflow_the_stack() {
  const DEPTH: usize = 20_000;
  let files = (0..DEPTH)
    .map(|i| {
      let path = if i == 0 { "/project/a.js".to_string() } else { format!("/project/m{i}.js") };
      let content = if i + 1 < DEPTH { format!("import ./m{}.js", i + 1) } else { String::new() };
      (path, content)
    })
    .collect::<Vec<_>>();
  let files = files.iter().map(|(path, content)| (path.as_str(), content.as_str())).collect::<Vec<_>>();

  let graph = line_bundler(&files).scan().unwrap().graph;
  assert_eq!(graph.len(), DEPTH);
  assert_eq!(graph.get(idx(DEPTH - 1)).unwrap().id.to_string(), format!("/project/m{}.js", DEPTH - 1));
}

/// Small deterministic generator, good enough to shuffle graph shapes.
struct XorShift(u64);

impl XorShift {
  fn next(&mut self) -> u64 {
    self.0 ^= self.0 << 13;
    self.0 ^= self.0 >> 7;
    self.0 ^= self.0 << 17;
    self.0
  }

  fn below(&mut self, bound: usize) -> usize {
    usize::try_from(self.next() % bound as u64).unwrap()
  }
}

#[test]
fn random_graphs_are_closed() {
  let mut rng = XorShift(0x2545_f491_4f6c_dd1d);

  for _ in 0..50 {
    let size = 1 + rng.below(25);
    let files = (0..size)
      .map(|i| {
        let path = if i == 0 { "/project/a.js".to_string() } else { format!("/project/n{i}.js") };
        let imports = (0..rng.below(4))
          .map(|_| match rng.below(size) {
            0 => "import ./a.js".to_string(),
            target => format!("import ./n{target}"),
          })
          .collect::<Vec<_>>()
          .join("\n");
        (path, imports)
      })
      .collect::<Vec<_>>();
    let files =
      files.iter().map(|(path, content)| (path.as_str(), content.as_str())).collect::<Vec<_>>();

    let graph = line_bundler(&files).scan().unwrap().graph;
    assert_closed(&graph);
    assert_eq!(graph.entry_idx(), idx(0));
    assert!(graph.len() <= size);

    let paths = graph.iter().map(|asset| asset.id.to_string()).collect::<HashSet<_>>();
    assert_eq!(paths.len(), graph.len());
    for (position, asset) in graph.iter().enumerate() {
      assert_eq!(asset.idx.index(), position);
    }
  }
}
