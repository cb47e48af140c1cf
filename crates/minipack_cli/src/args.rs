use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Entry module, relative to `--cwd`.
  pub input: String,

  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Extensions probed for specifiers without one, e.g. `.js,.mjs`.
  #[clap(long, value_delimiter = ',')]
  pub extensions: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long, short = 'o')]
  pub file: Option<String>,

  #[clap(long)]
  pub entry_filenames: Option<String>,

  /// Expose the entry's exports as a global variable.
  #[clap(long)]
  pub name: Option<String>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  /// Only print errors.
  #[clap(long, short = 's')]
  pub silent: bool,
}
