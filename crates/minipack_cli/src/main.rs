mod args;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minipack::{BundleOutput, Bundler, BundlerOptions, ResolveOptions};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn print_output(output: &BundleOutput, cwd: &std::path::Path) {
  let filename = output
    .asset
    .filename
    .strip_prefix(cwd)
    .unwrap_or(&output.asset.filename)
    .display()
    .to_string();
  let size = format!("{:.2}", output.asset.content.len() as f64 / 1024.0);

  let dim = Colour::White.dimmed();
  println!(
    "{}{} {}{} kB {}",
    dim.paint("<DIR>/"),
    Colour::Cyan.paint(filename),
    dim.paint("│ size: "),
    size,
    dim.paint(format!("│ modules: {}", output.module_count))
  );
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_env("MINIPACK_LOG"))
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> ExitCode {
  init_tracing();

  let args = Commands::parse();
  let InputArgs { input, cwd, extensions } = args.input;

  let bundler = Bundler::new(BundlerOptions {
    input: Some(input),
    cwd,
    name: args.output.name,
    entry_filenames: args.output.entry_filenames,
    dir: args.output.dir,
    file: args.output.file,
    resolve: Some(ResolveOptions { extensions }),
  });

  let start = Instant::now();
  match bundler.and_then(|bundler| bundler.write().map(|output| (bundler, output))) {
    Ok((bundler, output)) => {
      if !args.enhance.silent {
        for warning in &output.warnings {
          println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }
        print_output(&output, &bundler.options().cwd);

        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(error) => {
      eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      ExitCode::FAILURE
    }
  }
}
