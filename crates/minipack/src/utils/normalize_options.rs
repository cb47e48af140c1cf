use minipack_common::{BundlerOptions, NormalizedBundlerOptions};
use minipack_error::{BuildError, BuildResult};
use minipack_resolver::DEFAULT_EXTENSIONS;
use minipack_utils::ecmascript::is_validate_binding_name;
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: BundlerOptions) -> BuildResult<NormalizedBundlerOptions> {
  let input = raw_options
    .input
    .filter(|input| !input.trim().is_empty())
    .ok_or(BuildError::MissingInput)?;

  let cwd = match raw_options.cwd {
    Some(cwd) => cwd.absolutize(),
    None => std::env::current_dir().map_err(|err| BuildError::InvalidOption {
      option: "cwd",
      reason: format!("failed to get current dir: {err}"),
    })?,
  };

  if let Some(name) = raw_options.name.as_deref() {
    if !is_validate_binding_name(name) {
      Err(BuildError::InvalidOption {
        option: "name",
        reason: format!("{name:?} is not a valid JavaScript variable name"),
      })?;
    }
  }

  let extensions = match raw_options.resolve.and_then(|resolve| resolve.extensions) {
    Some(extensions) => normalize_extensions(extensions)?,
    None => DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
  };

  Ok(NormalizedBundlerOptions {
    input,
    cwd,
    name: raw_options.name,
    entry_filenames: raw_options.entry_filenames.unwrap_or_else(|| "[name].js".to_string()),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    file: raw_options.file,
    extensions,
  })
}

fn normalize_extensions(extensions: Vec<String>) -> BuildResult<Vec<String>> {
  let mut normalized = Vec::with_capacity(extensions.len());
  for extension in extensions {
    let extension = extension.trim();
    if extension.is_empty() || extension == "." {
      Err(BuildError::InvalidOption {
        option: "resolve.extensions",
        reason: "extensions must not be empty".to_string(),
      })?;
    }
    let extension =
      if extension.starts_with('.') { extension.to_string() } else { format!(".{extension}") };
    if !normalized.contains(&extension) {
      normalized.push(extension);
    }
  }

  if normalized.is_empty() {
    Err(BuildError::InvalidOption {
      option: "resolve.extensions",
      reason: "at least one extension is required".to_string(),
    })?;
  }
  Ok(normalized)
}
