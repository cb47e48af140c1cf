mod build_error;
mod build_warning;

pub use crate::{build_error::BuildError, build_warning::BuildWarning};

pub type BuildResult<T> = Result<T, BuildError>;
