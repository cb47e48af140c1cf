// Maps import specifiers to canonical file paths.

mod resolver;

pub use crate::resolver::{DEFAULT_EXTENSIONS, Resolver};
