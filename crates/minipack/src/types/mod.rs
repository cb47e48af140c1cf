pub mod bundle_output;

use std::sync::Arc;

use minipack_common::NormalizedBundlerOptions;
use minipack_resolver::Resolver;

pub type SharedResolver<F> = Arc<Resolver<F>>;
pub type SharedOptions = Arc<NormalizedBundlerOptions>;
