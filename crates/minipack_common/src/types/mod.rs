pub mod asset;
pub mod module_id;
pub mod output_asset;
pub mod raw_idx;
pub mod source;
pub mod source_joiner;
pub mod specifier_extractor;
