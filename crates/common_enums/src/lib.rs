#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod domain;
pub mod enums;
pub mod errors;

pub use domain::{all_variants, lenient_parse, options_map, strict_parse, DomainEnum};
pub use enums::*;
