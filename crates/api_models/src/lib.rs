#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod credit_cards;
pub mod customers;
pub mod errors;
pub mod payments;
pub mod value_objects;
pub mod webhooks;

mod utils;

pub use utils::DateRange;
