#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Personal Identifiable Information protection. Wrapper types and traits for secret management
//! which help ensure card numbers, security codes, contact details and API keys aren't
//! accidentally logged or otherwise exposed.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

mod strategy;

pub use strategy::{ApiKey, Strategy, WithType, WithoutType};
mod abs;
pub use abs::{ExposeInterface, PeekInterface};

mod secret;
pub use secret::Secret;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::SerializableSecret;
