//! Asaas API interfaces
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod api;
pub mod client;
/// Configuration related functionalities
pub mod configs;
/// Constants used throughout the client
pub mod consts;
pub mod errors;
pub mod services;

pub use self::{
    api::{ConnectorTransport, Endpoint, Method, Payload, Request},
    client::AsaasClient,
    configs::{AsaasEnvironment, ClientSettings},
    errors::{ApiError, TransportError},
};
