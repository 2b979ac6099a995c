//!
//! Logger of the client core.
//!

pub use tracing::{debug, error, event as log, info, instrument, trace, warn, Level, Span};

#[doc(inline)]
pub use self::{
    setup::{setup, LoggerGuard},
    types::{Flow, Tag},
};
pub use crate::config::{Log, LogConsole, LogFormat};

mod setup;
pub mod types;
