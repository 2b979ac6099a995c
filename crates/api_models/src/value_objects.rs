//! Structured value objects nested in payment requests.
//!
//! Each one is built from an untyped map with `from_map`, which checks the required keys,
//! sanitizes, and applies its own rules. Failures are [`InvalidValueObject`] reports tagged
//! with the kind of the value object.

mod callback;
mod discount;
mod fine;
mod interest;
mod split;

use common_utils::errors::{InvalidValueObject, ValueObjectKind};
use error_stack::{report, Report};

pub use self::{
    callback::Callback,
    discount::Discount,
    fine::Fine,
    interest::Interest,
    split::{Split, SplitEntry},
};

fn invalid(kind: ValueObjectKind, message: impl Into<String>) -> Report<InvalidValueObject> {
    report!(InvalidValueObject::new(kind, message))
}
