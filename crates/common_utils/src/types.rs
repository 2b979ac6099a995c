//! Types that can be used in other crates

/// Untyped key/value input handed over by the caller.
pub type RawInput = serde_json::Map<String, serde_json::Value>;

/// Round a monetary amount to cents, half away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
