use common_utils::{
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::RawInput,
    validation,
    wire::{ToWire, WireMap, WireMapBuilder},
};
use error_stack::ResultExt;

use super::invalid;

/// Where the checkout sends the payer after a successful payment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Callback {
    success_url: String,
    auto_redirect: bool,
}

impl Callback {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        let Some(success_url) = raw.optional_string("successUrl") else {
            return Err(invalid(ValueObjectKind::Callback, "successUrl is required"));
        };

        let url = validation::validate_url(&success_url).change_context(InvalidValueObject::new(
            ValueObjectKind::Callback,
            "Invalid success URL",
        ))?;

        validation::validate_https_scheme(&url).change_context(InvalidValueObject::new(
            ValueObjectKind::Callback,
            "Success URL must use HTTPS protocol",
        ))?;

        Ok(Self {
            success_url,
            auto_redirect: raw.optional_boolean("autoRedirect").unwrap_or(true),
        })
    }

    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    pub fn auto_redirect(&self) -> bool {
        self.auto_redirect
    }
}

impl ToWire for Callback {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("successUrl", Some(self.success_url.as_str()))
            .field("autoRedirect", Some(&self.auto_redirect))
            .build()
    }
}
