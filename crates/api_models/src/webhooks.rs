use common_enums::{lenient_parse, EventType, SendType};
use common_utils::{
    errors::CustomResult,
    ext_traits::RawInputExt,
    pii::Email,
    sanitize,
    types::RawInput,
    validation,
    wire::{ToWire, WireMap, WireMapBuilder},
};
use error_stack::{report, ResultExt};
use masking::{PeekInterface, Secret};
use serde_json::Value;

use crate::{
    errors::{InvalidRequestData, InvalidWebhookData},
    utils::{self, ValueObjectResultExt},
};

/// Input of `POST webhooks`.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookCreateRequest {
    pub name: String,
    /// HTTPS endpoint receiving the events.
    pub url: String,
    /// Notified when the queue is interrupted.
    pub email: Email,
    pub enabled: bool,
    pub interrupted: bool,
    pub send_type: SendType,
    pub api_version: Option<i64>,
    /// Sent back in the `asaas-access-token` header of every delivery.
    pub auth_token: Option<Secret<String>>,
    pub events: Option<Vec<EventType>>,
}

impl WebhookCreateRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidWebhookData> {
        utils::log_rejection("webhook_create", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidWebhookData> {
        let required = |key: &str| {
            raw.optional_string(key)
                .ok_or_else(|| report!(InvalidWebhookData::missing_field(key)))
        };
        let name = required("name")?;
        let url = required("url")?;
        let email = required("email")?;
        let send_type = required("sendType")?;

        let parsed_url = validation::validate_url(&url)
            .change_context(InvalidWebhookData::rule("Invalid URL"))?;
        validation::validate_https_scheme(&parsed_url)
            .change_context(InvalidWebhookData::rule("URL must use HTTPS protocol"))?;

        let email = email.parse::<Email>().into_invalid_format("email")?;

        let send_type = lenient_parse::<SendType>(&send_type)
            .ok_or_else(|| report!(InvalidWebhookData::rule("Invalid send type")))?;

        let events = utils::nested_list(raw, "events")?
            .filter(|events| !events.is_empty())
            .map(|events| events.iter().map(parse_event).collect::<Result<Vec<_>, _>>())
            .transpose()?;

        Ok(Self {
            name,
            url,
            email,
            enabled: raw.optional_boolean("enabled").unwrap_or(true),
            interrupted: raw.optional_boolean("interrupted").unwrap_or(false),
            send_type,
            api_version: raw.optional_integer("apiVersion"),
            auth_token: raw.optional_string("authToken").map(Secret::new),
            events,
        })
    }
}

fn parse_event(event: &Value) -> CustomResult<EventType, InvalidWebhookData> {
    let code = sanitize::sanitize_string(event).unwrap_or_else(|| event.to_string());
    lenient_parse::<EventType>(&code)
        .ok_or_else(|| report!(InvalidWebhookData::rule(format!("Invalid event {code}"))))
}

impl ToWire for WebhookCreateRequest {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("name", Some(self.name.as_str()))
            .field("url", Some(self.url.as_str()))
            .field("email", Some(&self.email))
            .field("enabled", Some(&self.enabled))
            .field("interrupted", Some(&self.interrupted))
            .field("sendType", Some(&self.send_type))
            .field("apiVersion", self.api_version.as_ref())
            .field(
                "authToken",
                self.auth_token.as_ref().map(|token| token.peek().as_str()),
            )
            .field("events", self.events.as_ref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;
    use test_case::test_case;

    use super::*;
    use crate::errors::ErrorCategory;

    fn webhook() -> RawInput {
        json!({
            "name": "Orders",
            "url": "https://shop.example.com/webhooks/asaas",
            "email": "Ops@Example.com",
            "sendType": "sequentially",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn error_for(input: &RawInput) -> String {
        WebhookCreateRequest::from_map(input)
            .unwrap_err()
            .current_context()
            .to_string()
    }

    #[test]
    fn applies_defaults() {
        let request = WebhookCreateRequest::from_map(&webhook()).unwrap();

        assert!(request.enabled);
        assert!(!request.interrupted);
        assert_eq!(request.send_type, SendType::Sequentially);
        assert_eq!(
            Value::Object(request.to_wire()),
            json!({
                "name": "Orders",
                "url": "https://shop.example.com/webhooks/asaas",
                "email": "ops@example.com",
                "enabled": true,
                "interrupted": false,
                "sendType": "SEQUENTIALLY",
            })
        );
    }

    #[test]
    fn resolves_events_and_masks_token() {
        let mut input = webhook();
        input.insert("events".into(), json!(["payment_created", " PAYMENT_RECEIVED "]));
        input.insert("authToken".into(), json!("s3cr3t-token"));
        input.insert("enabled".into(), json!("false"));
        input.insert("apiVersion".into(), json!(3));

        let request = WebhookCreateRequest::from_map(&input).unwrap();
        let wire = request.to_wire();

        assert_eq!(
            wire.get("events"),
            Some(&json!(["PAYMENT_CREATED", "PAYMENT_RECEIVED"]))
        );
        assert_eq!(wire.get("authToken"), Some(&json!("s3cr3t-token")));
        assert_eq!(wire.get("enabled"), Some(&json!(false)));
        assert_eq!(wire.get("apiVersion"), Some(&json!(3)));
        assert!(!format!("{request:?}").contains("s3cr3t-token"));
    }

    #[test_case("name" ; "name")]
    #[test_case("url" ; "url")]
    #[test_case("email" ; "email")]
    #[test_case("sendType" ; "send type")]
    fn requires(field: &str) {
        let mut input = webhook();
        input.remove(field);

        let error = WebhookCreateRequest::from_map(&input).unwrap_err();
        assert_eq!(error.current_context().category(), ErrorCategory::MissingField);
        assert_eq!(error.current_context().field(), Some(field));
    }

    #[test_case("url", json!("not a url"), "Invalid URL" ; "malformed url")]
    #[test_case("url", json!("http://shop.example.com"), "URL must use HTTPS protocol" ; "plain http")]
    #[test_case("email", json!("ops"), "Invalid format for 'email': Invalid email address: ops" ; "bad email")]
    #[test_case("sendType", json!("whenever"), "Invalid send type" ; "bad send type")]
    #[test_case("events", json!(["PAYMENT_CREATED", "PAYMENT_EXPLODED"]), "Invalid event PAYMENT_EXPLODED" ; "unknown event")]
    #[test_case("events", json!("PAYMENT_CREATED"), "Field 'events' has invalid format." ; "events not a list")]
    fn rejects(field: &str, value: Value, expected: &str) {
        let mut input = webhook();
        input.insert(field.into(), value);

        assert_eq!(error_for(&input), expected);
    }
}
