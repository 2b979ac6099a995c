use std::sync::Arc;

use api_models::credit_cards::CardTokenizeRequest;
use common_utils::{errors::CustomResult, types::RawInput, wire::ToWire};
use router_env::{instrument, tracing, Flow};
use serde_json::Value;

use crate::{
    api::{self, ConnectorTransport, Endpoint, Method, Payload},
    errors::{ApiError, ValidationResultExt},
};

const TOKENIZE: Endpoint = Endpoint::new(
    Flow::CreditCardTokenize,
    Method::Post,
    "creditCard/tokenizeCreditCard",
    "Credit card",
);

/// `creditCard` resource.
#[derive(Debug, Clone)]
pub struct CreditCardService {
    transport: Arc<dyn ConnectorTransport>,
}

impl CreditCardService {
    pub fn new(transport: Arc<dyn ConnectorTransport>) -> Self {
        Self { transport }
    }

    /// Exchanges card details for a reusable `creditCardToken`.
    #[instrument(skip_all, fields(flow = ?Flow::CreditCardTokenize))]
    pub async fn tokenize(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let request = CardTokenizeRequest::from_map(raw).into_validation_error()?;
        api::execute(
            &*self.transport,
            &TOKENIZE,
            None,
            Payload::Body(request.to_wire()),
        )
        .await
    }
}
