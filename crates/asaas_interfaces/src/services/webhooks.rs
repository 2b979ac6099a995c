use std::sync::Arc;

use api_models::webhooks::WebhookCreateRequest;
use common_utils::{errors::CustomResult, types::RawInput, wire::ToWire};
use router_env::{instrument, tracing, Flow};
use serde_json::Value;

use crate::{
    api::{self, ConnectorTransport, Endpoint, Method, Payload},
    errors::{ApiError, ValidationResultExt},
};

const RESOURCE: &str = "Webhook";

const CREATE: Endpoint = Endpoint::new(Flow::WebhookCreate, Method::Post, "webhooks", RESOURCE);
const RETRIEVE: Endpoint =
    Endpoint::new(Flow::WebhookRetrieve, Method::Get, "webhooks/{id}", RESOURCE);
const DELETE: Endpoint =
    Endpoint::new(Flow::WebhookDelete, Method::Delete, "webhooks/{id}", RESOURCE);

/// `webhooks` resource.
#[derive(Debug, Clone)]
pub struct WebhookService {
    transport: Arc<dyn ConnectorTransport>,
}

impl WebhookService {
    pub fn new(transport: Arc<dyn ConnectorTransport>) -> Self {
        Self { transport }
    }

    #[instrument(skip_all, fields(flow = ?Flow::WebhookCreate))]
    pub async fn create(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let request = WebhookCreateRequest::from_map(raw).into_validation_error()?;
        api::execute(&*self.transport, &CREATE, None, Payload::Body(request.to_wire())).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::WebhookRetrieve))]
    pub async fn get(&self, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, &RETRIEVE, Some(id), Payload::Empty).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::WebhookDelete))]
    pub async fn delete(&self, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, &DELETE, Some(id), Payload::Empty).await
    }
}
