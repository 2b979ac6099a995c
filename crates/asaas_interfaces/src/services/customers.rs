use std::sync::Arc;

use api_models::customers::{CustomerCreateRequest, CustomerListRequest, CustomerUpdateRequest};
use common_utils::{errors::CustomResult, types::RawInput, wire::ToWire};
use router_env::{instrument, tracing, Flow};
use serde_json::Value;

use crate::{
    api::{self, ConnectorTransport, Endpoint, Method, Payload},
    errors::{ApiError, ValidationResultExt},
};

const RESOURCE: &str = "Customer";

const CREATE: Endpoint = Endpoint::new(Flow::CustomerCreate, Method::Post, "customers", RESOURCE);
const LIST: Endpoint = Endpoint::new(Flow::CustomerList, Method::Get, "customers", RESOURCE);
const RETRIEVE: Endpoint =
    Endpoint::new(Flow::CustomerRetrieve, Method::Get, "customers/{id}", RESOURCE);
const UPDATE: Endpoint =
    Endpoint::new(Flow::CustomerUpdate, Method::Put, "customers/{id}", RESOURCE);
const DELETE: Endpoint =
    Endpoint::new(Flow::CustomerDelete, Method::Delete, "customers/{id}", RESOURCE);
const RESTORE: Endpoint = Endpoint::new(
    Flow::CustomerRestore,
    Method::Post,
    "customers/{id}/restore",
    RESOURCE,
);

/// `customers` resource.
#[derive(Debug, Clone)]
pub struct CustomerService {
    transport: Arc<dyn ConnectorTransport>,
}

impl CustomerService {
    pub fn new(transport: Arc<dyn ConnectorTransport>) -> Self {
        Self { transport }
    }

    #[instrument(skip_all, fields(flow = ?Flow::CustomerCreate))]
    pub async fn create(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let request = CustomerCreateRequest::from_map(raw).into_validation_error()?;
        api::execute(&*self.transport, &CREATE, None, Payload::Body(request.to_wire())).await
    }

    /// Invalid filters are dropped rather than rejected.
    #[instrument(skip_all, fields(flow = ?Flow::CustomerList))]
    pub async fn list(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let filters = CustomerListRequest::from_map(raw);
        api::execute(&*self.transport, &LIST, None, Payload::Query(filters.to_wire())).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::CustomerRetrieve))]
    pub async fn get(&self, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, &RETRIEVE, Some(id), Payload::Empty).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::CustomerUpdate))]
    pub async fn update(&self, id: &str, raw: &RawInput) -> CustomResult<Value, ApiError> {
        UPDATE.render_path(Some(id))?;
        let request = CustomerUpdateRequest::from_map(raw).into_validation_error()?;
        api::execute(
            &*self.transport,
            &UPDATE,
            Some(id),
            Payload::Body(request.to_wire()),
        )
        .await
    }

    #[instrument(skip_all, fields(flow = ?Flow::CustomerDelete))]
    pub async fn delete(&self, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, &DELETE, Some(id), Payload::Empty).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::CustomerRestore))]
    pub async fn restore(&self, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, &RESTORE, Some(id), Payload::Empty).await
    }
}
