use std::sync::Arc;

use api_models::payments::{
    PaymentListConstraints, PaymentsChargeWithCardRequest, PaymentsCreateRequest,
    PaymentsUpdateRequest,
};
use common_utils::{errors::CustomResult, types::RawInput, wire::ToWire};
use router_env::{instrument, tracing, Flow};
use serde_json::Value;

use crate::{
    api::{self, ConnectorTransport, Endpoint, Method, Payload},
    errors::{ApiError, ValidationResultExt},
};

const RESOURCE: &str = "Payment";

const CREATE: Endpoint = Endpoint::new(Flow::PaymentCreate, Method::Post, "payments", RESOURCE);
const LIST: Endpoint = Endpoint::new(Flow::PaymentList, Method::Get, "payments", RESOURCE);
const RETRIEVE: Endpoint =
    Endpoint::new(Flow::PaymentRetrieve, Method::Get, "payments/{id}", RESOURCE);
const UPDATE: Endpoint = Endpoint::new(Flow::PaymentUpdate, Method::Put, "payments/{id}", RESOURCE);
const DELETE: Endpoint =
    Endpoint::new(Flow::PaymentDelete, Method::Delete, "payments/{id}", RESOURCE);
const RESTORE: Endpoint = Endpoint::new(
    Flow::PaymentRestore,
    Method::Post,
    "payments/{id}/restore",
    RESOURCE,
);
const STATUS: Endpoint = Endpoint::new(
    Flow::PaymentStatus,
    Method::Get,
    "payments/{id}/status",
    RESOURCE,
);
const BILLING_INFO: Endpoint = Endpoint::new(
    Flow::PaymentBillingInfo,
    Method::Get,
    "payments/{id}/billingInfo",
    RESOURCE,
);
const IDENTIFICATION_FIELD: Endpoint = Endpoint::new(
    Flow::PaymentIdentificationField,
    Method::Get,
    "payments/{id}/identificationField",
    RESOURCE,
);
const PIX_QR_CODE: Endpoint = Endpoint::new(
    Flow::PaymentPixQrCode,
    Method::Get,
    "payments/{id}/pixQrCode",
    RESOURCE,
);
const CHARGE_WITH_CREDIT_CARD: Endpoint = Endpoint::new(
    Flow::PaymentChargeWithCreditCard,
    Method::Post,
    "payments/{id}/payWithCreditCard",
    RESOURCE,
);

/// `payments` resource.
#[derive(Debug, Clone)]
pub struct PaymentService {
    transport: Arc<dyn ConnectorTransport>,
}

impl PaymentService {
    pub fn new(transport: Arc<dyn ConnectorTransport>) -> Self {
        Self { transport }
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentCreate))]
    pub async fn create(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let request = PaymentsCreateRequest::from_map(raw).into_validation_error()?;
        api::execute(&*self.transport, &CREATE, None, Payload::Body(request.to_wire())).await
    }

    /// Invalid filters are dropped, an inverted date range is rejected.
    #[instrument(skip_all, fields(flow = ?Flow::PaymentList))]
    pub async fn list(&self, raw: &RawInput) -> CustomResult<Value, ApiError> {
        let constraints = PaymentListConstraints::from_map(raw).into_validation_error()?;
        api::execute(
            &*self.transport,
            &LIST,
            None,
            Payload::Query(constraints.to_wire()),
        )
        .await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentRetrieve))]
    pub async fn get(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&RETRIEVE, id).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentUpdate))]
    pub async fn update(&self, id: &str, raw: &RawInput) -> CustomResult<Value, ApiError> {
        UPDATE.render_path(Some(id))?;
        let request = PaymentsUpdateRequest::from_map(raw).into_validation_error()?;
        api::execute(
            &*self.transport,
            &UPDATE,
            Some(id),
            Payload::Body(request.to_wire()),
        )
        .await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentDelete))]
    pub async fn delete(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&DELETE, id).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentRestore))]
    pub async fn restore(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&RESTORE, id).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentStatus))]
    pub async fn status(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&STATUS, id).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentBillingInfo))]
    pub async fn billing_info(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&BILLING_INFO, id).await
    }

    /// Digitable line of a boleto.
    #[instrument(skip_all, fields(flow = ?Flow::PaymentIdentificationField))]
    pub async fn identification_field(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&IDENTIFICATION_FIELD, id).await
    }

    #[instrument(skip_all, fields(flow = ?Flow::PaymentPixQrCode))]
    pub async fn pix_qr_code(&self, id: &str) -> CustomResult<Value, ApiError> {
        self.by_id(&PIX_QR_CODE, id).await
    }

    /// Pays an existing charge with a card token or full card details.
    #[instrument(skip_all, fields(flow = ?Flow::PaymentChargeWithCreditCard))]
    pub async fn charge_with_credit_card(
        &self,
        id: &str,
        raw: &RawInput,
    ) -> CustomResult<Value, ApiError> {
        CHARGE_WITH_CREDIT_CARD.render_path(Some(id))?;
        let request = PaymentsChargeWithCardRequest::from_map(raw).into_validation_error()?;
        api::execute(
            &*self.transport,
            &CHARGE_WITH_CREDIT_CARD,
            Some(id),
            Payload::Body(request.to_wire()),
        )
        .await
    }

    async fn by_id(&self, endpoint: &Endpoint, id: &str) -> CustomResult<Value, ApiError> {
        api::execute(&*self.transport, endpoint, Some(id), Payload::Empty).await
    }
}
