//! Types.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Category and tag of log event.
///
/// Don't hesitate to add your variant if it is missing here.
#[derive(Debug, Default, Deserialize, Clone, Copy, Display, EnumString, PartialEq, Eq)]
pub enum Tag {
    /// General.
    #[default]
    General,

    /// Input rejected before reaching the transport.
    ValidationFailure,
    /// Optional filter dropped by a lenient request.
    FilterDiscarded,

    /// API: outgoing web request.
    ApiOutgoingRequest,
    /// API: response received from the remote API.
    ApiIncomingResponse,
}

/// API Flow
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Customer create flow.
    CustomerCreate,
    /// Customer list flow.
    CustomerList,
    /// Customer retrieve flow.
    CustomerRetrieve,
    /// Customer update flow.
    CustomerUpdate,
    /// Customer delete flow.
    CustomerDelete,
    /// Customer restore flow.
    CustomerRestore,
    /// Payment create flow.
    PaymentCreate,
    /// Payment list flow.
    PaymentList,
    /// Payment retrieve flow.
    PaymentRetrieve,
    /// Payment update flow.
    PaymentUpdate,
    /// Payment delete flow.
    PaymentDelete,
    /// Payment restore flow.
    PaymentRestore,
    /// Payment status flow.
    PaymentStatus,
    /// Payment billing info flow.
    PaymentBillingInfo,
    /// Payment identification field (boleto digitable line) flow.
    PaymentIdentificationField,
    /// Payment Pix QR code flow.
    PaymentPixQrCode,
    /// Charge an existing payment with a credit card.
    PaymentChargeWithCreditCard,
    /// Credit card tokenization flow.
    CreditCardTokenize,
    /// Webhook create flow.
    WebhookCreate,
    /// Webhook retrieve flow.
    WebhookRetrieve,
    /// Webhook delete flow.
    WebhookDelete,
}
