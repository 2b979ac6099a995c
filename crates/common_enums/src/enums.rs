mod event;

use std::borrow::Cow;

pub use self::event::EventType;
use crate::domain::{impl_domain_enum_conversions, DomainEnum};

/// The payment method used to pay a charge.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    /// The payer picks the method on the checkout page.
    Undefined,
    Boleto,
    CreditCard,
    Pix,
}

impl DomainEnum for BillingType {
    const TYPE_NAME: &'static str = "billing type";
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("indefinido", Self::Undefined),
        ("boleto bancario", Self::Boleto),
        ("boleto bancário", Self::Boleto),
        ("ticket", Self::Boleto),
        ("cartão de crédito", Self::CreditCard),
        ("cartao de credito", Self::CreditCard),
        ("credit card", Self::CreditCard),
        ("creditcard", Self::CreditCard),
    ];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Undefined => "Indefinido",
            Self::Boleto => "Boleto",
            Self::CreditCard => "Cartão de Crédito",
            Self::Pix => "Pix",
        })
    }
}

/// Lifecycle status of a payment.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Received,
    Confirmed,
    Overdue,
    Refunded,
    ReceivedInCash,
    RefundRequested,
    RefundInProgress,
    ChargebackRequested,
    ChargebackDispute,
    AwaitingChargebackReversal,
    DunningRequested,
    DunningReceived,
    AwaitingRiskAnalysis,
}

impl DomainEnum for PaymentStatus {
    const TYPE_NAME: &'static str = "payment status";
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("pendente", Self::Pending),
        ("recebido", Self::Received),
        ("confirmado", Self::Confirmed),
        ("atrasado", Self::Overdue),
        ("vencido", Self::Overdue),
        ("reembolsado", Self::Refunded),
        ("recebido em dinheiro", Self::ReceivedInCash),
        ("received in cash", Self::ReceivedInCash),
        ("reembolso solicitado", Self::RefundRequested),
        ("refund requested", Self::RefundRequested),
        ("reembolso em andamento", Self::RefundInProgress),
        ("refund in progress", Self::RefundInProgress),
        ("chargeback solicitado", Self::ChargebackRequested),
        ("chargeback requested", Self::ChargebackRequested),
        ("chargeback em disputa", Self::ChargebackDispute),
        ("chargeback dispute", Self::ChargebackDispute),
        ("aguardando reversão de chargeback", Self::AwaitingChargebackReversal),
        ("awaiting chargeback reversal", Self::AwaitingChargebackReversal),
        ("cobrança solicitada", Self::DunningRequested),
        ("cobranca solicitada", Self::DunningRequested),
        ("dunning requested", Self::DunningRequested),
        ("cobrança recebida", Self::DunningReceived),
        ("cobranca recebida", Self::DunningReceived),
        ("dunning received", Self::DunningReceived),
        ("aguardando análise de risco", Self::AwaitingRiskAnalysis),
        ("awaiting risk analysis", Self::AwaitingRiskAnalysis),
    ];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Pending => "Pendente",
            Self::Received => "Recebido",
            Self::Confirmed => "Confirmado",
            Self::Overdue => "Atrasado",
            Self::Refunded => "Reembolsado",
            Self::ReceivedInCash => "Recebido em dinheiro",
            Self::RefundRequested => "Reembolso solicitado",
            Self::RefundInProgress => "Reembolso em andamento",
            Self::ChargebackRequested => "Chargeback solicitado",
            Self::ChargebackDispute => "Chargeback em disputa",
            Self::AwaitingChargebackReversal => "Aguardando reversão de chargeback",
            Self::DunningRequested => "Cobrança solicitada",
            Self::DunningReceived => "Cobrança recebida",
            Self::AwaitingRiskAnalysis => "Aguardando análise de risco",
        })
    }
}

/// Status of the service invoice (nota fiscal) attached to a payment.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Scheduled,
    Authorized,
    ProcessingCancellation,
    CancellationDenied,
    Error,
}

impl DomainEnum for InvoiceStatus {
    const TYPE_NAME: &'static str = "invoice status";
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("agendado", Self::Scheduled),
        ("autorizado", Self::Authorized),
        ("processando cancelamento", Self::ProcessingCancellation),
        ("processing cancellation", Self::ProcessingCancellation),
        ("cancelamento negado", Self::CancellationDenied),
        ("cancellation denied", Self::CancellationDenied),
        ("erro", Self::Error),
    ];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Scheduled => "Agendado",
            Self::Authorized => "Autorizado",
            Self::ProcessingCancellation => "Processando cancelamento",
            Self::CancellationDenied => "Cancelamento negado",
            Self::Error => "Erro",
        })
    }
}

/// Whether a discount is a fixed amount or a percentage of the payment value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    #[default]
    Fixed,
    Percentage,
}

impl DomainEnum for DiscountType {
    const TYPE_NAME: &'static str = "discount type";
    const ALIASES: &'static [(&'static str, Self)] =
        &[("fixo", Self::Fixed), ("porcentagem", Self::Percentage)];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Fixed => "Fixo",
            Self::Percentage => "Porcentagem",
        })
    }
}

/// Whether a late payment fine is a fixed amount or a percentage of the payment value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FineType {
    Fixed,
    #[default]
    Percentage,
}

impl DomainEnum for FineType {
    const TYPE_NAME: &'static str = "fine type";
    const ALIASES: &'static [(&'static str, Self)] =
        &[("fixo", Self::Fixed), ("porcentagem", Self::Percentage)];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Fixed => "Fixo",
            Self::Percentage => "Porcentagem",
        })
    }
}

/// How queued webhook events are delivered.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SendType {
    /// One event at a time, in order.
    Sequentially,
    NonSequentially,
}

impl DomainEnum for SendType {
    const TYPE_NAME: &'static str = "send type";
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("sequencial", Self::Sequentially),
        ("não sequencial", Self::NonSequentially),
        ("nao sequencial", Self::NonSequentially),
        ("non sequentially", Self::NonSequentially),
    ];

    fn label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Sequentially => "Sequencial",
            Self::NonSequentially => "Não Sequencial",
        })
    }
}

impl_domain_enum_conversions!(
    BillingType,
    PaymentStatus,
    InvoiceStatus,
    DiscountType,
    FineType,
    SendType,
    EventType,
);
