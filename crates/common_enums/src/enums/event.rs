//! Events a webhook can subscribe to.

use std::borrow::Cow;

use crate::domain::DomainEnum;

/// Webhook event codes.
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
pub enum EventType {
    // Payments
    PaymentAuthorized,
    PaymentAwaitingRiskAnalysis,
    PaymentApprovedByRiskAnalysis,
    PaymentReprovedByRiskAnalysis,
    PaymentCreated,
    PaymentConfirmed,
    PaymentReceived,
    PaymentAnticipated,
    PaymentOverdue,
    PaymentDeleted,
    PaymentRestored,
    PaymentRefunded,
    PaymentRefundInProgress,
    PaymentRefundDenied,
    PaymentReceivedInCashUndone,
    PaymentChargebackRequested,
    PaymentChargebackDispute,
    PaymentAwaitingChargebackReversal,
    PaymentDunningReceived,
    PaymentDunningRequested,
    PaymentBankSlipViewed,
    PaymentCheckoutViewed,
    PaymentCreditCardCaptureRefused,
    PaymentPartiallyRefunded,
    PaymentSplitCancelled,
    PaymentSplitDivergenceBlock,
    PaymentSplitDivergenceBlockFinished,

    // Service invoices
    InvoiceCreated,
    InvoiceUpdated,
    InvoiceSynchronized,
    InvoiceAuthorized,
    InvoiceProcessingCancellation,
    InvoiceCanceled,
    InvoiceCancellationDenied,
    InvoiceError,

    // Transfers
    TransferCreated,
    TransferPending,
    TransferInBankProcessing,
    TransferBlocked,
    TransferDone,
    TransferFailed,
    TransferCancelled,

    // Bill payments
    BillCreated,
    BillPending,
    BillBankProcessing,
    BillPaid,
    BillCancelled,
    BillFailed,
    BillRefunded,

    // Receivable anticipations
    ReceivableAnticipationCancelled,
    ReceivableAnticipationScheduled,
    ReceivableAnticipationPending,
    ReceivableAnticipationCredited,
    ReceivableAnticipationDebited,
    ReceivableAnticipationDenied,
    ReceivableAnticipationOverdue,

    // Mobile phone recharges
    MobilePhoneRechargePending,
    MobilePhoneRechargeCancelled,
    MobilePhoneRechargeConfirmed,
    MobilePhoneRechargeRefunded,

    // Account status
    AccountStatusBankAccountInfoApproved,
    AccountStatusBankAccountInfoAwaitingApproval,
    AccountStatusBankAccountInfoPending,
    AccountStatusBankAccountInfoRejected,
    AccountStatusCommercialInfoApproved,
    AccountStatusCommercialInfoAwaitingApproval,
    AccountStatusCommercialInfoExpired,
    AccountStatusCommercialInfoExpiringSoon,
    AccountStatusCommercialInfoPending,
    AccountStatusCommercialInfoRejected,
    AccountStatusDocumentApproved,
    AccountStatusDocumentAwaitingApproval,
    AccountStatusDocumentPending,
    AccountStatusDocumentRejected,
    AccountStatusGeneralApprovalApproved,
    AccountStatusGeneralApprovalAwaitingApproval,
    AccountStatusGeneralApprovalPending,
    AccountStatusGeneralApprovalRejected,

    // Subscriptions
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionInactivated,
    SubscriptionDeleted,
    SubscriptionSplitDisabled,
    SubscriptionSplitDivergenceBlock,
    SubscriptionSplitDivergenceBlockFinished,

    // Checkouts
    CheckoutCreated,
    CheckoutCanceled,
    CheckoutExpired,
    CheckoutPaid,

    // Balance
    BalanceValueBlocked,
    BalanceValueUnblocked,

    // Internal transfers
    InternalTransferCredit,
    InternalTransferDebit,

    // Access tokens
    AccessTokenCreated,
    AccessTokenDeleted,
    AccessTokenDisabled,
    AccessTokenEnabled,
    AccessTokenExpired,
    AccessTokenExpiringSoon,
}

impl DomainEnum for EventType {
    const TYPE_NAME: &'static str = "event type";
    const ALIASES: &'static [(&'static str, Self)] = &[];

    /// The code in title case, e.g. `Payment Received In Cash Undone`.
    fn label(self) -> Cow<'static, str> {
        let label = self
            .code()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars
                    .next()
                    .map(|first| {
                        first
                            .to_uppercase()
                            .chain(chars.flat_map(char::to_lowercase))
                            .collect::<String>()
                    })
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(" ");

        Cow::Owned(label)
    }
}
