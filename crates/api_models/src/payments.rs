use cards::{CreditCard, CreditCardHolderInfo};
use common_enums::{lenient_parse, BillingType, InvoiceStatus, PaymentStatus};
use common_utils::{
    date_time,
    errors::CustomResult,
    ext_traits::RawInputExt,
    types::{self, RawInput},
    wire::{render, FieldDescriptor, ToWire, WireMap, WireMapBuilder},
};
use error_stack::{report, ResultExt};
use masking::{PeekInterface, Secret};
use time::Date;

use crate::{
    errors::{InvalidDateRange, InvalidPaymentData, InvalidRequestData},
    utils::{self, DateRange, ValueObjectResultExt},
    value_objects::{Callback, Discount, Fine, Interest, Split},
};

const DUE_DATE: FieldDescriptor<Date> = FieldDescriptor::new("dueDate", render::date);
const PAYMENT_DATE: FieldDescriptor<Date> = FieldDescriptor::new("paymentDate", render::date);
const DATE_CREATED_GE: FieldDescriptor<Date> = FieldDescriptor::new("dateCreated[ge]", render::date);
const DATE_CREATED_LE: FieldDescriptor<Date> = FieldDescriptor::new("dateCreated[le]", render::date);
const PAYMENT_DATE_GE: FieldDescriptor<Date> = FieldDescriptor::new("paymentDate[ge]", render::date);
const PAYMENT_DATE_LE: FieldDescriptor<Date> = FieldDescriptor::new("paymentDate[le]", render::date);
const DUE_DATE_GE: FieldDescriptor<Date> = FieldDescriptor::new("dueDate[ge]", render::date);
const DUE_DATE_LE: FieldDescriptor<Date> = FieldDescriptor::new("dueDate[le]", render::date);

const CREDIT_CARD_PREFIX: &str = "Invalid credit card data: ";

/// Optional terms shared by the create and update requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentTerms {
    pub description: Option<String>,
    /// Days after the due date before an unpaid boleto is cancelled.
    pub days_after_due_date_to_registration_cancellation: Option<i64>,
    pub external_reference: Option<String>,
    pub discount: Option<Discount>,
    pub interest: Option<Interest>,
    pub fine: Option<Fine>,
    pub postal_service: Option<bool>,
    pub split: Option<Split>,
    pub callback: Option<Callback>,
}

impl PaymentTerms {
    /// Builds the nested value objects and checks the split against `value`.
    fn from_map(raw: &RawInput, value: f64) -> CustomResult<Self, InvalidPaymentData> {
        let terms = Self {
            description: raw.optional_string("description"),
            days_after_due_date_to_registration_cancellation: raw
                .optional_integer("daysAfterDueDateToRegistrationCancellation"),
            external_reference: raw.optional_string("externalReference"),
            discount: utils::nested_map(raw, "discount")?
                .map(|discount| Discount::from_map(discount).into_invalid_format("discount"))
                .transpose()?,
            interest: utils::nested_map(raw, "interest")?
                .map(|interest| Interest::from_map(interest).into_invalid_format("interest"))
                .transpose()?,
            fine: utils::nested_map(raw, "fine")?
                .map(|fine| Fine::from_map(fine).into_invalid_format("fine"))
                .transpose()?,
            postal_service: raw.optional_boolean("postalService"),
            split: utils::nested_list(raw, "split")?
                .map(|split| Split::from_list(split).into_invalid_format("split"))
                .transpose()?,
            callback: utils::nested_map(raw, "callback")?
                .map(|callback| Callback::from_map(callback).into_invalid_format("callback"))
                .transpose()?,
        };

        if let Some(split) = &terms.split {
            split.validate_for(value).into_rule()?;
        }

        Ok(terms)
    }

    fn write(&self, builder: WireMapBuilder) -> WireMapBuilder {
        builder
            .field("description", self.description.as_deref())
            .field(
                "daysAfterDueDateToRegistrationCancellation",
                self.days_after_due_date_to_registration_cancellation.as_ref(),
            )
            .field("externalReference", self.external_reference.as_deref())
            .field("discount", self.discount.as_ref().map(ToWire::to_wire).as_ref())
            .field("interest", self.interest.as_ref().map(ToWire::to_wire).as_ref())
            .field("fine", self.fine.as_ref().map(ToWire::to_wire).as_ref())
            .field("postalService", self.postal_service.as_ref())
            .field("split", self.split.as_ref())
            .field("callback", self.callback.as_ref().map(ToWire::to_wire).as_ref())
    }
}

/// Value, billing type and due date every payment carries.
fn core_fields(
    raw: &RawInput,
    invalid_billing_type: &str,
) -> CustomResult<(BillingType, f64, Date), InvalidPaymentData> {
    let billing_type = raw.optional_string("billingType");
    let value = raw.optional_float("value");
    let due_date = raw.optional_string("dueDate");

    if let Some(field) = common_utils::first_missing_field![
        ("billingType", billing_type),
        ("value", value),
        ("dueDate", due_date),
    ] {
        return Err(report!(InvalidPaymentData::missing_field(field)));
    }

    let value = utils::positive_amount(value, "Value must be greater than 0")?;

    let billing_type = billing_type
        .as_deref()
        .and_then(lenient_parse::<BillingType>)
        .ok_or_else(|| report!(InvalidPaymentData::rule(invalid_billing_type)))?;

    let due_date = due_date
        .as_deref()
        .and_then(date_time::parse_date)
        .ok_or_else(|| report!(InvalidPaymentData::rule("Invalid due date format")))
        .attach_printable_lazy(|| format!("dueDate: {due_date:?}"))?;

    Ok((billing_type, value, due_date))
}

/// Installment plan of a credit card payment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Installments {
    pub installment_count: Option<i64>,
    pub total_value: Option<f64>,
    /// Given, or derived from the total value and count rounded to cents.
    pub installment_value: Option<f64>,
}

impl Installments {
    fn from_map(
        raw: &RawInput,
        billing_type: BillingType,
    ) -> CustomResult<Self, InvalidPaymentData> {
        let installment_count = raw.optional_integer("installmentCount");
        let total_value = raw.optional_float("totalValue");
        let installment_value = raw.optional_float("installmentValue");

        let has_installments =
            installment_count.is_some() || total_value.is_some() || installment_value.is_some();
        if has_installments && billing_type != BillingType::CreditCard {
            return Err(report!(InvalidPaymentData::rule(
                "Installment fields can only be used with CREDIT_CARD billing type."
            )));
        }

        if installment_count.is_some_and(|count| count <= 0) {
            return Err(report!(InvalidPaymentData::rule(
                "Installment count must be greater than 0"
            )));
        }
        if installment_value.is_some_and(|value| value <= 0.0) {
            return Err(report!(InvalidPaymentData::rule(
                "Installment value must be greater than 0"
            )));
        }
        if total_value.is_some_and(|value| value <= 0.0) {
            return Err(report!(InvalidPaymentData::rule(
                "Total value must be greater than 0"
            )));
        }

        let installment_value = installment_value.or_else(|| {
            let count = installment_count.and_then(|_| raw.optional_float("installmentCount"))?;
            Some(types::round_to_cents(total_value? / count))
        });

        Ok(Self {
            installment_count,
            total_value,
            installment_value,
        })
    }

    fn write(&self, builder: WireMapBuilder) -> WireMapBuilder {
        builder
            .field("installmentCount", self.installment_count.as_ref())
            .field("totalValue", self.total_value.as_ref())
            .field("installmentValue", self.installment_value.as_ref())
    }
}

/// Input of `POST payments`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsCreateRequest {
    /// Asaas customer id, e.g. `cus_000005219613`.
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: Date,
    pub installments: Installments,
    pub terms: PaymentTerms,
}

impl PaymentsCreateRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        utils::log_rejection("payment_create", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        let customer = raw
            .optional_string("customer")
            .ok_or_else(|| report!(InvalidPaymentData::missing_field("customer")))?;
        let (billing_type, value, due_date) = core_fields(raw, "Invalid billing type")?;
        let terms = PaymentTerms::from_map(raw, value)?;
        let installments = Installments::from_map(raw, billing_type)?;

        Ok(Self {
            customer,
            billing_type,
            value,
            due_date,
            installments,
            terms,
        })
    }
}

impl ToWire for PaymentsCreateRequest {
    fn to_wire(&self) -> WireMap {
        let builder = WireMapBuilder::new()
            .field("customer", Some(self.customer.as_str()))
            .field("billingType", Some(&self.billing_type))
            .field("value", Some(&self.value))
            .described(&DUE_DATE, Some(&self.due_date));
        let builder = self.installments.write(builder);
        self.terms.write(builder).build()
    }
}

/// Input of `PUT payments/{id}`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsUpdateRequest {
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: Date,
    pub terms: PaymentTerms,
}

impl PaymentsUpdateRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        utils::log_rejection("payment_update", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        let (billing_type, value, due_date) = core_fields(raw, "Invalid billing type.")?;

        Ok(Self {
            billing_type,
            value,
            due_date,
            terms: PaymentTerms::from_map(raw, value)?,
        })
    }
}

impl ToWire for PaymentsUpdateRequest {
    fn to_wire(&self) -> WireMap {
        let builder = WireMapBuilder::new()
            .field("billingType", Some(&self.billing_type))
            .field("value", Some(&self.value))
            .described(&DUE_DATE, Some(&self.due_date));
        self.terms.write(builder).build()
    }
}

/// How a payment is charged on a card: a stored token or the full card details.
#[derive(Clone, Debug, PartialEq)]
pub enum CardPaymentSource {
    Token(Secret<String>),
    Card {
        credit_card: CreditCard,
        holder_info: CreditCardHolderInfo,
    },
}

/// Input of `POST payments/{id}/payWithCreditCard`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsChargeWithCardRequest {
    pub source: CardPaymentSource,
}

impl PaymentsChargeWithCardRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        utils::log_rejection("payment_charge_with_card", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidPaymentData> {
        let token = raw.optional_string("creditCardToken");
        let credit_card = raw.optional_map("creditCard");
        let holder_info = raw.optional_map("creditCardHolderInfo");

        let source = match (token, credit_card, holder_info) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(report!(InvalidPaymentData::rule(
                    "Provide either creditCardToken or creditCard details, not both."
                )));
            }
            (Some(token), None, None) => CardPaymentSource::Token(Secret::new(token)),
            (None, None, _) => {
                return Err(report!(InvalidPaymentData::rule(
                    "Either creditCardToken or creditCard details must be provided."
                )));
            }
            (None, Some(_), None) => {
                return Err(report!(InvalidPaymentData::rule(
                    "Credit card holder info is required when credit card token is not provided."
                )));
            }
            (None, Some(credit_card), Some(holder_info)) => CardPaymentSource::Card {
                credit_card: CreditCard::from_map(credit_card)
                    .into_prefixed_rule(CREDIT_CARD_PREFIX)?,
                holder_info: CreditCardHolderInfo::from_map(holder_info)
                    .into_prefixed_rule(CREDIT_CARD_PREFIX)?,
            },
        };

        Ok(Self { source })
    }
}

impl ToWire for PaymentsChargeWithCardRequest {
    fn to_wire(&self) -> WireMap {
        match &self.source {
            CardPaymentSource::Token(token) => WireMapBuilder::new()
                .field("creditCardToken", Some(token.peek().as_str()))
                .build(),
            CardPaymentSource::Card {
                credit_card,
                holder_info,
            } => WireMapBuilder::new()
                .field("creditCard", Some(&credit_card.to_wire()))
                .field("creditCardHolderInfo", Some(&holder_info.to_wire()))
                .build(),
        }
    }
}

/// Filters of `GET payments`. Invalid filters are dropped, an inverted date range is an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentListConstraints {
    pub installment: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub customer: Option<String>,
    pub customer_group_name: Option<String>,
    pub billing_type: Option<BillingType>,
    pub status: Option<PaymentStatus>,
    pub subscription: Option<String>,
    pub external_reference: Option<String>,
    pub payment_date: Option<Date>,
    pub invoice_status: Option<InvoiceStatus>,
    pub anticipated: Option<bool>,
    pub anticipable: Option<bool>,
    pub date_created: DateRange,
    pub payment_date_range: DateRange,
    pub due_date: DateRange,
}

impl PaymentListConstraints {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidDateRange> {
        Ok(Self {
            installment: utils::string_filter(raw, "installment"),
            offset: utils::offset_filter(raw),
            limit: utils::limit_filter(raw),
            customer: utils::string_filter(raw, "customer"),
            customer_group_name: utils::string_filter(raw, "customerGroupName"),
            billing_type: utils::enum_filter(raw, "billingType"),
            status: utils::enum_filter(raw, "status"),
            subscription: utils::string_filter(raw, "subscription"),
            external_reference: utils::string_filter(raw, "externalReference"),
            payment_date: utils::date_filter(raw, "paymentDate"),
            invoice_status: utils::enum_filter(raw, "invoiceStatus"),
            anticipated: utils::boolean_filter(raw, "anticipated"),
            anticipable: utils::boolean_filter(raw, "anticipable"),
            date_created: DateRange::from_keys(raw, "dateCreatedStart", "dateCreatedEnd")?,
            payment_date_range: DateRange::from_keys(raw, "paymentDateStart", "paymentDateEnd")?,
            due_date: DateRange::from_keys(raw, "dueDateStart", "dueDateEnd")?,
        })
    }
}

impl ToWire for PaymentListConstraints {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("installment", self.installment.as_deref())
            .field("offset", self.offset.as_ref())
            .field("limit", self.limit.as_ref())
            .field("customer", self.customer.as_deref())
            .field("customerGroupName", self.customer_group_name.as_deref())
            .field("billingType", self.billing_type.as_ref())
            .field("status", self.status.as_ref())
            .field("subscription", self.subscription.as_deref())
            .field("externalReference", self.external_reference.as_deref())
            .described(&PAYMENT_DATE, self.payment_date.as_ref())
            .field("invoiceStatus", self.invoice_status.as_ref())
            .field("anticipated", self.anticipated.as_ref())
            .field("anticipable", self.anticipable.as_ref())
            .described(&DATE_CREATED_GE, self.date_created.start.as_ref())
            .described(&DATE_CREATED_LE, self.date_created.end.as_ref())
            .described(&PAYMENT_DATE_GE, self.payment_date_range.start.as_ref())
            .described(&PAYMENT_DATE_LE, self.payment_date_range.end.as_ref())
            .described(&DUE_DATE_GE, self.due_date.start.as_ref())
            .described(&DUE_DATE_LE, self.due_date.end.as_ref())
            .build()
    }
}
