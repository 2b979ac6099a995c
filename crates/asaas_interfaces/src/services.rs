//! One service per API resource. Each operation validates its raw input into a request model,
//! serializes it and runs [`crate::api::execute`] with the operation's endpoint.

mod credit_cards;
mod customers;
mod payments;
mod webhooks;

pub use self::{
    credit_cards::CreditCardService, customers::CustomerService, payments::PaymentService,
    webhooks::WebhookService,
};
