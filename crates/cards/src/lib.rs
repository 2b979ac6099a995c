mod credit_card;
mod holder;
pub mod validate;

pub use credit_card::CreditCard;
pub use holder::CreditCardHolderInfo;
pub use validate::{
    CardExpiration, CardExpirationMonth, CardExpirationYear, CardNumber, CardNumberStrategy,
    CardSecurityCode,
};
