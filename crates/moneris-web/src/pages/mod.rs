//! Page Components

mod checkout;
mod tokenization;

pub use checkout::CheckoutPage;
pub use tokenization::TokenizationPage;
