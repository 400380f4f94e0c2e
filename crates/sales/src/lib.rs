//! Sales domain module.
//!
//! Sale aggregate and its line items, implemented purely as deterministic
//! domain logic (no console, no storage).

pub mod sale;

pub use sale::{LineItem, Quantity, Sale, SaleDraft, SaleId};
