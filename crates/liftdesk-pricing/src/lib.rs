//! Product catalog, rate tables and the quotation pricing engine.
//!
//! Pricing is a pure function: a [`types::ProductConfiguration`] plus a
//! [`rates::RateTable`] produce an itemized [`types::PriceBreakdown`].
//! Nothing in this crate performs I/O or holds global state.

pub mod catalog;
pub mod engine;
pub mod quotation;
pub mod rates;
pub mod types;
