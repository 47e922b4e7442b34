//! Cart Ledger.
//!
//! The shopping cart as a mutable aggregate: product → quantity, validated
//! against the catalog snapshot on every mutation and priced against it on
//! every read.

pub mod ledger;

pub use ledger::{CartEntry, CartLedger, CartLine};
