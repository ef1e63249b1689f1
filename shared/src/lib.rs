//! # shared
//!
//! Plain domain data records consumed by the printing engine.
//!
//! These are the records the persistence layer supplies (orders, items)
//! and the payment flow assembles (payment details, bill charges). They
//! carry no behavior beyond construction helpers; the engine maps them
//! into render contexts.

pub mod models;

pub use models::{BillCharges, Order, OrderItem, PaymentDetails};
