//! Domain models

mod order;
mod payment;

pub use order::{Order, OrderItem};
pub use payment::{BillCharges, PaymentDetails};
