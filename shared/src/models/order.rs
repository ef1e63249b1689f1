//! Order Model

use serde::{Deserialize, Serialize};

/// Order item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub unit_price: f64,
    /// Line total in currency unit
    pub total_price: f64,
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: i32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            total_price: unit_price * quantity as f64,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Order entity as the persistence layer hands it to the print engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub table_number: String,
    pub customer_name: Option<String>,
    pub created_at: Option<String>,
    pub server_id: i64,
    pub order_type_name: Option<String>,
    pub items: Vec<OrderItem>,
    /// Items subtotal in currency unit
    pub total_amount: f64,
    /// Amount due after adjustments, in currency unit
    pub final_amount: f64,
}
