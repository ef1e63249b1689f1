//! Payment and charge models

use serde::{Deserialize, Serialize};

/// Tax and service charge configuration applied to a bill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillCharges {
    /// Tax rate as a fraction (0.10 = 10%)
    pub tax_rate: f64,
    pub tax_description: String,
    /// Service rate as a fraction (0.05 = 5%)
    pub service_rate: f64,
    pub service_description: String,
}

impl BillCharges {
    pub fn new(
        tax_rate: f64,
        tax_description: impl Into<String>,
        service_rate: f64,
        service_description: impl Into<String>,
    ) -> Self {
        Self {
            tax_rate,
            tax_description: tax_description.into(),
            service_rate,
            service_description: service_description.into(),
        }
    }
}

/// Completed payment details for receipt printing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub order_number: String,
    pub table_number: String,
    /// Amount before discount, in currency unit
    pub original_amount: f64,
    /// Amount due after discount, in currency unit
    pub final_amount: f64,
    /// Discount in currency unit (0 when none applied)
    pub discount_amount: f64,
    pub discount_name: Option<String>,
    pub payment_method: String,
    /// Amount tendered by the customer, in currency unit
    pub amount_paid: f64,
    pub charges: BillCharges,
}
