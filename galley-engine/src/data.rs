//! Context assembly from domain records
//!
//! Pure mappings from order and payment records to the flat context keys
//! the default templates reference. Amounts are pre-formatted as
//! grouped-thousands strings and rates as whole-percent strings here, so
//! templates only ever substitute ready-made text.

use crate::context::Context;
use chrono::{Local, Utc};
use serde_json::{Value, json};
use shared::{BillCharges, Order, OrderItem, PaymentDetails};

/// Format an amount as a grouped-thousands string with no decimals
///
/// `15000.0` becomes `"15.000"`. Negative amounts keep their sign.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_rate(rate: f64) -> String {
    format!("{:.0}", rate * 100.0)
}

fn current_time() -> String {
    Local::now().format("%d/%m/%y %H:%M").to_string()
}

fn notes_of(item: &OrderItem) -> Option<&str> {
    let notes = item.notes.as_deref()?.trim();
    if notes.is_empty() || notes.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(notes)
    }
}

/// Serialize order items into the `items` array the loop lines consume
fn items_value(items: &[OrderItem]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| {
                json!({
                    "name": item.name,
                    "quantity": item.quantity,
                    "unit_price": format_currency(item.unit_price),
                    "total_price": format_currency(item.total_price),
                    "notes": notes_of(item),
                })
            })
            .collect(),
    )
}

/// Context for the kitchen ticket
pub fn kitchen_checker_context(order: &Order) -> Context {
    let customer_name = order.customer_name.as_deref().unwrap_or("");

    let mut ctx = Context::new();
    ctx.insert("order_number", order.order_number.as_str());
    ctx.insert("table_number", order.table_number.as_str());
    ctx.insert("customer_name", customer_name);
    ctx.insert("current_time", current_time());
    ctx.insert("items", items_value(&order.items));
    ctx.insert("has_customer_name", !customer_name.is_empty());
    ctx
}

/// Context for the customer bill
pub fn customer_bill_context(order: &Order, charges: &BillCharges) -> Context {
    let customer_name = order.customer_name.as_deref().unwrap_or("");
    let created_at = order.created_at.as_deref().unwrap_or("");
    let order_type = order.order_type_name.as_deref().unwrap_or("");

    let subtotal = order.total_amount;
    let tax_amount = subtotal * charges.tax_rate;
    let service_amount = subtotal * charges.service_rate;

    let mut ctx = Context::new();
    ctx.insert("order_number", order.order_number.as_str());
    ctx.insert("table_number", order.table_number.as_str());
    ctx.insert("customer_name", customer_name);
    ctx.insert("created_at", created_at);
    ctx.insert("server_id", order.server_id);
    ctx.insert("order_type", order_type);
    ctx.insert("current_time", current_time());
    ctx.insert("items", items_value(&order.items));

    ctx.insert("subtotal", format_currency(subtotal));
    ctx.insert("tax_rate", format_rate(charges.tax_rate));
    ctx.insert("tax_description", charges.tax_description.as_str());
    ctx.insert("tax_amount", format_currency(tax_amount));
    ctx.insert("service_rate", format_rate(charges.service_rate));
    ctx.insert("service_description", charges.service_description.as_str());
    ctx.insert("service_amount", format_currency(service_amount));
    ctx.insert("final_amount", format_currency(order.final_amount));

    ctx.insert("has_customer_name", !customer_name.is_empty());
    ctx.insert("has_created_at", !created_at.is_empty());
    ctx.insert("has_order_type", !order_type.is_empty());
    ctx.insert("has_tax", tax_amount > 0.01);
    ctx.insert("has_service", service_amount > 0.01);
    ctx
}

/// Context for the payment receipt
pub fn payment_receipt_context(details: &PaymentDetails) -> Context {
    let charges = &details.charges;

    let mut ctx = Context::new();
    ctx.insert(
        "receipt_number",
        Utc::now().timestamp_millis().to_string(),
    );
    ctx.insert("order_number", details.order_number.as_str());
    ctx.insert("table_number", details.table_number.as_str());
    ctx.insert("current_time", current_time());
    ctx.insert("payment_method", details.payment_method.to_uppercase());
    ctx.insert("amount_paid", format_currency(details.amount_paid));
    ctx.insert("final_amount", format_currency(details.final_amount));

    let change = details.amount_paid - details.final_amount;
    ctx.insert("change", format_currency(change));
    ctx.insert("has_change", change > 0.0);

    // Back out the pre-tax base so the charge breakdown adds up
    let has_discount = details.discount_amount > 0.01;
    let total_rate = 1.0 + charges.tax_rate + charges.service_rate;
    let base_amount = if has_discount {
        ctx.insert("original_amount", format_currency(details.original_amount));
        ctx.insert("discount_amount", format_currency(details.discount_amount));
        ctx.insert(
            "discount_name",
            details.discount_name.as_deref().unwrap_or(""),
        );
        details.original_amount / total_rate
    } else {
        details.final_amount / total_rate
    };

    ctx.insert("base_amount", format_currency(base_amount));
    ctx.insert("tax_rate", format_rate(charges.tax_rate));
    ctx.insert("tax_description", charges.tax_description.as_str());
    ctx.insert("tax_amount", format_currency(base_amount * charges.tax_rate));
    ctx.insert("service_rate", format_rate(charges.service_rate));
    ctx.insert("service_description", charges.service_description.as_str());
    ctx.insert(
        "service_amount",
        format_currency(base_amount * charges.service_rate),
    );

    ctx.insert("has_discount", has_discount);
    ctx.insert("has_tax", charges.tax_rate > 0.01);
    ctx.insert("has_service", charges.service_rate > 0.01);
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_with_items() -> Order {
        Order {
            order_number: "ORD-17".into(),
            table_number: "T5".into(),
            customer_name: Some("Ibu Sari".into()),
            created_at: None,
            server_id: 3,
            order_type_name: Some("Dine In".into()),
            items: vec![
                OrderItem::new("Nasi Goreng", 2, 35_000.0).with_notes("extra spicy"),
                OrderItem::new("Es Teh", 1, 8_000.0),
            ],
            total_amount: 78_000.0,
            final_amount: 89_700.0,
        }
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(950.0), "950");
        assert_eq!(format_currency(15_000.0), "15.000");
        assert_eq!(format_currency(1_234_567.0), "1.234.567");
        assert_eq!(format_currency(-15_000.0), "-15.000");
        // Rounds, never truncates
        assert_eq!(format_currency(999.6), "1.000");
    }

    #[test]
    fn test_kitchen_checker_context_fields() {
        let ctx = kitchen_checker_context(&order_with_items());
        assert_eq!(ctx.get("order_number"), Some(&json!("ORD-17")));
        assert_eq!(ctx.get("has_customer_name"), Some(&json!(true)));

        let items = ctx.get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["unit_price"], json!("35.000"));
        assert_eq!(items[0]["notes"], json!("extra spicy"));
        assert_eq!(items[1]["notes"], Value::Null);
    }

    #[test]
    fn test_kitchen_checker_missing_customer() {
        let mut order = order_with_items();
        order.customer_name = None;
        let ctx = kitchen_checker_context(&order);
        assert_eq!(ctx.get("customer_name"), Some(&json!("")));
        assert_eq!(ctx.get("has_customer_name"), Some(&json!(false)));
    }

    #[test]
    fn test_customer_bill_charges() {
        let charges = BillCharges::new(0.10, "PB1", 0.05, "Service");
        let ctx = customer_bill_context(&order_with_items(), &charges);
        assert_eq!(ctx.get("subtotal"), Some(&json!("78.000")));
        assert_eq!(ctx.get("tax_rate"), Some(&json!("10")));
        assert_eq!(ctx.get("tax_amount"), Some(&json!("7.800")));
        assert_eq!(ctx.get("service_amount"), Some(&json!("3.900")));
        assert_eq!(ctx.get("final_amount"), Some(&json!("89.700")));
        assert_eq!(ctx.get("has_tax"), Some(&json!(true)));
    }

    #[test]
    fn test_customer_bill_zero_rates() {
        let charges = BillCharges::new(0.0, "PB1", 0.0, "Service");
        let ctx = customer_bill_context(&order_with_items(), &charges);
        assert_eq!(ctx.get("tax_amount"), Some(&json!("0")));
        assert_eq!(ctx.get("has_tax"), Some(&json!(false)));
        assert_eq!(ctx.get("has_service"), Some(&json!(false)));
    }

    #[test]
    fn test_payment_receipt_change() {
        let details = PaymentDetails {
            order_number: "ORD-17".into(),
            table_number: "T5".into(),
            original_amount: 0.0,
            final_amount: 85_000.0,
            discount_amount: 0.0,
            discount_name: None,
            payment_method: "cash".into(),
            amount_paid: 100_000.0,
            charges: BillCharges::new(0.10, "PB1", 0.05, "Service"),
        };

        let ctx = payment_receipt_context(&details);
        assert_eq!(ctx.get("change"), Some(&json!("15.000")));
        assert_eq!(ctx.get("has_change"), Some(&json!(true)));
        assert_eq!(ctx.get("payment_method"), Some(&json!("CASH")));
        // No discount keys when there is no discount
        assert!(ctx.get("discount_amount").is_none());
    }

    #[test]
    fn test_payment_receipt_exact_payment_no_change() {
        let details = PaymentDetails {
            order_number: "ORD-17".into(),
            table_number: "T5".into(),
            original_amount: 0.0,
            final_amount: 85_000.0,
            discount_amount: 0.0,
            discount_name: None,
            payment_method: "card".into(),
            amount_paid: 85_000.0,
            charges: BillCharges::new(0.0, "PB1", 0.0, "Service"),
        };

        let ctx = payment_receipt_context(&details);
        assert_eq!(ctx.get("change"), Some(&json!("0")));
        assert_eq!(ctx.get("has_change"), Some(&json!(false)));
    }

    #[test]
    fn test_payment_receipt_discount_backs_out_base() {
        let details = PaymentDetails {
            order_number: "ORD-17".into(),
            table_number: "T5".into(),
            original_amount: 115_000.0,
            final_amount: 103_500.0,
            discount_amount: 11_500.0,
            discount_name: Some("Member 10%".into()),
            payment_method: "qris".into(),
            amount_paid: 103_500.0,
            charges: BillCharges::new(0.10, "PB1", 0.05, "Service"),
        };

        let ctx = payment_receipt_context(&details);
        assert_eq!(ctx.get("has_discount"), Some(&json!(true)));
        assert_eq!(ctx.get("original_amount"), Some(&json!("115.000")));
        assert_eq!(ctx.get("discount_name"), Some(&json!("Member 10%")));
        // 115000 / 1.15 = 100000
        assert_eq!(ctx.get("base_amount"), Some(&json!("100.000")));
        assert_eq!(ctx.get("tax_amount"), Some(&json!("10.000")));
        assert_eq!(ctx.get("service_amount"), Some(&json!("5.000")));
    }
}
