//! Built-in default templates
//!
//! One default per well-known template name. These are what the loader
//! falls back to when a template resource is missing or fails to parse,
//! so every print path works out of the box with no template files at all.

use crate::builder::TemplateBuilder;
use crate::template::{Formatting, Line, Template};
use galley_printer::Alignment;

/// Kitchen ticket listing items to prepare
pub const KITCHEN_CHECKER: &str = "kitchen_checker";
/// Itemized bill presented to the customer before payment
pub const CUSTOMER_BILL: &str = "customer_bill";
/// Proof-of-payment receipt printed after settling
pub const PAYMENT_RECEIPT: &str = "payment_receipt";

/// The built-in default for a template name
///
/// Unknown names get an empty template, which renders as init plus cut.
pub fn default_for(name: &str) -> Template {
    match name {
        KITCHEN_CHECKER => kitchen_checker(),
        CUSTOMER_BILL => customer_bill(),
        PAYMENT_RECEIPT => payment_receipt(),
        _ => Template::default(),
    }
}

fn emphasized_total(label: &str, amount: &str) -> Line {
    Line::TotalLine {
        label: label.into(),
        amount: amount.into(),
        char_width: 32,
        formatting: Formatting::new(Alignment::Left, true, true),
    }
}

fn right_text(content: &str) -> Line {
    Line::Text {
        content: content.into(),
        formatting: Formatting::new(Alignment::Right, false, false),
    }
}

pub fn kitchen_checker() -> Template {
    TemplateBuilder::new()
        .section("header")
        .center()
        .bold()
        .double_height()
        .spacing_after(1)
        .text("KITCHEN CHECKER")
        .separator()
        .end()
        .section("order_info")
        .spacing_after(1)
        .text("Order #: {{order_number}}")
        .text("Table: {{table_number}}")
        .conditional("has_customer_name")
        .text("Customer: {{customer_name}}")
        .end()
        .text("Time: {{current_time}}")
        .separator()
        .end()
        .section("items")
        .bold_text("ITEMS TO PREPARE:")
        .separator()
        .items_loop()
        .empty_text("No items in this order")
        .bold_text("{{item_quantity}}x {{item_name}}")
        .conditional("has_item_notes")
        .text("Notes: {{item_notes}}")
        .end()
        .text("")
        .end()
        .end()
        .section("footer")
        .center()
        .separator()
        .text("** KITCHEN COPY **")
        .end()
        .build()
}

pub fn customer_bill() -> Template {
    TemplateBuilder::new()
        .section("header")
        .center()
        .bold()
        .double_height()
        .spacing_after(1)
        .text("CUSTOMER BILL")
        .end()
        .section("restaurant_info")
        .center()
        .spacing_after(1)
        .text("Serendipity")
        .text("Jalan Durian Barat III no 10")
        .text("Jakarta, Indonesia")
        .text("Phone: +62821234568276")
        .text("@cafeserendipityjagakarsa")
        .separator()
        .end()
        .section("order_info")
        .spacing_after(1)
        .text("Order #: {{order_number}}")
        .text("Table: {{table_number}}")
        .conditional("has_customer_name")
        .text("Customer: {{customer_name}}")
        .end()
        .text("Server ID: {{server_id}}")
        .separator()
        .end()
        .section("items")
        .bold_text("ITEMS:")
        .separator()
        .items_loop()
        .empty_text("No items in this order")
        .text("{{item_name}}")
        .line(right_text("{{item_quantity}} x {{item_price}} = {{item_total}}"))
        .conditional("has_item_notes")
        .text("Note: {{item_notes}}")
        .end()
        .text("")
        .end()
        .separator()
        .end()
        .section("totals")
        .spacing_after(1)
        .total_line("Subtotal:", "{{subtotal}}")
        .conditional("has_tax_amount")
        .total_line("{{tax_description}} ({{tax_rate}}%):", "{{tax_amount}}")
        .end()
        .conditional("has_service_amount")
        .total_line("{{service_description}} ({{service_rate}}%):", "{{service_amount}}")
        .end()
        .line(emphasized_total("TOTAL:", "{{final_amount}}"))
        .end()
        .build()
}

pub fn payment_receipt() -> Template {
    TemplateBuilder::new()
        .section("header")
        .center()
        .bold()
        .double_height()
        .spacing_after(1)
        .text("PAYMENT RECEIPT")
        .end()
        .section("restaurant_info")
        .center()
        .spacing_after(1)
        .text("Serendipity")
        .text("Thank you for dining with us!")
        .separator()
        .end()
        .section("receipt_info")
        .spacing_after(1)
        .text("Receipt #: {{receipt_number}}")
        .text("Order #: {{order_number}}")
        .text("Table: {{table_number}}")
        .text("Date: {{current_time}}")
        .separator()
        .end()
        .section("payment_details")
        .spacing_after(1)
        .conditional("has_discount_amount")
        .total_line("Original Amount:", "{{original_amount}}")
        .total_line("Discount ({{discount_name}}):", "-{{discount_amount}}")
        .end()
        .total_line("Total Amount:", "{{final_amount}}")
        .total_line("Payment Method:", "{{payment_method}}")
        .total_line("Amount Paid:", "{{amount_paid}}")
        .conditional("has_change")
        .total_line("Change:", "{{change}}")
        .end()
        .line(emphasized_total("PAID:", "{{final_amount}}"))
        .end()
        .section("footer")
        .center()
        .separator()
        .text("PAYMENT COMPLETED")
        .text("Please keep this receipt")
        .end()
        .build()
}
