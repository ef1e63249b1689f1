//! Template-driven receipt rendering
//!
//! Turns a declarative template document (sections, item loops,
//! conditional blocks, formatted totals) plus a run-time data context
//! into a complete printer byte stream. Templates are authored either
//! as JSON resources or in code via [`TemplateBuilder`], loaded through
//! a caching [`TemplateStore`] that falls back to built-in defaults,
//! and rendered against a [`Context`] assembled from domain records.
//!
//! ```no_run
//! use galley_engine::PrintService;
//! use shared::{Order, OrderItem};
//!
//! let service = PrintService::builtin();
//! let order = Order {
//!     order_number: "ORD-17".into(),
//!     table_number: "T5".into(),
//!     customer_name: None,
//!     created_at: None,
//!     server_id: 3,
//!     order_type_name: None,
//!     items: vec![OrderItem::new("Nasi Goreng", 2, 35_000.0)],
//!     total_amount: 70_000.0,
//!     final_amount: 70_000.0,
//! };
//!
//! let mut bytes = Vec::new();
//! service.print_kitchen_checker(&order, &mut bytes).unwrap();
//! // hand `bytes` to the printer transport
//! ```

mod builder;
mod context;
mod data;
mod defaults;
mod error;
mod loader;
mod renderer;
mod service;
mod template;

pub use builder::{
    ConditionalBuilder, LoopBuilder, LoopConditionalBuilder, SectionBuilder, TemplateBuilder,
};
pub use context::Context;
pub use data::{
    customer_bill_context, format_currency, kitchen_checker_context, payment_receipt_context,
};
pub use defaults::{CUSTOMER_BILL, KITCHEN_CHECKER, PAYMENT_RECEIPT, default_for};
pub use error::{TemplateError, TemplateResult};
pub use loader::{TemplateStore, parse, serialize};
pub use renderer::render;
pub use service::PrintService;
pub use template::{DEFAULT_SEPARATOR, Formatting, Line, Section, Template};
