//! Print service facade
//!
//! Ties the store, context builders and renderer together behind one
//! call per receipt kind. The caller supplies the domain record and a
//! byte sink; the transport that carries the bytes to a printer is the
//! caller's concern.

use crate::context::Context;
use crate::data;
use crate::defaults::{CUSTOMER_BILL, KITCHEN_CHECKER, PAYMENT_RECEIPT};
use crate::loader::TemplateStore;
use crate::renderer;
use galley_printer::PrintResult;
use shared::{BillCharges, Order, PaymentDetails};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Facade over template resolution and rendering
#[derive(Debug)]
pub struct PrintService {
    store: TemplateStore,
}

impl PrintService {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// A service loading template resources from a directory
    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(TemplateStore::new(dir))
    }

    /// A service that only uses the built-in default templates
    pub fn builtin() -> Self {
        Self::new(TemplateStore::builtin())
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Render a named template against an explicit context
    pub fn print<W: Write>(&self, name: &str, ctx: &Context, sink: &mut W) -> PrintResult<()> {
        let template = self.store.get(name);
        renderer::render(&template, ctx, sink)
    }

    pub fn print_kitchen_checker<W: Write>(&self, order: &Order, sink: &mut W) -> PrintResult<()> {
        info!(
            order = %order.order_number,
            table = %order.table_number,
            items = order.items.len(),
            "Printing kitchen ticket"
        );
        self.print(KITCHEN_CHECKER, &data::kitchen_checker_context(order), sink)
    }

    pub fn print_customer_bill<W: Write>(
        &self,
        order: &Order,
        charges: &BillCharges,
        sink: &mut W,
    ) -> PrintResult<()> {
        info!(
            order = %order.order_number,
            table = %order.table_number,
            "Printing customer bill"
        );
        self.print(
            CUSTOMER_BILL,
            &data::customer_bill_context(order, charges),
            sink,
        )
    }

    pub fn print_payment_receipt<W: Write>(
        &self,
        details: &PaymentDetails,
        sink: &mut W,
    ) -> PrintResult<()> {
        info!(
            order = %details.order_number,
            method = %details.payment_method,
            "Printing payment receipt"
        );
        self.print(
            PAYMENT_RECEIPT,
            &data::payment_receipt_context(details),
            sink,
        )
    }
}
