//! # Order Reports
//!
//! Structured snapshots of stored orders, plus text and JSON renderers.
//! The service only builds the data; printing is up to the caller.
//!
//! ## Text Layout
//! ```text
//! =================
//! Pedido ID: 1
//! Cliente: Maria
//! Data: 15/03/2024 14:30:00
//! Itens:
//! - Notebook x1 - R$ 3000.00
//! - HD Externo x3 - R$ 1500.00
//! Total com desconto: R$ 4275.00
//! =================
//! ```

use chrono::{DateTime, Utc};
use loja_core::{Money, Order, OrderId};
use serde::Serialize;
use std::fmt;

use crate::error::OrdersResult;

/// Separator printed before and after each order block.
pub const SEPARATOR: &str = "=================";

/// Timestamp format used in the text report.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One line of an order report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: Money,
    pub discount: Money,
    /// `subtotal - discount`.
    pub net: Money,
}

/// Everything shown for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub id: OrderId,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<LineReport>,
    pub discount_total: Money,
    pub total: Money,
}

impl From<&Order> for OrderReport {
    fn from(order: &Order) -> Self {
        OrderReport {
            id: order.id(),
            customer_name: order.customer().name().to_string(),
            created_at: order.created_at(),
            lines: order
                .lines_with_discounts()
                .map(|(line, discount)| LineReport {
                    product_name: line.product().name().to_string(),
                    quantity: line.quantity(),
                    subtotal: line.subtotal(),
                    discount,
                    net: line.subtotal() - discount,
                })
                .collect(),
            discount_total: order.discount_total(),
            total: order.total(),
        }
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Pedido ID: {}", self.id)?;
        writeln!(f, "Cliente: {}", self.customer_name)?;
        writeln!(f, "Data: {}", self.created_at.format(DATE_FORMAT))?;
        writeln!(f, "Itens:")?;
        for line in &self.lines {
            writeln!(f, "- {} x{} - {}", line.product_name, line.quantity, line.subtotal)?;
        }
        writeln!(f, "Total com desconto: {}", self.total)?;
        writeln!(f, "{SEPARATOR}")
    }
}

/// Renders every report as consecutive text blocks.
pub fn render_text(reports: &[OrderReport]) -> String {
    reports.iter().map(OrderReport::to_string).collect()
}

/// Renders the reports as a pretty-printed JSON array.
pub fn render_json(reports: &[OrderReport]) -> OrdersResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
