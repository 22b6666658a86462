//! The joined row the renderer consumes.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::order::ProductId;

/// One order line joined with its product and shelf data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub order_number: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Main shelf name; empty when the product has no main shelf.
    pub shelf_name: String,
    /// Non-main shelves, sorted ascending.
    pub additional_shelves: Vec<String>,
}

impl ReportLine {
    /// Whether the product has a main shelf at all.
    pub fn has_main_shelf(&self) -> bool {
        !self.shelf_name.is_empty()
    }

    /// Report order: shelf, then product name, then order number.
    ///
    /// Product id breaks the remaining ties so equal-named products
    /// always come out in the same order.
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.shelf_name
            .cmp(&other.shelf_name)
            .then_with(|| self.product_name.cmp(&other.product_name))
            .then_with(|| self.order_number.cmp(&other.order_number))
            .then_with(|| self.product_id.cmp(&other.product_id))
    }
}

/// Sort lines into report order. Stable, so duplicate order lines keep
/// their fetch order.
pub fn sort_report_lines(lines: &mut [ReportLine]) {
    lines.sort_by(ReportLine::report_order);
}
