//! Step-wise fetching and in-memory assembly of report lines.
//!
//! This is the generic path behind [`PickingStore::fetch_report_lines`]:
//! four keyed lookups, then a join on order id and product id.
//!
//! ```text
//! order numbers ─► resolve_orders ─► order ids ─► fetch_line_items
//!                                                      │
//!                          product ids (deduplicated) ◄┘
//!                            │                 │
//!              fetch_product_names   fetch_shelf_associations
//!                            └───────► assemble ◄┘
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::model::{
    sort_report_lines, OrderId, OrderLineItem, ProductId, ReportLine, ShelfAssociation,
};
use crate::store::{PickingStore, StoreResult};

/// Shelves of one product, split into main and additional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfPlacement {
    /// Main shelf, if the product has one.
    pub main: Option<String>,
    /// Additional shelves, sorted ascending.
    pub additional: Vec<String>,
}

/// Run the four lookups and assemble their results.
pub fn fetch_stepwise<S: PickingStore + ?Sized>(
    store: &S,
    order_numbers: &BTreeSet<&str>,
) -> StoreResult<Vec<ReportLine>> {
    let orders = store.resolve_orders(order_numbers)?;
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: BTreeSet<OrderId> = orders.keys().copied().collect();
    let items = store.fetch_line_items(&order_ids)?;

    let product_ids: BTreeSet<ProductId> = items.iter().map(|item| item.product_id).collect();
    if product_ids.is_empty() {
        return Ok(Vec::new());
    }

    let names = store.fetch_product_names(&product_ids)?;
    let associations = store.fetch_shelf_associations(&product_ids)?;

    Ok(assemble(&orders, &items, &names, &associations))
}

/// Group shelf associations by product.
///
/// Additional shelves are sorted. When a product has several main shelves
/// the smallest name wins and a warning is logged.
pub fn group_shelves(associations: &[ShelfAssociation]) -> HashMap<ProductId, ShelfPlacement> {
    let mut placements: HashMap<ProductId, ShelfPlacement> = HashMap::new();
    let mut main_counts: BTreeMap<ProductId, usize> = BTreeMap::new();

    for association in associations {
        let placement = placements.entry(association.product_id).or_default();
        if association.is_main {
            *main_counts.entry(association.product_id).or_default() += 1;
            let shelf = &association.shelf_name;
            if placement.main.as_ref().map_or(true, |current| shelf < current) {
                placement.main = Some(shelf.clone());
            }
        } else {
            placement.additional.push(association.shelf_name.clone());
        }
    }

    for (product_id, count) in main_counts.into_iter().filter(|(_, count)| *count > 1) {
        tracing::warn!(
            product_id,
            main_shelves = count,
            "Product has several main shelves; using the first by name"
        );
    }

    for placement in placements.values_mut() {
        placement.additional.sort();
    }

    placements
}

/// Join line items with their order numbers, product names and shelves.
///
/// Returns lines in report order. Line items whose order or product row is
/// missing are skipped with a warning; products without a main shelf get
/// an empty shelf name.
pub fn assemble(
    orders: &BTreeMap<OrderId, String>,
    items: &[OrderLineItem],
    product_names: &HashMap<ProductId, String>,
    associations: &[ShelfAssociation],
) -> Vec<ReportLine> {
    let placements = group_shelves(associations);
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let Some(order_number) = orders.get(&item.order_id) else {
            tracing::warn!(
                order_id = item.order_id,
                "Line item for an unrequested order; skipping"
            );
            continue;
        };
        let Some(product_name) = product_names.get(&item.product_id) else {
            tracing::warn!(
                order_id = item.order_id,
                product_id = item.product_id,
                "Line item references an unknown product; skipping"
            );
            continue;
        };

        let placement = placements.get(&item.product_id);
        lines.push(ReportLine {
            order_number: order_number.clone(),
            product_id: item.product_id,
            product_name: product_name.clone(),
            quantity: item.quantity,
            shelf_name: placement.and_then(|p| p.main.clone()).unwrap_or_default(),
            additional_shelves: placement.map(|p| p.additional.clone()).unwrap_or_default(),
        });
    }

    sort_report_lines(&mut lines);
    lines
}
