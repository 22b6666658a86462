//! Order store access.
//!
//! The store is read through four lookups, each taking a set of keys and
//! returning rows:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        PickingStore                             │
//! │  resolve_orders(numbers)          → {order id → order number}   │
//! │  fetch_line_items(order ids)      → [OrderLineItem]             │
//! │  fetch_product_names(product ids) → {product id → name}         │
//! │  fetch_shelf_associations(ids)    → [ShelfAssociation]          │
//! │                                                                 │
//! │  fetch_report_lines(numbers)      → [ReportLine] (sorted)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `fetch_report_lines` defaults to running the four lookups and joining
//! them in memory (see [`crate::fetch`]). Stores that can join closer to
//! the data override it with a single query, as [`SqliteStore`] does.

pub mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::fetch;
use crate::model::{OrderId, OrderLineItem, ProductId, ReportLine, ShelfAssociation};

/// Errors that can occur while reading the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to open store '{location}': {source}")]
    Open {
        location: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid quantity {quantity} for product {product_id} in order {order_id}")]
    InvalidQuantity {
        order_id: OrderId,
        product_id: ProductId,
        quantity: i64,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to orders, products and shelves.
///
/// Every method is all-or-nothing: an error aborts the whole run and no
/// partial results are returned. Keys that match nothing are not errors.
pub trait PickingStore {
    /// Map order numbers to internal order ids.
    ///
    /// Duplicated numbers resolve to the same row; unknown numbers are
    /// silently absent from the result. Order numbers are opaque text:
    /// numeric columns are read through a text cast, so `"007"` and `"7"`
    /// are different orders.
    fn resolve_orders(
        &self,
        order_numbers: &BTreeSet<&str>,
    ) -> StoreResult<BTreeMap<OrderId, String>>;

    /// All line items of the given orders.
    fn fetch_line_items(&self, order_ids: &BTreeSet<OrderId>) -> StoreResult<Vec<OrderLineItem>>;

    /// Display names of the given products.
    fn fetch_product_names(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<HashMap<ProductId, String>>;

    /// Every shelf link, main and additional, of the given products.
    fn fetch_shelf_associations(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<Vec<ShelfAssociation>>;

    /// Report lines for every line item of every matched order, in report
    /// order (shelf, product name, order number).
    fn fetch_report_lines(&self, order_numbers: &BTreeSet<&str>) -> StoreResult<Vec<ReportLine>> {
        fetch::fetch_stepwise(self, order_numbers)
    }
}
