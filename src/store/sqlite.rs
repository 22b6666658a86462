//! SQLite-backed order store.
//!
//! Set-valued parameters are bound as a single JSON array and expanded
//! with `json_each`, so every lookup is one prepared statement regardless
//! of how many keys it is given. List-valued columns come back as
//! `json_group_array` text and are decoded with serde_json.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rusqlite::{params, Connection, OpenFlags, Row};
use serde::Serialize;

use super::schema::SCHEMA_SQL;
use super::{PickingStore, StoreError, StoreResult};
use crate::config::{ConnectionConfig, StoreLocation};
use crate::model::{
    sort_report_lines, OrderId, OrderLineItem, ProductId, ReportLine, ShelfAssociation,
};

const RESOLVE_ORDERS_SQL: &str = "
    SELECT o.id, CAST(o.order_number AS TEXT)
    FROM orders o
    WHERE o.order_number IN (SELECT value FROM json_each(?1))
    ORDER BY o.id
";

const LINE_ITEMS_SQL: &str = "
    SELECT oi.order_id, oi.product_id, oi.quantity
    FROM order_items oi
    WHERE oi.order_id IN (SELECT value FROM json_each(?1))
    ORDER BY oi.order_id, oi.id
";

const PRODUCT_NAMES_SQL: &str = "
    SELECT p.id, p.name
    FROM products p
    WHERE p.id IN (SELECT value FROM json_each(?1))
";

const SHELF_ASSOCIATIONS_SQL: &str = "
    SELECT ps.product_id, s.name, ps.is_main
    FROM product_shelves ps
    JOIN shelves s ON s.id = ps.shelf_id
    WHERE ps.product_id IN (SELECT value FROM json_each(?1))
    ORDER BY ps.product_id, ps.is_main DESC, s.name
";

/// Whole picking relation in one statement: main shelf and sorted
/// additional shelves are aggregated per product by correlated subqueries.
const REPORT_LINES_SQL: &str = "
    SELECT
        CAST(o.order_number AS TEXT) AS order_number,
        p.id AS product_id,
        p.name AS product_name,
        oi.order_id,
        oi.quantity,
        COALESCE((
            SELECT MIN(s.name)
            FROM product_shelves ps
            JOIN shelves s ON s.id = ps.shelf_id
            WHERE ps.product_id = p.id AND ps.is_main
        ), '') AS shelf_name,
        (
            SELECT COUNT(*)
            FROM product_shelves ps
            WHERE ps.product_id = p.id AND ps.is_main
        ) AS main_shelf_count,
        (
            SELECT json_group_array(name)
            FROM (
                SELECT s.name AS name
                FROM product_shelves ps
                JOIN shelves s ON s.id = ps.shelf_id
                WHERE ps.product_id = p.id AND NOT ps.is_main
                ORDER BY s.name
            )
        ) AS additional_shelves
    FROM orders o
    JOIN order_items oi ON oi.order_id = o.id
    JOIN products p ON p.id = oi.product_id
    WHERE o.order_number IN (SELECT value FROM json_each(?1))
    ORDER BY shelf_name, product_name, order_number, product_id, oi.order_id, oi.id
";

/// Order store on a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store described by `config`.
    ///
    /// Database files are opened read-only; a missing file is an error
    /// rather than a fresh empty database.
    pub fn open(config: &ConnectionConfig) -> StoreResult<Self> {
        let conn = match &config.location {
            StoreLocation::Memory => Connection::open_in_memory(),
            StoreLocation::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
        }
        .map_err(|source| StoreError::Open {
            location: config.to_connection_string(),
            source,
        })?;

        tracing::debug!(location = %config.to_connection_string(), "Opened order store");
        Ok(Self { conn })
    }

    /// Open an empty in-memory store with the schema applied (for testing
    /// and demos).
    pub fn open_in_memory() -> StoreResult<Self> {
        let store = Self::from_connection(Connection::open_in_memory()?);
        store.init_schema()?;
        Ok(store)
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create the picking tables if they don't exist.
    pub fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Run a batch of SQL statements, e.g. fixture inserts.
    pub fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error from SQLite.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}

/// Encode a key set as the JSON array bound to `json_each(?1)`.
fn json_keys<T: Serialize>(keys: &T) -> StoreResult<String> {
    Ok(serde_json::to_string(keys)?)
}

fn decode_shelf_list(json: Option<String>) -> StoreResult<Vec<String>> {
    let mut shelves: Vec<String> = match json {
        Some(s) => serde_json::from_str(&s)?,
        None => Vec::new(),
    };
    shelves.sort();
    Ok(shelves)
}

fn line_item(
    order_id: OrderId,
    product_id: ProductId,
    quantity: i64,
) -> StoreResult<OrderLineItem> {
    OrderLineItem::new(order_id, product_id, quantity).ok_or(StoreError::InvalidQuantity {
        order_id,
        product_id,
        quantity,
    })
}

/// Raw row of [`REPORT_LINES_SQL`], before validation.
struct ReportRow {
    order_number: String,
    product_id: ProductId,
    product_name: String,
    order_id: OrderId,
    quantity: i64,
    shelf_name: String,
    main_shelf_count: i64,
    additional_shelves: Option<String>,
}

impl ReportRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            order_number: row.get("order_number")?,
            product_id: row.get("product_id")?,
            product_name: row.get("product_name")?,
            order_id: row.get("order_id")?,
            quantity: row.get("quantity")?,
            shelf_name: row.get("shelf_name")?,
            main_shelf_count: row.get("main_shelf_count")?,
            additional_shelves: row.get("additional_shelves")?,
        })
    }
}

impl PickingStore for SqliteStore {
    fn resolve_orders(
        &self,
        order_numbers: &BTreeSet<&str>,
    ) -> StoreResult<BTreeMap<OrderId, String>> {
        let mut stmt = self.conn.prepare(RESOLVE_ORDERS_SQL)?;
        let orders = stmt
            .query_map(params![json_keys(order_numbers)?], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<BTreeMap<OrderId, String>, _>>()?;

        tracing::debug!(
            requested = order_numbers.len(),
            matched = orders.len(),
            "Resolved orders"
        );
        Ok(orders)
    }

    fn fetch_line_items(&self, order_ids: &BTreeSet<OrderId>) -> StoreResult<Vec<OrderLineItem>> {
        let mut stmt = self.conn.prepare(LINE_ITEMS_SQL)?;
        let rows = stmt
            .query_map(params![json_keys(order_ids)?], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<(OrderId, ProductId, i64)>, _>>()?;

        rows.into_iter()
            .map(|(order_id, product_id, quantity)| line_item(order_id, product_id, quantity))
            .collect()
    }

    fn fetch_product_names(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<HashMap<ProductId, String>> {
        let mut stmt = self.conn.prepare(PRODUCT_NAMES_SQL)?;
        let names = stmt
            .query_map(params![json_keys(product_ids)?], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<HashMap<ProductId, String>, _>>()?;
        Ok(names)
    }

    fn fetch_shelf_associations(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<Vec<ShelfAssociation>> {
        let mut stmt = self.conn.prepare(SHELF_ASSOCIATIONS_SQL)?;
        let associations = stmt
            .query_map(params![json_keys(product_ids)?], |row| {
                Ok(ShelfAssociation {
                    product_id: row.get(0)?,
                    shelf_name: row.get(1)?,
                    is_main: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(associations)
    }

    fn fetch_report_lines(&self, order_numbers: &BTreeSet<&str>) -> StoreResult<Vec<ReportLine>> {
        let mut stmt = self.conn.prepare(REPORT_LINES_SQL)?;
        let rows = stmt
            .query_map(params![json_keys(order_numbers)?], ReportRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut warned = BTreeSet::new();
        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            let item = line_item(row.order_id, row.product_id, row.quantity)?;
            if row.main_shelf_count > 1 && warned.insert(row.product_id) {
                tracing::warn!(
                    product_id = row.product_id,
                    main_shelves = row.main_shelf_count,
                    shelf = %row.shelf_name,
                    "Product has several main shelves; using the first by name"
                );
            }
            lines.push(ReportLine {
                order_number: row.order_number,
                product_id: row.product_id,
                product_name: row.product_name,
                quantity: item.quantity,
                shelf_name: row.shelf_name,
                additional_shelves: decode_shelf_list(row.additional_shelves)?,
            });
        }

        // Byte-wise order regardless of the column collation.
        sort_report_lines(&mut lines);

        tracing::debug!(lines = lines.len(), "Fetched report lines");
        Ok(lines)
    }
}
