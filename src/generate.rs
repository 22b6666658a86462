//! End-to-end picking sheet generation.
//!
//! ```text
//! OrderSelection → PickingStore::fetch_report_lines → PickingSheet → text
//! ```
//!
//! # Example
//!
//! ```ignore
//! use picklist::prelude::*;
//!
//! let store = SqliteStore::open(&ConnectionConfig::from_env()?)?;
//! let selection = OrderSelection::parse("1001,1002")?;
//! let sheet = generate_sheet(&store, &selection, &GenerateOptions::default())?;
//! println!("{}", sheet);
//! store.close()?;
//! ```

use std::collections::BTreeSet;

use crate::config::{ConnectionConfig, ConnectionError, SettingsError};
use crate::model::{OrderSelection, ReportLine, SelectionError};
use crate::report::{Labels, PickingSheet};
use crate::store::{PickingStore, SqliteStore, StoreError};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that abort a picklist run.
#[derive(Debug, thiserror::Error)]
pub enum PicklistError {
    #[error("Invalid order list: {0}")]
    Selection(#[from] SelectionError),

    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type PicklistResult<T> = Result<T, PicklistError>;

// ============================================================================
// Options
// ============================================================================

/// Options for sheet generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Wording of the rendered sheet.
    pub labels: Labels,
}

impl GenerateOptions {
    /// Set the sheet wording.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Fetch the picking relation for `selection` and render it.
///
/// Either the whole sheet is produced or an error is returned; there is
/// no partial output.
pub fn generate_sheet<S: PickingStore + ?Sized>(
    store: &S,
    selection: &OrderSelection,
    options: &GenerateOptions,
) -> PicklistResult<String> {
    let lines = store.fetch_report_lines(&selection.distinct())?;
    warn_missing_main_shelves(&lines);

    let sheet = PickingSheet::new(selection.raw(), &lines, &options.labels);
    tracing::info!(
        orders = selection.numbers().len(),
        lines = lines.len(),
        shelves = sheet.shelf_count(),
        "Picking sheet generated"
    );

    Ok(sheet.render())
}

/// Open the store at `connection`, generate the sheet and close the store.
///
/// The store is closed on both the success and the error path.
pub fn generate_from_connection(
    connection: &ConnectionConfig,
    selection: &OrderSelection,
    options: &GenerateOptions,
) -> PicklistResult<String> {
    let store = SqliteStore::open(connection)?;
    let sheet = generate_sheet(&store, selection, options);
    let closed = store.close();

    let sheet = sheet?;
    closed?;
    Ok(sheet)
}

fn warn_missing_main_shelves(lines: &[ReportLine]) {
    let orphans: BTreeSet<_> = lines
        .iter()
        .filter(|line| !line.has_main_shelf())
        .map(|line| line.product_id)
        .collect();

    for product_id in orphans {
        tracing::warn!(
            product_id,
            "Product has no main shelf; listed under an empty shelf name"
        );
    }
}
