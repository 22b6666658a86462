//! # Picklist
//!
//! Builds warehouse order-picking sheets: given a list of order numbers, it
//! looks up the ordered products and the shelves they are stocked on, then
//! renders a text report grouped by main shelf.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          "1001,1002"  (OrderSelection)                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [store / fetch]
//! ┌─────────────────────────────────────────────────────────┐
//! │  orders ⋈ order_items ⋈ products ⋈ product_shelves       │
//! │  → Vec<ReportLine> sorted by shelf, product, order       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [report]
//! ┌─────────────────────────────────────────────────────────┐
//! │        PickingSheet (text grouped by main shelf)         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod fetch;
pub mod generate;
pub mod logging;
pub mod model;
pub mod report;
pub mod store;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{ConnectionConfig, Settings};
    pub use crate::generate::{
        generate_from_connection, generate_sheet, GenerateOptions, PicklistError,
    };
    pub use crate::model::{OrderSelection, ReportLine};
    pub use crate::report::{Labels, PickingSheet};
    pub use crate::store::{PickingStore, SqliteStore};
}

pub use generate::{generate_from_connection, generate_sheet, GenerateOptions, PicklistError};
pub use model::{OrderSelection, ReportLine};
pub use report::{Labels, PickingSheet};
pub use store::{PickingStore, SqliteStore};
