//! Order, product and shelf types read from the store.
//!
//! Everything here is request-scoped and immutable once built: the store is
//! only ever read, and a [`ReportLine`] lives for exactly one render.

pub mod order;
pub mod report_line;
pub mod selection;
pub mod shelf;

pub use order::{OrderId, OrderLineItem, ProductId};
pub use report_line::{sort_report_lines, ReportLine};
pub use selection::{OrderSelection, SelectionError};
pub use shelf::ShelfAssociation;
