//! Picking sheet rendering.
//!
//! Lines are grouped by main shelf purely by adjacency: a new shelf header
//! starts whenever the shelf name differs from the previous line's. Sorting
//! is the fetch layer's job, never the renderer's.

mod labels;

pub use labels::Labels;

use std::fmt;

use crate::model::ReportLine;

/// A renderable picking sheet.
///
/// Borrowing the lines keeps rendering side-effect free: displaying the
/// same sheet twice yields identical text.
#[derive(Debug, Clone, Copy)]
pub struct PickingSheet<'a> {
    title_orders: &'a str,
    lines: &'a [ReportLine],
    labels: &'a Labels,
}

impl<'a> PickingSheet<'a> {
    /// `title_orders` is shown verbatim in the title line.
    pub fn new(title_orders: &'a str, lines: &'a [ReportLine], labels: &'a Labels) -> Self {
        Self {
            title_orders,
            lines,
            labels,
        }
    }

    /// Number of shelf groups the sheet will show.
    pub fn shelf_count(&self) -> usize {
        shelf_runs(self.lines).count()
    }

    /// Render to a string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PickingSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels;

        writeln!(f, "{}", labels.header_marker)?;
        writeln!(f, "{} {}", labels.title, self.title_orders)?;
        writeln!(f)?;

        for (index, (shelf, lines)) in shelf_runs(self.lines).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "==={} {}", labels.shelf, shelf)?;

            for line in lines {
                write_product_block(f, line, labels)?;
            }
        }

        Ok(())
    }
}

fn write_product_block(
    f: &mut fmt::Formatter<'_>,
    line: &ReportLine,
    labels: &Labels,
) -> fmt::Result {
    write!(f, "\n{} (id={})", line.product_name, line.product_id)?;
    write!(
        f,
        "\n{} {}, {} {}",
        labels.order, line.order_number, line.quantity, labels.pieces
    )?;
    if !line.additional_shelves.is_empty() {
        write!(
            f,
            "\n{}: {}",
            labels.additional_shelves,
            line.additional_shelves.join(",")
        )?;
    }
    writeln!(f)
}

/// Split lines into maximal runs sharing a shelf name.
fn shelf_runs<'a>(lines: &'a [ReportLine]) -> impl Iterator<Item = (&'a str, &'a [ReportLine])> {
    lines
        .chunk_by(|a, b| a.shelf_name == b.shelf_name)
        .map(|run| (run[0].shelf_name.as_str(), run))
}

/// Render `lines` as a picking sheet titled with `title_orders`.
pub fn render(title_orders: &str, lines: &[ReportLine], labels: &Labels) -> String {
    PickingSheet::new(title_orders, lines, labels).render()
}
