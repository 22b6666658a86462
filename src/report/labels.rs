use serde::{Deserialize, Serialize};

/// Wording used in the rendered sheet.
///
/// Defaults to the Russian wording used on the warehouse floor;
/// [`Labels::english`] gives the English set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    /// First line of every sheet.
    pub header_marker: String,
    /// Title prefix, followed by the requested order numbers.
    pub title: String,
    /// Shelf header word, rendered as `===<shelf> <name>`.
    pub shelf: String,
    /// Word before the order number in a product block.
    pub order: String,
    /// Unit after the quantity.
    pub pieces: String,
    /// Prefix of the additional-shelves line.
    pub additional_shelves: String,
}

impl Default for Labels {
    /// Russian wording, e.g. `===Стеллаж A1`. Use [`Labels::english`] for
    /// the `===Shelf A1` form.
    fn default() -> Self {
        Self {
            header_marker: "=+=+=+=".to_string(),
            title: "Страница сборки заказов".to_string(),
            shelf: "Стеллаж".to_string(),
            order: "заказ".to_string(),
            pieces: "шт".to_string(),
            additional_shelves: "доп стеллаж".to_string(),
        }
    }
}

impl Labels {
    pub fn english() -> Self {
        Self {
            header_marker: "=+=+=+=".to_string(),
            title: "Order picking sheet".to_string(),
            shelf: "Shelf".to_string(),
            order: "order".to_string(),
            pieces: "pcs".to_string(),
            additional_shelves: "additional shelves".to_string(),
        }
    }
}
