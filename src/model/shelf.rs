use serde::{Deserialize, Serialize};

use super::order::ProductId;

/// Link between a product and a shelf it is stocked on.
///
/// Each ordered product is expected to have exactly one `is_main` link; any
/// number of non-main links list the additional picking locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfAssociation {
    pub product_id: ProductId,
    pub shelf_name: String,
    pub is_main: bool,
}

impl ShelfAssociation {
    pub fn main(product_id: ProductId, shelf_name: impl Into<String>) -> Self {
        Self {
            product_id,
            shelf_name: shelf_name.into(),
            is_main: true,
        }
    }

    pub fn additional(product_id: ProductId, shelf_name: impl Into<String>) -> Self {
        Self {
            product_id,
            shelf_name: shelf_name.into(),
            is_main: false,
        }
    }
}
