//! Tests for step-wise fetching and in-memory assembly.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use picklist::fetch::{assemble, fetch_stepwise};
use picklist::model::{OrderId, OrderLineItem, ProductId, ShelfAssociation};
use picklist::store::schema::DEMO_DATA_SQL;
use picklist::store::{PickingStore, SqliteStore, StoreResult};

/// Store held in plain vectors; counts lookups so tests can check that
/// empty results short-circuit.
#[derive(Default)]
struct VecStore {
    orders: Vec<(OrderId, String)>,
    items: Vec<OrderLineItem>,
    products: Vec<(ProductId, String)>,
    shelves: Vec<ShelfAssociation>,
    lookups: Cell<usize>,
}

impl VecStore {
    fn scenario() -> Self {
        Self {
            orders: vec![
                (1, "1001".to_string()),
                (2, "1002".to_string()),
            ],
            items: vec![
                OrderLineItem::new(1, 7, 3).unwrap(),
                OrderLineItem::new(2, 8, 1).unwrap(),
            ],
            products: vec![(7, "Widget".to_string()), (8, "Gadget".to_string())],
            shelves: vec![
                ShelfAssociation::main(7, "A1"),
                ShelfAssociation::additional(7, "B2"),
                ShelfAssociation::additional(7, "A9"),
                ShelfAssociation::main(8, "A1"),
            ],
            lookups: Cell::new(0),
        }
    }

    fn count(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }
}

impl PickingStore for VecStore {
    fn resolve_orders(
        &self,
        order_numbers: &BTreeSet<&str>,
    ) -> StoreResult<BTreeMap<OrderId, String>> {
        self.count();
        Ok(self
            .orders
            .iter()
            .filter(|(_, number)| order_numbers.contains(number.as_str()))
            .cloned()
            .collect())
    }

    fn fetch_line_items(&self, order_ids: &BTreeSet<OrderId>) -> StoreResult<Vec<OrderLineItem>> {
        self.count();
        Ok(self
            .items
            .iter()
            .filter(|i| order_ids.contains(&i.order_id))
            .copied()
            .collect())
    }

    fn fetch_product_names(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<HashMap<ProductId, String>> {
        self.count();
        Ok(self
            .products
            .iter()
            .filter(|(id, _)| product_ids.contains(id))
            .cloned()
            .collect())
    }

    fn fetch_shelf_associations(
        &self,
        product_ids: &BTreeSet<ProductId>,
    ) -> StoreResult<Vec<ShelfAssociation>> {
        self.count();
        Ok(self
            .shelves
            .iter()
            .filter(|s| product_ids.contains(&s.product_id))
            .cloned()
            .collect())
    }
}

fn numbers<'a>(values: &[&'a str]) -> BTreeSet<&'a str> {
    values.iter().copied().collect()
}

// ============================================================================
// Default trait path
// ============================================================================

#[test]
fn test_default_fetch_report_lines() {
    let store = VecStore::scenario();
    let lines = store.fetch_report_lines(&numbers(&["1001", "1002"])).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product_name, "Gadget");
    assert_eq!(lines[0].shelf_name, "A1");
    assert!(lines[0].additional_shelves.is_empty());
    assert_eq!(lines[1].product_name, "Widget");
    assert_eq!(lines[1].order_number, "1001");
    assert_eq!(lines[1].quantity, 3);
    assert_eq!(lines[1].additional_shelves, ["A9", "B2"]);
    assert_eq!(store.lookups.get(), 4);
}

#[test]
fn test_unknown_orders_stop_after_first_lookup() {
    let store = VecStore::scenario();
    let lines = fetch_stepwise(&store, &numbers(&["404"])).unwrap();

    assert!(lines.is_empty());
    assert_eq!(store.lookups.get(), 1);
}

#[test]
fn test_order_without_items_stops_after_line_items() {
    let mut store = VecStore::scenario();
    store.orders.push((3, "1003".to_string()));

    let lines = fetch_stepwise(&store, &numbers(&["1003"])).unwrap();
    assert!(lines.is_empty());
    assert_eq!(store.lookups.get(), 2);
}

#[test]
fn test_works_through_trait_object() {
    let store = VecStore::scenario();
    let dyn_store: &dyn PickingStore = &store;
    let lines = dyn_store.fetch_report_lines(&numbers(&["1001"])).unwrap();
    assert_eq!(lines.len(), 1);
}

// ============================================================================
// assemble
// ============================================================================

#[test]
fn test_assemble_sorts_additional_shelves() {
    let orders: BTreeMap<_, _> = [(1, "1001".to_string())].into_iter().collect();
    let items = [OrderLineItem::new(1, 7, 3).unwrap()];
    let names: HashMap<_, _> = [(7, "Widget".to_string())].into_iter().collect();
    let shelves = [
        ShelfAssociation::additional(7, "Z9"),
        ShelfAssociation::additional(7, "B2"),
        ShelfAssociation::main(7, "A1"),
        ShelfAssociation::additional(7, "A9"),
    ];

    let lines = assemble(&orders, &items, &names, &shelves);
    assert_eq!(lines[0].additional_shelves, ["A9", "B2", "Z9"]);
}

#[test]
fn test_assemble_orders_by_shelf_product_order() {
    let orders: BTreeMap<_, _> = [
        (1, "1001".to_string()),
        (2, "1002".to_string()),
    ]
    .into_iter()
    .collect();
    let items = [
        OrderLineItem::new(2, 7, 1).unwrap(),
        OrderLineItem::new(1, 9, 1).unwrap(),
        OrderLineItem::new(1, 7, 1).unwrap(),
        OrderLineItem::new(2, 8, 1).unwrap(),
    ];
    let names: HashMap<_, _> = [
        (7, "Widget".to_string()),
        (8, "Gadget".to_string()),
        (9, "Anvil".to_string()),
    ]
    .into_iter()
    .collect();
    let shelves = [
        ShelfAssociation::main(7, "A1"),
        ShelfAssociation::main(8, "A1"),
        ShelfAssociation::main(9, "B1"),
    ];

    let lines = assemble(&orders, &items, &names, &shelves);
    let keys: Vec<_> = lines
        .iter()
        .map(|l| (l.shelf_name.as_str(), l.product_name.as_str(), l.order_number.as_str()))
        .collect();
    assert_eq!(
        keys,
        [
            ("A1", "Gadget", "1002"),
            ("A1", "Widget", "1001"),
            ("A1", "Widget", "1002"),
            ("B1", "Anvil", "1001"),
        ]
    );
}

#[test]
fn test_assemble_product_without_main_shelf() {
    let orders: BTreeMap<_, _> = [(1, "1001".to_string())].into_iter().collect();
    let items = [OrderLineItem::new(1, 10, 2).unwrap()];
    let names: HashMap<_, _> = [(10, "Loose bolt".to_string())].into_iter().collect();
    let shelves = [ShelfAssociation::additional(10, "B2")];

    let lines = assemble(&orders, &items, &names, &shelves);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].shelf_name, "");
    assert_eq!(lines[0].additional_shelves, ["B2"]);
}

#[test]
fn test_assemble_product_without_any_shelf() {
    let orders: BTreeMap<_, _> = [(1, "1001".to_string())].into_iter().collect();
    let items = [OrderLineItem::new(1, 10, 2).unwrap()];
    let names: HashMap<_, _> = [(10, "Loose bolt".to_string())].into_iter().collect();

    let lines = assemble(&orders, &items, &names, &[]);
    assert_eq!(lines[0].shelf_name, "");
    assert!(lines[0].additional_shelves.is_empty());
}

#[test]
fn test_assemble_skips_unknown_product() {
    let orders: BTreeMap<_, _> = [(1, "1001".to_string())].into_iter().collect();
    let items = [
        OrderLineItem::new(1, 7, 1).unwrap(),
        OrderLineItem::new(1, 404, 1).unwrap(),
    ];
    let names: HashMap<_, _> = [(7, "Widget".to_string())].into_iter().collect();

    let lines = assemble(&orders, &items, &names, &[ShelfAssociation::main(7, "A1")]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, 7);
}

// ============================================================================
// Step-wise vs aggregate
// ============================================================================

#[test]
fn test_stepwise_matches_aggregate_query() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.execute_batch(DEMO_DATA_SQL).unwrap();
    store
        .execute_batch(
            "
            INSERT INTO orders (id, order_number) VALUES (4, '1004');
            INSERT INTO order_items (order_id, product_id, quantity) VALUES
                (4, 7, 1),
                (4, 9, 2),
                (1, 7, 4);
            ",
        )
        .unwrap();

    for requested in [
        vec!["1001"],
        vec!["1001", "1002"],
        vec!["1003", "1004", "1001", "9999"],
        vec!["9999"],
    ] {
        let requested = numbers(&requested);
        let stepwise = fetch_stepwise(&store, &requested).unwrap();
        let aggregate = store.fetch_report_lines(&requested).unwrap();
        assert_eq!(stepwise, aggregate, "requested: {:?}", requested);
    }
}
