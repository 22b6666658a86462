//! Order store schema and demo data.

/// DDL for the tables the picking queries read.
pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY,
    order_number TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_orders_order_number ON orders (order_number);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS shelves (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS order_items (
    id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL REFERENCES orders (id),
    product_id INTEGER NOT NULL REFERENCES products (id),
    quantity INTEGER NOT NULL CHECK (quantity > 0)
);

CREATE INDEX IF NOT EXISTS idx_order_items_order_id ON order_items (order_id);

CREATE TABLE IF NOT EXISTS product_shelves (
    product_id INTEGER NOT NULL REFERENCES products (id),
    shelf_id INTEGER NOT NULL REFERENCES shelves (id),
    is_main BOOLEAN NOT NULL DEFAULT 0,
    PRIMARY KEY (product_id, shelf_id)
);
";

/// A small warehouse: a product stocked on several shelves, two products
/// sharing a main shelf and one product with no main shelf.
pub const DEMO_DATA_SQL: &str = "
INSERT INTO orders (id, order_number) VALUES
    (1, '1001'),
    (2, '1002'),
    (3, '1003');

INSERT INTO products (id, name) VALUES
    (7, 'Widget'),
    (8, 'Gadget'),
    (9, 'Sprocket'),
    (10, 'Loose bolt');

INSERT INTO shelves (id, name) VALUES
    (1, 'A1'),
    (2, 'A9'),
    (3, 'B2'),
    (4, 'C4');

INSERT INTO order_items (order_id, product_id, quantity) VALUES
    (1, 7, 3),
    (2, 8, 1),
    (3, 9, 5),
    (3, 10, 12);

INSERT INTO product_shelves (product_id, shelf_id, is_main) VALUES
    (7, 1, 1),
    (7, 3, 0),
    (7, 2, 0),
    (8, 1, 1),
    (9, 4, 1),
    (9, 1, 0),
    (10, 3, 0);
";
