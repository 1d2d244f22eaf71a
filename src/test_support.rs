//! Builders for unit tests

use crate::types::{Customer, DataBundle, Item, Product, PurchaseRecord, Seller};

pub fn seller(id: &str, first_name: &str, last_name: &str) -> Seller {
    Seller {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

pub fn product(sku: &str, purchase_price: f64) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
        name: None,
    }
}

pub fn item(sku: &str, quantity: u32, sale_price: f64, discount: f64) -> Item {
    Item {
        sku: sku.to_string(),
        quantity,
        sale_price,
        discount,
    }
}

pub fn record(seller_id: &str, total_amount: f64, items: Vec<Item>) -> PurchaseRecord {
    PurchaseRecord {
        receipt_id: None,
        seller_id: seller_id.to_string(),
        customer_id: None,
        total_amount,
        items,
    }
}

pub fn customer(id: &str) -> Customer {
    Customer {
        id: id.to_string(),
        first_name: None,
        last_name: None,
    }
}

/// One seller, one product, one sale of two units at 50 against a cost of 10
pub fn sample_bundle() -> DataBundle {
    DataBundle {
        sellers: vec![seller("S1", "Ann", "Lee")],
        products: vec![product("P1", 10.0)],
        customers: vec![customer("C1")],
        purchase_records: vec![record("S1", 90.0, vec![item("P1", 2, 50.0, 0.0)])],
    }
}
