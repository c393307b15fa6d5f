//! Crawl aggregation wired together from real markup fixtures: pages
//! are parsed with the HTML extractor, accumulated into categories the
//! way a worker does, partitioned into batches and flattened into rows.

use crate::catalog::{Category, Store, split_into_batches};
use crate::parsers::html;
use crate::results::{CSV_HEADERS, CsvRow};
use std::collections::HashSet;

const BASE_URL: &str = "https://market.example";

fn listing_page(product_ids: &[u32]) -> String {
    let cards: String = product_ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="ProductCard_root__h7f2k"><a href="/products/{id}">
                    <h3>Product {id}</h3>
                    <span class="ProductCardPrice_price__1x9q">{id},99</span>
                </a></div>"#
            )
        })
        .collect();
    format!("<html><body>{cards}</body></html>")
}

fn category(name: &str, sid: i32) -> Category {
    Category::new(
        format!("{BASE_URL}/categories/{name}?sid={sid}"),
        name.to_string(),
        name.to_string(),
        false,
    )
}

#[test]
fn test_two_stores_two_categories_aggregate() {
    // Store 1, category "dairy" spans two pages (3 + 2 products);
    // every other category fits on one page
    let mut dairy = category("dairy", 1);
    dairy.add_products(html::extract_products(&listing_page(&[1, 2, 3]), BASE_URL));
    dairy.add_products(html::extract_products(&listing_page(&[4, 5]), BASE_URL));

    let mut bakery = category("bakery", 1);
    bakery.add_products(html::extract_products(&listing_page(&[6]), BASE_URL));

    let mut drinks = category("drinks", 2);
    drinks.add_products(html::extract_products(&listing_page(&[7, 8]), BASE_URL));

    let mut snacks = category("snacks", 2);
    snacks.add_products(html::extract_products(&listing_page(&[9]), BASE_URL));

    let mut stores = HashSet::new();
    stores.insert(Store::new(1, "Metro".to_string(), vec![dairy, bakery]));
    stores.insert(Store::new(2, "Lenta".to_string(), vec![drinks, snacks]));

    // Two workers, each flattening its own batch; the merge is a plain
    // concatenation as in the coordinator
    let batches = split_into_batches(stores, 2);
    let rows: Vec<CsvRow> = batches
        .into_iter()
        .flat_map(|batch| batch.into_iter().flat_map(Store::into_rows))
        .collect();

    assert_eq!(rows.len(), 9);
    assert_eq!(CSV_HEADERS.len(), 8);

    // No (store, category, link) tuple beyond what the pages contained
    let mut tuples = HashSet::new();
    for row in &rows {
        assert!(tuples.insert((row.store.clone(), row.category.clone(), row.link.clone())));
        assert_eq!(row.record().len(), CSV_HEADERS.len());
    }

    let dairy_rows: Vec<&CsvRow> = rows.iter().filter(|r| r.category == "dairy").collect();
    assert_eq!(dairy_rows.len(), 5);
    assert!(dairy_rows.iter().all(|r| r.store == "Metro"));
}

#[test]
fn test_category_keeps_collected_pages_after_failure() {
    // Pages 1 and 2 landed, page 3's navigation failed: nothing is
    // appended for it and the earlier rows survive
    let mut dairy = category("dairy", 1);
    dairy.add_products(html::extract_products(&listing_page(&[1, 2, 3]), BASE_URL));
    dairy.add_products(html::extract_products(&listing_page(&[4, 5]), BASE_URL));

    let store = Store::new(1, "Metro".to_string(), vec![dairy]);
    let rows = store.into_rows();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].product, "Product 1");
    assert_eq!(rows[0].discounted_price, "1.99");
    assert_eq!(rows[4].link, "https://market.example/products/5");
}
