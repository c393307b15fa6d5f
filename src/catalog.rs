use crate::results::CsvRow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Sentinel written into report cells with no value (missing prices,
/// the address column).
pub const MISSING_FIELD: &str = "-";

/// A single product extracted from a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product name, empty when the card carries no title
    pub name: String,

    /// Absolute link to the product page
    pub link: String,

    /// Price before the discount, if the card shows one
    pub original_price: Option<f64>,

    /// Current (discounted) price, if the card shows one
    pub discounted_price: Option<f64>,
}

/// One paginated product listing of a store.
#[derive(Debug, Clone)]
pub struct Category {
    /// Fully-qualified listing URL
    pub link: String,

    /// Category label
    pub category: String,

    /// Sub-category label
    pub sub_category: String,

    /// Whether the listing is age-restricted
    pub is_adult: bool,

    products: Vec<Product>,
}

impl Category {
    pub fn new(link: String, category: String, sub_category: String, is_adult: bool) -> Self {
        Self {
            link,
            category,
            sub_category,
            is_adult,
            products: Vec::new(),
        }
    }

    /// Appends one page's worth of extracted products.
    pub fn add_products(&mut self, products: Vec<Product>) {
        self.products.extend(products);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// A retail storefront with its product categories.
///
/// Identity is (id, name) only; the categories a store carries do not
/// participate in equality or hashing.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub categories: Vec<Category>,
}

impl Store {
    pub fn new(id: i32, name: String, categories: Vec<Category>) -> Self {
        Self {
            id,
            name,
            categories,
        }
    }

    /// Flattens every category's accumulated products into output rows.
    pub fn into_rows(self) -> Vec<CsvRow> {
        let mut rows = Vec::new();
        for category in self.categories {
            let Category {
                category: label,
                sub_category,
                products,
                ..
            } = category;

            for product in products {
                rows.push(CsvRow {
                    store: self.name.clone(),
                    address: MISSING_FIELD.to_string(),
                    category: label.clone(),
                    sub_category: sub_category.clone(),
                    product: product.name,
                    discounted_price: format_price(product.discounted_price),
                    original_price: format_price(product.original_price),
                    link: product.link,
                });
            }
        }
        rows
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Store {}

impl Hash for Store {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => price.to_string(),
        None => MISSING_FIELD.to_string(),
    }
}

/// Splits a set into disjoint batches, one per worker.
///
/// Batches are filled in encounter order to floor(len / num_batches)
/// elements each; the final batch absorbs the remainder. Empty batches
/// are dropped, so the result may hold fewer than `num_batches` sets.
pub fn split_into_batches<T: Eq + Hash>(set: HashSet<T>, num_batches: usize) -> Vec<HashSet<T>> {
    let num_batches = num_batches.max(1);
    let batch_size = set.len() / num_batches;
    let mut batches = Vec::new();
    let mut current = HashSet::new();
    let mut count = 0;

    for item in set {
        if count == batch_size && !current.is_empty() && batches.len() < num_batches - 1 {
            batches.push(std::mem::take(&mut current));
            count = 0;
        }
        current.insert(item);
        count += 1;
    }

    if !current.is_empty() {
        batches.push(current);
    }

    batches
}
