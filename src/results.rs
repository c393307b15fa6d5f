/// Header row written at the top of every report, one entry per column.
pub const CSV_HEADERS: [&str; 8] = [
    "Store",
    "Address",
    "Category",
    "Subcategory",
    "Product",
    "Discounted price",
    "Original price",
    "Product link",
];

/// One flattened (store, category, product) output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// Store name
    pub store: String,

    /// Store address placeholder (the catalog carries no addresses)
    pub address: String,

    /// Category label
    pub category: String,

    /// Sub-category label
    pub sub_category: String,

    /// Product name
    pub product: String,

    /// Discounted price, or the absent-value sentinel
    pub discounted_price: String,

    /// Original price, or the absent-value sentinel
    pub original_price: String,

    /// Absolute link to the product page
    pub link: String,
}

impl CsvRow {
    /// Returns the row as an ordered record matching [`CSV_HEADERS`].
    pub fn record(&self) -> [&str; 8] {
        [
            &self.store,
            &self.address,
            &self.category,
            &self.sub_category,
            &self.product,
            &self.discounted_price,
            &self.original_price,
            &self.link,
        ]
    }
}
