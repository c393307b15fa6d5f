use regex::Regex;
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.,]\d+").expect("price pattern should be valid"));

/// Extracts a numeric price from a localized price label, e.g.
/// "Цена за 1кг 49,99".
///
/// The first `digits (comma or dot) digits` substring wins; a comma
/// decimal separator is normalized to a dot. Labels without a price are
/// common (a product without a discount renders an empty original-price
/// element), so absence is a regular value rather than an error.
pub fn parse(label: &str) -> Option<f64> {
    let matched = PRICE_PATTERN.find(label)?;
    matched.as_str().replace(',', ".").parse::<f64>().ok()
}
