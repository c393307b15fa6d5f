use crate::parsers::price;

#[test]
fn test_parse_localized_label() {
    assert_eq!(price::parse("Цена 49,99 ₸"), Some(49.99));
    assert_eq!(price::parse("Цена за 1кг 49,99"), Some(49.99));
}

#[test]
fn test_parse_dot_separator() {
    assert_eq!(price::parse("12.50"), Some(12.5));
}

#[test]
fn test_parse_no_price() {
    assert_eq!(price::parse("Нет цены"), None);
    assert_eq!(price::parse(""), None);
}

#[test]
fn test_parse_integer_only_is_not_a_price() {
    // Quantities like "1кг" or "100" have no decimal part and never match
    assert_eq!(price::parse("100"), None);
    assert_eq!(price::parse("за 100 штук"), None);
}

#[test]
fn test_parse_first_match_wins() {
    // Two numeric patterns in one label: the leftmost one is taken,
    // with its own decimal separator
    assert_eq!(price::parse("1.5kg 12.0"), Some(1.5));
    assert_eq!(price::parse("скидка 10,5% цена 89,99"), Some(10.5));
}

#[test]
fn test_parse_comma_normalized_to_dot() {
    assert_eq!(price::parse("7,5"), Some(7.5));
}
