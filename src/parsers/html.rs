use crate::catalog::Product;
use crate::parsers::price;
use scraper::{ElementRef, Html, Selector};

/// Extracts every product card from a listing page.
///
/// Cards are located by a fixed structural pattern: an element whose
/// class starts with `ProductCard_root` wrapping the product anchor.
/// A card missing its title or price elements still yields a product
/// with those fields absent; only the anchor's href is required by the
/// markup contract.
pub fn extract_products(markup: &str, base_url: &str) -> Vec<Product> {
    let doc = Html::parse_document(markup);

    let anchor_selector = Selector::parse(r#"[class^="ProductCard_root"] > a"#).unwrap();
    let title_selector = Selector::parse("h3").unwrap();
    let price_selector = Selector::parse(r#"[class^="ProductCardPrice_price"]"#).unwrap();
    let original_price_selector =
        Selector::parse(r#"[class^="ProductCardPrice_originalPrice"]"#).unwrap();

    doc.select(&anchor_selector)
        .map(|anchor| {
            let name = element_text(&anchor, &title_selector);
            let discounted_price = price::parse(&element_text(&anchor, &price_selector));
            let original_price = price::parse(&element_text(&anchor, &original_price_selector));

            // Product anchors always carry an href in the storefront markup
            let href = anchor
                .value()
                .attr("href")
                .expect("product anchor without href");

            Product {
                name,
                link: format!("{base_url}{href}"),
                original_price,
                discounted_price,
            }
        })
        .collect()
}

/// Reads the category's total page count from the pagination widget.
///
/// The widget renders the last page number second to last, before the
/// forward arrow, so that element is the one read. Fewer than two
/// pagination links means a single page. A present but non-numeric
/// label returns `None` so the caller can treat the category as failed.
///
/// The second-to-last selection matches the current widget layout and
/// will silently break if the storefront changes how it renders
/// first/ellipsis/last links.
pub fn extract_page_count(markup: &str) -> Option<u32> {
    let doc = Html::parse_document(markup);
    let pagination_selector = Selector::parse(r#"[class^="pagination_link"]"#).unwrap();

    let links: Vec<ElementRef> = doc.select(&pagination_selector).collect();
    if links.len() < 2 {
        return Some(1);
    }

    let label = links[links.len() - 2]
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    label.trim().parse::<u32>().ok()
}

/// Collects the normalized text of every selector match under `root`.
fn element_text(root: &ElementRef<'_>, selector: &Selector) -> String {
    root.select(selector)
        .flat_map(|el| el.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
