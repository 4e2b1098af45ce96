// src/specs/product.rs
//
// Single product listing page (Amazon-style markup).

use tracing::{debug, warn};

use crate::core::html::Document;
use crate::record::{Details, Extraction};

pub const TITLE_PLACEHOLDER: &str = "Product name not found";
pub const PRICE_PLACEHOLDER: &str = "Price not found";
pub const CURRENCY: &str = "£";

const TITLE_ID: &str = "productTitle";
const PRICE_WHOLE: &[&str] = &["a-price-whole"];
const PRICE_FRACTION: &[&str] = &["a-price-fraction"];
const DETAILS_TABLE: &[&str] = &["a-normal", "a-spacing-micro"];
const BULLETS_ID: &str = "feature-bullets";
const BULLET_ITEM: &[&str] = &["a-spacing-mini"];
const IMAGE_ID: &str = "landingImage";
const IMAGE_HIRES_ATTR: &str = "data-old-hires";

/// Read every field. Never fails; see the module docs in `specs`.
pub fn extract(doc: &Document) -> Extraction {
    let name = title(doc).unwrap_or_else(|| s!(TITLE_PLACEHOLDER));
    let price = price(doc).unwrap_or_else(|| s!(PRICE_PLACEHOLDER));
    let details = details(doc);
    let about_items = about_items(doc);
    let image_url = image_url(doc);

    debug!(
        name = %name,
        price = %price,
        details = details.len(),
        about_items = about_items.len(),
        has_image = image_url.is_some(),
        "Extract: done"
    );

    Extraction { name, price, details, about_items, image_url }
}

pub fn title(doc: &Document) -> Option<String> {
    doc.find_by_id(TITLE_ID)
        .map(|n| n.text())
        .filter(|t| !t.is_empty())
}

/// `£{whole}.{fraction}` or `£{whole}`, both parts verbatim.
pub fn price(doc: &Document) -> Option<String> {
    let whole = doc.find_first("span", PRICE_WHOLE)?.text();
    Some(match doc.find_first("span", PRICE_FRACTION) {
        Some(fraction) => format!("{CURRENCY}{whole}.{}", fraction.text()),
        None => format!("{CURRENCY}{whole}"),
    })
}

/// Two-cell rows of the specification table; other rows are skipped.
pub fn details(doc: &Document) -> Details {
    let mut details = Details::new();
    let Some(table) = doc.find_first("table", DETAILS_TABLE) else {
        debug!("Extract: no details table");
        return details;
    };

    for row in table.find_all("tr", &[]) {
        let cells = row.find_all("td", &[]);
        if let [key, value] = cells.as_slice() {
            details.insert(key.text(), value.text());
        }
    }
    details
}

pub fn about_items(doc: &Document) -> Vec<String> {
    match doc.find_by_id(BULLETS_ID) {
        Some(section) => section
            .find_all("li", BULLET_ITEM)
            .iter()
            .map(|li| li.text())
            .collect(),
        None => Vec::new(),
    }
}

/// High-resolution URL of the main image, falling back to `src`.
pub fn image_url(doc: &Document) -> Option<String> {
    let img = doc.find_by_id(IMAGE_ID).filter(|n| n.tag() == "img")?;
    let url = img
        .attr_nonblank(IMAGE_HIRES_ATTR)
        .or_else(|| img.attr_nonblank("src"));
    if url.is_none() {
        warn!("Extract: #{IMAGE_ID} has neither {IMAGE_HIRES_ATTR} nor src");
    }
    url.map(String::from)
}
