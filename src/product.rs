//! Product record produced by a successful extraction.
//!
//! ## Example
//!
//! ```rust
//! use productrs::{HtmlDocument, ProductExtractor, StaticFetcher};
//!
//! let html = r#"
//!     <div id="title"><span>Desk Lamp</span></div>
//!     <div id="imageBlock">
//!         <img src="https://m.media.example/images/I/lamp._S40_.jpg">
//!     </div>
//!     <a id="bylineInfo" href="/stores/Lumen">Lumen</a>
//!     <ul id="SalesRank"><li><span>#12 in <a href="/gp/bestsellers/lamps/1">Desk Lamps</a></span></li></ul>
//! "#;
//!
//! let fetcher = StaticFetcher::new();
//! let extractor = ProductExtractor::new(&fetcher);
//! let product = extractor
//!     .extract(&HtmlDocument::parse(html), "B000LAMP01", "amazon.com")
//!     .unwrap();
//!
//! assert_eq!(product.name, "Desk Lamp");
//! assert_eq!(product.images, vec!["https://m.media.example/images/I/lamp._S300_.jpg"]);
//! assert_eq!(product.merchant.name, "Lumen");
//! assert_eq!(product.categories[0].position, 12);
//! ```

use serde::{Deserialize, Serialize};

/// Everything extracted from one product page.
///
/// A `Product` only exists when every field was extracted: a failure in any
/// field aborts the extraction instead of producing a partial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Catalog identifier (ASIN) the page was requested for.
    pub asin: String,

    /// Marketplace host the page belongs to, e.g. `amazon.fr`.
    pub domain: String,

    /// First line of the title region, trimmed. Never empty.
    pub name: String,

    /// Image URLs in document order, upgraded to the high resolution variant.
    ///
    /// Duplicates are kept; a page with an image region but no product
    /// assets yields an empty list.
    pub images: Vec<String>,

    /// Seller or author of the product.
    pub merchant: Merchant,

    /// Category standings in document order.
    pub categories: Vec<Category>,
}

/// Seller (or author, for books) of a product.
///
/// Fields the page does not provide are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Merchant {
    pub name: String,
    pub url: String,
}

/// One entry of the product's sales rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// `true` for the aggregate "Top 100" rank, `false` for a sub-category.
    pub top: bool,

    /// Rank within the category, built from the digits of the rank text.
    pub position: u32,

    /// Display name. Top ranks read it from the linked category page.
    pub name: String,

    /// Link to the category as found in the page (usually relative).
    pub url: String,
}
