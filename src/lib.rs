//! # productrs
//!
//! Structured product records from marketplace product pages.
//!
//! ## Overview
//!
//! Product pages come in several layouts and change without notice. productrs
//! locates each field through an ordered chain of fallback selectors and turns
//! the page into a [`Product`]: name, images, merchant and sales-rank
//! categories. A category whose display name is only available on its own page
//! is resolved through one extra fetch.
//!
//! ## Key Features
//!
//! - **Selector fallback**: first matching layout wins, per field
//! - **Backend independent**: works on any [`Document`]; `scraper` and `kuchikikiki` backends ship with the crate
//! - **Injected fetching**: all network access goes through a [`PageFetcher`]
//! - **Customizable Options**: replace any selector chain or marker
//! - **Fail fast**: the first missing field aborts with a precise [`ProductError`]
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use productrs::{HttpFetcher, ProductService};
//!
//! let service = ProductService::new(HttpFetcher::new());
//! let product = service.get_by_asin("B07KPJP3XP", "amazon.fr")?;
//!
//! println!("Name: {}", product.name);
//! println!("Merchant: {}", product.merchant.name);
//! for category in &product.categories {
//!     println!("#{} in {}", category.position, category.name);
//! }
//! # Ok::<(), productrs::ProductError>(())
//! ```
//!
//! ## Advanced Usage
//!
//! ### Already fetched pages
//!
//! ```rust,no_run
//! use productrs::{KuchikiDocument, ProductExtractor, StaticFetcher};
//!
//! let html = std::fs::read_to_string("product.html").unwrap();
//! let fetcher = StaticFetcher::new()
//!     .with_page("https://www.amazon.fr/gp/bestsellers/books", "<h1 class='category'>Livres</h1>");
//!
//! let extractor = ProductExtractor::new(&fetcher);
//! let product = extractor.extract(&KuchikiDocument::parse(&html), "B07KPJP3XP", "amazon.fr");
//! ```
//!
//! ### Custom Options
//!
//! ```rust,no_run
//! use productrs::{ExtractorOptions, HttpFetcher, ProductService, SelectorSet};
//!
//! let options = ExtractorOptions::builder()
//!     .title_selectors(SelectorSet::parse("name", &["#productTitle", ".book-title"]).unwrap())
//!     .top_rank_marker("Top 100")
//!     .build();
//!
//! let service = ProductService::with_options(HttpFetcher::new(), options);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use productrs::{HttpFetcher, ProductError, ProductService};
//!
//! let service = ProductService::new(HttpFetcher::new());
//!
//! match service.get_by_asin("B07KPJP3XP", "amazon.fr") {
//!     Ok(product) => println!("{}", product.name),
//!     Err(ProductError::PageUnavailable { source, .. }) => {
//!         eprintln!("Not found: {}", source);
//!     }
//!     Err(ProductError::FieldRegionNotFound { field, selectors }) => {
//!         eprintln!("Layout changed? no '{}' with {}", field, selectors);
//!     }
//!     Err(e) => {
//!         eprintln!("Error: {}", e);
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (mostly `debug` and `trace`) and never
//! installs a subscriber; configure one in your application to see them.

mod category;
mod constants;
mod document;
mod error;
mod extractor;
mod fetch;
mod html_document;
mod image;
mod kuchiki_document;
mod merchant;
mod options;
mod product;
mod selector;
mod service;

// Public exports
pub use category::{category_url, parse_position, CategoryParser};
pub use document::{Document, DomNode};
pub use error::{FetchError, ProductError, Result};
pub use extractor::ProductExtractor;
pub use fetch::{HttpFetcher, PageFetcher, StaticFetcher};
pub use html_document::{HtmlDocument, HtmlNode};
pub use image::{collect_images, normalize_image_url};
pub use kuchiki_document::{KuchikiDocument, KuchikiNode};
pub use merchant::resolve_merchant;
pub use options::{ExtractorOptions, ExtractorOptionsBuilder};
pub use product::{Category, Merchant, Product};
pub use selector::{resolve, Region, SelectorSet, SelectorSpec};
pub use service::{product_url, ProductService};
