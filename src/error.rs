//! Error types for the product extraction library.

use crate::selector::SelectorSet;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ProductError>;

/// Errors that can occur while extracting a product record.
///
/// Every variant is terminal for the extraction call that produced it: nothing
/// is retried internally and no partial [`Product`](crate::Product) is returned.
#[derive(Error, Debug)]
pub enum ProductError {
    /// The product page could not be fetched or parsed
    #[error("Product for asin '{asin}' was not found on '{domain}': {source}")]
    PageUnavailable {
        asin: String,
        domain: String,
        #[source]
        source: FetchError,
    },

    /// None of the field's candidate selectors matched
    #[error("Could not find '{field}' region with '{selectors}' selectors in html structure")]
    FieldRegionNotFound { field: String, selectors: SelectorSet },

    /// The field's region matched but the expected descendant was absent
    #[error(
        "Could not find '{field}' child with region = '{selectors}' | child = '{child}' selectors in html structure"
    )]
    FieldChildNotFound {
        field: String,
        selectors: SelectorSet,
        child: String,
    },

    /// The field's region matched but produced no usable text
    #[error("Field '{field}' resolved to an empty value")]
    EmptyField { field: String },

    /// The sales rank region is absent from the page
    #[error("No categories found")]
    NoCategoriesFound,

    /// The display name of a top-rank category could not be resolved
    #[error("Could not find category name from this url '{url}': {reason}")]
    CategoryNameUnresolvable { url: String, reason: String },

    /// Rank text without any digit (or too large to be a rank)
    #[error("Invalid rank position in text: {text:?}")]
    InvalidPosition { text: String },

    /// Selector string with an unknown prefix
    #[error("Unsupported selector: {0}")]
    UnsupportedSelector(String),

    /// Selector set configured without any selector
    #[error("Selector set for '{field}' is empty")]
    EmptySelectorSet { field: String },
}

/// Errors raised by a [`PageFetcher`](crate::PageFetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    /// No page is known for this URL
    #[error("No page for url: {url}")]
    NotFound { url: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request could not be sent or completed
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The response body could not be read
    #[error("Failed to read {url}: {message}")]
    Body { url: String, message: String },
}
