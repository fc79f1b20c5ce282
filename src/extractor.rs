//! Product page extraction.
//!
//! [`ProductExtractor`] is the main entry point when you already hold a parsed
//! page. It resolves the four fields in a fixed order (name, images, merchant,
//! categories) and stops at the first failure.

use crate::category::CategoryParser;
use crate::constants::TITLE_CHILD_TAG;
use crate::document::{Document, DomNode};
use crate::error::{ProductError, Result};
use crate::fetch::PageFetcher;
use crate::image::collect_images;
use crate::merchant::resolve_merchant;
use crate::options::ExtractorOptions;
use crate::product::Product;
use crate::selector::{resolve, Region, SelectorSet};
use tracing::debug;

/// Extracts [`Product`] records from parsed pages.
///
/// The fetcher is only used for the secondary category pages; the product
/// page itself is passed to [`extract`](Self::extract) already parsed.
///
/// ## Example
///
/// ```rust
/// use productrs::{ExtractorOptions, HtmlDocument, ProductError, ProductExtractor, StaticFetcher};
///
/// let fetcher = StaticFetcher::new();
/// let extractor = ProductExtractor::with_options(&fetcher, ExtractorOptions::default());
///
/// let document = HtmlDocument::parse("<p>Page not found</p>");
/// let result = extractor.extract(&document, "B000000000", "amazon.com");
///
/// assert!(matches!(result, Err(ProductError::FieldRegionNotFound { .. })));
/// ```
pub struct ProductExtractor<F> {
    fetcher: F,
    options: ExtractorOptions,
}

impl<F: PageFetcher> ProductExtractor<F> {
    /// Create an extractor with default options
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, ExtractorOptions::default())
    }

    pub fn with_options(fetcher: F, options: ExtractorOptions) -> Self {
        Self { fetcher, options }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract every field of the product shown by `document`.
    ///
    /// `asin` and `domain` are copied into the record; `domain` is also the
    /// host used to fetch top-rank category pages.
    pub fn extract<D: Document>(&self, document: &D, asin: &str, domain: &str) -> Result<Product> {
        debug!(%asin, %domain, "extracting product");

        let name = self.extract_name(document)?;
        let images = self.extract_images(document)?;

        let selectors = &self.options.merchant_selectors;
        let merchant = resolve_merchant(&require_region(document, selectors)?, selectors)?;

        let categories =
            CategoryParser::new(&self.fetcher, &self.options).extract(document, domain)?;

        debug!(
            %asin,
            %name,
            images = images.len(),
            categories = categories.len(),
            "product extracted"
        );
        Ok(Product {
            asin: asin.to_string(),
            domain: domain.to_string(),
            name,
            images,
            merchant,
            categories,
        })
    }

    fn extract_name<D: Document>(&self, document: &D) -> Result<String> {
        let selectors = &self.options.title_selectors;
        let region = require_region(document, selectors)?;

        let has_child = region
            .nodes()
            .any(|node| !node.descendants_by_tag(TITLE_CHILD_TAG).is_empty());
        if !has_child {
            return Err(ProductError::FieldChildNotFound {
                field: selectors.field().to_string(),
                selectors: selectors.clone(),
                child: TITLE_CHILD_TAG.to_string(),
            });
        }

        let text = region.text();
        let name = text.trim().lines().next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(ProductError::EmptyField {
                field: selectors.field().to_string(),
            });
        }
        Ok(name.to_string())
    }

    fn extract_images<D: Document>(&self, document: &D) -> Result<Vec<String>> {
        let region = require_region(document, &self.options.image_selectors)?;
        Ok(collect_images(region.first()))
    }
}

fn require_region<'d, D: Document>(
    document: &'d D,
    selectors: &SelectorSet,
) -> Result<Region<D::Node<'d>>> {
    resolve(document, selectors).ok_or_else(|| ProductError::FieldRegionNotFound {
        field: selectors.field().to_string(),
        selectors: selectors.clone(),
    })
}
