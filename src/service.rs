//! Catalog lookup by ASIN.

use crate::error::{ProductError, Result};
use crate::extractor::ProductExtractor;
use crate::fetch::PageFetcher;
use crate::options::ExtractorOptions;
use crate::product::Product;
use tracing::{debug, warn};

/// URL of the product page for `asin` on the `domain` marketplace.
///
/// ```rust
/// assert_eq!(
///     productrs::product_url("B07KPJP3XP", "amazon.fr"),
///     "https://www.amazon.fr/dp/B07KPJP3XP"
/// );
/// ```
pub fn product_url(asin: &str, domain: &str) -> String {
    format!("https://www.{domain}/dp/{asin}")
}

/// Fetches product pages and extracts them.
///
/// The same fetcher serves the product page and the category pages needed
/// for top-rank names.
pub struct ProductService<F> {
    extractor: ProductExtractor<F>,
}

impl<F: PageFetcher> ProductService<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, ExtractorOptions::default())
    }

    pub fn with_options(fetcher: F, options: ExtractorOptions) -> Self {
        Self {
            extractor: ProductExtractor::with_options(fetcher, options),
        }
    }

    pub fn extractor(&self) -> &ProductExtractor<F> {
        &self.extractor
    }

    /// Fetch and extract the product page of `asin`.
    ///
    /// A page that cannot be fetched is reported as
    /// [`ProductError::PageUnavailable`]; extraction errors are passed through.
    pub fn get_by_asin(&self, asin: &str, domain: &str) -> Result<Product> {
        let url = product_url(asin, domain);
        let document = self.extractor.fetcher().fetch(&url).map_err(|source| {
            warn!(%asin, %domain, error = %source, "product page unavailable");
            ProductError::PageUnavailable {
                asin: asin.to_string(),
                domain: domain.to_string(),
                source,
            }
        })?;

        self.extractor.extract(&document, asin, domain)
    }

    /// Whether the product page of `asin` can be fetched. Nothing is extracted.
    pub fn exists_by_asin(&self, asin: &str, domain: &str) -> bool {
        let url = product_url(asin, domain);
        let exists = self.extractor.fetcher().fetch(&url).is_ok();
        debug!(%asin, %domain, exists, "product lookup");
        exists
    }
}
