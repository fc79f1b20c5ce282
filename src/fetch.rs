//! Page fetching capability injected into the extractor.
//!
//! The engine itself never opens connections. Whenever it needs another page
//! (the product page in [`ProductService`](crate::ProductService), a category
//! page while resolving top-rank names) it asks a [`PageFetcher`].
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpFetcher`]: blocking HTTP through `ureq`
//! - [`StaticFetcher`]: canned pages keyed by URL, for tests and replays

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::document::Document;
use crate::error::FetchError;
use crate::html_document::HtmlDocument;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Fetch a URL and hand back a parsed document.
///
/// Timeouts, retries and redirects are the implementation's business; the
/// engine calls `fetch` once per page and treats any error as final.
pub trait PageFetcher {
    type Document: Document;

    fn fetch(&self, url: &str) -> Result<Self::Document, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    type Document = F::Document;

    fn fetch(&self, url: &str) -> Result<Self::Document, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher.
///
/// ## Example
///
/// ```rust,no_run
/// use productrs::{HttpFetcher, ProductService};
/// use std::time::Duration;
///
/// let fetcher = HttpFetcher::with_config("Mozilla/5.0 (compatible)", Duration::from_secs(10));
/// let service = ProductService::new(fetcher);
///
/// let product = service.get_by_asin("B07KPJP3XP", "amazon.fr")?;
/// println!("{} ({} categories)", product.name, product.categories.len());
/// # Ok::<(), productrs::ProductError>(())
/// ```
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Fetcher with the default user agent and timeout
    pub fn new() -> Self {
        Self::with_config(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_config(user_agent: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .user_agent(user_agent)
                .build(),
        );
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    type Document = HtmlDocument;

    fn fetch(&self, url: &str) -> Result<HtmlDocument, FetchError> {
        debug!(%url, "fetching page");
        let response = self.agent.get(url).call().map_err(|error| match error {
            ureq::Error::StatusCode(status) => FetchError::Status {
                url: url.to_string(),
                status,
            },
            other => FetchError::Transport {
                url: url.to_string(),
                message: other.to_string(),
            },
        })?;

        let html = response
            .into_body()
            .read_to_string()
            .map_err(|error| FetchError::Body {
                url: url.to_string(),
                message: error.to_string(),
            })?;

        Ok(HtmlDocument::parse(&html))
    }
}

/// Fetcher serving canned HTML by exact URL.
///
/// Every requested URL is recorded, including misses, so tests can check
/// which secondary pages the extractor asked for.
///
/// ## Example
///
/// ```rust
/// use productrs::{PageFetcher, StaticFetcher};
///
/// let fetcher = StaticFetcher::new()
///     .with_page("https://www.amazon.fr/gp/bestsellers/books", "<h1 class='category'>Livres</h1>");
///
/// assert!(fetcher.fetch("https://www.amazon.fr/gp/bestsellers/books").is_ok());
/// assert!(fetcher.fetch("https://www.amazon.fr/unknown").is_err());
/// assert_eq!(fetcher.requests().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    /// Create an empty fetcher; every URL is unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page (builder pattern)
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Add or replace a page
    pub fn add_page(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for StaticFetcher {
    type Document = HtmlDocument;

    fn fetch(&self, url: &str) -> Result<HtmlDocument, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .map(|html| HtmlDocument::parse(html))
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}
