//! Integration tests over saved product pages
//!
//! Each directory under tests/test-pages/ holds a product page (`source.html`),
//! the category pages it links to and `expected.json` describing the result.
//! Every case runs against both DOM backends.

use productrs::{
    Document, HtmlDocument, KuchikiDocument, Product, ProductError, ProductExtractor,
    ProductService, StaticFetcher,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Expected outcome of a test case
#[derive(Debug, Deserialize)]
struct Expected {
    asin: String,
    domain: String,
    /// Linked page URL -> file name inside the case directory
    #[serde(default)]
    pages: HashMap<String, String>,
    /// URLs the extractor is expected to fetch, in order
    requests: Vec<String>,
    product: Option<Product>,
    error: Option<String>,
    error_url: Option<String>,
}

struct TestCase {
    name: String,
    source_html: String,
    expected: Expected,
    fetcher_pages: Vec<(String, String)>,
}

impl TestCase {
    fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("Invalid test case name")?
            .to_string();

        let source_html = fs::read_to_string(path.join("source.html"))?;
        let expected: Expected =
            serde_json::from_str(&fs::read_to_string(path.join("expected.json"))?)?;

        let mut fetcher_pages = Vec::new();
        for (url, file) in &expected.pages {
            fetcher_pages.push((url.clone(), fs::read_to_string(path.join(file))?));
        }

        Ok(TestCase {
            name,
            source_html,
            expected,
            fetcher_pages,
        })
    }

    fn fetcher(&self) -> StaticFetcher {
        let mut fetcher = StaticFetcher::new();
        for (url, html) in &self.fetcher_pages {
            fetcher.add_page(url.as_str(), html.as_str());
        }
        fetcher
    }
}

fn load_test_cases() -> Vec<TestCase> {
    let test_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-pages");

    let mut test_cases = Vec::new();
    for entry in fs::read_dir(&test_dir).expect("test-pages directory").flatten() {
        if entry.path().is_dir() {
            match TestCase::load(&entry.path()) {
                Ok(test_case) => test_cases.push(test_case),
                Err(e) => panic!("Failed to load test case {:?}: {}", entry.path(), e),
            }
        }
    }

    test_cases.sort_by(|a, b| a.name.cmp(&b.name));
    test_cases
}

fn error_kind(error: &ProductError) -> &'static str {
    match error {
        ProductError::PageUnavailable { .. } => "PageUnavailable",
        ProductError::FieldRegionNotFound { .. } => "FieldRegionNotFound",
        ProductError::FieldChildNotFound { .. } => "FieldChildNotFound",
        ProductError::EmptyField { .. } => "EmptyField",
        ProductError::NoCategoriesFound => "NoCategoriesFound",
        ProductError::CategoryNameUnresolvable { .. } => "CategoryNameUnresolvable",
        ProductError::InvalidPosition { .. } => "InvalidPosition",
        ProductError::UnsupportedSelector(_) => "UnsupportedSelector",
        ProductError::EmptySelectorSet { .. } => "EmptySelectorSet",
    }
}

/// Run one case on one backend, returning a description of every mismatch
fn check_case<D: Document>(test_case: &TestCase, document: &D, backend: &str) -> Vec<String> {
    let expected = &test_case.expected;
    let fetcher = test_case.fetcher();
    let extractor = ProductExtractor::new(&fetcher);

    let result = extractor.extract(document, &expected.asin, &expected.domain);
    let mut mismatches = Vec::new();

    match (&result, &expected.product, &expected.error) {
        (Ok(actual), Some(product), None) => {
            if actual != product {
                mismatches.push(format!(
                    "  - [{}] Product: expected {:#?}, got {:#?}",
                    backend, product, actual
                ));
            }
        }
        (Err(error), None, Some(kind)) => {
            if error_kind(error) != kind {
                mismatches.push(format!(
                    "  - [{}] Error: expected {}, got {:?}",
                    backend, kind, error
                ));
            }
            if let (ProductError::CategoryNameUnresolvable { url, .. }, Some(expected_url)) =
                (error, &expected.error_url)
            {
                if url != expected_url {
                    mismatches.push(format!(
                        "  - [{}] Error url: expected {}, got {}",
                        backend, expected_url, url
                    ));
                }
            }
        }
        _ => mismatches.push(format!(
            "  - [{}] Outcome: expected product={} error={:?}, got {:?}",
            backend,
            expected.product.is_some(),
            expected.error,
            result
        )),
    }

    if fetcher.requests() != expected.requests {
        mismatches.push(format!(
            "  - [{}] Requests: expected {:?}, got {:?}",
            backend,
            expected.requests,
            fetcher.requests()
        ));
    }

    mismatches
}

#[test]
fn test_saved_pages() {
    let test_cases = load_test_cases();
    assert!(!test_cases.is_empty(), "no test cases found");

    let mut failures = Vec::new();
    for test_case in &test_cases {
        let mut mismatches = check_case(
            test_case,
            &HtmlDocument::parse(&test_case.source_html),
            "scraper",
        );
        mismatches.extend(check_case(
            test_case,
            &KuchikiDocument::parse(&test_case.source_html),
            "kuchiki",
        ));

        if mismatches.is_empty() {
            println!("✅ {}", test_case.name);
        } else {
            println!("❌ {}", test_case.name);
            for mismatch in &mismatches {
                println!("{}", mismatch);
            }
            failures.push(test_case.name.clone());
        }
    }

    assert!(failures.is_empty(), "failed cases: {:?}", failures);
}

#[test]
fn test_service_fetches_product_page_first() {
    let test_case = TestCase::load(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/test-pages/book-detail-bullets"
    )))
    .unwrap();

    let mut fetcher = test_case.fetcher();
    fetcher.add_page(
        "https://www.amazon.fr/dp/2070612759",
        test_case.source_html.as_str(),
    );
    let service = ProductService::new(&fetcher);

    let product = service.get_by_asin("2070612759", "amazon.fr").unwrap();
    assert_eq!(Some(&product), test_case.expected.product.as_ref());
    assert_eq!(
        fetcher.requests(),
        vec![
            "https://www.amazon.fr/dp/2070612759",
            "https://www.amazon.fr/gp/bestsellers/books/ref=pd_zg_ts_books",
        ]
    );
}

#[test]
fn test_service_reports_unavailable_page() {
    let fetcher = StaticFetcher::new();
    let service = ProductService::new(&fetcher);

    let error = service.get_by_asin("B000000000", "amazon.fr").unwrap_err();
    assert_eq!(error_kind(&error), "PageUnavailable");
    assert!(error.to_string().contains("B000000000"));
    assert!(!service.exists_by_asin("B000000000", "amazon.fr"));
}
