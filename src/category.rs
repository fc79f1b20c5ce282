//! Sales rank parsing.
//!
//! The rank region lists the product's standings as links. Two kinds of
//! entries share that region:
//!
//! - the aggregate rank, linking to a "Top 100" page. Its display name is not
//!   in the product page, so it is read from the linked category page.
//! - sub-category ranks, whose link text is the category name.
//!
//! ```text
//! Best Sellers Rank: #1,234 in Books (See Top 100 in Books)     <- top
//!     #12 in French Literature                                   <- sub
//! ```
//!
//! Positions come from the text written before each link. The aggregate rank
//! reads it from the link's parent. Sub-categories read it from the parent
//! too, and only go up to the grandparent when the parent holds no digits
//! before the link (`<span>#6</span> <span>in <a>Lamps</a></span>`). Staying
//! as close to the link as possible keeps earlier entries that share the
//! grandparent out of the position.

use crate::document::{Document, DomNode};
use crate::error::{ProductError, Result};
use crate::fetch::PageFetcher;
use crate::options::ExtractorOptions;
use crate::product::Category;
use crate::selector::resolve;
use tracing::{debug, trace};
use url::Url;

/// Extracts [`Category`] entries, resolving top-rank names through a fetcher.
pub struct CategoryParser<'a, F> {
    fetcher: &'a F,
    options: &'a ExtractorOptions,
}

impl<'a, F: PageFetcher> CategoryParser<'a, F> {
    pub fn new(fetcher: &'a F, options: &'a ExtractorOptions) -> Self {
        Self { fetcher, options }
    }

    /// Parse every category of the page's rank region, in document order.
    ///
    /// Fails with [`ProductError::NoCategoriesFound`] when the page has no rank
    /// region at all. A region without category links yields an empty list.
    pub fn extract<D: Document>(&self, document: &D, domain: &str) -> Result<Vec<Category>> {
        let region = resolve(document, &self.options.rank_selectors)
            .ok_or(ProductError::NoCategoriesFound)?;

        let mut categories = Vec::new();
        for link in region.first().descendants_by_tag("a") {
            let href = link.attribute("href").unwrap_or_default();
            if !href.contains(&self.options.category_path_marker) {
                trace!(%href, "skipping non-category link");
                continue;
            }
            categories.push(self.parse_entry(&link, href, domain)?);
        }

        debug!(count = categories.len(), "categories extracted");
        Ok(categories)
    }

    fn parse_entry<N: DomNode>(&self, link: &N, href: String, domain: &str) -> Result<Category> {
        let link_text = link.text();
        let top = link_text.contains(&self.options.top_rank_marker);

        let mut context = text_before_link(link, 1, &link_text);
        if !top && !context.chars().any(|c| c.is_ascii_digit()) {
            context = text_before_link(link, 2, &link_text);
        }
        let position = parse_position(&context)?;

        let name = if top {
            self.resolve_top_name(domain, &href)?
        } else {
            link_text.trim().to_string()
        };

        debug!(top, position, %name, "category parsed");
        Ok(Category {
            top,
            position,
            name,
            url: href,
        })
    }

    /// Read a top-rank category's display name from its own page.
    ///
    /// This is the only secondary fetch of an extraction and it never
    /// recurses: the category page is only searched for its name region.
    fn resolve_top_name(&self, domain: &str, href: &str) -> Result<String> {
        let url = category_url(domain, href)?;
        let page = self
            .fetcher
            .fetch(&url)
            .map_err(|error| ProductError::CategoryNameUnresolvable {
                url: url.clone(),
                reason: error.to_string(),
            })?;

        let selectors = &self.options.category_name_selectors;
        let region =
            resolve(&page, selectors).ok_or_else(|| ProductError::CategoryNameUnresolvable {
                url: url.clone(),
                reason: format!("no '{selectors}' region"),
            })?;

        Ok(region.first().text().trim().to_string())
    }
}

/// Absolute URL of a category link found on a `domain` product page.
pub fn category_url(domain: &str, href: &str) -> Result<String> {
    let unresolvable = |reason: String| ProductError::CategoryNameUnresolvable {
        url: format!("https://www.{domain}/{href}"),
        reason,
    };

    let base = Url::parse(&format!("https://www.{domain}/"))
        .map_err(|error| unresolvable(error.to_string()))?;
    let url = base
        .join(href)
        .map_err(|error| unresolvable(error.to_string()))?;
    Ok(url.into())
}

/// Parse a rank position from the digits of `text`.
///
/// Separators ("1,234", "1.234", "1 234") and surrounding words are
/// dropped. Text without digits is an error rather than position zero.
pub fn parse_position(text: &str) -> Result<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| ProductError::InvalidPosition {
            text: text.trim().to_string(),
        })
}

/// Text of the ancestor `levels` up, cut where the link's own text starts
fn text_before_link<N: DomNode>(link: &N, levels: usize, link_text: &str) -> String {
    link.ancestor(levels)
        .map(|node| text_before(&node.text(), link_text).to_string())
        .unwrap_or_default()
}

fn text_before<'t>(text: &'t str, marker: &str) -> &'t str {
    if marker.is_empty() {
        return text;
    }
    text.find(marker).map_or(text, |index| &text[..index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::html_document::HtmlDocument;

    const RANKS: &str = r#"
        <div id="detailBullets_feature_div">
            <ul>
                <li><span>
                    <span class="a-text-bold">Best Sellers Rank:</span>
                    #1,234 in Books (<a href="/gp/bestsellers/books/ref=pd_zg_ts_books">See Top 100 in Books</a>)
                    <ul class="zg_hierarchy">
                        <li><span class="a-list-item">#12 in <a href="/gp/bestsellers/books/301130">French Literature</a></span></li>
                        <li><span class="a-list-item">#3 in <a href="/gp/bestsellers/books/301145">Poetry</a></span></li>
                    </ul>
                </span></li>
                <li><span><a href="/product-reviews/B07KPJP3XP">4,021 ratings</a></span></li>
            </ul>
        </div>
    "#;

    fn books_fetcher() -> StaticFetcher {
        StaticFetcher::new().with_page(
            "https://www.amazon.fr/gp/bestsellers/books/ref=pd_zg_ts_books",
            r#"<div id="zg"><h1><span class="category"> Livres </span></h1></div>"#,
        )
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1,234 in Books").unwrap(), 1234);
        assert_eq!(parse_position("#12 in Toys").unwrap(), 12);
        assert_eq!(parse_position("n° 1 234 en Livres").unwrap(), 1234);
        assert_eq!(parse_position("#0").unwrap(), 0);
    }

    #[test]
    fn test_position_without_digits_is_an_error() {
        assert!(matches!(
            parse_position("in Books"),
            Err(ProductError::InvalidPosition { .. })
        ));
        assert!(parse_position("").is_err());
    }

    #[test]
    fn test_position_overflow_is_an_error() {
        assert!(parse_position("99999999999999999999").is_err());
    }

    #[test]
    fn test_category_url() {
        assert_eq!(
            category_url("amazon.fr", "/gp/bestsellers/books").unwrap(),
            "https://www.amazon.fr/gp/bestsellers/books"
        );
        assert_eq!(
            category_url("amazon.com", "gp/bestsellers/toys").unwrap(),
            "https://www.amazon.com/gp/bestsellers/toys"
        );
        assert_eq!(
            category_url("amazon.com", "https://www.amazon.com/gp/x").unwrap(),
            "https://www.amazon.com/gp/x"
        );
    }

    #[test]
    fn test_extract_classifies_and_orders_entries() {
        let document = HtmlDocument::parse(RANKS);
        let fetcher = books_fetcher();
        let options = ExtractorOptions::default();

        let categories = CategoryParser::new(&fetcher, &options)
            .extract(&document, "amazon.fr")
            .unwrap();

        assert_eq!(
            categories,
            vec![
                Category {
                    top: true,
                    position: 1234,
                    name: "Livres".to_string(),
                    url: "/gp/bestsellers/books/ref=pd_zg_ts_books".to_string(),
                },
                Category {
                    top: false,
                    position: 12,
                    name: "French Literature".to_string(),
                    url: "/gp/bestsellers/books/301130".to_string(),
                },
                Category {
                    top: false,
                    position: 3,
                    name: "Poetry".to_string(),
                    url: "/gp/bestsellers/books/301145".to_string(),
                },
            ]
        );
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[test]
    fn test_missing_region_is_no_categories_found() {
        let document = HtmlDocument::parse("<div id='title'><span>Lamp</span></div>");
        let fetcher = StaticFetcher::new();
        let options = ExtractorOptions::default();

        let result = CategoryParser::new(&fetcher, &options).extract(&document, "amazon.fr");
        assert!(matches!(result, Err(ProductError::NoCategoriesFound)));
    }

    #[test]
    fn test_region_without_category_links_is_empty() {
        let document = HtmlDocument::parse(
            r#"<div id="SalesRank">Rank: <a href="/product-reviews/B01">12 reviews</a></div>"#,
        );
        let fetcher = StaticFetcher::new();
        let options = ExtractorOptions::default();

        let categories = CategoryParser::new(&fetcher, &options)
            .extract(&document, "amazon.fr")
            .unwrap();
        assert!(categories.is_empty());
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn test_unresolvable_top_name_carries_url() {
        let document = HtmlDocument::parse(RANKS);
        let fetcher = StaticFetcher::new().with_page(
            "https://www.amazon.fr/gp/bestsellers/books/ref=pd_zg_ts_books",
            "<h1>Meilleures ventes</h1>",
        );
        let options = ExtractorOptions::default();

        match CategoryParser::new(&fetcher, &options).extract(&document, "amazon.fr") {
            Err(ProductError::CategoryNameUnresolvable { url, .. }) => {
                assert_eq!(url, "https://www.amazon.fr/gp/bestsellers/books/ref=pd_zg_ts_books")
            }
            other => panic!("expected CategoryNameUnresolvable, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_fetch_is_unresolvable() {
        let document = HtmlDocument::parse(RANKS);
        let fetcher = StaticFetcher::new();
        let options = ExtractorOptions::default();

        let result = CategoryParser::new(&fetcher, &options).extract(&document, "amazon.fr");
        assert!(matches!(
            result,
            Err(ProductError::CategoryNameUnresolvable { .. })
        ));
    }

    #[test]
    fn test_flat_sibling_spans_keep_positions_apart() {
        let document = HtmlDocument::parse(
            r#"
            <table id="productDetails_detailBullets_sections1">
                <tr><th>Best Sellers Rank</th><td><span><span>#1,234 in Books (<a href="/gp/bestsellers/books/ref=pd_zg_ts_books">See Top 100 in Books</a>)</span><br><span>#12 in <a href="/gp/bestsellers/books/301130/ref=pd_zg_hrsr_books">French Literature</a></span></span></td></tr>
            </table>
            "#,
        );
        let fetcher = books_fetcher();
        let options = ExtractorOptions::default();

        let positions: Vec<u32> = CategoryParser::new(&fetcher, &options)
            .extract(&document, "amazon.fr")
            .unwrap()
            .iter()
            .map(|category| category.position)
            .collect();
        assert_eq!(positions, vec![1234, 12]);
    }

    #[test]
    fn test_sub_rank_digits_in_sibling_span_use_grandparent() {
        let document = HtmlDocument::parse(
            r#"
            <ul id="SalesRank">
                <li><span class="zg_hrsr_rank">#3</span> <span class="zg_hrsr_ladder">in <a href="/gp/bestsellers/toys/1">Toys</a></span></li>
                <li><span class="zg_hrsr_rank">#27</span> <span class="zg_hrsr_ladder">in <a href="/gp/bestsellers/toys/2">Puzzles</a></span></li>
            </ul>
            "#,
        );
        let fetcher = StaticFetcher::new();
        let options = ExtractorOptions::default();

        let categories = CategoryParser::new(&fetcher, &options)
            .extract(&document, "amazon.com")
            .unwrap();
        assert_eq!(categories[0].position, 3);
        assert_eq!(categories[1].position, 27);
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn test_sub_rank_without_digits_fails() {
        let document = HtmlDocument::parse(
            r#"<ul id="SalesRank"><li><span>in <a href="/gp/bestsellers/toys/1">Toys</a></span></li></ul>"#,
        );
        let fetcher = StaticFetcher::new();
        let options = ExtractorOptions::default();

        let result = CategoryParser::new(&fetcher, &options).extract(&document, "amazon.com");
        assert!(matches!(result, Err(ProductError::InvalidPosition { .. })));
    }
}
