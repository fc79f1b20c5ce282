//! Configuration options for product extraction.
//!
//! This module provides [`ExtractorOptions`] and [`ExtractorOptionsBuilder`]
//! for adapting the engine to page layouts the built-in selectors miss.
//!
//! ## Example
//!
//! ```rust
//! use productrs::{ExtractorOptions, SelectorSet};
//!
//! // Using default options
//! let options = ExtractorOptions::default();
//! assert_eq!(options.category_path_marker, "/gp/");
//!
//! // Using builder for custom options
//! let options = ExtractorOptions::builder()
//!     .title_selectors(SelectorSet::parse("name", &["#productTitle", ".product-title"]).unwrap())
//!     .category_path_marker("/bestsellers/")
//!     .build();
//! ```

use crate::constants;
use crate::selector::SelectorSet;

/// Configuration options for the product extractor.
///
/// Every field has a default matching the known marketplace layouts. Start
/// from [`ExtractorOptions::default`] and override single fields to extend a
/// chain rather than replace it.
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Candidates for the title region (must contain a `span`).
    pub title_selectors: SelectorSet,

    /// Candidates for the image gallery region.
    pub image_selectors: SelectorSet,

    /// Candidates for the seller/author byline, most specific first.
    pub merchant_selectors: SelectorSet,

    /// Candidates for the sales rank region.
    pub rank_selectors: SelectorSet,

    /// Region holding the display name on a linked category page.
    pub category_name_selectors: SelectorSet,

    /// Rank links are only kept when their href contains this marker.
    ///
    /// Default: `"/gp/"`
    pub category_path_marker: String,

    /// Link text identifying the aggregate top rank.
    ///
    /// Default: `"100"`
    pub top_rank_marker: String,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            title_selectors: SelectorSet::builtin("name", constants::TITLE_SELECTORS),
            image_selectors: SelectorSet::builtin("images", constants::IMAGE_SELECTORS),
            merchant_selectors: SelectorSet::builtin("merchant", constants::MERCHANT_SELECTORS),
            rank_selectors: SelectorSet::builtin("categories", constants::RANK_SELECTORS),
            category_name_selectors: SelectorSet::builtin(
                "category name",
                constants::CATEGORY_NAME_SELECTORS,
            ),
            category_path_marker: constants::CATEGORY_PATH_MARKER.to_string(),
            top_rank_marker: constants::TOP_RANK_MARKER.to_string(),
        }
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

/// Builder for [`ExtractorOptions`].
///
/// ## Example
///
/// ```rust
/// use productrs::{ExtractorOptions, SelectorSet};
///
/// let options = ExtractorOptions::builder()
///     .rank_selectors(SelectorSet::parse("categories", &["#SalesRank", ".zg_hrsr"]).unwrap())
///     .top_rank_marker("Top 100")
///     .build();
/// ```
#[derive(Default)]
pub struct ExtractorOptionsBuilder {
    title_selectors: Option<SelectorSet>,
    image_selectors: Option<SelectorSet>,
    merchant_selectors: Option<SelectorSet>,
    rank_selectors: Option<SelectorSet>,
    category_name_selectors: Option<SelectorSet>,
    category_path_marker: Option<String>,
    top_rank_marker: Option<String>,
}

impl ExtractorOptionsBuilder {
    pub fn title_selectors(mut self, selectors: SelectorSet) -> Self {
        self.title_selectors = Some(selectors);
        self
    }

    pub fn image_selectors(mut self, selectors: SelectorSet) -> Self {
        self.image_selectors = Some(selectors);
        self
    }

    pub fn merchant_selectors(mut self, selectors: SelectorSet) -> Self {
        self.merchant_selectors = Some(selectors);
        self
    }

    pub fn rank_selectors(mut self, selectors: SelectorSet) -> Self {
        self.rank_selectors = Some(selectors);
        self
    }

    pub fn category_name_selectors(mut self, selectors: SelectorSet) -> Self {
        self.category_name_selectors = Some(selectors);
        self
    }

    /// Set the href marker of category links
    pub fn category_path_marker(mut self, marker: impl Into<String>) -> Self {
        self.category_path_marker = Some(marker.into());
        self
    }

    /// Set the link text marking the top rank
    pub fn top_rank_marker(mut self, marker: impl Into<String>) -> Self {
        self.top_rank_marker = Some(marker.into());
        self
    }

    /// Build the ExtractorOptions
    pub fn build(self) -> ExtractorOptions {
        let defaults = ExtractorOptions::default();
        ExtractorOptions {
            title_selectors: self.title_selectors.unwrap_or(defaults.title_selectors),
            image_selectors: self.image_selectors.unwrap_or(defaults.image_selectors),
            merchant_selectors: self
                .merchant_selectors
                .unwrap_or(defaults.merchant_selectors),
            rank_selectors: self.rank_selectors.unwrap_or(defaults.rank_selectors),
            category_name_selectors: self
                .category_name_selectors
                .unwrap_or(defaults.category_name_selectors),
            category_path_marker: self
                .category_path_marker
                .unwrap_or(defaults.category_path_marker),
            top_rank_marker: self.top_rank_marker.unwrap_or(defaults.top_rank_marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectorSpec;

    #[test]
    fn test_default_selector_chains() {
        let options = ExtractorOptions::default();
        assert_eq!(options.title_selectors.to_string(), "#title,#productTitle");
        assert_eq!(
            options.merchant_selectors.to_string(),
            ".contributorNameID,.prodDetAttrValue,#bylineInfo"
        );
        assert_eq!(options.image_selectors.selectors().len(), 5);
        assert_eq!(options.rank_selectors.selectors()[0], SelectorSpec::id("SalesRank"));
        assert_eq!(options.category_name_selectors.to_string(), ".category");
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let title = SelectorSet::parse("name", &[".product-title"]).unwrap();
        let options = ExtractorOptions::builder()
            .title_selectors(title.clone())
            .category_path_marker("/zgbs/")
            .build();

        assert_eq!(options.title_selectors, title);
        assert_eq!(options.category_path_marker, "/zgbs/");
        assert_eq!(options.top_rank_marker, "100");
        assert_eq!(options.rank_selectors.field(), "categories");
    }
}
