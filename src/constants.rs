//! Default selectors and markers for marketplace product pages.
//!
//! Update these when the page layouts change. Selector sets are ordered from
//! the most to the least preferred layout.

use crate::selector::SelectorSpec;

pub const TITLE_SELECTORS: &[SelectorSpec] =
    &[SelectorSpec::id("title"), SelectorSpec::id("productTitle")];

pub const IMAGE_SELECTORS: &[SelectorSpec] = &[
    SelectorSpec::id("altImages"),
    SelectorSpec::id("imageBlock_feature_div"),
    SelectorSpec::id("imageBlockNew_feature_div"),
    SelectorSpec::id("imageBlock"),
    SelectorSpec::id("ebooksImageBlock"),
];

pub const MERCHANT_SELECTORS: &[SelectorSpec] = &[
    SelectorSpec::class("contributorNameID"),
    SelectorSpec::class("prodDetAttrValue"),
    SelectorSpec::id("bylineInfo"),
];

pub const RANK_SELECTORS: &[SelectorSpec] = &[
    SelectorSpec::id("SalesRank"),
    SelectorSpec::id("detailBullets_feature_div"),
    SelectorSpec::id("productDetails_detailBullets_sections1"),
];

/// Region holding the display name on a category (best sellers) page
pub const CATEGORY_NAME_SELECTORS: &[SelectorSpec] = &[SelectorSpec::class("category")];

/// Tag that must appear inside the title region
pub const TITLE_CHILD_TAG: &str = "span";

/// Only rank links whose href contains this marker are categories
pub const CATEGORY_PATH_MARKER: &str = "/gp/";

/// Link text marking the aggregate "Top 100" rank
pub const TOP_RANK_MARKER: &str = "100";

/// Path segment shared by every product image asset
pub const IMAGE_ASSET_SEGMENT: &str = "/images/I/";

/// Marker of inline (data URI) images
pub const INLINE_IMAGE_MARKER: &str = "base64";

pub const LOW_RES_TOKEN: &str = "S40_";
pub const HIGH_RES_TOKEN: &str = "S300_";

/// High resolution attribute used when `src` is absent
pub const HIRES_ATTRIBUTE: &str = "data-old-hires";

/// User agent of [`HttpFetcher::new`](crate::HttpFetcher::new)
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
