//! Selector fallback chains and first-match-wins region resolution.
//!
//! A page layout change usually means a field moved to a different container.
//! Each semantic field therefore carries an ordered [`SelectorSet`]: the
//! resolver tries every selector in turn and returns the first [`Region`]
//! that is present and has text.
//!
//! ## Example
//!
//! ```rust
//! use productrs::{resolve, HtmlDocument, Region, SelectorSet};
//!
//! let document = HtmlDocument::parse(r#"<h1 id="productTitle">Desk Lamp</h1>"#);
//! let selectors = SelectorSet::parse("name", &["#title", "#productTitle"]).unwrap();
//!
//! match resolve(&document, &selectors) {
//!     Some(Region::Element(_)) => println!("found by id"),
//!     Some(Region::Matches { .. }) => println!("found by class"),
//!     None => println!("layout not recognised"),
//! }
//! ```

use crate::document::{Document, DomNode};
use crate::error::{ProductError, Result};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// One way of locating a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSpec {
    /// Element whose `id` equals the value (`#value`)
    Id(Cow<'static, str>),
    /// Elements whose `class` attribute contains the value (`.value`)
    Class(Cow<'static, str>),
}

impl SelectorSpec {
    pub const fn id(name: &'static str) -> Self {
        Self::Id(Cow::Borrowed(name))
    }

    pub const fn class(fragment: &'static str) -> Self {
        Self::Class(Cow::Borrowed(fragment))
    }

    /// Parse `#id` or `.class` notation
    pub fn parse(selector: &str) -> Result<Self> {
        if let Some(id) = selector.strip_prefix('#').filter(|id| !id.is_empty()) {
            Ok(Self::Id(Cow::Owned(id.to_string())))
        } else if let Some(class) = selector.strip_prefix('.').filter(|c| !c.is_empty()) {
            Ok(Self::Class(Cow::Owned(class.to_string())))
        } else {
            Err(ProductError::UnsupportedSelector(selector.to_string()))
        }
    }
}

impl FromStr for SelectorSpec {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SelectorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// Ordered, non-empty selector chain for one semantic field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    field: String,
    selectors: Vec<SelectorSpec>,
}

impl SelectorSet {
    /// Create a selector set, rejecting an empty chain
    pub fn new(field: impl Into<String>, selectors: Vec<SelectorSpec>) -> Result<Self> {
        let field = field.into();
        if selectors.is_empty() {
            return Err(ProductError::EmptySelectorSet { field });
        }
        Ok(Self { field, selectors })
    }

    /// Create a selector set from `#id` / `.class` strings
    pub fn parse(field: impl Into<String>, selectors: &[&str]) -> Result<Self> {
        let selectors = selectors
            .iter()
            .map(|selector| SelectorSpec::parse(selector))
            .collect::<Result<Vec<_>>>()?;
        Self::new(field, selectors)
    }

    /// Build one of the built-in chains; those are never empty.
    pub(crate) fn builtin(field: &str, selectors: &[SelectorSpec]) -> Self {
        Self {
            field: field.to_string(),
            selectors: selectors.to_vec(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn selectors(&self) -> &[SelectorSpec] {
        &self.selectors
    }
}

impl fmt::Display for SelectorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, selector) in self.selectors.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

/// What a selector found.
///
/// Id selectors yield a single element, class selectors the list of every
/// matching element. Consumers that need different behaviour per layout
/// match on the variant.
#[derive(Debug, Clone)]
pub enum Region<N> {
    Element(N),
    Matches { first: N, rest: Vec<N> },
}

impl<N: DomNode> Region<N> {
    /// The single element, or the first match
    pub fn first(&self) -> &N {
        match self {
            Region::Element(node) => node,
            Region::Matches { first, .. } => first,
        }
    }

    /// Every node of the region in document order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        let rest = match self {
            Region::Element(_) => &[][..],
            Region::Matches { rest, .. } => rest.as_slice(),
        };
        std::iter::once(self.first()).chain(rest.iter())
    }

    /// Combined text of every node of the region
    pub fn text(&self) -> String {
        self.nodes().map(DomNode::text).collect()
    }
}

/// Resolve the first selector of `selectors` that matches with non-empty text.
///
/// Returns `None` when no selector matches; for the caller this means the
/// page uses a layout without this field, which is not an error by itself.
pub fn resolve<'d, D: Document>(
    document: &'d D,
    selectors: &SelectorSet,
) -> Option<Region<D::Node<'d>>> {
    for selector in selectors.selectors() {
        let region = match selector {
            SelectorSpec::Id(id) => document.element_by_id(id).map(Region::Element),
            SelectorSpec::Class(class) => {
                let mut matches = document.elements_with_class(class).into_iter();
                matches.next().map(|first| Region::Matches {
                    first,
                    rest: matches.collect(),
                })
            }
        };

        match region {
            Some(region) if !region.text().is_empty() => {
                debug!(field = selectors.field(), %selector, "region resolved");
                return Some(region);
            }
            Some(_) => trace!(field = selectors.field(), %selector, "region has no text"),
            None => trace!(field = selectors.field(), %selector, "no match"),
        }
    }

    debug!(field = selectors.field(), %selectors, "no region found");
    None
}
