//! Seller/author resolution over the known byline layouts.

use crate::document::DomNode;
use crate::error::{ProductError, Result};
use crate::product::Merchant;
use crate::selector::{Region, SelectorSet};
use tracing::debug;

/// Byline layouts, derived from what the merchant selectors returned.
enum BylineShape<'r, N> {
    /// Class lookup: the first match carries both name and link
    Listed(&'r N),
    /// Single element that is itself the link
    Link { node: &'r N, href: String },
    /// Single element wrapping the link somewhere below
    Container(&'r N),
}

impl<'r, N: DomNode> BylineShape<'r, N> {
    fn of(region: &'r Region<N>) -> Self {
        match region {
            Region::Matches { first, .. } => BylineShape::Listed(first),
            Region::Element(node) => match node.attribute("href").filter(|href| !href.is_empty()) {
                Some(href) => BylineShape::Link { node, href },
                None => BylineShape::Container(node),
            },
        }
    }
}

/// Build the [`Merchant`] from a resolved byline region.
///
/// Missing names or links become empty strings. Only a container without
/// any link fails, with [`ProductError::FieldChildNotFound`].
pub fn resolve_merchant<N: DomNode>(
    region: &Region<N>,
    selectors: &SelectorSet,
) -> Result<Merchant> {
    let merchant = match BylineShape::of(region) {
        BylineShape::Listed(node) => Merchant {
            name: first_child_name(node),
            url: node.attribute("href").unwrap_or_default(),
        },
        BylineShape::Link { node, href } => Merchant {
            name: first_child_name(node),
            url: href,
        },
        BylineShape::Container(node) => {
            let links = node.descendants_by_tag("a");
            let link = links.first().ok_or_else(|| ProductError::FieldChildNotFound {
                field: selectors.field().to_string(),
                selectors: selectors.clone(),
                child: "a".to_string(),
            })?;
            Merchant {
                name: link.text().trim().to_string(),
                url: link.attribute("href").unwrap_or_default(),
            }
        }
    };

    debug!(name = %merchant.name, url = %merchant.url, "merchant resolved");
    Ok(merchant)
}

fn first_child_name<N: DomNode>(node: &N) -> String {
    node.first_child_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
