//! [`Document`] backend built on the `kuchikikiki` crate.
//!
//! Behaves like [`HtmlDocument`](crate::HtmlDocument): both backends return
//! elements in document order, match classes by substring and stop ancestor
//! navigation at the root element.

use crate::document::{Document, DomNode};
use kuchikikiki::traits::*;
use kuchikikiki::NodeRef;

/// A page parsed with `kuchikikiki`.
pub struct KuchikiDocument {
    root: NodeRef,
}

impl KuchikiDocument {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikikiki::parse_html().one(html),
        }
    }

    fn elements_where<'q>(
        &'q self,
        attribute: &'q str,
        predicate: impl Fn(&str) -> bool + 'q,
    ) -> impl Iterator<Item = NodeRef> + 'q {
        self.root.descendants().filter(move |node| {
            node.as_element().is_some_and(|element| {
                element
                    .attributes
                    .borrow()
                    .get(attribute)
                    .is_some_and(|value| predicate(value))
            })
        })
    }
}

impl Document for KuchikiDocument {
    type Node<'a> = KuchikiNode;

    fn element_by_id(&self, id: &str) -> Option<KuchikiNode> {
        self.elements_where("id", |value| value == id)
            .next()
            .map(KuchikiNode)
    }

    fn elements_with_class(&self, fragment: &str) -> Vec<KuchikiNode> {
        self.elements_where("class", |value| value.contains(fragment))
            .map(KuchikiNode)
            .collect()
    }
}

/// Node handle of a [`KuchikiDocument`].
#[derive(Debug, Clone)]
pub struct KuchikiNode(NodeRef);

impl DomNode for KuchikiNode {
    fn descendants_by_tag(&self, tag: &str) -> Vec<Self> {
        self.0
            .descendants()
            .filter(|node| {
                node.as_element().is_some_and(|element| {
                    (&*element.name.local).eq_ignore_ascii_case(tag)
                })
            })
            .map(KuchikiNode)
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let element = self.0.as_element()?;
        let attributes = element.attributes.borrow();
        attributes.get(name).map(str::to_string)
    }

    fn text(&self) -> String {
        self.0.text_contents()
    }

    fn first_child_text(&self) -> Option<String> {
        self.0.first_child().map(|child| child.text_contents())
    }

    fn parent_node(&self) -> Option<Self> {
        self.0
            .parent()
            .filter(|parent| parent.as_element().is_some())
            .map(KuchikiNode)
    }
}
