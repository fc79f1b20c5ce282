//! [`Document`] backend built on the `scraper` crate.

use crate::document::{Document, DomNode};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ID_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[id]").expect("valid id selector"));
static CLASS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[class]").expect("valid class selector"));

/// A page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl Document for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn element_by_id(&self, id: &str) -> Option<HtmlNode<'_>> {
        self.html
            .select(&ID_SELECTOR)
            .find(|element| element.value().id() == Some(id))
            .map(HtmlNode)
    }

    fn elements_with_class(&self, fragment: &str) -> Vec<HtmlNode<'_>> {
        self.html
            .select(&CLASS_SELECTOR)
            .filter(|element| {
                element
                    .value()
                    .attr("class")
                    .is_some_and(|class| class.contains(fragment))
            })
            .map(HtmlNode)
            .collect()
    }
}

/// Element handle of an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl DomNode for HtmlNode<'_> {
    fn descendants_by_tag(&self, tag: &str) -> Vec<Self> {
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        self.0.select(&selector).map(HtmlNode).collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn first_child_text(&self) -> Option<String> {
        let child = self.0.first_child()?;
        match ElementRef::wrap(child) {
            Some(element) => Some(element.text().collect()),
            None => Some(
                child
                    .value()
                    .as_text()
                    .map(|text| String::from(&**text))
                    .unwrap_or_default(),
            ),
        }
    }

    fn parent_node(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlNode)
    }
}
