use crate::document::Document;
use crate::error::DomError;
use crate::node::NodeId;
use crate::rect::Rect;
use crate::style::InlineStyle;

/// Declarative description of an element subtree, mounted with
/// [`Document::mount`].
///
/// ```
/// use optdom::{Document, ElementBuilder};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let select = doc
///     .mount(
///         body,
///         ElementBuilder::select()
///             .attr("data-label", "filter")
///             .child(ElementBuilder::option("Alpha"))
///             .child(ElementBuilder::option("Beta").value("b")),
///     )
///     .unwrap();
/// assert_eq!(doc.options(select).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    selected: bool,
    style: InlineStyle,
    layout: Option<Rect>,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// An `option` labelled `label`.
    pub fn option(label: impl Into<String>) -> Self {
        Self::new("option").text(label)
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    // Form
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Start out selected. Only meaningful on `option`.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn multiple(self) -> Self {
        self.attr("multiple", "")
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "")
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }

    // Visual
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    /// Rendered box to record for this element once mounted.
    pub fn layout(mut self, rect: Rect) -> Self {
        self.layout = Some(rect);
        self
    }

    pub(crate) fn mount(self, doc: &mut Document, parent: NodeId) -> Result<NodeId, DomError> {
        let id = doc.create_element(&self.tag);
        for (name, value) in &self.attrs {
            doc.set_attr(id, name, value)?;
        }
        if !self.text.is_empty() {
            doc.set_text(id, &self.text)?;
        }
        if doc.tag_name(id) == Some("input") {
            if let Some(value) = self.attrs.iter().find(|(n, _)| n == "value") {
                doc.set_value(id, &value.1)?;
            }
        }
        *doc.style_mut(id)? = self.style;
        if let Some(rect) = self.layout {
            doc.set_layout(id, rect);
        }

        doc.append_child(parent, id)?;
        if self.selected || self.attrs.iter().any(|(n, _)| n == "selected") {
            doc.set_selected(id, true)?;
        }

        for child in self.children {
            child.mount(doc, id)?;
        }
        Ok(id)
    }
}
