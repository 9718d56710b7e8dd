use std::collections::HashMap;
use std::fmt;

use crate::builder::ElementBuilder;
use crate::error::DomError;
use crate::event::{Event, EventKind, Registered};
use crate::node::{ElementData, Node, NodeId, NodeKind};
use crate::rect::Rect;
use crate::selector::Selector;
use crate::style::InlineStyle;

/// Insertion positions relative to a target element, as in
/// `insertAdjacentElement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacent {
    /// Immediately before the target, as its previous sibling.
    BeforeBegin,
    /// As the target's first child.
    AfterBegin,
    /// As the target's last child.
    BeforeEnd,
    /// Immediately after the target, as its next sibling.
    AfterEnd,
}

/// The host document: an arena of nodes plus layout and listeners.
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    layout: HashMap<NodeId, Rect>,
    listeners: HashMap<NodeId, Vec<Registered>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("laid_out", &self.layout.len())
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl Document {
    /// Create a document holding an empty `body`.
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Document,
        };
        let mut doc = Self {
            nodes: vec![root],
            root: NodeId(0),
            body: NodeId(0),
            layout: HashMap::new(),
            listeners: HashMap::new(),
        };
        let body = doc.create_element("body");
        doc.nodes[doc.root.0].children.push(body);
        doc.nodes[body.0].parent = Some(doc.root);
        doc.body = body;
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        match &self.node(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            NodeKind::Document => Err(DomError::NotAnElement(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(el)) => Ok(el),
            Some(NodeKind::Document) => Err(DomError::NotAnElement(id)),
            None => Err(DomError::UnknownNode(id)),
        }
    }

    /// Whether `id` was issued by this document.
    pub fn has_node(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_ok()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element(ElementData::new(tag)),
        });
        id
    }

    /// Build `builder` and append it under `parent`.
    pub fn mount(&mut self, parent: NodeId, builder: ElementBuilder) -> Result<NodeId, DomError> {
        builder.mount(self, parent)
    }

    // ------------------------------------------------------------------
    // Tree navigation
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.is_element(*child))
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|s| *s == id)?;
        siblings[..index]
            .iter()
            .rev()
            .copied()
            .find(|s| self.is_element(*s))
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|s| *s == id)?;
        siblings[index + 1..]
            .iter()
            .copied()
            .find(|s| self.is_element(*s))
    }

    /// Inclusive ancestry check.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.has_node(id) && self.contains(self.root, id)
    }

    /// All descendants of `id` in tree order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` under `parent` before `reference`, or last when
    /// `reference` is `None`. Moves `child` if it is already attached.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.node(parent)?;
        self.element(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            self.node(reference)?;
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild {
                    parent,
                    child: reference,
                });
            }
            if reference == child {
                return Ok(());
            }
        }

        if let Some(old_parent) = self.detach(child) {
            self.refresh_selectedness_around(old_parent);
        }

        let children = &mut self.nodes[parent.0].children;
        let index = reference
            .and_then(|r| children.iter().position(|c| *c == r))
            .unwrap_or(children.len());
        children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);

        self.refresh_selectedness_around(parent);
        if self.tag_name(child) == Some("select") {
            self.reset_selectedness(child);
        }
        Ok(())
    }

    pub fn insert_adjacent(
        &mut self,
        target: NodeId,
        position: Adjacent,
        node: NodeId,
    ) -> Result<(), DomError> {
        self.element(target)?;
        match position {
            Adjacent::BeforeBegin => {
                let parent = self.parent(target).ok_or(DomError::NoParent(target))?;
                self.insert_before(parent, node, Some(target))
            }
            Adjacent::AfterBegin => {
                let first = self.children(target).first().copied();
                self.insert_before(target, node, first)
            }
            Adjacent::BeforeEnd => self.append_child(target, node),
            Adjacent::AfterEnd => {
                let parent = self.parent(target).ok_or(DomError::NoParent(target))?;
                let next = self.next_element_sibling(target);
                self.insert_before(parent, node, next)
            }
        }
    }

    /// Detach `id` from its parent. The node and its subtree stay usable.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element(id)?;
        if let Some(parent) = self.detach(id) {
            self.refresh_selectedness_around(parent);
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id.0].parent.take()?;
        self.nodes[parent.0].children.retain(|c| *c != id);
        Some(parent)
    }

    // ------------------------------------------------------------------
    // Element data
    // ------------------------------------------------------------------

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.attr(name)
    }

    /// Attributes in insertion order.
    pub fn attrs(&self, id: NodeId) -> &[(String, String)] {
        self.element(id)
            .map(|el| el.attrs.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_ok_and(|el| el.has_class(class))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    /// Text content. For an `option` this is its label.
    pub fn text(&self, id: NodeId) -> &str {
        self.element(id).map(|el| el.text.as_str()).unwrap_or("")
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }

    pub fn style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.element(id).ok().map(|el| &el.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> Result<&mut InlineStyle, DomError> {
        Ok(&mut self.element_mut(id)?.style)
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.style(id).is_some_and(InlineStyle::is_hidden)
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Record the rendered box of `id`.
    pub fn set_layout(&mut self, id: NodeId, rect: Rect) {
        self.layout.insert(id, rect);
    }

    /// The rendered box of `id`. Elements that were never laid out report
    /// an empty rect.
    pub fn client_rect(&self, id: NodeId) -> Rect {
        self.layout.get(&id).copied().unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Form controls
    // ------------------------------------------------------------------

    /// The `option` elements of a `select`, in tree order.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|id| self.tag_name(*id) == Some("option"))
            .collect()
    }

    pub fn is_multiple(&self, select: NodeId) -> bool {
        self.has_attr(select, "multiple")
    }

    pub fn is_selected(&self, option: NodeId) -> bool {
        self.element(option).is_ok_and(|el| el.selected)
    }

    /// Set an option's selectedness, keeping the owning control consistent:
    /// a single-selection control holds exactly one selected option while it
    /// has any.
    pub fn set_selected(&mut self, option: NodeId, selected: bool) -> Result<(), DomError> {
        self.element_mut(option)?.selected = selected;
        let Some(select) = self.owning_select(option) else {
            return Ok(());
        };
        if self.is_multiple(select) {
            return Ok(());
        }
        if selected {
            for other in self.options(select) {
                if other != option {
                    self.element_mut(other)?.selected = false;
                }
            }
        } else {
            self.reset_selectedness(select);
        }
        Ok(())
    }

    /// Set the selectedness of several options of `select` at once.
    ///
    /// The end state matches calling [`set_selected`](Self::set_selected)
    /// for each pair in order, but a single-selection control is
    /// normalized once instead of after every option.
    pub fn apply_selection(
        &mut self,
        select: NodeId,
        updates: impl IntoIterator<Item = (NodeId, bool)>,
    ) -> Result<(), DomError> {
        self.element(select)?;
        let mut last_selected = None;
        for (option, selected) in updates {
            if self.owning_select(option) != Some(select) {
                return Err(DomError::NotAChild {
                    parent: select,
                    child: option,
                });
            }
            self.element_mut(option)?.selected = selected;
            if selected {
                last_selected = Some(option);
            }
        }

        if self.is_multiple(select) {
            return Ok(());
        }
        if let Some(keep) = last_selected {
            for other in self.options(select) {
                if other != keep {
                    self.element_mut(other)?.selected = false;
                }
            }
        } else {
            self.reset_selectedness(select);
        }
        Ok(())
    }

    /// The label of an option: its text with ASCII whitespace stripped and
    /// collapsed. Other spaces (U+3000, NBSP) are part of the label.
    pub fn option_label(&self, option: NodeId) -> String {
        self.text(option)
            .split(|c: char| c.is_ascii_whitespace())
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The value of an option: its `value` attribute, or its label.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attr(option, "value") {
            Some(value) => value.to_string(),
            None => self.option_label(option),
        }
    }

    /// The value of a `select`: that of its first selected option, or empty.
    pub fn select_value(&self, select: NodeId) -> String {
        self.options(select)
            .into_iter()
            .find(|o| self.is_selected(*o))
            .map(|o| self.option_value(o))
            .unwrap_or_default()
    }

    /// The current value of a form control.
    pub fn value(&self, id: NodeId) -> String {
        match self.tag_name(id) {
            Some("select") => self.select_value(id),
            Some("option") => self.option_value(id),
            Some(_) => self
                .element(id)
                .map(|el| el.value.clone())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Set the value of a control without firing events.
    ///
    /// On a `select` this selects the first option with that value and
    /// deselects the rest; an unknown value leaves nothing selected.
    pub fn set_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        if self.tag_name(id) == Some("select") {
            let mut found = false;
            for option in self.options(id) {
                let hit = !found && self.option_value(option) == value;
                found |= hit;
                self.element_mut(option)?.selected = hit;
            }
            return Ok(());
        }
        self.element_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn owning_select(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.tag_name(current) == Some("select") {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    fn refresh_selectedness_around(&mut self, id: NodeId) {
        if let Some(select) = self.owning_select(id) {
            self.reset_selectedness(select);
        }
    }

    /// Single-selection controls always show one option: with none selected
    /// the first enabled option becomes selected, with several only the last
    /// one stays.
    fn reset_selectedness(&mut self, select: NodeId) {
        if self.is_multiple(select) {
            return;
        }
        let options = self.options(select);
        let selected: Vec<NodeId> = options
            .iter()
            .copied()
            .filter(|o| self.is_selected(*o))
            .collect();

        match selected.split_last() {
            None => {
                let first = options
                    .iter()
                    .copied()
                    .find(|o| !self.has_attr(*o, "disabled"));
                if let Some(Ok(el)) = first.map(|o| self.element_mut(o)) {
                    el.selected = true;
                }
            }
            Some((_, earlier)) => {
                for option in earlier {
                    if let Ok(el) = self.element_mut(*option) {
                        el.selected = false;
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First connected element matching `selector`, in tree order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .find(|id| selector.matches(self, *id)))
    }

    /// Every connected element matching `selector`, in tree order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        kind: EventKind,
        listener: impl FnMut(&mut Document, &Event) + 'static,
    ) -> Result<(), DomError> {
        self.element(id)?;
        self.listeners.entry(id).or_default().push(Registered {
            kind,
            listener: Box::new(listener),
        });
        Ok(())
    }

    pub fn listener_count(&self, id: NodeId, kind: EventKind) -> usize {
        self.listeners
            .get(&id)
            .map(|registered| registered.iter().filter(|r| r.kind == kind).count())
            .unwrap_or(0)
    }

    /// Run the target's listeners for `event` synchronously, in
    /// registration order. Returns how many ran.
    ///
    /// Listeners added while dispatching only see later events.
    pub fn dispatch(&mut self, event: Event) -> Result<usize, DomError> {
        let target = event.target();
        self.element(target)?;

        let Some(mut registered) = self.listeners.remove(&target) else {
            return Ok(0);
        };

        let mut ran = 0;
        for entry in registered.iter_mut().filter(|r| r.kind == event.kind()) {
            (entry.listener)(self, &event);
            ran += 1;
        }

        if let Some(added) = self.listeners.remove(&target) {
            registered.extend(added);
        }
        self.listeners.insert(target, registered);

        log::trace!("[optdom] dispatched {:?} to {} listener(s)", event, ran);
        Ok(ran)
    }

    /// Replace the text of an input and fire `Input`, as a user edit would.
    pub fn type_text(&mut self, input: NodeId, text: &str) -> Result<(), DomError> {
        self.set_value(input, text)?;
        self.dispatch(Event::Input { target: input })?;
        Ok(())
    }
}
