//! View tree
//!
//! A small owned element tree standing in for the host document. Renderers
//! build it, state objects project onto it (classes, styles, attributes),
//! and [`crate::html`] turns it into markup or text.

use indexmap::IndexMap;

/// Height of one rendered text line, in pixels
pub const LINE_HEIGHT: u32 = 24;

/// A node of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with children
    Element(Element),
    /// Text, escaped on projection
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// One element of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    hidden: bool,
    children: Vec<Node>,
}

impl Element {
    /// Create element with the given tag name
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: IndexMap::new(),
            styles: IndexMap::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    /// With id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// With one or more space-separated classes
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// With attribute
    #[inline]
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// With inline style property
    #[inline]
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// With text child
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// With element child
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// With element children
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Tag name
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element carries `class`
    #[inline]
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class (no duplicates)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add `class` when `on`, remove it otherwise
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Attribute value
    #[inline]
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All attributes in insertion order
    #[inline]
    #[must_use]
    pub fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    /// Set attribute
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Inline style property
    #[inline]
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// All inline styles in insertion order
    #[inline]
    #[must_use]
    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.styles
    }

    /// Set inline style property
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.styles.insert(property.to_string(), value.into());
    }

    /// Whether the element is hidden
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Show or hide the element
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Child nodes
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Mutable child elements, skipping text
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Append a child element
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Replace all children (the `innerHTML = ""` then append pattern)
    pub fn replace_children(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children = children.into_iter().map(Node::Element).collect();
    }

    /// Replace all children with a single text node (`textContent = ...`)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of the subtree
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Direct text of this element, ignoring descendants
    #[must_use]
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// First element (depth-first, self included) carrying `class`
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e| e.has_class(class))
    }

    /// Mutable variant of [`Element::find_by_class`]
    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.find_mut(&|e| e.has_class(class))
    }

    /// Element (self included) with `id`
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e| e.id() == Some(id))
    }

    /// Mutable variant of [`Element::find_by_id`]
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|e| e.id() == Some(id))
    }

    /// All elements (depth-first, self included) carrying `class`
    #[must_use]
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, out);
        }
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(pred))
    }

    fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements_mut()
            .find_map(|child| child.find_mut(pred))
    }

    /// Natural content height: one [`LINE_HEIGHT`] per element that holds
    /// text directly
    ///
    /// Hidden elements take no space.
    #[must_use]
    pub fn natural_height(&self) -> u32 {
        if self.hidden {
            return 0;
        }
        let own = if self
            .children
            .iter()
            .any(|n| matches!(n, Node::Text(t) if !t.is_empty()))
        {
            LINE_HEIGHT
        } else {
            0
        };
        own + self
            .child_elements()
            .map(Element::natural_height)
            .sum::<u32>()
    }
}
