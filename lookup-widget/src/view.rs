use std::fmt::Write;

/// A small stand-in for a DOM subtree. Text only ever enters as text nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

const VOID_TAGS: &[&str] = &["input"];
const INLINE_TAGS: &[&str] = &["span", "button", "input"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, current)) => *current = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn find_all(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_all(class));
        }
        found
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => text.push_str(t),
                Node::Element(element) => text.push_str(&element.text_content()),
            }
        }
        text
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(element) => element.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    /// Block elements start a new line, ordered list items are numbered.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, 0, None);
        out
    }

    fn write_text(&self, out: &mut String, depth: usize, ordinal: Option<usize>) {
        let mut line = ordinal.map(|n| format!("{n}. ")).unwrap_or_default();
        let nested = if matches!(self.tag, "ol" | "li") {
            depth + 1
        } else {
            depth
        };
        let mut position = 0;
        for node in &self.children {
            match node {
                Node::Text(text) => line.push_str(text),
                Node::Element(element) if element.is_inline() => {
                    line.push_str(&element.text_content())
                }
                Node::Element(element) => {
                    push_line(out, depth, &mut line);
                    let ordinal = (self.tag == "ol").then(|| {
                        position += 1;
                        position
                    });
                    element.write_text(out, nested, ordinal);
                }
            }
        }
        push_line(out, depth, &mut line);
    }

    fn is_inline(&self) -> bool {
        INLINE_TAGS.contains(&self.tag)
    }
}

fn push_line(out: &mut String, depth: usize, line: &mut String) {
    if line.is_empty() {
        return;
    }
    out.push_str(&"  ".repeat(depth));
    out.push_str(line);
    out.push('\n');
    line.clear();
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
