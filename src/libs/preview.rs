use crate::libs::markup::{ class_attr_value, class_list, escape_html };
use std::collections::BTreeSet;
use std::fmt::Write;

/// Elements a playground preview may be built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewTag {
    Div,
    Span,
    P,
    Button,
}

impl PreviewTag {
    pub fn name(&self) -> &'static str {
        match self {
            PreviewTag::Div => "div",
            PreviewTag::Span => "span",
            PreviewTag::P => "p",
            PreviewTag::Button => "button",
        }
    }
}

/// A small element tree describing what the playground should render live.
///
/// The same tree is printed as source by [`PreviewNode::to_markup`], so a family
/// that derives its code snippet from its preview cannot drift out of sync.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewNode {
    pub tag: PreviewTag,
    pub classes: Vec<String>,
    pub style: Option<String>,
    pub text: Option<String>,
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    pub fn new(tag: PreviewTag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(PreviewTag::Div)
    }

    pub fn span() -> Self {
        Self::new(PreviewTag::Span)
    }

    pub fn p() -> Self {
        Self::new(PreviewTag::P)
    }

    pub fn button() -> Self {
        Self::new(PreviewTag::Button)
    }

    /// Neutral node rendered when a value is not part of the option set
    pub fn empty() -> Self {
        Self::div()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.style.is_none() && self.text.is_none() && self.children.is_empty()
    }

    /// Append classes; fragments may hold several space-separated tokens
    pub fn class_list(mut self, parts: &[&str]) -> Self {
        let joined = class_list(parts);
        self.classes.extend(joined.split_whitespace().map(str::to_string));
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: PreviewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = PreviewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Space-separated class attribute value
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Class tokens applied to the root element only
    pub fn root_class_tokens(&self) -> BTreeSet<String> {
        self.classes.iter().cloned().collect()
    }

    /// Render the tree as indented HTML source
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let tag = self.tag.name();

        let _ = write!(out, "{indent}<{tag}");
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", class_attr_value(&self.class_attr()));
        }
        if let Some(style) = &self.style {
            let _ = write!(out, " style=\"{}\"", escape_html(style));
        }
        out.push('>');

        if self.children.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(&escape_html(text));
            }
            let _ = write!(out, "</{tag}>");
            return;
        }

        out.push('\n');
        if let Some(text) = &self.text {
            let _ = writeln!(out, "{indent}  {}", escape_html(text));
        }
        for child in &self.children {
            child.write_markup(out, depth + 1);
            out.push('\n');
        }
        let _ = write!(out, "{indent}</{tag}>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaf_renders_on_one_line() {
        let node = PreviewNode::p().class_list(&["font-bold", "text-2xl"]).text("Hi & bye");
        assert_eq!(node.to_markup(), "<p class=\"font-bold text-2xl\">Hi &amp; bye</p>");
    }

    #[test]
    fn nested_nodes_are_indented() {
        let node = PreviewNode::div()
            .class_list(&["flex", "items-end", ""])
            .child(PreviewNode::div().class_list(&["p-2"]).text("1"))
            .child(PreviewNode::span().text("2"));

        assert_eq!(
            node.to_markup(),
            "<div class=\"flex items-end\">\n  <div class=\"p-2\">1</div>\n  <span>2</span>\n</div>"
        );
    }

    #[test]
    fn arbitrary_variant_classes_are_written_verbatim() {
        let node = PreviewNode::div().class_list(&["flex", "[&>*]:p-2 [&_p]:mt-4"]).text("a < b");
        assert_eq!(node.to_markup(), "<div class=\"flex [&>*]:p-2 [&_p]:mt-4\">a &lt; b</div>");
    }

    #[test]
    fn style_attribute_is_escaped() {
        let node = PreviewNode::div().style("background-image: url(\"a.png\")");
        assert_eq!(node.to_markup(), "<div style=\"background-image: url(&quot;a.png&quot;)\"></div>");
    }

    #[test]
    fn empty_node_is_neutral() {
        let node = PreviewNode::empty();
        assert!(node.is_empty());
        assert_eq!(node.to_markup(), "<div></div>");
        assert!(node.root_class_tokens().is_empty());
    }

    #[test]
    fn root_tokens_ignore_children() {
        let node = PreviewNode::div()
            .class_list(&["flex gap-4"])
            .child(PreviewNode::div().class_list(&["size-12"]));
        let tokens: Vec<_> = node.root_class_tokens().into_iter().collect();
        assert_eq!(tokens, vec!["flex", "gap-4"]);
    }
}
