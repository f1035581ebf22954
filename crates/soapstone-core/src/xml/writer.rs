//! Deterministic XML text rendering.
//!
//! Output is a pure function of the tree: attributes and children render
//! in stored order, childless elements self-close, and escaping is the
//! minimal five-entity set. Parsing text back into a tree is the
//! transport's job, not this crate's.

use crate::xml::{Element, escape};

/// Render an element tree as compact XML text.
#[must_use]
pub fn to_xml(el: &Element) -> String {
    let mut out = String::new();
    write_compact(&mut out, el);
    out
}

/// Render an element tree as indented XML text, two spaces per level.
#[must_use]
pub fn to_xml_pretty(el: &Element) -> String {
    let mut out = String::new();
    write_pretty(&mut out, el, 0);
    out.push('\n');
    out
}

impl Element {
    /// Render this tree as compact XML text.
    #[must_use]
    pub fn to_xml(&self) -> String {
        to_xml(self)
    }

    /// Render this tree as indented XML text.
    #[must_use]
    pub fn to_xml_pretty(&self) -> String {
        to_xml_pretty(self)
    }
}

fn open_tag(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.name);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape::push_escaped_attr(out, value);
        out.push('"');
    }
}

fn close_tag(out: &mut String, el: &Element) {
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

fn write_compact(out: &mut String, el: &Element) {
    open_tag(out, el);

    if el.text.is_empty() && el.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    escape::push_escaped_text(out, &el.text);
    for child in &el.children {
        write_compact(out, child);
    }
    close_tag(out, el);
}

fn write_pretty(out: &mut String, el: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    open_tag(out, el);

    if el.text.is_empty() && el.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    escape::push_escaped_text(out, &el.text);

    if !el.children.is_empty() {
        for child in &el.children {
            out.push('\n');
            write_pretty(out, child, depth + 1);
        }
        out.push('\n');
        out.push_str(&pad);
    }

    close_tag(out, el);
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn childless_elements_self_close() {
        let mut el = Element::new("GetAccountRequest");
        el.set_attr("applyCos", "1");

        assert_eq!(to_xml(&el), r#"<GetAccountRequest applyCos="1"/>"#);
    }

    #[test]
    fn children_render_in_stored_order() {
        let mut el = Element::new("waitSetAdd");
        for id in ["first", "second"] {
            let mut child = Element::new("a");
            child.set_attr("id", id);
            el.push_child(child);
        }

        assert_eq!(
            to_xml(&el),
            r#"<waitSetAdd><a id="first"/><a id="second"/></waitSetAdd>"#
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let mut el = Element::new("account");
        el.text = "a&b<c".to_string();

        assert_eq!(to_xml(&el), "<account>a&amp;b&lt;c</account>");
    }

    #[test]
    fn pretty_output_indents_nested_children() {
        let mut inner = Element::new("a");
        inner.set_attr("n", "one");
        let mut el = Element::new("waitSetAdd");
        el.push_child(inner);

        assert_eq!(
            to_xml_pretty(&el),
            "<waitSetAdd>\n  <a n=\"one\"/>\n</waitSetAdd>\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut el = Element::new("account");
        el.set_attr("name", "ada@example.test");
        el.set_attr("id", "8aa-11");
        el.push_child(Element::new("a"));

        assert_eq!(to_xml(&el), to_xml(&el.clone()));
    }
}
