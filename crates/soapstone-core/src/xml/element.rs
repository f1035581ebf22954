use serde::{Deserialize, Serialize};

///
/// Element
///
/// One node of the wire element tree.
///
/// Attribute and child order are preserved exactly as inserted; rendering
/// the same tree twice yields identical text. Text content is flat; the
/// admin wire format never interleaves text with child elements.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Element {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Return the attribute value for `name`, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the attribute is present, even with an empty value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing the value in place when `name` is
    /// already present. Attribute names stay unique per element.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Iterate children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Return the first child with the given tag name, if any.
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&Self> {
        self.children_named(name).next()
    }

    /// Count children with the given tag name.
    #[must_use]
    pub fn count_children(&self, name: &str) -> usize {
        self.children_named(name).count()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("account");
        el.set_attr("id", "one");
        el.set_attr("name", "ada");
        el.set_attr("id", "two");

        assert_eq!(el.attr("id"), Some("two"));
        assert_eq!(el.attrs.len(), 2);
        assert_eq!(el.attrs[0].0, "id");
    }

    #[test]
    fn empty_attribute_value_counts_as_present() {
        let mut el = Element::new("account");
        el.set_attr("name", "");

        assert!(el.has_attr("name"));
        assert_eq!(el.attr("name"), Some(""));
    }

    #[test]
    fn children_named_preserves_document_order() {
        let mut el = Element::new("parent");
        for id in ["1", "2", "3"] {
            let mut child = Element::new("a");
            child.set_attr("id", id);
            el.push_child(child);
        }
        let mut other = Element::new("b");
        other.set_attr("id", "x");
        el.push_child(other);

        let ids: Vec<_> = el
            .children_named("a")
            .filter_map(|c| c.attr("id"))
            .collect();

        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(el.count_children("a"), 3);
        assert_eq!(el.count_children("b"), 1);
        assert!(el.first_child("c").is_none());
    }
}
