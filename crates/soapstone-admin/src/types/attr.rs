use derive_more::Deref;
use soapstone_core::prelude::*;

///
/// Attr
///
/// One named attribute value, `<a n="mailQuota">10485760</a>` on the
/// wire. Entity records carry these in open-ended lists rather than
/// dedicated fields, and the same name may repeat for multi-valued
/// attributes. An empty value round-trips as an empty text node, i.e.
/// an `<a>` with no content.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    const N: FieldDescriptor = FieldDescriptor::required("n", Binding::Attr, FieldKind::Text);
    const VALUE: FieldDescriptor =
        FieldDescriptor::optional("value", Binding::Text, FieldKind::Text);

    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl MessageKind for Attr {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "a",
        role: MessageRole::Child,
        fields: &[Self::N, Self::VALUE],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::N, Some(&self.name))?;
        w.str_field(Self::VALUE, Some(&self.value))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::N)?,
            value: r.opt_str(Self::VALUE).unwrap_or_default(),
        })
    }
}

impl DebugFields for Attr {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("n", &self.name);
        f.opt_str("value", (!self.value.is_empty()).then_some(self.value.as_str()));
    }
}

///
/// AttrList
///
/// Ordered, duplicate-friendly attribute list. Records that carry
/// attributes embed one of these; lookups scan in insertion order.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
pub struct AttrList(Vec<Attr>);

impl AttrList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one attribute value.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push(Attr::new(name, value));
    }

    /// First value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Every value for `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

impl From<Vec<Attr>> for AttrList {
    fn from(attrs: Vec<Attr>) -> Self {
        Self(attrs)
    }
}

impl FromIterator<Attr> for AttrList {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_round_trips_through_its_element() {
        let attr = Attr::new("displayName", "Ada Lovelace");
        let el = attr.to_element().expect("serialize should succeed");

        assert_eq!(el.name, "a");
        assert_eq!(el.attr("n"), Some("displayName"));
        assert_eq!(el.text, "Ada Lovelace");
        assert_eq!(Attr::from_element(&el).expect("deserialize should succeed"), attr);
    }

    #[test]
    fn empty_values_round_trip_as_empty() {
        let attr = Attr::new("description", "");
        let el = attr.to_element().expect("serialize should succeed");

        assert!(el.text.is_empty());
        assert_eq!(Attr::from_element(&el).expect("deserialize should succeed"), attr);
    }

    #[test]
    fn attr_list_keeps_duplicates_in_order() {
        let mut attrs = AttrList::new();
        attrs.add("mailAlias", "ada@example.test");
        attrs.add("displayName", "Ada");
        attrs.add("mailAlias", "lovelace@example.test");

        assert_eq!(attrs.get("mailAlias"), Some("ada@example.test"));
        let all: Vec<_> = attrs.get_all("mailAlias").collect();
        assert_eq!(all, ["ada@example.test", "lovelace@example.test"]);
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn missing_lookups_return_none() {
        let attrs = AttrList::new();
        assert_eq!(attrs.get("mailQuota"), None);
        assert_eq!(attrs.get_all("mailQuota").count(), 0);
    }
}
