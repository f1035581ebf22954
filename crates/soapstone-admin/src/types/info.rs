//! Entity info triples returned by most read operations: `name` and `id`
//! identity attributes plus an open-ended attribute list.

use crate::types::attr::{Attr, AttrList};
use soapstone_core::prelude::*;

macro_rules! named_info {
    (
        $(#[$meta:meta])*
        $name:ident as $tag:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            pub name: String,
            pub id: String,
            pub attrs: AttrList,
        }

        impl $name {
            const NAME: FieldDescriptor =
                FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
            const ID: FieldDescriptor =
                FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
            const ATTRS: FieldDescriptor = FieldDescriptor::optional(
                "a",
                Binding::Child,
                FieldKind::List(ListKind {
                    item: Attr::SHAPE,
                    wrapper: None,
                    order: ListOrder::Insignificant,
                }),
            );

            #[must_use]
            pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    id: id.into(),
                    attrs: AttrList::new(),
                }
            }

            /// Append one attribute value.
            #[must_use]
            pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.attrs.add(name, value);
                self
            }
        }

        impl MessageKind for $name {
            const SHAPE: &'static MessageShape = &MessageShape {
                name: $tag,
                role: MessageRole::Child,
                fields: &[Self::NAME, Self::ID, Self::ATTRS],
            };

            fn to_element(&self) -> Result<Element, WireError> {
                let mut w = ElementWriter::new(Self::SHAPE);
                w.str_field(Self::NAME, Some(&self.name))?;
                w.str_field(Self::ID, Some(&self.id))?;
                w.list(Self::ATTRS, &self.attrs)?;
                Ok(w.finish())
            }

            fn from_element(el: &Element) -> Result<Self, WireError> {
                let r = ElementReader::new(Self::SHAPE, el)?;
                Ok(Self {
                    name: r.req_str(Self::NAME)?,
                    id: r.req_str(Self::ID)?,
                    attrs: r.list(Self::ATTRS)?.into(),
                })
            }
        }

        impl DebugFields for $name {
            fn fmt_fields(&self, f: &mut FieldFormatter) {
                f.str_field("name", &self.name);
                f.str_field("id", &self.id);
                f.list("a", &self.attrs);
            }
        }
    };
}

named_info! {
    ///
    /// AccountInfo
    ///
    AccountInfo as "account"
}

named_info! {
    ///
    /// DomainInfo
    ///
    DomainInfo as "domain"
}

named_info! {
    ///
    /// ServerInfo
    ///
    ServerInfo as "server"
}

///
/// CosCountInfo
///
/// Per-class account tally, `<cos name="standard" id="c01">42</cos>`;
/// the count rides as a decimal text token.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CosCountInfo {
    pub name: String,
    pub id: String,
    pub count: i64,
}

impl CosCountInfo {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const COUNT: FieldDescriptor = FieldDescriptor::required("count", Binding::Text, FieldKind::Long);

    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            count,
        }
    }
}

impl MessageKind for CosCountInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "cos",
        role: MessageRole::Child,
        fields: &[Self::NAME, Self::ID, Self::COUNT],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        w.str_field(Self::ID, Some(&self.id))?;
        w.i64_field(Self::COUNT, Some(self.count))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
            id: r.req_str(Self::ID)?,
            count: r.req_i64(Self::COUNT)?,
        })
    }
}

impl DebugFields for CosCountInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.str_field("id", &self.id);
        f.i64_field("count", self.count);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_round_trips_identity_and_attrs() {
        let info = AccountInfo::new("ada@example.test", "8aa-11")
            .attr("displayName", "Ada")
            .attr("mailQuota", "10485760");

        let el = info.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("name"), Some("ada@example.test"));
        assert_eq!(el.count_children("a"), 2);

        let back = AccountInfo::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, info);
        assert_eq!(back.attrs.get("displayName"), Some("Ada"));
    }

    #[test]
    fn info_without_attrs_has_no_children() {
        let info = DomainInfo::new("example.test", "d01");
        let el = info.to_element().expect("serialize should succeed");

        assert!(el.children.is_empty());
        let back = DomainInfo::from_element(&el).expect("deserialize should succeed");
        assert!(back.attrs.is_empty());
    }

    #[test]
    fn missing_id_is_reported_with_the_shape_tag() {
        let mut el = Element::new("server");
        el.set_attr("name", "mail01.example.test");

        let err = ServerInfo::from_element(&el).expect_err("missing id should fail");
        assert_eq!(err.to_string(), "server: required field 'id' is missing");
    }

    #[test]
    fn cos_counts_ride_as_text_tokens() {
        let cos = CosCountInfo::new("standard", "c01", 42);
        let el = cos.to_element().expect("serialize should succeed");

        assert_eq!(el.text, "42");
        assert_eq!(CosCountInfo::from_element(&el).expect("deserialize should succeed"), cos);
    }

    #[test]
    fn non_numeric_cos_count_is_invalid_format() {
        let mut el = Element::new("cos");
        el.set_attr("name", "standard");
        el.set_attr("id", "c01");
        el.text = "many".to_string();

        let err = CosCountInfo::from_element(&el).expect_err("bad count should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
    }
}
