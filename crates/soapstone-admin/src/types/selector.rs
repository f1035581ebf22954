//! Target selectors: `<account by="name">jane@example.test</account>`.
//!
//! A selector is a tagged union of one discriminator and one key, so a
//! selector with two populated variants is unrepresentable rather than
//! rejected late. An unknown `by` token on the wire decodes to
//! `UnknownSelectorVariant`; a missing discriminator or empty key is a
//! missing required field.

use soapstone_core::prelude::*;

wire_enum! {
    /// Account selector discriminators.
    pub enum AccountBy as "account selector" {
        AdminName = "adminName",
        ForeignPrincipal = "foreignPrincipal",
        Id = "id",
        Krb5Principal = "krb5Principal",
        Name = "name",
    }
}

wire_enum! {
    /// Domain selector discriminators.
    pub enum DomainBy as "domain selector" {
        ForeignName = "foreignName",
        Id = "id",
        Krb5Realm = "krb5Realm",
        Name = "name",
        VirtualHostname = "virtualHostname",
    }
}

wire_enum! {
    /// Server selector discriminators.
    pub enum ServerBy as "server selector" {
        Id = "id",
        Name = "name",
        ServiceHostname = "serviceHostname",
    }
}

wire_enum! {
    /// Class-of-service selector discriminators.
    pub enum CosBy as "cos selector" {
        Id = "id",
        Name = "name",
    }
}

wire_enum! {
    /// Data source selector discriminators.
    pub enum DataSourceBy as "data source selector" {
        Id = "id",
        Name = "name",
    }
}

macro_rules! selector_kind {
    (
        $(#[$meta:meta])*
        $name:ident as $tag:literal by $by:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $name {
            by: $by,
            key: String,
        }

        impl $name {
            const BY: FieldDescriptor = FieldDescriptor::required(
                "by",
                Binding::Attr,
                FieldKind::Enum(<$by as WireEnum>::TOKENS),
            );
            const KEY: FieldDescriptor =
                FieldDescriptor::required("key", Binding::Text, FieldKind::Text);

            #[must_use]
            pub fn new(by: $by, key: impl Into<String>) -> Self {
                Self { by, key: key.into() }
            }

            /// Select by entity id.
            #[must_use]
            pub fn by_id(key: impl Into<String>) -> Self {
                Self::new(<$by>::Id, key)
            }

            /// Select by entity name.
            #[must_use]
            pub fn by_name(key: impl Into<String>) -> Self {
                Self::new(<$by>::Name, key)
            }

            #[must_use]
            pub const fn by(&self) -> $by {
                self.by
            }

            #[must_use]
            pub fn key(&self) -> &str {
                &self.key
            }
        }

        impl MessageKind for $name {
            const SHAPE: &'static MessageShape = &MessageShape {
                name: $tag,
                role: MessageRole::Child,
                fields: &[Self::BY, Self::KEY],
            };

            fn to_element(&self) -> Result<Element, WireError> {
                let mut w = ElementWriter::new(Self::SHAPE);
                w.enum_field(Self::BY, Some(self.by))?;
                w.str_field(Self::KEY, Some(&self.key))?;
                Ok(w.finish())
            }

            fn from_element(el: &Element) -> Result<Self, WireError> {
                let r = ElementReader::new(Self::SHAPE, el)?;
                Ok(Self {
                    by: r.selector_by(Self::BY)?,
                    key: r.req_str(Self::KEY)?,
                })
            }
        }

        impl DebugFields for $name {
            fn fmt_fields(&self, f: &mut FieldFormatter) {
                f.enum_field("by", self.by);
                f.str_field("key", &self.key);
            }
        }
    };
}

selector_kind! {
    ///
    /// AccountSelector
    ///
    AccountSelector as "account" by AccountBy
}

selector_kind! {
    ///
    /// DomainSelector
    ///
    DomainSelector as "domain" by DomainBy
}

selector_kind! {
    ///
    /// ServerSelector
    ///
    ServerSelector as "server" by ServerBy
}

selector_kind! {
    ///
    /// CosSelector
    ///
    CosSelector as "cos" by CosBy
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip_discriminator_and_key() {
        let sel = AccountSelector::new(AccountBy::ForeignPrincipal, "kerb/ada");
        let el = sel.to_element().expect("serialize should succeed");

        assert_eq!(el.name, "account");
        assert_eq!(el.attr("by"), Some("foreignPrincipal"));
        assert_eq!(el.text, "kerb/ada");

        let back = AccountSelector::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, sel);
    }

    #[test]
    fn unknown_by_token_is_a_selector_error() {
        let mut el = Element::new("domain");
        el.set_attr("by", "uuid");
        el.text = "example.test".to_string();

        let err = DomainSelector::from_element(&el).expect_err("unknown variant should fail");
        assert_eq!(err.kind(), WireErrorKind::UnknownSelectorVariant);
        assert_eq!(err.to_string(), "domain: unknown selector variant 'uuid'");
    }

    #[test]
    fn missing_discriminator_is_a_missing_field() {
        let mut el = Element::new("server");
        el.text = "mail01.example.test".to_string();

        let err = ServerSelector::from_element(&el).expect_err("missing by should fail");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
    }

    #[test]
    fn empty_key_text_is_a_missing_field() {
        let mut el = Element::new("account");
        el.set_attr("by", "name");

        let err = AccountSelector::from_element(&el).expect_err("empty key should fail");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
        assert_eq!(err.to_string(), "account: required field 'key' is missing");
    }

    #[test]
    fn shorthand_constructors_pick_the_expected_variant() {
        assert_eq!(CosSelector::by_id("9b2").by(), CosBy::Id);
        assert_eq!(DomainSelector::by_name("example.test").by(), DomainBy::Name);
        assert_eq!(ServerSelector::by_name("mail01").key(), "mail01");
    }
}
