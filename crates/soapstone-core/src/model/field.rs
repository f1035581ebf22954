use crate::model::MessageShape;
use derive_more::Display;
use serde::{Serialize, Serializer, ser::SerializeStruct};

///
/// FieldDescriptor
///
/// One field's binding contract: its wire name, where it lives on the
/// element, what kind of value it carries, and whether absence is an
/// error. Pure data; the projector and codecs consult it per field.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldDescriptor {
    pub wire: &'static str,
    pub bind: Binding,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldDescriptor {
    /// Declare a required field.
    #[must_use]
    pub const fn required(wire: &'static str, bind: Binding, kind: FieldKind) -> Self {
        Self {
            wire,
            bind,
            kind,
            presence: Presence::Required,
        }
    }

    /// Declare an optional field.
    #[must_use]
    pub const fn optional(wire: &'static str, bind: Binding, kind: FieldKind) -> Self {
        Self {
            wire,
            bind,
            kind,
            presence: Presence::Optional,
        }
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

///
/// Binding
///
/// Where a field lives on its owning element.
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    /// An attribute on the owning element.
    #[display("attr")]
    Attr,
    /// A child element; repeated children for lists.
    #[display("child")]
    Child,
    /// The owning element's text content.
    #[display("text")]
    Text,
}

///
/// Presence
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Optional,
    Required,
}

///
/// FieldKind
///
/// Semantic kind of a field's value. `Int` and `Long` share the decimal
/// codec; the distinction is kept so exported catalogs preserve the
/// declared widths of the source schema.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Token drawn from a closed vocabulary.
    Enum(&'static [&'static str]),
    Int,
    /// Repeated child records, optionally grouped under a wrapper element.
    List(ListKind),
    Long,
    /// A single nested child record.
    Record(&'static MessageShape),
    Text,
    TriBool,
}

// Hand-written so nested shapes serialize by name; deriving would chase
// the full `'static` shape graph into every catalog export.
impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Enum(tokens) => {
                serializer.serialize_newtype_variant("FieldKind", 0, "enum", tokens)
            }
            Self::Int => serializer.serialize_unit_variant("FieldKind", 1, "int"),
            Self::List(ref list) => {
                serializer.serialize_newtype_variant("FieldKind", 2, "list", list)
            }
            Self::Long => serializer.serialize_unit_variant("FieldKind", 3, "long"),
            Self::Record(shape) => {
                serializer.serialize_newtype_variant("FieldKind", 4, "record", shape.name)
            }
            Self::Text => serializer.serialize_unit_variant("FieldKind", 5, "text"),
            Self::TriBool => serializer.serialize_unit_variant("FieldKind", 6, "tribool"),
        }
    }
}

///
/// ListKind
///
/// Collection descriptor: the item shape whose name tags each repeated
/// element, an optional wrapper element, and whether wire order carries
/// meaning.
///

#[derive(Clone, Copy, Debug)]
pub struct ListKind {
    pub item: &'static MessageShape,
    pub wrapper: Option<&'static str>,
    pub order: ListOrder,
}

impl Serialize for ListKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ListKind", 3)?;
        s.serialize_field("item", self.item.name)?;
        s.serialize_field("wrapper", &self.wrapper)?;
        s.serialize_field("order", &self.order)?;
        s.end()
    }
}

///
/// ListOrder
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// Membership and multiplicity matter; order does not. Mapping still
    /// preserves input order so output stays deterministic.
    Insignificant,
    /// Wire order is meaning-bearing and survives both directions.
    Significant,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: MessageShape = MessageShape {
        name: "a",
        role: crate::model::MessageRole::Child,
        fields: &[],
    };

    #[test]
    fn presence_constructors_agree_with_is_required() {
        let req = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
        let opt = FieldDescriptor::optional("limit", Binding::Attr, FieldKind::Int);

        assert!(req.is_required());
        assert!(!opt.is_required());
    }

    #[test]
    fn field_kind_serializes_nested_shapes_by_name() {
        let kind = FieldKind::List(ListKind {
            item: &ITEM,
            wrapper: Some("waitSetAdd"),
            order: ListOrder::Significant,
        });

        let json = serde_json::to_value(kind).expect("serialize should succeed");
        assert_eq!(json["list"]["item"], "a");
        assert_eq!(json["list"]["wrapper"], "waitSetAdd");
        assert_eq!(json["list"]["order"], "significant");
    }

    #[test]
    fn enum_kind_serializes_its_tokens() {
        let kind = FieldKind::Enum(&["all", "ldap"]);

        let json = serde_json::to_value(kind).expect("serialize should succeed");
        assert_eq!(json["enum"][0], "all");
        assert_eq!(json["enum"][1], "ldap");
    }
}
