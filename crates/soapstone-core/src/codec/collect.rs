use crate::{
    error::WireError,
    model::{FieldDescriptor, FieldKind, ListKind, MessageShape},
    traits::MessageKind,
    xml::Element,
};

// Only reachable through a table bug; registry validation rules these out
// before any mapping runs.
const EXPECTED_LIST: &str = "list descriptor";
const EXPECTED_WRAPPER: &str = "single wrapper element";

fn list_kind(shape: &MessageShape, desc: &FieldDescriptor) -> Result<ListKind, WireError> {
    match desc.kind {
        FieldKind::List(list) => Ok(list),
        _ => Err(WireError::invalid(shape.name, desc.wire, "", EXPECTED_LIST)),
    }
}

/// Serialize a collection field onto `parent`.
///
/// Items emit as repeated siblings tagged with the item shape's name,
/// nested inside one wrapper element when the descriptor declares a
/// wrapper. Input order is preserved exactly. An empty required
/// collection is a missing field; an empty optional collection emits
/// nothing at all, not an empty wrapper.
pub fn write_list<T: MessageKind>(
    parent: &mut Element,
    shape: &MessageShape,
    desc: &FieldDescriptor,
    items: &[T],
) -> Result<(), WireError> {
    let list = list_kind(shape, desc)?;

    if items.is_empty() {
        if desc.is_required() {
            return Err(WireError::missing(shape.name, desc.wire));
        }
        return Ok(());
    }

    match list.wrapper {
        Some(wrapper) => {
            let mut wrap = Element::new(wrapper);
            for item in items {
                wrap.push_child(item.to_element()?);
            }
            parent.push_child(wrap);
        }
        None => {
            for item in items {
                parent.push_child(item.to_element()?);
            }
        }
    }

    Ok(())
}

/// Deserialize a collection field from `el`.
///
/// Zero matching elements yield an empty sequence for optional
/// collections and a missing-field error for required ones; children
/// with other tags are simply not part of this collection. Wire order is
/// preserved exactly.
pub fn read_list<T: MessageKind>(
    shape: &MessageShape,
    el: &Element,
    desc: &FieldDescriptor,
) -> Result<Vec<T>, WireError> {
    let list = list_kind(shape, desc)?;

    let host = match list.wrapper {
        Some(wrapper) => {
            if el.count_children(wrapper) > 1 {
                return Err(WireError::invalid(
                    shape.name,
                    desc.wire,
                    wrapper,
                    EXPECTED_WRAPPER,
                ));
            }
            match el.first_child(wrapper) {
                Some(wrap) => wrap,
                None => return finish(shape, desc, Vec::new()),
            }
        }
        None => el,
    };

    let mut items = Vec::new();
    for child in host.children_named(list.item.name) {
        items.push(T::from_element(child)?);
    }

    finish(shape, desc, items)
}

fn finish<T>(
    shape: &MessageShape,
    desc: &FieldDescriptor,
    items: Vec<T>,
) -> Result<Vec<T>, WireError> {
    if items.is_empty() && desc.is_required() {
        return Err(WireError::missing(shape.name, desc.wire));
    }
    Ok(items)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WireErrorKind,
        model::{Binding, ListOrder, MessageRole},
    };

    #[derive(Debug, Eq, PartialEq)]
    struct Tag {
        id: String,
    }

    impl MessageKind for Tag {
        const SHAPE: &'static MessageShape = &MessageShape {
            name: "a",
            role: MessageRole::Child,
            fields: &[FieldDescriptor::required("id", Binding::Attr, FieldKind::Text)],
        };

        fn to_element(&self) -> Result<Element, WireError> {
            let mut el = Element::new("a");
            el.set_attr("id", self.id.clone());
            Ok(el)
        }

        fn from_element(el: &Element) -> Result<Self, WireError> {
            let id = el
                .attr("id")
                .ok_or(WireError::missing("a", "id"))?
                .to_string();
            Ok(Self { id })
        }
    }

    const HOST: MessageShape = MessageShape {
        name: "Host",
        role: MessageRole::Request,
        fields: &[],
    };

    const WRAPPED: FieldDescriptor = FieldDescriptor::required(
        "waitSetAdd",
        Binding::Child,
        FieldKind::List(ListKind {
            item: Tag::SHAPE,
            wrapper: Some("waitSetAdd"),
            order: ListOrder::Significant,
        }),
    );

    const BARE: FieldDescriptor = FieldDescriptor::optional(
        "a",
        Binding::Child,
        FieldKind::List(ListKind {
            item: Tag::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    fn tags(ids: &[&str]) -> Vec<Tag> {
        ids.iter().map(|id| Tag { id: (*id).to_string() }).collect()
    }

    #[test]
    fn wrapped_lists_nest_items_under_one_wrapper() {
        let mut parent = Element::new("Host");
        write_list(&mut parent, &HOST, &WRAPPED, &tags(&["one", "two"]))
            .expect("write should succeed");

        assert_eq!(parent.children.len(), 1);
        let wrap = parent.first_child("waitSetAdd").expect("wrapper present");
        let ids: Vec<_> = wrap
            .children_named("a")
            .filter_map(|c| c.attr("id"))
            .collect();
        assert_eq!(ids, ["one", "two"]);
    }

    #[test]
    fn wire_order_survives_a_round_trip() {
        let items = tags(&["z", "a", "m"]);
        let mut parent = Element::new("Host");
        write_list(&mut parent, &HOST, &WRAPPED, &items).expect("write should succeed");

        let back: Vec<Tag> = read_list(&HOST, &parent, &WRAPPED).expect("read should succeed");
        assert_eq!(back, items);
    }

    #[test]
    fn empty_required_list_is_missing_both_ways() {
        let mut parent = Element::new("Host");
        let err = write_list::<Tag>(&mut parent, &HOST, &WRAPPED, &[])
            .expect_err("empty required should fail");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);

        let empty = Element::new("Host");
        let err = read_list::<Tag>(&HOST, &empty, &WRAPPED)
            .expect_err("absent required should fail");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
    }

    #[test]
    fn empty_optional_list_emits_nothing_and_reads_back_empty() {
        let mut parent = Element::new("Host");
        write_list::<Tag>(&mut parent, &HOST, &BARE, &[]).expect("write should succeed");
        assert!(parent.children.is_empty());

        let items: Vec<Tag> = read_list(&HOST, &parent, &BARE).expect("read should succeed");
        assert!(items.is_empty());
    }

    #[test]
    fn empty_wrapper_reads_as_empty_sequence() {
        let mut parent = Element::new("Host");
        parent.push_child(Element::new("waitSetAdd"));

        // wrapper present, zero items: empty, but required says missing
        let err = read_list::<Tag>(&HOST, &parent, &WRAPPED)
            .expect_err("required empty should fail");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
    }

    #[test]
    fn unrelated_siblings_are_not_collected() {
        let mut parent = Element::new("Host");
        write_list(&mut parent, &HOST, &BARE, &tags(&["only"])).expect("write should succeed");
        parent.push_child(Element::new("b"));

        let items: Vec<Tag> = read_list(&HOST, &parent, &BARE).expect("read should succeed");
        assert_eq!(items, tags(&["only"]));
    }

    #[test]
    fn duplicate_wrappers_are_rejected() {
        let mut parent = Element::new("Host");
        parent.push_child(Element::new("waitSetAdd"));
        parent.push_child(Element::new("waitSetAdd"));

        let err =
            read_list::<Tag>(&HOST, &parent, &WRAPPED).expect_err("duplicate wrapper should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
    }
}
