//! Shape table invariants.
//!
//! Tables are `'static` data written by hand; this pass catches table
//! bugs once at registry build so the codecs can trust every descriptor
//! they are handed. All problems are reported in one pass.

use crate::{
    err,
    error::ErrorTree,
    model::{Binding, FieldKind, ListKind, MessageRole, MessageShape},
};
use std::collections::BTreeSet;

/// Validate registered message shapes plus everything reachable from
/// their field tables.
///
/// Name uniqueness applies to the registered messages only: child shapes
/// are never looked up by name and may reuse a wire tag across unrelated
/// parents (a selector and an info record can both be tagged `account`).
pub fn validate_shapes(shapes: &[&'static MessageShape]) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    let mut names = BTreeSet::new();
    for shape in shapes {
        if !names.insert(shape.name) {
            err!(errs, "duplicate message shape name '{}'", shape.name);
        }
        if shape.role == MessageRole::Child {
            err!(errs, "{}: child shapes are not registered directly", shape.name);
        }
    }

    // walk each reachable shape exactly once, by identity
    let mut seen: BTreeSet<*const MessageShape> = BTreeSet::new();
    let mut pending: Vec<&'static MessageShape> = shapes.to_vec();

    while let Some(shape) = pending.pop() {
        if !seen.insert(std::ptr::from_ref(shape)) {
            continue;
        }
        validate_fields(shape, &mut errs, &mut pending);
    }

    errs.result()
}

fn validate_fields(
    shape: &'static MessageShape,
    errs: &mut ErrorTree,
    pending: &mut Vec<&'static MessageShape>,
) {
    let mut bound = BTreeSet::new();
    let mut text_fields = 0usize;

    for desc in shape.fields {
        if !bound.insert((desc.bind, desc.wire)) {
            err!(
                errs,
                "{}: duplicate {} field '{}'",
                shape.name,
                desc.bind,
                desc.wire
            );
        }

        match desc.bind {
            Binding::Attr => {
                if matches!(desc.kind, FieldKind::Record(_) | FieldKind::List(_)) {
                    err!(
                        errs,
                        "{}: attr field '{}' cannot carry a structured kind",
                        shape.name,
                        desc.wire
                    );
                }
            }
            Binding::Text => {
                text_fields += 1;
                if !matches!(
                    desc.kind,
                    FieldKind::Enum(_) | FieldKind::Int | FieldKind::Long | FieldKind::Text
                ) {
                    err!(
                        errs,
                        "{}: text field '{}' must carry a token kind",
                        shape.name,
                        desc.wire
                    );
                }
            }
            Binding::Child => {}
        }

        match desc.kind {
            FieldKind::Enum(tokens) => validate_enum(shape, desc.wire, tokens, errs),
            FieldKind::Record(item) => {
                if desc.bind != Binding::Child {
                    err!(
                        errs,
                        "{}: record field '{}' must be child-bound",
                        shape.name,
                        desc.wire
                    );
                }
                if item.name != desc.wire {
                    err!(
                        errs,
                        "{}: record field '{}' is tagged '{}' on the wire",
                        shape.name,
                        desc.wire,
                        item.name
                    );
                }
                validate_child_role(shape, desc.wire, item, errs);
                pending.push(item);
            }
            FieldKind::List(list) => {
                if desc.bind != Binding::Child {
                    err!(
                        errs,
                        "{}: list field '{}' must be child-bound",
                        shape.name,
                        desc.wire
                    );
                }
                validate_list(shape, desc.wire, list, errs);
                pending.push(list.item);
            }
            _ => {}
        }
    }

    if text_fields > 1 {
        err!(errs, "{}: more than one text-bound field", shape.name);
    }
}

fn validate_enum(
    shape: &MessageShape,
    wire: &str,
    tokens: &'static [&'static str],
    errs: &mut ErrorTree,
) {
    if tokens.is_empty() {
        err!(errs, "{}: enum field '{}' declares no tokens", shape.name, wire);
        return;
    }

    let mut seen = BTreeSet::new();
    for token in tokens {
        if !seen.insert(*token) {
            err!(
                errs,
                "{}: enum field '{}' repeats token '{}'",
                shape.name,
                wire,
                token
            );
        }
    }
}

// The field's wire name is the wrapper when one is declared, otherwise
// the repeated item tag itself.
fn validate_list(shape: &MessageShape, wire: &str, list: ListKind, errs: &mut ErrorTree) {
    match list.wrapper {
        Some(wrapper) => {
            if wrapper != wire {
                err!(
                    errs,
                    "{}: list field '{}' declares mismatched wrapper '{}'",
                    shape.name,
                    wire,
                    wrapper
                );
            }
        }
        None => {
            if list.item.name != wire {
                err!(
                    errs,
                    "{}: unwrapped list field '{}' repeats '{}' elements",
                    shape.name,
                    wire,
                    list.item.name
                );
            }
        }
    }

    validate_child_role(shape, wire, list.item, errs);
}

fn validate_child_role(
    shape: &MessageShape,
    wire: &str,
    item: &MessageShape,
    errs: &mut ErrorTree,
) {
    if item.role != MessageRole::Child {
        err!(
            errs,
            "{}: field '{}' nests non-child shape '{}'",
            shape.name,
            wire,
            item.name
        );
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDescriptor, ListOrder};

    const ITEM: MessageShape = MessageShape {
        name: "a",
        role: MessageRole::Child,
        fields: &[FieldDescriptor::required("n", Binding::Attr, FieldKind::Text)],
    };

    const GOOD: MessageShape = MessageShape {
        name: "Good",
        role: MessageRole::Request,
        fields: &[
            FieldDescriptor::optional("limit", Binding::Attr, FieldKind::Int),
            FieldDescriptor::required(
                "waitSetAdd",
                Binding::Child,
                FieldKind::List(ListKind {
                    item: &ITEM,
                    wrapper: Some("waitSetAdd"),
                    order: ListOrder::Significant,
                }),
            ),
        ],
    };

    fn messages(result: Result<(), ErrorTree>) -> Vec<String> {
        result
            .expect_err("validation should fail")
            .iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn a_well_formed_table_validates() {
        validate_shapes(&[&GOOD]).expect("table should validate");
    }

    #[test]
    fn duplicate_shape_names_are_reported() {
        let msgs = messages(validate_shapes(&[&GOOD, &GOOD]));
        assert_eq!(msgs, ["duplicate message shape name 'Good'"]);
    }

    #[test]
    fn registering_a_child_shape_is_reported() {
        let msgs = messages(validate_shapes(&[&ITEM]));
        assert_eq!(msgs, ["a: child shapes are not registered directly"]);
    }

    #[test]
    fn nested_shapes_are_validated_recursively() {
        const BAD_ITEM: MessageShape = MessageShape {
            name: "a",
            role: MessageRole::Child,
            fields: &[
                FieldDescriptor::required("n", Binding::Attr, FieldKind::Text),
                FieldDescriptor::required("n", Binding::Attr, FieldKind::Text),
            ],
        };
        const HOST: MessageShape = MessageShape {
            name: "Host",
            role: MessageRole::Response,
            fields: &[FieldDescriptor::optional(
                "a",
                Binding::Child,
                FieldKind::List(ListKind {
                    item: &BAD_ITEM,
                    wrapper: None,
                    order: ListOrder::Insignificant,
                }),
            )],
        };

        let msgs = messages(validate_shapes(&[&HOST]));
        assert_eq!(msgs, ["a: duplicate attr field 'n'"]);
    }

    #[test]
    fn duplicate_fields_are_reported_per_binding() {
        const DUP: MessageShape = MessageShape {
            name: "Dup",
            role: MessageRole::Request,
            fields: &[
                FieldDescriptor::optional("id", Binding::Attr, FieldKind::Text),
                FieldDescriptor::optional("id", Binding::Attr, FieldKind::Text),
            ],
        };

        let msgs = messages(validate_shapes(&[&DUP]));
        assert_eq!(msgs, ["Dup: duplicate attr field 'id'"]);
    }

    #[test]
    fn structured_attr_fields_are_reported() {
        const BAD: MessageShape = MessageShape {
            name: "Bad",
            role: MessageRole::Request,
            fields: &[FieldDescriptor::required(
                "account",
                Binding::Attr,
                FieldKind::Record(&ITEM),
            )],
        };

        let msgs = messages(validate_shapes(&[&BAD]));
        assert!(msgs.iter().any(|m| m.contains("structured kind")));
    }

    #[test]
    fn mismatched_wrappers_are_reported() {
        const BAD: MessageShape = MessageShape {
            name: "Bad",
            role: MessageRole::Request,
            fields: &[FieldDescriptor::optional(
                "add",
                Binding::Child,
                FieldKind::List(ListKind {
                    item: &ITEM,
                    wrapper: Some("remove"),
                    order: ListOrder::Insignificant,
                }),
            )],
        };

        let msgs = messages(validate_shapes(&[&BAD]));
        assert_eq!(msgs, ["Bad: list field 'add' declares mismatched wrapper 'remove'"]);
    }

    #[test]
    fn record_fields_must_match_their_wire_tag() {
        const BAD: MessageShape = MessageShape {
            name: "Bad",
            role: MessageRole::Request,
            fields: &[FieldDescriptor::required(
                "server",
                Binding::Child,
                FieldKind::Record(&ITEM),
            )],
        };

        let msgs = messages(validate_shapes(&[&BAD]));
        assert_eq!(msgs, ["Bad: record field 'server' is tagged 'a' on the wire"]);
    }

    #[test]
    fn nesting_a_request_shape_is_reported() {
        const BAD: MessageShape = MessageShape {
            name: "Bad",
            role: MessageRole::Request,
            fields: &[FieldDescriptor::required(
                "Good",
                Binding::Child,
                FieldKind::Record(&GOOD),
            )],
        };

        let msgs = messages(validate_shapes(&[&BAD]));
        assert!(msgs.iter().any(|m| m.contains("nests non-child shape 'Good'")));
    }

    #[test]
    fn every_problem_is_reported_in_one_pass() {
        const BAD: MessageShape = MessageShape {
            name: "Bad",
            role: MessageRole::Request,
            fields: &[
                FieldDescriptor::optional("id", Binding::Attr, FieldKind::Text),
                FieldDescriptor::optional("id", Binding::Attr, FieldKind::Text),
                FieldDescriptor::required("mode", Binding::Attr, FieldKind::Enum(&[])),
            ],
        };

        let errs = validate_shapes(&[&BAD, &BAD]).expect_err("validation should fail");
        assert!(errs.len() >= 3);
    }
}
