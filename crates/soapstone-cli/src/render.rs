//! Output forms for the catalog commands.
//!
//! Text renderings are for terminals; the export types serialize with
//! `serde_json` for tooling. Skeletons fill required fields only, so the
//! output is the smallest document the shape accepts.

use serde::Serialize;
use soapstone::core::{
    model::{Binding, FieldDescriptor, FieldKind, MessageRole, MessageShape},
    xml::Element,
};

/// One catalog listing line: name, role, field count.
#[must_use]
pub fn shape_line(shape: &MessageShape) -> String {
    let role = shape.role.to_string();

    format!("{:<36} {role:<9} fields={}", shape.name, shape.fields.len())
}

/// The field table of one shape, one line per descriptor.
#[must_use]
pub fn describe(shape: &MessageShape) -> String {
    let role = shape.role.to_string();
    let mut out = format!("{} ({role})\n", shape.name);

    if shape.fields.is_empty() {
        out.push_str("  (no fields)\n");
        return out;
    }

    let width = shape.fields.iter().map(|f| f.wire.len()).max().unwrap_or(0);
    for field in shape.fields {
        let presence = if field.is_required() { "required" } else { "optional" };
        let bind = field.bind.to_string();

        out.push_str(&format!(
            "  {:width$}  {bind:<5}  {presence}  {}\n",
            field.wire,
            kind_label(&field.kind),
        ));
    }

    out
}

/// Human label for a field kind, nested shapes by name.
#[must_use]
pub fn kind_label(kind: &FieldKind) -> String {
    match *kind {
        FieldKind::Enum(tokens) => format!("enum({})", tokens.join("|")),
        FieldKind::Int => "int".to_string(),
        FieldKind::List(list) => match list.wrapper {
            Some(wrapper) => format!("list({} in {})", list.item.name, wrapper),
            None => format!("list({})", list.item.name),
        },
        FieldKind::Long => "long".to_string(),
        FieldKind::Record(shape) => format!("record({})", shape.name),
        FieldKind::Text => "text".to_string(),
        FieldKind::TriBool => "tribool".to_string(),
    }
}

/// Placeholder XML for a shape, every required field filled.
#[must_use]
pub fn skeleton(shape: &MessageShape) -> String {
    skeleton_element(shape).to_xml_pretty()
}

fn skeleton_element(shape: &MessageShape) -> Element {
    let mut el = Element::new(shape.name);
    for field in shape.fields.iter().filter(|f| f.is_required()) {
        fill(&mut el, field);
    }

    el
}

fn fill(el: &mut Element, field: &FieldDescriptor) {
    match field.kind {
        FieldKind::Record(item) => el.push_child(skeleton_element(item)),
        FieldKind::List(list) => {
            let item = skeleton_element(list.item);
            match list.wrapper {
                Some(wrapper) => {
                    let mut wrap = Element::new(wrapper);
                    wrap.push_child(item);
                    el.push_child(wrap);
                }
                None => el.push_child(item),
            }
        }
        kind => match field.bind {
            Binding::Attr => el.set_attr(field.wire, placeholder(kind)),
            Binding::Child => {
                let mut child = Element::new(field.wire);
                child.text = placeholder(kind).to_string();
                el.push_child(child);
            }
            Binding::Text => el.text = placeholder(kind).to_string(),
        },
    }
}

const fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Enum(tokens) => {
            if tokens.is_empty() { "token" } else { tokens[0] }
        }
        FieldKind::Int | FieldKind::Long => "0",
        FieldKind::Text => "text",
        FieldKind::TriBool => "1",
        // structural kinds never reach the scalar path
        FieldKind::List(_) | FieldKind::Record(_) => "",
    }
}

///
/// ShapeSummary
///

#[derive(Serialize)]
pub struct ShapeSummary {
    pub name: &'static str,
    pub role: MessageRole,
    pub fields: usize,
}

impl From<&'static MessageShape> for ShapeSummary {
    fn from(shape: &'static MessageShape) -> Self {
        Self {
            name: shape.name,
            role: shape.role,
            fields: shape.fields.len(),
        }
    }
}

///
/// CatalogExport
/// the JSON document `soapstone catalog` emits
///

#[derive(Serialize)]
pub struct CatalogExport {
    pub version: &'static str,
    pub modules: Vec<ModuleExport>,
}

///
/// ModuleExport
///

#[derive(Serialize)]
pub struct ModuleExport {
    pub module: &'static str,
    pub shapes: &'static [&'static MessageShape],
}

///
/// TESTS
///
