use crate::{
    codec,
    error::WireError,
    model::{Binding, FieldDescriptor, MessageShape},
    traits::{MessageKind, WireEnum},
    tribool::TriBool,
    xml::Element,
};

///
/// ElementWriter
///
/// Builder for one shape's wire element. All scalar emission funnels
/// through the shared projector, so the required/optional rules live in
/// exactly one place and an absent optional value never leaves a trace
/// on the wire.
///

pub struct ElementWriter {
    shape: &'static MessageShape,
    el: Element,
}

impl ElementWriter {
    /// Start an element for the shape.
    #[must_use]
    pub fn new(shape: &'static MessageShape) -> Self {
        Self {
            shape,
            el: Element::new(shape.name),
        }
    }

    // place one projected token at the descriptor's binding
    fn emit(&mut self, desc: &FieldDescriptor, token: Option<String>) -> Result<(), WireError> {
        let Some(token) = codec::project(self.shape, desc, token)? else {
            return Ok(());
        };

        match desc.bind {
            Binding::Attr => self.el.set_attr(desc.wire, token),
            Binding::Text => self.el.text = token,
            Binding::Child => {
                let mut child = Element::new(desc.wire);
                child.text = token;
                self.el.push_child(child);
            }
        }

        Ok(())
    }

    /// Emit a string field.
    ///
    /// For text-carrying bindings an empty string is the same as absent;
    /// an empty attribute value stays a present attribute.
    pub fn str_field(&mut self, desc: FieldDescriptor, value: Option<&str>) -> Result<(), WireError> {
        let value = match desc.bind {
            Binding::Attr => value,
            Binding::Child | Binding::Text => value.filter(|v| !v.is_empty()),
        };
        self.emit(&desc, value.map(str::to_string))
    }

    /// Emit an integer-like field.
    pub fn i64_field(&mut self, desc: FieldDescriptor, value: Option<i64>) -> Result<(), WireError> {
        self.emit(&desc, value.map(codec::encode_i64))
    }

    /// Emit a tri-state boolean; `Unset` projects to absent.
    pub fn tribool(&mut self, desc: FieldDescriptor, value: TriBool) -> Result<(), WireError> {
        self.emit(&desc, value.encode().map(str::to_string))
    }

    /// Emit a strict two-state boolean as `"1"` / `"0"`.
    pub fn bool_field(&mut self, desc: FieldDescriptor, value: Option<bool>) -> Result<(), WireError> {
        self.emit(&desc, value.map(|v| TriBool::from(v).to_string()))
    }

    /// Emit an enum token field.
    pub fn enum_field<E: WireEnum>(
        &mut self,
        desc: FieldDescriptor,
        value: Option<E>,
    ) -> Result<(), WireError> {
        self.emit(&desc, value.map(|v| v.as_token().to_string()))
    }

    /// Emit a nested record field.
    pub fn record<T: MessageKind>(
        &mut self,
        desc: FieldDescriptor,
        value: Option<&T>,
    ) -> Result<(), WireError> {
        match value {
            Some(record) => {
                self.el.push_child(record.to_element()?);
                Ok(())
            }
            None if desc.is_required() => Err(WireError::missing(self.shape.name, desc.wire)),
            None => Ok(()),
        }
    }

    /// Emit a collection field; wrapper handling follows the descriptor.
    pub fn list<T: MessageKind>(
        &mut self,
        desc: FieldDescriptor,
        items: &[T],
    ) -> Result<(), WireError> {
        codec::write_list(&mut self.el, self.shape, &desc, items)
    }

    /// Finish and take the element.
    #[must_use]
    pub fn finish(self) -> Element {
        self.el
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WireErrorKind,
        model::{FieldKind, MessageRole},
    };

    const SHAPE: MessageShape = MessageShape {
        name: "Probe",
        role: MessageRole::Request,
        fields: &[],
    };

    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
    const LIMIT: FieldDescriptor = FieldDescriptor::optional("limit", Binding::Attr, FieldKind::Int);
    const APPLY: FieldDescriptor =
        FieldDescriptor::optional("apply", Binding::Attr, FieldKind::TriBool);
    const NOTE: FieldDescriptor = FieldDescriptor::optional("note", Binding::Child, FieldKind::Text);

    #[test]
    fn unset_tribool_leaves_no_attribute() {
        let mut w = ElementWriter::new(&SHAPE);
        w.tribool(APPLY, TriBool::Unset).expect("emit should succeed");
        w.tribool(APPLY, TriBool::Unset).expect("emit should succeed");

        let el = w.finish();
        assert!(!el.has_attr("apply"));
    }

    #[test]
    fn set_tribools_emit_wire_tokens() {
        let mut w = ElementWriter::new(&SHAPE);
        w.tribool(APPLY, TriBool::False).expect("emit should succeed");

        assert_eq!(w.finish().attr("apply"), Some("0"));
    }

    #[test]
    fn required_absent_scalar_fails_projection() {
        let mut w = ElementWriter::new(&SHAPE);
        let err = w.str_field(NAME, None).expect_err("absence should fail");

        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
    }

    #[test]
    fn optional_absent_scalars_are_fully_omitted() {
        let mut w = ElementWriter::new(&SHAPE);
        w.i64_field(LIMIT, None).expect("emit should succeed");
        w.str_field(NOTE, None).expect("emit should succeed");

        let el = w.finish();
        assert!(el.attrs.is_empty());
        assert!(el.children.is_empty());
    }

    #[test]
    fn empty_child_text_is_treated_as_absent() {
        let mut w = ElementWriter::new(&SHAPE);
        w.str_field(NOTE, Some("")).expect("emit should succeed");

        assert!(w.finish().children.is_empty());
    }

    #[test]
    fn child_text_scalars_nest_their_content() {
        let mut w = ElementWriter::new(&SHAPE);
        w.str_field(NOTE, Some("weekly")).expect("emit should succeed");

        let el = w.finish();
        let note = el.first_child("note").expect("child present");
        assert_eq!(note.text, "weekly");
    }
}
