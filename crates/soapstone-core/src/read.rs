use crate::{
    codec,
    error::WireError,
    model::{Binding, FieldDescriptor, MessageShape},
    traits::{MessageKind, WireEnum},
    tribool::TriBool,
    xml::Element,
};

///
/// ElementReader
///
/// Descriptor-driven view over one wire element. Every accessor funnels
/// absence through the same presence gate and token decoding through the
/// scalar codecs, so hand-written `from_element` bodies stay declarative.
///
/// Absence is structural: a missing attribute, an empty text node, or a
/// missing child element. An empty attribute value is still present.
///

pub struct ElementReader<'a> {
    shape: &'static MessageShape,
    el: &'a Element,
}

impl<'a> ElementReader<'a> {
    /// Open a reader over `el`, checking the tag against the shape name.
    pub fn new(shape: &'static MessageShape, el: &'a Element) -> Result<Self, WireError> {
        if el.name == shape.name {
            Ok(Self { shape, el })
        } else {
            Err(WireError::unexpected_element(shape.name, el.name.clone()))
        }
    }

    // raw token for a scalar field, per the binding's absence rules
    fn token(&self, desc: &FieldDescriptor) -> Option<&'a str> {
        let token = match desc.bind {
            Binding::Attr => self.el.attr(desc.wire),
            Binding::Child => self.el.first_child(desc.wire).map(|c| c.text.as_str()),
            Binding::Text => Some(self.el.text.as_str()),
        };

        match desc.bind {
            Binding::Attr => token,
            Binding::Child | Binding::Text => token.filter(|t| !t.is_empty()),
        }
    }

    fn required_token(&self, desc: &FieldDescriptor) -> Result<&'a str, WireError> {
        self.token(desc)
            .ok_or_else(|| WireError::missing(self.shape.name, desc.wire))
    }

    /// Required string field.
    pub fn req_str(&self, desc: FieldDescriptor) -> Result<String, WireError> {
        self.required_token(&desc).map(str::to_string)
    }

    /// Optional string field; absent yields `None`, never `""`.
    #[must_use]
    pub fn opt_str(&self, desc: FieldDescriptor) -> Option<String> {
        self.token(&desc).map(str::to_string)
    }

    /// Required integer-like field.
    pub fn req_i64(&self, desc: FieldDescriptor) -> Result<i64, WireError> {
        let token = self.required_token(&desc)?;
        codec::decode_i64(self.shape.name, desc.wire, token)
    }

    /// Optional integer-like field.
    pub fn opt_i64(&self, desc: FieldDescriptor) -> Result<Option<i64>, WireError> {
        self.token(&desc)
            .map(|t| codec::decode_i64(self.shape.name, desc.wire, t))
            .transpose()
    }

    /// Tri-state boolean field; absent decodes to `Unset`.
    ///
    /// A required tri-state field must be present on the wire; `Unset`
    /// only ever comes back for optional fields.
    pub fn tribool(&self, desc: FieldDescriptor) -> Result<TriBool, WireError> {
        let value = codec::decode_tribool(self.shape.name, desc.wire, self.token(&desc))?;
        if desc.is_required() && value.is_unset() {
            return Err(WireError::missing(self.shape.name, desc.wire));
        }
        Ok(value)
    }

    /// Required strict boolean field, `"1"` or `"0"`.
    pub fn req_bool(&self, desc: FieldDescriptor) -> Result<bool, WireError> {
        let token = self.required_token(&desc)?;
        codec::decode_bool(self.shape.name, desc.wire, token)
    }

    /// Required enum token field.
    pub fn req_enum<E: WireEnum>(&self, desc: FieldDescriptor) -> Result<E, WireError> {
        let token = self.required_token(&desc)?;
        codec::decode_enum(self.shape.name, desc.wire, token)
    }

    /// Optional enum token field.
    pub fn opt_enum<E: WireEnum>(&self, desc: FieldDescriptor) -> Result<Option<E>, WireError> {
        self.token(&desc)
            .map(|t| codec::decode_enum(self.shape.name, desc.wire, t))
            .transpose()
    }

    /// Selector discriminator field.
    ///
    /// Unknown variants report `UnknownSelectorVariant`; an absent
    /// discriminator is a missing required field.
    pub fn selector_by<E: WireEnum>(&self, desc: FieldDescriptor) -> Result<E, WireError> {
        let token = self.required_token(&desc)?;
        codec::decode_selector_token(self.shape.name, token)
    }

    /// Required nested record field.
    pub fn req_record<T: MessageKind>(&self, desc: FieldDescriptor) -> Result<T, WireError> {
        self.opt_record(desc)?
            .ok_or_else(|| WireError::missing(self.shape.name, desc.wire))
    }

    /// Optional nested record field.
    pub fn opt_record<T: MessageKind>(&self, desc: FieldDescriptor) -> Result<Option<T>, WireError> {
        self.el
            .first_child(desc.wire)
            .map(T::from_element)
            .transpose()
    }

    /// Collection field; wrapper handling follows the list descriptor.
    pub fn list<T: MessageKind>(&self, desc: FieldDescriptor) -> Result<Vec<T>, WireError> {
        codec::read_list(self.shape, self.el, &desc)
    }
}

///
/// TESTS
///
