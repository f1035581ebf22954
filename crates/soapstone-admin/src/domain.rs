//! Domain provisioning messages.

use crate::types::{Attr, AttrList, DomainInfo, DomainSelector};
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    CreateDomainRequest::SHAPE,
    CreateDomainResponse::SHAPE,
    GetDomainRequest::SHAPE,
    GetDomainResponse::SHAPE,
    ModifyDomainRequest::SHAPE,
    ModifyDomainResponse::SHAPE,
    DeleteDomainRequest::SHAPE,
    DeleteDomainResponse::SHAPE,
    GetAllDomainsRequest::SHAPE,
    GetAllDomainsResponse::SHAPE,
];

///
/// CreateDomainRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CreateDomainRequest {
    pub name: String,
    pub attrs: AttrList,
}

impl CreateDomainRequest {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
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
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: AttrList::new(),
        }
    }
}

impl MessageKind for CreateDomainRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "CreateDomainRequest",
        role: MessageRole::Request,
        fields: &[Self::NAME, Self::ATTRS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        w.list(Self::ATTRS, &self.attrs)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
            attrs: r.list(Self::ATTRS)?.into(),
        })
    }
}

impl DebugFields for CreateDomainRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// CreateDomainResponse
    ///
    CreateDomainResponse { domain: DomainInfo as "domain" }
}

impl AdminRequest for CreateDomainRequest {
    type Response = CreateDomainResponse;
}

///
/// GetDomainRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetDomainRequest {
    pub domain: DomainSelector,
    pub apply_config: TriBool,
    pub attrs: Option<String>,
}

impl GetDomainRequest {
    const APPLY_CONFIG: FieldDescriptor =
        FieldDescriptor::optional("applyConfig", Binding::Attr, FieldKind::TriBool);
    const ATTRS: FieldDescriptor = FieldDescriptor::optional("attrs", Binding::Attr, FieldKind::Text);
    const DOMAIN: FieldDescriptor = FieldDescriptor::required(
        "domain",
        Binding::Child,
        FieldKind::Record(DomainSelector::SHAPE),
    );

    #[must_use]
    pub fn new(domain: DomainSelector) -> Self {
        Self {
            domain,
            apply_config: TriBool::Unset,
            attrs: None,
        }
    }
}

impl MessageKind for GetDomainRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetDomainRequest",
        role: MessageRole::Request,
        fields: &[Self::APPLY_CONFIG, Self::ATTRS, Self::DOMAIN],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.tribool(Self::APPLY_CONFIG, self.apply_config)?;
        w.str_field(Self::ATTRS, self.attrs.as_deref())?;
        w.record(Self::DOMAIN, Some(&self.domain))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            domain: r.req_record(Self::DOMAIN)?,
            apply_config: r.tribool(Self::APPLY_CONFIG)?,
            attrs: r.opt_str(Self::ATTRS),
        })
    }
}

impl DebugFields for GetDomainRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.tribool("applyConfig", self.apply_config);
        f.opt_str("attrs", self.attrs.as_deref());
        f.record("domain", &self.domain);
    }
}

record_response! {
    ///
    /// GetDomainResponse
    ///
    GetDomainResponse { domain: DomainInfo as "domain" }
}

impl AdminRequest for GetDomainRequest {
    type Response = GetDomainResponse;
}

///
/// ModifyDomainRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModifyDomainRequest {
    pub id: String,
    pub attrs: AttrList,
}

impl ModifyDomainRequest {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
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
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: AttrList::new(),
        }
    }
}

impl MessageKind for ModifyDomainRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "ModifyDomainRequest",
        role: MessageRole::Request,
        fields: &[Self::ID, Self::ATTRS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.list(Self::ATTRS, &self.attrs)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            attrs: r.list(Self::ATTRS)?.into(),
        })
    }
}

impl DebugFields for ModifyDomainRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// ModifyDomainResponse
    ///
    ModifyDomainResponse { domain: DomainInfo as "domain" }
}

impl AdminRequest for ModifyDomainRequest {
    type Response = ModifyDomainResponse;
}

///
/// DeleteDomainRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteDomainRequest {
    pub id: String,
}

impl DeleteDomainRequest {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl MessageKind for DeleteDomainRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "DeleteDomainRequest",
        role: MessageRole::Request,
        fields: &[Self::ID],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
        })
    }
}

impl DebugFields for DeleteDomainRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
    }
}

empty_shape! {
    ///
    /// DeleteDomainResponse
    ///
    DeleteDomainResponse: Response
}

impl AdminRequest for DeleteDomainRequest {
    type Response = DeleteDomainResponse;
}

///
/// GetAllDomainsRequest
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GetAllDomainsRequest {
    pub apply_config: TriBool,
}

impl GetAllDomainsRequest {
    const APPLY_CONFIG: FieldDescriptor =
        FieldDescriptor::optional("applyConfig", Binding::Attr, FieldKind::TriBool);
}

impl MessageKind for GetAllDomainsRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetAllDomainsRequest",
        role: MessageRole::Request,
        fields: &[Self::APPLY_CONFIG],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.tribool(Self::APPLY_CONFIG, self.apply_config)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            apply_config: r.tribool(Self::APPLY_CONFIG)?,
        })
    }
}

impl DebugFields for GetAllDomainsRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.tribool("applyConfig", self.apply_config);
    }
}

list_response! {
    ///
    /// GetAllDomainsResponse
    ///
    GetAllDomainsResponse { domains: [DomainInfo] as "domain" }
}

impl AdminRequest for GetAllDomainsRequest {
    type Response = GetAllDomainsResponse;
}

///
/// TESTS
///
