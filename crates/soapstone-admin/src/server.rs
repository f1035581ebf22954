//! Server provisioning messages.

use crate::types::{Attr, AttrList, ServerInfo, ServerSelector};
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    CreateServerRequest::SHAPE,
    CreateServerResponse::SHAPE,
    GetServerRequest::SHAPE,
    GetServerResponse::SHAPE,
    ModifyServerRequest::SHAPE,
    ModifyServerResponse::SHAPE,
    DeleteServerRequest::SHAPE,
    DeleteServerResponse::SHAPE,
    GetAllServersRequest::SHAPE,
    GetAllServersResponse::SHAPE,
];

///
/// CreateServerRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CreateServerRequest {
    pub name: String,
    pub attrs: AttrList,
}

impl CreateServerRequest {
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

impl MessageKind for CreateServerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "CreateServerRequest",
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

impl DebugFields for CreateServerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// CreateServerResponse
    ///
    CreateServerResponse { server: ServerInfo as "server" }
}

impl AdminRequest for CreateServerRequest {
    type Response = CreateServerResponse;
}

///
/// GetServerRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetServerRequest {
    pub server: ServerSelector,
    pub apply_config: TriBool,
}

impl GetServerRequest {
    const APPLY_CONFIG: FieldDescriptor =
        FieldDescriptor::optional("applyConfig", Binding::Attr, FieldKind::TriBool);
    const SERVER: FieldDescriptor = FieldDescriptor::required(
        "server",
        Binding::Child,
        FieldKind::Record(ServerSelector::SHAPE),
    );

    #[must_use]
    pub fn new(server: ServerSelector) -> Self {
        Self {
            server,
            apply_config: TriBool::Unset,
        }
    }
}

impl MessageKind for GetServerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetServerRequest",
        role: MessageRole::Request,
        fields: &[Self::APPLY_CONFIG, Self::SERVER],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.tribool(Self::APPLY_CONFIG, self.apply_config)?;
        w.record(Self::SERVER, Some(&self.server))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            server: r.req_record(Self::SERVER)?,
            apply_config: r.tribool(Self::APPLY_CONFIG)?,
        })
    }
}

impl DebugFields for GetServerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.tribool("applyConfig", self.apply_config);
        f.record("server", &self.server);
    }
}

record_response! {
    ///
    /// GetServerResponse
    ///
    GetServerResponse { server: ServerInfo as "server" }
}

impl AdminRequest for GetServerRequest {
    type Response = GetServerResponse;
}

///
/// ModifyServerRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModifyServerRequest {
    pub id: String,
    pub attrs: AttrList,
}

impl ModifyServerRequest {
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

impl MessageKind for ModifyServerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "ModifyServerRequest",
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

impl DebugFields for ModifyServerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// ModifyServerResponse
    ///
    ModifyServerResponse { server: ServerInfo as "server" }
}

impl AdminRequest for ModifyServerRequest {
    type Response = ModifyServerResponse;
}

///
/// DeleteServerRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteServerRequest {
    pub id: String,
}

impl DeleteServerRequest {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl MessageKind for DeleteServerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "DeleteServerRequest",
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

impl DebugFields for DeleteServerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
    }
}

empty_shape! {
    ///
    /// DeleteServerResponse
    ///
    DeleteServerResponse: Response
}

impl AdminRequest for DeleteServerRequest {
    type Response = DeleteServerResponse;
}

///
/// GetAllServersRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GetAllServersRequest {
    pub service: Option<String>,
    pub apply_config: TriBool,
}

impl GetAllServersRequest {
    const SERVICE: FieldDescriptor =
        FieldDescriptor::optional("service", Binding::Attr, FieldKind::Text);
    const APPLY_CONFIG: FieldDescriptor =
        FieldDescriptor::optional("applyConfig", Binding::Attr, FieldKind::TriBool);
}

impl MessageKind for GetAllServersRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetAllServersRequest",
        role: MessageRole::Request,
        fields: &[Self::SERVICE, Self::APPLY_CONFIG],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::SERVICE, self.service.as_deref())?;
        w.tribool(Self::APPLY_CONFIG, self.apply_config)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            service: r.opt_str(Self::SERVICE),
            apply_config: r.tribool(Self::APPLY_CONFIG)?,
        })
    }
}

impl DebugFields for GetAllServersRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_str("service", self.service.as_deref());
        f.tribool("applyConfig", self.apply_config);
    }
}

list_response! {
    ///
    /// GetAllServersResponse
    ///
    GetAllServersResponse { servers: [ServerInfo] as "server" }
}

impl AdminRequest for GetAllServersRequest {
    type Response = GetAllServersResponse;
}

///
/// TESTS
///
