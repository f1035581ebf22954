//! Admin wait set messages.
//!
//! Wait sets watch mailboxes for activity. The membership lists ride
//! inside wrapper elements and their order is significant, so the
//! mappings here preserve wire order exactly.

use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    AdminCreateWaitSetRequest::SHAPE,
    AdminCreateWaitSetResponse::SHAPE,
    AdminWaitSetRequest::SHAPE,
    AdminWaitSetResponse::SHAPE,
    AdminDestroyWaitSetRequest::SHAPE,
    AdminDestroyWaitSetResponse::SHAPE,
];

///
/// WaitSetAddSpec
///
/// One mailbox to watch. Everything is optional on the wire; which
/// attributes matter depends on the list the entry rides in.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WaitSetAddSpec {
    pub name: Option<String>,
    pub id: Option<String>,
    pub token: Option<String>,
    pub types: Option<String>,
}

impl WaitSetAddSpec {
    const NAME: FieldDescriptor = FieldDescriptor::optional("name", Binding::Attr, FieldKind::Text);
    const ID: FieldDescriptor = FieldDescriptor::optional("id", Binding::Attr, FieldKind::Text);
    const TOKEN: FieldDescriptor = FieldDescriptor::optional("token", Binding::Attr, FieldKind::Text);
    const TYPES: FieldDescriptor = FieldDescriptor::optional("types", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl MessageKind for WaitSetAddSpec {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "a",
        role: MessageRole::Child,
        fields: &[Self::NAME, Self::ID, Self::TOKEN, Self::TYPES],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, self.name.as_deref())?;
        w.str_field(Self::ID, self.id.as_deref())?;
        w.str_field(Self::TOKEN, self.token.as_deref())?;
        w.str_field(Self::TYPES, self.types.as_deref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.opt_str(Self::NAME),
            id: r.opt_str(Self::ID),
            token: r.opt_str(Self::TOKEN),
            types: r.opt_str(Self::TYPES),
        })
    }
}

impl DebugFields for WaitSetAddSpec {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_str("name", self.name.as_deref());
        f.opt_str("id", self.id.as_deref());
        f.opt_str("token", self.token.as_deref());
        f.opt_str("types", self.types.as_deref());
    }
}

///
/// IdAndType
///
/// One signalled mailbox in a wait set response.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdAndType {
    pub id: String,
    pub t: String,
}

impl IdAndType {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const T: FieldDescriptor = FieldDescriptor::required("t", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>, t: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            t: t.into(),
        }
    }
}

impl MessageKind for IdAndType {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "a",
        role: MessageRole::Child,
        fields: &[Self::ID, Self::T],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.str_field(Self::T, Some(&self.t))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            t: r.req_str(Self::T)?,
        })
    }
}

impl DebugFields for IdAndType {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.str_field("t", &self.t);
    }
}

///
/// WaitSetError
///
/// One mailbox the server could not add, echoed back at creation.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WaitSetError {
    pub id: String,
    pub t: String,
}

impl WaitSetError {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const T: FieldDescriptor = FieldDescriptor::required("t", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>, t: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            t: t.into(),
        }
    }
}

impl MessageKind for WaitSetError {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "error",
        role: MessageRole::Child,
        fields: &[Self::ID, Self::T],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.str_field(Self::T, Some(&self.t))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            t: r.req_str(Self::T)?,
        })
    }
}

impl DebugFields for WaitSetError {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.str_field("t", &self.t);
    }
}

///
/// AdminCreateWaitSetRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminCreateWaitSetRequest {
    pub def_types: String,
    pub all_accounts: TriBool,
    pub add: Vec<WaitSetAddSpec>,
}

impl AdminCreateWaitSetRequest {
    const DEF_TYPES: FieldDescriptor =
        FieldDescriptor::required("defTypes", Binding::Attr, FieldKind::Text);
    const ALL_ACCOUNTS: FieldDescriptor =
        FieldDescriptor::optional("allAccounts", Binding::Attr, FieldKind::TriBool);
    const ADD: FieldDescriptor = FieldDescriptor::optional(
        "waitSetAdd",
        Binding::Child,
        FieldKind::List(ListKind {
            item: WaitSetAddSpec::SHAPE,
            wrapper: Some("waitSetAdd"),
            order: ListOrder::Significant,
        }),
    );

    #[must_use]
    pub fn builder(def_types: impl Into<String>) -> AdminCreateWaitSetRequestBuilder {
        AdminCreateWaitSetRequestBuilder {
            def_types: def_types.into(),
            all_accounts: TriBool::Unset,
            add: Vec::new(),
        }
    }
}

impl MessageKind for AdminCreateWaitSetRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminCreateWaitSetRequest",
        role: MessageRole::Request,
        fields: &[Self::DEF_TYPES, Self::ALL_ACCOUNTS, Self::ADD],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::DEF_TYPES, Some(&self.def_types))?;
        w.tribool(Self::ALL_ACCOUNTS, self.all_accounts)?;
        w.list(Self::ADD, &self.add)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            def_types: r.req_str(Self::DEF_TYPES)?,
            all_accounts: r.tribool(Self::ALL_ACCOUNTS)?,
            add: r.list(Self::ADD)?,
        })
    }
}

impl DebugFields for AdminCreateWaitSetRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("defTypes", &self.def_types);
        f.tribool("allAccounts", self.all_accounts);
        f.list("waitSetAdd", &self.add);
    }
}

///
/// AdminCreateWaitSetRequestBuilder
///

#[derive(Debug)]
pub struct AdminCreateWaitSetRequestBuilder {
    def_types: String,
    all_accounts: TriBool,
    add: Vec<WaitSetAddSpec>,
}

impl AdminCreateWaitSetRequestBuilder {
    /// Watch every account instead of an explicit list.
    #[must_use]
    pub fn all_accounts(mut self, all: bool) -> Self {
        self.all_accounts = TriBool::from(all);
        self
    }

    /// Append one mailbox to watch; append order is wire order.
    #[must_use]
    pub fn add(mut self, spec: WaitSetAddSpec) -> Self {
        self.add.push(spec);
        self
    }

    #[must_use]
    pub fn build(self) -> AdminCreateWaitSetRequest {
        AdminCreateWaitSetRequest {
            def_types: self.def_types,
            all_accounts: self.all_accounts,
            add: self.add,
        }
    }
}

///
/// AdminCreateWaitSetResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminCreateWaitSetResponse {
    pub wait_set: String,
    pub def_types: String,
    pub errors: Vec<WaitSetError>,
}

impl AdminCreateWaitSetResponse {
    const WAIT_SET: FieldDescriptor =
        FieldDescriptor::required("waitSet", Binding::Attr, FieldKind::Text);
    const DEF_TYPES: FieldDescriptor =
        FieldDescriptor::required("defTypes", Binding::Attr, FieldKind::Text);
    const ERRORS: FieldDescriptor = FieldDescriptor::optional(
        "error",
        Binding::Child,
        FieldKind::List(ListKind {
            item: WaitSetError::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(wait_set: impl Into<String>, def_types: impl Into<String>) -> Self {
        Self {
            wait_set: wait_set.into(),
            def_types: def_types.into(),
            errors: Vec::new(),
        }
    }
}

impl MessageKind for AdminCreateWaitSetResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminCreateWaitSetResponse",
        role: MessageRole::Response,
        fields: &[Self::WAIT_SET, Self::DEF_TYPES, Self::ERRORS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::WAIT_SET, Some(&self.wait_set))?;
        w.str_field(Self::DEF_TYPES, Some(&self.def_types))?;
        w.list(Self::ERRORS, &self.errors)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            wait_set: r.req_str(Self::WAIT_SET)?,
            def_types: r.req_str(Self::DEF_TYPES)?,
            errors: r.list(Self::ERRORS)?,
        })
    }
}

impl DebugFields for AdminCreateWaitSetResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("waitSet", &self.wait_set);
        f.str_field("defTypes", &self.def_types);
        f.list("error", &self.errors);
    }
}

impl AdminRequest for AdminCreateWaitSetRequest {
    type Response = AdminCreateWaitSetResponse;
}

///
/// AdminWaitSetRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminWaitSetRequest {
    pub wait_set: String,
    pub seq: String,
    pub block: TriBool,
    pub expand: TriBool,
    pub timeout: Option<i64>,
    pub add: Vec<WaitSetAddSpec>,
    pub update: Vec<WaitSetAddSpec>,
    pub remove: Vec<WaitSetAddSpec>,
}

impl AdminWaitSetRequest {
    const WAIT_SET: FieldDescriptor =
        FieldDescriptor::required("waitSet", Binding::Attr, FieldKind::Text);
    const SEQ: FieldDescriptor = FieldDescriptor::required("seq", Binding::Attr, FieldKind::Text);
    const BLOCK: FieldDescriptor =
        FieldDescriptor::optional("block", Binding::Attr, FieldKind::TriBool);
    const EXPAND: FieldDescriptor =
        FieldDescriptor::optional("expand", Binding::Attr, FieldKind::TriBool);
    const TIMEOUT: FieldDescriptor =
        FieldDescriptor::optional("timeout", Binding::Attr, FieldKind::Long);
    const ADD: FieldDescriptor = FieldDescriptor::optional(
        "add",
        Binding::Child,
        FieldKind::List(ListKind {
            item: WaitSetAddSpec::SHAPE,
            wrapper: Some("add"),
            order: ListOrder::Significant,
        }),
    );
    const UPDATE: FieldDescriptor = FieldDescriptor::optional(
        "update",
        Binding::Child,
        FieldKind::List(ListKind {
            item: WaitSetAddSpec::SHAPE,
            wrapper: Some("update"),
            order: ListOrder::Significant,
        }),
    );
    const REMOVE: FieldDescriptor = FieldDescriptor::optional(
        "remove",
        Binding::Child,
        FieldKind::List(ListKind {
            item: WaitSetAddSpec::SHAPE,
            wrapper: Some("remove"),
            order: ListOrder::Significant,
        }),
    );

    #[must_use]
    pub fn new(wait_set: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            wait_set: wait_set.into(),
            seq: seq.into(),
            ..Self::default()
        }
    }
}

impl MessageKind for AdminWaitSetRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminWaitSetRequest",
        role: MessageRole::Request,
        fields: &[
            Self::WAIT_SET,
            Self::SEQ,
            Self::BLOCK,
            Self::EXPAND,
            Self::TIMEOUT,
            Self::ADD,
            Self::UPDATE,
            Self::REMOVE,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::WAIT_SET, Some(&self.wait_set))?;
        w.str_field(Self::SEQ, Some(&self.seq))?;
        w.tribool(Self::BLOCK, self.block)?;
        w.tribool(Self::EXPAND, self.expand)?;
        w.i64_field(Self::TIMEOUT, self.timeout)?;
        w.list(Self::ADD, &self.add)?;
        w.list(Self::UPDATE, &self.update)?;
        w.list(Self::REMOVE, &self.remove)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            wait_set: r.req_str(Self::WAIT_SET)?,
            seq: r.req_str(Self::SEQ)?,
            block: r.tribool(Self::BLOCK)?,
            expand: r.tribool(Self::EXPAND)?,
            timeout: r.opt_i64(Self::TIMEOUT)?,
            add: r.list(Self::ADD)?,
            update: r.list(Self::UPDATE)?,
            remove: r.list(Self::REMOVE)?,
        })
    }
}

impl DebugFields for AdminWaitSetRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("waitSet", &self.wait_set);
        f.str_field("seq", &self.seq);
        f.tribool("block", self.block);
        f.tribool("expand", self.expand);
        f.opt_i64("timeout", self.timeout);
        f.list("add", &self.add);
        f.list("update", &self.update);
        f.list("remove", &self.remove);
    }
}

///
/// AdminWaitSetResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminWaitSetResponse {
    pub wait_set: String,
    pub canceled: TriBool,
    pub seq: String,
    pub signalled: Vec<IdAndType>,
}

impl AdminWaitSetResponse {
    const WAIT_SET: FieldDescriptor =
        FieldDescriptor::required("waitSet", Binding::Attr, FieldKind::Text);
    const CANCELED: FieldDescriptor =
        FieldDescriptor::optional("canceled", Binding::Attr, FieldKind::TriBool);
    const SEQ: FieldDescriptor = FieldDescriptor::required("seq", Binding::Attr, FieldKind::Text);
    const SIGNALLED: FieldDescriptor = FieldDescriptor::optional(
        "a",
        Binding::Child,
        FieldKind::List(ListKind {
            item: IdAndType::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(wait_set: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            wait_set: wait_set.into(),
            canceled: TriBool::Unset,
            seq: seq.into(),
            signalled: Vec::new(),
        }
    }
}

impl MessageKind for AdminWaitSetResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminWaitSetResponse",
        role: MessageRole::Response,
        fields: &[Self::WAIT_SET, Self::CANCELED, Self::SEQ, Self::SIGNALLED],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::WAIT_SET, Some(&self.wait_set))?;
        w.tribool(Self::CANCELED, self.canceled)?;
        w.str_field(Self::SEQ, Some(&self.seq))?;
        w.list(Self::SIGNALLED, &self.signalled)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            wait_set: r.req_str(Self::WAIT_SET)?,
            canceled: r.tribool(Self::CANCELED)?,
            seq: r.req_str(Self::SEQ)?,
            signalled: r.list(Self::SIGNALLED)?,
        })
    }
}

impl DebugFields for AdminWaitSetResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("waitSet", &self.wait_set);
        f.tribool("canceled", self.canceled);
        f.str_field("seq", &self.seq);
        f.list("a", &self.signalled);
    }
}

impl AdminRequest for AdminWaitSetRequest {
    type Response = AdminWaitSetResponse;
}

///
/// AdminDestroyWaitSetRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminDestroyWaitSetRequest {
    pub wait_set: String,
}

impl AdminDestroyWaitSetRequest {
    const WAIT_SET: FieldDescriptor =
        FieldDescriptor::required("waitSet", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(wait_set: impl Into<String>) -> Self {
        Self {
            wait_set: wait_set.into(),
        }
    }
}

impl MessageKind for AdminDestroyWaitSetRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminDestroyWaitSetRequest",
        role: MessageRole::Request,
        fields: &[Self::WAIT_SET],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::WAIT_SET, Some(&self.wait_set))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            wait_set: r.req_str(Self::WAIT_SET)?,
        })
    }
}

impl DebugFields for AdminDestroyWaitSetRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("waitSet", &self.wait_set);
    }
}

///
/// AdminDestroyWaitSetResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminDestroyWaitSetResponse {
    pub wait_set: String,
}

impl AdminDestroyWaitSetResponse {
    const WAIT_SET: FieldDescriptor =
        FieldDescriptor::required("waitSet", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(wait_set: impl Into<String>) -> Self {
        Self {
            wait_set: wait_set.into(),
        }
    }
}

impl MessageKind for AdminDestroyWaitSetResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AdminDestroyWaitSetResponse",
        role: MessageRole::Response,
        fields: &[Self::WAIT_SET],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::WAIT_SET, Some(&self.wait_set))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            wait_set: r.req_str(Self::WAIT_SET)?,
        })
    }
}

impl DebugFields for AdminDestroyWaitSetResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("waitSet", &self.wait_set);
    }
}

impl AdminRequest for AdminDestroyWaitSetRequest {
    type Response = AdminDestroyWaitSetResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_wraps_members_in_append_order() {
        let req = AdminCreateWaitSetRequest::builder("all")
            .add(WaitSetAddSpec::by_id("mbx-2"))
            .add(WaitSetAddSpec::by_id("mbx-1"))
            .build();

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.count_children("waitSetAdd"), 1);

        let wrap = el.first_child("waitSetAdd").expect("wrapper present");
        let ids: Vec<_> = wrap
            .children_named("a")
            .filter_map(|a| a.attr("id"))
            .collect();
        assert_eq!(ids, ["mbx-2", "mbx-1"]);
    }

    #[test]
    fn all_accounts_create_needs_no_member_wrapper() {
        let req = AdminCreateWaitSetRequest::builder("all")
            .all_accounts(true)
            .build();

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("allAccounts"), Some("1"));
        assert!(el.children.is_empty());
    }

    #[test]
    fn duplicate_member_wrapper_is_rejected() {
        let mut el = Element::new("AdminCreateWaitSetRequest");
        el.set_attr("defTypes", "all");
        el.push_child(Element::new("waitSetAdd"));
        el.push_child(Element::new("waitSetAdd"));

        let err =
            AdminCreateWaitSetRequest::from_element(&el).expect_err("two wrappers should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
    }

    #[test]
    fn wait_set_poll_round_trips_all_three_lists() {
        let mut req = AdminWaitSetRequest::new("ws-1", "42");
        req.block = TriBool::True;
        req.timeout = Some(30_000);
        req.add.push(WaitSetAddSpec::by_name("ada@example.test"));
        req.update.push(WaitSetAddSpec::by_id("mbx-7"));
        req.remove.push(WaitSetAddSpec::by_id("mbx-3"));

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("timeout"), Some("30000"));
        for wrapper in ["add", "update", "remove"] {
            assert_eq!(el.count_children(wrapper), 1, "wrapper {wrapper}");
        }

        let back = AdminWaitSetRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn poll_response_reads_signalled_mailboxes_in_order() {
        let resp = AdminWaitSetResponse {
            wait_set: "ws-1".to_string(),
            canceled: TriBool::Unset,
            seq: "43".to_string(),
            signalled: vec![IdAndType::new("mbx-9", "m"), IdAndType::new("mbx-2", "m")],
        };

        let el = resp.to_element().expect("serialize should succeed");
        assert!(!el.has_attr("canceled"));

        let back = AdminWaitSetResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back.signalled, resp.signalled);
    }

    #[test]
    fn create_response_carries_per_mailbox_errors() {
        let mut resp = AdminCreateWaitSetResponse::new("ws-1", "all");
        resp.errors.push(WaitSetError::new("mbx-404", "m"));

        let el = resp.to_element().expect("serialize should succeed");
        let error = el.first_child("error").expect("error entry present");
        assert_eq!(error.attr("id"), Some("mbx-404"));

        let back =
            AdminCreateWaitSetResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }

    #[test]
    fn destroy_echoes_the_wait_set_id() {
        let req = AdminDestroyWaitSetRequest::new("ws-1");
        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.to_xml(), r#"<AdminDestroyWaitSetRequest waitSet="ws-1"/>"#);
    }
}
