//! Account provisioning messages.

use crate::types::{AccountInfo, AccountSelector, Attr, AttrList, CosCountInfo, DomainSelector, ServerSelector};
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    CreateAccountRequest::SHAPE,
    CreateAccountResponse::SHAPE,
    GetAccountRequest::SHAPE,
    GetAccountResponse::SHAPE,
    ModifyAccountRequest::SHAPE,
    ModifyAccountResponse::SHAPE,
    DeleteAccountRequest::SHAPE,
    DeleteAccountResponse::SHAPE,
    SetPasswordRequest::SHAPE,
    SetPasswordResponse::SHAPE,
    GetAllAccountsRequest::SHAPE,
    GetAllAccountsResponse::SHAPE,
    CountAccountRequest::SHAPE,
    CountAccountResponse::SHAPE,
];

///
/// CreateAccountRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CreateAccountRequest {
    pub name: String,
    pub password: Option<String>,
    pub attrs: AttrList,
}

impl CreateAccountRequest {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
    const PASSWORD: FieldDescriptor =
        FieldDescriptor::optional("password", Binding::Attr, FieldKind::Text);
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
            password: None,
            attrs: AttrList::new(),
        }
    }
}

impl MessageKind for CreateAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "CreateAccountRequest",
        role: MessageRole::Request,
        fields: &[Self::NAME, Self::PASSWORD, Self::ATTRS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        w.str_field(Self::PASSWORD, self.password.as_deref())?;
        w.list(Self::ATTRS, &self.attrs)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
            password: r.opt_str(Self::PASSWORD),
            attrs: r.list(Self::ATTRS)?.into(),
        })
    }
}

impl DebugFields for CreateAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.opt_str("password", self.password.as_deref());
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// CreateAccountResponse
    ///
    CreateAccountResponse { account: AccountInfo as "account" }
}

impl AdminRequest for CreateAccountRequest {
    type Response = CreateAccountResponse;
}

///
/// GetAccountRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetAccountRequest {
    pub account: AccountSelector,
    pub apply_cos: TriBool,
    pub attrs: Option<String>,
}

impl GetAccountRequest {
    const APPLY_COS: FieldDescriptor =
        FieldDescriptor::optional("applyCos", Binding::Attr, FieldKind::TriBool);
    const ATTRS: FieldDescriptor = FieldDescriptor::optional("attrs", Binding::Attr, FieldKind::Text);
    const ACCOUNT: FieldDescriptor = FieldDescriptor::required(
        "account",
        Binding::Child,
        FieldKind::Record(AccountSelector::SHAPE),
    );

    #[must_use]
    pub fn new(account: AccountSelector) -> Self {
        Self {
            account,
            apply_cos: TriBool::Unset,
            attrs: None,
        }
    }
}

impl MessageKind for GetAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetAccountRequest",
        role: MessageRole::Request,
        fields: &[Self::APPLY_COS, Self::ATTRS, Self::ACCOUNT],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.tribool(Self::APPLY_COS, self.apply_cos)?;
        w.str_field(Self::ATTRS, self.attrs.as_deref())?;
        w.record(Self::ACCOUNT, Some(&self.account))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            account: r.req_record(Self::ACCOUNT)?,
            apply_cos: r.tribool(Self::APPLY_COS)?,
            attrs: r.opt_str(Self::ATTRS),
        })
    }
}

impl DebugFields for GetAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.tribool("applyCos", self.apply_cos);
        f.opt_str("attrs", self.attrs.as_deref());
        f.record("account", &self.account);
    }
}

record_response! {
    ///
    /// GetAccountResponse
    ///
    GetAccountResponse { account: AccountInfo as "account" }
}

impl AdminRequest for GetAccountRequest {
    type Response = GetAccountResponse;
}

///
/// ModifyAccountRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModifyAccountRequest {
    pub id: String,
    pub attrs: AttrList,
}

impl ModifyAccountRequest {
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

impl MessageKind for ModifyAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "ModifyAccountRequest",
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

impl DebugFields for ModifyAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.list("a", &self.attrs);
    }
}

record_response! {
    ///
    /// ModifyAccountResponse
    ///
    ModifyAccountResponse { account: AccountInfo as "account" }
}

impl AdminRequest for ModifyAccountRequest {
    type Response = ModifyAccountResponse;
}

///
/// DeleteAccountRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteAccountRequest {
    pub id: String,
}

impl DeleteAccountRequest {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl MessageKind for DeleteAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "DeleteAccountRequest",
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

impl DebugFields for DeleteAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
    }
}

empty_shape! {
    ///
    /// DeleteAccountResponse
    ///
    DeleteAccountResponse: Response
}

impl AdminRequest for DeleteAccountRequest {
    type Response = DeleteAccountResponse;
}

///
/// SetPasswordRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SetPasswordRequest {
    pub id: String,
    pub new_password: String,
}

impl SetPasswordRequest {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const NEW_PASSWORD: FieldDescriptor =
        FieldDescriptor::required("newPassword", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            new_password: new_password.into(),
        }
    }
}

impl MessageKind for SetPasswordRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "SetPasswordRequest",
        role: MessageRole::Request,
        fields: &[Self::ID, Self::NEW_PASSWORD],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.str_field(Self::NEW_PASSWORD, Some(&self.new_password))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            new_password: r.req_str(Self::NEW_PASSWORD)?,
        })
    }
}

impl DebugFields for SetPasswordRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        // the password itself never reaches logs
        f.opt_str("newPassword", (!self.new_password.is_empty()).then_some("***"));
    }
}

///
/// SetPasswordResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SetPasswordResponse {
    pub message: Option<String>,
}

impl SetPasswordResponse {
    const MESSAGE: FieldDescriptor =
        FieldDescriptor::optional("message", Binding::Child, FieldKind::Text);
}

impl MessageKind for SetPasswordResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "SetPasswordResponse",
        role: MessageRole::Response,
        fields: &[Self::MESSAGE],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::MESSAGE, self.message.as_deref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            message: r.opt_str(Self::MESSAGE),
        })
    }
}

impl DebugFields for SetPasswordResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_str("message", self.message.as_deref());
    }
}

impl AdminRequest for SetPasswordRequest {
    type Response = SetPasswordResponse;
}

///
/// GetAllAccountsRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GetAllAccountsRequest {
    pub server: Option<ServerSelector>,
    pub domain: Option<DomainSelector>,
}

impl GetAllAccountsRequest {
    const SERVER: FieldDescriptor = FieldDescriptor::optional(
        "server",
        Binding::Child,
        FieldKind::Record(ServerSelector::SHAPE),
    );
    const DOMAIN: FieldDescriptor = FieldDescriptor::optional(
        "domain",
        Binding::Child,
        FieldKind::Record(DomainSelector::SHAPE),
    );
}

impl MessageKind for GetAllAccountsRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "GetAllAccountsRequest",
        role: MessageRole::Request,
        fields: &[Self::SERVER, Self::DOMAIN],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::SERVER, self.server.as_ref())?;
        w.record(Self::DOMAIN, self.domain.as_ref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            server: r.opt_record(Self::SERVER)?,
            domain: r.opt_record(Self::DOMAIN)?,
        })
    }
}

impl DebugFields for GetAllAccountsRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_record("server", self.server.as_ref());
        f.opt_record("domain", self.domain.as_ref());
    }
}

list_response! {
    ///
    /// GetAllAccountsResponse
    ///
    GetAllAccountsResponse { accounts: [AccountInfo] as "account" }
}

impl GetAllAccountsResponse {
    #[must_use]
    pub fn builder() -> GetAllAccountsResponseBuilder {
        GetAllAccountsResponseBuilder::default()
    }
}

impl AdminRequest for GetAllAccountsRequest {
    type Response = GetAllAccountsResponse;
}

///
/// GetAllAccountsResponseBuilder
///
/// Incremental population for result sets assembled entry by entry; the
/// response record itself stays immutable once built.
///

#[derive(Debug, Default)]
pub struct GetAllAccountsResponseBuilder {
    accounts: Vec<AccountInfo>,
}

impl GetAllAccountsResponseBuilder {
    /// Append one account entry.
    #[must_use]
    pub fn account(mut self, account: AccountInfo) -> Self {
        self.accounts.push(account);
        self
    }

    #[must_use]
    pub fn build(self) -> GetAllAccountsResponse {
        GetAllAccountsResponse {
            accounts: self.accounts,
        }
    }
}

///
/// CountAccountRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CountAccountRequest {
    pub domain: DomainSelector,
}

impl CountAccountRequest {
    const DOMAIN: FieldDescriptor = FieldDescriptor::required(
        "domain",
        Binding::Child,
        FieldKind::Record(DomainSelector::SHAPE),
    );

    #[must_use]
    pub fn new(domain: DomainSelector) -> Self {
        Self { domain }
    }
}

impl MessageKind for CountAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "CountAccountRequest",
        role: MessageRole::Request,
        fields: &[Self::DOMAIN],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::DOMAIN, Some(&self.domain))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            domain: r.req_record(Self::DOMAIN)?,
        })
    }
}

impl DebugFields for CountAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.record("domain", &self.domain);
    }
}

list_response! {
    ///
    /// CountAccountResponse
    ///
    CountAccountResponse { cos: [CosCountInfo] as "cos" }
}

impl AdminRequest for CountAccountRequest {
    type Response = CountAccountResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountBy;

    #[test]
    fn get_account_round_trips_selector_and_flags() {
        let req = GetAccountRequest {
            account: AccountSelector::new(AccountBy::Name, "ada@example.test"),
            apply_cos: TriBool::True,
            attrs: Some("displayName,mailQuota".to_string()),
        };

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("applyCos"), Some("1"));
        let sel = el.first_child("account").expect("selector child present");
        assert_eq!(sel.attr("by"), Some("name"));

        let back = GetAccountRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn unset_apply_cos_never_reaches_the_wire() {
        let req = GetAccountRequest::new(AccountSelector::by_id("8aa-11"));
        let el = req.to_element().expect("serialize should succeed");

        assert!(!el.has_attr("applyCos"));
        let back = GetAccountRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back.apply_cos, TriBool::Unset);
    }

    #[test]
    fn create_account_nests_its_attr_list() {
        let mut req = CreateAccountRequest::new("ada@example.test");
        req.password = Some("hunter2".to_string());
        req.attrs.add("displayName", "Ada");
        req.attrs.add("description", "");

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.count_children("a"), 2);

        let back = CreateAccountRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn missing_selector_is_a_missing_required_field() {
        let el = Element::new("GetAccountRequest");
        let err = GetAccountRequest::from_element(&el).expect_err("missing selector should fail");

        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
        assert_eq!(
            err.to_string(),
            "GetAccountRequest: required field 'account' is missing"
        );
    }

    #[test]
    fn set_password_response_message_is_optional() {
        let el = Element::new("SetPasswordResponse");
        let resp = SetPasswordResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(resp.message, None);

        let resp = SetPasswordResponse {
            message: Some("password policy warning".to_string()),
        };
        let el = resp.to_element().expect("serialize should succeed");
        assert_eq!(
            el.first_child("message").map(|m| m.text.as_str()),
            Some("password policy warning")
        );
    }

    #[test]
    fn get_all_accounts_builder_preserves_entry_order() {
        let resp = GetAllAccountsResponse::builder()
            .account(AccountInfo::new("z@example.test", "z1"))
            .account(AccountInfo::new("a@example.test", "a1"))
            .build();

        let el = resp.to_element().expect("serialize should succeed");
        let names: Vec<_> = el
            .children_named("account")
            .filter_map(|c| c.attr("name"))
            .collect();
        assert_eq!(names, ["z@example.test", "a@example.test"]);
    }

    #[test]
    fn count_account_response_parses_cos_tallies() {
        let resp = CountAccountResponse {
            cos: vec![
                CosCountInfo::new("standard", "c01", 42),
                CosCountInfo::new("premium", "c02", 7),
            ],
        };

        let el = resp.to_element().expect("serialize should succeed");
        let back = CountAccountResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }
}
