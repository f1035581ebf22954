//! GAL sync account messages.

use crate::types::{AccountInfo, AccountSelector, DataSourceBy};
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    CreateGalSyncAccountRequest::SHAPE,
    CreateGalSyncAccountResponse::SHAPE,
    SyncGalAccountRequest::SHAPE,
    SyncGalAccountResponse::SHAPE,
    DeleteGalSyncAccountRequest::SHAPE,
    DeleteGalSyncAccountResponse::SHAPE,
];

wire_enum! {
    ///
    /// GalMode
    ///
    /// Where a GAL sync account draws its entries from.
    ///
    pub enum GalMode as "GAL mode" {
        Both = "both",
        Internal = "internal",
        Ldap = "ldap",
    }
}

///
/// CreateGalSyncAccountRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateGalSyncAccountRequest {
    pub name: String,
    pub domain: String,
    pub mode: GalMode,
    pub server: String,
    pub password: Option<String>,
    pub folder: Option<String>,
    pub account: AccountSelector,
}

impl CreateGalSyncAccountRequest {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
    const DOMAIN: FieldDescriptor =
        FieldDescriptor::required("domain", Binding::Attr, FieldKind::Text);
    const TYPE: FieldDescriptor = FieldDescriptor::required(
        "type",
        Binding::Attr,
        FieldKind::Enum(<GalMode as WireEnum>::TOKENS),
    );
    const SERVER: FieldDescriptor =
        FieldDescriptor::required("server", Binding::Attr, FieldKind::Text);
    const PASSWORD: FieldDescriptor =
        FieldDescriptor::optional("password", Binding::Attr, FieldKind::Text);
    const FOLDER: FieldDescriptor =
        FieldDescriptor::optional("folder", Binding::Attr, FieldKind::Text);
    const ACCOUNT: FieldDescriptor = FieldDescriptor::required(
        "account",
        Binding::Child,
        FieldKind::Record(AccountSelector::SHAPE),
    );
}

impl MessageKind for CreateGalSyncAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "CreateGalSyncAccountRequest",
        role: MessageRole::Request,
        fields: &[
            Self::NAME,
            Self::DOMAIN,
            Self::TYPE,
            Self::SERVER,
            Self::PASSWORD,
            Self::FOLDER,
            Self::ACCOUNT,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        w.str_field(Self::DOMAIN, Some(&self.domain))?;
        w.enum_field(Self::TYPE, Some(self.mode))?;
        w.str_field(Self::SERVER, Some(&self.server))?;
        w.str_field(Self::PASSWORD, self.password.as_deref())?;
        w.str_field(Self::FOLDER, self.folder.as_deref())?;
        w.record(Self::ACCOUNT, Some(&self.account))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
            domain: r.req_str(Self::DOMAIN)?,
            mode: r.req_enum(Self::TYPE)?,
            server: r.req_str(Self::SERVER)?,
            password: r.opt_str(Self::PASSWORD),
            folder: r.opt_str(Self::FOLDER),
            account: r.req_record(Self::ACCOUNT)?,
        })
    }
}

impl DebugFields for CreateGalSyncAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.str_field("domain", &self.domain);
        f.enum_field("type", self.mode);
        f.str_field("server", &self.server);
        f.opt_str("password", self.password.as_deref().map(|_| "***"));
        f.opt_str("folder", self.folder.as_deref());
        f.record("account", &self.account);
    }
}

record_response! {
    ///
    /// CreateGalSyncAccountResponse
    ///
    CreateGalSyncAccountResponse { account: AccountInfo as "account" }
}

impl AdminRequest for CreateGalSyncAccountRequest {
    type Response = CreateGalSyncAccountResponse;
}

///
/// SyncGalAccountDataSourceSpec
///
/// One data source to sync, addressed like a selector: discriminator
/// attribute plus the name as element text.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyncGalAccountDataSourceSpec {
    pub by: DataSourceBy,
    pub full_sync: TriBool,
    pub reset: TriBool,
    pub name: String,
}

impl SyncGalAccountDataSourceSpec {
    const BY: FieldDescriptor = FieldDescriptor::required(
        "by",
        Binding::Attr,
        FieldKind::Enum(<DataSourceBy as WireEnum>::TOKENS),
    );
    const FULL_SYNC: FieldDescriptor =
        FieldDescriptor::optional("fullSync", Binding::Attr, FieldKind::TriBool);
    const RESET: FieldDescriptor =
        FieldDescriptor::optional("reset", Binding::Attr, FieldKind::TriBool);
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Text, FieldKind::Text);

    #[must_use]
    pub fn new(by: DataSourceBy, name: impl Into<String>) -> Self {
        Self {
            by,
            full_sync: TriBool::Unset,
            reset: TriBool::Unset,
            name: name.into(),
        }
    }
}

impl MessageKind for SyncGalAccountDataSourceSpec {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "datasource",
        role: MessageRole::Child,
        fields: &[Self::BY, Self::FULL_SYNC, Self::RESET, Self::NAME],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.enum_field(Self::BY, Some(self.by))?;
        w.tribool(Self::FULL_SYNC, self.full_sync)?;
        w.tribool(Self::RESET, self.reset)?;
        w.str_field(Self::NAME, Some(&self.name))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            by: r.selector_by(Self::BY)?,
            full_sync: r.tribool(Self::FULL_SYNC)?,
            reset: r.tribool(Self::RESET)?,
            name: r.req_str(Self::NAME)?,
        })
    }
}

impl DebugFields for SyncGalAccountDataSourceSpec {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.enum_field("by", self.by);
        f.tribool("fullSync", self.full_sync);
        f.tribool("reset", self.reset);
        f.str_field("name", &self.name);
    }
}

///
/// SyncGalAccountSpec
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncGalAccountSpec {
    pub id: String,
    pub datasources: Vec<SyncGalAccountDataSourceSpec>,
}

impl SyncGalAccountSpec {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const DATASOURCES: FieldDescriptor = FieldDescriptor::optional(
        "datasource",
        Binding::Child,
        FieldKind::List(ListKind {
            item: SyncGalAccountDataSourceSpec::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            datasources: Vec::new(),
        }
    }
}

impl MessageKind for SyncGalAccountSpec {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "account",
        role: MessageRole::Child,
        fields: &[Self::ID, Self::DATASOURCES],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.list(Self::DATASOURCES, &self.datasources)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            datasources: r.list(Self::DATASOURCES)?,
        })
    }
}

impl DebugFields for SyncGalAccountSpec {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.list("datasource", &self.datasources);
    }
}

///
/// SyncGalAccountRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncGalAccountRequest {
    pub accounts: Vec<SyncGalAccountSpec>,
}

impl SyncGalAccountRequest {
    const ACCOUNTS: FieldDescriptor = FieldDescriptor::optional(
        "account",
        Binding::Child,
        FieldKind::List(ListKind {
            item: SyncGalAccountSpec::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );
}

impl MessageKind for SyncGalAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "SyncGalAccountRequest",
        role: MessageRole::Request,
        fields: &[Self::ACCOUNTS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.list(Self::ACCOUNTS, &self.accounts)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            accounts: r.list(Self::ACCOUNTS)?,
        })
    }
}

impl DebugFields for SyncGalAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.list("account", &self.accounts);
    }
}

empty_shape! {
    ///
    /// SyncGalAccountResponse
    ///
    SyncGalAccountResponse: Response
}

impl AdminRequest for SyncGalAccountRequest {
    type Response = SyncGalAccountResponse;
}

///
/// DeleteGalSyncAccountRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteGalSyncAccountRequest {
    pub account: AccountSelector,
}

impl DeleteGalSyncAccountRequest {
    const ACCOUNT: FieldDescriptor = FieldDescriptor::required(
        "account",
        Binding::Child,
        FieldKind::Record(AccountSelector::SHAPE),
    );

    #[must_use]
    pub fn new(account: AccountSelector) -> Self {
        Self { account }
    }
}

impl MessageKind for DeleteGalSyncAccountRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "DeleteGalSyncAccountRequest",
        role: MessageRole::Request,
        fields: &[Self::ACCOUNT],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::ACCOUNT, Some(&self.account))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            account: r.req_record(Self::ACCOUNT)?,
        })
    }
}

impl DebugFields for DeleteGalSyncAccountRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.record("account", &self.account);
    }
}

empty_shape! {
    ///
    /// DeleteGalSyncAccountResponse
    ///
    DeleteGalSyncAccountResponse: Response
}

impl AdminRequest for DeleteGalSyncAccountRequest {
    type Response = DeleteGalSyncAccountResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_gal_sync_account_round_trips_every_field() {
        let req = CreateGalSyncAccountRequest {
            name: "galsync".to_string(),
            domain: "example.test".to_string(),
            mode: GalMode::Ldap,
            server: "mbx1.example.test".to_string(),
            password: None,
            folder: Some("_gal".to_string()),
            account: AccountSelector::by_name("galsync@example.test"),
        };

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("type"), Some("ldap"));
        assert!(!el.has_attr("password"));

        let back =
            CreateGalSyncAccountRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn unknown_gal_mode_token_is_invalid_format() {
        let mut el = Element::new("CreateGalSyncAccountRequest");
        el.set_attr("name", "galsync");
        el.set_attr("domain", "example.test");
        el.set_attr("type", "external");
        el.set_attr("server", "mbx1.example.test");

        let err =
            CreateGalSyncAccountRequest::from_element(&el).expect_err("bad token should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "CreateGalSyncAccountRequest: field 'type' holds invalid GAL mode token 'external'"
        );
    }

    #[test]
    fn sync_request_nests_datasources_under_each_account() {
        let mut spec = SyncGalAccountSpec::new("8aa-11");
        let mut ds = SyncGalAccountDataSourceSpec::new(DataSourceBy::Name, "corporate");
        ds.full_sync = TriBool::True;
        spec.datasources.push(ds);

        let req = SyncGalAccountRequest {
            accounts: vec![spec],
        };

        let el = req.to_element().expect("serialize should succeed");
        let account = el.first_child("account").expect("account child present");
        let ds = account.first_child("datasource").expect("datasource present");
        assert_eq!(ds.attr("by"), Some("name"));
        assert_eq!(ds.attr("fullSync"), Some("1"));
        assert_eq!(ds.text, "corporate");

        let back = SyncGalAccountRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn unknown_datasource_discriminator_is_a_selector_error() {
        let mut ds = Element::new("datasource");
        ds.set_attr("by", "uuid");
        ds.text = "corporate".to_string();

        let err = SyncGalAccountDataSourceSpec::from_element(&ds).expect_err("should fail");
        assert_eq!(err.kind(), WireErrorKind::UnknownSelectorVariant);
        assert_eq!(
            err.to_string(),
            "datasource: unknown selector variant 'uuid'"
        );
    }

    #[test]
    fn delete_gal_sync_account_requires_the_selector() {
        let el = Element::new("DeleteGalSyncAccountRequest");
        let err =
            DeleteGalSyncAccountRequest::from_element(&el).expect_err("missing selector fails");

        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
    }
}
