//! Backup and restore messages.

use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    BackupRequest::SHAPE,
    BackupResponse::SHAPE,
    BackupQueryRequest::SHAPE,
    BackupQueryResponse::SHAPE,
];

wire_enum! {
    ///
    /// BackupMethod
    ///
    pub enum BackupMethod as "backup method" {
        Full = "full",
        Incremental = "incremental",
    }
}

///
/// BackupAccountName
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackupAccountName {
    pub name: String,
}

impl BackupAccountName {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MessageKind for BackupAccountName {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "account",
        role: MessageRole::Child,
        fields: &[Self::NAME],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
        })
    }
}

impl DebugFields for BackupAccountName {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
    }
}

///
/// BackupSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackupSpec {
    pub method: BackupMethod,
    pub target: Option<String>,
    pub label: Option<String>,
    pub sync: TriBool,
    pub accounts: Vec<BackupAccountName>,
}

impl BackupSpec {
    const METHOD: FieldDescriptor = FieldDescriptor::required(
        "method",
        Binding::Attr,
        FieldKind::Enum(<BackupMethod as WireEnum>::TOKENS),
    );
    const TARGET: FieldDescriptor =
        FieldDescriptor::optional("target", Binding::Attr, FieldKind::Text);
    const LABEL: FieldDescriptor = FieldDescriptor::optional("label", Binding::Attr, FieldKind::Text);
    const SYNC: FieldDescriptor = FieldDescriptor::optional("sync", Binding::Attr, FieldKind::TriBool);
    const ACCOUNTS: FieldDescriptor = FieldDescriptor::optional(
        "account",
        Binding::Child,
        FieldKind::List(ListKind {
            item: BackupAccountName::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(method: BackupMethod) -> Self {
        Self {
            method,
            target: None,
            label: None,
            sync: TriBool::Unset,
            accounts: Vec::new(),
        }
    }

    /// Add one account to back up.
    #[must_use]
    pub fn account(mut self, name: impl Into<String>) -> Self {
        self.accounts.push(BackupAccountName::new(name));
        self
    }
}

impl MessageKind for BackupSpec {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "backup",
        role: MessageRole::Child,
        fields: &[
            Self::METHOD,
            Self::TARGET,
            Self::LABEL,
            Self::SYNC,
            Self::ACCOUNTS,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.enum_field(Self::METHOD, Some(self.method))?;
        w.str_field(Self::TARGET, self.target.as_deref())?;
        w.str_field(Self::LABEL, self.label.as_deref())?;
        w.tribool(Self::SYNC, self.sync)?;
        w.list(Self::ACCOUNTS, &self.accounts)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            method: r.req_enum(Self::METHOD)?,
            target: r.opt_str(Self::TARGET),
            label: r.opt_str(Self::LABEL),
            sync: r.tribool(Self::SYNC)?,
            accounts: r.list(Self::ACCOUNTS)?,
        })
    }
}

impl DebugFields for BackupSpec {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.enum_field("method", self.method);
        f.opt_str("target", self.target.as_deref());
        f.opt_str("label", self.label.as_deref());
        f.tribool("sync", self.sync);
        f.list("account", &self.accounts);
    }
}

///
/// BackupRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackupRequest {
    pub backup: BackupSpec,
}

impl BackupRequest {
    const BACKUP: FieldDescriptor = FieldDescriptor::required(
        "backup",
        Binding::Child,
        FieldKind::Record(BackupSpec::SHAPE),
    );

    #[must_use]
    pub fn new(backup: BackupSpec) -> Self {
        Self { backup }
    }
}

impl MessageKind for BackupRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "BackupRequest",
        role: MessageRole::Request,
        fields: &[Self::BACKUP],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::BACKUP, Some(&self.backup))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            backup: r.req_record(Self::BACKUP)?,
        })
    }
}

impl DebugFields for BackupRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.record("backup", &self.backup);
    }
}

///
/// BackupLabel
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackupLabel {
    pub label: String,
}

impl BackupLabel {
    const LABEL: FieldDescriptor = FieldDescriptor::required("label", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl MessageKind for BackupLabel {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "backup",
        role: MessageRole::Child,
        fields: &[Self::LABEL],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::LABEL, Some(&self.label))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            label: r.req_str(Self::LABEL)?,
        })
    }
}

impl DebugFields for BackupLabel {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("label", &self.label);
    }
}

record_response! {
    ///
    /// BackupResponse
    ///
    BackupResponse { backup: BackupLabel as "backup" }
}

impl AdminRequest for BackupRequest {
    type Response = BackupResponse;
}

///
/// BackupQuerySpec
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackupQuerySpec {
    pub target: Option<String>,
    pub label: Option<String>,
    pub backup_type: Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl BackupQuerySpec {
    const TARGET: FieldDescriptor =
        FieldDescriptor::optional("target", Binding::Attr, FieldKind::Text);
    const LABEL: FieldDescriptor = FieldDescriptor::optional("label", Binding::Attr, FieldKind::Text);
    const TYPE: FieldDescriptor = FieldDescriptor::optional("type", Binding::Attr, FieldKind::Text);
    const FROM: FieldDescriptor = FieldDescriptor::optional("from", Binding::Attr, FieldKind::Long);
    const TO: FieldDescriptor = FieldDescriptor::optional("to", Binding::Attr, FieldKind::Long);
}

impl MessageKind for BackupQuerySpec {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "query",
        role: MessageRole::Child,
        fields: &[Self::TARGET, Self::LABEL, Self::TYPE, Self::FROM, Self::TO],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::TARGET, self.target.as_deref())?;
        w.str_field(Self::LABEL, self.label.as_deref())?;
        w.str_field(Self::TYPE, self.backup_type.as_deref())?;
        w.i64_field(Self::FROM, self.from)?;
        w.i64_field(Self::TO, self.to)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            target: r.opt_str(Self::TARGET),
            label: r.opt_str(Self::LABEL),
            backup_type: r.opt_str(Self::TYPE),
            from: r.opt_i64(Self::FROM)?,
            to: r.opt_i64(Self::TO)?,
        })
    }
}

impl DebugFields for BackupQuerySpec {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_str("target", self.target.as_deref());
        f.opt_str("label", self.label.as_deref());
        f.opt_str("type", self.backup_type.as_deref());
        f.opt_i64("from", self.from);
        f.opt_i64("to", self.to);
    }
}

///
/// BackupQueryRequest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackupQueryRequest {
    pub query: BackupQuerySpec,
}

impl BackupQueryRequest {
    const QUERY: FieldDescriptor = FieldDescriptor::required(
        "query",
        Binding::Child,
        FieldKind::Record(BackupQuerySpec::SHAPE),
    );

    #[must_use]
    pub fn new(query: BackupQuerySpec) -> Self {
        Self { query }
    }
}

impl MessageKind for BackupQueryRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "BackupQueryRequest",
        role: MessageRole::Request,
        fields: &[Self::QUERY],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::QUERY, Some(&self.query))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            query: r.req_record(Self::QUERY)?,
        })
    }
}

impl DebugFields for BackupQueryRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.record("query", &self.query);
    }
}

///
/// BackupInfo
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BackupInfo {
    pub label: String,
    pub backup_type: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub account_count: Option<i64>,
}

impl BackupInfo {
    const LABEL: FieldDescriptor = FieldDescriptor::required("label", Binding::Attr, FieldKind::Text);
    const TYPE: FieldDescriptor = FieldDescriptor::required("type", Binding::Attr, FieldKind::Text);
    const START: FieldDescriptor = FieldDescriptor::optional("start", Binding::Attr, FieldKind::Long);
    const END: FieldDescriptor = FieldDescriptor::optional("end", Binding::Attr, FieldKind::Long);
    const ACCOUNT_COUNT: FieldDescriptor =
        FieldDescriptor::optional("accountCount", Binding::Attr, FieldKind::Int);

    #[must_use]
    pub fn new(label: impl Into<String>, backup_type: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            backup_type: backup_type.into(),
            ..Self::default()
        }
    }
}

impl MessageKind for BackupInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "backup",
        role: MessageRole::Child,
        fields: &[
            Self::LABEL,
            Self::TYPE,
            Self::START,
            Self::END,
            Self::ACCOUNT_COUNT,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::LABEL, Some(&self.label))?;
        w.str_field(Self::TYPE, Some(&self.backup_type))?;
        w.i64_field(Self::START, self.start)?;
        w.i64_field(Self::END, self.end)?;
        w.i64_field(Self::ACCOUNT_COUNT, self.account_count)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            label: r.req_str(Self::LABEL)?,
            backup_type: r.req_str(Self::TYPE)?,
            start: r.opt_i64(Self::START)?,
            end: r.opt_i64(Self::END)?,
            account_count: r.opt_i64(Self::ACCOUNT_COUNT)?,
        })
    }
}

impl DebugFields for BackupInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("label", &self.label);
        f.str_field("type", &self.backup_type);
        f.opt_i64("start", self.start);
        f.opt_i64("end", self.end);
        f.opt_i64("accountCount", self.account_count);
    }
}

list_response! {
    ///
    /// BackupQueryResponse
    ///
    BackupQueryResponse { backups: [BackupInfo] as "backup" }
}

impl AdminRequest for BackupQueryRequest {
    type Response = BackupQueryResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_spec_round_trips_method_and_accounts() {
        let spec = BackupSpec::new(BackupMethod::Incremental)
            .account("ada@example.test")
            .account("bob@example.test");
        let req = BackupRequest::new(spec);

        let el = req.to_element().expect("serialize should succeed");
        let backup = el.first_child("backup").expect("spec child present");
        assert_eq!(backup.attr("method"), Some("incremental"));
        assert_eq!(backup.count_children("account"), 2);

        let back = BackupRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn sync_flag_stays_off_the_wire_when_unset() {
        let req = BackupRequest::new(BackupSpec::new(BackupMethod::Full));
        let el = req.to_element().expect("serialize should succeed");

        let backup = el.first_child("backup").expect("spec child present");
        assert!(!backup.has_attr("sync"));
        assert!(backup.children.is_empty());
    }

    #[test]
    fn query_window_round_trips_epoch_millis() {
        let req = BackupQueryRequest::new(BackupQuerySpec {
            from: Some(1_697_000_000_000),
            to: Some(1_697_086_400_000),
            ..BackupQuerySpec::default()
        });

        let el = req.to_element().expect("serialize should succeed");
        let query = el.first_child("query").expect("query child present");
        assert_eq!(query.attr("from"), Some("1697000000000"));

        let back = BackupQueryRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn non_numeric_window_bound_is_invalid_format() {
        let mut query = Element::new("query");
        query.set_attr("from", "yesterday");
        let mut el = Element::new("BackupQueryRequest");
        el.push_child(query);

        let err = BackupQueryRequest::from_element(&el).expect_err("bad number should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "query: field 'from' holds invalid integer token 'yesterday'"
        );
    }

    #[test]
    fn backup_listing_round_trips_counts() {
        let mut info = BackupInfo::new("full-20260101.120000.000", "full");
        info.start = Some(1_767_268_800_000);
        info.account_count = Some(250);

        let resp = BackupQueryResponse {
            backups: vec![info],
        };

        let el = resp.to_element().expect("serialize should succeed");
        let back = BackupQueryResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }
}
