//! Directory search and reindex messages.

use crate::types::{AccountInfo, DomainInfo};
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    SearchDirectoryRequest::SHAPE,
    SearchDirectoryResponse::SHAPE,
    ReIndexRequest::SHAPE,
    ReIndexResponse::SHAPE,
];

wire_enum! {
    ///
    /// ReIndexAction
    ///
    pub enum ReIndexAction as "reindex action" {
        Cancel = "cancel",
        Start = "start",
        Status = "status",
    }
}

wire_enum! {
    ///
    /// ReIndexStatus
    ///
    pub enum ReIndexStatus as "reindex status" {
        Cancelled = "cancelled",
        Idle = "idle",
        Running = "running",
        Started = "started",
    }
}

///
/// SearchDirectoryRequest
///
/// Paged LDAP-backed search across directory entry types. Every knob is
/// optional; the server fills in its own defaults.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchDirectoryRequest {
    pub query: Option<String>,
    pub max_results: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub domain: Option<String>,
    pub apply_cos: TriBool,
    pub apply_config: TriBool,
    pub sort_by: Option<String>,
    pub sort_ascending: TriBool,
    pub types: Option<String>,
    pub attrs: Option<String>,
}

impl SearchDirectoryRequest {
    const QUERY: FieldDescriptor = FieldDescriptor::optional("query", Binding::Attr, FieldKind::Text);
    const MAX_RESULTS: FieldDescriptor =
        FieldDescriptor::optional("maxResults", Binding::Attr, FieldKind::Int);
    const LIMIT: FieldDescriptor = FieldDescriptor::optional("limit", Binding::Attr, FieldKind::Int);
    const OFFSET: FieldDescriptor =
        FieldDescriptor::optional("offset", Binding::Attr, FieldKind::Int);
    const DOMAIN: FieldDescriptor =
        FieldDescriptor::optional("domain", Binding::Attr, FieldKind::Text);
    const APPLY_COS: FieldDescriptor =
        FieldDescriptor::optional("applyCos", Binding::Attr, FieldKind::TriBool);
    const APPLY_CONFIG: FieldDescriptor =
        FieldDescriptor::optional("applyConfig", Binding::Attr, FieldKind::TriBool);
    const SORT_BY: FieldDescriptor =
        FieldDescriptor::optional("sortBy", Binding::Attr, FieldKind::Text);
    const SORT_ASCENDING: FieldDescriptor =
        FieldDescriptor::optional("sortAscending", Binding::Attr, FieldKind::TriBool);
    const TYPES: FieldDescriptor = FieldDescriptor::optional("types", Binding::Attr, FieldKind::Text);
    const ATTRS: FieldDescriptor = FieldDescriptor::optional("attrs", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

impl MessageKind for SearchDirectoryRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "SearchDirectoryRequest",
        role: MessageRole::Request,
        fields: &[
            Self::QUERY,
            Self::MAX_RESULTS,
            Self::LIMIT,
            Self::OFFSET,
            Self::DOMAIN,
            Self::APPLY_COS,
            Self::APPLY_CONFIG,
            Self::SORT_BY,
            Self::SORT_ASCENDING,
            Self::TYPES,
            Self::ATTRS,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::QUERY, self.query.as_deref())?;
        w.i64_field(Self::MAX_RESULTS, self.max_results)?;
        w.i64_field(Self::LIMIT, self.limit)?;
        w.i64_field(Self::OFFSET, self.offset)?;
        w.str_field(Self::DOMAIN, self.domain.as_deref())?;
        w.tribool(Self::APPLY_COS, self.apply_cos)?;
        w.tribool(Self::APPLY_CONFIG, self.apply_config)?;
        w.str_field(Self::SORT_BY, self.sort_by.as_deref())?;
        w.tribool(Self::SORT_ASCENDING, self.sort_ascending)?;
        w.str_field(Self::TYPES, self.types.as_deref())?;
        w.str_field(Self::ATTRS, self.attrs.as_deref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            query: r.opt_str(Self::QUERY),
            max_results: r.opt_i64(Self::MAX_RESULTS)?,
            limit: r.opt_i64(Self::LIMIT)?,
            offset: r.opt_i64(Self::OFFSET)?,
            domain: r.opt_str(Self::DOMAIN),
            apply_cos: r.tribool(Self::APPLY_COS)?,
            apply_config: r.tribool(Self::APPLY_CONFIG)?,
            sort_by: r.opt_str(Self::SORT_BY),
            sort_ascending: r.tribool(Self::SORT_ASCENDING)?,
            types: r.opt_str(Self::TYPES),
            attrs: r.opt_str(Self::ATTRS),
        })
    }
}

impl DebugFields for SearchDirectoryRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_str("query", self.query.as_deref());
        f.opt_i64("maxResults", self.max_results);
        f.opt_i64("limit", self.limit);
        f.opt_i64("offset", self.offset);
        f.opt_str("domain", self.domain.as_deref());
        f.tribool("applyCos", self.apply_cos);
        f.tribool("applyConfig", self.apply_config);
        f.opt_str("sortBy", self.sort_by.as_deref());
        f.tribool("sortAscending", self.sort_ascending);
        f.opt_str("types", self.types.as_deref());
        f.opt_str("attrs", self.attrs.as_deref());
    }
}

///
/// SearchDirectoryResponse
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchDirectoryResponse {
    pub more: bool,
    pub search_total: i64,
    pub accounts: Vec<AccountInfo>,
    pub domains: Vec<DomainInfo>,
}

impl SearchDirectoryResponse {
    const MORE: FieldDescriptor =
        FieldDescriptor::required("more", Binding::Attr, FieldKind::TriBool);
    const SEARCH_TOTAL: FieldDescriptor =
        FieldDescriptor::required("searchTotal", Binding::Attr, FieldKind::Long);
    const ACCOUNTS: FieldDescriptor = FieldDescriptor::optional(
        "account",
        Binding::Child,
        FieldKind::List(ListKind {
            item: AccountInfo::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );
    const DOMAINS: FieldDescriptor = FieldDescriptor::optional(
        "domain",
        Binding::Child,
        FieldKind::List(ListKind {
            item: DomainInfo::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn builder(more: bool, search_total: i64) -> SearchDirectoryResponseBuilder {
        SearchDirectoryResponseBuilder {
            more,
            search_total,
            accounts: Vec::new(),
            domains: Vec::new(),
        }
    }
}

impl MessageKind for SearchDirectoryResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "SearchDirectoryResponse",
        role: MessageRole::Response,
        fields: &[
            Self::MORE,
            Self::SEARCH_TOTAL,
            Self::ACCOUNTS,
            Self::DOMAINS,
        ],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.bool_field(Self::MORE, Some(self.more))?;
        w.i64_field(Self::SEARCH_TOTAL, Some(self.search_total))?;
        w.list(Self::ACCOUNTS, &self.accounts)?;
        w.list(Self::DOMAINS, &self.domains)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            more: r.req_bool(Self::MORE)?,
            search_total: r.req_i64(Self::SEARCH_TOTAL)?,
            accounts: r.list(Self::ACCOUNTS)?,
            domains: r.list(Self::DOMAINS)?,
        })
    }
}

impl DebugFields for SearchDirectoryResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.bool_field("more", self.more);
        f.i64_field("searchTotal", self.search_total);
        f.list("account", &self.accounts);
        f.list("domain", &self.domains);
    }
}

impl AdminRequest for SearchDirectoryRequest {
    type Response = SearchDirectoryResponse;
}

///
/// SearchDirectoryResponseBuilder
///

#[derive(Debug)]
pub struct SearchDirectoryResponseBuilder {
    more: bool,
    search_total: i64,
    accounts: Vec<AccountInfo>,
    domains: Vec<DomainInfo>,
}

impl SearchDirectoryResponseBuilder {
    /// Append one account hit.
    #[must_use]
    pub fn account(mut self, account: AccountInfo) -> Self {
        self.accounts.push(account);
        self
    }

    /// Append one domain hit.
    #[must_use]
    pub fn domain(mut self, domain: DomainInfo) -> Self {
        self.domains.push(domain);
        self
    }

    #[must_use]
    pub fn build(self) -> SearchDirectoryResponse {
        SearchDirectoryResponse {
            more: self.more,
            search_total: self.search_total,
            accounts: self.accounts,
            domains: self.domains,
        }
    }
}

///
/// ReindexMailboxInfo
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReindexMailboxInfo {
    pub id: String,
    pub types: Option<String>,
    pub ids: Option<String>,
}

impl ReindexMailboxInfo {
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const TYPES: FieldDescriptor = FieldDescriptor::optional("types", Binding::Attr, FieldKind::Text);
    const IDS: FieldDescriptor = FieldDescriptor::optional("ids", Binding::Attr, FieldKind::Text);

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            types: None,
            ids: None,
        }
    }
}

impl MessageKind for ReindexMailboxInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "mbox",
        role: MessageRole::Child,
        fields: &[Self::ID, Self::TYPES, Self::IDS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::ID, Some(&self.id))?;
        w.str_field(Self::TYPES, self.types.as_deref())?;
        w.str_field(Self::IDS, self.ids.as_deref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            id: r.req_str(Self::ID)?,
            types: r.opt_str(Self::TYPES),
            ids: r.opt_str(Self::IDS),
        })
    }
}

impl DebugFields for ReindexMailboxInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("id", &self.id);
        f.opt_str("types", self.types.as_deref());
        f.opt_str("ids", self.ids.as_deref());
    }
}

///
/// ReIndexRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReIndexRequest {
    pub action: ReIndexAction,
    pub mbox: ReindexMailboxInfo,
}

impl ReIndexRequest {
    const ACTION: FieldDescriptor = FieldDescriptor::required(
        "action",
        Binding::Attr,
        FieldKind::Enum(<ReIndexAction as WireEnum>::TOKENS),
    );
    const MBOX: FieldDescriptor = FieldDescriptor::required(
        "mbox",
        Binding::Child,
        FieldKind::Record(ReindexMailboxInfo::SHAPE),
    );

    #[must_use]
    pub fn new(action: ReIndexAction, mbox: ReindexMailboxInfo) -> Self {
        Self { action, mbox }
    }
}

impl MessageKind for ReIndexRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "ReIndexRequest",
        role: MessageRole::Request,
        fields: &[Self::ACTION, Self::MBOX],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.enum_field(Self::ACTION, Some(self.action))?;
        w.record(Self::MBOX, Some(&self.mbox))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            action: r.req_enum(Self::ACTION)?,
            mbox: r.req_record(Self::MBOX)?,
        })
    }
}

impl DebugFields for ReIndexRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.enum_field("action", self.action);
        f.record("mbox", &self.mbox);
    }
}

///
/// ReindexProgressInfo
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReindexProgressInfo {
    pub num_succeeded: i64,
    pub num_failed: i64,
    pub num_remaining: i64,
}

impl ReindexProgressInfo {
    const NUM_SUCCEEDED: FieldDescriptor =
        FieldDescriptor::required("numSucceeded", Binding::Attr, FieldKind::Long);
    const NUM_FAILED: FieldDescriptor =
        FieldDescriptor::required("numFailed", Binding::Attr, FieldKind::Long);
    const NUM_REMAINING: FieldDescriptor =
        FieldDescriptor::required("numRemaining", Binding::Attr, FieldKind::Long);

    #[must_use]
    pub const fn new(num_succeeded: i64, num_failed: i64, num_remaining: i64) -> Self {
        Self {
            num_succeeded,
            num_failed,
            num_remaining,
        }
    }
}

impl MessageKind for ReindexProgressInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "progress",
        role: MessageRole::Child,
        fields: &[Self::NUM_SUCCEEDED, Self::NUM_FAILED, Self::NUM_REMAINING],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.i64_field(Self::NUM_SUCCEEDED, Some(self.num_succeeded))?;
        w.i64_field(Self::NUM_FAILED, Some(self.num_failed))?;
        w.i64_field(Self::NUM_REMAINING, Some(self.num_remaining))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            num_succeeded: r.req_i64(Self::NUM_SUCCEEDED)?,
            num_failed: r.req_i64(Self::NUM_FAILED)?,
            num_remaining: r.req_i64(Self::NUM_REMAINING)?,
        })
    }
}

impl DebugFields for ReindexProgressInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.i64_field("numSucceeded", self.num_succeeded);
        f.i64_field("numFailed", self.num_failed);
        f.i64_field("numRemaining", self.num_remaining);
    }
}

///
/// ReIndexResponse
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReIndexResponse {
    pub status: ReIndexStatus,
    pub progress: Option<ReindexProgressInfo>,
}

impl ReIndexResponse {
    const STATUS: FieldDescriptor = FieldDescriptor::required(
        "status",
        Binding::Attr,
        FieldKind::Enum(<ReIndexStatus as WireEnum>::TOKENS),
    );
    const PROGRESS: FieldDescriptor = FieldDescriptor::optional(
        "progress",
        Binding::Child,
        FieldKind::Record(ReindexProgressInfo::SHAPE),
    );

    #[must_use]
    pub const fn new(status: ReIndexStatus) -> Self {
        Self {
            status,
            progress: None,
        }
    }
}

impl MessageKind for ReIndexResponse {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "ReIndexResponse",
        role: MessageRole::Response,
        fields: &[Self::STATUS, Self::PROGRESS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.enum_field(Self::STATUS, Some(self.status))?;
        w.record(Self::PROGRESS, self.progress.as_ref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            status: r.req_enum(Self::STATUS)?,
            progress: r.opt_record(Self::PROGRESS)?,
        })
    }
}

impl DebugFields for ReIndexResponse {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.enum_field("status", self.status);
        f.opt_record("progress", self.progress.as_ref());
    }
}

impl AdminRequest for ReIndexRequest {
    type Response = ReIndexResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_emits_only_populated_knobs() {
        let mut req = SearchDirectoryRequest::query("(mail=*@example.test)");
        req.limit = Some(50);
        req.apply_cos = TriBool::False;

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("limit"), Some("50"));
        assert_eq!(el.attr("applyCos"), Some("0"));
        assert!(!el.has_attr("offset"));
        assert!(!el.has_attr("sortAscending"));

        let back = SearchDirectoryRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn search_response_requires_a_real_more_flag() {
        let mut el = Element::new("SearchDirectoryResponse");
        el.set_attr("searchTotal", "2");

        let err = SearchDirectoryResponse::from_element(&el).expect_err("missing more fails");
        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
        assert_eq!(
            err.to_string(),
            "SearchDirectoryResponse: required field 'more' is missing"
        );
    }

    #[test]
    fn search_builder_keeps_account_and_domain_hits_apart() {
        let resp = SearchDirectoryResponse::builder(false, 3)
            .account(AccountInfo::new("ada@example.test", "a1"))
            .domain(DomainInfo::new("example.test", "d1"))
            .account(AccountInfo::new("bob@example.test", "a2"))
            .build();

        let el = resp.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("more"), Some("0"));
        assert_eq!(el.count_children("account"), 2);
        assert_eq!(el.count_children("domain"), 1);

        let back = SearchDirectoryResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }

    #[test]
    fn reindex_round_trips_action_and_mailbox() {
        let req = ReIndexRequest::new(ReIndexAction::Start, ReindexMailboxInfo::new("mbx-1"));

        let el = req.to_element().expect("serialize should succeed");
        assert_eq!(el.attr("action"), Some("start"));

        let back = ReIndexRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn reindex_status_reports_progress_when_running() {
        let resp = ReIndexResponse {
            status: ReIndexStatus::Running,
            progress: Some(ReindexProgressInfo::new(120, 3, 77)),
        };

        let el = resp.to_element().expect("serialize should succeed");
        let progress = el.first_child("progress").expect("progress present");
        assert_eq!(progress.attr("numRemaining"), Some("77"));

        let back = ReIndexResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }

    #[test]
    fn unknown_reindex_action_is_invalid_format() {
        let mut mbox = Element::new("mbox");
        mbox.set_attr("id", "mbx-1");
        let mut el = Element::new("ReIndexRequest");
        el.set_attr("action", "pause");
        el.push_child(mbox);

        let err = ReIndexRequest::from_element(&el).expect_err("bad action should fail");
        assert_eq!(
            err.to_string(),
            "ReIndexRequest: field 'action' holds invalid reindex action token 'pause'"
        );
    }
}
