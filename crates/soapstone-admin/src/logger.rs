//! Per-account log category messages.

use crate::types::AccountSelector;
use soapstone_core::prelude::*;

///
/// CONSTANTS
///

pub(crate) const SHAPES: &[&'static MessageShape] = &[
    AddAccountLoggerRequest::SHAPE,
    AddAccountLoggerResponse::SHAPE,
    RemoveAccountLoggerRequest::SHAPE,
    RemoveAccountLoggerResponse::SHAPE,
    GetAllAccountLoggersRequest::SHAPE,
    GetAllAccountLoggersResponse::SHAPE,
];

wire_enum! {
    ///
    /// LoggerLevel
    ///
    pub enum LoggerLevel as "log level" {
        Debug = "debug",
        Error = "error",
        Info = "info",
        Trace = "trace",
        Warn = "warn",
    }
}

///
/// LoggerInfo
///
/// One log category pinned to a level.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggerInfo {
    pub category: String,
    pub level: LoggerLevel,
}

impl LoggerInfo {
    const CATEGORY: FieldDescriptor =
        FieldDescriptor::required("category", Binding::Attr, FieldKind::Text);
    const LEVEL: FieldDescriptor = FieldDescriptor::required(
        "level",
        Binding::Attr,
        FieldKind::Enum(<LoggerLevel as WireEnum>::TOKENS),
    );

    #[must_use]
    pub fn new(category: impl Into<String>, level: LoggerLevel) -> Self {
        Self {
            category: category.into(),
            level,
        }
    }
}

impl MessageKind for LoggerInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "logger",
        role: MessageRole::Child,
        fields: &[Self::CATEGORY, Self::LEVEL],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::CATEGORY, Some(&self.category))?;
        w.enum_field(Self::LEVEL, Some(self.level))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            category: r.req_str(Self::CATEGORY)?,
            level: r.req_enum(Self::LEVEL)?,
        })
    }
}

impl DebugFields for LoggerInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("category", &self.category);
        f.enum_field("level", self.level);
    }
}

///
/// AddAccountLoggerRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddAccountLoggerRequest {
    pub account: AccountSelector,
    pub logger: LoggerInfo,
}

impl AddAccountLoggerRequest {
    const ACCOUNT: FieldDescriptor = FieldDescriptor::required(
        "account",
        Binding::Child,
        FieldKind::Record(AccountSelector::SHAPE),
    );
    const LOGGER: FieldDescriptor = FieldDescriptor::required(
        "logger",
        Binding::Child,
        FieldKind::Record(LoggerInfo::SHAPE),
    );

    #[must_use]
    pub fn new(account: AccountSelector, logger: LoggerInfo) -> Self {
        Self { account, logger }
    }
}

impl MessageKind for AddAccountLoggerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "AddAccountLoggerRequest",
        role: MessageRole::Request,
        fields: &[Self::ACCOUNT, Self::LOGGER],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::ACCOUNT, Some(&self.account))?;
        w.record(Self::LOGGER, Some(&self.logger))?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            account: r.req_record(Self::ACCOUNT)?,
            logger: r.req_record(Self::LOGGER)?,
        })
    }
}

impl DebugFields for AddAccountLoggerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.record("account", &self.account);
        f.record("logger", &self.logger);
    }
}

list_response! {
    ///
    /// AddAccountLoggerResponse
    ///
    AddAccountLoggerResponse { loggers: [LoggerInfo] as "logger" }
}

impl AdminRequest for AddAccountLoggerRequest {
    type Response = AddAccountLoggerResponse;
}

///
/// RemoveAccountLoggerRequest
///
/// Both halves are optional: no selector means every account, no logger
/// means every category.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RemoveAccountLoggerRequest {
    pub account: Option<AccountSelector>,
    pub logger: Option<LoggerInfo>,
}

impl RemoveAccountLoggerRequest {
    const ACCOUNT: FieldDescriptor = FieldDescriptor::optional(
        "account",
        Binding::Child,
        FieldKind::Record(AccountSelector::SHAPE),
    );
    const LOGGER: FieldDescriptor = FieldDescriptor::optional(
        "logger",
        Binding::Child,
        FieldKind::Record(LoggerInfo::SHAPE),
    );
}

impl MessageKind for RemoveAccountLoggerRequest {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "RemoveAccountLoggerRequest",
        role: MessageRole::Request,
        fields: &[Self::ACCOUNT, Self::LOGGER],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.record(Self::ACCOUNT, self.account.as_ref())?;
        w.record(Self::LOGGER, self.logger.as_ref())?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            account: r.opt_record(Self::ACCOUNT)?,
            logger: r.opt_record(Self::LOGGER)?,
        })
    }
}

impl DebugFields for RemoveAccountLoggerRequest {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.opt_record("account", self.account.as_ref());
        f.opt_record("logger", self.logger.as_ref());
    }
}

empty_shape! {
    ///
    /// RemoveAccountLoggerResponse
    ///
    RemoveAccountLoggerResponse: Response
}

impl AdminRequest for RemoveAccountLoggerRequest {
    type Response = RemoveAccountLoggerResponse;
}

empty_shape! {
    ///
    /// GetAllAccountLoggersRequest
    ///
    GetAllAccountLoggersRequest: Request
}

///
/// AccountLoggerInfo
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountLoggerInfo {
    pub name: String,
    pub id: String,
    pub loggers: Vec<LoggerInfo>,
}

impl AccountLoggerInfo {
    const NAME: FieldDescriptor = FieldDescriptor::required("name", Binding::Attr, FieldKind::Text);
    const ID: FieldDescriptor = FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const LOGGERS: FieldDescriptor = FieldDescriptor::optional(
        "logger",
        Binding::Child,
        FieldKind::List(ListKind {
            item: LoggerInfo::SHAPE,
            wrapper: None,
            order: ListOrder::Insignificant,
        }),
    );

    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            loggers: Vec::new(),
        }
    }
}

impl MessageKind for AccountLoggerInfo {
    const SHAPE: &'static MessageShape = &MessageShape {
        name: "accountLogger",
        role: MessageRole::Child,
        fields: &[Self::NAME, Self::ID, Self::LOGGERS],
    };

    fn to_element(&self) -> Result<Element, WireError> {
        let mut w = ElementWriter::new(Self::SHAPE);
        w.str_field(Self::NAME, Some(&self.name))?;
        w.str_field(Self::ID, Some(&self.id))?;
        w.list(Self::LOGGERS, &self.loggers)?;
        Ok(w.finish())
    }

    fn from_element(el: &Element) -> Result<Self, WireError> {
        let r = ElementReader::new(Self::SHAPE, el)?;
        Ok(Self {
            name: r.req_str(Self::NAME)?,
            id: r.req_str(Self::ID)?,
            loggers: r.list(Self::LOGGERS)?,
        })
    }
}

impl DebugFields for AccountLoggerInfo {
    fn fmt_fields(&self, f: &mut FieldFormatter) {
        f.str_field("name", &self.name);
        f.str_field("id", &self.id);
        f.list("logger", &self.loggers);
    }
}

list_response! {
    ///
    /// GetAllAccountLoggersResponse
    ///
    GetAllAccountLoggersResponse { account_loggers: [AccountLoggerInfo] as "accountLogger" }
}

impl AdminRequest for GetAllAccountLoggersRequest {
    type Response = GetAllAccountLoggersResponse;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_logger_round_trips_category_and_level() {
        let req = AddAccountLoggerRequest::new(
            AccountSelector::by_name("ada@example.test"),
            LoggerInfo::new("mailop", LoggerLevel::Debug),
        );

        let el = req.to_element().expect("serialize should succeed");
        let logger = el.first_child("logger").expect("logger child present");
        assert_eq!(logger.attr("level"), Some("debug"));

        let back = AddAccountLoggerRequest::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, req);
    }

    #[test]
    fn unknown_level_token_is_invalid_format() {
        let mut logger = Element::new("logger");
        logger.set_attr("category", "mailop");
        logger.set_attr("level", "loud");

        let err = LoggerInfo::from_element(&logger).expect_err("bad level should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "logger: field 'level' holds invalid log level token 'loud'"
        );
    }

    #[test]
    fn remove_logger_accepts_a_bare_request() {
        let el = Element::new("RemoveAccountLoggerRequest");
        let req =
            RemoveAccountLoggerRequest::from_element(&el).expect("deserialize should succeed");

        assert_eq!(req, RemoveAccountLoggerRequest::default());
        assert_eq!(
            req.to_element().expect("serialize should succeed").to_xml(),
            "<RemoveAccountLoggerRequest/>"
        );
    }

    #[test]
    fn account_logger_listing_nests_per_account_categories() {
        let mut ada = AccountLoggerInfo::new("ada@example.test", "8aa-11");
        ada.loggers.push(LoggerInfo::new("mailop", LoggerLevel::Trace));
        ada.loggers.push(LoggerInfo::new("imap", LoggerLevel::Warn));

        let resp = GetAllAccountLoggersResponse {
            account_loggers: vec![ada],
        };

        let el = resp.to_element().expect("serialize should succeed");
        let entry = el.first_child("accountLogger").expect("entry present");
        assert_eq!(entry.count_children("logger"), 2);

        let back =
            GetAllAccountLoggersResponse::from_element(&el).expect("deserialize should succeed");
        assert_eq!(back, resp);
    }
}
