use crate::model::FieldDescriptor;
use derive_more::Display;
use serde::Serialize;

///
/// MessageShape
///
/// One named message shape: the wire element name, its protocol role, and
/// the ordered field table. Field order here is declaration order and
/// drives both serialization and debug rendering.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MessageShape {
    pub name: &'static str,
    pub role: MessageRole,
    pub fields: &'static [FieldDescriptor],
}

impl MessageShape {
    /// Find a field descriptor by wire name.
    #[must_use]
    pub fn field(&self, wire: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire == wire)
    }

    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(self.role, MessageRole::Request)
    }
}

///
/// MessageRole
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Nested record carried inside requests and responses.
    #[display("child")]
    Child,
    #[display("request")]
    Request,
    #[display("response")]
    Response,
}

///
/// TESTS
///
