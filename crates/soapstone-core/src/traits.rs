use crate::{error::WireError, model::MessageShape, xml::Element};

///
/// MessageKind
///
/// Implemented by every message record. `SHAPE` is the static descriptor
/// table; `to_element` / `from_element` are hand-written projections built
/// from the shared codec primitives. Nothing reflective happens here: the
/// table and the code agree because they live side by side and the
/// registry validates the table.
///

pub trait MessageKind: Sized {
    /// Static descriptor table for this shape.
    const SHAPE: &'static MessageShape;

    /// Project the record onto a wire element.
    fn to_element(&self) -> Result<Element, WireError>;

    /// Rebuild the record from a wire element.
    fn from_element(el: &Element) -> Result<Self, WireError>;
}

///
/// AdminRequest
///
/// Pairs a request shape with the response shape the server answers
/// it with.
///

pub trait AdminRequest: MessageKind {
    type Response: MessageKind;
}

///
/// WireEnum
///
/// Closed token vocabulary. Implementations come from
/// [`wire_enum!`](crate::wire_enum); decoding an unknown token is always
/// a reported error, never a silent default.
///

pub trait WireEnum: Copy + Sized + 'static {
    /// Every legal wire token, in variant order.
    const TOKENS: &'static [&'static str];

    /// Human label used in error messages, e.g. `"reindex action"`.
    const EXPECTED: &'static str;

    /// The exact wire token for this variant.
    fn as_token(self) -> &'static str;

    /// Parse a wire token; `None` for anything outside the vocabulary.
    fn from_token(token: &str) -> Option<Self>;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    crate::wire_enum! {
        /// Session lifecycle states, attribute form.
        enum Phase as "phase" {
            Idle = "idle",
            Running = "running",
            Stopped = "stopped",
        }
    }

    #[test]
    fn wire_enum_tokens_cover_every_variant() {
        assert_eq!(Phase::TOKENS, ["idle", "running", "stopped"]);
        for token in Phase::TOKENS {
            assert!(Phase::from_token(token).is_some());
        }
    }

    #[test]
    fn wire_enum_round_trips_through_tokens() {
        for phase in [Phase::Idle, Phase::Running, Phase::Stopped] {
            assert_eq!(Phase::from_token(phase.as_token()), Some(phase));
        }
    }

    #[test]
    fn from_str_rejects_unknown_tokens() {
        let err = Phase::from_str("paused").expect_err("unknown token should fail");
        assert_eq!(err.to_string(), "unknown phase token 'paused'");
    }

    #[test]
    fn display_uses_the_wire_token() {
        assert_eq!(Phase::Running.to_string(), "running");
    }
}
