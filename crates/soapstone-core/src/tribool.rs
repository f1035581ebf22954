use std::fmt;

///
/// TriBool
///
/// Boolean with an explicit third "unset" state, kept distinct from both
/// `true` and `false` through every conversion.
///
/// The wire tokens are the literal `"1"` and `"0"`; unset never reaches
/// the wire at all. Decoding accepts exactly those two tokens; anything
/// else is reported to the caller, never coerced to a default.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TriBool {
    True,
    False,
    #[default]
    Unset,
}

impl TriBool {
    pub const TOKEN_TRUE: &'static str = "1";
    pub const TOKEN_FALSE: &'static str = "0";

    /// Encode to the wire token; `Unset` encodes as absent.
    #[must_use]
    pub const fn encode(self) -> Option<&'static str> {
        match self {
            Self::True => Some(Self::TOKEN_TRUE),
            Self::False => Some(Self::TOKEN_FALSE),
            Self::Unset => None,
        }
    }

    /// Decode a wire token; absent decodes to `Unset`.
    ///
    /// Returns `None` for any present token other than `"1"` / `"0"` so
    /// the caller can report the bad token with field context.
    #[must_use]
    pub fn decode(token: Option<&str>) -> Option<Self> {
        match token {
            None => Some(Self::Unset),
            Some(t) if t == Self::TOKEN_TRUE => Some(Self::True),
            Some(t) if t == Self::TOKEN_FALSE => Some(Self::False),
            Some(_) => None,
        }
    }

    /// View as an optional two-state boolean; `Unset` maps to `None`.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unset => None,
        }
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Resolve to a plain boolean, substituting `default` when unset.
    #[must_use]
    pub const fn or(self, default: bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Unset => default,
        }
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for TriBool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl From<TriBool> for Option<bool> {
    fn from(value: TriBool) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for TriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::True => Self::TOKEN_TRUE,
            Self::False => Self::TOKEN_FALSE,
            Self::Unset => "unset",
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips_all_three_states() {
        for state in [TriBool::True, TriBool::False, TriBool::Unset] {
            assert_eq!(TriBool::decode(state.encode()), Some(state));
        }
    }

    #[test]
    fn decode_rejects_unrecognized_tokens() {
        for bad in ["true", "false", "", "2", "TRUE", "yes", "01"] {
            assert_eq!(TriBool::decode(Some(bad)), None, "token {bad:?}");
        }
    }

    #[test]
    fn unset_is_distinct_from_false() {
        assert_ne!(TriBool::Unset, TriBool::False);
        assert_eq!(TriBool::Unset.as_bool(), None);
        assert_eq!(TriBool::Unset.encode(), None);
        assert!(!TriBool::Unset.or(false));
        assert!(TriBool::Unset.or(true));
    }

    #[test]
    fn option_round_trip_is_lossless() {
        for state in [Some(true), Some(false), None] {
            assert_eq!(Option::<bool>::from(TriBool::from(state)), state);
        }
    }
}
