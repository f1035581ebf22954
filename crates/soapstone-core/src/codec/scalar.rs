use crate::{error::WireError, traits::WireEnum, tribool::TriBool};

/// CONSTANTS

const EXPECTED_BOOL: &str = "boolean";
const EXPECTED_INT: &str = "integer";

/// Encode an integer-like scalar as its decimal token.
#[must_use]
pub fn encode_i64(value: i64) -> String {
    value.to_string()
}

/// Decode a decimal integer token.
pub fn decode_i64(
    shape: &'static str,
    field: &'static str,
    token: &str,
) -> Result<i64, WireError> {
    token
        .parse()
        .map_err(|_| WireError::invalid(shape, field, token, EXPECTED_INT))
}

/// Decode a strict two-state boolean token, `"1"` or `"0"`.
///
/// Used where the schema has no unset state; words like `"true"` are
/// rejected the same as garbage.
pub fn decode_bool(
    shape: &'static str,
    field: &'static str,
    token: &str,
) -> Result<bool, WireError> {
    match TriBool::decode(Some(token)) {
        Some(TriBool::True) => Ok(true),
        Some(TriBool::False) => Ok(false),
        _ => Err(WireError::invalid(shape, field, token, EXPECTED_BOOL)),
    }
}

/// Decode a tri-state boolean token; absent decodes to `Unset`.
pub fn decode_tribool(
    shape: &'static str,
    field: &'static str,
    token: Option<&str>,
) -> Result<TriBool, WireError> {
    TriBool::decode(token).ok_or_else(|| {
        // decode only fails on a present token
        WireError::invalid(shape, field, token.unwrap_or_default(), EXPECTED_BOOL)
    })
}

/// Decode an enum token; unknown tokens are a format failure.
pub fn decode_enum<E: WireEnum>(
    shape: &'static str,
    field: &'static str,
    token: &str,
) -> Result<E, WireError> {
    E::from_token(token).ok_or_else(|| WireError::invalid(shape, field, token, E::EXPECTED))
}

/// Decode a selector discriminator token.
///
/// Discriminators get their own taxonomy entry: an unknown `by` variant
/// reports `UnknownSelectorVariant`, not a generic format failure.
pub fn decode_selector_token<E: WireEnum>(
    shape: &'static str,
    token: &str,
) -> Result<E, WireError> {
    E::from_token(token).ok_or_else(|| WireError::unknown_selector(shape, token))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WireErrorKind;
    use proptest::prelude::*;

    crate::wire_enum! {
        enum Mode as "mode" {
            Both = "both",
            Internal = "internal",
            Ldap = "ldap",
        }
    }

    #[test]
    fn i64_decoding_rejects_non_decimal_tokens() {
        for bad in ["", "12x", "0x10", "1.5", " 3"] {
            let err = decode_i64("S", "limit", bad).expect_err("token should fail");
            assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
        }
    }

    #[test]
    fn bool_decoding_accepts_only_wire_tokens() {
        assert_eq!(decode_bool("S", "f", "1"), Ok(true));
        assert_eq!(decode_bool("S", "f", "0"), Ok(false));
        assert!(decode_bool("S", "f", "true").is_err());
        assert!(decode_bool("S", "f", "").is_err());
    }

    #[test]
    fn tribool_decoding_maps_absent_to_unset() {
        assert_eq!(decode_tribool("S", "f", None), Ok(TriBool::Unset));
        assert_eq!(decode_tribool("S", "f", Some("1")), Ok(TriBool::True));

        let err = decode_tribool("S", "f", Some("yes")).expect_err("bad token should fail");
        assert_eq!(err.kind(), WireErrorKind::InvalidFormat);
    }

    #[test]
    fn enum_decoding_distinguishes_format_from_selector_errors() {
        let format = decode_enum::<Mode>("S", "mode", "bogus").expect_err("should fail");
        assert_eq!(format.kind(), WireErrorKind::InvalidFormat);

        let selector = decode_selector_token::<Mode>("S", "bogus").expect_err("should fail");
        assert_eq!(selector.kind(), WireErrorKind::UnknownSelectorVariant);
    }

    proptest! {
        #[test]
        fn i64_tokens_round_trip(value in any::<i64>()) {
            let token = encode_i64(value);
            prop_assert_eq!(decode_i64("S", "n", &token), Ok(value));
        }
    }
}
