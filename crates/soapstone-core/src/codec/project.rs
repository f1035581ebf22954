use crate::{
    error::WireError,
    model::{FieldDescriptor, MessageShape},
};

/// Presence gate shared by both mapping directions.
///
/// A required field with no bound value fails with
/// `MissingRequiredField` naming the field and its owning shape; an
/// optional absent value passes through as `None` and never reaches the
/// wire as an empty token.
pub fn require<T>(
    shape: &MessageShape,
    desc: &FieldDescriptor,
    value: Option<T>,
) -> Result<Option<T>, WireError> {
    match value {
        Some(v) => Ok(Some(v)),
        None if desc.is_required() => Err(WireError::missing(shape.name, desc.wire)),
        None => Ok(None),
    }
}

/// Project one encoded token for serialization.
///
/// Token form of [`require`]: `None` out means "omit the field entirely".
pub fn project(
    shape: &MessageShape,
    desc: &FieldDescriptor,
    value: Option<String>,
) -> Result<Option<String>, WireError> {
    require(shape, desc, value)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WireErrorKind,
        model::{Binding, FieldKind, MessageRole},
    };

    const SHAPE: MessageShape = MessageShape {
        name: "DeleteAccountRequest",
        role: MessageRole::Request,
        fields: &[],
    };

    const REQUIRED: FieldDescriptor =
        FieldDescriptor::required("id", Binding::Attr, FieldKind::Text);
    const OPTIONAL: FieldDescriptor =
        FieldDescriptor::optional("limit", Binding::Attr, FieldKind::Int);

    #[test]
    fn required_absent_names_field_and_shape() {
        let err = project(&SHAPE, &REQUIRED, None).expect_err("absence should fail");

        assert_eq!(err.kind(), WireErrorKind::MissingRequiredField);
        assert_eq!(
            err.to_string(),
            "DeleteAccountRequest: required field 'id' is missing"
        );
    }

    #[test]
    fn optional_absent_projects_to_nothing() {
        assert_eq!(project(&SHAPE, &OPTIONAL, None), Ok(None));
    }

    #[test]
    fn present_values_pass_through_unchanged() {
        let projected = project(&SHAPE, &REQUIRED, Some("8aa-11".to_string()));
        assert_eq!(projected, Ok(Some("8aa-11".to_string())));
    }
}
