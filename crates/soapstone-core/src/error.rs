use std::fmt;
use thiserror::Error as ThisError;

///
/// WireError
///
/// Mapping-time failure. Everything here is local, synchronous, and
/// terminal for its message; nothing is retried at this layer. Every
/// variant names the owning message shape so the failure is actionable
/// without a stack trace.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum WireError {
    #[error("{shape}: required field '{field}' is missing")]
    MissingRequiredField {
        shape: &'static str,
        field: &'static str,
    },

    #[error("{shape}: field '{field}' holds invalid {expected} token '{value}'")]
    InvalidFormat {
        shape: &'static str,
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{shape}: unknown selector variant '{variant}'")]
    UnknownSelectorVariant {
        shape: &'static str,
        variant: String,
    },

    #[error("expected element '{shape}', found '{found}'")]
    UnexpectedElement {
        shape: &'static str,
        found: String,
    },
}

impl WireError {
    /// A required field with no bound value.
    #[must_use]
    pub const fn missing(shape: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { shape, field }
    }

    /// A present token that does not parse as the declared kind.
    pub fn invalid(
        shape: &'static str,
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFormat {
            shape,
            field,
            value: value.into(),
            expected,
        }
    }

    /// A selector discriminator outside the declared vocabulary.
    pub fn unknown_selector(shape: &'static str, variant: impl Into<String>) -> Self {
        Self::UnknownSelectorVariant {
            shape,
            variant: variant.into(),
        }
    }

    /// An element whose tag does not match the expected shape.
    pub fn unexpected_element(shape: &'static str, found: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            shape,
            found: found.into(),
        }
    }

    /// Stable kind, independent of message text.
    #[must_use]
    pub const fn kind(&self) -> WireErrorKind {
        match self {
            Self::MissingRequiredField { .. } => WireErrorKind::MissingRequiredField,
            Self::InvalidFormat { .. } => WireErrorKind::InvalidFormat,
            Self::UnknownSelectorVariant { .. } => WireErrorKind::UnknownSelectorVariant,
            Self::UnexpectedElement { .. } => WireErrorKind::UnexpectedElement,
        }
    }

    /// Name of the message shape the failure occurred on.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { shape, .. }
            | Self::InvalidFormat { shape, .. }
            | Self::UnknownSelectorVariant { shape, .. }
            | Self::UnexpectedElement { shape, .. } => shape,
        }
    }
}

///
/// WireErrorKind
///
/// Stable taxonomy for mapping failures, used by logs and by tests that
/// assert on failure class rather than message text.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum WireErrorKind {
    InvalidFormat,
    MissingRequiredField,
    UnexpectedElement,
    UnknownSelectorVariant,
}

impl WireErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::MissingRequiredField => "missing_required_field",
            Self::UnexpectedElement => "unexpected_element",
            Self::UnknownSelectorVariant => "unknown_selector_variant",
        }
    }
}

impl fmt::Display for WireErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// InvalidTokenError
///
/// Context-free token parse failure, used by `FromStr` on wire enums
/// where no shape or field context exists yet.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {expected} token '{token}'")]
pub struct InvalidTokenError {
    pub expected: &'static str,
    pub token: String,
}

impl InvalidTokenError {
    #[must_use]
    pub fn new(expected: &'static str, token: impl Into<String>) -> Self {
        Self {
            expected,
            token: token.into(),
        }
    }
}

///
/// ErrorTree
///
/// Flat, insertion-ordered accumulation of validation messages. Registry
/// validation reports every table problem in one pass instead of stopping
/// at the first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation message.
    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(String::as_str)
    }

    /// Resolve to `Ok(())` when no messages were recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

///
/// RegistryError
///

#[derive(Clone, Debug, ThisError)]
pub enum RegistryError {
    #[error("shape table validation failed:\n{0}")]
    Validation(ErrorTree),

    #[error("unknown message shape '{0}'")]
    UnknownShape(String),
}

///
/// TESTS
///
