/// Record a formatted message into an error accumulator.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

/// Declare a closed wire token vocabulary.
///
/// Generates the enum, a [`WireEnum`](crate::traits::WireEnum) impl mapping
/// variants to their exact wire tokens, `Display` in token form, and a
/// strict `FromStr` that fails on anything outside the vocabulary.
///
/// The `as` literal is the human label used in error messages.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $expected:literal {
            $( $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        #[$crate::__reexports::remain::sorted]
        $vis enum $name {
            $( $variant, )+
        }

        impl $crate::traits::WireEnum for $name {
            const TOKENS: &'static [&'static str] = &[ $( $token, )+ ];
            const EXPECTED: &'static str = $expected;

            fn as_token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::traits::WireEnum::as_token(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::InvalidTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::traits::WireEnum>::from_token(s)
                    .ok_or_else(|| $crate::error::InvalidTokenError::new($expected, s))
            }
        }
    };
}
