// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur in the library.

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum ErrorKind {
            $(
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (AmbiguousRemainder, ambiguous_remainder),
    (DuplicateCodeUsage, duplicate_code_usage),
    (DuplicateGroupId, duplicate_group_id),
    (Export, export),
    (GroupNotFound, group_not_found),
    (Internal, internal),
    (InvalidDefinition, invalid_definition),
    (InvalidFigures, invalid_figures),
    (MissingCode, missing_code),
    (MissingReferenceCode, missing_reference_code),
    (MissingTemplate, missing_template),
    (Parse, parse)
);

/// An error that can occur while loading definitions, validating them, or
/// aggregating a [ValueTable][crate::ValueTable].
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl Error {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human readable description of the error.
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::missing_code("Code Z not found.");
        assert_eq!(err.kind(), ErrorKind::MissingCode);
        assert_eq!(err.description(), "Code Z not found.");
        assert_eq!(err.to_string(), "MissingCode: Code Z not found.");

        assert_eq!(
            Error::missing_reference_code("TOTAL").to_string(),
            "MissingReferenceCode: TOTAL"
        );
    }
}
