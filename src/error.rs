// error.rs - Error types for unicore.
//
// Reported errors only; contract violations (out-of-range 24-bit writes,
// decoding a grapheme from empty input) are debug assertions instead.

use std::fmt;

/// Error type for table construction and property resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A trie builder key was inserted out of order.
    UnsortedInput { key: u32 },
    /// A property name did not resolve to any built-in or registered set.
    UnknownProperty(String),
    /// A property name was empty or contained non-ASCII bytes.
    InvalidPropertyName,
    /// The registry of user-defined properties is full, or the name is
    /// already taken.
    PropertyLimit,
    /// A compressed interval stream ended mid-value, or was otherwise
    /// malformed (reserved lead byte, non-ascending boundaries).
    TruncatedTable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsortedInput { key } => {
                write!(f, "trie keys must be inserted in ascending order (key {:#x})", key)
            }
            Error::UnknownProperty(name) => write!(f, "unknown property name: {:?}", name),
            Error::InvalidPropertyName => write!(f, "invalid property name"),
            Error::PropertyLimit => write!(f, "property registry limit reached"),
            Error::TruncatedTable => {
                write!(f, "truncated or malformed compressed interval stream")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsorted() {
        let err = Error::UnsortedInput { key: 0x41 };
        assert!(err.to_string().contains("0x41"));
    }

    #[test]
    fn display_unknown_property() {
        let err = Error::UnknownProperty("Klingon".into());
        assert!(err.to_string().contains("Klingon"));
    }

    #[test]
    fn error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(Error::TruncatedTable);
        assert_eq!(err.to_string(), "truncated or malformed compressed interval stream");
    }
}
