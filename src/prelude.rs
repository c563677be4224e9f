// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use unicore::prelude::*;
//!
//! let set = CodepointSet::from_intervals(&[(0x41, 0x5B)]);
//! assert!(set.contains('Z'));
//! assert_eq!(nfkd("\u{FB03}n"), "ffin");
//! ```

pub use crate::casefold::{icmp, sicmp, to_lower, to_upper};
pub use crate::error::Error;
pub use crate::grapheme::{decode_grapheme, graphemes, Grapheme};
pub use crate::norm::{combining_class, compose_jamo, nfc, nfd, nfkc, nfkd, normalize, Form};
pub use crate::props::unicode;
pub use crate::set::{CodepointSet, Interval};
pub use crate::trie::{Trie, TrieBuilder};
