// unicore - Unicode primitives: sets, tries, normalization, case
// folding, grapheme clusters.
//
// Layering, leaves first:
//   packed.rs     bit-packed words, MultiArray stage storage
//   uint24.rs     copy-on-write 24-bit integer arrays
//   set.rs        CodepointSet interval algebra (+ codegen.rs emitter)
//   trie.rs       multi-stage lookup tables with page dedup
//   compressed.rs interval stream codec for the embedded tables
//   tables/       generated UCD data (tools/gen_tables.py)
//   norm.rs       NFC/NFD/NFKC/NFKD
//   casefold.rs   sicmp/icmp, to_lower/to_upper
//   grapheme.rs   grapheme cluster decoding
//   props.rs      property sets by name, classification predicates

//! Unicode codepoint classification, case folding and normalization,
//! built on interval sets and compact multi-stage tries.
//!
//! ```
//! use unicore::{nfc, nfd, unicode, graphemes};
//!
//! assert_eq!(nfc("A\u{0308}ffin"), "\u{00C4}ffin");
//! assert_eq!(nfd("\u{00C4}ffin"), "A\u{0308}ffin");
//!
//! let letters = unicode("L").unwrap();
//! assert!(letters.contains('A'));
//!
//! assert_eq!(graphemes("e\u{0301}!").count(), 2);
//! ```

pub mod casefold;
pub mod codegen;
pub mod compressed;
pub mod error;
pub mod grapheme;
pub mod norm;
pub mod packed;
pub mod prelude;
pub mod props;
pub mod set;
pub mod tables;
pub mod trie;
pub mod uint24;

pub use casefold::{icmp, sicmp, to_lower, to_upper};
pub use error::Error;
pub use grapheme::{decode_grapheme, grapheme_count, graphemes, Grapheme};
pub use norm::{
    combining_class, compose, compose_jamo, is_normalized, nfc, nfd, nfkc, nfkd, normalize, Form,
};
pub use props::{register_property, unicode};
pub use set::{CodepointSet, Interval, CODEPOINT_LIMIT};
pub use trie::{Trie, TrieBuilder};
pub use uint24::Uint24Array;
