// casefold_test.rs - Integration tests for case-insensitive comparison
// and single-codepoint case conversion.

use std::cmp::Ordering;

use unicore::casefold::{icmp, sicmp, to_lower, to_upper};

// === sicmp / icmp ===

#[test]
fn simple_compare_ignores_simple_case() {
    assert_eq!(sicmp("Unicode", "uNICODE"), Ordering::Equal);
    assert_eq!(sicmp("\u{0130}", "\u{0130}"), Ordering::Equal);
    assert_eq!(sicmp("ΣΟΦΟΣ", "σοφος"), Ordering::Equal);
}

#[test]
fn sharp_s_distinguishes_simple_from_full() {
    assert_eq!(icmp("\u{00DF}a", "ssa"), Ordering::Equal);
    assert_ne!(sicmp("\u{00DF}a", "ssa"), Ordering::Equal);
}

#[test]
fn full_compare_consumes_expansions_on_either_side() {
    assert_eq!(icmp("a\u{00DF}z", "assz"), Ordering::Equal);
    assert_eq!(icmp("assz", "a\u{00DF}z"), Ordering::Equal);
    assert_eq!(icmp("\u{FB01}le", "file"), Ordering::Equal);
}

#[test]
fn ordering_sign_and_length() {
    assert_eq!(sicmp("apple", "banana"), Ordering::Less);
    assert_eq!(sicmp("banana", "apple"), Ordering::Greater);
    assert_eq!(sicmp("app", "apple"), Ordering::Less);
    assert_eq!(icmp("app", "apple"), Ordering::Less);
    assert_eq!(icmp("", ""), Ordering::Equal);
}

#[test]
fn sharp_s_upper_form_folds_to_lower() {
    // Capital sharp s and sharp s share a bucket.
    assert_eq!(sicmp("\u{1E9E}", "\u{00DF}"), Ordering::Equal);
    assert_eq!(icmp("\u{1E9E}", "\u{00DF}"), Ordering::Equal);
}

// === to_lower / to_upper ===

#[test]
fn ascii_fast_path() {
    assert_eq!(to_lower('Q'), 'q');
    assert_eq!(to_upper('q'), 'Q');
    assert_eq!(to_lower('9'), '9');
    assert_eq!(to_upper('['), '[');
}

#[test]
fn greek_sigma_forms() {
    assert_eq!(to_lower('Σ'), 'σ');
    assert_eq!(to_upper('σ'), 'Σ');
    assert_eq!(to_upper('ς'), 'Σ');
    assert_eq!(to_lower('ς'), 'ς');
}

#[test]
fn titlecase_digraphs_map_both_ways() {
    // U+01C5 LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON.
    assert_eq!(to_lower('\u{01C5}'), '\u{01C6}');
    assert_eq!(to_upper('\u{01C5}'), '\u{01C4}');
}

#[test]
fn cyrillic_and_armenian() {
    assert_eq!(to_lower('Д'), 'д');
    assert_eq!(to_upper('д'), 'Д');
    assert_eq!(to_lower('\u{0531}'), '\u{0561}');
    assert_eq!(to_upper('\u{0561}'), '\u{0531}');
}
