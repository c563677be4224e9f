// casefold.rs - Case-insensitive comparison and simple case conversion.
//
// Case-equivalent codepoints are grouped into buckets: contiguous rows
// of a flat table, reached through a trie keyed by codepoint. The
// simple table groups single-codepoint equivalents only; the full table
// adds multi-codepoint expansion rows (sharp s <-> "ss") that icmp can
// match against the opposing input.

use std::cmp::Ordering;

use once_cell::sync::Lazy;

use crate::tables::fold::{FULL_FOLDS, SIMPLE_FOLDS};
use crate::trie::{Trie, TrieBuilder, CODEPOINT_STAGES};

// Flag bits in SIMPLE_FOLDS rows.
const FOLD_LOWER_TARGET: u8 = 0x1;
const FOLD_UPPER_TARGET: u8 = 0x2;
const FOLD_IS_LOWER: u8 = 0x4;
const FOLD_IS_UPPER: u8 = 0x8;

/// Trie value marking "no bucket".
const NO_ROW: u64 = 0xFFFF;

fn row_trie<I: Iterator<Item = (u32, usize)>>(rows: I) -> Trie {
    let mut keyed: Vec<(u32, usize)> = rows.collect();
    keyed.sort_by_key(|e| e.0);
    let mut b = TrieBuilder::new(&CODEPOINT_STAGES, 16, NO_ROW);
    for (cp, row) in keyed {
        b.put(cp, row as u64).expect("bucket keys are unique");
    }
    b.build()
}

static SIMPLE_TRIE: Lazy<Trie> = Lazy::new(|| {
    row_trie(SIMPLE_FOLDS.iter().enumerate().map(|(i, r)| (r.0, i)))
});

static FULL_TRIE: Lazy<Trie> = Lazy::new(|| {
    row_trie(
        FULL_FOLDS
            .iter()
            .enumerate()
            .filter(|(_, r)| r.1 == 1)
            .map(|(i, r)| (r.0[0], i)),
    )
});

#[inline]
fn simple_row(c: char) -> Option<usize> {
    match SIMPLE_TRIE.get(c as u32) {
        NO_ROW => None,
        v => Some(v as usize),
    }
}

#[inline]
fn full_row(c: char) -> Option<usize> {
    match FULL_TRIE.get(c as u32) {
        NO_ROW => None,
        v => Some(v as usize),
    }
}

/// Smallest codepoint of the simple bucket containing `c`.
fn simple_representative(c: char) -> u32 {
    match simple_row(c) {
        None => c as u32,
        Some(i) => {
            let (_, n, _, _) = SIMPLE_FOLDS[i];
            SIMPLE_FOLDS[i - n as usize].0
        }
    }
}

/// Smallest codepoint of the full bucket containing `c`.
fn full_representative(c: char) -> u32 {
    match full_row(c) {
        None => c as u32,
        Some(i) => {
            let (_, _, n, _) = FULL_FOLDS[i];
            FULL_FOLDS[i - n as usize].0[0]
        }
    }
}

/// If `c`'s full bucket holds a multi-codepoint expansion that prefixes
/// `rest`, return how many codepoints it consumes.
fn full_expansion_match(c: char, rest: &[char]) -> Option<usize> {
    let row = full_row(c)?;
    let (_, _, n, size) = FULL_FOLDS[row];
    let start = row - n as usize;
    for r in start..start + size as usize {
        let (seq, seq_len, _, _) = FULL_FOLDS[r];
        let seq_len = seq_len as usize;
        if seq_len < 2 || rest.len() < seq_len {
            continue;
        }
        if (0..seq_len).all(|k| rest[k] as u32 == seq[k]) {
            return Some(seq_len);
        }
    }
    None
}

/// Simple case-insensitive comparison: single-codepoint equivalences
/// only, so `sicmp("\u{00DF}", "ss")` is not equal.
pub fn sicmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars();
    let mut ib = b.chars();
    loop {
        match (ia.next(), ib.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                let rx = simple_representative(x);
                let ry = simple_representative(y);
                if rx != ry {
                    return rx.cmp(&ry);
                }
            }
        }
    }
}

/// Full case-insensitive comparison: multi-codepoint foldings may
/// consume several codepoints of the opposing side, so
/// `icmp("\u{00DF}a", "ssa")` is equal.
pub fn icmp(a: &str, b: &str) -> Ordering {
    let av: Vec<char> = a.chars().collect();
    let bv: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0usize, 0usize);
    while i < av.len() && j < bv.len() {
        let x = av[i];
        let y = bv[j];
        if x == y {
            i += 1;
            j += 1;
            continue;
        }
        if let Some(consumed) = full_expansion_match(x, &bv[j..]) {
            i += 1;
            j += consumed;
            continue;
        }
        if let Some(consumed) = full_expansion_match(y, &av[i..]) {
            j += 1;
            i += consumed;
            continue;
        }
        let rx = full_representative(x);
        let ry = full_representative(y);
        if rx != ry {
            return rx.cmp(&ry);
        }
        i += 1;
        j += 1;
    }
    (av.len() - i).cmp(&(bv.len() - j))
}

/// Lowercase a single codepoint via the simple bucket tables.
pub fn to_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let Some(row) = simple_row(c) else { return c };
    let (_, n, size, flags) = SIMPLE_FOLDS[row];
    if flags & FOLD_IS_LOWER != 0 {
        return c;
    }
    bucket_target(row - n as usize, size, FOLD_LOWER_TARGET).unwrap_or(c)
}

/// Uppercase a single codepoint via the simple bucket tables.
pub fn to_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let Some(row) = simple_row(c) else { return c };
    let (_, n, size, flags) = SIMPLE_FOLDS[row];
    if flags & FOLD_IS_UPPER != 0 {
        return c;
    }
    bucket_target(row - n as usize, size, FOLD_UPPER_TARGET).unwrap_or(c)
}

fn bucket_target(start: usize, size: u8, flag: u8) -> Option<char> {
    (start..start + size as usize)
        .find(|&r| SIMPLE_FOLDS[r].3 & flag != 0)
        .and_then(|r| char::from_u32(SIMPLE_FOLDS[r].0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sicmp_basic_equivalences() {
        assert_eq!(sicmp("Hello", "hELLO"), Ordering::Equal);
        assert_eq!(sicmp("ΣΙΣΥΦΟΣ", "σισυφος"), Ordering::Equal);
        // Final sigma folds with the others.
        assert_eq!(sicmp("σ", "ς"), Ordering::Equal);
        assert_eq!(sicmp("abc", "abd"), Ordering::Less);
        assert_eq!(sicmp("abc", "ab"), Ordering::Greater);
    }

    #[test]
    fn sicmp_does_not_expand_multichar() {
        assert_ne!(sicmp("\u{00DF}a", "ssa"), Ordering::Equal);
    }

    #[test]
    fn icmp_expands_multichar_folds() {
        assert_eq!(icmp("\u{00DF}a", "ssa"), Ordering::Equal);
        assert_eq!(icmp("ssa", "\u{00DF}a"), Ordering::Equal);
        assert_eq!(icmp("\u{FB03}n", "ffin"), Ordering::Equal);
    }

    #[test]
    fn icmp_simple_cases_still_work() {
        assert_eq!(icmp("Hello", "hELLO"), Ordering::Equal);
        assert_eq!(icmp("abc", "abd"), Ordering::Less);
        assert_eq!(icmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn to_lower_spot_values() {
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_lower('a'), 'a');
        assert_eq!(to_lower('Σ'), 'σ');
        assert_eq!(to_lower('ς'), 'ς');
        assert_eq!(to_lower('Ä'), 'ä');
        assert_eq!(to_lower('0'), '0');
        // Kelvin sign lowercases to plain k.
        assert_eq!(to_lower('\u{212A}'), 'k');
    }

    #[test]
    fn to_upper_spot_values() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('A'), 'A');
        assert_eq!(to_upper('σ'), 'Σ');
        assert_eq!(to_upper('ς'), 'Σ');
        assert_eq!(to_upper('ä'), 'Ä');
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn uncased_codepoints_map_to_themselves() {
        for c in ['中', '3', ' ', '\u{0301}'] {
            assert_eq!(to_lower(c), c);
            assert_eq!(to_upper(c), c);
        }
    }
}
