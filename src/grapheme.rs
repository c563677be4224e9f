// grapheme.rs - Grapheme clusters.
//
// Grapheme is a small value type holding the codepoints of one
// user-perceived character, inline up to four of them. decode_grapheme
// runs the cluster state machine over the front of a string: CR/LF,
// regional-indicator pairing, Hangul jamo runs, then trailing
// extend/spacing-mark characters. Control characters terminate a
// cluster before any extension.

use std::fmt;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::compressed::decode_intervals;
use crate::tables;
use crate::trie::Trie;

static EXTEND: Lazy<Trie> = Lazy::new(|| {
    Trie::from_set(&decode_intervals(tables::binary::GRAPHEME_EXTEND).expect("embedded stream"))
});

static SPACING_MARK: Lazy<Trie> = Lazy::new(|| {
    Trie::from_set(&decode_intervals(tables::binary::SPACING_MARK).expect("embedded stream"))
});

static CONTROL: Lazy<Trie> = Lazy::new(|| {
    Trie::from_set(&decode_intervals(tables::binary::GRAPHEME_CONTROL).expect("embedded stream"))
});

/// One user-perceived character: a sequence of codepoints with value
/// semantics. Up to four codepoints are stored inline; longer clusters
/// spill to the heap and copying deep-copies the spill.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Grapheme {
    chars: SmallVec<[char; 4]>,
}

impl Grapheme {
    pub fn new() -> Grapheme {
        Grapheme::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    fn push(&mut self, c: char) {
        self.chars.push(c);
    }
}

impl std::ops::Index<usize> for Grapheme {
    type Output = char;
    fn index(&self, i: usize) -> &char {
        &self.chars[i]
    }
}

impl fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chars.iter()).finish()
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromIterator<char> for Grapheme {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Grapheme {
        Grapheme { chars: iter.into_iter().collect() }
    }
}

// === Character classes ===

#[inline]
fn is_ri(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

#[inline]
fn is_hang_l(c: char) -> bool {
    matches!(c as u32, 0x1100..=0x115F | 0xA960..=0xA97C)
}

#[inline]
fn is_hang_v(c: char) -> bool {
    matches!(c as u32, 0x1160..=0x11A7 | 0xD7B0..=0xD7C6)
}

#[inline]
fn is_hang_t(c: char) -> bool {
    matches!(c as u32, 0x11A8..=0x11FF | 0xD7CB..=0xD7FB)
}

/// Precomposed LV syllable (trailing-jamo slot empty).
#[inline]
fn is_hang_lv(c: char) -> bool {
    let cp = c as u32;
    (0xAC00..0xAC00 + 11172).contains(&cp) && (cp - 0xAC00) % 28 == 0
}

/// Precomposed LVT syllable.
#[inline]
fn is_hang_lvt(c: char) -> bool {
    let cp = c as u32;
    (0xAC00..0xAC00 + 11172).contains(&cp) && (cp - 0xAC00) % 28 != 0
}

#[inline]
fn is_extend_or_mark(c: char) -> bool {
    EXTEND.matches(c) || SPACING_MARK.matches(c)
}

#[inline]
fn is_control(c: char) -> bool {
    CONTROL.matches(c)
}

// === Decoding ===

/// Decode the grapheme cluster at the front of `input`, returning the
/// cluster and how many bytes of `input` it covers.
///
/// # Panics
///
/// Decoding from empty input is a contract violation.
pub fn decode_grapheme(input: &str) -> (Grapheme, usize) {
    let mut chars = input.char_indices();
    let (_, first) = chars.next().expect("decode_grapheme on empty input");
    let mut g = Grapheme::new();
    g.push(first);
    let mut end = first.len_utf8();

    // Helper: current lookahead character, if any.
    macro_rules! peek {
        () => {
            input[end..].chars().next()
        };
    }
    macro_rules! eat {
        ($c:expr) => {{
            g.push($c);
            end += $c.len_utf8();
        }};
    }

    if first == '\r' {
        if let Some('\n') = peek!() {
            eat!('\n');
        }
        return (g, end);
    }
    if is_control(first) {
        return (g, end);
    }

    if is_ri(first) {
        if let Some(c) = peek!() {
            if is_ri(c) {
                eat!(c);
            }
        }
    } else if is_hang_l(first) {
        // L: accept L, V, LV, LVT; V: accept V, T; LVT: accept T.
        let mut state = 'L';
        while let Some(c) = peek!() {
            state = match state {
                'L' if is_hang_l(c) => 'L',
                'L' if is_hang_v(c) || is_hang_lv(c) => 'V',
                'L' if is_hang_lvt(c) => 'T',
                'V' if is_hang_v(c) => 'V',
                'V' | 'T' if is_hang_t(c) => 'T',
                _ => break,
            };
            eat!(c);
        }
    } else if is_hang_v(first) || is_hang_lv(first) {
        let mut state = 'V';
        while let Some(c) = peek!() {
            state = match state {
                'V' if is_hang_v(c) => 'V',
                'V' | 'T' if is_hang_t(c) => 'T',
                _ => break,
            };
            eat!(c);
        }
    } else if is_hang_lvt(first) || is_hang_t(first) {
        while let Some(c) = peek!() {
            if !is_hang_t(c) {
                break;
            }
            eat!(c);
        }
    }

    // Trailing extension: combining marks and spacing marks attach.
    while let Some(c) = peek!() {
        if !is_extend_or_mark(c) {
            break;
        }
        eat!(c);
    }
    (g, end)
}

/// Iterator over the grapheme clusters of a string.
pub struct Graphemes<'a> {
    rest: &'a str,
}

impl Iterator for Graphemes<'_> {
    type Item = Grapheme;

    fn next(&mut self) -> Option<Grapheme> {
        if self.rest.is_empty() {
            return None;
        }
        let (g, n) = decode_grapheme(self.rest);
        self.rest = &self.rest[n..];
        Some(g)
    }
}

/// Split a string into grapheme clusters.
pub fn graphemes(s: &str) -> Graphemes<'_> {
    Graphemes { rest: s }
}

/// Number of grapheme clusters in a string.
pub fn grapheme_count(s: &str) -> usize {
    graphemes(s).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(s: &str) -> Vec<String> {
        graphemes(s).map(|g| g.to_string()).collect()
    }

    #[test]
    fn space_with_combining_mark() {
        let got = clusters(" \u{0020}\u{0308} ");
        assert_eq!(got, [" ", "\u{0020}\u{0308}", " "]);
    }

    #[test]
    fn crlf_is_one_cluster() {
        assert_eq!(clusters("a\r\nb"), ["a", "\r\n", "b"]);
        assert_eq!(clusters("\r\r\n"), ["\r", "\r\n"]);
    }

    #[test]
    fn control_terminates_without_extension() {
        // A combining mark after a control char starts its own cluster.
        assert_eq!(clusters("\t\u{0308}"), ["\t", "\u{0308}"]);
        assert_eq!(clusters("\r\u{0308}"), ["\r", "\u{0308}"]);
    }

    #[test]
    fn regional_indicators_pair_up() {
        // Four RI symbols make two flags.
        let s = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
        let got = clusters(s);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], "\u{1F1E9}\u{1F1EA}");
        assert_eq!(got[1], "\u{1F1EB}\u{1F1F7}");
    }

    #[test]
    fn hangul_jamo_form_one_cluster() {
        // L V T in jamo form.
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}x"), ["\u{1100}\u{1161}\u{11A8}", "x"]);
        // Precomposed LV plus trailing T.
        assert_eq!(clusters("\u{AC00}\u{11A8}"), ["\u{AC00}\u{11A8}"]);
        // LVT does not take a V.
        assert_eq!(clusters("\u{AC01}\u{1161}").len(), 2);
    }

    #[test]
    fn stacked_marks_stay_attached() {
        assert_eq!(clusters("e\u{0301}\u{0316}f"), ["e\u{0301}\u{0316}", "f"]);
    }

    #[test]
    fn spacing_marks_attach() {
        // U+0903 DEVANAGARI SIGN VISARGA is a spacing mark.
        assert_eq!(clusters("\u{0915}\u{0903}"), ["\u{0915}\u{0903}"]);
    }

    #[test]
    fn grapheme_value_semantics() {
        let (g, _) = decode_grapheme("a\u{0308}\u{0301}\u{0316}\u{0300}rest");
        assert_eq!(g.len(), 5);
        let copy = g.clone();
        assert_eq!(copy, g);
        assert_eq!(copy[0], 'a');
        assert_eq!(grapheme_count("a\u{0308}\u{0301}\u{0316}\u{0300}rest"), 5);
    }

    #[test]
    #[should_panic(expected = "empty input")]
    fn empty_input_is_contract_violation() {
        let _ = decode_grapheme("");
    }
}
