// norm.rs - Unicode normalization: NFC, NFD, NFKC, NFKD.
//
// The entry point scans for the smallest window that actually violates
// the requested form (Quick_Check + canonical ordering anchors) and
// rewrites only that window: decompose, canonically reorder, and for
// the composed forms recompose, with Hangul syllables handled
// algorithmically throughout. Already-normalized input is returned
// borrowed, without allocation.

use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::compressed::decode_intervals;
use crate::tables;
use crate::trie::{Trie, TrieBuilder, CODEPOINT_STAGES};

// === Hangul constants ===

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Removal marker used during recomposition.
const SENTINEL: u32 = u32::MAX;

/// A normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl Form {
    /// Compatibility decompositions apply.
    fn compat(self) -> bool {
        matches!(self, Form::Nfkc | Form::Nfkd)
    }

    /// Recomposition applies.
    fn composed(self) -> bool {
        matches!(self, Form::Nfc | Form::Nfkc)
    }

    fn quick_check(self) -> &'static Trie {
        match self {
            Form::Nfc => &NFC_QC,
            Form::Nfd => &NFD_QC,
            Form::Nfkc => &NFKC_QC,
            Form::Nfkd => &NFKD_QC,
        }
    }
}

// === Lazily built lookup tries ===

static CCC_TRIE: Lazy<Trie> = Lazy::new(|| {
    let runs = tables::ccc::COMBINING_CLASS_RUNS
        .iter()
        .map(|&(a, b, c)| (a, b, u64::from(c)));
    Trie::from_runs(runs, 8, 0).expect("combining class runs ascend")
});

fn qc_trie(stream: &[u8]) -> Trie {
    Trie::from_set(&decode_intervals(stream).expect("embedded stream decodes"))
}

static NFD_QC: Lazy<Trie> = Lazy::new(|| qc_trie(tables::qc::NFD_QC_NOT_ALLOWED));
static NFC_QC: Lazy<Trie> = Lazy::new(|| qc_trie(tables::qc::NFC_QC_NOT_ALLOWED));
static NFKD_QC: Lazy<Trie> = Lazy::new(|| qc_trie(tables::qc::NFKD_QC_NOT_ALLOWED));
static NFKC_QC: Lazy<Trie> = Lazy::new(|| qc_trie(tables::qc::NFKC_QC_NOT_ALLOWED));

/// first codepoint -> (offset << 16 | count) into COMPOSITION_PAIRS.
static COMPOSE_JUMP: Lazy<Trie> = Lazy::new(|| {
    let pairs = tables::comp::COMPOSITION_PAIRS;
    let mut b = TrieBuilder::new(&CODEPOINT_STAGES, 32, 0);
    let mut i = 0;
    while i < pairs.len() {
        let first = pairs[i].0;
        let mut j = i;
        while j < pairs.len() && pairs[j].0 == first {
            j += 1;
        }
        b.put(first, ((i as u64) << 16) | (j - i) as u64)
            .expect("composition pairs sorted by first codepoint");
        i = j;
    }
    b.build()
});

// === Public per-codepoint queries ===

/// Canonical_Combining_Class of a codepoint.
#[inline]
pub fn combining_class<C: Into<u32>>(c: C) -> u8 {
    CCC_TRIE.get(c.into()) as u8
}

/// Whether `c` can appear in text already normalized to `form`.
/// Quick_Check MAYBE counts as not allowed, trading extra renormalizing
/// work for a one-bit table.
#[inline]
pub fn allowed_in(form: Form, c: char) -> bool {
    !form.quick_check().matches(c)
}

/// Full canonical decomposition, if any (Hangul excluded).
pub fn canonical_decomposition(c: char) -> Option<&'static [u32]> {
    pool_lookup(tables::decomp::CANONICAL_KEYS, c as u32)
}

/// Full compatibility decomposition, if it differs from `c` itself.
pub fn compatibility_decomposition(c: char) -> Option<&'static [u32]> {
    pool_lookup(tables::decomp::COMPAT_KEYS, c as u32)
        .or_else(|| pool_lookup(tables::decomp::CANONICAL_KEYS, c as u32))
}

fn pool_lookup(keys: &[(u32, u32)], cp: u32) -> Option<&'static [u32]> {
    let i = keys.binary_search_by_key(&cp, |e| e.0).ok()?;
    let off = keys[i].1 as usize;
    let len = tables::decomp::DECOMP_POOL[off] as usize;
    Some(&tables::decomp::DECOMP_POOL[off + 1..off + 1 + len])
}

/// Canonical pairwise composition from the composition table.
fn compose_pair(first: u32, second: u32) -> Option<u32> {
    let v = COMPOSE_JUMP.get(first);
    let count = (v & 0xFFFF) as usize;
    if count == 0 {
        return None;
    }
    let off = (v >> 16) as usize;
    let slice = &tables::comp::COMPOSITION_PAIRS[off..off + count];
    slice
        .binary_search_by_key(&second, |p| p.1)
        .ok()
        .map(|i| slice[i].2)
}

/// Compose two codepoints canonically: table pairs plus algorithmic
/// Hangul L+V and LV+T.
pub fn compose(first: char, second: char) -> Option<char> {
    let (a, b) = (first as u32, second as u32);
    if let Some(c) = compose_pair(a, b) {
        return char::from_u32(c);
    }
    if is_jamo_l(a) && is_jamo_v(b) {
        let s = S_BASE + ((a - L_BASE) * V_COUNT + (b - V_BASE)) * T_COUNT;
        return char::from_u32(s);
    }
    if is_lv_syllable(a) && is_jamo_t(b) {
        return char::from_u32(a + (b - T_BASE));
    }
    None
}

/// Algorithmic Hangul syllable composition from jamo.
pub fn compose_jamo(lead: u32, vowel: u32, trail: Option<u32>) -> Option<u32> {
    if !is_jamo_l(lead) || !is_jamo_v(vowel) {
        return None;
    }
    let lv = S_BASE + ((lead - L_BASE) * V_COUNT + (vowel - V_BASE)) * T_COUNT;
    match trail {
        None => Some(lv),
        Some(t) if is_jamo_t(t) => Some(lv + (t - T_BASE)),
        Some(_) => None,
    }
}

#[inline]
fn is_jamo_l(c: u32) -> bool {
    (L_BASE..L_BASE + L_COUNT).contains(&c)
}

#[inline]
fn is_jamo_v(c: u32) -> bool {
    (V_BASE..V_BASE + V_COUNT).contains(&c)
}

#[inline]
fn is_jamo_t(c: u32) -> bool {
    // T index 0 means "no trailing jamo"; real trail jamo start at T_BASE+1.
    c > T_BASE && c < T_BASE + T_COUNT
}

#[inline]
fn is_hangul_syllable(c: u32) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&c)
}

#[inline]
fn is_lv_syllable(c: u32) -> bool {
    is_hangul_syllable(c) && (c - S_BASE) % T_COUNT == 0
}

// === Normalization ===

/// Normalize to the requested form. Input that is already normalized is
/// returned borrowed.
pub fn normalize(form: Form, input: &str) -> Cow<'_, str> {
    if split_normalized(form, input).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    let mut pos = 0;
    while pos < input.len() {
        match split_normalized(form, &input[pos..]) {
            None => {
                out.push_str(&input[pos..]);
                break;
            }
            Some((a, b)) => {
                out.push_str(&input[pos..pos + a]);
                normalize_segment(form, &input[pos + a..pos + b], &mut out);
                pos += b;
            }
        }
    }
    Cow::Owned(out)
}

pub fn nfc(input: &str) -> Cow<'_, str> {
    normalize(Form::Nfc, input)
}

pub fn nfd(input: &str) -> Cow<'_, str> {
    normalize(Form::Nfd, input)
}

pub fn nfkc(input: &str) -> Cow<'_, str> {
    normalize(Form::Nfkc, input)
}

pub fn nfkd(input: &str) -> Cow<'_, str> {
    normalize(Form::Nfkd, input)
}

/// Quick test without producing output.
pub fn is_normalized(form: Form, input: &str) -> bool {
    split_normalized(form, input).is_none()
}

/// Find the byte window `[s, e)` around the first violation of `form`,
/// widened outward to the nearest stable positions (CCC 0 and allowed
/// in the form). `None` means the whole input is already normalized.
fn split_normalized(form: Form, input: &str) -> Option<(usize, usize)> {
    let mut last_cc = 0u8;
    for (i, ch) in input.char_indices() {
        let cc = combining_class(ch);
        if (cc != 0 && cc < last_cc) || !allowed_in(form, ch) {
            return Some((seek_stable_back(form, input, i), seek_stable_forward(form, input, i)));
        }
        last_cc = cc;
    }
    None
}

#[inline]
fn is_stable(form: Form, ch: char) -> bool {
    combining_class(ch) == 0 && allowed_in(form, ch)
}

fn seek_stable_back(form: Form, input: &str, violation: usize) -> usize {
    input[..violation]
        .char_indices()
        .rev()
        .find(|&(_, ch)| is_stable(form, ch))
        .map_or(0, |(i, _)| i)
}

fn seek_stable_forward(form: Form, input: &str, violation: usize) -> usize {
    let tail = &input[violation..];
    let mut it = tail.char_indices();
    it.next(); // the violating character itself belongs to the window
    for (i, ch) in it {
        if is_stable(form, ch) {
            return violation + i;
        }
    }
    input.len()
}

/// Rewrite one window: decompose, reorder, recompose if requested.
fn normalize_segment(form: Form, segment: &str, out: &mut String) {
    let mut buf: Vec<(u32, u8)> = Vec::with_capacity(segment.len());
    for ch in segment.chars() {
        decompose_into(form, ch, &mut buf);
    }
    canonical_reorder(&mut buf);
    if form.composed() {
        compose_pairs_in_place(&mut buf);
        compose_hangul_in_place(&mut buf);
    }
    for &(cp, _) in &buf {
        if cp != SENTINEL {
            // Every value flowing through the pipeline came from a char,
            // the decomposition pool, or a composition table entry.
            out.push(char::from_u32(cp).expect("tables hold scalar values"));
        }
    }
}

fn decompose_into(form: Form, ch: char, buf: &mut Vec<(u32, u8)>) {
    let cp = ch as u32;
    if is_hangul_syllable(cp) {
        let idx = cp - S_BASE;
        buf.push((L_BASE + idx / N_COUNT, 0));
        buf.push((V_BASE + (idx % N_COUNT) / T_COUNT, 0));
        let t = idx % T_COUNT;
        if t > 0 {
            buf.push((T_BASE + t, 0));
        }
        return;
    }
    let decomp = if form.compat() {
        compatibility_decomposition(ch)
    } else {
        canonical_decomposition(ch)
    };
    match decomp {
        Some(seq) => {
            for &c in seq {
                buf.push((c, combining_class(c)));
            }
        }
        None => buf.push((cp, combining_class(ch))),
    }
}

/// Stable-sort each maximal run of non-zero CCC by class.
fn canonical_reorder(buf: &mut [(u32, u8)]) {
    let mut i = 0;
    while i < buf.len() {
        if buf[i].1 == 0 {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < buf.len() && buf[j].1 != 0 {
            j += 1;
        }
        buf[i..j].sort_by_key(|e| e.1);
        i = j;
    }
}

/// Pairwise canonical composition. A character composes with the last
/// starter unless blocked: accum tracks the highest CCC seen since the
/// starter, and anything at or below it is blocked. Consumed characters
/// become sentinels, removed after the Hangul pass.
fn compose_pairs_in_place(buf: &mut [(u32, u8)]) {
    let n = buf.len();
    let mut start = 0;
    while start < n && buf[start].1 != 0 {
        start += 1;
    }
    while start < n {
        let mut accum: i32 = -1;
        let mut i = start + 1;
        while i < n {
            let cur = i32::from(buf[i].1);
            if cur > accum {
                if let Some(c) = compose_pair(buf[start].0, buf[i].0) {
                    buf[start] = (c, 0);
                    buf[i] = (SENTINEL, 0);
                } else {
                    accum = cur;
                    if cur == 0 {
                        break;
                    }
                }
            } else {
                accum = cur;
                if cur == 0 {
                    break;
                }
            }
            i += 1;
        }
        start = i;
    }
}

/// Algorithmic L+V -> LV and LV+T -> LVT recomposition, in place.
fn compose_hangul_in_place(buf: &mut [(u32, u8)]) {
    let n = buf.len();
    let mut i = 1;
    while i < n {
        let a = buf[i - 1].0;
        let b = buf[i].0;
        if a != SENTINEL && b != SENTINEL {
            if is_jamo_l(a) && is_jamo_v(b) {
                let mut s = S_BASE + ((a - L_BASE) * V_COUNT + (b - V_BASE)) * T_COUNT;
                if i + 1 < n && is_jamo_t(buf[i + 1].0) {
                    s += buf[i + 1].0 - T_BASE;
                    buf[i + 1] = (SENTINEL, 0);
                }
                buf[i - 1] = (s, 0);
                buf[i] = (SENTINEL, 0);
            } else if is_lv_syllable(a) && is_jamo_t(b) {
                buf[i - 1] = (a + (b - T_BASE), 0);
                buf[i] = (SENTINEL, 0);
            }
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccc_spot_values() {
        assert_eq!(combining_class(0x05BDu32), 22);
        assert_eq!(combining_class(0x0300u32), 230);
        assert_eq!(combining_class(0x0317u32), 220);
        assert_eq!(combining_class(0x1939u32), 222);
        assert_eq!(combining_class('a'), 0);
    }

    #[test]
    fn nfc_composes_combining_sequence() {
        assert_eq!(nfc("A\u{0308}ffin"), "\u{00C4}ffin");
    }

    #[test]
    fn nfd_decomposes_precomposed() {
        assert_eq!(nfd("\u{00C4}ffin"), "A\u{0308}ffin");
    }

    #[test]
    fn nfkd_strips_compatibility_forms() {
        assert_eq!(nfkd("2\u{00B9}\u{2070}"), "210");
    }

    #[test]
    fn normalized_input_is_borrowed() {
        let s = "plain ascii text";
        assert!(matches!(nfc(s), Cow::Borrowed(_)));
        assert!(matches!(nfd(s), Cow::Borrowed(_)));
        let composed = "\u{00C4}ffin";
        assert!(matches!(nfc(composed), Cow::Borrowed(_)));
    }

    #[test]
    fn idempotence() {
        let samples = ["A\u{0308}ffin", "\u{FB03}x", "a\u{0300}\u{0317}b", "\u{AC01}"];
        for form in [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd] {
            for s in samples {
                let once = normalize(form, s).into_owned();
                let twice = normalize(form, &once).into_owned();
                assert_eq!(once, twice, "{:?} on {:?}", form, s);
                assert!(is_normalized(form, &once));
            }
        }
    }

    #[test]
    fn nfc_of_nfd_equals_nfc() {
        let samples = ["\u{1E69}", "q\u{0307}\u{0323}", "\u{0112}\u{0300}"];
        for s in samples {
            let via_nfd = nfc(&nfd(s).into_owned()).into_owned();
            assert_eq!(via_nfd, nfc(s).into_owned(), "input {:?}", s);
        }
    }

    #[test]
    fn reordering_sorts_by_combining_class() {
        // 0x0300 has class 230, 0x0317 class 220; NFD puts 220 first.
        assert_eq!(nfd("a\u{0300}\u{0317}"), "a\u{0317}\u{0300}");
        // Already ascending stays put.
        assert_eq!(nfd("a\u{0317}\u{0300}"), "a\u{0317}\u{0300}");
    }

    #[test]
    fn hangul_round_trip() {
        // GAG: U+AC01 = L(0x1100) V(0x1161) T(0x11A8).
        assert_eq!(nfd("\u{AC01}"), "\u{1100}\u{1161}\u{11A8}");
        assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
        assert_eq!(nfc("\u{1100}\u{1161}"), "\u{AC00}");
    }

    #[test]
    fn compose_jamo_spot_values() {
        assert_eq!(compose_jamo(0x1100, 0x1161, None), Some(0xAC00));
        assert_eq!(compose_jamo(0x1100, 0x1161, Some(0x11A8)), Some(0xAC01));
        assert_eq!(compose_jamo(0x41, 0x1161, None), None);
        assert_eq!(compose_jamo(0x1100, 0x1161, Some(0x41)), None);
    }

    #[test]
    fn compose_pairs_and_blocking() {
        assert_eq!(compose('A', '\u{0308}'), Some('\u{00C4}'));
        assert_eq!(compose('q', '\u{0308}'), None);
        // Blocked: a class-220 mark between the starter and the 230 mark
        // with class >= the candidate does not block a higher class...
        // 0x0316 (220) then 0x0301 (230): the acute still composes.
        assert_eq!(nfc("e\u{0316}\u{0301}"), "\u{00E9}\u{0316}");
        // Same class blocks: two acutes, only the first composes.
        assert_eq!(nfc("e\u{0301}\u{0301}"), "\u{00E9}\u{0301}");
    }

    #[test]
    fn singleton_decompositions_never_recompose() {
        // U+212A KELVIN SIGN decomposes to K and must stay K under NFC.
        assert_eq!(nfc("\u{212A}"), "K");
        assert_eq!(nfd("\u{212A}"), "K");
    }

    #[test]
    fn decomposition_lookups() {
        assert_eq!(canonical_decomposition('\u{00C4}'), Some(&[0x41, 0x308][..]));
        assert_eq!(canonical_decomposition('A'), None);
        assert_eq!(compatibility_decomposition('\u{00B9}'), Some(&[0x31][..]));
        // Compatibility falls back to canonical data.
        assert_eq!(compatibility_decomposition('\u{00C4}'), Some(&[0x41, 0x308][..]));
    }

    #[test]
    fn allowed_in_treats_maybe_as_no() {
        // U+0308 is Quick_Check MAYBE for NFC: not allowed here.
        assert!(!allowed_in(Form::Nfc, '\u{0308}'));
        assert!(allowed_in(Form::Nfd, '\u{0308}'));
        assert!(allowed_in(Form::Nfc, 'A'));
    }
}
