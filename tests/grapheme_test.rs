// grapheme_test.rs - Integration tests for grapheme cluster decoding.

use unicore::grapheme::{decode_grapheme, grapheme_count, graphemes, Grapheme};

fn clusters(s: &str) -> Vec<String> {
    graphemes(s).map(|g| g.to_string()).collect()
}

#[test]
fn spaces_and_combining_mark() {
    // Three user-perceived characters: space, space+diaeresis, space.
    assert_eq!(clusters(" \u{0020}\u{0308} "), [" ", "\u{0020}\u{0308}", " "]);
}

#[test]
fn ascii_is_one_cluster_per_char() {
    assert_eq!(grapheme_count("hello"), 5);
    assert_eq!(clusters("ab"), ["a", "b"]);
}

#[test]
fn crlf_and_bare_newlines() {
    assert_eq!(clusters("a\r\nb"), ["a", "\r\n", "b"]);
    assert_eq!(clusters("a\nb"), ["a", "\n", "b"]);
    assert_eq!(grapheme_count("\r\n"), 1);
    assert_eq!(grapheme_count("\n\r"), 2);
}

#[test]
fn precomposed_with_marks() {
    assert_eq!(grapheme_count("\u{00E9}\u{0301}"), 1);
    assert_eq!(clusters("e\u{0301}f"), ["e\u{0301}", "f"]);
}

#[test]
fn hangul_sequences() {
    assert_eq!(grapheme_count("\u{1100}\u{1161}\u{11A8}"), 1);
    assert_eq!(grapheme_count("\u{AC00}\u{11A8}"), 1);
    assert_eq!(grapheme_count("\u{1100}\u{1100}\u{1161}"), 1);
    // Syllable then an unrelated letter.
    assert_eq!(grapheme_count("\u{AC00}x"), 2);
}

#[test]
fn regional_indicator_pairs() {
    let de = "\u{1F1E9}\u{1F1EA}";
    assert_eq!(grapheme_count(de), 1);
    assert_eq!(grapheme_count(&de.repeat(3)), 3);
}

#[test]
fn decode_reports_byte_length() {
    let s = "e\u{0301}rest";
    let (g, n) = decode_grapheme(s);
    assert_eq!(g.to_string(), "e\u{0301}");
    assert_eq!(n, "e\u{0301}".len());
    assert_eq!(&s[n..], "rest");
}

#[test]
fn grapheme_collects_and_indexes() {
    let g: Grapheme = "e\u{0301}".chars().collect();
    assert_eq!(g.len(), 2);
    assert_eq!(g[0], 'e');
    assert_eq!(g[1], '\u{0301}');
    assert_eq!(g.as_slice(), ['e', '\u{0301}']);
}

#[test]
fn long_cluster_spills_and_deep_copies() {
    let marks = "\u{0301}\u{0302}\u{0303}\u{0304}\u{0305}\u{0306}";
    let s = format!("a{}b", marks);
    let (g, _) = decode_grapheme(&s);
    assert_eq!(g.len(), 7);
    let copy = g.clone();
    assert_eq!(copy, g);
    assert_eq!(copy.to_string(), format!("a{}", marks));
}
