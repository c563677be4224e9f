// normalize_test.rs - Integration tests for the normalization engine.

use std::borrow::Cow;

use unicore::norm::{
    combining_class, compose_jamo, is_normalized, nfc, nfd, nfkc, nfkd, normalize, Form,
};

const FORMS: [Form; 4] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd];

fn corpus() -> Vec<String> {
    vec![
        "".to_string(),
        "plain ascii".to_string(),
        "A\u{0308}ffin".to_string(),
        "\u{00C4}ffin".to_string(),
        "2\u{00B9}\u{2070}".to_string(),
        "q\u{0307}\u{0323}".to_string(),
        "\u{1E0B}\u{0323}".to_string(),
        "\u{0112}\u{0300}".to_string(),
        "\u{AC01}\u{AC00}".to_string(),
        "\u{1100}\u{1161}\u{11A8}".to_string(),
        "\u{FB03}\u{FB04}".to_string(),
        "a\u{0300}\u{0317}\u{0301}b".to_string(),
        "\u{03B1}\u{0345}\u{0301}".to_string(),
        "\u{212B}ngstr\u{00F6}m".to_string(),
    ]
}

// === Concrete scenarios ===

#[test]
fn nfc_composes() {
    assert_eq!(nfc("A\u{0308}ffin"), "\u{00C4}ffin");
}

#[test]
fn nfd_decomposes() {
    assert_eq!(nfd("\u{00C4}ffin"), "A\u{0308}ffin");
}

#[test]
fn nfkd_flattens_superscripts() {
    assert_eq!(nfkd("2\u{00B9}\u{2070}"), "210");
}

#[test]
fn nfkc_flattens_ligatures() {
    assert_eq!(nfkc("\u{FB03}n"), "ffin");
}

#[test]
fn angstrom_sign_becomes_a_ring() {
    assert_eq!(nfc("\u{212B}"), "\u{00C5}");
    assert_eq!(nfd("\u{212B}"), "A\u{030A}");
}

// === Laws ===

#[test]
fn idempotence_over_corpus() {
    for form in FORMS {
        for s in corpus() {
            let once = normalize(form, &s).into_owned();
            assert_eq!(normalize(form, &once), once, "{:?} of {:?}", form, s);
            assert!(is_normalized(form, &once), "{:?} of {:?}", form, s);
        }
    }
}

#[test]
fn composition_of_forms() {
    for s in corpus() {
        let d = nfd(&s).into_owned();
        assert_eq!(nfc(&d).into_owned(), nfc(&s).into_owned(), "NFC∘NFD on {:?}", s);
        let c = nfc(&s).into_owned();
        assert_eq!(nfd(&c).into_owned(), nfd(&s).into_owned(), "NFD∘NFC on {:?}", s);
    }
}

#[test]
fn already_normalized_is_identity_without_allocation() {
    for form in FORMS {
        for s in corpus() {
            let once = normalize(form, &s).into_owned();
            match normalize(form, &once) {
                Cow::Borrowed(b) => assert_eq!(b, once),
                Cow::Owned(_) => panic!("{:?} reallocated normalized input {:?}", form, once),
            }
        }
    }
}

// === Hangul ===

#[test]
fn jamo_composition_spot_values() {
    assert_eq!(compose_jamo(0x1100, 0x1161, None), Some(0xAC00));
    assert_eq!(compose_jamo(0x1100, 0x1161, Some(0x11A8)), Some(0xAC01));
}

#[test]
fn hangul_syllables_round_trip() {
    for s in ["\u{AC00}", "\u{AC01}", "\u{D7A3}", "\u{B098}\u{B77C}"] {
        let d = nfd(s).into_owned();
        assert_ne!(d, s);
        assert_eq!(nfc(&d), s);
    }
}

// === Combining classes ===

#[test]
fn combining_class_spot_values() {
    assert_eq!(combining_class(0x05BDu32), 22);
    assert_eq!(combining_class(0x0300u32), 230);
    assert_eq!(combining_class(0x0317u32), 220);
    assert_eq!(combining_class(0x1939u32), 222);
    assert_eq!(combining_class('x'), 0);
    assert_eq!(combining_class(0x3099u32), 8);
}

#[test]
fn reordering_is_stable_within_a_class() {
    // Two class-230 marks keep their relative order; the 220 mark moves
    // ahead of both.
    assert_eq!(nfd("a\u{0300}\u{0301}\u{0317}"), "a\u{0317}\u{0300}\u{0301}");
}
