// props.rs - Property sets by name.
//
// Names are matched loosely: ASCII case-insensitive with spaces,
// hyphens and underscores ignored, so "White_Space", "whitespace" and
// "WHITE SPACE" resolve identically. Built-in tables cover the
// General_Category values, their long names, a set of composed aliases
// and binary properties; anything else (Script and Block data, say) can
// be loaded at run time through register_property.

use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::compressed::decode_intervals;
use crate::error::Error;
use crate::set::{CodepointSet, CODEPOINT_LIMIT};
use crate::tables;
use crate::trie::Trie;

/// Cap on user-registered properties.
const USER_PROPERTY_LIMIT: usize = 32;

struct UserProperty {
    name: String,
    intervals: Vec<(u32, u32)>,
}

static USER_PROPERTIES: Mutex<Vec<UserProperty>> = Mutex::new(Vec::new());

/// Long General_Category names, normalized and sorted for binary search.
static GC_LONG_NAMES: &[(&str, &str)] = &[
    ("closepunctuation", "pe"),
    ("connectorpunctuation", "pc"),
    ("control", "cc"),
    ("currencysymbol", "sc"),
    ("dashpunctuation", "pd"),
    ("decimalnumber", "nd"),
    ("enclosingmark", "me"),
    ("finalpunctuation", "pf"),
    ("format", "cf"),
    ("initialpunctuation", "pi"),
    ("letternumber", "nl"),
    ("lowercaseletter", "ll"),
    ("mathsymbol", "sm"),
    ("modifierletter", "lm"),
    ("modifiersymbol", "sk"),
    ("nonspacingmark", "mn"),
    ("openpunctuation", "ps"),
    ("otherletter", "lo"),
    ("othernumber", "no"),
    ("otherpunctuation", "po"),
    ("othersymbol", "so"),
    ("paragraphseparator", "zp"),
    ("privateuse", "co"),
    ("spaceseparator", "zs"),
    ("spacingmark", "mc"),
    ("surrogate", "cs"),
    ("titlecaseletter", "lt"),
    ("unassigned", "cn"),
    ("uppercaseletter", "lu"),
];

/// Strip ' ', '-', '_' and lowercase; reject empty or non-ASCII names.
fn normalize_property_name(name: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(name.len());
    for b in name.bytes() {
        if b == b' ' || b == b'-' || b == b'_' {
            continue;
        }
        if b >= 0x80 {
            return Err(Error::InvalidPropertyName);
        }
        out.push(b.to_ascii_lowercase() as char);
    }
    if out.is_empty() {
        return Err(Error::InvalidPropertyName);
    }
    Ok(out)
}

/// Resolve a property name to its codepoint set.
pub fn unicode(name: &str) -> Result<CodepointSet, Error> {
    let key = normalize_property_name(name)?;
    resolve(&key).ok_or_else(|| Error::UnknownProperty(name.to_string()))
}

/// Register a user-defined property. The name resolves through
/// [`unicode`] after every built-in; re-registering a name is an error.
pub fn register_property(name: &str, intervals: &[(u32, u32)]) -> Result<(), Error> {
    let key = normalize_property_name(name)?;
    debug_assert!(intervals.iter().all(|&(a, b)| a < b && b <= CODEPOINT_LIMIT));
    let mut props = USER_PROPERTIES.lock().expect("property registry poisoned");
    if props.iter().any(|p| p.name == key) || props.len() >= USER_PROPERTY_LIMIT {
        return Err(Error::PropertyLimit);
    }
    props.push(UserProperty { name: key, intervals: intervals.to_vec() });
    Ok(())
}

fn gc_set(code: &str) -> Option<CodepointSet> {
    tables::gc::GENERAL_CATEGORIES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, stream)| decode_intervals(stream).expect("embedded stream decodes"))
}

fn binary_set(stream: &[u8]) -> CodepointSet {
    decode_intervals(stream).expect("embedded stream decodes")
}

fn union_of(codes: &[&str]) -> Option<CodepointSet> {
    let mut out = CodepointSet::new();
    for code in codes {
        out = out.union(&gc_set(code)?);
    }
    Some(out)
}

fn resolve(key: &str) -> Option<CodepointSet> {
    if key.len() == 2 {
        if let Some(set) = gc_set(key) {
            return Some(set);
        }
    }
    if let Ok(i) = GC_LONG_NAMES.binary_search_by_key(&key, |e| e.0) {
        return gc_set(GC_LONG_NAMES[i].1);
    }
    match key {
        "any" => Some(CodepointSet::any()),
        "ascii" => Some(CodepointSet::from_intervals(&[(0, 0x80)])),
        "l" | "letter" => union_of(&["lu", "ll", "lt", "lo", "lm"]),
        "lc" | "casedletter" => union_of(&["lu", "ll", "lt"]),
        "m" | "mark" => union_of(&["mn", "mc", "me"]),
        "n" | "number" => union_of(&["nd", "nl", "no"]),
        "p" | "punctuation" => union_of(&["pc", "pd", "ps", "pe", "pi", "pf", "po"]),
        "s" | "symbol" => union_of(&["sm", "sc", "sk", "so"]),
        "z" | "separator" => union_of(&["zs", "zl", "zp"]),
        "c" | "other" => union_of(&["cc", "cf", "co", "cs", "cn"]),
        "alpha" | "alphabetic" => {
            Some(union_of(&["lu", "ll", "lt", "lo", "lm"])?.union(&gc_set("nl")?))
        }
        "graphical" => {
            let alpha = resolve("alphabetic")?;
            let rest = [resolve("mark")?, resolve("number")?, resolve("punctuation")?,
                resolve("symbol")?, gc_set("zs")?];
            Some(rest.iter().fold(alpha, |acc, s| acc.union(s)))
        }
        "whitespace" | "space" => Some(binary_set(tables::binary::WHITE_SPACE)),
        "hexdigit" => Some(binary_set(tables::binary::HEX_DIGIT)),
        "asciihexdigit" => Some(binary_set(tables::binary::ASCII_HEX_DIGIT)),
        "graphemeextend" => Some(binary_set(tables::binary::GRAPHEME_EXTEND)),
        _ => {
            let props = USER_PROPERTIES.lock().expect("property registry poisoned");
            props.iter().find(|p| p.name == key).map(|p| {
                CodepointSet::from_intervals(&p.intervals)
            })
        }
    }
}

// === Classification predicates ===

fn predicate_trie(name: &str) -> Trie {
    Trie::from_set(&unicode(name).expect("built-in property"))
}

static ALPHA_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("alphabetic"));
static MARK_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("mark"));
static NUMBER_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("number"));
static PUNCT_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("punctuation"));
static SYMBOL_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("symbol"));
static SPACE_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("whitespace"));
static GRAPHICAL_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("graphical"));
static CONTROL_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("control"));
static FORMAT_TRIE: Lazy<Trie> = Lazy::new(|| predicate_trie("format"));

pub fn is_alpha(c: char) -> bool {
    ALPHA_TRIE.matches(c)
}

pub fn is_mark(c: char) -> bool {
    MARK_TRIE.matches(c)
}

pub fn is_number(c: char) -> bool {
    NUMBER_TRIE.matches(c)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCT_TRIE.matches(c)
}

pub fn is_symbol(c: char) -> bool {
    SYMBOL_TRIE.matches(c)
}

pub fn is_space(c: char) -> bool {
    SPACE_TRIE.matches(c)
}

pub fn is_graphical(c: char) -> bool {
    GRAPHICAL_TRIE.matches(c)
}

pub fn is_control(c: char) -> bool {
    CONTROL_TRIE.matches(c)
}

pub fn is_format(c: char) -> bool {
    FORMAT_TRIE.matches(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_name_matching() {
        let a = unicode("White_Space").unwrap();
        let b = unicode("white space").unwrap();
        let c = unicode("WHITESPACE").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(a.contains(' '));
        assert!(a.contains('\t'));
        assert!(!a.contains('x'));
    }

    #[test]
    fn gc_short_and_long_names_agree() {
        assert_eq!(unicode("Lu").unwrap(), unicode("Uppercase_Letter").unwrap());
        assert_eq!(unicode("nd").unwrap(), unicode("Decimal_Number").unwrap());
        assert!(unicode("Lu").unwrap().contains('A'));
        assert!(!unicode("Lu").unwrap().contains('a'));
    }

    #[test]
    fn composed_letter_alias() {
        let letter = unicode("L").unwrap();
        for code in ["lu", "ll", "lt", "lo", "lm"] {
            let part = unicode(code).unwrap();
            assert!(part.subtract(&letter).is_empty(), "{} not within L", code);
        }
        assert!(letter.contains('A'));
        assert!(letter.contains('中'));
        assert!(!letter.contains('1'));
    }

    #[test]
    fn any_and_ascii() {
        assert_eq!(unicode("any").unwrap().len(), CODEPOINT_LIMIT as usize);
        let ascii = unicode("ASCII").unwrap();
        assert_eq!(ascii.len(), 0x80);
        assert!(ascii.contains(0x7Fu32));
        assert!(!ascii.contains(0x80u32));
    }

    #[test]
    fn unknown_name_is_reported() {
        assert_eq!(
            unicode("Klingon"),
            Err(Error::UnknownProperty("Klingon".to_string()))
        );
    }

    #[test]
    fn invalid_names_are_reported() {
        assert_eq!(unicode(""), Err(Error::InvalidPropertyName));
        assert_eq!(unicode("_-_"), Err(Error::InvalidPropertyName));
        assert_eq!(unicode("caf\u{00E9}"), Err(Error::InvalidPropertyName));
    }

    #[test]
    fn user_registered_property_resolves() {
        register_property("vowels latin", &[(0x61, 0x62), (0x65, 0x66), (0x69, 0x6A)])
            .unwrap();
        let v = unicode("Vowels-Latin").unwrap();
        assert!(v.contains('a'));
        assert!(!v.contains('b'));
        assert_eq!(
            register_property("VOWELS_LATIN", &[(0, 1)]),
            Err(Error::PropertyLimit)
        );
    }

    #[test]
    fn predicates_spot_values() {
        assert!(is_alpha('A'));
        assert!(is_alpha('中'));
        assert!(!is_alpha('1'));
        assert!(is_number('3'));
        assert!(is_number('\u{0663}'));
        assert!(is_mark('\u{0301}'));
        assert!(is_space(' '));
        assert!(!is_space('x'));
        assert!(is_punctuation('!'));
        assert!(is_symbol('+'));
        assert!(is_graphical('A'));
        assert!(!is_graphical('\u{0007}'));
        assert!(is_control('\u{0007}'));
        assert!(is_format('\u{200E}'));
    }
}
