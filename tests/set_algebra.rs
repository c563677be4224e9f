// set_algebra.rs - Integration tests: CodepointSet laws, trie law,
// source emission round trip, copy-on-write semantics.

use unicore::codegen::PredicateTree;
use unicore::set::{CodepointSet, CODEPOINT_LIMIT};
use unicore::trie::Trie;
use unicore::uint24::Uint24Array;

/// Deterministic pseudo-random interval sets.
fn sample_sets() -> Vec<CodepointSet> {
    let mut state = 0x2545F491_4F6CDD1Du64;
    let mut rng = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut sets = Vec::new();
    for n in 1..8usize {
        let mut s = CodepointSet::new();
        for _ in 0..n * 5 {
            let a = (rng() % 0x11_0000) as u32;
            let len = (rng() % 0x400 + 1) as u32;
            s.add(a, (a + len).min(CODEPOINT_LIMIT));
        }
        sets.push(s);
    }
    sets.push(CodepointSet::new());
    sets.push(CodepointSet::any());
    sets.push(CodepointSet::from_intervals(&[(0, 1)]));
    sets
}

fn probes(sets: &[&CodepointSet]) -> Vec<u32> {
    let mut ps = vec![0, 1, 0x7F, 0x80, 0x10FFFF, CODEPOINT_LIMIT - 1];
    for s in sets {
        for iv in s.by_interval() {
            ps.extend([iv.start.saturating_sub(1), iv.start, iv.end - 1, iv.end]);
        }
    }
    ps.retain(|&p| p < CODEPOINT_LIMIT);
    ps
}

// === Algebraic laws ===

#[test]
fn idempotence_and_self_cancellation() {
    for s in sample_sets() {
        assert_eq!(s.union(&s), s);
        assert_eq!(s.intersect(&s), s);
        assert!(s.subtract(&s).is_empty());
    }
}

#[test]
fn union_and_intersection_commute() {
    let sets = sample_sets();
    for a in &sets {
        for b in &sets {
            assert_eq!(a.union(b), b.union(a));
            assert_eq!(a.intersect(b), b.intersect(a));
        }
    }
}

#[test]
fn union_and_intersection_associate() {
    let sets = sample_sets();
    for chunk in sets.chunks(3) {
        if let [a, b, c] = chunk {
            assert_eq!(a.union(b).union(c), a.union(&b.union(c)));
            assert_eq!(a.intersect(b).intersect(c), a.intersect(&b.intersect(c)));
        }
    }
}

#[test]
fn de_morgan() {
    let sets = sample_sets();
    for pair in sets.chunks(2) {
        if let [a, b] = pair {
            assert_eq!(a.union(b).invert(), a.invert().intersect(&b.invert()));
            assert_eq!(a.intersect(b).invert(), a.invert().union(&b.invert()));
        }
    }
}

#[test]
fn pointwise_union_membership() {
    let sets = sample_sets();
    for pair in sets.chunks(2) {
        if let [a, b] = pair {
            let u = a.union(b);
            for p in probes(&[a, b]) {
                assert_eq!(u.contains(p), a.contains(p) || b.contains(p), "cp={:#x}", p);
            }
        }
    }
}

#[test]
fn pointwise_intersection_and_difference() {
    let sets = sample_sets();
    for pair in sets.chunks(2) {
        if let [a, b] = pair {
            let i = a.intersect(b);
            let d = a.subtract(b);
            let x = a.symmetric_difference(b);
            for p in probes(&[a, b]) {
                assert_eq!(i.contains(p), a.contains(p) && b.contains(p), "cp={:#x}", p);
                assert_eq!(d.contains(p), a.contains(p) && !b.contains(p), "cp={:#x}", p);
                assert_eq!(x.contains(p), a.contains(p) != b.contains(p), "cp={:#x}", p);
            }
        }
    }
}

// === Source emission ===

#[test]
fn emitted_predicate_matches_membership() {
    for s in sample_sets() {
        let tree = PredicateTree::build(&s);
        for p in probes(&[&s]) {
            assert_eq!(tree.eval(p), s.contains(p), "cp={:#x}", p);
        }
        // The rendered text exists and names the function.
        let src = s.to_source_code("is_member");
        assert!(src.starts_with("fn is_member(cp: u32) -> bool {"));
    }
}

// === Trie law ===

#[test]
fn set_trie_agrees_over_full_domain() {
    let set = CodepointSet::from_intervals(&[
        (0x41, 0x5B),
        (0x300, 0x370),
        (0x4E00, 0x9FFF),
        (0x1F000, 0x20000),
    ]);
    let trie = Trie::from_set(&set);
    for cp in 0..CODEPOINT_LIMIT {
        assert_eq!(trie.matches(cp), set.contains(cp), "cp={:#x}", cp);
    }
}

// === Copy-on-write ===

#[test]
fn uint24_aliases_until_write() {
    let a = Uint24Array::from_slice(&[42, 36, 100]);
    let mut b = a.clone();
    b.set(0, 11);
    assert_eq!(a.get(0), 42);
    assert_eq!(b.get(0), 11);
}

#[test]
fn set_clone_is_a_value() {
    let a = CodepointSet::from_intervals(&[(100, 200)]);
    let mut b = a.clone();
    b.add(300, 400);
    let c = b.clone();
    b.add(500, 600);
    assert_eq!(a.interval_count(), 1);
    assert_eq!(c.interval_count(), 2);
    assert_eq!(b.interval_count(), 3);
}
