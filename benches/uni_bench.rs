// Criterion benchmark suite for the unicore primitives.
//
// Run: cargo bench
// Specific group: cargo bench -- contains
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unicore::casefold::{icmp, sicmp};
use unicore::norm::{nfc, nfd};
use unicore::props::unicode;
use unicore::set::CodepointSet;
use unicore::trie::Trie;

fn probe_codepoints() -> Vec<u32> {
    // A mix of ASCII, Latin-1, CJK, and astral codepoints.
    (0..2048u32)
        .map(|i| (i * 2654435761) % 0x110000)
        .collect()
}

// ---------------------------------------------------------------------------
// 1. contains -- interval search vs trie lookup
// ---------------------------------------------------------------------------

fn bench_contains(c: &mut Criterion) {
    let letters: CodepointSet = unicode("L").expect("built-in property");
    let trie = Trie::from_set(&letters);
    let probes = probe_codepoints();

    let mut group = c.benchmark_group("contains");
    group.bench_function("set_binary_search", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &cp in &probes {
                hits += usize::from(letters.contains(black_box(cp)));
            }
            hits
        })
    });
    group.bench_function("trie_lookup", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &cp in &probes {
                hits += usize::from(trie.matches(black_box(cp)));
            }
            hits
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. build -- trie construction from a large property set
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let letters: CodepointSet = unicode("L").expect("built-in property");
    c.bench_function("build_letter_trie", |b| {
        b.iter(|| Trie::from_set(black_box(&letters)))
    });
}

// ---------------------------------------------------------------------------
// 3. normalize -- already-normalized vs rewriting inputs
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let ascii = "the quick brown fox jumps over the lazy dog".repeat(8);
    let mixed = "Zwo\u{0308}lf Boxka\u{0308}mpfer jagen Viktor quer ".repeat(8);

    let mut group = c.benchmark_group("normalize");
    group.bench_function("nfc_ascii_identity", |b| b.iter(|| nfc(black_box(&ascii))));
    group.bench_function("nfc_rewrites", |b| b.iter(|| nfc(black_box(&mixed))));
    group.bench_function("nfd_rewrites", |b| {
        let composed = nfc(&mixed).into_owned();
        b.iter(|| nfd(black_box(&composed)))
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. compare -- case-insensitive comparison
// ---------------------------------------------------------------------------

fn bench_compare(c: &mut Criterion) {
    let a = "Stra\u{00DF}e und Strassenbahn in Gro\u{00DF}stadt".repeat(4);
    let b2 = a.to_uppercase();

    let mut group = c.benchmark_group("compare");
    group.bench_function("sicmp", |b| b.iter(|| sicmp(black_box(&a), black_box(&b2))));
    group.bench_function("icmp", |b| b.iter(|| icmp(black_box(&a), black_box(&b2))));
    group.finish();
}

criterion_group!(benches, bench_contains, bench_build, bench_normalize, bench_compare);
criterion_main!(benches);
