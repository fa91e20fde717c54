use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use token_trie::{AsciiReduxTrie, AsciiTrie, Bytes, LinkedTrie, MapTrie, WordSet};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn words(count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..100);
            (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
        })
        .collect()
}

fn load<T: WordSet>(mut trie: T, words: &[Vec<u8>]) -> T {
    for w in words {
        trie.insert(w).unwrap();
    }
    trie
}

fn hits<T: WordSet>(trie: &T, words: &[Vec<u8>]) -> usize {
    words.iter().filter(|w| trie.contains(black_box(w))).count()
}

fn bench_insert(c: &mut Criterion) {
    let words = words(2_000);
    let mut group = c.benchmark_group("insert");
    group.bench_function("map", |b| b.iter(|| load(MapTrie::new(Bytes), black_box(&words))));
    group.bench_function("linked", |b| b.iter(|| load(LinkedTrie::new(Bytes), black_box(&words))));
    group.bench_function("ascii", |b| b.iter(|| load(AsciiTrie::new(), black_box(&words))));
    group.bench_function("ascii_redux", |b| {
        b.iter(|| load(AsciiReduxTrie::new(), black_box(&words)))
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let words = words(2_000);
    let map = load(MapTrie::new(Bytes), &words);
    let linked = load(LinkedTrie::new(Bytes), &words);
    let ascii = load(AsciiTrie::new(), &words);
    let redux = load(AsciiReduxTrie::new(), &words);

    let mut group = c.benchmark_group("contains");
    group.bench_function("map", |b| b.iter(|| hits(&map, &words)));
    group.bench_function("linked", |b| b.iter(|| hits(&linked, &words)));
    group.bench_function("ascii", |b| b.iter(|| hits(&ascii, &words)));
    group.bench_function("ascii_redux", |b| b.iter(|| hits(&redux, &words)));
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
