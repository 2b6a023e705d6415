use criterion::{criterion_group, criterion_main, Criterion};
use scradle::Dawg;

const WORDS: &[&str] = &[
    "AS", "AT", "TA", "SA", "CAT", "CATS", "ACT", "ACTS", "TAS", "SAC", "CAS", "TACT", "SCAT",
    "MORGUE", "MORGUES", "ORGUE", "ORGUES", "ENTAMEE", "ENTAME", "NOTEE", "TENTE",
];
const WORDFILE: &str = "wordlists/ods8_complete.txt";

fn bench_from_words() {
    let _dawg = Dawg::from_words(WORDS).unwrap();
}

fn bench_contains(c: &mut Criterion, name: &str, dawg: &Dawg, words: &[&str]) {
    c.bench_function(name, |b| {
        b.iter(|| words.iter().filter(|word| dawg.contains(word)).count())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("dawg.from_words", |b| b.iter(bench_from_words));
    let dawg = Dawg::from_words(WORDS).unwrap();
    bench_contains(c, "dawg.contains.small", &dawg, WORDS);
    c.bench_function("dawg.words_with_prefix", |b| {
        b.iter(|| dawg.words_with_prefix("CA"))
    });
}

fn slow_benchmarks(c: &mut Criterion) {
    c.bench_function("dawg.from_file", |b| {
        b.iter(|| Dawg::from_file(WORDFILE).unwrap())
    });
    let dawg = Dawg::from_file(WORDFILE).unwrap();
    bench_contains(
        c,
        "dawg.contains.ods8",
        &dawg,
        &["DESHYPOTHEQUIEZ", "ENTAMEE", "MORGUE", "XYZZY", "ZYTHUMS"],
    );
}

criterion_group!(benches, criterion_benchmark);

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
