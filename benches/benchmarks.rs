//! Criterion benchmarks for people-search.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

use people_search::{InvertedIndex, Query, QueryEngine, Strategy};

const FIRST: [&str; 8] = ["Tom", "Ann", "Bob", "Kim", "Lee", "Zoe", "Max", "Eva"];
const LAST: [&str; 6] = ["Smith", "Jones", "Brown", "Garcia", "Miller", "Davis"];

/// Build `count` records shaped like `First Last first.last<n>@mail.com`.
fn make_people(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let first = FIRST.choose(&mut rng).unwrap();
            let last = LAST.choose(&mut rng).unwrap();
            let n: u32 = rng.gen_range(0..1000);
            format!("{} {} {}.{}{}{}@mail.com", first, last, first, last, n, i)
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let people = make_people(100_000);

    c.bench_function("build_index_100k", |b| {
        b.iter(|| InvertedIndex::build(&people))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let people = make_people(100_000);
    let index = InvertedIndex::build(&people);
    let engine = QueryEngine::new();

    for strategy in Strategy::VARIANTS {
        let query = Query::from_text(strategy, "tom smith ann");
        let name = format!("resolve_{}_100k", strategy.name().to_lowercase());
        c.bench_function(&name, |b| b.iter(|| engine.search(&index, &query)));
    }
}

criterion_group!(benches, bench_build_index, bench_resolve);
criterion_main!(benches);
