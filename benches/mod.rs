use criterion::{criterion_group, criterion_main};


use collection::{benchmark_add_and_remove, benchmark_slicing};
use matcher::{benchmark_match_against, benchmark_match_once_over_the_library};

criterion_group!(
    benches,
    benchmark_add_and_remove,
    benchmark_slicing,
    benchmark_match_against,
    benchmark_match_once_over_the_library
);
criterion_main!(benches);
