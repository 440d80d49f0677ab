//! Benchmark – `jsmin::minify`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Produce a deterministic script of at least `target_len` bytes by repeating
/// a block that exercises every branch of the minifier: comments,
/// indentation, string and regex literals, and line breaks it must keep.
fn make_script(target_len: usize) -> String {
    const BLOCK: &str = r#"
/**
 * Block comment that the minifier drops entirely.
 */
function step(state, input) {
    // line comment
    var key = "item:" + input.id;   // trailing comment
    if (/^\d+$/.test(key)) {
        state.count = state.count + 1;
    }
    return state.items
        .filter(function (x) { return x !== 'skip'; })
        .length / 2
}
"#;
    let mut s = String::with_capacity(target_len + BLOCK.len());
    while s.len() < target_len {
        s.push_str(BLOCK);
    }
    s
}

fn bench_minify(c: &mut Criterion) {
    let mut group = c.benchmark_group("minify");

    for &len in &[1_000usize, 100_000, 1_000_000] {
        let script = make_script(len);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::new("str", len), &script, |b, s| {
            b.iter(|| {
                let out = jsmin::minify(black_box(s)).expect("benchmark script minifies");
                black_box(out);
            });
        });
        group.bench_with_input(BenchmarkId::new("bytes", len), &script, |b, s| {
            b.iter(|| {
                let out = jsmin::minify_bytes(black_box(s.as_bytes()))
                    .expect("benchmark script minifies");
                black_box(out);
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_minify }
criterion_main!(benches);
