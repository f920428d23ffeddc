// this_file: benches/arc_layout.rs

//! Layout pass performance benchmarks.

use arctext::{Align, ArcLayout, LayoutRequest, UniformMetrics};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_layout_lengths(c: &mut Criterion) {
    let metrics = UniformMetrics::new(9.6, 19.2);
    let mut group = c.benchmark_group("arc_layout");

    for len in [5usize, 20, 80] {
        let text: String = "CIRCULAR TEXT ".chars().cycle().take(len).collect();
        let request = LayoutRequest::new(text, 400.0);
        group.bench_with_input(BenchmarkId::from_parameter(len), &request, |b, request| {
            b.iter(|| ArcLayout::compute(black_box(request), &metrics).unwrap());
        });
    }

    group.finish();
}

fn bench_layout_alignments(c: &mut Criterion) {
    let metrics = UniformMetrics::new(9.6, 19.2);
    let mut group = c.benchmark_group("arc_layout_align");

    for align in [Align::Left, Align::Center, Align::Right] {
        let mut request = LayoutRequest::new("The quick brown fox jumps over the lazy dog", 500.0);
        request.align = align;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{align:?}")),
            &request,
            |b, request| {
                b.iter(|| ArcLayout::compute(black_box(request), &metrics).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layout_lengths, bench_layout_alignments);
criterion_main!(benches);
