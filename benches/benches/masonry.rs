// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_masonry::{FnPolicy, ItemPolicy, Masonry, MasonryConfig, aspect_height};

#[derive(Clone, Debug)]
struct Photo {
    src: String,
    width: f64,
    height: f64,
}

fn photos(len: usize) -> Vec<Photo> {
    (0..len)
        .map(|i| Photo {
            src: format!("photo-{i}.jpg"),
            width: 400.0,
            height: 200.0 + ((i * 37) % 13) as f64 * 40.0,
        })
        .collect()
}

fn photo_policy() -> impl ItemPolicy<Photo, Key = String> {
    FnPolicy::new(
        |photo: &Photo| Some(photo.src.clone()),
        |photo: &Photo, column_width: f64| aspect_height(photo.width, photo.height, column_width),
    )
}

const CONFIG: MasonryConfig = MasonryConfig::new(4, 10.0);
const VIEWPORT_WIDTH: f64 = 1_270.0;
const VIEWPORT_HEIGHT: f64 = 900.0;

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry/compute_full_coords");

    for len in [256_usize, 2_048, 16_384] {
        let items = photos(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || Masonry::<Photo, _>::new(CONFIG, photo_policy()).unwrap(),
                |mut masonry| {
                    let visible =
                        masonry.compute_full_coords(items, 0.0, VIEWPORT_HEIGHT, VIEWPORT_WIDTH);
                    black_box(visible.len());
                    black_box(masonry);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_scroll_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry/visible_items");
    group.measurement_time(Duration::from_secs(3));

    // Hypothesis: the re-filter is dominated by key hashing, so it should stay
    // several times cheaper than a full layout at every size.
    for len in [256_usize, 2_048, 16_384] {
        let items = photos(len);
        let mut masonry = Masonry::<Photo, _>::new(CONFIG, photo_policy()).unwrap();
        masonry.compute_full_coords(&items, 0.0, VIEWPORT_HEIGHT, VIEWPORT_WIDTH);
        let middle = masonry.total_height() * 0.5;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("compute_visible_items", len),
            &items,
            |b, items| {
                b.iter(|| {
                    let visible =
                        masonry.compute_visible_items(items, black_box(middle), VIEWPORT_HEIGHT);
                    black_box(visible);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("visible_items_into", len),
            &items,
            |b, items| {
                let mut out = Vec::new();
                b.iter(|| {
                    masonry.visible_items_into(
                        items,
                        black_box(middle),
                        VIEWPORT_HEIGHT,
                        &mut out,
                    );
                    black_box(out.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_layout, bench_scroll_filter);
criterion_main!(benches);
