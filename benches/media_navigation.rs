// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for media navigation operations.
//!
//! Measures the performance of:
//! - Category filtering of the catalog
//! - Navigation operations (next/previous) inside a filtered view
//! - Thumbnail decode of an in-memory PNG

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::application::query::navigation;
use iced_gallery::domain::media::{filter, Catalog, Category, MediaId};
use iced_gallery::media::loader;
use iced_gallery::media::Rendition;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

/// Benchmark filtering the catalog by every category.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let catalog = Catalog::builtin();

    group.bench_function("filter_all_categories", |b| {
        b.iter(|| {
            for category in Category::ALL {
                black_box(filter::filter(catalog.items(), category));
            }
        });
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let catalog = Catalog::builtin();
    let view = filter::filter(catalog.items(), Category::All);

    group.bench_function("next", |b| {
        b.iter(|| black_box(navigation::next(&view, black_box(MediaId(3)))));
    });

    group.bench_function("previous", |b| {
        b.iter(|| black_box(navigation::previous(&view, black_box(MediaId(1)))));
    });

    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            let mut current = MediaId(1);
            for _ in 0..view.len() {
                if let Some(next) = navigation::next(&view, current) {
                    current = next.id;
                }
            }
            black_box(current)
        });
    });

    group.finish();
}

/// Benchmark decoding a large PNG into a thumbnail.
fn bench_decode_thumbnail(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let image = RgbaImage::from_pixel(1920, 1080, Rgba([40, 80, 120, 255]));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("failed to encode png");
    let bytes = bytes.into_inner();

    group.bench_function("decode_thumbnail_png", |b| {
        b.iter(|| black_box(loader::decode(&bytes, Rendition::Thumbnail).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_navigate, bench_decode_thumbnail);
criterion_main!(benches);
