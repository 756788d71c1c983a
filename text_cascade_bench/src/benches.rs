// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for style resolution and cache key projection.

use std::hint::black_box;

use tango_bench::{benchmark_fn, Benchmark};
use text_cascade::TextStyle;
use text_cascade_cache::{PaintCache, SharedPaintCache};

use crate::{fallback_chain, nested_styles, resolve_nested, resolved_runs};

/// Benchmark for resolving nested styles top-down.
pub fn cascade() -> Vec<Benchmark> {
    [4, 16, 64]
        .into_iter()
        .map(|depth| {
            benchmark_fn(format!("Cascade - depth {depth}"), move |b| {
                let root = TextStyle::library_default();
                let template = nested_styles(depth);
                b.iter(move || {
                    let mut styles = template.clone();
                    resolve_nested(&root, &mut styles);
                    black_box(styles);
                })
            })
        })
        .collect()
}

/// Benchmark for resolving a style with a fallback chain.
pub fn fallback() -> Vec<Benchmark> {
    [1, 4, 16]
        .into_iter()
        .map(|depth| {
            benchmark_fn(format!("Fallback - depth {depth}"), move |b| {
                let root = TextStyle::library_default();
                let template = fallback_chain(depth);
                b.iter(move || {
                    let mut style = template.clone();
                    style.apply_global_style(&root);
                    black_box(style);
                })
            })
        })
        .collect()
}

/// Benchmark for projecting cache keys from resolved styles.
pub fn keys() -> Vec<Benchmark> {
    vec![
        benchmark_fn("Keys - paint", |b| {
            let runs = resolved_runs(100);
            b.iter(move || {
                for run in &runs {
                    black_box(run.paint_key());
                }
            })
        }),
        benchmark_fn("Keys - font metrics", |b| {
            let runs = resolved_runs(100);
            b.iter(move || {
                for run in &runs {
                    black_box(run.font_metrics_key());
                }
            })
        }),
    ]
}

/// Benchmark for looking up resources keyed by resolved styles.
pub fn cache_lookup() -> Vec<Benchmark> {
    vec![
        benchmark_fn("Cache - lru", |b| {
            let keys: Vec<_> = resolved_runs(100).iter().map(TextStyle::paint_key).collect();
            let mut cache = PaintCache::new(8);
            b.iter(move || {
                for key in &keys {
                    black_box(cache.entry(key, |key| key.size()));
                }
            })
        }),
        benchmark_fn("Cache - shared", |b| {
            let keys: Vec<_> = resolved_runs(100).iter().map(TextStyle::paint_key).collect();
            let cache = SharedPaintCache::new();
            b.iter(move || {
                for key in &keys {
                    black_box(cache.get_or_insert_with(key, |key| key.size()));
                }
            })
        }),
    ]
}
