// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use text_cascade::style::{colors, fonts};
use text_cascade::TextStyle;
use text_cascade_cache::{FontMetricsCache, PaintCache, SharedFontMetricsCache, SharedPaintCache};

use crate::util::{leaf, node};

/// A stand-in for a glyph paint built from a resolved style.
#[derive(Debug, PartialEq)]
struct Paint {
    family: String,
    color: String,
    size: f32,
}

fn build_paint(key: &text_cascade::PaintKey) -> Paint {
    Paint {
        family: key.font_family().unwrap().as_str().to_owned(),
        color: key.color().unwrap().as_str().to_owned(),
        size: key.size().unwrap(),
    }
}

fn document() -> crate::util::StyleNode {
    let mut tree = node(
        TextStyle::new().with_font_family(fonts::GEORGIA),
        [
            leaf(TextStyle::new().with_underline(true)),
            leaf(TextStyle::new().with_background_color(colors::GREY)),
            leaf(TextStyle::new().with_color(colors::RED)),
            leaf(TextStyle::new().with_size(18.0)),
        ],
    );
    tree.resolve(&TextStyle::library_default());
    tree
}

#[test]
fn cache_paint_shared_by_equivalent_runs() {
    let tree = document();
    let mut cache = PaintCache::new(8);

    for child in &tree.children {
        cache.entry(&child.style.paint_key(), build_paint);
    }

    // Decoration and background do not affect the paint, so the first two runs share one.
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.cache_hits(), 1);
    assert_eq!(cache.cache_misses(), 3);

    let paint = cache.entry(&tree.at(&[2]).style.paint_key(), |_| unreachable!());
    assert_eq!(paint.color, colors::RED.as_str());
    assert_eq!(paint.family, fonts::GEORGIA.as_str());
}

#[test]
fn cache_font_metrics_ignore_color() {
    let tree = document();
    let mut cache = FontMetricsCache::new(8);

    for child in &tree.children {
        cache.entry(&child.style.font_metrics_key(), |key| key.size().unwrap());
    }

    // Only the larger run needs different metrics.
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.cache_hits(), 2);
}

#[test]
fn cache_resolved_and_optional_keys_agree() {
    let tree = document();
    let mut cache = PaintCache::new(4);
    let style = &tree.at(&[3]).style;
    cache.entry(&style.paint_key(), build_paint);

    let resolved = style.to_resolved().unwrap();
    assert!(cache.contains(&resolved.paint_key()));
    assert_eq!(cache.get(&resolved.paint_key()).unwrap().size, 18.0);
}

#[test]
fn cache_lru_evicts_least_recently_used_style() {
    let base = TextStyle::library_default();
    let styles: Vec<_> = [10.0, 11.0, 12.0]
        .into_iter()
        .map(|size| base.clone().with_size(size))
        .collect();
    let mut cache = FontMetricsCache::new(2);

    cache.entry(&styles[0].font_metrics_key(), |_| 0);
    cache.entry(&styles[1].font_metrics_key(), |_| 1);
    // Touch the first so the second becomes the oldest.
    cache.entry(&styles[0].font_metrics_key(), |_| unreachable!());
    cache.entry(&styles[2].font_metrics_key(), |_| 2);

    assert!(cache.contains(&styles[0].font_metrics_key()));
    assert!(!cache.contains(&styles[1].font_metrics_key()));
    assert!(cache.contains(&styles[2].font_metrics_key()));
}

#[test]
fn cache_shared_paint_built_once_across_layout_threads() {
    let tree = document();
    let cache = SharedPaintCache::new();
    let builds = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..4 {
            let cache = cache.clone();
            let tree = tree.clone();
            let builds = &builds;
            scope.spawn(move || {
                for child in &tree.children {
                    cache.get_or_insert_with(&child.style.paint_key(), |key| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        build_paint(key)
                    });
                }
            });
        }
    });

    assert_eq!(builds.load(Ordering::SeqCst), 3);
    assert_eq!(cache.len(), 3);
}

#[test]
fn cache_shared_font_metrics_hand_out_same_value() {
    let cache = SharedFontMetricsCache::new();
    let style = TextStyle::library_default();
    let first = cache.get_or_insert_with(&style.font_metrics_key(), |key| key.size().unwrap());
    let second = cache.get_or_insert_with(
        &style.clone().with_color(colors::BLUE).font_metrics_key(),
        |_| unreachable!(),
    );
    assert!(Arc::ptr_eq(&first, &second));
}
