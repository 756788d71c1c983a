// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resource caches keyed by [`text_cascade`] cache keys.
//!
//! Building a glyph paint or computing font metrics is expensive, and many text runs in a document
//! resolve to styles that are interchangeable for that purpose. [`TextStyle::paint_key`] and
//! [`TextStyle::font_metrics_key`] say what such a resource depends on; the caches in this crate
//! store the resource under that key.
//!
//! - [`ResourceCache`]: a bounded, single-threaded least-recently-used cache.
//! - [`SharedResourceCache`]: an unbounded, thread-safe cache that builds each value at most once,
//!   even when several threads ask for the same key at the same time.
//!
//! ## Example
//!
//! ```
//! use text_cascade::TextStyle;
//! use text_cascade_cache::FontMetricsCache;
//!
//! let mut cache: FontMetricsCache<f32> = FontMetricsCache::new(16);
//! let mut style = TextStyle::new().with_size(10.0);
//! style.apply_global_style(&TextStyle::library_default());
//!
//! let ascent = *cache.entry(&style.font_metrics_key(), |key| key.size().unwrap() * 0.75);
//! assert_eq!(ascent, 7.5);
//!
//! // A differently colored style shares the same metrics.
//! let other = style.clone().with_color("#FF0000");
//! let again = *cache.entry(&other.font_metrics_key(), |_| unreachable!());
//! assert_eq!(again, 7.5);
//! ```
//!
//! [`TextStyle::paint_key`]: text_cascade::TextStyle::paint_key
//! [`TextStyle::font_metrics_key`]: text_cascade::TextStyle::font_metrics_key
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod lru;
mod shared;

pub use lru::ResourceCache;
pub use shared::SharedResourceCache;

use text_cascade::{FontMetricsKey, PaintKey};

/// A [`ResourceCache`] of glyph paint resources.
pub type PaintCache<V> = ResourceCache<PaintKey, V>;

/// A [`ResourceCache`] of font metrics.
pub type FontMetricsCache<V> = ResourceCache<FontMetricsKey, V>;

/// A [`SharedResourceCache`] of glyph paint resources.
pub type SharedPaintCache<V> = SharedResourceCache<PaintKey, V>;

/// A [`SharedResourceCache`] of font metrics.
pub type SharedFontMetricsCache<V> = SharedResourceCache<FontMetricsKey, V>;
