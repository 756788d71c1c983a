// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Text Cascade Bench
//!
//! This crate provides benchmarks for the `text_cascade` library.

use text_cascade::style::{colors, fonts};
use text_cascade::TextStyle;

pub mod benches;

/// Returns `depth` sparse styles, each meant to be nested inside the one before it.
///
/// Every style sets a single attribute, cycling through a handful of common run styles.
pub fn nested_styles(depth: usize) -> Vec<TextStyle> {
    (0..depth).map(run_style).collect()
}

/// Returns a sparse style with a fallback chain of `depth` links.
pub fn fallback_chain(depth: usize) -> TextStyle {
    const FAMILIES: [text_cascade::style::FontFamily; 4] = [
        fonts::SEGOE_UI,
        fonts::ARIAL,
        fonts::VERDANA,
        fonts::NOTO_COLOR_EMOJI,
    ];

    (0..depth)
        .rev()
        .fold(None, |chain: Option<TextStyle>, link| {
            let style =
                TextStyle::new().with_font_family(FAMILIES[link % FAMILIES.len()].clone());
            Some(match chain {
                Some(chain) => style.with_fallback(chain),
                None => style,
            })
        })
        .map_or_else(TextStyle::new, |chain| {
            TextStyle::new().with_size(14.0).with_fallback(chain)
        })
}

/// Resolves `styles` top-down, each against the one before it, and the first against `root`.
pub fn resolve_nested(root: &TextStyle, styles: &mut [TextStyle]) {
    for index in 0..styles.len() {
        let (resolved, rest) = styles.split_at_mut(index);
        rest[0].apply_global_style(resolved.last().unwrap_or(root));
    }
}

/// Returns `count` fully resolved styles as a document's text runs would produce them.
pub fn resolved_runs(count: usize) -> Vec<TextStyle> {
    let root = TextStyle::library_default();
    (0..count)
        .map(|index| {
            let mut style = run_style(index);
            style.apply_global_style(&root);
            style
        })
        .collect()
}

fn run_style(index: usize) -> TextStyle {
    // Cycle through 5 different styles
    match index % 5 {
        0 => TextStyle::new().with_italic(true),
        1 => TextStyle::new().bold(),
        2 => TextStyle::new().with_underline(true),
        3 => TextStyle::new().with_color(colors::BLUE),
        4 => TextStyle::new().with_size(16.0),
        _ => unreachable!(),
    }
}
