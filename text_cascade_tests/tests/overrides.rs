// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_cascade::style::{colors, fonts, FontPosition};
use text_cascade::TextStyle;

use crate::util::leaf;

#[test]
fn override_after_resolution_restyles_node() {
    let mut tree = leaf(TextStyle::new().with_color(colors::RED).with_size(14.0));
    tree.resolve(&TextStyle::library_default());

    tree.style
        .override_style(&TextStyle::new().with_color(colors::GREEN).superscript());
    let style = &tree.style;
    assert_eq!(style.color(), Some(&colors::GREEN));
    assert_eq!(style.font_position(), Some(FontPosition::Superscript));
    assert_eq!(style.size(), Some(14.0));
    assert!(style.has_global_style_applied());
}

#[test]
fn override_then_cascade_fills_remaining_gaps() {
    let highlight = TextStyle::new()
        .with_background_color(colors::GREY)
        .with_underline(true);
    let mut tree = leaf(TextStyle::new().with_underline(false).overridden_by(&highlight));
    tree.resolve(&TextStyle::library_default());

    let style = &tree.style;
    assert_eq!(style.has_underline(), Some(true));
    assert_eq!(style.background_color(), Some(&colors::GREY));
    assert_eq!(style.color(), Some(&colors::BLACK));
}

#[test]
fn override_fallback_replaces_chain_with_copy() {
    let emoji = TextStyle::new()
        .with_fallback(TextStyle::new().with_font_family(fonts::NOTO_COLOR_EMOJI));
    let mut first = TextStyle::new().with_fallback(TextStyle::new().with_font_family(fonts::ARIAL));
    let mut second = TextStyle::new();
    first.override_style(&emoji);
    second.override_style(&emoji);

    first.apply_global_style(&TextStyle::library_default().with_size(8.0));
    second.apply_global_style(&TextStyle::library_default().with_size(24.0));

    assert_eq!(first.fallback_depth(), 1);
    assert_eq!(first.fallback().unwrap().size(), Some(8.0));
    assert_eq!(second.fallback().unwrap().size(), Some(24.0));
    assert_eq!(emoji.fallback().unwrap().size(), None);
}

#[test]
fn override_without_fallback_keeps_chain() {
    let mut style = TextStyle::new().with_fallback(TextStyle::new().with_font_family(fonts::GEORGIA));
    style.override_style(&TextStyle::new().with_size(11.0));
    assert_eq!(
        style.fallback().unwrap().font_family(),
        Some(&fonts::GEORGIA)
    );
}
