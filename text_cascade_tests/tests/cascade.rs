// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_cascade::style::{colors, fonts, FontPosition, FontWeight};
use text_cascade::TextStyle;

use crate::util::{leaf, node};

#[test]
fn cascade_scenario_single_override() {
    let root = TextStyle::new()
        .with_color(colors::BLACK)
        .with_size(12.0)
        .with_font_family(fonts::LATO);
    let mut tree = leaf(TextStyle::new().with_color(colors::RED));
    tree.resolve(&root);

    let style = &tree.style;
    assert_eq!(style.color(), Some(&colors::RED));
    assert_eq!(style.size(), Some(12.0));
    assert_eq!(style.font_family(), Some(&fonts::LATO));
}

#[test]
fn cascade_nested_nodes_inherit_from_nearest_ancestor() {
    let mut tree = node(
        TextStyle::new().with_size(16.0),
        [
            node(
                TextStyle::new().bold(),
                [leaf(TextStyle::new().with_italic(true))],
            ),
            leaf(TextStyle::new().with_color(colors::BLUE)),
        ],
    );
    tree.resolve(&TextStyle::library_default());

    let deep = &tree.at(&[0, 0]).style;
    assert_eq!(deep.size(), Some(16.0));
    assert_eq!(deep.font_weight(), Some(FontWeight::Bold));
    assert_eq!(deep.is_italic(), Some(true));
    assert_eq!(deep.color(), Some(&colors::BLACK));

    let sibling = &tree.at(&[1]).style;
    assert_eq!(sibling.size(), Some(16.0));
    assert_eq!(sibling.font_weight(), Some(FontWeight::Normal));
    assert_eq!(sibling.color(), Some(&colors::BLUE));
}

#[test]
fn cascade_against_library_default_resolves_everything() {
    let mut tree = node(
        TextStyle::new().subscript(),
        [leaf(TextStyle::new().with_wrap_anywhere(true))],
    );
    tree.resolve(&TextStyle::library_default());

    for path in [&[][..], &[0][..]] {
        let style = &tree.at(path).style;
        assert_eq!(style.unset_attributes().count(), 0);
        assert!(style.to_resolved().is_ok());
    }
    let child = &tree.at(&[0]).style;
    assert_eq!(child.font_position(), Some(FontPosition::Subscript));
    assert_eq!(child.wrap_anywhere(), Some(true));
}

#[test]
fn cascade_multi_pass_is_idempotent() {
    let mut tree = node(
        TextStyle::new().with_size(20.0),
        [leaf(TextStyle::new().with_underline(true))],
    );
    tree.resolve(&TextStyle::library_default());
    let first_pass = tree.clone();

    // A second measurement pass with a different root changes nothing.
    tree.resolve(&TextStyle::library_default().with_size(40.0).bold());
    assert_eq!(tree.style, first_pass.style);
    assert_eq!(tree.at(&[0]).style, first_pass.at(&[0]).style);
}

#[test]
fn cascade_parallel_passes_work_on_clones() {
    let template = node(
        TextStyle::new().with_color(colors::GREEN),
        [leaf(TextStyle::new())],
    );

    let results: Vec<_> = std::thread::scope(|scope| {
        [10.0_f32, 14.0]
            .into_iter()
            .map(|size| {
                let mut tree = template.clone();
                scope.spawn(move || {
                    tree.resolve(&TextStyle::library_default().with_size(size));
                    tree
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().expect("layout pass panicked"))
            .collect()
    });

    assert_eq!(results[0].at(&[0]).style.size(), Some(10.0));
    assert_eq!(results[1].at(&[0]).style.size(), Some(14.0));
    assert!(!template.style.has_global_style_applied());
    assert_eq!(template.at(&[0]).style, TextStyle::new());
}

#[test]
fn cascade_unresolved_ancestor_leaves_gaps() {
    // The child is resolved before its parent.
    let parent = TextStyle::new().with_color(colors::RED);
    let mut child = TextStyle::new();
    child.apply_global_style(&parent);

    assert_eq!(child.color(), Some(&colors::RED));
    assert_eq!(child.size(), None);
    assert!(child.to_resolved().is_err());
}
