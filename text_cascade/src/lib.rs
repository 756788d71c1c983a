// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade, fallback and override resolution for sparse text styles.
//!
//! A [`TextStyle`] is a bag of optional attributes. An attribute that is `None` is *unset* and will
//! be inherited; an attribute that is `Some` was chosen explicitly somewhere. Styles are resolved
//! along two axes:
//!
//! - **Ancestor cascade**: [`TextStyle::apply_global_style`] fills every unset attribute from an
//!   already-resolved ancestor, bottoming out at a root default such as
//!   [`TextStyle::library_default`]. It runs at most once per instance.
//! - **Fallback chain**: a style may own a chain of alternates (see [`TextStyle::with_fallback`])
//!   used when a glyph cannot be shaped with the primary style. Each link inherits from the link
//!   before it, so a fallback only needs to spell out what differs from its primary.
//!
//! [`TextStyle::override_style`] is the opposite merge: attributes set on the other style always
//! win.
//!
//! Rendering code that builds expensive per-style resources can key its caches with
//! [`TextStyle::paint_key`] and [`TextStyle::font_metrics_key`].
//!
//! ## Ordering
//!
//! Resolution is top-down. A node must be resolved against an ancestor that is itself already
//! resolved; otherwise the node silently stays partially unset. [`TextStyle::to_resolved`] turns
//! a resolved style into a [`ResolvedTextStyle`] with non-optional attributes and reports the
//! first attribute that is still unset.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in dependencies.
//!
//! ## Example
//!
//! ```
//! use text_cascade::TextStyle;
//! use text_cascade::style::{FontFamily, colors, fonts};
//!
//! let root = TextStyle::library_default();
//!
//! let mut heading = TextStyle::new()
//!     .with_font_family(fonts::ARIAL)
//!     .bold()
//!     .with_fallback(TextStyle::new().with_font_family(fonts::NOTO_COLOR_EMOJI));
//! heading.apply_global_style(&root);
//!
//! assert_eq!(heading.font_family(), Some(&fonts::ARIAL));
//! assert_eq!(heading.color(), Some(&colors::BLACK));
//! assert_eq!(heading.size(), Some(12.0));
//!
//! // The fallback inherits from the resolved heading, not from the root.
//! let emoji = heading.fallback().unwrap();
//! assert_eq!(emoji.font_family(), Some(&fonts::NOTO_COLOR_EMOJI));
//! assert_eq!(emoji.font_weight(), heading.font_weight());
//!
//! let resolved = heading.to_resolved().unwrap();
//! assert_eq!(resolved.font_family(), &FontFamily::from_static("Arial"));
//! ```
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
#![no_std]

extern crate alloc;

mod attributes;
mod builder;
mod error;
mod fallback;
mod key;
mod resolve;
mod resolved;
mod text_style;


pub use attributes::Attribute;
pub use error::UnresolvedAttributeError;
pub use fallback::FallbackChain;
pub use key::{FontMetricsKey, PaintKey};
pub use resolved::ResolvedTextStyle;
pub use text_style::TextStyle;

/// Value types for style attributes, re-exported from [`style_primitives`].
pub mod style {
    pub use style_primitives::{
        colors, fonts, Color, FontFamily, FontPosition, FontWeight, ParseColorError,
        ParseColorErrorKind,
    };
}
