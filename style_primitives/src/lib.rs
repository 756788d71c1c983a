// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf value types for text style attributes.
//!
//! This crate is the vocabulary layer underneath `text_cascade`. It defines the small typed values
//! a text style is made of: opaque [`Color`] and [`FontFamily`] identifiers, and the enumerated
//! [`FontWeight`] and [`FontPosition`]. None of these types know anything about inheritance; they
//! are plain values that compare and hash structurally.
//!
//! Well-known values live in the [`colors`] and [`fonts`] modules.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use style_primitives::{Color, FontPosition, FontWeight, colors};
//!
//! let color = Color::parse("#ff0000").unwrap();
//! assert_eq!(color.as_str(), "#FF0000");
//! assert_ne!(color, colors::BLACK);
//!
//! assert_eq!(FontWeight::parse("bold"), Some(FontWeight::Bold));
//! assert_eq!(FontWeight::Bold.value(), 700);
//! assert_eq!(FontPosition::parse("super"), Some(FontPosition::Superscript));
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

mod color;
mod font;
mod font_family;

pub mod colors;
pub mod fonts;

pub use color::{Color, ParseColorError, ParseColorErrorKind};
pub use font::{FontPosition, FontWeight};
pub use font_family::FontFamily;
