// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known colors.

use crate::Color;

/// Opaque black, `#000000`. The library default text color.
pub const BLACK: Color = Color::from_static("#000000");

/// Opaque white, `#FFFFFF`.
pub const WHITE: Color = Color::from_static("#FFFFFF");

/// Fully transparent, `#00000000`. The library default background color.
pub const TRANSPARENT: Color = Color::from_static("#00000000");

/// Opaque red, `#F44336`.
pub const RED: Color = Color::from_static("#F44336");

/// Opaque green, `#4CAF50`.
pub const GREEN: Color = Color::from_static("#4CAF50");

/// Opaque blue, `#2196F3`.
pub const BLUE: Color = Color::from_static("#2196F3");

/// Opaque grey, `#9E9E9E`.
pub const GREY: Color = Color::from_static("#9E9E9E");
