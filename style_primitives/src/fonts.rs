// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known font families.

use crate::FontFamily;

/// `Lato`. The library default font family.
pub const LATO: FontFamily = FontFamily::from_static("Lato");

/// `Arial`.
pub const ARIAL: FontFamily = FontFamily::from_static("Arial");

/// `Calibri`.
pub const CALIBRI: FontFamily = FontFamily::from_static("Calibri");

/// `Consolas`.
pub const CONSOLAS: FontFamily = FontFamily::from_static("Consolas");

/// `Courier New`.
pub const COURIER_NEW: FontFamily = FontFamily::from_static("Courier New");

/// `Georgia`.
pub const GEORGIA: FontFamily = FontFamily::from_static("Georgia");

/// `Segoe UI`.
pub const SEGOE_UI: FontFamily = FontFamily::from_static("Segoe UI");

/// `Times New Roman`.
pub const TIMES_NEW_ROMAN: FontFamily = FontFamily::from_static("Times New Roman");

/// `Verdana`.
pub const VERDANA: FontFamily = FontFamily::from_static("Verdana");

/// `Noto Color Emoji`, a common emoji fallback.
pub const NOTO_COLOR_EMOJI: FontFamily = FontFamily::from_static("Noto Color Emoji");
