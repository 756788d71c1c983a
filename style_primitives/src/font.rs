// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font.
///
/// Only the named weight classes are representable, which keeps the type `Eq + Hash` so it can
/// take part in cache keys. [`FontWeight::value`] gives the numeric class (100 to 1000).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    /// Weight value of 100.
    Thin,
    /// Weight value of 200.
    ExtraLight,
    /// Weight value of 300.
    Light,
    /// Weight value of 400. This is the default value.
    #[default]
    Normal,
    /// Weight value of 500.
    Medium,
    /// Weight value of 600.
    SemiBold,
    /// Weight value of 700.
    Bold,
    /// Weight value of 800.
    ExtraBold,
    /// Weight value of 900.
    Black,
    /// Weight value of 1000.
    ExtraBlack,
}

impl FontWeight {
    /// All weights, lightest first.
    pub const ALL: [Self; 10] = [
        Self::Thin,
        Self::ExtraLight,
        Self::Light,
        Self::Normal,
        Self::Medium,
        Self::SemiBold,
        Self::Bold,
        Self::ExtraBold,
        Self::Black,
        Self::ExtraBlack,
    ];

    /// Returns the numeric weight class.
    pub const fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black => 900,
            Self::ExtraBlack => 1000,
        }
    }

    /// Returns the weight with the given numeric class, if it is one of the named classes.
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|weight| weight.value() == value)
    }

    /// Returns the keyword used by [`FontWeight::parse`] and `Display`.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::ExtraLight => "extra-light",
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::SemiBold => "semi-bold",
            Self::Bold => "bold",
            Self::ExtraBold => "extra-bold",
            Self::Black => "black",
            Self::ExtraBlack => "extra-black",
        }
    }

    /// Parses a font weight.
    ///
    /// Supported syntax (after trimming ASCII whitespace):
    /// - a keyword such as `normal`, `semi-bold` or `extra-black`
    /// - a numeric class: `100`, `200`, … `1000`
    ///
    /// This parser is case-sensitive.
    ///
    /// ```
    /// use style_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("normal"), Some(FontWeight::Normal));
    /// assert_eq!(FontWeight::parse("semi-bold"), Some(FontWeight::SemiBold));
    /// assert_eq!(FontWeight::parse("900"), Some(FontWeight::Black));
    /// assert_eq!(FontWeight::parse("850"), None);
    /// assert_eq!(FontWeight::parse("heavy"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(weight) = Self::ALL.into_iter().find(|w| w.keyword() == s) {
            return Some(weight);
        }
        Self::from_value(s.parse::<u16>().ok()?)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Vertical position of text relative to the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontPosition {
    /// Text sits on the baseline.
    #[default]
    Normal,
    /// Smaller text lowered below the baseline.
    Subscript,
    /// Smaller text raised above the baseline.
    Superscript,
}

impl FontPosition {
    /// Parses a font position.
    ///
    /// Accepts `normal`, `sub`/`subscript` and `super`/`superscript` (after trimming ASCII
    /// whitespace). This parser is case-sensitive.
    ///
    /// ```
    /// use style_primitives::FontPosition;
    ///
    /// assert_eq!(FontPosition::parse("sub"), Some(FontPosition::Subscript));
    /// assert_eq!(FontPosition::parse("superscript"), Some(FontPosition::Superscript));
    /// assert_eq!(FontPosition::parse("middle"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "sub" | "subscript" => Self::Subscript,
            "super" | "superscript" => Self::Superscript,
            _ => return None,
        })
    }
}

impl fmt::Display for FontPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FontPosition, FontWeight};

    #[test]
    fn weight_values_round_trip_through_from_value() {
        for weight in FontWeight::ALL {
            assert_eq!(FontWeight::from_value(weight.value()), Some(weight));
        }
        assert_eq!(FontWeight::from_value(450), None);
    }

    #[test]
    fn weights_order_by_value() {
        assert!(FontWeight::Thin < FontWeight::Normal);
        assert!(FontWeight::Bold < FontWeight::ExtraBlack);
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }

    #[test]
    fn weight_display_matches_keyword() {
        assert_eq!(alloc::format!("{}", FontWeight::ExtraBold), "extra-bold");
        assert_eq!(FontWeight::parse(" extra-bold "), Some(FontWeight::ExtraBold));
    }

    #[test]
    fn position_defaults_to_normal() {
        assert_eq!(FontPosition::default(), FontPosition::Normal);
        assert_eq!(alloc::format!("{}", FontPosition::Subscript), "subscript");
    }
}
