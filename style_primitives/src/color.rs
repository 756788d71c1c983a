// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Kinds of errors that can occur when parsing color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseColorErrorKind {
    /// The source string was empty (after trimming ASCII whitespace).
    Empty,
    /// The source string did not start with `#`.
    MissingHash,
    /// The number of hex digits was not 3, 6 or 8.
    InvalidLength,
    /// A character after `#` was not a hex digit.
    InvalidDigit,
}

/// Error returned when parsing color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    kind: ParseColorErrorKind,
    at: usize,
}

impl ParseColorError {
    const fn new(kind: ParseColorErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseColorErrorKind {
        self.kind
    }

    /// Returns the byte offset into the trimmed source where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.at
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseColorErrorKind::Empty => "empty color",
            ParseColorErrorKind::MissingHash => "color must start with '#'",
            ParseColorErrorKind::InvalidLength => "color must have 3, 6 or 8 hex digits",
            ParseColorErrorKind::InvalidDigit => "invalid hex digit in color",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseColorError {}

/// An opaque color identifier.
///
/// Colors are compared and hashed by their string form. No color arithmetic happens here: two
/// colors are the same color exactly when their identifiers are equal, so `#000` and `#000000`
/// are distinct values. Use [`Color::parse`] to validate hex notation, or [`Color::new`] to
/// carry any identifier understood by the rendering side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Creates a color from a static identifier without validation.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Creates a color from an identifier without validation.
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Parses a hex color.
    ///
    /// Supported syntax (after trimming ASCII whitespace): `#RGB`, `#RRGGBB` and `#AARRGGBB`.
    /// Digits are case-insensitive and normalized to upper case.
    ///
    /// ```
    /// use style_primitives::{Color, ParseColorErrorKind};
    ///
    /// assert_eq!(Color::parse("#00000000").unwrap().as_str(), "#00000000");
    /// assert_eq!(Color::parse(" #abc ").unwrap().as_str(), "#ABC");
    /// assert_eq!(
    ///     Color::parse("#12345").unwrap_err().kind(),
    ///     ParseColorErrorKind::InvalidLength
    /// );
    /// assert_eq!(
    ///     Color::parse("red").unwrap_err().kind(),
    ///     ParseColorErrorKind::MissingHash
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::new(ParseColorErrorKind::Empty, 0));
        }
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ParseColorError::new(ParseColorErrorKind::MissingHash, 0));
        };
        if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(
                ParseColorErrorKind::InvalidDigit,
                pos + 1,
            ));
        }
        if !matches!(digits.len(), 3 | 6 | 8) {
            return Err(ParseColorError::new(
                ParseColorErrorKind::InvalidLength,
                s.len(),
            ));
        }

        let mut normalized = String::with_capacity(s.len());
        normalized.push('#');
        normalized.extend(digits.chars().map(|c| c.to_ascii_uppercase()));
        Ok(Self(Cow::Owned(normalized)))
    }

    /// Returns the color identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Color {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ParseColorErrorKind};

    #[test]
    fn parse_accepts_all_hex_lengths() {
        assert_eq!(Color::parse("#fff").unwrap().as_str(), "#FFF");
        assert_eq!(Color::parse("#a1b2c3").unwrap().as_str(), "#A1B2C3");
        assert_eq!(Color::parse("#80FF0000").unwrap().as_str(), "#80FF0000");
    }

    #[test]
    fn parse_reports_offending_digit() {
        let err = Color::parse("#12x456").unwrap_err();
        assert_eq!(err.kind(), ParseColorErrorKind::InvalidDigit);
        assert_eq!(err.byte_offset(), 3);
    }

    #[test]
    fn parse_rejects_empty_and_bare_hash() {
        assert_eq!(
            Color::parse("   ").unwrap_err().kind(),
            ParseColorErrorKind::Empty
        );
        assert_eq!(
            Color::parse("#").unwrap_err().kind(),
            ParseColorErrorKind::InvalidLength
        );
    }

    #[test]
    fn owned_and_static_colors_compare_by_value() {
        let owned = Color::new(alloc::string::String::from("#FF0000"));
        assert_eq!(owned, Color::from_static("#FF0000"));
        assert_ne!(owned, Color::from_static("#F00"));
    }

    #[test]
    fn display_writes_identifier() {
        let color = Color::from_static("#00FF00");
        assert_eq!(alloc::format!("{color}"), "#00FF00");
    }
}
