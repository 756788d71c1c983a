// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use style_primitives::{Color, FontFamily, FontPosition, FontWeight};

use crate::{Attribute, TextStyle, UnresolvedAttributeError};

/// A fully resolved text style.
///
/// Every attribute is present, on this style and on every style of its fallback chain. Obtained
/// with [`TextStyle::to_resolved`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTextStyle {
    pub(crate) color: Color,
    pub(crate) background_color: Color,
    pub(crate) font_family: FontFamily,
    pub(crate) size: f32,
    pub(crate) line_height: f32,
    pub(crate) font_weight: FontWeight,
    pub(crate) font_position: FontPosition,
    pub(crate) is_italic: bool,
    pub(crate) has_strikethrough: bool,
    pub(crate) has_underline: bool,
    pub(crate) wrap_anywhere: bool,
    pub(crate) fallback: Option<Box<ResolvedTextStyle>>,
}

impl ResolvedTextStyle {
    /// Returns the text color.
    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the background color.
    #[inline]
    pub fn background_color(&self) -> &Color {
        &self.background_color
    }

    /// Returns the font family.
    #[inline]
    pub fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// Returns the font size.
    #[inline]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Returns the line height, as a multiple of the font size.
    #[inline]
    pub const fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns the font weight.
    #[inline]
    pub const fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the font position.
    #[inline]
    pub const fn font_position(&self) -> FontPosition {
        self.font_position
    }

    /// Returns whether the text is italic.
    #[inline]
    pub const fn is_italic(&self) -> bool {
        self.is_italic
    }

    /// Returns whether the text is struck through.
    #[inline]
    pub const fn has_strikethrough(&self) -> bool {
        self.has_strikethrough
    }

    /// Returns whether the text is underlined.
    #[inline]
    pub const fn has_underline(&self) -> bool {
        self.has_underline
    }

    /// Returns whether lines may break between any two characters.
    #[inline]
    pub const fn wrap_anywhere(&self) -> bool {
        self.wrap_anywhere
    }

    /// Returns the next style in the fallback chain, if any.
    #[inline]
    pub fn fallback(&self) -> Option<&Self> {
        self.fallback.as_deref()
    }
}

impl TextStyle {
    /// Converts this style to a [`ResolvedTextStyle`].
    ///
    /// Fails with the first unset attribute, looking at this style first and then at each
    /// fallback in order. After [`TextStyle::apply_global_style`] against a root style with every
    /// attribute set (such as [`TextStyle::library_default`]) this always succeeds.
    ///
    /// ```
    /// use text_cascade::{Attribute, TextStyle};
    ///
    /// let style = TextStyle::new().with_size(14.0);
    /// let err = style.to_resolved().unwrap_err();
    /// assert_eq!(err.attribute(), Attribute::Color);
    /// assert_eq!(err.depth(), 0);
    /// ```
    pub fn to_resolved(&self) -> Result<ResolvedTextStyle, UnresolvedAttributeError> {
        self.to_resolved_at(0)
    }

    fn to_resolved_at(&self, depth: usize) -> Result<ResolvedTextStyle, UnresolvedAttributeError> {
        let a = &self.attributes;
        let missing = |attribute| UnresolvedAttributeError::new(attribute, depth);

        let mut resolved = ResolvedTextStyle {
            color: a.color.clone().ok_or_else(|| missing(Attribute::Color))?,
            background_color: a
                .background_color
                .clone()
                .ok_or_else(|| missing(Attribute::BackgroundColor))?,
            font_family: a
                .font_family
                .clone()
                .ok_or_else(|| missing(Attribute::FontFamily))?,
            size: a.size.ok_or_else(|| missing(Attribute::Size))?,
            line_height: a.line_height.ok_or_else(|| missing(Attribute::LineHeight))?,
            font_weight: a.font_weight.ok_or_else(|| missing(Attribute::FontWeight))?,
            font_position: a
                .font_position
                .ok_or_else(|| missing(Attribute::FontPosition))?,
            is_italic: a.is_italic.ok_or_else(|| missing(Attribute::Italic))?,
            has_strikethrough: a
                .has_strikethrough
                .ok_or_else(|| missing(Attribute::Strikethrough))?,
            has_underline: a
                .has_underline
                .ok_or_else(|| missing(Attribute::Underline))?,
            wrap_anywhere: a
                .wrap_anywhere
                .ok_or_else(|| missing(Attribute::WrapAnywhere))?,
            fallback: None,
        };
        if let Some(fallback) = self.fallback() {
            resolved.fallback = Some(Box::new(fallback.to_resolved_at(depth + 1)?));
        }
        Ok(resolved)
    }
}
