// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder-style setters for [`TextStyle`].

use alloc::boxed::Box;

use style_primitives::{Color, FontFamily, FontPosition, FontWeight};

use crate::TextStyle;

impl TextStyle {
    /// Sets the text color.
    #[inline]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.attributes.color = Some(color.into());
        self
    }

    /// Sets the background color.
    #[inline]
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.attributes.background_color = Some(color.into());
        self
    }

    /// Sets the font family.
    #[inline]
    pub fn with_font_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.attributes.font_family = Some(family.into());
        self
    }

    /// Sets the font size.
    ///
    /// `size` must be finite and positive.
    #[inline]
    pub fn with_size(mut self, size: f32) -> Self {
        debug_assert!(
            size.is_finite() && size > 0.0,
            "font size must be finite and positive, got {size}"
        );
        self.attributes.size = Some(size);
        self
    }

    /// Sets the line height, as a multiple of the font size.
    ///
    /// `line_height` must be finite and positive.
    #[inline]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        debug_assert!(
            line_height.is_finite() && line_height > 0.0,
            "line height must be finite and positive, got {line_height}"
        );
        self.attributes.line_height = Some(line_height);
        self
    }

    /// Sets the font weight.
    #[inline]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.attributes.font_weight = Some(weight);
        self
    }

    /// Sets the position relative to the baseline.
    #[inline]
    pub fn with_font_position(mut self, position: FontPosition) -> Self {
        self.attributes.font_position = Some(position);
        self
    }

    /// Sets the italic flag.
    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.attributes.is_italic = Some(italic);
        self
    }

    /// Sets the strikethrough flag.
    #[inline]
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.attributes.has_strikethrough = Some(strikethrough);
        self
    }

    /// Sets the underline flag.
    #[inline]
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.attributes.has_underline = Some(underline);
        self
    }

    /// Sets whether lines may break between any two characters.
    #[inline]
    pub fn with_wrap_anywhere(mut self, wrap_anywhere: bool) -> Self {
        self.attributes.wrap_anywhere = Some(wrap_anywhere);
        self
    }

    /// Attaches `fallback` as this style's fallback, replacing any existing chain.
    ///
    /// The fallback is moved in, so it cannot also be reachable from anywhere else; fallback
    /// chains built this way are acyclic.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    /// use text_cascade::style::fonts;
    ///
    /// let style = TextStyle::new()
    ///     .with_font_family(fonts::CALIBRI)
    ///     .with_fallback(
    ///         TextStyle::new()
    ///             .with_font_family(fonts::SEGOE_UI)
    ///             .with_fallback(TextStyle::new().with_font_family(fonts::NOTO_COLOR_EMOJI)),
    ///     );
    /// assert_eq!(style.fallback_depth(), 2);
    /// ```
    #[inline]
    pub fn with_fallback(mut self, fallback: Self) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Sets the font weight to [`FontWeight::Thin`].
    pub fn thin(self) -> Self {
        self.with_font_weight(FontWeight::Thin)
    }

    /// Sets the font weight to [`FontWeight::ExtraLight`].
    pub fn extra_light(self) -> Self {
        self.with_font_weight(FontWeight::ExtraLight)
    }

    /// Sets the font weight to [`FontWeight::Light`].
    pub fn light(self) -> Self {
        self.with_font_weight(FontWeight::Light)
    }

    /// Sets the font weight to [`FontWeight::Normal`].
    pub fn normal_weight(self) -> Self {
        self.with_font_weight(FontWeight::Normal)
    }

    /// Sets the font weight to [`FontWeight::Medium`].
    pub fn medium(self) -> Self {
        self.with_font_weight(FontWeight::Medium)
    }

    /// Sets the font weight to [`FontWeight::SemiBold`].
    pub fn semi_bold(self) -> Self {
        self.with_font_weight(FontWeight::SemiBold)
    }

    /// Sets the font weight to [`FontWeight::Bold`].
    pub fn bold(self) -> Self {
        self.with_font_weight(FontWeight::Bold)
    }

    /// Sets the font weight to [`FontWeight::ExtraBold`].
    pub fn extra_bold(self) -> Self {
        self.with_font_weight(FontWeight::ExtraBold)
    }

    /// Sets the font weight to [`FontWeight::Black`].
    pub fn black(self) -> Self {
        self.with_font_weight(FontWeight::Black)
    }

    /// Sets the font weight to [`FontWeight::ExtraBlack`].
    pub fn extra_black(self) -> Self {
        self.with_font_weight(FontWeight::ExtraBlack)
    }

    /// Positions the text as a subscript.
    pub fn subscript(self) -> Self {
        self.with_font_position(FontPosition::Subscript)
    }

    /// Positions the text as a superscript.
    pub fn superscript(self) -> Self {
        self.with_font_position(FontPosition::Superscript)
    }

    /// Positions the text on the baseline.
    pub fn normal_position(self) -> Self {
        self.with_font_position(FontPosition::Normal)
    }
}
