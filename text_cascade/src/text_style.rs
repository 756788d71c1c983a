// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use style_primitives::{colors, fonts, Color, FontFamily, FontPosition, FontWeight};

use crate::attributes::{Attribute, Attributes};

/// A sparse text style.
///
/// Every attribute is optional. An unset attribute is inherited during cascade resolution; a set
/// attribute is never overwritten by it. A style may own a fallback chain of alternate styles,
/// tried in order when a glyph cannot be shaped with this one.
///
/// Each style exclusively owns its fallback chain. Operations that take a chain from another style
/// copy it, so two styles never share a chain.
///
/// ## Cloning
///
/// Cloning deep-copies the fallback chain and produces an *unresolved* style: the clone can be
/// resolved again with [`TextStyle::apply_global_style`] in a new context.
///
/// ## Equality
///
/// Two styles are equal when their attributes and fallback chains are equal. Whether either style
/// has been resolved does not take part in the comparison.
#[derive(Debug, Default)]
pub struct TextStyle {
    pub(crate) attributes: Attributes,
    pub(crate) fallback: Option<Box<TextStyle>>,
    pub(crate) global_style_applied: bool,
}

impl TextStyle {
    /// Creates an empty style: every attribute unset, no fallback.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in root style.
    ///
    /// Every attribute is set and there is no fallback, so resolving any style against it leaves
    /// no attribute of the primary style unset:
    ///
    /// | attribute | value |
    /// |-----------|-------|
    /// | color | [`colors::BLACK`] |
    /// | background color | [`colors::TRANSPARENT`] |
    /// | font family | [`fonts::LATO`] |
    /// | size | `12.0` |
    /// | line height | `1.2` |
    /// | font weight | [`FontWeight::Normal`] |
    /// | font position | [`FontPosition::Normal`] |
    /// | italic, strikethrough, underline, wrap anywhere | `false` |
    ///
    /// A new instance is returned on each call.
    pub fn library_default() -> Self {
        Self {
            attributes: Attributes {
                color: Some(colors::BLACK),
                background_color: Some(colors::TRANSPARENT),
                font_family: Some(fonts::LATO),
                size: Some(12.0),
                line_height: Some(1.2),
                font_weight: Some(FontWeight::Normal),
                font_position: Some(FontPosition::Normal),
                is_italic: Some(false),
                has_strikethrough: Some(false),
                has_underline: Some(false),
                wrap_anywhere: Some(false),
            },
            fallback: None,
            global_style_applied: false,
        }
    }

    /// Returns the text color, if set.
    #[inline]
    pub fn color(&self) -> Option<&Color> {
        self.attributes.color.as_ref()
    }

    /// Returns the background color, if set.
    #[inline]
    pub fn background_color(&self) -> Option<&Color> {
        self.attributes.background_color.as_ref()
    }

    /// Returns the font family, if set.
    #[inline]
    pub fn font_family(&self) -> Option<&FontFamily> {
        self.attributes.font_family.as_ref()
    }

    /// Returns the font size, if set.
    #[inline]
    pub fn size(&self) -> Option<f32> {
        self.attributes.size
    }

    /// Returns the line height (a multiple of the font size), if set.
    #[inline]
    pub fn line_height(&self) -> Option<f32> {
        self.attributes.line_height
    }

    /// Returns the font weight, if set.
    #[inline]
    pub fn font_weight(&self) -> Option<FontWeight> {
        self.attributes.font_weight
    }

    /// Returns the font position, if set.
    #[inline]
    pub fn font_position(&self) -> Option<FontPosition> {
        self.attributes.font_position
    }

    /// Returns whether the text is italic, if set.
    #[inline]
    pub fn is_italic(&self) -> Option<bool> {
        self.attributes.is_italic
    }

    /// Returns whether the text is struck through, if set.
    #[inline]
    pub fn has_strikethrough(&self) -> Option<bool> {
        self.attributes.has_strikethrough
    }

    /// Returns whether the text is underlined, if set.
    #[inline]
    pub fn has_underline(&self) -> Option<bool> {
        self.attributes.has_underline
    }

    /// Returns whether lines may break between any two characters, if set.
    #[inline]
    pub fn wrap_anywhere(&self) -> Option<bool> {
        self.attributes.wrap_anywhere
    }

    /// Returns `true` if `attribute` is set on this style (not on its fallback chain).
    #[inline]
    pub fn is_set(&self, attribute: Attribute) -> bool {
        self.attributes.is_set(attribute)
    }

    /// Returns the attributes of this style that are still unset, in declaration order.
    pub fn unset_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| !self.is_set(*attribute))
    }

    /// Returns `true` once [`TextStyle::apply_global_style`] has run on this instance.
    #[inline]
    pub fn has_global_style_applied(&self) -> bool {
        self.global_style_applied
    }
}

impl Clone for TextStyle {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            fallback: self.fallback.clone(),
            global_style_applied: false,
        }
    }
}

impl PartialEq for TextStyle {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.fallback == other.fallback
    }
}
