// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use style_primitives::{Color, FontFamily, FontPosition, FontWeight};

/// Names a single attribute of a [`TextStyle`](crate::TextStyle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Attribute {
    /// Text color.
    Color,
    /// Background color behind the text.
    BackgroundColor,
    /// Font family.
    FontFamily,
    /// Font size.
    Size,
    /// Line height, as a multiple of the font size.
    LineHeight,
    /// Font weight.
    FontWeight,
    /// Position relative to the baseline.
    FontPosition,
    /// Italic flag.
    Italic,
    /// Strikethrough decoration flag.
    Strikethrough,
    /// Underline decoration flag.
    Underline,
    /// Whether lines may break between any two characters.
    WrapAnywhere,
}

impl Attribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Color,
        Self::BackgroundColor,
        Self::FontFamily,
        Self::Size,
        Self::LineHeight,
        Self::FontWeight,
        Self::FontPosition,
        Self::Italic,
        Self::Strikethrough,
        Self::Underline,
        Self::WrapAnywhere,
    ];

    /// Returns a short, kebab-case name for the attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::FontFamily => "font-family",
            Self::Size => "size",
            Self::LineHeight => "line-height",
            Self::FontWeight => "font-weight",
            Self::FontPosition => "font-position",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underline",
            Self::WrapAnywhere => "wrap-anywhere",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The attribute fields of a text style, without its fallback chain.
///
/// Kept apart from [`TextStyle`](crate::TextStyle) so that a style's attributes can be borrowed
/// while its fallback link is borrowed mutably.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Attributes {
    pub(crate) color: Option<Color>,
    pub(crate) background_color: Option<Color>,
    pub(crate) font_family: Option<FontFamily>,
    pub(crate) size: Option<f32>,
    pub(crate) line_height: Option<f32>,
    pub(crate) font_weight: Option<FontWeight>,
    pub(crate) font_position: Option<FontPosition>,
    pub(crate) is_italic: Option<bool>,
    pub(crate) has_strikethrough: Option<bool>,
    pub(crate) has_underline: Option<bool>,
    pub(crate) wrap_anywhere: Option<bool>,
}

impl Attributes {
    /// Fills every unset attribute from `parent`. Set attributes are left alone.
    pub(crate) fn inherit_from(&mut self, parent: &Self) {
        fill(&mut self.color, &parent.color);
        fill(&mut self.background_color, &parent.background_color);
        fill(&mut self.font_family, &parent.font_family);
        fill(&mut self.size, &parent.size);
        fill(&mut self.line_height, &parent.line_height);
        fill(&mut self.font_weight, &parent.font_weight);
        fill(&mut self.font_position, &parent.font_position);
        fill(&mut self.is_italic, &parent.is_italic);
        fill(&mut self.has_strikethrough, &parent.has_strikethrough);
        fill(&mut self.has_underline, &parent.has_underline);
        fill(&mut self.wrap_anywhere, &parent.wrap_anywhere);
    }

    /// Replaces every attribute that is set on `other`. Attributes unset on `other` are left
    /// alone.
    pub(crate) fn override_with(&mut self, other: &Self) {
        replace(&mut self.color, &other.color);
        replace(&mut self.background_color, &other.background_color);
        replace(&mut self.font_family, &other.font_family);
        replace(&mut self.size, &other.size);
        replace(&mut self.line_height, &other.line_height);
        replace(&mut self.font_weight, &other.font_weight);
        replace(&mut self.font_position, &other.font_position);
        replace(&mut self.is_italic, &other.is_italic);
        replace(&mut self.has_strikethrough, &other.has_strikethrough);
        replace(&mut self.has_underline, &other.has_underline);
        replace(&mut self.wrap_anywhere, &other.wrap_anywhere);
    }

    pub(crate) fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Color => self.color.is_some(),
            Attribute::BackgroundColor => self.background_color.is_some(),
            Attribute::FontFamily => self.font_family.is_some(),
            Attribute::Size => self.size.is_some(),
            Attribute::LineHeight => self.line_height.is_some(),
            Attribute::FontWeight => self.font_weight.is_some(),
            Attribute::FontPosition => self.font_position.is_some(),
            Attribute::Italic => self.is_italic.is_some(),
            Attribute::Strikethrough => self.has_strikethrough.is_some(),
            Attribute::Underline => self.has_underline.is_some(),
            Attribute::WrapAnywhere => self.wrap_anywhere.is_some(),
        }
    }
}

#[inline]
fn fill<T: Clone>(slot: &mut Option<T>, parent: &Option<T>) {
    if slot.is_none() {
        slot.clone_from(parent);
    }
}

#[inline]
fn replace<T: Clone>(slot: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        slot.clone_from(other);
    }
}
