// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cache keys projected from a subset of style attributes.
//!
//! A key answers "what does this computation depend on": two styles with equal keys can share
//! whatever resource is built from them. Keys are owned values, `Eq + Hash`, and safe to send
//! between threads. No caching happens here.
//!
//! Unset attributes take part in the key as `None`, so a key projected from an unresolved style
//! never equals one projected from a resolved style that sets the same attribute.

use style_primitives::{Color, FontFamily, FontPosition, FontWeight};

use crate::resolved::ResolvedTextStyle;
use crate::TextStyle;

/// Font size as stored in a key: its bit pattern, with `-0.0` folded into `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SizeBits(u32);

impl SizeBits {
    fn new(size: f32) -> Self {
        if size == 0.0 {
            Self(0.0_f32.to_bits())
        } else {
            Self(size.to_bits())
        }
    }

    fn get(self) -> f32 {
        f32::from_bits(self.0)
    }
}

/// Everything needed to build a drawable glyph paint: family, size, weight, position, italic
/// flag and color, in that order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintKey {
    font_family: Option<FontFamily>,
    size: Option<SizeBits>,
    font_weight: Option<FontWeight>,
    font_position: Option<FontPosition>,
    is_italic: Option<bool>,
    color: Option<Color>,
}

impl PaintKey {
    /// Returns the font family component.
    pub fn font_family(&self) -> Option<&FontFamily> {
        self.font_family.as_ref()
    }

    /// Returns the font size component.
    pub fn size(&self) -> Option<f32> {
        self.size.map(SizeBits::get)
    }

    /// Returns the font weight component.
    pub fn font_weight(&self) -> Option<FontWeight> {
        self.font_weight
    }

    /// Returns the font position component.
    pub fn font_position(&self) -> Option<FontPosition> {
        self.font_position
    }

    /// Returns the italic component.
    pub fn is_italic(&self) -> Option<bool> {
        self.is_italic
    }

    /// Returns the color component.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Projects this key down to the font metrics key of the same style.
    pub fn font_metrics_key(&self) -> FontMetricsKey {
        FontMetricsKey {
            font_family: self.font_family.clone(),
            size: self.size,
            font_weight: self.font_weight,
            is_italic: self.is_italic,
        }
    }
}

/// Everything needed to compute font metrics: family, size, weight and italic flag, in that
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontMetricsKey {
    font_family: Option<FontFamily>,
    size: Option<SizeBits>,
    font_weight: Option<FontWeight>,
    is_italic: Option<bool>,
}

impl FontMetricsKey {
    /// Returns the font family component.
    pub fn font_family(&self) -> Option<&FontFamily> {
        self.font_family.as_ref()
    }

    /// Returns the font size component.
    pub fn size(&self) -> Option<f32> {
        self.size.map(SizeBits::get)
    }

    /// Returns the font weight component.
    pub fn font_weight(&self) -> Option<FontWeight> {
        self.font_weight
    }

    /// Returns the italic component.
    pub fn is_italic(&self) -> Option<bool> {
        self.is_italic
    }
}

impl TextStyle {
    /// Returns the key identifying the glyph paint resource for this style.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    /// use text_cascade::style::colors;
    ///
    /// let a = TextStyle::new().with_size(12.0).with_background_color(colors::WHITE);
    /// let b = TextStyle::new().with_size(12.0).with_underline(true);
    /// assert_eq!(a.paint_key(), b.paint_key());
    ///
    /// let c = TextStyle::new().with_size(12.0).with_color(colors::RED);
    /// assert_ne!(a.paint_key(), c.paint_key());
    /// ```
    pub fn paint_key(&self) -> PaintKey {
        let attributes = &self.attributes;
        PaintKey {
            font_family: attributes.font_family.clone(),
            size: attributes.size.map(SizeBits::new),
            font_weight: attributes.font_weight,
            font_position: attributes.font_position,
            is_italic: attributes.is_italic,
            color: attributes.color.clone(),
        }
    }

    /// Returns the key identifying the font metrics for this style.
    pub fn font_metrics_key(&self) -> FontMetricsKey {
        let attributes = &self.attributes;
        FontMetricsKey {
            font_family: attributes.font_family.clone(),
            size: attributes.size.map(SizeBits::new),
            font_weight: attributes.font_weight,
            is_italic: attributes.is_italic,
        }
    }
}

impl ResolvedTextStyle {
    /// Returns the key identifying the glyph paint resource for this style.
    ///
    /// Equal to [`TextStyle::paint_key`] of the style this was converted from.
    pub fn paint_key(&self) -> PaintKey {
        PaintKey {
            font_family: Some(self.font_family.clone()),
            size: Some(SizeBits::new(self.size)),
            font_weight: Some(self.font_weight),
            font_position: Some(self.font_position),
            is_italic: Some(self.is_italic),
            color: Some(self.color.clone()),
        }
    }

    /// Returns the key identifying the font metrics for this style.
    ///
    /// Equal to [`TextStyle::font_metrics_key`] of the style this was converted from.
    pub fn font_metrics_key(&self) -> FontMetricsKey {
        FontMetricsKey {
            font_family: Some(self.font_family.clone()),
            size: Some(SizeBits::new(self.size)),
            font_weight: Some(self.font_weight),
            is_italic: Some(self.is_italic),
        }
    }
}
