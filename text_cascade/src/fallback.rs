// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use crate::TextStyle;

/// Iterator over a style and its fallback chain, primary style first.
///
/// Created by [`TextStyle::fallback_chain`].
#[derive(Clone, Debug)]
pub struct FallbackChain<'a> {
    next: Option<&'a TextStyle>,
}

impl<'a> Iterator for FallbackChain<'a> {
    type Item = &'a TextStyle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.fallback();
        Some(current)
    }
}

impl FusedIterator for FallbackChain<'_> {}

impl TextStyle {
    /// Returns the next style in the fallback chain, if any.
    #[inline]
    pub fn fallback(&self) -> Option<&Self> {
        self.fallback.as_deref()
    }

    /// Returns the next style in the fallback chain mutably, if any.
    #[inline]
    pub fn fallback_mut(&mut self) -> Option<&mut Self> {
        self.fallback.as_deref_mut()
    }

    /// Detaches and returns this style's fallback chain.
    pub fn take_fallback(&mut self) -> Option<Self> {
        self.fallback.take().map(|fallback| *fallback)
    }

    /// Iterates over this style followed by each style of its fallback chain, in the order a
    /// renderer should try them.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    ///
    /// let style = TextStyle::new()
    ///     .with_size(10.0)
    ///     .with_fallback(TextStyle::new().with_size(11.0));
    /// let sizes: Vec<_> = style.fallback_chain().map(|s| s.size()).collect();
    /// assert_eq!(sizes, [Some(10.0), Some(11.0)]);
    /// ```
    #[inline]
    pub fn fallback_chain(&self) -> FallbackChain<'_> {
        FallbackChain { next: Some(self) }
    }

    /// Returns the number of styles in the fallback chain, not counting this one.
    pub fn fallback_depth(&self) -> usize {
        self.fallback_chain().count() - 1
    }
}
