// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade and override merges.

use crate::attributes::Attributes;
use crate::TextStyle;

impl TextStyle {
    /// Resolves this style against an already-resolved ancestor.
    ///
    /// This is the entry point a layout pass calls for each node, top-down. The first call:
    /// 1. fills every unset attribute from `global` (see [`TextStyle::apply_ancestor_style`]),
    ///    including a copy of its fallback chain if this style has none;
    /// 2. resolves this style's fallback chain, each link inheriting from the link before it,
    ///    starting with this (now resolved) style.
    ///
    /// Later calls are no-ops, whatever `global` is, so a node visited by several measurement
    /// passes keeps the result of the first one. Clone the style to resolve it again.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    /// use text_cascade::style::colors;
    ///
    /// let root = TextStyle::library_default();
    /// let mut style = TextStyle::new().with_color(colors::RED);
    /// style.apply_global_style(&root);
    /// assert_eq!(style.color(), Some(&colors::RED));
    /// assert_eq!(style.size(), Some(12.0));
    ///
    /// // Already resolved: this has no effect.
    /// style.apply_global_style(&TextStyle::new().with_size(20.0));
    /// assert_eq!(style.size(), Some(12.0));
    /// ```
    pub fn apply_global_style(&mut self, global: &Self) {
        if self.global_style_applied {
            log::trace!("text style already resolved; skipping");
            return;
        }
        self.global_style_applied = true;
        self.apply_ancestor_style(global);

        if self.fallback.is_some() {
            let depth = self.resolve_fallback_chain();
            log::trace!("resolved fallback chain of depth {depth}");
        }
    }

    /// Fills every unset attribute from `ancestor`, without touching attributes that are set.
    ///
    /// An attribute unset on both styles stays unset. If this style has no fallback chain, it
    /// receives a deep copy of `ancestor`'s chain; an existing chain is kept as is.
    ///
    /// Unlike [`TextStyle::apply_global_style`] this neither checks nor sets the resolved flag and
    /// does not resolve the fallback chain.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    ///
    /// let ancestor = TextStyle::new().with_size(12.0).with_underline(true);
    /// let mut style = TextStyle::new().with_size(18.0);
    /// style.apply_ancestor_style(&ancestor);
    /// assert_eq!(style.size(), Some(18.0));
    /// assert_eq!(style.has_underline(), Some(true));
    /// assert_eq!(style.is_italic(), None);
    /// ```
    pub fn apply_ancestor_style(&mut self, ancestor: &Self) {
        self.attributes.inherit_from(&ancestor.attributes);
        if self.fallback.is_none() {
            self.fallback.clone_from(&ancestor.fallback);
        }
    }

    /// Replaces every attribute that is set on `other`, regardless of what this style holds.
    ///
    /// Attributes unset on `other` are left alone. If `other` has a fallback chain, this style's
    /// chain is replaced with a deep copy of it; otherwise this style's chain is kept.
    ///
    /// This is the opposite precedence of the cascade, meant for explicit re-styling. The resolved
    /// flag is not changed.
    ///
    /// ```
    /// use text_cascade::TextStyle;
    /// use text_cascade::style::colors;
    ///
    /// let mut style = TextStyle::new().with_color(colors::BLACK).with_size(12.0);
    /// style.override_style(&TextStyle::new().with_color(colors::RED));
    /// assert_eq!(style.color(), Some(&colors::RED));
    /// assert_eq!(style.size(), Some(12.0));
    /// ```
    pub fn override_style(&mut self, other: &Self) {
        self.attributes.override_with(&other.attributes);
        if other.fallback.is_some() {
            self.fallback.clone_from(&other.fallback);
        }
    }

    /// By-value form of [`TextStyle::override_style`], for builder chains.
    #[must_use]
    pub fn overridden_by(mut self, other: &Self) -> Self {
        self.override_style(other);
        self
    }

    /// Resolves each fallback link against the link before it, starting from this style.
    ///
    /// Links only inherit attributes. A link's own chain is fixed and is never extended from its
    /// parent. Returns the number of links visited.
    fn resolve_fallback_chain(&mut self) -> usize {
        let mut depth = 0;
        let mut parent: &Attributes = &self.attributes;
        let mut next = self.fallback.as_deref_mut();
        while let Some(link) = next {
            link.attributes.inherit_from(parent);
            depth += 1;
            parent = &link.attributes;
            next = link.fallback.as_deref_mut();
        }
        depth
    }
}
