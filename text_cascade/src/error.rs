// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Attribute;

/// Error returned by [`TextStyle::to_resolved`](crate::TextStyle::to_resolved) when an attribute
/// is still unset.
///
/// This usually means the style was resolved against an ancestor that was not itself resolved,
/// or not resolved at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnresolvedAttributeError {
    attribute: Attribute,
    depth: usize,
}

impl UnresolvedAttributeError {
    pub(crate) const fn new(attribute: Attribute, depth: usize) -> Self {
        Self { attribute, depth }
    }

    /// Returns the first attribute found unset.
    pub const fn attribute(self) -> Attribute {
        self.attribute
    }

    /// Returns where in the fallback chain the attribute was found unset: `0` for the primary
    /// style, `1` for its first fallback, and so on.
    pub const fn depth(self) -> usize {
        self.depth
    }
}

impl fmt::Display for UnresolvedAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth == 0 {
            write!(f, "attribute `{}` is unresolved", self.attribute)
        } else {
            write!(
                f,
                "attribute `{}` is unresolved in fallback {}",
                self.attribute, self.depth
            )
        }
    }
}

impl core::error::Error for UnresolvedAttributeError {}
