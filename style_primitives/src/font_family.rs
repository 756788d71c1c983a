// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// An opaque font family identifier.
///
/// The family is looked up by name on the rendering side; this type only carries the name and
/// compares it exactly (case-sensitive, no whitespace normalization).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontFamily(Cow<'static, str>);

impl FontFamily {
    /// Creates a font family from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a font family from a name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the family name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FontFamily {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
