// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `text_cascade` and `text_cascade_cache`.
//!
//! - The `util` module holds a minimal layout tree that resolves styles top-down the way a layout
//!   pass does. Tests build trees with it instead of calling the resolvers node by node.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities are compiled once.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `fallback_inherits_from_primary` rather than `primary_is_inherited_by_fallback`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod cache;
mod cascade;
mod overrides;
mod util;
