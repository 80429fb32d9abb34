// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines trace sinks for carousel diagnostics.
//!
//! This crate provides [`TraceSink`](carousel_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`] — one JSON object per line, for piping into
//!   other tools.

pub mod json;
pub mod pretty;
