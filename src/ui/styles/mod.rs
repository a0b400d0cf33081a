// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons and containers.
//!
//! Style functions live here rather than inline in views so the header,
//! footer, chat widget, and uploader stay visually consistent.

pub mod button;
pub mod container;
