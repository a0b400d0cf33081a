// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`header`] - Site header with brand, navigation, and language selector
//! - [`footer`] - Footer with links, contact lines, and copyright
//! - [`chat_widget`] - Floating chat-contact widget
//! - [`uploader`] - Image-upload widget with validation and preview
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod chat_widget;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod styles;
pub mod uploader;
