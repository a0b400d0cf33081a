// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is the bilingual front end of a small business-portfolio
//! site, built with the Iced GUI framework.
//!
//! It provides the site chrome (header, footer, floating chat-contact widget)
//! and an image-upload widget with client-side validation and asynchronous
//! preview generation, and demonstrates internationalization with Fluent and
//! user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod routes;
pub mod ui;
