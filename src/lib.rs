// SPDX-License-Identifier: MPL-2.0
//! `scene_lens` is a floating picture-in-picture camera preview panel for
//! scene editors, built with the Iced GUI framework.
//!
//! The heart of the crate is [`ui::preview_panel`]: a draggable,
//! resizable overlay panel that pins itself to the left or right edge of
//! its host container, keeps the project aspect ratio while resizing, and
//! eases back into place after a drag. The demo shell in [`app`] embeds
//! the panel over a mock scene surface.

#![doc(html_root_url = "https://docs.rs/scene_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
