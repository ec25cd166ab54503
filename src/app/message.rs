// SPDX-License-Identifier: MPL-2.0
//! Application message and launch-flag types.

use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

use crate::ui::preview_panel;

/// Launch flags parsed from the command line in `main`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured viewport width.
    pub viewport_width: Option<f32>,
    /// Overrides the configured viewport height.
    pub viewport_height: Option<f32>,
    /// Loads the config from an explicit path instead of the user config dir.
    pub config_path: Option<PathBuf>,
}

/// Messages handled by the demo editor shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer messages published by the panel overlay.
    Panel(preview_panel::Message),
    /// Per-frame tick driving the panel state machine.
    Tick(Instant),
    /// Global cursor position changed.
    CursorMoved(Point),
    /// The window (and with it the host container) was resized.
    WindowResized(Size),
}

impl From<preview_panel::Message> for Message {
    fn from(message: preview_panel::Message) -> Self {
        Message::Panel(message)
    }
}
