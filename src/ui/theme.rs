// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the panel overlay and the demo shell.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_800, GRAY_900, WHITE},
};
use iced::Color;

/// Flat background of the mock scene surface.
pub fn scene_surface_color() -> Color {
    GRAY_900
}

/// Grid lines drawn over the mock scene surface.
pub fn scene_grid_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Background of the demo shell's chrome (status bar, tool strip).
pub fn chrome_background_color() -> Color {
    GRAY_800
}

/// Fill of the translucent ghost marking the panel's pinned target.
pub fn placeholder_fill_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Outline of the placeholder ghost.
pub fn placeholder_border_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..WHITE
    }
}

/// Border of the panel frame.
pub fn panel_border_color() -> Color {
    palette::PRIMARY_500
}

/// Dark fill shown behind the panel while no camera frame is set.
pub fn panel_empty_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Fill color for the panel resize handles.
pub fn handle_color() -> Color {
    WHITE
}

/// Border color for the panel resize handles.
pub fn handle_border_color() -> Color {
    BLACK
}

/// Color of the pin indicator glyph.
pub fn pin_indicator_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..WHITE
    }
}
