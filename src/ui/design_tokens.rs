// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the panel overlay and the demo editor shell.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Accent colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side length of the square resize handles at the panel's top corners.
    pub const RESIZE_HANDLE: f32 = 30.0;

    /// Side length of the pin indicator at the panel's bottom-left corner.
    pub const PIN_INDICATOR: f32 = 30.0;

    /// Stroke width of the panel frame.
    pub const PANEL_BORDER: f32 = 2.0;

    /// Height of the demo shell's status bar.
    pub const STATUS_BAR_HEIGHT: f32 = 28.0;

    /// Width of the demo shell's tool strip chrome.
    pub const TOOL_STRIP_WIDTH: f32 = 48.0;
}

const _: () = {
    assert!(sizing::RESIZE_HANDLE > 0.0);
    assert!(sizing::PIN_INDICATOR > 0.0);
};
