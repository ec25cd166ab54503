// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewport**: Project viewport dimensions (aspect-ratio source)
//! - **Panel**: Preview panel size bounds and placement metrics
//! - **Interaction**: Hover detection and snap-back animation timing

use std::time::Duration;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Default configured viewport width when no project config exists.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1920.0;

/// Default configured viewport height when no project config exists.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1080.0;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Minimum panel extent along the ratio-determined dominant axis
/// (width for landscape projects, height for portrait ones).
pub const MIN_PANEL_SIZE: f32 = 250.0;

/// Size requested for the panel before the first clamp pass.
pub const DEFAULT_PANEL_SIZE: f32 = 300.0;

/// The panel may occupy at most this fraction of the container width.
pub const MAX_WIDTH_FRACTION: f32 = 0.6;

/// The panel may occupy at most this fraction of the container height.
pub const MAX_HEIGHT_FRACTION: f32 = 0.8;

/// Gap kept between the panel and the container edge it is pinned to.
pub const PIN_MARGIN: f32 = 10.0;

/// Clearance kept around the panel so the focus ring is never clipped
/// by the container bounds.
pub const FOCUS_RING_SIZE: f32 = 2.0;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// The panel controls stay visible while the pointer is within the panel
/// bounds grown by this margin.
pub const HOVER_MARGIN: f32 = 40.0;

/// Duration of the snap-back animation after a drag is released.
pub const SNAP_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Cadence of the per-frame tick driving the panel (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_bounds_are_fractions() {
        assert!(MAX_WIDTH_FRACTION > 0.0 && MAX_WIDTH_FRACTION < 1.0);
        assert!(MAX_HEIGHT_FRACTION > 0.0 && MAX_HEIGHT_FRACTION < 1.0);
    }

    #[test]
    fn default_request_exceeds_minimum() {
        assert!(DEFAULT_PANEL_SIZE >= MIN_PANEL_SIZE);
    }
}
