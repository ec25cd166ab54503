// SPDX-License-Identifier: MPL-2.0
//! Pure geometry for the floating preview panel.
//!
//! Everything here is a function of its arguments: the interaction state
//! machine feeds in desired geometry plus the container bounds, and gets
//! back the geometry the panel is allowed to occupy.

use iced::{Point, Size};

use crate::config::{MAX_HEIGHT_FRACTION, MAX_WIDTH_FRACTION};
use crate::ui::preview_panel::pin::{Inset, PinEdge};

/// Height-over-width ratio of the project viewport, guaranteed positive.
///
/// Construction from a non-positive viewport dimension logs an error once
/// and falls back to a square ratio instead of producing NaN/Inf geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    #[must_use]
    pub fn from_viewport(width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 {
            Self(height / width)
        } else {
            warn_misconfigured_viewport(width, height);
            Self(1.0)
        }
    }

    /// Returns the raw height/width ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Portrait projects clamp the panel minimum by height, landscape
    /// projects by width.
    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.0 > 1.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self(1.0)
    }
}

fn warn_misconfigured_viewport(width: f32, height: f32) {
    use std::sync::Once;

    static MISCONFIGURED: Once = Once::new();
    MISCONFIGURED.call_once(|| {
        tracing::error!(
            width,
            height,
            "configured viewport dimensions must be positive; using a 1:1 preview ratio"
        );
    });
}

/// Current panel rectangle in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub position: Point,
    pub size: Size,
}

/// Clamps a desired panel size to the project aspect ratio, the container
/// bounds, and the minimum panel size.
///
/// The height is always derived from the width first, so any input obeys
/// the ratio. Maximum bounds are applied ratio-preserving, height before
/// width. The minimum applies to the dominant axis only: applying a width
/// floor to a portrait panel would make the derived height far too big.
#[must_use]
pub fn clamped_size(
    desired: Size,
    container: Size,
    ratio: AspectRatio,
    min_panel_size: f32,
) -> Size {
    let r = ratio.value();
    let max_bounds = Size::new(
        container.width * MAX_WIDTH_FRACTION,
        container.height * MAX_HEIGHT_FRACTION,
    );

    let mut size = Size::new(desired.width, desired.width * r);

    // Clamp the max size while respecting the aspect ratio.
    if size.height >= max_bounds.height {
        size = Size::new(max_bounds.height / r, max_bounds.height);
    }
    if size.width >= max_bounds.width {
        size = Size::new(max_bounds.width, max_bounds.width * r);
    }

    if ratio.is_portrait() {
        if size.height <= min_panel_size {
            size = Size::new(min_panel_size / r, min_panel_size);
        }
    } else if size.width <= min_panel_size {
        size = Size::new(min_panel_size, min_panel_size * r);
    }

    // Round down to avoid sub-pixel artifacts, mainly seen around the margins.
    Size::new(size.width.floor(), size.height.floor())
}

/// Clamps a desired panel position into the container, keeping
/// `focus_ring` clearance on every side.
///
/// When the panel outgrows the container the bounds invert; the clamp
/// degrades to the lower bound instead of panicking like `f32::clamp`.
#[must_use]
pub fn clamped_position(
    desired: Point,
    container_position: Point,
    container_size: Size,
    panel_size: Size,
    focus_ring: f32,
) -> Point {
    let min = Point::new(
        container_position.x + focus_ring,
        container_position.y + focus_ring,
    );
    let max = Point::new(
        container_position.x + container_size.width - panel_size.width - focus_ring,
        container_position.y + container_size.height - panel_size.height - focus_ring,
    );

    Point::new(
        clamp_axis(desired.x, min.x, max.x),
        clamp_axis(desired.y, min.y, max.y),
    )
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Container-local position anchoring the panel flush against the given
/// edge, bottom-aligned, offset by `margin` and the caller inset.
///
/// The inset only shifts the left/bottom sides: it exists to keep the
/// panel clear of editor chrome overlapping those edges.
#[must_use]
pub fn pinned_position(
    edge: PinEdge,
    container_size: Size,
    panel_size: Size,
    margin: f32,
    inset: Inset,
) -> Point {
    let y = container_size.height - panel_size.height - margin - inset.bottom;

    match edge {
        PinEdge::Left => Point::new(margin + inset.left, y),
        PinEdge::Right => Point::new(container_size.width - panel_size.width - margin, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_PANEL_SIZE;

    const LANDSCAPE: f32 = 1080.0 / 1920.0;
    const PORTRAIT: f32 = 1920.0 / 1080.0;

    fn landscape() -> AspectRatio {
        AspectRatio::from_viewport(1920.0, 1080.0)
    }

    fn portrait() -> AspectRatio {
        AspectRatio::from_viewport(1080.0, 1920.0)
    }

    #[test]
    fn ratio_from_viewport() {
        assert!((landscape().value() - LANDSCAPE).abs() < f32::EPSILON);
        assert!((portrait().value() - PORTRAIT).abs() < f32::EPSILON);
        assert!(!landscape().is_portrait());
        assert!(portrait().is_portrait());
    }

    #[test]
    fn degenerate_viewport_falls_back_to_square() {
        assert_eq!(AspectRatio::from_viewport(0.0, 1080.0).value(), 1.0);
        assert_eq!(AspectRatio::from_viewport(1920.0, -5.0).value(), 1.0);
    }

    #[test]
    fn clamped_size_preserves_ratio_landscape() {
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(Size::new(400.0, 400.0), container, landscape(), MIN_PANEL_SIZE);

        // Floor rounding allows up to one pixel of drift.
        assert!((size.height / size.width - LANDSCAPE).abs() < 1.0 / size.width);
    }

    #[test]
    fn clamped_size_preserves_ratio_portrait() {
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(Size::new(400.0, 400.0), container, portrait(), MIN_PANEL_SIZE);

        assert!((size.height / size.width - PORTRAIT).abs() < PORTRAIT / size.width);
    }

    #[test]
    fn clamped_size_respects_max_bounds() {
        let container = Size::new(1000.0, 500.0);
        let size = clamped_size(
            Size::new(5000.0, 5000.0),
            container,
            landscape(),
            MIN_PANEL_SIZE,
        );

        assert!(size.width <= container.width * MAX_WIDTH_FRACTION);
        assert!(size.height <= container.height * MAX_HEIGHT_FRACTION);
    }

    #[test]
    fn clamped_size_applies_min_on_width_for_landscape() {
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(Size::new(10.0, 10.0), container, landscape(), MIN_PANEL_SIZE);

        assert_eq!(size.width, MIN_PANEL_SIZE);
        assert_eq!(size.height, (MIN_PANEL_SIZE * LANDSCAPE).floor());
    }

    #[test]
    fn clamped_size_applies_min_on_height_for_portrait() {
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(Size::new(10.0, 10.0), container, portrait(), MIN_PANEL_SIZE);

        assert_eq!(size.height, MIN_PANEL_SIZE);
        assert_eq!(size.width, (MIN_PANEL_SIZE / PORTRAIT).floor());
    }

    #[test]
    fn default_request_in_full_hd_container() {
        // Landscape project: the min-size floor checks the width (300),
        // not the derived height, so 300x168 survives unchanged.
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(
            Size::new(300.0, 300.0),
            container,
            landscape(),
            MIN_PANEL_SIZE,
        );

        assert_eq!(size.width, 300.0);
        assert_eq!(size.height, 168.0);
    }

    #[test]
    fn clamped_size_output_is_whole_pixels() {
        let container = Size::new(1920.0, 1080.0);
        let size = clamped_size(
            Size::new(333.3, 333.3),
            container,
            landscape(),
            MIN_PANEL_SIZE,
        );

        assert_eq!(size.width, size.width.floor());
        assert_eq!(size.height, size.height.floor());
    }

    #[test]
    fn clamped_size_survives_degenerate_container() {
        let size = clamped_size(
            Size::new(300.0, 300.0),
            Size::new(0.0, 0.0),
            landscape(),
            MIN_PANEL_SIZE,
        );

        assert!(size.width.is_finite());
        assert!(size.height.is_finite());
        assert!(size.width >= 0.0);
        assert!(size.height >= 0.0);
    }

    #[test]
    fn clamped_position_keeps_panel_inside() {
        let clamped = clamped_position(
            Point::new(-500.0, 4000.0),
            Point::new(100.0, 50.0),
            Size::new(1000.0, 600.0),
            Size::new(300.0, 200.0),
            2.0,
        );

        assert_eq!(clamped.x, 102.0);
        assert_eq!(clamped.y, 50.0 + 600.0 - 200.0 - 2.0);
    }

    #[test]
    fn clamped_position_degrades_to_lower_bound_when_panel_too_big() {
        let clamped = clamped_position(
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Size::new(100.0, 100.0),
            Size::new(500.0, 500.0),
            2.0,
        );

        assert_eq!(clamped, Point::new(2.0, 2.0));
    }

    #[test]
    fn pinned_positions_mirror_horizontally() {
        let container = Size::new(1920.0, 1080.0);
        let panel = Size::new(300.0, 168.0);
        let margin = 10.0;

        let left = pinned_position(PinEdge::Left, container, panel, margin, Inset::default());
        let right = pinned_position(PinEdge::Right, container, panel, margin, Inset::default());

        assert_eq!(left.x + right.x + panel.width, container.width);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn inset_shifts_left_pin_only() {
        let container = Size::new(1920.0, 1080.0);
        let panel = Size::new(300.0, 168.0);
        let inset = Inset {
            left: 48.0,
            bottom: 24.0,
        };

        let left = pinned_position(PinEdge::Left, container, panel, 10.0, inset);
        let right = pinned_position(PinEdge::Right, container, panel, 10.0, inset);

        assert_eq!(left.x, 10.0 + 48.0);
        // The right pin ignores the left inset but both honor the bottom one.
        assert_eq!(right.x, container.width - panel.width - 10.0);
        assert_eq!(left.y, container.height - panel.height - 10.0 - 24.0);
        assert_eq!(left.y, right.y);
    }
}
