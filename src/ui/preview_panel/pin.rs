// SPDX-License-Identifier: MPL-2.0
//! Edge pinning: which container side the panel snaps to.

use iced::Rectangle;

/// Container edge the panel keeps flush against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinEdge {
    Left,
    #[default]
    Right,
}

impl PinEdge {
    /// Resolves the nearest edge for a pointer by comparing it to the
    /// container's horizontal midpoint.
    #[must_use]
    pub fn resolve(pointer_x: f32, container: Rectangle) -> Self {
        let halfway_point = container.x + container.width / 2.0;

        if pointer_x < halfway_point {
            PinEdge::Left
        } else {
            PinEdge::Right
        }
    }

    /// Returns the other edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            PinEdge::Left => PinEdge::Right,
            PinEdge::Right => PinEdge::Left,
        }
    }
}

/// Offsets keeping the panel clear of fixed editor chrome along the
/// container's left and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub left: f32,
    pub bottom: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn container() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1000.0, 600.0))
    }

    #[test]
    fn pointer_left_of_midpoint_resolves_left() {
        assert_eq!(PinEdge::resolve(400.0, container()), PinEdge::Left);
    }

    #[test]
    fn pointer_right_of_midpoint_resolves_right() {
        assert_eq!(PinEdge::resolve(600.0, container()), PinEdge::Right);
    }

    #[test]
    fn midpoint_itself_resolves_right() {
        assert_eq!(PinEdge::resolve(500.0, container()), PinEdge::Right);
    }

    #[test]
    fn offset_container_shifts_the_midpoint() {
        let offset = Rectangle::new(Point::new(200.0, 0.0), Size::new(1000.0, 600.0));
        assert_eq!(PinEdge::resolve(600.0, offset), PinEdge::Left);
    }

    #[test]
    fn opposite_flips_both_ways() {
        assert_eq!(PinEdge::Left.opposite(), PinEdge::Right);
        assert_eq!(PinEdge::Right.opposite(), PinEdge::Left);
    }
}
