// SPDX-License-Identifier: MPL-2.0
//! Panel message/event types re-exported by the facade.

use crate::ui::preview_panel::pin::PinEdge;

/// Pointer button messages published by the overlay canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Left button pressed on the panel body.
    DragHandlePressed,
    /// Left button released after a drag-handle press.
    DragHandleReleased,
    /// Left button pressed on the visible resize handle.
    ResizeHandlePressed,
    /// Left button released after a resize-handle press.
    ResizeHandleReleased,
}

/// Events propagated to the embedding application for side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The pinned edge flipped while dragging.
    PinnedEdgeChanged(PinEdge),
}
