// SPDX-License-Identifier: MPL-2.0
//! Interaction state of the preview panel.

use iced::{Point, Size};

use crate::ui::preview_panel::tween::PositionTween;

/// Pointer and panel geometry captured when a resize or drag begins.
///
/// Lives only inside the [`InteractionState`] variant that owns it and is
/// dropped when the state is exited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Global pointer position at session start.
    pub pointer: Point,
    /// Global panel position at session start.
    pub panel_position: Point,
    /// Panel size at session start.
    pub panel_size: Size,
}

/// Exactly one variant is live at a time; transitions happen only in the
/// pointer-message handlers and the per-frame tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    None,
    Resizing(DragSession),
    Dragging(DragSession),
    /// Drag released; the snap-back tween is built on the next tick.
    AnimateStart,
    Animating(PositionTween),
}

impl InteractionState {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, InteractionState::None)
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, InteractionState::Resizing(_))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self,
            InteractionState::AnimateStart | InteractionState::Animating(_)
        )
    }

    /// Whether a new resize/drag session may begin in this state.
    ///
    /// A press while the snap-back animation runs catches the panel and
    /// cancels the tween; a press during the *other* session kind is
    /// rejected.
    #[must_use]
    pub fn accepts_new_session(&self) -> bool {
        matches!(
            self,
            InteractionState::None
                | InteractionState::AnimateStart
                | InteractionState::Animating(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DragSession {
        DragSession {
            pointer: Point::new(10.0, 20.0),
            panel_position: Point::new(5.0, 5.0),
            panel_size: Size::new(300.0, 168.0),
        }
    }

    #[test]
    fn default_state_is_none() {
        assert!(InteractionState::default().is_none());
    }

    #[test]
    fn live_sessions_reject_new_ones() {
        assert!(!InteractionState::Resizing(session()).accepts_new_session());
        assert!(!InteractionState::Dragging(session()).accepts_new_session());
    }

    #[test]
    fn idle_and_animating_accept_new_sessions() {
        assert!(InteractionState::None.accepts_new_session());
        assert!(InteractionState::AnimateStart.accepts_new_session());
    }
}
