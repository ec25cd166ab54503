// SPDX-License-Identifier: MPL-2.0
//! Floating picture-in-picture camera preview panel.
//!
//! This module follows a "state down, messages up" pattern: the embedder
//! feeds a [`TickContext`] snapshot once per frame and routes pointer
//! button messages from the overlay canvas through [`State::update`];
//! both return an [`Event`] for the parent to act on.
//!
//! The panel keeps itself pinned to the left or right container edge,
//! clamps its size to the project aspect ratio, and animates back into
//! place after a drag.

mod geometry;
mod interaction;
mod messages;
mod pin;
mod surface;
mod tween;
mod view;

pub use geometry::{clamped_position, clamped_size, pinned_position, AspectRatio, PanelGeometry};
pub use interaction::{DragSession, InteractionState};
pub use messages::{Event, Message};
pub use pin::{Inset, PinEdge};
pub use surface::{CameraKind, CameraRef, PreviewSurface};
pub use tween::PositionTween;
pub use view::panel_layer;

use crate::config::{
    DEFAULT_PANEL_SIZE, FOCUS_RING_SIZE, HOVER_MARGIN, MIN_PANEL_SIZE, PIN_MARGIN,
    SNAP_ANIMATION_DURATION,
};
use iced::{Point, Rectangle, Size};
use std::time::Instant;

/// Per-frame snapshot of the collaborators the panel reads.
///
/// The embedder builds one per tick; all state handlers see the same
/// pointer position for the duration of that tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Host container bounds in global coordinates.
    pub container: Rectangle,
    /// Global pointer position.
    pub pointer: Point,
    /// Monotonic clock driving the snap-back animation.
    pub now: Instant,
}

/// Local state of the preview panel.
#[derive(Debug, Clone)]
pub struct State {
    geometry: PanelGeometry,
    interaction: InteractionState,
    pinned_edge: PinEdge,
    inset: Inset,
    ratio: AspectRatio,
    surface: PreviewSurface,
    /// Ghost rect (global) showing where the panel will settle.
    placeholder: Option<Rectangle>,
    /// Whether the drag/resize/pin controls are drawn this frame.
    controls_visible: bool,
    /// Pointer position captured at the most recent tick; pressed-handle
    /// transitions snapshot this into their [`DragSession`].
    last_pointer: Point,
}

impl State {
    #[must_use]
    pub fn new(ratio: AspectRatio) -> Self {
        Self {
            geometry: PanelGeometry {
                position: Point::ORIGIN,
                size: Size::new(DEFAULT_PANEL_SIZE, DEFAULT_PANEL_SIZE),
            },
            interaction: InteractionState::None,
            pinned_edge: PinEdge::default(),
            inset: Inset::default(),
            ratio,
            surface: PreviewSurface::default(),
            placeholder: None,
            controls_visible: false,
            last_pointer: Point::ORIGIN,
        }
    }

    /// Update the state from a pointer message and emit an [`Event`] for
    /// the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ResizeHandlePressed => self.begin_resize(),
            Message::ResizeHandleReleased => {
                if self.interaction.is_resizing() {
                    self.interaction = InteractionState::None;
                }
                Event::None
            }
            Message::DragHandlePressed => self.begin_drag(),
            Message::DragHandleReleased => {
                if self.interaction.is_dragging() {
                    self.interaction = InteractionState::AnimateStart;
                }
                Event::None
            }
        }
    }

    /// Advances the panel by one frame: applies the per-state geometry
    /// rules, then refreshes the pin-edge/visibility flags.
    pub fn tick(&mut self, ctx: &TickContext) -> Event {
        self.last_pointer = ctx.pointer;

        let event = match self.interaction.clone() {
            InteractionState::None => {
                self.geometry.size = self.clamp_size(self.geometry.size, ctx);
                self.geometry.position = self.pinned_target(ctx);
                Event::None
            }
            InteractionState::Resizing(session) => {
                self.resize_tick(ctx, session);
                Event::None
            }
            InteractionState::Dragging(session) => self.drag_tick(ctx, session),
            InteractionState::AnimateStart => {
                let target = self.pinned_target(ctx);
                self.placeholder = Some(Rectangle::new(target, self.geometry.size));
                self.interaction = InteractionState::Animating(PositionTween::new(
                    self.geometry.position,
                    target,
                    ctx.now,
                    SNAP_ANIMATION_DURATION,
                ));
                Event::None
            }
            InteractionState::Animating(tween) => {
                if tween.is_finished(ctx.now) {
                    self.geometry.position = tween.target();
                    self.interaction = InteractionState::None;
                    self.placeholder = None;
                } else {
                    self.geometry.position = tween.sample(ctx.now);
                }
                Event::None
            }
        };

        self.refresh_visibility(ctx);
        event
    }

    fn resize_tick(&mut self, ctx: &TickContext, session: DragSession) {
        let delta = session.pointer - ctx.pointer;

        // The free edge moves with the pointer; the pinned edge stays put.
        let desired = match self.pinned_edge {
            PinEdge::Left => Size::new(
                session.panel_size.width - delta.x,
                session.panel_size.height - delta.y,
            ),
            PinEdge::Right => Size::new(
                session.panel_size.width + delta.x,
                session.panel_size.height + delta.y,
            ),
        };

        self.geometry.size = self.clamp_size(desired, ctx);
        self.geometry.position = self.pinned_target(ctx);
    }

    fn drag_tick(&mut self, ctx: &TickContext, session: DragSession) -> Event {
        let grab_offset = session.pointer - session.panel_position;

        let new_edge = PinEdge::resolve(ctx.pointer.x, ctx.container);
        let event = if new_edge == self.pinned_edge {
            Event::None
        } else {
            self.pinned_edge = new_edge;
            Event::PinnedEdgeChanged(new_edge)
        };

        self.geometry.position = clamped_position(
            ctx.pointer - grab_offset,
            ctx.container.position(),
            ctx.container.size(),
            self.geometry.size,
            FOCUS_RING_SIZE,
        );
        self.placeholder = Some(Rectangle::new(self.pinned_target(ctx), self.geometry.size));

        event
    }

    fn begin_resize(&mut self) -> Event {
        if !self.interaction.accepts_new_session() {
            return Event::None;
        }

        // Catching the panel mid-animation drops the tween.
        self.placeholder = None;
        self.interaction = InteractionState::Resizing(self.session_snapshot());
        Event::None
    }

    fn begin_drag(&mut self) -> Event {
        if !self.interaction.accepts_new_session() {
            return Event::None;
        }

        self.interaction = InteractionState::Dragging(self.session_snapshot());
        Event::None
    }

    fn session_snapshot(&self) -> DragSession {
        DragSession {
            pointer: self.last_pointer,
            panel_position: self.geometry.position,
            panel_size: self.geometry.size,
        }
    }

    fn clamp_size(&self, desired: Size, ctx: &TickContext) -> Size {
        clamped_size(desired, ctx.container.size(), self.ratio, MIN_PANEL_SIZE)
    }

    /// Global position of the pinned resting place for the current size.
    fn pinned_target(&self, ctx: &TickContext) -> Point {
        let local = pinned_position(
            self.pinned_edge,
            ctx.container.size(),
            self.geometry.size,
            PIN_MARGIN,
            self.inset,
        );

        Point::new(ctx.container.x + local.x, ctx.container.y + local.y)
    }

    fn refresh_visibility(&mut self, ctx: &TickContext) {
        let hover_area = Rectangle {
            x: self.geometry.position.x - HOVER_MARGIN,
            y: self.geometry.position.y - HOVER_MARGIN,
            width: self.geometry.size.width + 2.0 * HOVER_MARGIN,
            height: self.geometry.size.height + 2.0 * HOVER_MARGIN,
        };

        // Keep the controls up during any interaction so they do not
        // flicker while the panel animates out from under the pointer.
        self.controls_visible =
            hover_area.contains(ctx.pointer) || !self.interaction.is_none();
    }

    // ---- public API ------------------------------------------------------

    /// Offsets the pinned resting place away from editor chrome that
    /// overlaps the container's left/bottom edges.
    pub fn set_inset(&mut self, left: f32, bottom: f32) {
        self.inset = Inset { left, bottom };
    }

    /// Hands the panel the camera whose output fills the surface. Opaque
    /// passthrough: the panel stores it and never looks inside.
    pub fn set_camera(&mut self, camera: CameraRef) {
        self.surface.set_camera(camera);
    }

    /// Swaps the externally rendered preview frame.
    pub fn set_frame(&mut self, handle: iced::widget::image::Handle) {
        self.surface.set_frame(handle);
    }

    #[must_use]
    pub fn pinned_edge(&self) -> PinEdge {
        self.pinned_edge
    }

    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Resizing always happens from the free edge, so only the handle
    /// opposite the pinned side is shown.
    #[must_use]
    pub fn resize_left_handle_visible(&self) -> bool {
        self.controls_visible && self.pinned_edge == PinEdge::Right
    }

    #[must_use]
    pub fn resize_right_handle_visible(&self) -> bool {
        self.controls_visible && self.pinned_edge == PinEdge::Left
    }

    /// Ghost rect shown while the panel is dragged or animating home.
    #[must_use]
    pub fn placeholder(&self) -> Option<Rectangle> {
        if self.interaction.is_dragging() || self.interaction.is_animating() {
            self.placeholder
        } else {
            None
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(AspectRatio::default())
    }
}
