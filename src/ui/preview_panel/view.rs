// SPDX-License-Identifier: MPL-2.0
//! Overlay canvas renderer and layout for the preview panel.
//!
//! The overlay canvas covers the whole host container: it hit-tests the
//! drag/resize handles and publishes pointer messages, and it draws the
//! placeholder ghost, the panel frame, the visible resize handles and the
//! pin indicator. The camera frame itself is a positioned `image::Image`
//! stacked underneath.

use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::widget::{container, image, Stack};
use iced::{
    mouse, Color, ContentFit, Element, Length, Padding, Point, Rectangle, Renderer, Size, Theme,
};

use crate::ui::design_tokens::sizing;
use crate::ui::theme;

use super::{Message, State};

/// Which control a left-button press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    DragHandle,
    ResizeHandle,
}

/// Canvas program used to interact with and decorate the preview panel.
pub struct PanelOverlay<'a> {
    panel: &'a State,
    /// Container origin in global coordinates; panel geometry is stored
    /// globally and converted to canvas-local space with this.
    origin: Point,
}

impl<'a> PanelOverlay<'a> {
    pub fn new(panel: &'a State, origin: Point) -> Self {
        Self { panel, origin }
    }

    fn panel_rect(&self) -> Rectangle {
        let geometry = self.panel.geometry();
        Rectangle::new(
            Point::new(
                geometry.position.x - self.origin.x,
                geometry.position.y - self.origin.y,
            ),
            geometry.size,
        )
    }

    fn placeholder_rect(&self) -> Option<Rectangle> {
        self.panel.placeholder().map(|rect| Rectangle {
            x: rect.x - self.origin.x,
            y: rect.y - self.origin.y,
            ..rect
        })
    }

    fn resize_left_rect(&self) -> Rectangle {
        let rect = self.panel_rect();
        Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(sizing::RESIZE_HANDLE, sizing::RESIZE_HANDLE),
        )
    }

    fn resize_right_rect(&self) -> Rectangle {
        let rect = self.panel_rect();
        Rectangle::new(
            Point::new(rect.x + rect.width - sizing::RESIZE_HANDLE, rect.y),
            Size::new(sizing::RESIZE_HANDLE, sizing::RESIZE_HANDLE),
        )
    }

    fn pin_indicator_rect(&self) -> Rectangle {
        let rect = self.panel_rect();
        Rectangle::new(
            Point::new(
                rect.x,
                rect.y + rect.height - sizing::PIN_INDICATOR,
            ),
            Size::new(sizing::PIN_INDICATOR, sizing::PIN_INDICATOR),
        )
    }

    /// Maps a press position to the control underneath it, respecting
    /// per-frame handle visibility.
    fn hit_test(&self, position: Point) -> Option<PressTarget> {
        if self.panel.resize_left_handle_visible() && self.resize_left_rect().contains(position) {
            return Some(PressTarget::ResizeHandle);
        }
        if self.panel.resize_right_handle_visible() && self.resize_right_rect().contains(position) {
            return Some(PressTarget::ResizeHandle);
        }
        if self.panel_rect().contains(position) {
            return Some(PressTarget::DragHandle);
        }
        None
    }
}

fn press_message(target: PressTarget) -> Message {
    match target {
        PressTarget::DragHandle => Message::DragHandlePressed,
        PressTarget::ResizeHandle => Message::ResizeHandlePressed,
    }
}

fn release_message(target: PressTarget) -> Message {
    match target {
        PressTarget::DragHandle => Message::DragHandleReleased,
        PressTarget::ResizeHandle => Message::ResizeHandleReleased,
    }
}

impl canvas::Program<Message> for PanelOverlay<'_> {
    type State = Option<PressTarget>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let target = self.hit_test(position)?;

                *state = Some(target);
                return Some(Action::publish(press_message(target)).and_capture());
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(target) = state.take() {
                    return Some(Action::publish(release_message(target)).and_capture());
                }
            }
            // If the cursor leaves the canvas, end any active press.
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if let Some(target) = state.take() {
                    return Some(Action::publish(release_message(target)).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(ghost) = self.placeholder_rect() {
            let path = Path::rectangle(ghost.position(), ghost.size());
            frame.fill(&path, theme::placeholder_fill_color());
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::placeholder_border_color()),
            );
        }

        let panel = self.panel_rect();
        let panel_path = Path::rectangle(panel.position(), panel.size());
        frame.stroke(
            &panel_path,
            Stroke::default()
                .with_width(sizing::PANEL_BORDER)
                .with_color(theme::panel_border_color()),
        );

        if self.panel.resize_left_handle_visible() {
            draw_resize_handle(&mut frame, self.resize_left_rect());
        }
        if self.panel.resize_right_handle_visible() {
            draw_resize_handle(&mut frame, self.resize_right_rect());
        }
        if self.panel.controls_visible() {
            draw_pin_indicator(&mut frame, self.pin_indicator_rect());
        }

        vec![frame.into_geometry()]
    }
}

fn draw_resize_handle(frame: &mut Frame, rect: Rectangle) {
    let path = Path::rectangle(rect.position(), rect.size());
    frame.fill(
        &path,
        Color {
            a: 0.85,
            ..theme::handle_color()
        },
    );
    frame.stroke(
        &path,
        Stroke::default()
            .with_width(1.0)
            .with_color(theme::handle_border_color()),
    );

    // Diagonal grip lines.
    let inset = 6.0;
    for step in [0.0, 6.0] {
        let line = Path::line(
            Point::new(rect.x + inset + step, rect.y + rect.height - inset),
            Point::new(rect.x + rect.width - inset, rect.y + inset + step),
        );
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(1.0)
                .with_color(theme::handle_border_color()),
        );
    }
}

fn draw_pin_indicator(frame: &mut Frame, rect: Rectangle) {
    let center = Point::new(
        rect.x + rect.width / 2.0,
        rect.y + rect.height / 2.0 - 3.0,
    );

    let head = Path::circle(center, 5.0);
    frame.fill(&head, theme::pin_indicator_color());

    let stem = Path::line(
        center,
        Point::new(center.x, rect.y + rect.height - 6.0),
    );
    frame.stroke(
        &stem,
        Stroke::default()
            .with_width(2.0)
            .with_color(theme::pin_indicator_color()),
    );
}

/// Builds the panel element stack for a container whose global origin is
/// `origin`: the positioned camera frame underneath, the interactive
/// overlay canvas on top.
pub fn panel_layer(panel: &State, origin: Point) -> Element<'_, Message> {
    let geometry = panel.geometry();
    let local = Point::new(
        geometry.position.x - origin.x,
        geometry.position.y - origin.y,
    );

    let surface: Element<'_, Message> = if let Some(handle) = panel.surface().frame() {
        image::Image::new(handle.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fixed(geometry.size.width))
            .height(Length::Fixed(geometry.size.height))
            .into()
    } else {
        container(iced::widget::Space::new()
            .width(Length::Fixed(geometry.size.width))
            .height(Length::Fixed(geometry.size.height)))
        .style(|_theme: &Theme| container::Style {
            background: Some(theme::panel_empty_color().into()),
            ..container::Style::default()
        })
        .into()
    };

    let positioned = container(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: local.y.max(0.0),
            left: local.x.max(0.0),
            right: 0.0,
            bottom: 0.0,
        });

    Stack::new()
        .push(positioned)
        .push(
            Canvas::new(PanelOverlay::new(panel, origin))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
