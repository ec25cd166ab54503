// SPDX-License-Identifier: MPL-2.0
//! View composition for the demo editor shell.

use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::widget::{container, text, Column, Space, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::preview_panel;
use crate::ui::theme;

use super::{App, Message};

const GRID_STEP: f32 = 40.0;

/// Mock scene surface: a flat editor background with a perspective-less
/// reference grid, standing in for the real 3D viewport.
#[derive(Debug, Clone, Copy, Default)]
struct SceneBackground;

impl<Message> canvas::Program<Message> for SceneBackground {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::scene_surface_color());

        let grid_stroke = Stroke::default()
            .with_width(1.0)
            .with_color(theme::scene_grid_color());

        let cols = (bounds.width / GRID_STEP).ceil() as i32;
        for col in 0..=cols {
            let x = col as f32 * GRID_STEP;
            let line = Path::line(Point::new(x, 0.0), Point::new(x, bounds.height));
            frame.stroke(&line, grid_stroke);
        }

        let rows = (bounds.height / GRID_STEP).ceil() as i32;
        for row in 0..=rows {
            let y = row as f32 * GRID_STEP;
            let line = Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(&line, grid_stroke);
        }

        vec![frame.into_geometry()]
    }
}

fn chrome_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme::chrome_background_color().into()),
        ..container::Style::default()
    }
}

/// Renders the editor shell: scene surface, tool-strip chrome, preview
/// panel overlay and the status bar.
pub fn render(app: &App) -> Element<'_, Message> {
    let scene = Canvas::new(SceneBackground)
        .width(Length::Fill)
        .height(Length::Fill);

    // Fixed chrome overlapping the container's left edge; the panel inset
    // keeps the pinned resting place clear of it.
    let tool_strip = container(Space::new()
        .width(Length::Fixed(sizing::TOOL_STRIP_WIDTH))
        .height(Length::Fill))
    .style(chrome_style);

    let panel = preview_panel::panel_layer(&app.panel, app.container().position())
        .map(Message::Panel);

    let editor = Stack::new()
        .push(scene)
        .push(tool_strip)
        .push(panel)
        .width(Length::Fill)
        .height(Length::Fill);

    let status_bar = container(text(app.status.as_str()).size(13))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .style(chrome_style);

    Column::new().push(editor).push(status_bar).into()
}
