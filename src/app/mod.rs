// SPDX-License-Identifier: MPL-2.0
//! Demo editor shell embedding the preview panel.
//!
//! The `App` struct stands in for a scene editor: it owns the panel,
//! tracks the global cursor, and feeds the panel a [`TickContext`] each
//! frame. The panel treats the window's scene area (everything above the
//! status bar) as its host container.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::design_tokens::sizing;
use crate::ui::preview_panel::{self, CameraKind, CameraRef, TickContext};
use iced::widget::image;
use iced::{window, Element, Point, Rectangle, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Dimensions of the synthetic camera frame fed to the preview surface.
const FRAME_WIDTH: u32 = 480;
const FRAME_HEIGHT: u32 = 270;

/// Root Iced application state for the demo shell.
pub struct App {
    pub(crate) panel: preview_panel::State,
    pub(crate) status: String,
    cursor: Point,
    window_size: Size,
}

impl App {
    /// Initializes the shell from launcher `Flags`: loads the project
    /// config, applies overrides, and hands the panel its collaborators.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);

        let mut panel = preview_panel::State::new(config.aspect_ratio());
        panel.set_inset(sizing::TOOL_STRIP_WIDTH, 0.0);
        panel.set_camera(CameraRef::new(1, CameraKind::ThreeD));
        panel.set_frame(synthetic_camera_frame(FRAME_WIDTH, FRAME_HEIGHT));

        let app = App {
            panel,
            status: String::from("Drag the preview to re-pin it"),
            cursor: Point::ORIGIN,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        };

        (app, Task::none())
    }

    /// Host container the panel pins itself into: the scene area above
    /// the status bar.
    pub(crate) fn container(&self) -> Rectangle {
        Rectangle::new(
            Point::ORIGIN,
            Size::new(
                self.window_size.width,
                (self.window_size.height - sizing::STATUS_BAR_HEIGHT).max(0.0),
            ),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(msg) => {
                let event = self.panel.update(msg);
                self.handle_panel_event(event);
            }
            Message::Tick(now) => {
                let ctx = TickContext {
                    container: self.container(),
                    pointer: self.cursor,
                    now,
                };
                let event = self.panel.tick(&ctx);
                self.handle_panel_event(event);
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
            }
            Message::WindowResized(size) => {
                self.window_size = size;
            }
        }

        Task::none()
    }

    fn handle_panel_event(&mut self, event: preview_panel::Event) {
        match event {
            preview_panel::Event::None => {}
            preview_panel::Event::PinnedEdgeChanged(edge) => {
                tracing::debug!(?edge, "preview panel re-pinned");
                self.status = match edge {
                    preview_panel::PinEdge::Left => String::from("Preview pinned left"),
                    preview_panel::PinEdge::Right => String::from("Preview pinned right"),
                };
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }

    fn title(&self) -> String {
        String::from("SceneLens")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription()
    }
}

fn load_config(flags: &Flags) -> Config {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load config, using defaults");
            Config::default()
        }),
        None => config::load().unwrap_or_default(),
    };

    if let Some(width) = flags.viewport_width {
        config.viewport_width = width;
    }
    if let Some(height) = flags.viewport_height {
        config.viewport_height = height;
    }

    config
}

/// Generates the placeholder camera frame: a sky-to-ground gradient with
/// a horizon line, so the preview reads as "a camera" without a renderer.
fn synthetic_camera_frame(width: u32, height: u32) -> image::Handle {
    let horizon = height * 3 / 5;
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        let t = y as f32 / height as f32;
        let (r, g, b) = if y < horizon {
            (
                (40.0 + 60.0 * t) as u8,
                (90.0 + 80.0 * t) as u8,
                (160.0 + 60.0 * t) as u8,
            )
        } else {
            (
                (70.0 - 30.0 * t) as u8,
                (60.0 - 25.0 * t) as u8,
                (50.0 - 20.0 * t) as u8,
            )
        };

        for _ in 0..width {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }

    image::Handle::from_rgba(width, height, pixels)
}

/// Builds the window settings for the demo shell.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a boot Fn, not FnOnce; the RefCell<Option<_>> lets
    // the closure consume the flags exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn new_app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn new_app_seeds_the_panel_surface() {
        let app = new_app();
        assert!(app.panel.surface().has_frame());
        assert!(app.panel.surface().camera().is_some());
    }

    #[test]
    fn container_excludes_the_status_bar() {
        let app = new_app();
        let container = app.container();

        assert_eq!(container.width, WINDOW_DEFAULT_WIDTH);
        assert_eq!(
            container.height,
            WINDOW_DEFAULT_HEIGHT - sizing::STATUS_BAR_HEIGHT
        );
    }

    #[test]
    fn resize_updates_the_container() {
        let mut app = new_app();
        let _ = app.update(Message::WindowResized(Size::new(1600.0, 900.0)));

        assert_eq!(app.container().width, 1600.0);
    }

    #[test]
    fn tick_settles_the_panel_into_the_container() {
        let mut app = new_app();
        let _ = app.update(Message::Tick(Instant::now()));

        let geometry = app.panel.geometry();
        let container = app.container();
        assert!(geometry.position.x + geometry.size.width <= container.width);
        assert!(geometry.position.y + geometry.size.height <= container.height);
    }

    #[test]
    fn edge_change_updates_the_status_line() {
        let mut app = new_app();
        app.handle_panel_event(preview_panel::Event::PinnedEdgeChanged(
            preview_panel::PinEdge::Left,
        ));

        assert_eq!(app.status, "Preview pinned left");
    }

    #[test]
    fn synthetic_frame_has_full_coverage() {
        // Handle construction validates dimensions against the byte count,
        // so building one is the whole test.
        let _ = synthetic_camera_frame(8, 8);
    }

    #[test]
    fn flag_overrides_replace_config_dimensions() {
        let flags = Flags {
            viewport_width: Some(1080.0),
            viewport_height: Some(1920.0),
            config_path: None,
        };
        let config = load_config(&flags);

        assert_eq!(config.viewport_width, 1080.0);
        assert_eq!(config.viewport_height, 1920.0);
        assert!(config.aspect_ratio().is_portrait());
    }
}
