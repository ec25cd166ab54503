// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo editor shell.
//!
//! Two sources drive the panel: a ~60 Hz tick for the per-frame state
//! machine, and native window events for cursor tracking and container
//! resizes.

use iced::{event, mouse, time, window, Subscription};

use crate::config::TICK_INTERVAL;

use super::Message;

pub fn subscription() -> Subscription<Message> {
    let ticks = time::every(TICK_INTERVAL).map(Message::Tick);

    let events = event::listen_with(|event, _status, _window| match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        iced::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    });

    Subscription::batch([ticks, events])
}
