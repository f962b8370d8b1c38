// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: price polling, scene frames, keyboard, and touch.

use super::{App, Message};
use crate::navigation::Direction;
use crate::price_feed;
use iced::keyboard::key::{Key, Named};
use iced::{event, touch, Event, Subscription};
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            iced::time::every(price_feed::POLL_INTERVAL).map(|_| Message::PricePoll),
            event::listen_with(route_event),
        ];

        // No frame ticks while the scene is paused; the last frame stays up.
        if self.scene_running() {
            subscriptions.push(iced::time::every(FRAME_INTERVAL).map(Message::SceneTick));
        }

        Subscription::batch(subscriptions)
    }

    fn scene_running(&self) -> bool {
        self.scene.as_ref().map(|s| !s.is_paused()).unwrap_or(false)
    }
}

fn route_event(
    event: Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => match key.as_ref() {
            Key::Named(Named::ArrowLeft) => Some(Message::ArrowPressed(Direction::Prev)),
            Key::Named(Named::ArrowRight) => Some(Message::ArrowPressed(Direction::Next)),
            Key::Named(Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position))
        }
        _ => None,
    }
}
