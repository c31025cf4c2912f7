// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions.
//!
//! Keyboard and touch events are only subscribed while the lightbox is
//! visible, so a hidden overlay never consumes arrow keys. The
//! auto-advance timer is likewise only alive while the lightbox is open
//! and the timer is running; pausing cancels the subscription instead of
//! discarding ticks.

use super::{App, Message};
use crate::lightbox::Intent;
use crate::ui::navbar;
use iced::{event, keyboard, time, touch, window, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.tagline.is_revealed() {
            subscriptions.push(time::every(navbar::TAGLINE_INTERVAL).map(Message::TaglineTick));
        }

        if self.lightbox.is_visible() {
            subscriptions.push(event::listen_with(lightbox_events));

            if self.autoplay.is_running() {
                subscriptions
                    .push(time::every(self.autoplay.interval()).map(Message::AutoAdvanceTick));
            }
        }

        Subscription::batch(subscriptions)
    }
}

/// Maps raw keyboard and touch events to lightbox messages. Only installed
/// while the lightbox is visible.
fn lightbox_events(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            // Leave keys alone when a focused widget already handled them.
            if let event::Status::Captured = status {
                return None;
            }
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Intent(Intent::Previous))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Intent(Intent::Next))
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Intent(Intent::Close))
                }
                _ => None,
            }
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchBegan(position))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchCancelled),
        _ => None,
    }
}
