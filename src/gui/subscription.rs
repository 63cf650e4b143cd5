//! gui/subscription.rs
//! Two event sources:
//! - window file drops, live for the whole session
//! - a periodic tick that drains engine events, only once the engine
//!   thread exists

use std::time::Duration;

use iced::event::{self, Event};
use iced::{Subscription, time, window};

use super::state::{App, Message};

pub(crate) fn subscription(state: &App) -> Subscription<Message> {
    let drops = event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    });

    if state.engine_events.is_none() {
        return drops;
    }

    Subscription::batch([
        drops,
        time::every(Duration::from_millis(200)).map(|_| Message::Tick),
    ])
}
