//! Attacca
//!
//! A small desktop music player (built with `iced`): pick or drop audio
//! files onto a playlist and it plays them in order, with transport
//! buttons, a seek slider, a volume slider, and tag-derived track info
//! with album art.
//!
//! # Structure
//! - `core/` owns everything without a widget: the playlist store, tag
//!   reading, the playback engine, settings.
//! - `gui/` is the iced frontend: `App` state, `Message`, `update()`,
//!   `view()`, subscriptions.
//!
//! # Concurrency model
//! Audio decode/output lives on the engine thread. The GUI sends it
//! commands over a channel and drains its events on a 200 ms tick, so
//! every state mutation happens on the update loop and nothing needs a
//! lock.

mod core;
mod gui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(gui::App::load, gui::update, gui::view)
        .subscription(gui::subscription)
        .title("Attacca")
        .run()
}
