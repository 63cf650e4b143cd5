//! gui/update/transport.rs
//! GUI-playback engine bridge: track selection, transport buttons,
//! seek/volume sliders, and the event drain.
//!
//! The GUI never touches rodio directly; everything goes through the
//! `Transport` seam, and engine notifications arrive via `drain_events`
//! on each tick.

use std::cell::RefCell;

use iced::Task;
use iced::widget::image;

use super::super::state::{App, Message};
use crate::core::playback::{EngineEvent, Transport, start_engine};
use crate::core::tags;

/// Lazily spawn the engine thread; the first playback pays the cost.
fn ensure_engine(state: &mut App) {
    if state.transport.is_some() {
        return;
    }

    let (handle, events) = start_engine();
    handle.set_volume(engine_volume(state.volume_pct));

    state.transport = Some(Box::new(handle));
    state.engine_events = Some(RefCell::new(events));
}

/// Map a slider percentage to engine volume. Zero is pinned to exactly
/// 0.0 rather than left to division.
pub(crate) fn engine_volume(pct: f32) -> f32 {
    if pct == 0.0 {
        return 0.0;
    }
    (pct / 100.0).clamp(0.0, 1.0)
}

pub(crate) fn drain_events(state: &mut App) -> Task<Message> {
    let Some(rx_cell) = state.engine_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<EngineEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    for ev in drained {
        let _ = handle_event(state, ev);
    }

    Task::none()
}

/// Make the track at `index` current and start playing it.
///
/// Resolves the tag display first (filename/placeholder fallback on
/// absent or unreadable tags), then hands the path to the engine, which
/// stops the previous track and begins playback once decoded.
pub(crate) fn play_track(state: &mut App, index: usize) -> Task<Message> {
    ensure_engine(state);

    let Some(entry) = state.playlist.set_cursor(index) else {
        return Task::none();
    };
    let path = entry.path.clone();

    let now = tags::display_for(&path, tags::read_snapshot(&path));
    state.title_line = now.title;
    state.artist_line = now.artist;
    state.cover = now.artwork.map(image::Handle::from_bytes);

    if let Some(transport) = &state.transport {
        transport.load(path);
    }

    // Optimistic; the engine confirms via Ready/Progress.
    state.is_playing = true;
    state.position_ms = 0;
    state.duration_ms = None;
    state.seek_pct = 0.0;
    state.seek_dragging = false;
    state.status = format!("Playing: {}", state.title_line);

    Task::none()
}

/// Play/Pause button. A no-op until some track has been loaded.
pub(crate) fn toggle_play_pause(state: &mut App) -> Task<Message> {
    if state.playlist.current().is_none() {
        return Task::none();
    }

    let Some(transport) = &state.transport else {
        return Task::none();
    };

    if state.is_playing {
        transport.pause();
        state.is_playing = false;
    } else {
        transport.resume();
        state.is_playing = true;
    }

    Task::none()
}

pub(crate) fn next(state: &mut App) -> Task<Message> {
    step(state, 1)
}

pub(crate) fn prev(state: &mut App) -> Task<Message> {
    step(state, -1)
}

/// Wrapping next/previous: stop whatever plays, move the cursor, play.
fn step(state: &mut App, delta: i64) -> Task<Message> {
    if state.playlist.is_empty() {
        return Task::none();
    }

    if let Some(transport) = &state.transport {
        transport.stop();
    }

    match state.playlist.advance(delta) {
        Some(index) => play_track(state, index),
        None => Task::none(),
    }
}

/// Seek slider moved while dragging: live-seek the engine.
pub(crate) fn seek_dragged(state: &mut App, pct: f32) -> Task<Message> {
    state.seek_dragging = true;
    state.seek_pct = pct.clamp(0.0, 100.0);
    seek_to(state, pct)
}

/// Map a percentage to an absolute position and command the engine.
/// Honored only during an active drag; ignored while duration is
/// unknown (nothing sensible to map against).
pub(crate) fn seek_to(state: &mut App, pct: f32) -> Task<Message> {
    if !state.seek_dragging {
        return Task::none();
    }
    let Some(duration_ms) = state.duration_ms else {
        return Task::none();
    };

    let pct = pct.clamp(0.0, 100.0) as f64;
    let target_ms = ((pct / 100.0) * duration_ms as f64).round() as u64;
    let target_ms = target_ms.min(duration_ms);

    if let Some(transport) = &state.transport {
        transport.seek(target_ms);
    }
    state.position_ms = target_ms;

    Task::none()
}

pub(crate) fn seek_released(state: &mut App) -> Task<Message> {
    state.seek_dragging = false;
    Task::none()
}

/// Volume slider moved: slider position only, no engine command.
pub(crate) fn volume_dragged(state: &mut App, pct: f32) -> Task<Message> {
    state.volume_pct = pct.clamp(0.0, 100.0);
    Task::none()
}

/// Volume slider released: commit the current position to the engine.
pub(crate) fn volume_released(state: &mut App) -> Task<Message> {
    if let Some(transport) = &state.transport {
        transport.set_volume(engine_volume(state.volume_pct));
    }
    Task::none()
}

pub(crate) fn handle_event(state: &mut App, event: EngineEvent) -> Task<Message> {
    match event {
        EngineEvent::Ready { path, duration_ms } => {
            tracing::debug!(path = %path.display(), ?duration_ms, "engine ready");
            state.is_playing = true;
            state.duration_ms = duration_ms;
        }
        EngineEvent::Paused => state.is_playing = false,
        EngineEvent::Resumed => state.is_playing = true,
        EngineEvent::Stopped => {
            state.is_playing = false;
            state.position_ms = 0;
        }
        EngineEvent::Progress { position_ms } => {
            // Never fight an active drag.
            if !state.seek_dragging {
                state.position_ms = position_ms;
                if let Some(duration_ms) = state.duration_ms.filter(|d| *d > 0) {
                    state.seek_pct =
                        ((position_ms as f64 / duration_ms as f64) * 100.0).min(100.0) as f32;
                }
            }
        }
        // Natural end of media behaves exactly like pressing Next.
        EngineEvent::Finished => return next(state),
        EngineEvent::Failed(err) => {
            tracing::warn!(error = %err, "engine failure");
            state.status = format!("Playback error: {err}");
        }
    }

    Task::none()
}
