//! core/playback/mod.rs
//! Playback engine surface: command/event types, the `Transport` seam
//! the controller talks through, and the thread spawner.
//!
//! The engine owns every audio resource on its own thread. Commands go
//! in over a channel; ready/progress/finished notifications come back
//! over another and are drained from the UI thread, so the controller
//! never sees concurrent callbacks.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

mod engine;
mod probe;

pub use engine::Engine;

#[derive(Debug)]
pub enum EngineCommand {
    /// Stop whatever is playing, open `path`, and start playing it as
    /// soon as the decoder is ready.
    Load(PathBuf),
    Pause,
    Resume,
    Stop,
    /// Absolute position in milliseconds.
    Seek(u64),
    /// 0.0..=1.0; remembered and applied to every later track too.
    SetVolume(f32),
}

#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A new track decoded successfully and playback has begun.
    Ready {
        path: PathBuf,
        duration_ms: Option<u64>,
    },
    Paused,
    Resumed,
    Stopped,
    Progress {
        position_ms: u64,
    },
    /// Natural end of media.
    Finished,
    Failed(String),
}

/// What the controller needs from a playback session. The engine handle
/// implements it over channels; tests substitute a recording fake.
pub trait Transport {
    fn load(&self, path: PathBuf);
    fn pause(&self);
    fn resume(&self);
    fn stop(&self);
    fn seek(&self, position_ms: u64);
    fn set_volume(&self, volume: f32);
}

/// Channel-backed handle to the engine thread.
#[derive(Clone)]
pub struct EngineHandle {
    command_tx: Sender<EngineCommand>,
}

impl EngineHandle {
    /// Best-effort send. If the engine died, the command is dropped.
    fn send(&self, cmd: EngineCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

impl Transport for EngineHandle {
    fn load(&self, path: PathBuf) {
        self.send(EngineCommand::Load(path));
    }

    fn pause(&self) {
        self.send(EngineCommand::Pause);
    }

    fn resume(&self) {
        self.send(EngineCommand::Resume);
    }

    fn stop(&self) {
        self.send(EngineCommand::Stop);
    }

    fn seek(&self, position_ms: u64) {
        self.send(EngineCommand::Seek(position_ms));
    }

    fn set_volume(&self, volume: f32) {
        self.send(EngineCommand::SetVolume(volume));
    }
}

/// Spawn the engine thread. Returns the handle to keep in GUI state and
/// the event receiver to drain on each tick.
pub fn start_engine() -> (EngineHandle, Receiver<EngineEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<EngineCommand>();
    let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

    thread::spawn(move || {
        let mut engine = match Engine::new(event_tx.clone()) {
            Ok(e) => e,
            Err(msg) => {
                let _ = event_tx.send(EngineEvent::Failed(msg));
                return;
            }
        };

        engine.run(command_rx);
    });

    (EngineHandle { command_tx }, event_rx)
}
