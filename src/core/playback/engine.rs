//! core/playback/engine.rs
//! The rodio owner. Runs on its own thread.
//!
//! Owns:
//! - OutputStream (must stay alive for the engine's lifetime)
//! - Sink (one per current track)
//! - command loop + periodic position ticks

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::probe::probe_duration_ms;
use super::{EngineCommand, EngineEvent};

const TICK_MS: u64 = 200;

pub struct Engine {
    // Dropping this kills audio output.
    stream: OutputStream,

    sink: Option<Sink>,
    current_path: Option<PathBuf>,

    // Remembered across tracks so every new sink starts at the volume
    // the user last committed.
    volume: f32,

    event_tx: Sender<EngineEvent>,
}

impl Engine {
    pub fn new(event_tx: Sender<EngineEvent>) -> Result<Self, String> {
        // rodio 0.21.x: open the default output stream via the builder.
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("failed to init audio output: {e}"))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            volume: 1.0,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<EngineCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        // Runs until the GUI side drops its handle.
        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    self.handle_command(cmd);
                    while let Ok(cmd) = command_rx.try_recv() {
                        self.handle_command(cmd);
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_current();
    }

    fn handle_command(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::Load(path) => {
                if let Err(e) = self.load(path) {
                    let _ = self.event_tx.send(EngineEvent::Failed(e));
                }
            }
            EngineCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    let _ = self.event_tx.send(EngineEvent::Paused);
                }
            }
            EngineCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    let _ = self.event_tx.send(EngineEvent::Resumed);
                }
            }
            EngineCommand::Stop => {
                self.stop_current();
                let _ = self.event_tx.send(EngineEvent::Stopped);
            }
            EngineCommand::Seek(ms) => {
                if let Some(sink) = &self.sink {
                    if sink.try_seek(Duration::from_millis(ms)).is_err() {
                        let _ = self.event_tx.send(EngineEvent::Failed(
                            "seek failed (decoder may not support it)".into(),
                        ));
                    }
                }
            }
            EngineCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
        }
    }

    fn tick(&mut self) {
        if let Some(sink) = &self.sink {
            let position_ms = sink.get_pos().as_millis() as u64;
            let _ = self.event_tx.send(EngineEvent::Progress { position_ms });

            if sink.empty() && self.current_path.is_some() {
                tracing::debug!(path = ?self.current_path, "track finished");
                let _ = self.event_tx.send(EngineEvent::Finished);
                self.stop_current();
            }
        }
    }

    fn load(&mut self, path: PathBuf) -> Result<(), String> {
        self.stop_current();

        // rodio 0.21.x: Sink connects to the stream's mixer.
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);

        let file = File::open(&path).map_err(|e| format!("failed to open file: {e}"))?;
        let reader = BufReader::new(file);

        let decoder = Decoder::new(reader).map_err(|e| format!("decode failed: {e}"))?;

        // mp3 decoders often report no total; fall back to a container
        // probe so the seek slider and time label have a denominator.
        let duration_ms = decoder
            .total_duration()
            .map(|d| d.as_millis() as u64)
            .or_else(|| probe_duration_ms(&path));

        sink.append(decoder);
        sink.play();

        tracing::debug!(path = %path.display(), ?duration_ms, "playback started");

        self.current_path = Some(path.clone());
        self.sink = Some(sink);

        let _ = self.event_tx.send(EngineEvent::Ready { path, duration_ms });

        Ok(())
    }

    fn stop_current(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
    }
}
