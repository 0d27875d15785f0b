// Pattern: State
// The context delegates to its current state object, and each state decides
// which state comes next.

use std::fmt;

use tracing::debug;

use crate::transcript::Transcript;

pub trait PlayerState: fmt::Debug {
    fn name(&self) -> &'static str;
    fn play(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState>;
    fn pause(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState>;
    fn stop(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState>;
}

#[derive(Debug)]
pub struct Stopped;

#[derive(Debug)]
pub struct Playing;

#[derive(Debug)]
pub struct Paused;

impl PlayerState for Stopped {
    fn name(&self) -> &'static str {
        "stopped"
    }

    fn play(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Starting playing.");
        Box::new(Playing)
    }

    fn pause(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Can't pause, playback not playing.");
        self
    }

    fn stop(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Already stopped.");
        self
    }
}

impl PlayerState for Playing {
    fn name(&self) -> &'static str {
        "playing"
    }

    fn play(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Already playing.");
        self
    }

    fn pause(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Pausing playback.");
        Box::new(Paused)
    }

    fn stop(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Stopping playback.");
        Box::new(Stopped)
    }
}

impl PlayerState for Paused {
    fn name(&self) -> &'static str {
        "paused"
    }

    fn play(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Resume playing.");
        Box::new(Playing)
    }

    fn pause(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Already paused.");
        self
    }

    fn stop(self: Box<Self>, out: &mut Transcript) -> Box<dyn PlayerState> {
        out.line("Stopping playback from pause.");
        Box::new(Stopped)
    }
}

#[derive(Debug)]
pub struct MediaPlayer {
    // Only `None` while a transition is in flight.
    state: Option<Box<dyn PlayerState>>,
}

impl Default for MediaPlayer {
    fn default() -> Self {
        Self {
            state: Some(Box::new(Stopped)),
        }
    }
}

impl MediaPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &'static str {
        self.state.as_ref().map_or("stopped", |s| s.name())
    }

    fn transition(
        &mut self,
        out: &mut Transcript,
        step: impl FnOnce(Box<dyn PlayerState>, &mut Transcript) -> Box<dyn PlayerState>,
    ) {
        if let Some(current) = self.state.take() {
            let from = current.name();
            let next = step(current, out);
            debug!(from, to = next.name(), "player transition");
            self.state = Some(next);
        }
    }

    pub fn play(&mut self, out: &mut Transcript) {
        self.transition(out, |s, out| s.play(out));
    }

    pub fn pause(&mut self, out: &mut Transcript) {
        self.transition(out, |s, out| s.pause(out));
    }

    pub fn stop(&mut self, out: &mut Transcript) {
        self.transition(out, |s, out| s.stop(out));
    }
}

pub fn demo(out: &mut Transcript) {
    let mut player = MediaPlayer::new();
    player.play(out);
    player.play(out);
    player.pause(out);
    player.pause(out);
    player.stop(out);
    player.pause(out);
    out.line(format!("Player is {}.", player.state()));
}
