//! Playback state machine of one animation.
//!
//! Time comes from an injected [`Clock`] and frames go to a [`Draw`] sink, so
//! the same logic the emitted runtime follows can be driven step by step.

use std::{cell::Cell, rc::Rc, time::Instant};

use crate::{
    animation::playback::{Playback, compute_playback},
    foundation::math::clamp01,
    payload::settings::PlaybackSettings,
};

pub trait Clock {
    /// Monotonic milliseconds from an arbitrary origin.
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, ms: f64) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

/// Receives the cycle position of every drawn frame.
pub trait Draw {
    fn draw(&mut self, time_ms: f64);
}

impl<F: FnMut(f64)> Draw for F {
    fn draw(&mut self, time_ms: f64) {
        self(time_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Idle,
    Playing,
    Paused,
    /// Finite playback ran out; the resting frame has been drawn.
    Done,
}

pub struct Player<C, D> {
    clock: C,
    draw: D,
    settings: PlaybackSettings,
    duration: f64,
    state: PlayerState,
    start: f64,
    offset: f64,
    last_draw: f64,
    reversed: bool,
}

impl<C: Clock, D: Draw> Player<C, D> {
    pub fn new(settings: PlaybackSettings, duration: f64, clock: C, draw: D) -> Self {
        Self {
            clock,
            draw,
            settings,
            duration,
            state: PlayerState::Idle,
            start: 0.0,
            offset: 0.0,
            last_draw: f64::NEG_INFINITY,
            reversed: false,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Unscaled milliseconds of playback so far.
    pub fn elapsed(&self) -> f64 {
        match self.state {
            PlayerState::Playing => self.clock.now_ms() - self.start + self.offset,
            _ => self.offset,
        }
    }

    /// Starts or resumes. Playing again after the end starts over.
    pub fn play(&mut self) {
        match self.state {
            PlayerState::Playing => return,
            PlayerState::Done => {
                self.offset = 0.0;
                self.last_draw = f64::NEG_INFINITY;
            }
            PlayerState::Idle | PlayerState::Paused => {}
        }
        self.state = PlayerState::Playing;
        self.start = self.clock.now_ms();
    }

    pub fn pause(&mut self) {
        if self.state != PlayerState::Playing {
            return;
        }
        self.offset += self.clock.now_ms() - self.start;
        self.state = PlayerState::Paused;
    }

    pub fn stop(&mut self) {
        self.state = PlayerState::Idle;
        self.offset = 0.0;
        self.last_draw = f64::NEG_INFINITY;
        self.redraw(0.0);
    }

    /// Moves to `ms` of unscaled playback and draws it. Negative and
    /// non-numeric positions count as `0`. The state is kept, except that a
    /// finished player becomes paused at the new position.
    pub fn seek(&mut self, ms: f64) {
        let ms = if ms.is_nan() { 0.0 } else { ms.max(0.0) };
        self.offset = ms;
        self.start = self.clock.now_ms();
        self.last_draw = f64::NEG_INFINITY;
        if self.state == PlayerState::Done {
            self.state = PlayerState::Paused;
        }
        self.redraw(ms);
    }

    /// `ratio` of the whole playback; one cycle when iterating forever.
    pub fn seek_ratio(&mut self, ratio: f64) {
        let ratio = if ratio.is_nan() { 0.0 } else { clamp01(ratio) };
        let span = self.settings.seekable_span(self.duration) * ratio;
        let speed = self.settings.speed;
        let ms = if speed > 0.0 && speed.is_finite() {
            span / speed
        } else {
            span
        };
        self.seek(ms);
    }

    /// Flips direction and draws the new starting frame.
    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
        self.redraw(0.0);
    }

    pub fn restart(&mut self) {
        self.stop();
        self.play();
    }

    pub fn toggle(&mut self) {
        if self.state == PlayerState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// One scheduler callback. Draws unless stopped or throttled by the
    /// frames-per-second cap, and settles into `Done` at the end.
    pub fn tick(&mut self) -> Option<Playback> {
        if self.state != PlayerState::Playing {
            return None;
        }
        let raw = self.elapsed();
        if self.settings.fps > 0.0 {
            let step = 1000.0 / self.settings.fps;
            if raw - self.last_draw < step {
                return None;
            }
            self.last_draw = raw;
        }

        let pb = compute_playback(raw, self.duration, &self.settings, self.reversed);
        self.draw.draw(pb.t);
        if pb.done {
            self.offset = raw;
            self.state = PlayerState::Done;
        }
        Some(pb)
    }

    fn redraw(&mut self, global_ms: f64) {
        let pb = compute_playback(global_ms, self.duration, &self.settings, self.reversed);
        self.draw.draw(pb.t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
