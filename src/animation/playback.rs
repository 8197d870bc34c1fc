use crate::payload::settings::{Direction, FillMode, Iterations, PlaybackSettings};

/// Position inside one cycle plus whether playback has ended.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Playback {
    /// Milliseconds into the cycle, `0..=duration`.
    pub t: f64,
    pub done: bool,
}

/// Maps elapsed wall time onto a cycle position.
///
/// `global_ms` is scaled by the playback speed first. Direction, alternation
/// and the fill mode decide where each iteration runs and where a finished
/// animation rests; `reversed` flips the configured direction.
pub fn compute_playback(
    global_ms: f64,
    duration: f64,
    settings: &PlaybackSettings,
    reversed: bool,
) -> Playback {
    let g = global_ms * settings.speed;
    let dir = if reversed {
        settings.direction.flipped()
    } else {
        settings.direction
    };

    if duration <= 0.0 {
        return Playback { t: 0.0, done: true };
    }

    if let Iterations::Count(iterations) = settings.iterations {
        if g >= iterations * duration {
            let even = iterations % 2.0 == 0.0;
            let forward = dir == Direction::Normal;
            let t = match settings.fill {
                FillMode::Backwards if forward => 0.0,
                FillMode::Backwards => duration,
                FillMode::Forwards if forward != (settings.alternate && even) => duration,
                FillMode::Forwards => 0.0,
            };
            return Playback { t, done: true };
        }
    }

    let iter = (g / duration).floor();
    let mut t = g - iter * duration;
    if dir == Direction::Reverse {
        t = duration - t;
    }
    if settings.alternate && iter % 2.0 == 1.0 {
        t = duration - t;
    }
    Playback { t, done: false }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
