//! Timeline evaluation and playback.

pub mod ease;
pub mod playback;
pub mod player;
pub mod track;

pub use ease::CubicBezier;
pub use playback::{Playback, compute_playback};
pub use player::{Clock, Draw, ManualClock, Player, PlayerState, SystemClock};
pub use track::{Easing, Interp, Keyframe, Sample, Track};
