//! Converts animated SVGs exported with the SVGator player into documents
//! driven by a small, self-contained runtime.
//!
//! [`convert`] runs the whole pipeline: strip the editor's UI decoration,
//! pull the payload out of the player call, decode its obfuscated fields,
//! detect which capabilities it uses, and emit a runtime compiled with only
//! those. The same evaluation rules are available host-side through
//! [`FrameEvaluator`] and [`Player`] for inspection and testing.
#![forbid(unsafe_code)]

pub mod animation;
pub mod compile;
pub mod decode;
pub mod document;
pub mod eval;
pub mod features;
pub mod foundation;
pub mod interp;
pub mod payload;
pub mod pipeline;

pub use animation::{
    Clock, CubicBezier, Easing, Interp, ManualClock, Playback, Player, PlayerState, Sample,
    SystemClock, Track, compute_playback,
};
pub use compile::{Minifier, ModulePlan, RuntimeCompiler, RuntimeModule, RuntimeUnit};
pub use decode::{CipherDecoder, normalize_payload};
pub use eval::{AttrWrite, EvaluatedFrame, FrameEvaluator, ResourceCache, WriteTarget};
pub use features::{Capabilities, detect_capabilities};
pub use foundation::config::{ConvertOptions, RuntimeConfig};
pub use foundation::error::{ConvertError, ConvertResult};
pub use payload::model::{Animation, Payload};
pub use pipeline::{Conversion, LoadedDocument, SampledFrame, convert, load, sample_frame};
