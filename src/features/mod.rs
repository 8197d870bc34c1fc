pub mod detect;

pub use detect::{Capabilities, detect_capabilities};
