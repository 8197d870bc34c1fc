//! The animation description embedded in exported documents.

pub mod element;
pub mod model;
pub mod settings;
pub mod value;
