pub mod cipher;
pub mod normalize;

pub use cipher::CipherDecoder;
pub use normalize::normalize_payload;
