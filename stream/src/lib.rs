mod connection;
mod decoder;
mod encoder;

pub use connection::{FrameHandler, WordConnection};
pub use decoder::Decoder;
pub use encoder::Encoder;

/// Every word on the channel is 32 bits, sent little-endian.
pub const WORD_BYTES: usize = 4;
