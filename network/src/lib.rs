pub mod config;
pub mod engine;
pub mod error;
pub mod network;
pub mod params;

#[cfg(test)]
mod tests;

pub use config::Scales;
pub use engine::{Engine, Invocation, LoaderState};
pub use error::{NetworkError, Result};
pub use network::{ClassIndex, INPUT_SIZE, OUTPUT_SIZE, PAYLOAD_WORDS};
pub use params::ParameterSet;
