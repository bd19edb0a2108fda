//! The one-time parameter payload and the store it populates.
//!
//! Payload order: W0 row-major, b0, W1 row-major, b1, W2 row-major, b2.
//! Rows are output neurons, columns are input indices.

use log::debug;

use crate::config::Scales;
use crate::error::{NetworkError, Result};
use crate::network::{Layer0, Layer1, Layer2, LAYER0_WORDS, LAYER1_WORDS, PAYLOAD_WORDS};

/// Weights, biases and activation scales of the three layers.
///
/// Built once from a complete payload and read-only afterwards.
pub struct ParameterSet {
    layer0: Layer0,
    layer1: Layer1,
    layer2: Layer2,
    scales: Scales,
}

impl ParameterSet {
    /// Parses a complete payload. Anything but exactly `PAYLOAD_WORDS` words is
    /// rejected before any layer is built.
    pub fn from_words(words: &[u32], scales: Scales) -> Result<Self> {
        if words.len() != PAYLOAD_WORDS {
            return Err(NetworkError::PayloadLength {
                expected: PAYLOAD_WORDS,
                actual: words.len(),
            });
        }

        let (layer0_words, rest) = words.split_at(LAYER0_WORDS);
        let (layer1_words, layer2_words) = rest.split_at(LAYER1_WORDS);

        let params = Self {
            layer0: Layer0::from_words(layer0_words)?,
            layer1: Layer1::from_words(layer1_words)?,
            layer2: Layer2::from_words(layer2_words)?,
            scales,
        };

        debug!(
            "Loaded parameters: {} words, scales ({}, {})",
            words.len(),
            scales.layer0(),
            scales.layer1()
        );

        Ok(params)
    }

    /// Re-emits the payload in stream order.
    pub fn to_words(&self) -> Vec<u32> {
        let mut words = Vec::with_capacity(PAYLOAD_WORDS);
        words.extend(self.layer0.to_words());
        words.extend(self.layer1.to_words());
        words.extend(self.layer2.to_words());
        words
    }

    pub fn layer0(&self) -> &Layer0 {
        &self.layer0
    }

    pub fn layer1(&self) -> &Layer1 {
        &self.layer1
    }

    pub fn layer2(&self) -> &Layer2 {
        &self.layer2
    }

    pub fn scales(&self) -> Scales {
        self.scales
    }
}
