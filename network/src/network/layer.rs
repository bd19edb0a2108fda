use rayon::prelude::*;

use crate::error::{NetworkError, Result};

use super::kernel::dot_product;

/// Fully connected fixed-point layer mapping `IN` i8 activations to `OUT` i32
/// accumulators.
///
/// Weights are stored row-major, one row of `IN` entries per output neuron,
/// which is also the order they arrive in over the parameter stream.
pub struct FixedPointLayer<const IN: usize, const OUT: usize> {
    // [out_idx][in_idx]
    weights: Box<[i8]>,
    // [out_idx]
    biases: Box<[i32]>,
}

impl<const IN: usize, const OUT: usize> FixedPointLayer<IN, OUT> {
    /// Number of payload words this layer consumes: all weights, then all biases.
    pub const WORDS: usize = IN * OUT + OUT;

    /// Builds the layer from its slice of the parameter payload.
    ///
    /// Weight words keep only their low 8 bits (sign-extended), bias words are
    /// taken as full i32 values.
    pub fn from_words(words: &[u32]) -> Result<Self> {
        if words.len() != Self::WORDS {
            return Err(NetworkError::PayloadLength {
                expected: Self::WORDS,
                actual: words.len(),
            });
        }

        let (weight_words, bias_words) = words.split_at(IN * OUT);

        Ok(Self {
            weights: weight_words.iter().map(|&w| narrow_weight(w)).collect(),
            biases: bias_words.iter().map(|&b| b as i32).collect(),
        })
    }

    /// Re-emits the layer in payload order. Weights come back sign-extended.
    pub fn to_words(&self) -> impl Iterator<Item = u32> + '_ {
        let weights = self.weights.iter().map(|&w| w as i32 as u32);
        let biases = self.biases.iter().map(|&b| b as u32);
        weights.chain(biases)
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i8 {
        self.weights[row * IN + col]
    }

    #[inline]
    pub fn bias(&self, row: usize) -> i32 {
        self.biases[row]
    }

    pub fn row(&self, row: usize) -> &[i8] {
        &self.weights[row * IN..(row + 1) * IN]
    }

    /// `output[i] = bias[i] + sum_j input[j] * weight[i][j]`.
    ///
    /// Output rows are independent and evaluated in parallel; each row is
    /// reduced sequentially so the result does not depend on scheduling.
    pub fn forward(&self, input: &[i8; IN], output: &mut [i32; OUT]) {
        output[..]
            .par_iter_mut()
            .zip(self.weights.par_chunks_exact(IN))
            .zip(self.biases.par_iter())
            .for_each(|((out, row), &bias)| {
                *out = bias.wrapping_add(dot_product(input, row));
            });
    }
}

/// Truncates a stream word to the 8-bit signed fixed-point weight it carries.
#[inline(always)]
pub fn narrow_weight(word: u32) -> i8 {
    word as u8 as i8
}
