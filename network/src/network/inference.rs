use crate::error::Result;
use crate::params::ParameterSet;

use super::classifier::{argmax, ClassIndex};
use super::quantize::{quantize_activations, quantize_inputs};
use super::{HIDDEN_SIZE_0, HIDDEN_SIZE_1, INPUT_SIZE, OUTPUT_SIZE};

/// Fixed-point inference over a loaded parameter set.
///
/// 784 -> 512 (tanh) -> 256 (tanh) -> 10 logits -> argmax.
pub struct Network {
    params: ParameterSet,
}

impl Network {
    pub fn new(params: ParameterSet) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Raw logits of the final layer for an already quantized input.
    pub fn forward(&self, input: &[i8; INPUT_SIZE]) -> [i32; OUTPUT_SIZE] {
        let scales = self.params.scales();

        let mut acc0 = [0i32; HIDDEN_SIZE_0];
        let mut hidden0 = [0i8; HIDDEN_SIZE_0];
        self.params.layer0().forward(input, &mut acc0);
        quantize_activations(&acc0, scales.layer0(), &mut hidden0);

        let mut acc1 = [0i32; HIDDEN_SIZE_1];
        let mut hidden1 = [0i8; HIDDEN_SIZE_1];
        self.params.layer1().forward(&hidden0, &mut acc1);
        quantize_activations(&acc1, scales.layer1(), &mut hidden1);

        // No requantization after the last layer
        let mut logits = [0i32; OUTPUT_SIZE];
        self.params.layer2().forward(&hidden1, &mut logits);
        logits
    }

    /// Classifies one image given as 784 raw f32 bit patterns.
    pub fn classify(&self, words: &[u32]) -> Result<ClassIndex> {
        let input = quantize_inputs(words)?;
        Ok(argmax(&self.forward(&input)))
    }
}
