
use rand::Rng;

use crate::network::{HIDDEN_SIZE_0, HIDDEN_SIZE_1, INPUT_SIZE, OUTPUT_SIZE, PAYLOAD_WORDS};

/// Parameter set in plain vectors, for building payloads and reference results.
#[derive(Clone)]
pub struct TestParams {
    pub w0: Vec<i8>,
    pub b0: Vec<i32>,
    pub w1: Vec<i8>,
    pub b1: Vec<i32>,
    pub w2: Vec<i8>,
    pub b2: Vec<i32>,
}

impl TestParams {
    pub fn zeroed() -> Self {
        Self {
            w0: vec![0; HIDDEN_SIZE_0 * INPUT_SIZE],
            b0: vec![0; HIDDEN_SIZE_0],
            w1: vec![0; HIDDEN_SIZE_1 * HIDDEN_SIZE_0],
            b1: vec![0; HIDDEN_SIZE_1],
            w2: vec![0; OUTPUT_SIZE * HIDDEN_SIZE_1],
            b2: vec![0; OUTPUT_SIZE],
        }
    }

    pub fn random<R: Rng>(rng: &mut R, weight_range: i8, bias_range: i32) -> Self {
        let mut weights = |n: usize| -> Vec<i8> {
            (0..n)
                .map(|_| rng.gen_range(-weight_range..=weight_range))
                .collect()
        };
        let w0 = weights(HIDDEN_SIZE_0 * INPUT_SIZE);
        let w1 = weights(HIDDEN_SIZE_1 * HIDDEN_SIZE_0);
        let w2 = weights(OUTPUT_SIZE * HIDDEN_SIZE_1);

        let mut biases = |n: usize| -> Vec<i32> {
            (0..n)
                .map(|_| rng.gen_range(-bias_range..=bias_range))
                .collect()
        };
        let b0 = biases(HIDDEN_SIZE_0);
        let b1 = biases(HIDDEN_SIZE_1);
        let b2 = biases(OUTPUT_SIZE);

        Self {
            w0,
            b0,
            w1,
            b1,
            w2,
            b2,
        }
    }

    /// Payload words in stream order. Weights are written sign-extended.
    pub fn to_words(&self) -> Vec<u32> {
        let weights = |w: &[i8]| w.iter().map(|&v| v as i32 as u32).collect::<Vec<_>>();
        let biases = |b: &[i32]| b.iter().map(|&v| v as u32).collect::<Vec<_>>();

        let mut words = Vec::with_capacity(PAYLOAD_WORDS);
        words.extend(weights(&self.w0));
        words.extend(biases(&self.b0));
        words.extend(weights(&self.w1));
        words.extend(biases(&self.b1));
        words.extend(weights(&self.w2));
        words.extend(biases(&self.b2));
        words
    }
}

/// Image words for a constant pixel value.
pub fn constant_image(value: f32) -> Vec<u32> {
    vec![value.to_bits(); INPUT_SIZE]
}

/// Image words for pixels drawn uniformly from [-1.25, 1.25), so both
/// saturation ends and negative rounding are exercised.
pub fn random_image<R: Rng>(rng: &mut R) -> Vec<u32> {
    (0..INPUT_SIZE)
        .map(|_| rng.gen_range(-1.25f32..1.25).to_bits())
        .collect()
}
