//! The two precision boundaries of the network.
//!
//! Raw pixels enter through a linear, saturating quantizer. Hidden layer
//! accumulators leave through a bounded tanh approximation and are requantized
//! to the next layer's i8 input. Both saturate instead of reporting range
//! errors. Their rounding differs on purpose: input rounding always adds +0.5
//! before truncating, activation rounding is symmetric around zero.

use crate::error::{NetworkError, Result};

use super::{FIXED_POINT_ONE, INPUT_SIZE};

/// Quantizes one input word: the raw IEEE-754 bit pattern of a normalized pixel.
///
/// The value is scaled by 127, clamped to [-128, 127], offset by +0.5 and
/// truncated toward zero. The offset ignores the sign, so negative values
/// can land one step closer to zero than half-up rounding would put them and the
/// lowest reachable output is -127. NaN maps to 0.
#[inline]
pub fn quantize_input(word: u32) -> i8 {
    let scaled = (f32::from_bits(word) * FIXED_POINT_ONE).clamp(i8::MIN as f32, i8::MAX as f32);
    (scaled + 0.5) as i8
}

/// Quantizes a complete input vector.
pub fn quantize_inputs(words: &[u32]) -> Result<[i8; INPUT_SIZE]> {
    if words.len() != INPUT_SIZE {
        return Err(NetworkError::InputLength {
            expected: INPUT_SIZE,
            actual: words.len(),
        });
    }

    let mut input = [0i8; INPUT_SIZE];
    for (out, &word) in input.iter_mut().zip(words) {
        *out = quantize_input(word);
    }
    Ok(input)
}

/// Rational tanh approximation on [-1, 1], saturating to exactly ±1 outside.
#[inline]
pub fn tanh_approx(x: f32) -> f32 {
    if x < -1.0 {
        -1.0
    } else if x > 1.0 {
        1.0
    } else {
        x * (27.0 + x * x) / (27.0 + 9.0 * x * x)
    }
}

/// Maps a hidden-layer accumulator through `tanh_approx(acc * scale)` onto i8.
///
/// Rounds half away from zero and clamps to [-128, 127].
#[inline]
pub fn quantize_tanh(acc: i32, scale: f32) -> i8 {
    let y = tanh_approx(acc as f32 * scale);
    let bias = if y >= 0.0 { 0.5 } else { -0.5 };
    let rounded = (y * FIXED_POINT_ONE + bias) as i32;
    rounded.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}

/// Requantizes a whole accumulator vector with one shared scale.
pub fn quantize_activations<const N: usize>(acc: &[i32; N], scale: f32, output: &mut [i8; N]) {
    for (out, &sum) in output.iter_mut().zip(acc) {
        *out = quantize_tanh(sum, scale);
    }
}
