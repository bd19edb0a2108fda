pub mod classifier;
pub mod inference;
pub mod kernel;
pub mod layer;
pub mod quantize;

pub use classifier::{argmax, ClassIndex};
pub use inference::Network;
pub use layer::FixedPointLayer;
pub use quantize::{quantize_input, quantize_tanh, tanh_approx};

/// Number of pixels in one input image (28x28).
pub const INPUT_SIZE: usize = 784;

/// Width of the first hidden layer.
pub const HIDDEN_SIZE_0: usize = 512;

/// Width of the second hidden layer.
pub const HIDDEN_SIZE_1: usize = 256;

/// Number of classes the final layer scores.
pub const OUTPUT_SIZE: usize = 10;

/// Words needed for each layer's weights followed by its biases.
pub const LAYER0_WORDS: usize = INPUT_SIZE * HIDDEN_SIZE_0 + HIDDEN_SIZE_0;
pub const LAYER1_WORDS: usize = HIDDEN_SIZE_0 * HIDDEN_SIZE_1 + HIDDEN_SIZE_1;
pub const LAYER2_WORDS: usize = HIDDEN_SIZE_1 * OUTPUT_SIZE + OUTPUT_SIZE;

/// Exact length of the one-time parameter payload (535,818 words).
pub const PAYLOAD_WORDS: usize = LAYER0_WORDS + LAYER1_WORDS + LAYER2_WORDS;

/// Largest magnitude an 8-bit fixed-point value is mapped onto.
pub const FIXED_POINT_ONE: f32 = 127.0;

pub type Layer0 = FixedPointLayer<INPUT_SIZE, HIDDEN_SIZE_0>;
pub type Layer1 = FixedPointLayer<HIDDEN_SIZE_0, HIDDEN_SIZE_1>;
pub type Layer2 = FixedPointLayer<HIDDEN_SIZE_1, OUTPUT_SIZE>;
