use crate::error::{NetworkError, Result};

/// Calibrated activation scale after layer 0 (accumulator scale / output scale).
#[allow(clippy::excessive_precision)]
pub const DEFAULT_SCALE_0: f32 = 0.000_245_219_445_787_370_2 / 0.007_812_5;

/// Calibrated activation scale after layer 1.
pub const DEFAULT_SCALE_1: f32 = 0.000_244_140_625 / 0.007_812_5;

/// Scale factors bridging hidden accumulators back into the tanh domain.
///
/// They come from the external calibration step, not from the parameter
/// payload, and must be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    layer0: f32,
    layer1: f32,
}

impl Scales {
    pub fn new(layer0: f32, layer1: f32) -> Result<Self> {
        Ok(Self {
            layer0: validate(layer0)?,
            layer1: validate(layer1)?,
        })
    }

    #[inline]
    pub fn layer0(&self) -> f32 {
        self.layer0
    }

    #[inline]
    pub fn layer1(&self) -> f32 {
        self.layer1
    }
}

impl Default for Scales {
    fn default() -> Self {
        Self {
            layer0: DEFAULT_SCALE_0,
            layer1: DEFAULT_SCALE_1,
        }
    }
}

fn validate(scale: f32) -> Result<f32> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(NetworkError::InvalidScale(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scales() {
        let scales = Scales::default();
        assert!((scales.layer0() - 0.031_388_09).abs() < 1e-6);
        assert_eq!(scales.layer1(), 0.031_25);
    }

    #[test]
    fn test_rejects_invalid_scales() {
        assert_eq!(Scales::new(0.0, 1.0), Err(NetworkError::InvalidScale(0.0)));
        assert_eq!(Scales::new(1.0, -0.5), Err(NetworkError::InvalidScale(-0.5)));
        assert!(Scales::new(f32::INFINITY, 1.0).is_err());
        assert!(Scales::new(1.0, f32::NAN).is_err());
        assert!(Scales::new(1e-12, 3.0).is_ok());
    }
}
