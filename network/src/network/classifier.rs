use std::fmt;

use super::OUTPUT_SIZE;

/// Predicted class, always in `[0, OUTPUT_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassIndex(u8);

impl ClassIndex {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The class as it is written back on the output channel.
    #[inline]
    pub fn to_word(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<usize> for ClassIndex {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < OUTPUT_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(index)
        }
    }
}

impl fmt::Display for ClassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of the largest logit. Ties go to the lowest index.
///
/// Logits are raw accumulators; only their order carries meaning.
pub fn argmax(logits: &[i32; OUTPUT_SIZE]) -> ClassIndex {
    let mut best = 0;
    let mut best_value = logits[0];

    for (i, &value) in logits.iter().enumerate().skip(1) {
        if value > best_value {
            best_value = value;
            best = i;
        }
    }

    ClassIndex(best as u8)
}
