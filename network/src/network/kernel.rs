/// Fixed-point dot product of an activation vector and one weight row.
///
/// Each i8 x i8 product fits in 16 bits and is widened before summing into the
/// i32 accumulator. The running sum wraps on overflow like the two's-complement
/// accumulator it models; valid trained parameters never get there.
#[inline(always)]
pub fn dot_product(input: &[i8], weights: &[i8]) -> i32 {
    debug_assert_eq!(input.len(), weights.len());

    input
        .iter()
        .zip(weights)
        .fold(0i32, |acc, (&x, &w)| acc.wrapping_add(x as i32 * w as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_extremes() {
        let input = [i8::MIN; 512];
        let weights = [i8::MIN; 512];
        assert_eq!(dot_product(&input, &weights), 512 * 128 * 128);

        let weights = [i8::MAX; 512];
        assert_eq!(dot_product(&input, &weights), -512 * 128 * 127);
    }

    #[test]
    fn test_dot_product_mixed_signs() {
        assert_eq!(dot_product(&[1, -2, 3], &[-4, 5, 6]), -4 - 10 + 18);
        assert_eq!(dot_product(&[], &[]), 0);
    }
}
