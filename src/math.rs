//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

/// Population variance from running sums: `E[x²] - E[x]²`
///
/// Negative variance produced by rounding is clamped to zero so its square
/// root is never NaN for finite inputs.
#[inline]
pub fn population_variance(sum: f64, sum_of_squares: f64, count: usize) -> f64 {
    let n = count as f64;
    let mean = sum / n;
    let variance = sum_of_squares / n - mean * mean;
    if variance > 0.0 {
        variance
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_variance() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, variance 4
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sum: f64 = values.iter().sum();
        let sum_sq: f64 = values.iter().map(|v| v * v).sum();
        assert_eq!(population_variance(sum, sum_sq, values.len()), 4.0);
        assert_eq!(sqrt(population_variance(sum, sum_sq, values.len())), 2.0);
    }

    #[test]
    fn test_negative_residue_clamped() {
        // 0.1 * 3 squared sums leave a tiny negative residue without clamping
        let sum = 0.1 + 0.1 + 0.1;
        let sum_sq = 0.01 + 0.01 + 0.01;
        let variance = population_variance(sum, sum_sq, 3);
        assert!(variance >= 0.0);
        assert!(!sqrt(variance).is_nan());
    }
}
