use serde::Serialize;

/// Entropy estimates of a discrete distribution, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntropyEstimate {
    /// `-Σ p·log2(p)`
    pub shannon: f64,

    /// Rényi entropy of order 2, `-log2(Σ p²)`
    pub collision: f64,

    /// `-log2(max p)`
    pub min_entropy: f64,
}

impl EntropyEstimate {
    /// Computes the estimates from per-bin probabilities.
    ///
    /// Zero-probability bins contribute nothing. The probabilities are expected
    /// to sum to one and contain at least one positive value.
    pub fn from_probabilities(probabilities: &[f64]) -> Self {
        let mut shannon = 0.0;
        let mut collision = 0.0;
        let mut max = 0.0f64;

        for &p in probabilities.iter().filter(|&&p| p > 0.0) {
            shannon -= p * p.log2();
            collision += p * p;
            max = max.max(p);
        }

        Self {
            shannon,
            collision: -collision.log2(),
            min_entropy: -max.log2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-12;

    #[rstest]
    #[case(2)]
    #[case(16)]
    #[case(256)]
    fn uniform_distribution_has_log2_n_bits(#[case] nbins: usize) {
        let probabilities = vec![1.0 / nbins as f64; nbins];
        let estimate = EntropyEstimate::from_probabilities(&probabilities);
        let expected = (nbins as f64).log2();

        assert!((estimate.shannon - expected).abs() < EPSILON);
        assert!((estimate.collision - expected).abs() < EPSILON);
        assert!((estimate.min_entropy - expected).abs() < EPSILON);
    }

    #[test]
    fn certain_outcome_has_zero_entropy() {
        let estimate = EntropyEstimate::from_probabilities(&[0.0, 1.0, 0.0]);
        assert_eq!(estimate.shannon, 0.0);
        assert_eq!(estimate.collision, 0.0);
        assert_eq!(estimate.min_entropy, 0.0);
    }

    #[test]
    fn min_entropy_is_the_lowest_estimate() {
        let estimate = EntropyEstimate::from_probabilities(&[0.25, 0.5, 0.25]);
        assert!((estimate.shannon - 1.5).abs() < EPSILON);
        assert!((estimate.min_entropy - 1.0).abs() < EPSILON);
        assert!(estimate.min_entropy <= estimate.collision);
        assert!(estimate.collision <= estimate.shannon);
    }
}
