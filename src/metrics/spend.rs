/// Summary statistics over per-lead spend
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpendStats {
    pub total: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
}

impl SpendStats {
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            total: values.iter().sum(),
            mean: mean(values),
            std_dev: sample_std_dev(values),
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; `0.0` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population std is 2.0; sample std is sqrt(32 / 7)
        assert!((sample_std_dev(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
        let stats = SpendStats::from_values(&[42.0]);
        assert_eq!(stats.total, 42.0);
        assert_eq!(stats.mean, 42.0);
    }
}
