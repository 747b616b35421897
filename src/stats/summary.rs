use thiserror::Error;
use tracing::debug;

/// Descriptive statistics for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    /// Entries handed to `summarize`, NaN included
    pub count: usize,
    /// Entries that are not NaN; every statistic below is over these only
    pub valid_count: usize,
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    /// Population variance (divides by `valid_count`)
    pub variance: f64,
    pub std_dev: f64,
    /// Middle element for odd counts. For even counts this is the *sum* of the two
    /// middle elements, not their mean; existing output depends on it.
    pub median: f64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Error: There were no valid numbers in column in file")]
pub struct EmptyDataError;

/// Compute the report over every non-NaN entry of `numbers`.
pub fn summarize(numbers: &[f64]) -> Result<StatisticsReport, EmptyDataError> {
    let count = numbers.len();
    let mut valid: Vec<f64> = numbers.iter().copied().filter(|v| !v.is_nan()).collect();
    let valid_count = valid.len();

    if valid_count == 0 {
        return Err(EmptyDataError);
    }

    let n = valid_count as f64;
    let average = valid.iter().sum::<f64>() / n;
    let maximum = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minimum = valid.iter().copied().fold(f64::INFINITY, f64::min);
    let variance = valid.iter().map(|v| (v - average).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    valid.sort_by(f64::total_cmp);
    let mid = valid_count / 2;
    let median = if valid_count % 2 == 1 {
        valid[mid]
    } else {
        valid[mid - 1] + valid[mid]
    };

    debug!(count, valid_count, "summarized");
    Ok(StatisticsReport {
        count,
        valid_count,
        average,
        maximum,
        minimum,
        variance,
        std_dev,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_three_values() {
        let r = summarize(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.count, 3);
        assert_eq!(r.valid_count, 3);
        assert!(close(r.average, 2.0));
        assert!(close(r.variance, 2.0 / 3.0));
        assert!(close(r.std_dev, (2.0f64 / 3.0).sqrt()));
        assert!(close(r.median, 2.0));
        assert_eq!(r.maximum, 3.0);
        assert_eq!(r.minimum, 1.0);
    }

    #[test]
    fn test_even_median_is_sum_of_middle_pair() {
        let r = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(r.count, 4);
        assert!(close(r.average, 2.5));
        assert!(close(r.median, 5.0));
    }

    #[test]
    fn test_odd_median_is_middle_of_sorted() {
        let r = summarize(&[9.0, -3.0, 7.0, 0.5, 2.0]).unwrap();
        assert_eq!(r.median, 2.0);
    }

    #[test]
    fn test_variance_is_population() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let r = summarize(&data).unwrap();
        assert!(close(r.average, 5.0));
        // sum of squared deviations is 32; 32 / 8, not 32 / 7
        assert!(close(r.variance, 4.0));
        assert!(close(r.std_dev, 2.0));
    }

    #[test]
    fn test_single_value() {
        let r = summarize(&[-7.25]).unwrap();
        assert_eq!(r.median, -7.25);
        assert_eq!(r.variance, 0.0);
        assert_eq!(r.maximum, r.minimum);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize(&[]), Err(EmptyDataError));
        assert_eq!(
            EmptyDataError.to_string(),
            "Error: There were no valid numbers in column in file"
        );
    }

    #[test]
    fn test_nan_excluded_from_statistics() {
        let r = summarize(&[f64::NAN, 1.0, 3.0, f64::NAN]).unwrap();
        assert_eq!(r.count, 4);
        assert_eq!(r.valid_count, 2);
        assert!(close(r.average, 2.0));
        assert!(close(r.median, 4.0));
        assert_eq!(r.maximum, 3.0);

        assert_eq!(summarize(&[f64::NAN, f64::NAN]), Err(EmptyDataError));
    }

    #[test]
    fn test_idempotent() {
        let data = [3.5, -1.0, 8.25, 0.0, 2.0, 2.0];
        assert_eq!(summarize(&data), summarize(&data));
    }
}
