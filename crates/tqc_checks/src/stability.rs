//! Metric stability comparison.
//!
//! Compares a freshly computed metric value against a recorded history of
//! past values. A value more than `max_sigma` sample standard deviations
//! from the historical mean is flagged as unstable. The comparison is
//! advisory by design; callers decide whether an unstable metric blocks
//! anything.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CheckError;

/// Default sigma threshold.
pub const DEFAULT_MAX_SIGMA: f64 = 3.0;

/// One recorded metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// The metric value
    pub value: f64,
    /// When it was recorded
    pub recorded_at: DateTime<Utc>,
}

/// A recorded series of past metric values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricHistory {
    samples: Vec<MetricSample>,
}

impl MetricHistory {
    /// Creates a history from samples.
    pub fn new(samples: Vec<MetricSample>) -> Self {
        Self { samples }
    }

    /// Loads a history from a JSON file.
    ///
    /// The file holds a JSON array of `{value, recorded_at}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: MetricSample) {
        self.samples.push(sample);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The recorded values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}

/// Outcome of a stability comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityFinding {
    /// Whether the value sits within the threshold
    pub stable: bool,
    /// The value that was compared
    pub value: f64,
    /// Historical mean
    pub mean: f64,
    /// Historical sample standard deviation
    pub std_dev: f64,
    /// Distance from the mean, in standard deviations
    pub sigma_distance: f64,
    /// Threshold used
    pub max_sigma: f64,
}

/// Compares a metric value against its recorded history.
///
/// Uses the sample standard deviation (n - 1 denominator). When the
/// history has zero spread, any deviation from the mean is unstable and
/// the sigma distance reads as infinite.
///
/// # Errors
///
/// Returns `CheckError::InsufficientHistory` when fewer than two samples
/// are recorded; a spread cannot be estimated from less.
pub fn stability(
    value: f64,
    history: &MetricHistory,
    max_sigma: f64,
) -> Result<StabilityFinding, CheckError> {
    if history.len() < 2 {
        return Err(CheckError::InsufficientHistory {
            needed: 2,
            got: history.len(),
        });
    }

    let n = history.len() as f64;
    let mean = history.values().sum::<f64>() / n;
    let variance = history.values().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();

    let (sigma_distance, stable) = if std_dev == 0.0 {
        if value == mean {
            (0.0, true)
        } else {
            (f64::INFINITY, false)
        }
    } else {
        let distance = (value - mean).abs() / std_dev;
        (distance, distance <= max_sigma)
    };

    Ok(StabilityFinding {
        stable,
        value,
        mean,
        std_dev,
        sigma_distance,
        max_sigma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_of(values: &[f64]) -> MetricHistory {
        MetricHistory::new(
            values
                .iter()
                .map(|&value| MetricSample {
                    value,
                    recorded_at: Utc::now(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_value_near_mean_is_stable() {
        let history = history_of(&[1.0, 1.1, 0.9, 1.0]);
        let finding = stability(1.05, &history, DEFAULT_MAX_SIGMA).unwrap();
        assert!(finding.stable);
        assert!(finding.sigma_distance < 1.0);
    }

    #[test]
    fn test_distant_value_is_unstable() {
        let history = history_of(&[1.0, 1.1, 0.9, 1.0]);
        let finding = stability(5.0, &history, DEFAULT_MAX_SIGMA).unwrap();
        assert!(!finding.stable);
        assert!(finding.sigma_distance > DEFAULT_MAX_SIGMA);
    }

    #[test]
    fn test_sample_standard_deviation() {
        let history = history_of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let finding = stability(5.0, &history, DEFAULT_MAX_SIGMA).unwrap();
        assert!((finding.mean - 5.0).abs() < 1e-9);
        // Sample std dev of this classic set is sqrt(32/7)
        assert!((finding.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_spread_history() {
        let history = history_of(&[2.0, 2.0, 2.0]);

        let same = stability(2.0, &history, DEFAULT_MAX_SIGMA).unwrap();
        assert!(same.stable);
        assert_eq!(same.sigma_distance, 0.0);

        let drifted = stability(2.0001, &history, DEFAULT_MAX_SIGMA).unwrap();
        assert!(!drifted.stable);
        assert!(drifted.sigma_distance.is_infinite());
    }

    #[test]
    fn test_short_history_is_an_error() {
        let history = history_of(&[1.0]);
        let err = stability(1.0, &history, DEFAULT_MAX_SIGMA).unwrap_err();
        assert!(matches!(
            err,
            CheckError::InsufficientHistory { needed: 2, got: 1 }
        ));
    }

    #[test]
    fn test_history_json_round_trip() {
        let history = history_of(&[0.5, 0.6]);
        let json = serde_json::to_string(&history).unwrap();
        let parsed: MetricHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values().collect::<Vec<_>>(), vec![0.5, 0.6]);
    }
}
