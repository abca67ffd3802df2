//! Validated probability tables for categorical draws.

use crate::error::{ConciergeError, ConciergeResult};
use serde::{Deserialize, Serialize};

/// Maximum distance from 1.0 a weight vector may sum to.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// One outcome and its probability, as written in config files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightedEntry<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedEntry<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// A finite set of outcomes with cumulative weights.
/// Construction fails unless every weight is non-negative and the
/// total is within WEIGHT_TOLERANCE of 1.0.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    outcomes: Vec<T>,
    cumulative: Vec<f64>,
    /// Last outcome with a positive weight; catches rolls past the final
    /// cumulative weight.
    fallback: usize,
}

impl<T: Copy> WeightedTable<T> {
    pub fn new(name: &'static str, entries: &[WeightedEntry<T>]) -> ConciergeResult<Self> {
        let sum: f64 = entries.iter().map(|e| e.weight).sum();
        let bad_weight = entries
            .iter()
            .any(|e| !e.weight.is_finite() || e.weight < 0.0);

        if entries.is_empty() || bad_weight || (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConciergeError::InvalidWeights { table: name, sum });
        }

        let mut outcomes = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut running = 0.0;
        for entry in entries {
            running += entry.weight;
            outcomes.push(entry.value);
            cumulative.push(running);
        }

        let fallback = entries
            .iter()
            .rposition(|e| e.weight > 0.0)
            .ok_or(ConciergeError::InvalidWeights { table: name, sum })?;

        Ok(Self {
            outcomes,
            cumulative,
            fallback,
        })
    }

    /// Map a roll in [0, 1) to an outcome. Rolls past the last cumulative
    /// weight (float drift) land on the last outcome with positive weight.
    pub fn pick(&self, roll: f64) -> T {
        let idx = self
            .cumulative
            .iter()
            .position(|&c| roll < c)
            .unwrap_or(self.fallback);
        self.outcomes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(weights: &[f64]) -> Vec<WeightedEntry<u32>> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedEntry::new(i as u32, w))
            .collect()
    }

    #[test]
    fn rejects_sum_outside_tolerance() {
        let err = WeightedTable::new("t", &entries(&[0.5, 0.49])).unwrap_err();
        assert!(matches!(err, ConciergeError::InvalidWeights { table: "t", .. }));
    }

    #[test]
    fn rejects_negative_and_empty() {
        assert!(WeightedTable::new("t", &entries(&[1.5, -0.5])).is_err());
        assert!(WeightedTable::new("t", &entries(&[])).is_err());
    }

    #[test]
    fn pick_follows_cumulative_boundaries() {
        let table = WeightedTable::new("t", &entries(&[0.25, 0.5, 0.25])).unwrap();
        assert_eq!(table.pick(0.0), 0);
        assert_eq!(table.pick(0.2499), 0);
        assert_eq!(table.pick(0.25), 1);
        assert_eq!(table.pick(0.7499), 1);
        assert_eq!(table.pick(0.75), 2);
        assert_eq!(table.pick(0.999_999_9), 2);
    }

    #[test]
    fn drift_past_total_never_picks_zero_weight_outcome() {
        let table = WeightedTable::new("t", &entries(&[0.999_999_5, 0.0])).unwrap();
        assert_eq!(table.pick(0.999_999_9), 0);

        let table = WeightedTable::new("t", &entries(&[0.3, 0.699_999_5, 0.0, 0.0])).unwrap();
        assert_eq!(table.pick(0.999_999_9), 1);
    }
}
