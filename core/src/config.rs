use crate::{
    error::{ConciergeError, ConciergeResult},
    tables::{WeightedEntry, WeightedTable},
    types::{ArrivalHour, ComplaintReason, UnitType},
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_COUNT: i64 = 500;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_WINDOW_DAYS: u32 = 364;

fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Everything the generator needs: how many records, which seed, the
/// arrival window and the probability tables for every categorical draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConciergeConfig {
    pub record_count: i64,
    pub seed: u64,
    /// First possible arrival date.
    pub epoch: NaiveDate,
    /// Arrival offsets are drawn from [0, window_days) and truncated.
    pub window_days: u32,
    pub stay_lengths: Vec<WeightedEntry<u32>>,
    pub unit_types: Vec<WeightedEntry<UnitType>>,
    pub complaint_reasons: Vec<WeightedEntry<ComplaintReason>>,
    pub arrival_hours: Vec<WeightedEntry<ArrivalHour>>,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        let stay_lengths: [(u32, f64); 8] = [
            (1, 0.15),
            (2, 0.25),
            (3, 0.20),
            (4, 0.15),
            (5, 0.10),
            (7, 0.08),
            (10, 0.05),
            (14, 0.02),
        ];
        let unit_types = [
            (UnitType::Studio, 0.35),
            (UnitType::TwoRoom, 0.40),
            (UnitType::ThreeRoom, 0.15),
            (UnitType::Suite, 0.10),
        ];
        let complaint_reasons = [
            (ComplaintReason::InsufficientCleaning, 0.18),
            (ComplaintReason::NeighborNoise, 0.12),
            (ComplaintReason::LateCheckIn, 0.20),
            (ComplaintReason::FaultyEquipment, 0.10),
            (ComplaintReason::NoComplaint, 0.40),
        ];
        let hour_weights: [f64; 9] = [0.05, 0.10, 0.20, 0.25, 0.18, 0.10, 0.06, 0.04, 0.02];

        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
            epoch: default_epoch(),
            window_days: DEFAULT_WINDOW_DAYS,
            stay_lengths: to_entries(&stay_lengths),
            unit_types: to_entries(&unit_types),
            complaint_reasons: to_entries(&complaint_reasons),
            arrival_hours: (14..=22u32)
                .zip(hour_weights)
                .map(|(hour, w)| WeightedEntry::new(hour, w))
                .collect(),
        }
    }
}

impl ConciergeConfig {
    /// Load from a JSON file. Fields missing from the file keep their
    /// default values. The result is not validated; call validate().
    pub fn load(path: &str) -> ConciergeResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ConciergeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_record_count(mut self, record_count: i64) -> Self {
        self.record_count = record_count;
        self
    }

    /// Fail fast on anything that would make generation meaningless.
    pub fn validate(&self) -> ConciergeResult<()> {
        validate_record_count(self.record_count)?;
        validate_window(self.epoch, self.window_days)?;
        self.tables().map(|_| ())
    }

    /// Build the validated sampling tables.
    pub fn tables(&self) -> ConciergeResult<SamplingTables> {
        Ok(SamplingTables {
            stay_lengths: WeightedTable::new("stay_lengths", &self.stay_lengths)?,
            unit_types: WeightedTable::new("unit_types", &self.unit_types)?,
            complaint_reasons: WeightedTable::new("complaint_reasons", &self.complaint_reasons)?,
            arrival_hours: WeightedTable::new("arrival_hours", &self.arrival_hours)?,
        })
    }
}

/// The four categorical tables, each already checked to sum to 1.
#[derive(Debug, Clone)]
pub struct SamplingTables {
    pub stay_lengths: WeightedTable<u32>,
    pub unit_types: WeightedTable<UnitType>,
    pub complaint_reasons: WeightedTable<ComplaintReason>,
    pub arrival_hours: WeightedTable<ArrivalHour>,
}

pub fn validate_record_count(count: i64) -> ConciergeResult<usize> {
    if count <= 0 {
        return Err(ConciergeError::InvalidRecordCount { count });
    }
    Ok(count as usize)
}

/// The window must span at least one day and end on a representable date.
pub fn validate_window(epoch: NaiveDate, days: u32) -> ConciergeResult<()> {
    if days == 0 || epoch.checked_add_days(Days::new(days as u64)).is_none() {
        return Err(ConciergeError::InvalidWindow { days });
    }
    Ok(())
}

fn to_entries<T: Copy>(pairs: &[(T, f64)]) -> Vec<WeightedEntry<T>> {
    pairs
        .iter()
        .map(|&(value, weight)| WeightedEntry::new(value, weight))
        .collect()
}
