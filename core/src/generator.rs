//! Dataset synthesizer — reproducible synthetic concierge bookings.
//!
//! Each column is sampled for all n records in one batch, in a fixed
//! order, then records are assembled row by row. Gated surcharges
//! (high season, late arrival) are drawn for every record and only
//! applied where the gate holds, so no record's draws depend on
//! another record's flags.
//!
//! Column order (NEVER reorder — it changes every dataset):
//!   1. arrival offset        uniform(0, window_days)
//!   2. stay length           categorical
//!   3. unit type             categorical
//!   4. complaint reason      categorical
//!   5. arrival hour          categorical
//!   6. base wait             exponential(8)
//!   7. high-season surcharge uniform(5, 20)
//!   8. late-arrival surcharge uniform(3, 15)
//!   9. satisfaction base     normal(7.5, 1.2)
//!  10. wait penalty factor   uniform(1.5, 3.0)
//!  11. maintenance           uniform(10, 40)

use crate::{
    config::{validate_record_count, validate_window, ConciergeConfig, SamplingTables},
    error::{ConciergeError, ConciergeResult},
    rng::SimRng,
    stats::round_to,
    types::{is_high_season, ArrivalHour, ComplaintReason, Reservation, ReservationId},
};
use chrono::{Datelike, Days, NaiveDate};

pub const WAIT_EXP_MEAN: f64 = 8.0;
pub const HIGH_SEASON_WAIT: (f64, f64) = (5.0, 20.0);
pub const LATE_ARRIVAL_WAIT: (f64, f64) = (3.0, 15.0);
/// Arrivals strictly after this hour get the late surcharge.
pub const LATE_ARRIVAL_AFTER_HOUR: ArrivalHour = 19;
pub const MAX_WAIT_MIN: f64 = 90.0;

pub const SATISFACTION_MEAN: f64 = 7.5;
pub const SATISFACTION_SD: f64 = 1.2;
pub const WAIT_PENALTY_FACTOR: (f64, f64) = (1.5, 3.0);
pub const COMPLAINT_SATISFACTION_PENALTY: f64 = 1.5;
pub const SATISFACTION_FLOOR: f64 = 1.0;
pub const SATISFACTION_CEIL: f64 = 10.0;

pub const MAINTENANCE_RANGE: (f64, f64) = (10.0, 40.0);
/// Stays longer than this many nights add LONG_STAY_MAINTENANCE.
pub const LONG_STAY_NIGHTS: u32 = 5;
pub const LONG_STAY_MAINTENANCE: f64 = 15.0;
pub const COMPLAINT_HANDLING_COST: f64 = 25.0;

pub fn late_arrival_eligible(hour: ArrivalHour) -> bool {
    hour > LATE_ARRIVAL_AFTER_HOUR
}

/// Wait time from its three additive terms, clipped once at the end.
pub fn wait_time_minutes(
    base: f64,
    high_season: bool,
    season_extra: f64,
    hour: ArrivalHour,
    late_extra: f64,
) -> f64 {
    let mut wait = base;
    if high_season {
        wait += season_extra;
    }
    if late_arrival_eligible(hour) {
        wait += late_extra;
    }
    round_to(wait.clamp(0.0, MAX_WAIT_MIN), 1)
}

/// Satisfaction from its base draw and penalties, clipped once at the end.
pub fn satisfaction_score(
    base: f64,
    wait: f64,
    penalty_factor: f64,
    reason: ComplaintReason,
) -> f64 {
    let complaint_penalty = if reason.is_complaint() {
        COMPLAINT_SATISFACTION_PENALTY
    } else {
        0.0
    };
    let raw = base - (wait / MAX_WAIT_MIN) * penalty_factor - complaint_penalty;
    round_to(raw.clamp(SATISFACTION_FLOOR, SATISFACTION_CEIL), 1)
}

pub struct DatasetGenerator {
    tables: SamplingTables,
    epoch: NaiveDate,
    window_days: u32,
}

impl DatasetGenerator {
    /// Validates every probability table before anything is drawn.
    pub fn from_config(config: &ConciergeConfig) -> ConciergeResult<Self> {
        validate_window(config.epoch, config.window_days)?;
        Ok(Self {
            tables: config.tables()?,
            epoch: config.epoch,
            window_days: config.window_days,
        })
    }

    /// Generate `count` reservations with ids 1..=count.
    pub fn generate(&self, count: i64, rng: &mut SimRng) -> ConciergeResult<Vec<Reservation>> {
        let n = validate_record_count(count)?;

        let offsets = rng.uniform_n(n, 0.0, self.window_days as f64);
        let stays = rng.choose_n(n, &self.tables.stay_lengths);
        let unit_types = rng.choose_n(n, &self.tables.unit_types);
        let reasons = rng.choose_n(n, &self.tables.complaint_reasons);
        let hours = rng.choose_n(n, &self.tables.arrival_hours);
        let wait_base = rng.exponential_n(n, WAIT_EXP_MEAN)?;
        let season_extra = rng.uniform_n(n, HIGH_SEASON_WAIT.0, HIGH_SEASON_WAIT.1);
        let late_extra = rng.uniform_n(n, LATE_ARRIVAL_WAIT.0, LATE_ARRIVAL_WAIT.1);
        let satisfaction_base = rng.normal_n(n, SATISFACTION_MEAN, SATISFACTION_SD)?;
        let penalty_factor = rng.uniform_n(n, WAIT_PENALTY_FACTOR.0, WAIT_PENALTY_FACTOR.1);
        let maintenance_draw = rng.uniform_n(n, MAINTENANCE_RANGE.0, MAINTENANCE_RANGE.1);

        let mut reservations = Vec::with_capacity(n);
        for i in 0..n {
            let arrival_date = self
                .epoch
                .checked_add_days(Days::new(offsets[i].floor() as u64))
                .ok_or(ConciergeError::InvalidWindow {
                    days: self.window_days,
                })?;
            let month = arrival_date.month();
            let high_season = is_high_season(month);

            let wait_time = wait_time_minutes(
                wait_base[i],
                high_season,
                season_extra[i],
                hours[i],
                late_extra[i],
            );
            let satisfaction =
                satisfaction_score(satisfaction_base[i], wait_time, penalty_factor[i], reasons[i]);

            let staff_cost = unit_types[i].base_cost();
            let maintenance = maintenance_draw[i]
                + if stays[i] > LONG_STAY_NIGHTS {
                    LONG_STAY_MAINTENANCE
                } else {
                    0.0
                };
            let complaint_cost = if reasons[i].is_complaint() {
                COMPLAINT_HANDLING_COST
            } else {
                0.0
            };

            reservations.push(Reservation {
                id: (i + 1) as ReservationId,
                arrival_date,
                month,
                arrival_hour: hours[i],
                stay_length: stays[i],
                unit_type: unit_types[i],
                wait_time,
                satisfaction_score: satisfaction,
                complaint_reason: reasons[i],
                staff_cost,
                maintenance_cost: round_to(maintenance, 2),
                complaint_cost,
                total_cost: round_to(staff_cost + maintenance + complaint_cost, 2),
                high_season,
            });
        }

        log::debug!(
            "generator: {n} reservations from {} over {} days (rng={}, seed={})",
            self.epoch,
            self.window_days,
            rng.name,
            rng.seed(),
        );
        Ok(reservations)
    }
}
