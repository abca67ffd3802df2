//! Analytics engine — KPIs and grouped aggregates over a reservation set.
//!
//! This stage is READ-ONLY. It never touches the RNG and never mutates
//! the reservations; it builds a fresh Report from them.
//!
//! Undefined statistics (mean of nothing, correlation with a constant
//! column) are reported as `None` and serialize as null. The Report keeps
//! its full shape for an empty input: zero count, empty groups, zero sums.

use crate::{
    buckets::{bucket_for, HourBucket},
    stats::{mean, pearson, round_opt, round_to},
    types::{ComplaintReason, Month, Reservation, UnitType},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planned operating cost as a fraction of the current total.
pub const COST_TARGET_RATIO: f64 = 0.90;

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kpis {
    pub total_reservations: usize,
    #[serde(rename = "nps_moyen")]
    pub mean_satisfaction: Option<f64>,
    #[serde(rename = "cout_moyen")]
    pub mean_cost: Option<f64>,
    #[serde(rename = "attente_moyenne")]
    pub mean_wait: Option<f64>,
    /// Percentage of reservations with a complaint.
    #[serde(rename = "taux_reclamation")]
    pub complaint_rate: Option<f64>,
    #[serde(rename = "correlation_attente_nps")]
    pub wait_satisfaction_correlation: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyCost {
    #[serde(rename = "mois")]
    pub month: Month,
    #[serde(rename = "cout_moyen")]
    pub mean_cost: f64,
    #[serde(rename = "cout_total")]
    pub total_cost: f64,
    #[serde(rename = "nb_reservations")]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Savings {
    #[serde(rename = "actuel")]
    pub current: f64,
    #[serde(rename = "cible")]
    pub target: f64,
    pub gain: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    #[serde(rename = "temps_attente_min")]
    pub wait_time: f64,
    #[serde(rename = "score_nps")]
    pub satisfaction_score: f64,
    #[serde(rename = "type_logement")]
    pub unit_type: UnitType,
    #[serde(rename = "haute_saison")]
    pub high_season: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub kpis: Kpis,
    #[serde(rename = "couts_mensuels")]
    pub monthly_costs: Vec<MonthlyCost>,
    #[serde(rename = "nps_logement")]
    pub satisfaction_by_unit: BTreeMap<UnitType, f64>,
    #[serde(rename = "reclam")]
    pub complaint_counts: BTreeMap<ComplaintReason, usize>,
    #[serde(rename = "attente_horaire")]
    pub wait_by_hour: BTreeMap<HourBucket, f64>,
    #[serde(rename = "economies")]
    pub savings: Savings,
    #[serde(rename = "scatter_data")]
    pub scatter: Vec<ScatterPoint>,
}

// ── Grouping ─────────────────────────────────────────────────────────────────

/// Running sum and count for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    pub sum: f64,
    pub count: usize,
}

impl GroupStats {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Groups only exist once a value has been added, so count > 0.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Group reservations by key and accumulate one value per group.
/// Records whose key is None are skipped.
pub fn group_by<K, F, V>(reservations: &[Reservation], key: F, value: V) -> BTreeMap<K, GroupStats>
where
    K: Ord,
    F: Fn(&Reservation) -> Option<K>,
    V: Fn(&Reservation) -> f64,
{
    let mut groups: BTreeMap<K, GroupStats> = BTreeMap::new();
    for r in reservations {
        if let Some(k) = key(r) {
            groups.entry(k).or_default().add(value(r));
        }
    }
    groups
}

// ── Engine ───────────────────────────────────────────────────────────────────

pub fn analyze(reservations: &[Reservation]) -> Report {
    let report = Report {
        kpis: compute_kpis(reservations),
        monthly_costs: monthly_costs(reservations),
        satisfaction_by_unit: satisfaction_by_unit(reservations),
        complaint_counts: complaint_counts(reservations),
        wait_by_hour: wait_by_hour(reservations),
        savings: simulate_savings(reservations),
        scatter: scatter(reservations),
    };

    log::debug!(
        "analytics: {} reservations, {} months, {} hour buckets",
        report.kpis.total_reservations,
        report.monthly_costs.len(),
        report.wait_by_hour.len(),
    );
    report
}

pub fn compute_kpis(reservations: &[Reservation]) -> Kpis {
    let n = reservations.len();
    let complaints = reservations.iter().filter(|r| r.has_complaint()).count();
    let complaint_rate = if n > 0 {
        Some(round_to(complaints as f64 / n as f64 * 100.0, 1))
    } else {
        None
    };

    let waits: Vec<f64> = reservations.iter().map(|r| r.wait_time).collect();
    let scores: Vec<f64> = reservations.iter().map(|r| r.satisfaction_score).collect();
    let correlation = round_opt(pearson(&waits, &scores), 3);
    if correlation.is_none() {
        log::warn!("analytics: wait/satisfaction correlation undefined for {n} reservations");
    }

    Kpis {
        total_reservations: n,
        mean_satisfaction: round_opt(mean(scores.iter().copied()), 2),
        mean_cost: round_opt(mean(reservations.iter().map(|r| r.total_cost)), 2),
        mean_wait: round_opt(mean(waits.iter().copied()), 2),
        complaint_rate,
        wait_satisfaction_correlation: correlation,
    }
}

/// One entry per month present, ascending. Empty months are omitted.
pub fn monthly_costs(reservations: &[Reservation]) -> Vec<MonthlyCost> {
    group_by(reservations, |r| Some(r.month), |r| r.total_cost)
        .into_iter()
        .map(|(month, g)| MonthlyCost {
            month,
            mean_cost: g.mean(),
            total_cost: g.sum,
            count: g.count,
        })
        .collect()
}

pub fn satisfaction_by_unit(reservations: &[Reservation]) -> BTreeMap<UnitType, f64> {
    group_by(reservations, |r| Some(r.unit_type), |r| r.satisfaction_score)
        .into_iter()
        .map(|(unit, g)| (unit, round_to(g.mean(), 2)))
        .collect()
}

pub fn complaint_counts(reservations: &[Reservation]) -> BTreeMap<ComplaintReason, usize> {
    let mut counts = BTreeMap::new();
    for r in reservations {
        *counts.entry(r.complaint_reason).or_insert(0) += 1;
    }
    counts
}

pub fn wait_by_hour(reservations: &[Reservation]) -> BTreeMap<HourBucket, f64> {
    group_by(reservations, |r| bucket_for(r.arrival_hour), |r| r.wait_time)
        .into_iter()
        .map(|(bucket, g)| (bucket, round_to(g.mean(), 1)))
        .collect()
}

pub fn simulate_savings(reservations: &[Reservation]) -> Savings {
    let current: f64 = reservations.iter().map(|r| r.total_cost).sum();
    let target = current * COST_TARGET_RATIO;
    Savings {
        current: round_to(current, 2),
        target: round_to(target, 2),
        gain: round_to(current - target, 2),
    }
}

pub fn scatter(reservations: &[Reservation]) -> Vec<ScatterPoint> {
    reservations
        .iter()
        .map(|r| ScatterPoint {
            wait_time: r.wait_time,
            satisfaction_score: r.satisfaction_score,
            unit_type: r.unit_type,
            high_season: r.high_season,
        })
        .collect()
}
