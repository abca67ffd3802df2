//! Shared domain types: the reservation record and its enumerations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sequential reservation identifier, 1..=n in generation order.
pub type ReservationId = u32;

/// Calendar month, 1..=12.
pub type Month = u32;

/// Arrival hour of day, 14..=22.
pub type ArrivalHour = u32;

/// Months where elevated demand lengthens check-in queues.
pub const HIGH_SEASON_MONTHS: [Month; 4] = [6, 7, 8, 12];

pub fn is_high_season(month: Month) -> bool {
    HIGH_SEASON_MONTHS.contains(&month)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitType {
    #[serde(rename = "Studio")]
    Studio,
    #[serde(rename = "Two-room")]
    TwoRoom,
    #[serde(rename = "Three-room")]
    ThreeRoom,
    #[serde(rename = "Suite")]
    Suite,
}

impl UnitType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Studio    => "Studio",
            Self::TwoRoom   => "Two-room",
            Self::ThreeRoom => "Three-room",
            Self::Suite     => "Suite",
        }
    }

    /// Fixed staff cost per booking for this unit type.
    pub fn base_cost(&self) -> f64 {
        match self {
            Self::Studio    => 45.0,
            Self::TwoRoom   => 65.0,
            Self::ThreeRoom => 85.0,
            Self::Suite     => 120.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplaintReason {
    #[serde(rename = "Insufficient cleaning")]
    InsufficientCleaning,
    #[serde(rename = "Neighbor noise")]
    NeighborNoise,
    #[serde(rename = "Late check-in")]
    LateCheckIn,
    #[serde(rename = "Faulty equipment")]
    FaultyEquipment,
    #[serde(rename = "No complaint")]
    NoComplaint,
}

impl ComplaintReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsufficientCleaning => "Insufficient cleaning",
            Self::NeighborNoise        => "Neighbor noise",
            Self::LateCheckIn          => "Late check-in",
            Self::FaultyEquipment      => "Faulty equipment",
            Self::NoComplaint          => "No complaint",
        }
    }

    pub fn is_complaint(&self) -> bool {
        !matches!(self, Self::NoComplaint)
    }
}

/// One concierge booking. Built once by the generator, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    #[serde(rename = "id_reservation")]
    pub id: ReservationId,
    #[serde(rename = "date_arrivee")]
    pub arrival_date: NaiveDate,
    #[serde(rename = "mois")]
    pub month: Month,
    #[serde(rename = "heure_arrivee")]
    pub arrival_hour: ArrivalHour,
    #[serde(rename = "duree_sejour")]
    pub stay_length: u32,
    #[serde(rename = "type_logement")]
    pub unit_type: UnitType,
    #[serde(rename = "temps_attente_min")]
    pub wait_time: f64,
    #[serde(rename = "score_nps")]
    pub satisfaction_score: f64,
    #[serde(rename = "motif_reclamation")]
    pub complaint_reason: ComplaintReason,
    #[serde(rename = "cout_personnel")]
    pub staff_cost: f64,
    #[serde(rename = "cout_maintenance")]
    pub maintenance_cost: f64,
    #[serde(rename = "cout_reclamation")]
    pub complaint_cost: f64,
    #[serde(rename = "cout_total")]
    pub total_cost: f64,
    #[serde(rename = "haute_saison")]
    pub high_season: bool,
}

impl Reservation {
    /// Column names in serialization order, for tabular exporters.
    pub const COLUMNS: [&'static str; 14] = [
        "id_reservation",
        "date_arrivee",
        "mois",
        "heure_arrivee",
        "duree_sejour",
        "type_logement",
        "temps_attente_min",
        "score_nps",
        "motif_reclamation",
        "cout_personnel",
        "cout_maintenance",
        "cout_reclamation",
        "cout_total",
        "haute_saison",
    ];

    pub fn has_complaint(&self) -> bool {
        self.complaint_reason.is_complaint()
    }
}
