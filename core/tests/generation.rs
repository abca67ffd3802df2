//! Dataset generation tests — record invariants and derived fields.

use concierge_core::{
    config::ConciergeConfig,
    error::ConciergeError,
    generator::{
        late_arrival_eligible, satisfaction_score, wait_time_minutes, DatasetGenerator,
        COMPLAINT_HANDLING_COST,
    },
    rng::SimRng,
    types::{is_high_season, ComplaintReason, Reservation},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn generate(seed: u64, n: i64) -> Vec<Reservation> {
    let generator = DatasetGenerator::from_config(&ConciergeConfig::default()).unwrap();
    generator.generate(n, &mut SimRng::new(seed)).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn generates_exact_count_with_sequential_ids() {
    for n in [1, 2, 17, 500] {
        let records = generate(42, n);
        assert_eq!(records.len(), n as usize, "Expected {n} reservations");
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1, "Id out of order at position {i}");
        }
    }
}

#[test]
fn every_record_satisfies_field_invariants() {
    let records = generate(123, 2_000);

    for r in &records {
        assert!((0.0..=90.0).contains(&r.wait_time), "wait {} out of range", r.wait_time);
        assert!(
            (1.0..=10.0).contains(&r.satisfaction_score),
            "satisfaction {} out of range",
            r.satisfaction_score
        );
        assert!(r.staff_cost >= 0.0 && r.maintenance_cost >= 0.0);
        assert!(r.complaint_cost >= 0.0 && r.total_cost >= 0.0);
        assert_eq!(r.high_season, is_high_season(r.month));
        assert_eq!(r.month, chrono::Datelike::month(&r.arrival_date));
        assert!((14..=22).contains(&r.arrival_hour), "hour {}", r.arrival_hour);
        assert!([1, 2, 3, 4, 5, 7, 10, 14].contains(&r.stay_length));

        let expected_complaint = if r.complaint_reason != ComplaintReason::NoComplaint {
            COMPLAINT_HANDLING_COST
        } else {
            0.0
        };
        assert_eq!(r.complaint_cost, expected_complaint);

        let parts = r.staff_cost + r.maintenance_cost + r.complaint_cost;
        assert!(
            (r.total_cost - parts).abs() <= 0.01 + 1e-9,
            "total {} vs parts {parts} for id {}",
            r.total_cost,
            r.id
        );
    }
}

#[test]
fn arrival_dates_stay_inside_window() {
    let config = ConciergeConfig::default();
    let records = generate(9, 1_000);
    let last = config.epoch + chrono::Days::new(363);
    for r in &records {
        assert!(r.arrival_date >= config.epoch && r.arrival_date <= last, "{}", r.arrival_date);
    }
}

#[test]
fn long_stays_carry_maintenance_surcharge() {
    let records = generate(5, 2_000);
    for r in &records {
        if r.stay_length > 5 {
            assert!(r.maintenance_cost >= 25.0, "long stay maintenance {}", r.maintenance_cost);
        } else {
            assert!(r.maintenance_cost <= 40.0, "short stay maintenance {}", r.maintenance_cost);
        }
    }
}

/// July is high season, March never is.
#[test]
fn high_season_flag_follows_month() {
    let records = generate(77, 3_000);

    let july: Vec<_> = records.iter().filter(|r| r.month == 7).collect();
    let march: Vec<_> = records.iter().filter(|r| r.month == 3).collect();
    assert!(!july.is_empty() && !march.is_empty(), "Need July and March records");

    assert!(july.iter().all(|r| r.high_season), "July record without high season");
    assert!(march.iter().all(|r| !r.high_season), "March record flagged high season");
}

#[test]
fn late_arrival_bonus_starts_after_hour_19() {
    assert!(!late_arrival_eligible(19));
    assert!(late_arrival_eligible(20));

    // Hour 19 gets exactly the base wait; hour 20 gets base + late surcharge.
    assert_eq!(wait_time_minutes(6.0, false, 10.0, 19, 12.0), 6.0);
    assert_eq!(wait_time_minutes(6.0, false, 10.0, 20, 12.0), 18.0);
    assert_eq!(wait_time_minutes(6.0, true, 10.0, 20, 12.0), 28.0);
}

#[test]
fn wait_and_satisfaction_clip_only_the_sum() {
    assert_eq!(wait_time_minutes(85.0, true, 19.0, 22, 14.0), 90.0);
    assert_eq!(wait_time_minutes(0.04, false, 5.0, 14, 3.0), 0.0);

    assert_eq!(satisfaction_score(12.0, 0.0, 2.0, ComplaintReason::NoComplaint), 10.0);
    assert_eq!(satisfaction_score(2.0, 90.0, 3.0, ComplaintReason::LateCheckIn), 1.0);
    // 8.0 - (45 / 90) * 2.0 - 1.5 = 5.5
    assert_eq!(satisfaction_score(8.0, 45.0, 2.0, ComplaintReason::NeighborNoise), 5.5);
}

#[test]
fn late_arrivals_wait_longer_on_average() {
    let records = generate(2024, 5_000);
    let avg = |pred: &dyn Fn(&Reservation) -> bool| {
        let waits: Vec<f64> = records.iter().filter(|r| pred(r)).map(|r| r.wait_time).collect();
        waits.iter().sum::<f64>() / waits.len() as f64
    };
    let early = avg(&|r: &Reservation| r.arrival_hour <= 19 && !r.high_season);
    let late = avg(&|r: &Reservation| r.arrival_hour > 19 && !r.high_season);
    assert!(late > early + 3.0, "late {late:.2} should exceed early {early:.2}");
}

#[test]
fn non_positive_count_is_rejected() {
    let generator = DatasetGenerator::from_config(&ConciergeConfig::default()).unwrap();
    for n in [0, -5] {
        let err = generator.generate(n, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, ConciergeError::InvalidRecordCount { count } if count == n));
        assert!(err.is_configuration());
    }
}
