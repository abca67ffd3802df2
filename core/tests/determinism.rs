//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two generators, same seed, same record count.
//! They must produce field-for-field identical datasets and reports.
//! Any divergence is a blocker — do not merge until fixed.

use concierge_core::{
    analytics::{analyze, Kpis, Savings},
    config::ConciergeConfig,
    generator::DatasetGenerator,
    pipeline::Pipeline,
    rng::SimRng,
    types::Reservation,
};

fn generate(seed: u64, n: i64) -> Vec<Reservation> {
    let generator =
        DatasetGenerator::from_config(&ConciergeConfig::default()).expect("default config");
    let mut rng = SimRng::new(seed);
    generator.generate(n, &mut rng).expect("generate")
}

#[test]
fn same_seed_produces_identical_datasets() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let a = generate(SEED, 500);
    let b = generate(SEED, 500);

    assert_eq!(a.len(), b.len(), "Dataset lengths differ: {} vs {}", a.len(), b.len());
    for (i, (ra, rb)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(ra, rb, "Dataset diverged at record {i}:\n  A: {ra:?}\n  B: {rb:?}");
    }
}

#[test]
fn same_input_produces_identical_reports() {
    let records = generate(42, 300);
    let report_a = analyze(&records);
    let report_b = analyze(&records);
    assert_eq!(report_a, report_b);

    let json_a = serde_json::to_string(&report_a).unwrap();
    let json_b = serde_json::to_string(&report_b).unwrap();
    assert_eq!(json_a, json_b, "Serialized reports differ");
}

#[test]
fn different_seeds_produce_different_datasets() {
    let a = generate(42, 100);
    let b = generate(99, 100);

    let any_different = a.iter().zip(b.iter()).any(|(ra, rb)| ra != rb);
    assert!(any_different, "Different seeds produced identical datasets — seed is not being used");
}

/// Pinned KPI snapshot for the default run (seed 42, 500 reservations).
///
/// These literals were captured once from a real run. Any change to the
/// column draw order, the distributions, or the rounding moves them; if
/// that change is intended, recapture and update them here.
#[test]
fn default_run_matches_pinned_kpi_snapshot() {
    let output = Pipeline::new(ConciergeConfig::default()).unwrap().run().unwrap();

    let expected_kpis = Kpis {
        total_reservations: 500,
        mean_satisfaction: Some(6.14),
        mean_cost: Some(109.3),
        mean_wait: Some(13.84),
        complaint_rate: Some(60.2),
        wait_satisfaction_correlation: Some(-0.202),
    };
    assert_eq!(output.report.kpis, expected_kpis, "KPI snapshot drifted");

    let expected_savings = Savings {
        current: 54647.93,
        target: 49183.14,
        gain: 5464.79,
    };
    assert_eq!(output.report.savings, expected_savings, "Savings snapshot drifted");
}

#[test]
fn batch_draws_match_scalar_draws() {
    let mut batch = SimRng::new(7);
    let mut scalar = SimRng::new(7);

    let xs = batch.uniform_n(16, 5.0, 20.0);
    let ys: Vec<f64> = (0..16).map(|_| scalar.uniform(5.0, 20.0)).collect();
    assert_eq!(xs, ys);

    let xs = batch.exponential_n(16, 8.0).unwrap();
    let ys: Vec<f64> = (0..16).map(|_| scalar.exponential(8.0).unwrap()).collect();
    assert_eq!(xs, ys);

    let xs = batch.normal_n(16, 7.5, 1.2).unwrap();
    let ys: Vec<f64> = (0..16).map(|_| scalar.normal(7.5, 1.2).unwrap()).collect();
    assert_eq!(xs, ys);
}
