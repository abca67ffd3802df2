//! The pipeline — generate once, analyse once.
//!
//! EXECUTION ORDER (fixed):
//!   1. Validate configuration (fail fast, nothing drawn yet)
//!   2. Seed a single SimRng from config.seed
//!   3. Generate config.record_count reservations
//!   4. Analyse the reservations into a Report
//!
//! RULES:
//!   - All randomness flows through the one SimRng built here.
//!   - Stage 4 only reads what stage 3 produced.
//!   - Both outputs are handed back whole; nothing is written to disk.

use crate::{
    analytics::{analyze, Report},
    config::ConciergeConfig,
    error::ConciergeResult,
    generator::DatasetGenerator,
    rng::SimRng,
    types::Reservation,
};

/// The two immutable outputs of one run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub seed: u64,
    pub reservations: Vec<Reservation>,
    pub report: Report,
}

pub struct Pipeline {
    config: ConciergeConfig,
    generator: DatasetGenerator,
}

impl Pipeline {
    pub fn new(config: ConciergeConfig) -> ConciergeResult<Self> {
        config.validate()?;
        let generator = DatasetGenerator::from_config(&config)?;
        Ok(Self { config, generator })
    }

    pub fn run(&self) -> ConciergeResult<PipelineOutput> {
        log::info!(
            "pipeline: seed={} record_count={}",
            self.config.seed,
            self.config.record_count
        );

        let mut rng = SimRng::new(self.config.seed).with_name("reservations");
        let reservations = self.generator.generate(self.config.record_count, &mut rng)?;
        let report = analyze(&reservations);

        let kpis = &report.kpis;
        log::info!(
            "pipeline: {} reservations, mean_cost={:?} mean_wait={:?} complaint_rate={:?}",
            kpis.total_reservations,
            kpis.mean_cost,
            kpis.mean_wait,
            kpis.complaint_rate,
        );

        Ok(PipelineOutput {
            seed: self.config.seed,
            reservations,
            report,
        })
    }
}
