//! Concierge analytics core: a seeded synthetic booking generator and the
//! analytics engine that turns its output into an operating-cost report.

pub mod analytics;
pub mod buckets;
pub mod config;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod rng;
pub mod stats;
pub mod tables;
pub mod types;
