//! concierge-runner: headless generator + analytics runner.
//!
//! Usage:
//!   concierge-runner --seed 42 --count 500 --out-dir ./out
//!   concierge-runner --config concierge.json --quiet

use anyhow::{Context, Result};
use concierge_core::{
    analytics::Report,
    config::ConciergeConfig,
    pipeline::{Pipeline, PipelineOutput},
    types::Reservation,
};
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const CSV_FILE: &str = "reservations.csv";
const JSON_FILE: &str = "analyses.json";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "--quiet");
    let out_dir = flag_value(&args, "--out-dir").unwrap_or(".");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => ConciergeConfig::load(path)?,
        None => ConciergeConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.record_count = parse_arg(&args, "--count", config.record_count);

    if !quiet {
        println!("{}", "=".repeat(60));
        println!("  Concierge analytics runner");
        println!("{}", "=".repeat(60));
        println!("  seed:      {}", config.seed);
        println!("  count:     {}", config.record_count);
        println!("  out_dir:   {out_dir}");
        println!();
    }

    let output = Pipeline::new(config)?.run()?;

    fs::create_dir_all(out_dir).with_context(|| format!("Cannot create {out_dir}"))?;
    let csv_path = Path::new(out_dir).join(CSV_FILE);
    let json_path = Path::new(out_dir).join(JSON_FILE);
    write_reservations_csv(&csv_path, &output.reservations)?;
    write_report_json(&json_path, &output.report)?;
    log::info!("wrote {} and {}", csv_path.display(), json_path.display());

    if !quiet {
        println!("[ok] dataset:  {}", csv_path.display());
        println!("[ok] analyses: {}", json_path.display());
        print_summary(&output);
    }

    Ok(())
}

fn write_reservations_csv(path: &Path, reservations: &[Reservation]) -> Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
    );
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::Writer::from_writer(file);
    for r in reservations {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_report_json(path: &Path, report: &Report) -> Result<()> {
    let file = BufWriter::new(
        File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
    );
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

fn print_summary(output: &PipelineOutput) {
    let kpis = &output.report.kpis;
    println!();
    println!("=== KEY METRICS ===");
    println!("  reservations:      {}", kpis.total_reservations);
    println!("  mean satisfaction: {}/10", fmt_opt(kpis.mean_satisfaction));
    println!("  mean cost:         {} EUR", fmt_opt(kpis.mean_cost));
    println!("  mean wait:         {} min", fmt_opt(kpis.mean_wait));
    println!("  complaint rate:    {}%", fmt_opt(kpis.complaint_rate));
    println!("  wait/satisfaction: {}", fmt_opt(kpis.wait_satisfaction_correlation));

    let report = &output.report;
    println!();
    println!("=== SATISFACTION BY UNIT TYPE ===");
    for (unit, score) in &report.satisfaction_by_unit {
        println!("  {:<22} {score:.2}", unit.label());
    }

    println!();
    println!("=== COMPLAINTS ===");
    for (reason, count) in &report.complaint_counts {
        println!("  {:<22} {count}", reason.label());
    }

    println!();
    println!("=== WAIT BY ARRIVAL HOUR ===");
    for (bucket, wait) in &report.wait_by_hour {
        println!("  {:<22} {wait:.1} min", bucket.label());
    }

    let savings = &report.savings;
    println!();
    println!("=== COST REDUCTION TARGET (-10%) ===");
    println!("  current cost: {:.2} EUR", savings.current);
    println!("  target cost:  {:.2} EUR", savings.target);
    println!("  savings:      {:.2} EUR", savings.gain);
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
