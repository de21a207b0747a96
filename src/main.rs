use anyhow::Result;
use log::{debug, info};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use decision_engine::{remaining_source_population, ModelKind, ResultSeries, RunConfig};

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    info!("Starting decision-model simulation engine...");

    // --- Load Configuration ---
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = RunConfig::load(&config_path)?;
    debug!("Run configuration: {:#?}", config);

    let kinds = config.run.model.kinds();
    info!(
        "Running {} model(s): {}",
        kinds.len(),
        kinds.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    );

    // --- Run Simulations ---
    // Each run seeds its own rng and owns its own arrays, so the variants
    // can execute in parallel without sharing anything.
    let start_time = Instant::now();
    let results: Vec<(ModelKind, ResultSeries)> = kinds
        .par_iter()
        .map(|&kind| decision_engine::run_model(kind, &config).map(|series| (kind, series)))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "All runs finished in {:.3} ms.",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    // --- Report & Export ---
    for (kind, series) in &results {
        if series.is_empty() {
            info!("{}: empty grid, nothing to report.", kind.name());
            continue;
        }
        let last = series.len() - 1;
        if let Some(population) = population_for(*kind, &config) {
            info!(
                "{}: {} samples | final y1 = {:.4}, y2 = {:.4}, source = {:.4}",
                kind.name(),
                series.len(),
                series.y1[last],
                series.y2[last],
                remaining_source_population(population, series.y1[last], series.y2[last])
            );
        } else {
            info!(
                "{}: {} samples | final y1 = {:.4}, y2 = {:.4}",
                kind.name(),
                series.len(),
                series.y1[last],
                series.y2[last]
            );
        }

        if config.output.save_series {
            export_series(*kind, series, &config)?;
        }
    }

    if !config.output.save_series {
        info!("Skipping series export as per config (save_series is false).");
    }

    info!("Simulation Complete.");
    Ok(())
}

/// Total population for the nest-choice variants; activation models have none.
fn population_for(kind: ModelKind, config: &RunConfig) -> Option<f64> {
    match kind {
        ModelKind::NestTransfer => Some(config.nest_transfer.population),
        ModelKind::NestIndirect => Some(config.nest_indirect.population),
        ModelKind::NestDirect => Some(config.nest_direct.population),
        ModelKind::BinaryChoice | ModelKind::Gaze => None,
    }
}

/// Writes one run's series for an external charting tool, as CSV or JSON.
/// Nest-choice variants get an extra column for the uncommitted source pool.
fn export_series(kind: ModelKind, series: &ResultSeries, config: &RunConfig) -> Result<()> {
    let population = population_for(kind, config);
    match config.output.format.as_str() {
        "csv" => {
            let filename = format!("{}_{}.csv", config.output.base_filename, kind.name());
            let mut writer = csv::Writer::from_path(&filename)?;
            if population.is_some() {
                writer.write_record(["t", "y1", "y2", "source"])?;
            } else {
                writer.write_record(["t", "y1", "y2"])?;
            }
            for (i, t) in series.times().enumerate() {
                match population {
                    Some(total) => writer.write_record(&[
                        format!("{:.6}", t),
                        format!("{:.9}", series.y1[i]),
                        format!("{:.9}", series.y2[i]),
                        format!(
                            "{:.9}",
                            remaining_source_population(total, series.y1[i], series.y2[i])
                        ),
                    ])?,
                    None => writer.write_record(&[
                        format!("{:.6}", t),
                        format!("{:.9}", series.y1[i]),
                        format!("{:.9}", series.y2[i]),
                    ])?,
                }
            }
            writer.flush()?;
            info!("{} series saved to {}", kind.name(), filename);
        }
        "json" => {
            let filename = format!("{}_{}.json", config.output.base_filename, kind.name());
            let mut file = File::create(&filename)?;
            let json = serde_json::to_string(series)?;
            file.write_all(json.as_bytes())?;
            info!("{} series saved to {}", kind.name(), filename);
        }
        // RunConfig::load only admits csv and json.
        other => anyhow::bail!("Unknown output format: '{}'", other),
    }
    Ok(())
}
