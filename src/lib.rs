pub mod config;
pub mod models;
pub mod noise;
pub mod params;
pub mod rk4;

// Re-export key types for easier use by dependent crates
pub use config::{ModelSelection, OutputConfig, RunConfig};
pub use models::{remaining_source_population, ModelKind};
pub use params::{
    BinaryChoiceParams, GazeParams, NestDirectParams, NestIndirectParams, NestTransferParams,
};
pub use rk4::{integrate, ResultSeries};

use anyhow::Result;

/// Runs the model `kind` with the parameters from `config`. Each invocation
/// seeds its own rng and owns its own arrays, so runs may safely execute in
/// parallel.
pub fn run_model(kind: ModelKind, config: &RunConfig) -> Result<ResultSeries> {
    match kind {
        ModelKind::BinaryChoice => models::binary_choice::run(&config.binary_choice),
        ModelKind::NestTransfer => models::nest_transfer::run(&config.nest_transfer),
        ModelKind::NestIndirect => models::nest_indirect::run(&config.nest_indirect),
        ModelKind::NestDirect => models::nest_direct::run(&config.nest_direct),
        ModelKind::Gaze => models::gaze::run(&config.gaze),
    }
}
