use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::ModelKind;
use crate::params::{
    BinaryChoiceParams, GazeParams, NestDirectParams, NestIndirectParams, NestTransferParams,
};

/// Which model(s) a run request covers.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModelSelection {
    BinaryChoice,
    NestTransfer,
    NestIndirect,
    NestDirect,
    Gaze,
    All,
}

impl ModelSelection {
    pub fn kinds(&self) -> Vec<ModelKind> {
        match self {
            ModelSelection::BinaryChoice => vec![ModelKind::BinaryChoice],
            ModelSelection::NestTransfer => vec![ModelKind::NestTransfer],
            ModelSelection::NestIndirect => vec![ModelKind::NestIndirect],
            ModelSelection::NestDirect => vec![ModelKind::NestDirect],
            ModelSelection::Gaze => vec![ModelKind::Gaze],
            ModelSelection::All => ModelKind::ALL.to_vec(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunSection {
    pub model: ModelSelection,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub base_filename: String,
    pub format: String, // "csv" or "json"
    pub save_series: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_filename: "results".to_string(),
            format: "csv".to_string(),
            save_series: true,
        }
    }
}

/// Run configuration loaded from TOML. Every model section is optional and
/// falls back to the documented defaults; within a section, any subset of
/// fields may be overridden.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunConfig {
    pub run: RunSection,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub binary_choice: BinaryChoiceParams,
    #[serde(default)]
    pub nest_transfer: NestTransferParams,
    #[serde(default)]
    pub nest_indirect: NestIndirectParams,
    #[serde(default)]
    pub nest_direct: NestDirectParams,
    #[serde(default)]
    pub gaze: GazeParams,
}

impl RunConfig {
    /// Loads and validates a run configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        let config: RunConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e))?;

        // Reject invalid parameters before any run starts, but only for the
        // sections the selection actually uses.
        for kind in config.run.model.kinds() {
            match kind {
                ModelKind::BinaryChoice => config.binary_choice.validate()?,
                ModelKind::NestTransfer => config.nest_transfer.validate()?,
                ModelKind::NestIndirect => config.nest_indirect.validate()?,
                ModelKind::NestDirect => config.nest_direct.validate()?,
                ModelKind::Gaze => config.gaze.validate()?,
            }
        }

        match config.output.format.as_str() {
            "csv" | "json" => {}
            other => anyhow::bail!("Unknown output format: '{}' (expected csv or json)", other),
        }

        Ok(config)
    }
}
