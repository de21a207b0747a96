//! The five decision-making models.
//!
//! Each submodule exposes `run(&Params) -> Result<ResultSeries>`: validate
//! the parameters, seed an rng, fill the noise bank, integrate. The models
//! are pure — no state survives a run, and concurrent runs share nothing.

use serde::{Deserialize, Serialize};

pub mod binary_choice;
pub mod gaze;
pub mod nest_direct;
pub mod nest_indirect;
pub mod nest_transfer;

/// Identifies a model variant, e.g. for run dispatch from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    BinaryChoice,
    NestTransfer,
    NestIndirect,
    NestDirect,
    Gaze,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::BinaryChoice,
        ModelKind::NestTransfer,
        ModelKind::NestIndirect,
        ModelKind::NestDirect,
        ModelKind::Gaze,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::BinaryChoice => "binary-choice",
            ModelKind::NestTransfer => "nest-transfer",
            ModelKind::NestIndirect => "nest-indirect",
            ModelKind::NestDirect => "nest-direct",
            ModelKind::Gaze => "gaze",
        }
    }

    /// Whether the variant tracks a shared source population.
    pub fn has_population(&self) -> bool {
        matches!(
            self,
            ModelKind::NestTransfer | ModelKind::NestIndirect | ModelKind::NestDirect
        )
    }
}

/// The population not yet committed to either nest, clamped at zero.
///
/// This is the single definition of S used both inside the nest-choice
/// integrators and by exporters plotting the uncommitted pool; keeping one
/// function prevents the two call sites from drifting apart.
pub fn remaining_source_population(total: f64, y1: f64, y2: f64) -> f64 {
    let s = total - y1 - y2;
    if s <= 0.0 {
        0.0
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_population_clamps_at_zero() {
        assert_eq!(remaining_source_population(100.0, 30.0, 20.0), 50.0);
        assert_eq!(remaining_source_population(100.0, 60.0, 60.0), 0.0);
        assert_eq!(remaining_source_population(100.0, 50.0, 50.0), 0.0);
        assert_eq!(remaining_source_population(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn kind_names_round_trip_through_serde() {
        for kind in ModelKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: ModelKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
