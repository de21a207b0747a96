use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Parameters for the binary-choice activation model: two leaky accumulators
/// with mutual inhibition, driven by constant inputs plus per-step Gaussian
/// noise on each input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryChoiceParams {
    pub h: f64,       // step size
    pub d: f64,       // duration
    pub y1_0: f64,    // y1 initial condition
    pub y2_0: f64,    // y2 initial condition
    pub i1: f64,      // input signal to y1
    pub i2: f64,      // input signal to y2
    pub w1: f64,      // inhibition weight from y1 to y2
    pub w2: f64,      // inhibition weight from y2 to y1
    pub l1: f64,      // leak (decay) term for y1
    pub l2: f64,      // leak (decay) term for y2
    pub std_dev: f64, // standard deviation for input noise
    pub seed: u64,    // noise seed
}

impl Default for BinaryChoiceParams {
    fn default() -> Self {
        Self {
            h: 0.2,
            d: 10.0,
            y1_0: 0.0,
            y2_0: 0.0,
            i1: 0.4,
            i2: 0.4,
            w1: 0.5,
            w2: 0.5,
            l1: 0.2,
            l2: 0.2,
            std_dev: 0.1,
            seed: 3,
        }
    }
}

impl BinaryChoiceParams {
    /// Number of time samples including t=0.
    pub fn grid_len(&self) -> usize {
        (self.d / self.h).ceil() as usize
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.h, self.d)?;
        validate_std_dev(self.std_dev)
    }
}

/// Parameters for the nest-choice transfer model: direct ant-to-ant transfer
/// between two nests plus recruitment from an unconverted source pool, with
/// leakage back to the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NestTransferParams {
    pub h: f64,          // step size
    pub d: f64,          // duration
    pub population: f64, // total population
    pub y1_0: f64,       // nest 1 initial size
    pub y2_0: f64,       // nest 2 initial size
    pub q1: f64,         // quality of nest 1
    pub q2: f64,         // quality of nest 2
    pub r1: f64,         // rate of directly switching from nest 1 to nest 2
    pub r2: f64,         // rate of directly switching from nest 2 to nest 1
    pub r1_prime: f64,   // rate of recruitment from the source to nest 1
    pub r2_prime: f64,   // rate of recruitment from the source to nest 2
    pub l1: f64,         // rate of leaking from nest 1 back to the source
    pub l2: f64,         // rate of leaking from nest 2 back to the source
    pub std_dev: f64,    // standard deviation for rate noise
    pub seed: u64,       // noise seed
}

impl Default for NestTransferParams {
    fn default() -> Self {
        Self {
            h: 0.05,
            d: 10.0,
            population: 100.0,
            y1_0: 0.0,
            y2_0: 0.0,
            q1: 0.4,
            q2: 0.4,
            r1: 0.3,
            r2: 0.3,
            r1_prime: 0.1,
            r2_prime: 0.1,
            l1: 0.2,
            l2: 0.2,
            std_dev: 0.05,
            seed: 3,
        }
    }
}

impl NestTransferParams {
    /// Number of time samples including t=0. This variant truncates rather
    /// than rounding up; the two differ when d/h is not exactly
    /// representable (10/0.05 lands just below 200 and truncates to 199).
    pub fn grid_len(&self) -> usize {
        (self.d / self.h) as usize
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.h, self.d)?;
        validate_population(self.population)?;
        validate_std_dev(self.std_dev)
    }
}

/// Parameters for the indirect nest-choice model: recruitment into each nest
/// is proportional to the source pool itself, with no inter-nest transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NestIndirectParams {
    pub h: f64,
    pub d: f64,
    pub population: f64,
    pub y1_0: f64,
    pub y2_0: f64,
    pub q1: f64,
    pub q2: f64,
    pub r1_prime: f64,
    pub r2_prime: f64,
    pub l1: f64,
    pub l2: f64,
    pub std_dev: f64,
    pub seed: u64,
}

impl Default for NestIndirectParams {
    fn default() -> Self {
        Self {
            h: 0.05,
            d: 10.0,
            population: 100.0,
            y1_0: 0.0,
            y2_0: 0.0,
            q1: 0.4,
            q2: 0.4,
            r1_prime: 0.1,
            r2_prime: 0.1,
            l1: 0.2,
            l2: 0.2,
            std_dev: 0.05,
            seed: 3,
        }
    }
}

impl NestIndirectParams {
    /// Number of time samples including t=0.
    pub fn grid_len(&self) -> usize {
        (self.d / self.h).ceil() as usize
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.h, self.d)?;
        validate_population(self.population)?;
        validate_std_dev(self.std_dev)
    }
}

/// Parameters for the direct nest-choice model: like the indirect model but
/// with a product transfer term scaled by the difference of the two direct
/// switching rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NestDirectParams {
    pub h: f64,
    pub d: f64,
    pub population: f64,
    pub y1_0: f64,
    pub y2_0: f64,
    pub q1: f64,
    pub q2: f64,
    pub r1: f64,
    pub r2: f64,
    pub r1_prime: f64,
    pub r2_prime: f64,
    pub l1: f64,
    pub l2: f64,
    pub std_dev: f64,
    pub seed: u64,
}

impl Default for NestDirectParams {
    fn default() -> Self {
        Self {
            h: 0.05,
            d: 10.0,
            population: 100.0,
            y1_0: 0.0,
            y2_0: 0.0,
            q1: 0.4,
            q2: 0.4,
            r1: 0.2,
            r2: 0.2,
            r1_prime: 0.1,
            r2_prime: 0.1,
            l1: 0.2,
            l2: 0.2,
            std_dev: 0.05,
            seed: 3,
        }
    }
}

impl NestDirectParams {
    /// Number of time samples including t=0. Truncating, like the transfer
    /// variant.
    pub fn grid_len(&self) -> usize {
        (self.d / self.h) as usize
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.h, self.d)?;
        validate_population(self.population)?;
        validate_std_dev(self.std_dev)
    }
}

/// Parameters for the gaze-biased activation model: the binary-choice form
/// plus a gaze input active only during [gaze_start, gaze_end]. The gaze
/// location jitters with its own noise distribution each active step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeParams {
    pub h: f64,
    pub d: f64,
    pub y1_0: f64,
    pub y2_0: f64,
    pub i1: f64,         // input to y1
    pub i2: f64,         // input to y2
    pub g: f64,          // maximum gaze input
    pub gaze_start: f64, // start time for the gaze window
    pub gaze_end: f64,   // end time for the gaze window
    pub a: f64,          // distance at which gaze activation falls to zero
    pub l1: f64,
    pub l2: f64,
    pub w1: f64,
    pub w2: f64,
    pub t1: f64,         // location of target 1
    pub t2: f64,         // location of target 2
    pub tg: f64,         // location of the gaze
    pub n_std_dev: f64,  // standard deviation for per-term noise
    pub g_std_dev: f64,  // standard deviation for gaze jitter
    pub seed: u64,
}

impl Default for GazeParams {
    fn default() -> Self {
        Self {
            h: 0.2,
            d: 30.0,
            y1_0: 0.0,
            y2_0: 0.0,
            i1: 0.05,
            i2: 0.05,
            g: 0.0,
            gaze_start: 0.0,
            gaze_end: 0.0,
            a: 5.0,
            l1: 0.2,
            l2: 0.2,
            w1: 0.3,
            w2: 0.3,
            t1: 45.0,
            t2: 135.0,
            tg: 45.0,
            n_std_dev: 0.1,
            g_std_dev: 0.1,
            seed: 32,
        }
    }
}

impl GazeParams {
    /// Number of time samples including t=0.
    pub fn grid_len(&self) -> usize {
        (self.d / self.h).ceil() as usize
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.h, self.d)?;
        validate_std_dev(self.n_std_dev)?;
        validate_std_dev(self.g_std_dev)
    }
}

fn validate_grid(h: f64, d: f64) -> Result<()> {
    if !(h > 0.0) {
        anyhow::bail!("step size must be positive, got {}", h);
    }
    if !(d > 0.0) {
        anyhow::bail!("duration must be positive, got {}", d);
    }
    Ok(())
}

fn validate_std_dev(std_dev: f64) -> Result<()> {
    if std_dev < 0.0 {
        anyhow::bail!("noise standard deviation must be non-negative, got {}", std_dev);
    }
    Ok(())
}

fn validate_population(population: f64) -> Result<()> {
    if population < 0.0 {
        anyhow::bail!("population must be non-negative, got {}", population);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_lengths() {
        // 10/0.2 sits just below 50 in binary floating point; ceil recovers 50.
        assert_eq!(BinaryChoiceParams::default().grid_len(), 50);
        assert_eq!(GazeParams::default().grid_len(), 150);
        // The truncating variants agree with (d/h) as usize by definition.
        let p = NestTransferParams::default();
        assert_eq!(p.grid_len(), (p.d / p.h) as usize);
    }

    #[test]
    fn grid_rules_differ_on_inexact_ratios() {
        let mut a = NestTransferParams::default();
        a.h = 0.25; // exactly representable: both rules give 40
        assert_eq!(a.grid_len(), 40);
        let mut b = NestIndirectParams::default();
        b.h = 0.25;
        assert_eq!(b.grid_len(), 40);
    }

    #[test]
    fn rejects_bad_grid_and_noise() {
        let mut p = BinaryChoiceParams::default();
        p.h = 0.0;
        assert!(p.validate().is_err());

        let mut p = BinaryChoiceParams::default();
        p.d = -1.0;
        assert!(p.validate().is_err());

        let mut p = NestTransferParams::default();
        p.std_dev = -0.1;
        assert!(p.validate().is_err());

        let mut p = GazeParams::default();
        p.g_std_dev = -0.5;
        assert!(p.validate().is_err());
    }
}
