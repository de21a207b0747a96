//! Binary-choice activation model: two leaky accumulators with mutual
//! inhibition, each driven by a constant input plus per-step Gaussian noise.
//!
//!   y1' = I1 + n1 - l1*y1 - w2*y2
//!   y2' = I2 + n2 - l2*y2 - w1*y1

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::noise::BinaryChoiceNoise;
use crate::params::BinaryChoiceParams;
use crate::rk4::{integrate, ResultSeries};

pub fn run(params: &BinaryChoiceParams) -> Result<ResultSeries> {
    params.validate()?;
    let n = params.grid_len();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let noise = BinaryChoiceNoise::generate(&mut rng, params.std_dev, n)?;

    let p = params.clone();
    Ok(integrate(n, p.h, p.y1_0, p.y2_0, move |i, _, _| {
        let n1 = noise.i1[i];
        let n2 = noise.i2[i];
        let (i1, i2, l1, l2, w1, w2) = (p.i1, p.i2, p.l1, p.l2, p.w1, p.w2);
        move |y1: f64, y2: f64| {
            (
                i1 + n1 - l1 * y1 - w2 * y2,
                i2 + n2 - l2 * y2 - w1 * y1,
            )
        }
    }))
}
