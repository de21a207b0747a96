//! Direct nest-choice model: source recruitment as in the indirect model
//! plus a product transfer term between the nests, scaled by the difference
//! of the two direct switching rates. Whatever the term adds to nest 1 it
//! removes from nest 2.
//!
//! With D = (r1 - r2) + (n_r1 - n_r2) frozen per step:
//!
//!   y1' = S*(q1+n_q1) + y1*S*(r1'+n_r1') + y1*y2*D - y1*(l1+n_l1)
//!   y2' = S*(q2+n_q2) + y2*S*(r2'+n_r2') - y1*y2*D - y2*(l2+n_l2)

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::remaining_source_population;
use crate::noise::NestTransferNoise;
use crate::params::NestDirectParams;
use crate::rk4::{integrate, ResultSeries};

pub fn run(params: &NestDirectParams) -> Result<ResultSeries> {
    params.validate()?;
    let n = params.grid_len();
    let mut rng = StdRng::seed_from_u64(params.seed);
    // Same stream layout as the transfer model: q1, q2, r1, r2, r1', r2', l1, l2.
    let noise = NestTransferNoise::generate(&mut rng, params.std_dev, n)?;

    let p = params.clone();
    Ok(integrate(n, p.h, p.y1_0, p.y2_0, move |i, y1_i, y2_i| {
        let s = remaining_source_population(p.population, y1_i, y2_i);
        let q1 = p.q1 + noise.q1[i];
        let q2 = p.q2 + noise.q2[i];
        let rp1 = p.r1_prime + noise.r1_prime[i];
        let rp2 = p.r2_prime + noise.r2_prime[i];
        let diff = p.r1 - p.r2 + noise.r1[i] - noise.r2[i];
        let l1 = p.l1 + noise.l1[i];
        let l2 = p.l2 + noise.l2[i];
        move |y1: f64, y2: f64| {
            (
                s * q1 + y1 * s * rp1 + y1 * y2 * diff - y1 * l1,
                s * q2 + y2 * s * rp2 - y1 * y2 * diff - y2 * l2,
            )
        }
    }))
}
