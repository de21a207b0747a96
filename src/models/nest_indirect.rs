//! Indirect nest-choice model: no transfer between nests; each nest recruits
//! from the source pool at a rate proportional to the pool itself.
//!
//!   y1' = S*(q1+n_q1) + y1*S*(r1'+n_r1') - y1*(l1+n_l1)
//!   y2' = S*(q2+n_q2) + y2*S*(r2'+n_r2') - y2*(l2+n_l2)
//!
//! Multiplying the recruitment term by S makes it vanish on its own when the
//! source is exhausted, so no explicit gate is needed here.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::remaining_source_population;
use crate::noise::NestIndirectNoise;
use crate::params::NestIndirectParams;
use crate::rk4::{integrate, ResultSeries};

pub fn run(params: &NestIndirectParams) -> Result<ResultSeries> {
    params.validate()?;
    let n = params.grid_len();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let noise = NestIndirectNoise::generate(&mut rng, params.std_dev, n)?;

    let p = params.clone();
    Ok(integrate(n, p.h, p.y1_0, p.y2_0, move |i, y1_i, y2_i| {
        let s = remaining_source_population(p.population, y1_i, y2_i);
        let q1 = p.q1 + noise.q1[i];
        let q2 = p.q2 + noise.q2[i];
        let rp1 = p.r1_prime + noise.r1_prime[i];
        let rp2 = p.r2_prime + noise.r2_prime[i];
        let l1 = p.l1 + noise.l1[i];
        let l2 = p.l2 + noise.l2[i];
        move |y1: f64, y2: f64| {
            (
                s * q1 + y1 * s * rp1 - y1 * l1,
                s * q2 + y2 * s * rp2 - y2 * l2,
            )
        }
    }))
}
