//! Gaze-biased activation model: the binary-choice form with an extra gaze
//! input active only inside a configured time window. While the window is
//! open, each target's gaze input falls off linearly with the distance
//! between the (jittered) gaze location and the target, clamped at zero:
//!
//!   g_k = max(0, g * (1 - dist_k / a))
//!
//! The jitter is drawn one sample per active step from its own distribution,
//! continuing the same rng stream that filled the noise bank; outside the
//! window nothing is drawn and both gaze inputs are zero.

use anyhow::{anyhow, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::noise::GazeNoise;
use crate::params::GazeParams;
use crate::rk4::{integrate, ResultSeries};

/// Linear fall-off of the gaze input with distance from one target. The
/// jitter offset shifts the gaze along the axis toward the target, so its
/// sign flips with the side the gaze sits on.
fn gaze_input(g: f64, a: f64, tg: f64, target: f64, offset: f64) -> f64 {
    let raw = if tg >= target {
        g * (-(tg - target + offset) / a + 1.0)
    } else {
        g * (-(target - tg - offset) / a + 1.0)
    };
    if raw < 0.0 {
        0.0
    } else {
        raw
    }
}

pub fn run(params: &GazeParams) -> Result<ResultSeries> {
    params.validate()?;
    let n = params.grid_len();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let noise = GazeNoise::generate(&mut rng, params.n_std_dev, n)?;
    let jitter = Normal::new(0.0, params.g_std_dev)
        .map_err(|e| anyhow!("invalid gaze jitter distribution (std dev {}): {}", params.g_std_dev, e))?;

    // A window that ends before it starts never opens.
    let window_open = params.gaze_start < params.gaze_end;
    let gs = (params.gaze_start / params.h).floor() as i64;
    let ge = (params.gaze_end / params.h).floor() as i64;

    let p = params.clone();
    Ok(integrate(n, p.h, p.y1_0, p.y2_0, move |i, _, _| {
        let (g1, g2) = if window_open && (i as i64) >= gs && (i as i64) <= ge {
            // One jitter sample per active step, shared by both targets and
            // all four stage evaluations.
            let offset = rng.sample(jitter);
            (
                gaze_input(p.g, p.a, p.tg, p.t1, offset),
                gaze_input(p.g, p.a, p.tg, p.t2, offset),
            )
        } else {
            (0.0, 0.0)
        };

        let in1 = p.i1 + noise.i1[i];
        let in2 = p.i2 + noise.i2[i];
        let gn1 = g1 + noise.g1[i];
        let gn2 = g2 + noise.g2[i];
        let (l1, l2, w1, w2) = (p.l1, p.l2, p.w1, p.w2);
        move |y1: f64, y2: f64| {
            (
                in1 + gn1 - l1 * y1 - w2 * y2,
                in2 + gn2 - l2 * y2 - w1 * y1,
            )
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_150_samples_with_exact_initial_conditions() {
        let params = GazeParams::default();
        let s = run(&params).unwrap();
        assert_eq!(s.len(), 150);
        assert_eq!(s.y1[0], params.y1_0);
        assert_eq!(s.y2[0], params.y2_0);
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let mut params = GazeParams::default();
        params.g = 1.0;
        params.gaze_start = 5.0;
        params.gaze_end = 15.0;
        let a = run(&params).unwrap();
        let b = run(&params).unwrap();
        assert_eq!(a.y1, b.y1);
        assert_eq!(a.y2, b.y2);
    }

    #[test]
    fn inverted_window_contributes_nothing() {
        // gaze_start >= gaze_end means no activation window: no gaze input
        // and no jitter draws, so the run must match one with g = 0.
        let mut inverted = GazeParams::default();
        inverted.g = 1.0;
        inverted.gaze_start = 10.0;
        inverted.gaze_end = 5.0;

        let mut unbiased = inverted.clone();
        unbiased.g = 0.0;
        unbiased.gaze_start = 0.0;
        unbiased.gaze_end = 0.0;

        let a = run(&inverted).unwrap();
        let b = run(&unbiased).unwrap();
        assert_eq!(a.y1, b.y1);
        assert_eq!(a.y2, b.y2);
    }

    #[test]
    fn gaze_on_target_yields_full_input() {
        // Gaze resting exactly on the target with no jitter gives g itself;
        // a target further than the fall-off distance gives zero.
        assert_eq!(gaze_input(2.0, 5.0, 45.0, 45.0, 0.0), 2.0);
        assert_eq!(gaze_input(2.0, 5.0, 45.0, 135.0, 0.0), 0.0);
        // Halfway across the fall-off distance gives half the input.
        let half = gaze_input(2.0, 5.0, 45.0, 47.5, 0.0);
        assert!((half - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gaze_bias_favors_the_nearer_target() {
        let mut params = GazeParams::default();
        params.g = 1.0;
        params.gaze_start = 5.0;
        params.gaze_end = 25.0;
        params.n_std_dev = 0.0;
        params.g_std_dev = 0.0;
        // tg defaults to t1, so target 1 receives the full gaze input while
        // target 2 (90 degrees away, beyond the fall-off) receives none.
        let s = run(&params).unwrap();
        let last = s.len() - 1;
        assert!(s.y1[last] > s.y2[last]);
    }
}
