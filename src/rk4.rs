//! Shared fourth-order Runge-Kutta driver.
//!
//! All five models advance through the same loop; they differ only in the
//! per-step derivative closure they hand to [`integrate`].

use serde::{Deserialize, Serialize};

/// The two series produced by one simulation run, sampled on the uniform
/// grid `t_i = i * h`. Once returned the series is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSeries {
    pub h: f64,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
}

impl ResultSeries {
    pub fn len(&self) -> usize {
        self.y1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y1.is_empty()
    }

    /// The time grid matching the sample indices.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| i as f64 * self.h)
    }
}

/// Integrates a two-variable first-order system over `n` samples with RK4.
///
/// `stage_fn(i, y1_i, y2_i)` is invoked once per step and returns the
/// derivative used for all four stage evaluations of that step. Anything the
/// model computes there — noise samples, the remaining source population,
/// gated recruitment rates, gaze inputs — is therefore frozen for the step.
/// The per-step freeze models per-timestep measurement jitter and is part of
/// the numerical contract, not an approximation to be refined.
pub fn integrate<F, G>(n: usize, h: f64, y1_0: f64, y2_0: f64, mut stage_fn: F) -> ResultSeries
where
    F: FnMut(usize, f64, f64) -> G,
    G: Fn(f64, f64) -> (f64, f64),
{
    let mut y1 = vec![0.0; n];
    let mut y2 = vec![0.0; n];
    if n == 0 {
        return ResultSeries { h, y1, y2 };
    }

    y1[0] = y1_0;
    y2[0] = y2_0;

    for i in 0..n - 1 {
        let f = stage_fn(i, y1[i], y2[i]);
        let (k1a, k1b) = f(y1[i], y2[i]);
        let (k2a, k2b) = f(y1[i] + k1a * h / 2.0, y2[i] + k1b * h / 2.0);
        let (k3a, k3b) = f(y1[i] + k2a * h / 2.0, y2[i] + k2b * h / 2.0);
        let (k4a, k4b) = f(y1[i] + k3a * h, y2[i] + k3b * h);
        y1[i + 1] = y1[i] + ((k1a + 2.0 * k2a + 2.0 * k3a + k4a) / 6.0) * h;
        y2[i + 1] = y2[i] + ((k1b + 2.0 * k2b + 2.0 * k3b + k4b) / 6.0) * h;
    }

    ResultSeries { h, y1, y2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_conditions_are_exact() {
        let s = integrate(10, 0.1, 1.5, -2.5, |_, _, _| |_y1: f64, _y2: f64| (0.0, 0.0));
        assert_eq!(s.y1[0], 1.5);
        assert_eq!(s.y2[0], -2.5);
        assert_eq!(s.len(), 10);
    }

    #[test]
    fn empty_and_single_sample_grids() {
        let s = integrate(0, 0.1, 1.0, 1.0, |_, _, _| |_y1: f64, _y2: f64| (0.0, 0.0));
        assert!(s.is_empty());

        let s = integrate(1, 0.1, 1.0, 2.0, |_, _, _| |_y1: f64, _y2: f64| (1.0, 1.0));
        assert_eq!(s.y1, vec![1.0]);
        assert_eq!(s.y2, vec![2.0]);
    }

    #[test]
    fn matches_exponential_decay() {
        // dy/dt = -y has the solution y0 * exp(-t); RK4 with h=0.1 is
        // accurate to well below 1e-6 over this horizon.
        let h = 0.1;
        let n = 101;
        let s = integrate(n, h, 1.0, 2.0, |_, _, _| |y1: f64, y2: f64| (-y1, -y2));
        for i in 0..n {
            let t = i as f64 * h;
            assert!((s.y1[i] - (-t).exp()).abs() < 1e-6);
            assert!((s.y2[i] - 2.0 * (-t).exp()).abs() < 1e-6);
        }
    }

    #[test]
    fn times_match_grid() {
        let s = integrate(4, 0.5, 0.0, 0.0, |_, _, _| |_y1: f64, _y2: f64| (0.0, 0.0));
        let ts: Vec<f64> = s.times().collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0, 1.5]);
    }
}
