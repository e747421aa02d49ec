// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Convergence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Running means of per-trajectory counts.

use ndarray::{Array2, ArrayView2, Axis};
use serde::Serialize;

/// Row `k` is the mean of rows `0..=k` of `counts`.
pub fn running_mean(counts: ArrayView2<'_, u64>) -> Array2<f64> {
    let (n, m) = counts.dim();
    let mut out = Array2::zeros((n, m));
    let mut sum = vec![0u64; m];
    for (k, (row, mut out_row)) in counts
        .axis_iter(Axis(0))
        .zip(out.axis_iter_mut(Axis(0)))
        .enumerate()
    {
        let denom = (k + 1) as f64;
        for ((acc, &c), o) in sum.iter_mut().zip(row.iter()).zip(out_row.iter_mut()) {
            *acc += c;
            *o = *acc as f64 / denom;
        }
    }
    out
}

/// Whether a channel's running mean settled within a relative band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelConvergence {
    pub final_mean: f64,
    /// Largest |mean_k / final - 1| over the inspected window.
    pub max_relative_deviation: f64,
    pub converged: bool,
}

/// For every channel, inspect the last `window` running means against the
/// final mean with tolerance `band` (0.02 = ±2 %). A channel whose final
/// mean is zero converges only if the whole window is zero.
pub fn convergence_report(running: ArrayView2<'_, f64>, window: usize, band: f64) -> Vec<ChannelConvergence> {
    let n = running.nrows();
    if n == 0 {
        return Vec::new();
    }
    let start = n - window.clamp(1, n);
    running
        .axis_iter(Axis(1))
        .map(|col| {
            let final_mean = col[n - 1];
            let tail = col.slice(ndarray::s![start..]);
            let max_relative_deviation = if final_mean == 0.0 {
                if tail.iter().all(|&v| v == 0.0) {
                    0.0
                } else {
                    f64::INFINITY
                }
            } else {
                tail.iter()
                    .map(|&v| (v / final_mean - 1.0).abs())
                    .fold(0.0, f64::max)
            };
            ChannelConvergence {
                final_mean,
                max_relative_deviation,
                converged: max_relative_deviation <= band,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_running_mean_rows() {
        let counts = array![[2u64, 0], [4, 0], [0, 3]];
        let rm = running_mean(counts.view());
        assert_eq!(rm.dim(), (3, 2));
        assert!((rm[[0, 0]] - 2.0).abs() < 1e-12);
        assert!((rm[[1, 0]] - 3.0).abs() < 1e-12);
        assert!((rm[[2, 0]] - 2.0).abs() < 1e-12);
        assert!((rm[[2, 1]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_last_row_is_batch_mean() {
        let counts = Array2::from_shape_fn((50, 4), |(i, j)| ((i * 7 + j * 3) % 11) as u64);
        let rm = running_mean(counts.view());
        for j in 0..4 {
            let mean = counts.column(j).iter().sum::<u64>() as f64 / 50.0;
            assert!((rm[[49, j]] - mean).abs() < 1e-12);
        }
    }

    #[test]
    fn test_band_check() {
        let running = array![[10.0, 0.0, 5.0], [10.1, 0.0, 8.0], [10.0, 0.0, 10.0]];
        let report = convergence_report(running.view(), 2, 0.02);
        assert!(report[0].converged);
        assert!(report[1].converged);
        assert!(!report[2].converged);
        assert!((report[2].max_relative_deviation - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let running = Array2::<f64>::zeros((0, 28));
        assert!(convergence_report(running.view(), 5, 0.02).is_empty());
    }
}
