//! Aggregate statistics over two matrices.

use serde::Serialize;

use crate::stats::matrix::Matrix;

/// Summary statistics over the combined elements of both matrices.
///
/// Non-finite values (the empty-input `-inf`/`+inf`/`NaN` conventions below)
/// serialize as JSON `null`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsSummary {
    pub max: f64,
    pub min: f64,
    pub sum: f64,
    pub average: f64,
    #[serde(rename = "isDiagonal")]
    pub is_diagonal: bool,
}

/// Compute summary statistics over `q` and `r`.
///
/// A single left-to-right pass over all of `q`'s elements (row-major)
/// followed by all of `r`'s:
/// - `max`/`min` fold from `-inf`/`+inf`, so an empty input yields
///   `max = -inf` and `min = +inf`.
/// - `sum` folds from zero in the same element order.
/// - `average` is `sum / count`; with zero elements this is `0/0 = NaN` and
///   is propagated, never special-cased.
/// - `isDiagonal` is true when either matrix is diagonal (short-circuit OR).
///
/// Pure function: no side effects, identical inputs give identical outputs.
pub fn compute(q: &Matrix, r: &Matrix) -> StatsSummary {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0_f64;
    let mut count = 0_usize;

    for value in q.values().chain(r.values()) {
        max = max.max(value);
        min = min.min(value);
        sum += value;
        count += 1;
    }

    let average = sum / count as f64;
    let is_diagonal = q.is_diagonal() || r.is_diagonal();

    StatsSummary {
        max,
        min,
        sum,
        average,
        is_diagonal,
    }
}
