use log::debug;

use crate::types::Matrix;

/// Looks up a table entry, or `None` when either index is out of bounds.
///
/// The backward recurrence references spans such as `Q[j+1][l-1]` that run
/// off the table edge near the sequence ends; those references must read
/// as zero contributions, never panic.
fn entry(table: &Matrix, row: usize, col: usize) -> Option<f64> {
    table.get(row)?.get(col).copied()
}

/// Derives per-span unpaired (`P`) and paired (`Pbp`) probabilities from
/// completed score tables.
///
/// Works on the untrimmed (n+1)×(n+1) tables and returns n×n matrices
/// with the index-0 row and column dropped, so callers see the external
/// 0-indexed convention.
///
/// For `iterations` row-major sweeps, every span i ≤ j is updated in
/// place, the paired entry first:
///
/// - `Pbp[i][j] = Q[1][i-1]·Qbp[i][j]·Q[j+1][n] / Q[1][n] + Σ enclosing`
/// - `P[i][j] = Q[1][i-1]·Q[j+1][n] / Q[1][n] + Σ enclosing`
///
/// The enclosing sums walk candidate outer pairs (k, l) rank-matched as
/// `zip(1..i, j+1..=n)`, weighting each by `Pbp[k][l] / Qbp[k][l]`. Any
/// term that reads outside the tables, and any term whose `Qbp[k][l]`
/// denominator is zero, contributes zero through an explicit guard: the
/// skip is a first-class branch, not error recovery.
pub fn pair_probabilities(
    q: &Matrix,
    qbp: &Matrix,
    iterations: usize,
    bp_energy_weight: f64,
    normalized_rt: f64,
) -> (Matrix, Matrix) {
    let dim = q.len();
    let n = dim.saturating_sub(1);
    let pair_weight = (-bp_energy_weight / normalized_rt).exp();

    let mut p: Matrix = vec![vec![0.0; dim]; dim];
    let mut pbp: Matrix = vec![vec![0.0; dim]; dim];

    for sweep in 0..iterations {
        debug!("probability sweep {}/{} (n = {})", sweep + 1, iterations, n);
        for i in 1..dim {
            for j in i..dim {
                let exterior = match (entry(q, 1, i - 1), entry(q, j + 1, n), entry(q, 1, n)) {
                    (Some(left), Some(right), Some(total)) if total != 0.0 => {
                        Some((left, right, total))
                    }
                    _ => None,
                };

                let mut paired = match exterior {
                    Some((left, right, total)) => left * qbp[i][j] * right / total,
                    None => 0.0,
                };
                let mut unpaired = match exterior {
                    Some((left, right, total)) => left * right / total,
                    None => 0.0,
                };

                // candidate enclosing pairs, rank-matched across the span
                for (k, l) in (1..i).zip(j + 1..=n) {
                    let denominator = qbp[k][l];
                    if denominator == 0.0 {
                        continue;
                    }
                    if let (Some(inner), Some(right)) =
                        (entry(qbp, k + 1, l - 1), entry(q, j + 1, l - 1))
                    {
                        paired += pbp[k][l] * (pair_weight * inner * qbp[i][j] * right)
                            / denominator;
                    }
                    if let (Some(left), Some(right)) =
                        (entry(q, k + 1, i - 1), entry(q, j + 1, l - 1))
                    {
                        unpaired += pbp[k][l] * (pair_weight * left * right) / denominator;
                    }
                }

                pbp[i][j] = paired;
                p[i][j] = unpaired;
            }
        }
    }

    (trim(&p), trim(&pbp))
}

/// Drops the unused index-0 row and column.
fn trim(table: &Matrix) -> Matrix {
    table
        .iter()
        .skip(1)
        .map(|row| row.iter().skip(1).copied().collect())
        .collect()
}
