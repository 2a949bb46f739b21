use ndarray::{Array1, Array2, ArrayView2};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    error::{LsaError, Result},
    utils::math::{argmax_abs, dot, norm, rotate_pair},
};

/// relative tolerance on column inner products
const TOLERANCE: f64 = 1e-12;
/// squared column norm, relative to `||M||_F^2`, treated as zero
const NEGLIGIBLE: f64 = 1e-24;
const MAX_SWEEPS: usize = 60;

/// Rank-k truncated SVD of a `N x T` matrix.
///
/// Singular vectors are unique only up to sign. Each encoding column is
/// flipped so its largest-magnitude entry is positive (first one on exact ties),
/// and the topic column follows. Equal singular values keep the order in which
/// the Jacobi sweep left them (lower column index first).
#[derive(Debug, Clone, Serialize)]
pub struct TruncatedSvd {
    /// `U_k Σ_k`, `N x k`
    pub topic_encoded: Array2<f64>,
    /// `V_k`, `T x k`
    pub encoding: Array2<f64>,
    /// descending, length k
    pub singular_values: Array1<f64>,
    /// `σ_i^2 / ||M||_F^2`
    pub explained_variance_ratio: Array1<f64>,
}

impl TruncatedSvd {
    /// Decompose `m` and keep the top `k` components.
    ///
    /// # Errors
    /// * `DimensionMismatch` - `m` has no rows or no columns
    /// * `InvalidRank` - `k < 1` or `k >= min(N, T)`
    pub fn compute(m: ArrayView2<'_, f64>, k: usize) -> Result<Self> {
        let (rows, cols) = m.dim();
        if rows == 0 || cols == 0 {
            return Err(LsaError::DimensionMismatch { rows, cols });
        }
        let max = rows.min(cols);
        if k < 1 || k >= max {
            return Err(LsaError::InvalidRank { k, max });
        }

        // V は回転の積なので常に正規直交
        let jacobi = Jacobi::run(m);
        let mut encoding = Array2::from_shape_fn((cols, k), |(i, j)| jacobi.right[jacobi.order[j]][i]);
        for mut column in encoding.columns_mut() {
            if let Some(idx) = argmax_abs(column.iter().copied()) {
                if column[idx] < 0.0 {
                    column.mapv_inplace(|x| -x);
                }
            }
        }

        let topic_encoded = m.dot(&encoding);
        let singular_values: Array1<f64> = jacobi.order[..k].iter().map(|&j| jacobi.sigma[j]).collect();
        let total: f64 = jacobi.sigma.iter().map(|s| s * s).sum();
        let explained_variance_ratio = if total > 0.0 {
            singular_values.mapv(|s| s * s / total)
        } else {
            Array1::zeros(k)
        };

        debug!(rows, cols, k, sweeps = jacobi.sweeps, "truncated svd computed");
        Ok(Self {
            topic_encoded,
            encoding,
            singular_values,
            explained_variance_ratio,
        })
    }

    #[inline]
    pub fn n_topics(&self) -> usize {
        self.singular_values.len()
    }

    /// `M_k = topic_encoded * encoding^t`
    pub fn reconstruct(&self) -> Array2<f64> {
        self.topic_encoded.dot(&self.encoding.t())
    }

    /// Frobenius norm of `m - M_k`
    pub fn reconstruction_error(&self, m: ArrayView2<'_, f64>) -> Result<f64> {
        let expected = (self.topic_encoded.nrows(), self.encoding.nrows());
        if m.dim() != expected {
            let (rows, cols) = m.dim();
            return Err(LsaError::DimensionMismatch { rows, cols });
        }
        let diff = &m - &self.reconstruct();
        Ok(diff.iter().map(|x| x * x).sum::<f64>().sqrt())
    }
}

/// One-sided (Hestenes) Jacobi on the columns of `M`.
/// Rotates column pairs until all are mutually orthogonal: `M V = U Σ`,
/// `σ_j = |(M V)_j|`. `V` is a product of plane rotations, so it stays
/// orthonormal even when `M` is rank deficient.
struct Jacobi {
    /// right singular vectors (length T)
    right: Vec<Vec<f64>>,
    sigma: Vec<f64>,
    /// column indices by descending σ
    order: Vec<usize>,
    sweeps: usize,
}

impl Jacobi {
    fn run(a: ArrayView2<'_, f64>) -> Self {
        let q = a.ncols();
        let mut columns: Vec<Vec<f64>> = a.columns().into_iter().map(|c| c.to_vec()).collect();
        let mut right: Vec<Vec<f64>> = (0..q)
            .map(|j| {
                let mut e = vec![0.0; q];
                e[j] = 1.0;
                e
            })
            .collect();

        // columns below this squared norm count as null space
        let negligible = NEGLIGIBLE * columns.iter().map(|c| dot(c, c)).sum::<f64>();

        let mut sweeps = 0;
        loop {
            if sweeps == MAX_SWEEPS {
                warn!(sweeps, "jacobi svd did not converge, using current rotation");
                break;
            }
            sweeps += 1;
            let mut rotated = false;
            for p in 0..q {
                for r in (p + 1)..q {
                    let alpha = dot(&columns[p], &columns[p]);
                    let beta = dot(&columns[r], &columns[r]);
                    let gamma = dot(&columns[p], &columns[r]);
                    if alpha.min(beta) <= negligible || gamma.abs() <= TOLERANCE * (alpha * beta).sqrt() {
                        continue;
                    }
                    rotated = true;
                    let zeta = (beta - alpha) / (2.0 * gamma);
                    let t = zeta.signum() / (zeta.abs() + zeta.hypot(1.0));
                    let c = 1.0 / t.hypot(1.0);
                    let s = c * t;
                    let (head, tail) = columns.split_at_mut(r);
                    rotate_pair(&mut head[p], &mut tail[0], c, s);
                    let (head, tail) = right.split_at_mut(r);
                    rotate_pair(&mut head[p], &mut tail[0], c, s);
                }
            }
            if !rotated {
                break;
            }
        }

        let sigma: Vec<f64> = columns.iter().map(|c| norm(c)).collect();

        let mut order: Vec<usize> = (0..q).collect();
        // stable: equal σ keep column order
        order.sort_by(|&x, &y| sigma[y].total_cmp(&sigma[x]));

        Self {
            right,
            sigma,
            order,
            sweeps,
        }
    }
}
