use num::Float;

/// ドット積
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    debug_assert_eq!(a.len(), b.len(), "Vectors must be of the same length to compute dot product.");
    a.iter()
        .zip(b)
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// L2 norm
#[inline]
pub fn norm<N>(a: &[N]) -> N
where
    N: Float,
{
    dot(a, a).sqrt()
}

/// Scale `a` to unit L2 norm in place and return the norm it had.
/// A zero vector is left untouched.
pub fn normalize_l2<N>(a: &mut [N]) -> N
where
    N: Float,
{
    let n = norm(a);
    if n > N::zero() {
        a.iter_mut().for_each(|x| *x = *x / n);
    }
    n
}

/// Apply the plane rotation `[c -s; s c]` to the column pair `(x, y)`:
/// `x' = c*x - s*y`, `y' = s*x + c*y`
#[inline]
pub fn rotate_pair<N>(x: &mut [N], y: &mut [N], c: N, s: N)
where
    N: Float,
{
    debug_assert_eq!(x.len(), y.len());
    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let (a, b) = (*xi, *yi);
        *xi = c * a - s * b;
        *yi = s * a + c * b;
    }
}

/// Index of the entry with the largest absolute value.
/// On exact ties the first index wins.
pub fn argmax_abs<N, I>(values: I) -> Option<usize>
where
    N: Float,
    I: IntoIterator<Item = N>,
{
    let mut best: Option<(usize, N)> = None;
    for (idx, v) in values.into_iter().enumerate() {
        let a = v.abs();
        match best {
            Some((_, b)) if !(a > b) => {}
            _ => best = Some((idx, a)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_norm() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert!((norm(&[3.0f64, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_keeps_zero_vector() {
        let mut z = [0.0f64; 3];
        assert_eq!(normalize_l2(&mut z), 0.0);
        assert_eq!(z, [0.0; 3]);

        let mut v = [3.0f64, 4.0];
        normalize_l2(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-12 && (v[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn rotation_by_quarter_turn_swaps_columns() {
        let mut x = [1.0f64, 0.0];
        let mut y = [0.0f64, 1.0];
        rotate_pair(&mut x, &mut y, 0.0, 1.0);
        assert_eq!(x, [0.0, -1.0]);
        assert_eq!(y, [1.0, 0.0]);
    }

    #[test]
    fn argmax_abs_prefers_first_on_ties() {
        assert_eq!(argmax_abs([0.5f64, -2.0, 2.0]), Some(1));
        assert_eq!(argmax_abs(Vec::<f64>::new()), None);
    }
}
