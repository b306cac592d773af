//! Generic pivot closure shared by Floyd-Warshall and Warshall
//!
//! Both algorithms run the same triple loop: for each pivot `k`, every cell
//! `(i, j)` is offered the candidate `extend(m[i][k], m[k][j])` and takes it
//! when it improves on the current value. Floyd-Warshall instantiates this
//! with `(min, +)` over weights, Warshall with `(OR, AND)` over booleans.

use crate::graph::types::{Matrix, Weight};

/// Value algebra for [`close`]
pub trait PathAlgebra {
    type Value: Copy;

    /// Value of going through the pivot: `i -> k` followed by `k -> j`
    fn extend(left: Self::Value, right: Self::Value) -> Self::Value;

    /// Whether `candidate` should replace `current`
    fn improves(candidate: Self::Value, current: Self::Value) -> bool;

    /// Whether `value` can never extend into an improvement (lets rows be skipped)
    fn is_absorbing(value: Self::Value) -> bool;
}

/// `(min, +)` over weights with `INF` as "no path"
#[derive(Debug, Clone, Copy)]
pub struct MinPlus;

impl PathAlgebra for MinPlus {
    type Value = Weight;

    fn extend(left: Weight, right: Weight) -> Weight {
        left + right
    }

    fn improves(candidate: Weight, current: Weight) -> bool {
        candidate < current
    }

    fn is_absorbing(value: Weight) -> bool {
        value == f64::INFINITY
    }
}

/// `(OR, AND)` over reachability
#[derive(Debug, Clone, Copy)]
pub struct Reachability;

impl PathAlgebra for Reachability {
    type Value = bool;

    fn extend(left: bool, right: bool) -> bool {
        left && right
    }

    fn improves(candidate: bool, current: bool) -> bool {
        candidate && !current
    }

    fn is_absorbing(value: bool) -> bool {
        !value
    }
}

/// Close `matrix` in place over pivots `0..n`
///
/// `on_improve(i, j, k)` runs after cell `(i, j)` was improved through pivot
/// `k`. Pivots are processed strictly in order; each one sees the matrix left
/// by the previous pivot.
pub fn close<A, F>(matrix: &mut Matrix<A::Value>, mut on_improve: F)
where
    A: PathAlgebra,
    F: FnMut(usize, usize, usize),
{
    let n = matrix.size();
    for k in 0..n {
        for i in 0..n {
            let through_pivot = *matrix.get(i, k);
            if A::is_absorbing(through_pivot) {
                continue;
            }
            for j in 0..n {
                let candidate = A::extend(through_pivot, *matrix.get(k, j));
                if A::improves(candidate, *matrix.get(i, j)) {
                    matrix.set(i, j, candidate);
                    on_improve(i, j, k);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::INF;

    #[test]
    fn test_min_plus_chain() {
        let mut m = Matrix::from_rows(vec![
            vec![0.0, 1.0, INF],
            vec![INF, 0.0, 2.0],
            vec![INF, INF, 0.0],
        ])
        .unwrap();
        let mut improvements = Vec::new();
        close::<MinPlus, _>(&mut m, |i, j, k| improvements.push((i, j, k)));

        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(2, 0)], INF);
        assert_eq!(improvements, vec![(0, 2, 1)]);
    }

    #[test]
    fn test_reachability_chain() {
        let mut m = Matrix::from_rows(vec![
            vec![false, true, false],
            vec![false, false, true],
            vec![false, false, false],
        ])
        .unwrap();
        close::<Reachability, _>(&mut m, |_, _, _| {});

        assert!(m[(0, 2)]);
        assert!(!m[(0, 0)]);
        assert!(!m[(2, 0)]);
    }

    #[test]
    fn test_empty_matrix() {
        let mut m: Matrix<bool> = Matrix::filled(0, false);
        close::<Reachability, _>(&mut m, |_, _, _| panic!("no cells to improve"));
        assert_eq!(m.size(), 0);
    }
}
