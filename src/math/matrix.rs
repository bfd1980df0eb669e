use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::{Add, Mul, Sub};

use crate::error::{NetError, Result};

/// Dense row-major matrix of `f64`.
///
/// Every row has exactly `cols` entries. Constructors uphold this; the
/// arithmetic operators assume it and panic on shape disagreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a `rows × cols` matrix with `2·U(0,1) − 1`, row-major: the outer
    /// loop walks rows, the inner loop walks columns. Seeded runs depend on
    /// this draw order.
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = 2.0 * rng.gen::<f64>() - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from rows, rejecting empty, zero-width and ragged input.
    pub fn try_from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) => row.len(),
            None => return Err(NetError::ShapeMismatch("matrix has no rows".into())),
        };
        if cols == 0 {
            return Err(NetError::ShapeMismatch("matrix has zero columns".into()));
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(NetError::ShapeMismatch(format!(
                "row {i} has {} columns, expected {cols}",
                row.len()
            )));
        }

        Ok(Matrix { rows: data.len(), cols, data })
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        zip_with(self, rhs, |x, y| x * y)
    }

    /// Row-major copy of all entries.
    pub fn flatten(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }
}

fn assert_same_shape(a: &Matrix, b: &Matrix) {
    if a.rows != b.rows || a.cols != b.cols {
        panic!("Matrices are of incorrect sizes")
    }
}

/// Combines two same-shape matrices entry by entry.
fn zip_with(a: &Matrix, b: &Matrix, op: impl Fn(f64, f64) -> f64) -> Matrix {
    assert_same_shape(a, b);
    let data = a.data.iter().zip(&b.data)
        .map(|(row_a, row_b)| row_a.iter().zip(row_b).map(|(&x, &y)| op(x, y)).collect())
        .collect();
    Matrix { rows: a.rows, cols: a.cols, data }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Matrix {
        zip_with(self, rhs, |x, y| x + y)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Matrix {
        zip_with(self, rhs, |x, y| x - y)
    }
}

/// Dense product; each entry sums `k` in ascending order starting from 0.0.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter()
            .map(|row| {
                (0..rhs.cols)
                    .map(|j| row.iter().zip(&rhs.data).fold(0.0, |acc, (&x, r)| acc + x * r[j]))
                    .collect()
            })
            .collect();
        Matrix { rows: self.rows, cols: rhs.cols, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn try_from_rows_rejects_bad_shapes() {
        assert!(matches!(Matrix::try_from_rows(vec![]), Err(NetError::ShapeMismatch(_))));
        assert!(matches!(
            Matrix::try_from_rows(vec![vec![], vec![]]),
            Err(NetError::ShapeMismatch(_))
        ));
        assert!(matches!(
            Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(NetError::ShapeMismatch(_))
        ));

        let m = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!((m.rows, m.cols), (3, 2));
    }

    #[test]
    fn product_and_transpose() {
        let a = Matrix::try_from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::try_from_rows(vec![vec![7.0], vec![8.0], vec![9.0]]).unwrap();

        let c = &a * &b;
        assert_eq!(c.data, vec![vec![50.0], vec![122.0]]);

        let t = a.transpose();
        assert_eq!((t.rows, t.cols), (3, 2));
        assert_eq!(t.data[2], vec![3.0, 6.0]);

        assert_eq!(&t.transpose() * &b, c);
    }

    #[test]
    fn elementwise_ops() {
        let a = Matrix::try_from_rows(vec![vec![1.0, -2.0], vec![0.5, 3.0]]).unwrap();
        let b = Matrix::try_from_rows(vec![vec![2.0, 2.0], vec![4.0, -1.0]]).unwrap();

        assert_eq!(a.hadamard(&b).data, vec![vec![2.0, -4.0], vec![2.0, -3.0]]);
        assert_eq!((&a + &b).data, vec![vec![3.0, 0.0], vec![4.5, 2.0]]);
        assert_eq!((&b - &a).data, vec![vec![1.0, 4.0], vec![3.5, -4.0]]);
        assert_eq!(a.map(|x| x * 2.0).flatten(), vec![2.0, -4.0, 1.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn product_panics_on_inner_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn elementwise_ops_panic_on_shape_mismatch() {
        let _ = &Matrix::zeros(2, 3) + &Matrix::zeros(3, 2);
    }

    #[test]
    fn random_uniform_is_seeded_and_in_range() {
        let a = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.flatten().iter().all(|&x| (-1.0..1.0).contains(&x)));
    }
}
