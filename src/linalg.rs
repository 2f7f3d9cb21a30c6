use crate::{
    NetErr, Result,
    tensor::{MAX_MATRIX_COLS, MAX_MATRIX_ROWS, MAX_VECTOR_LEN, Matrix, Vector, check_dim},
};

/// Computes `result[i] = sum_j matrix[i][j] * vector[j]`.
///
/// # Arguments
/// * `vector` - The vector feeding the transform, of length `matrix.cols()`.
/// * `matrix` - The transform, one row per element of the result.
///
/// # Returns
/// A freshly allocated vector of length `matrix.rows()`, or an error if either operand was
/// released, is out of bounds or the operands don't line up. Inputs are never mutated.
pub fn dot_product(vector: &Vector, matrix: &Matrix) -> Result<Vector> {
    let v = vector.view()?;
    let m = matrix.view()?;

    check_dim("vector length", vector.len(), MAX_VECTOR_LEN)?;
    check_dim("matrix rows", matrix.rows(), MAX_MATRIX_ROWS)?;
    check_dim("matrix cols", matrix.cols(), MAX_MATRIX_COLS)?;

    if matrix.cols() != vector.len() {
        return Err(NetErr::ShapeMismatch {
            what: "dot product operands",
            got: vector.len(),
            expected: matrix.cols(),
        });
    }

    Vector::from_array(m.dot(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_product() {
        let v = Vector::from_vec(vec![2., 4., 8.]).unwrap();
        let m = Matrix::from_rows(&[&[1., 2., 3.], &[2., 3., 4.], &[3., 5., 6.]]).unwrap();

        let res = dot_product(&v, &m).unwrap();
        assert_eq!(res.to_vec().unwrap(), vec![34., 48., 74.]);
    }

    #[test]
    fn result_has_one_value_per_row() {
        let v = Vector::from_vec(vec![1., 1.]).unwrap();
        let m = Matrix::from_rows(&[&[1., 2.], &[3., 4.], &[5., 6.]]).unwrap();

        let res = dot_product(&v, &m).unwrap();
        assert_eq!(res.to_vec().unwrap(), vec![3., 7., 11.]);
    }

    #[test]
    fn operands_are_left_untouched() {
        let v = Vector::from_vec(vec![1., 2.]).unwrap();
        let m = Matrix::from_rows(&[&[1., 0.], &[0., 1.]]).unwrap();
        let (v_before, m_before) = (v.clone(), m.clone());

        dot_product(&v, &m).unwrap();

        assert_eq!(v, v_before);
        assert_eq!(m, m_before);
    }

    #[test]
    fn mismatched_operands_fail() {
        let v = Vector::from_vec(vec![1., 2., 3.]).unwrap();
        let m = Matrix::zeros(3, 2).unwrap();

        let res = dot_product(&v, &m);
        assert!(matches!(
            res,
            Err(NetErr::ShapeMismatch {
                got: 3,
                expected: 2,
                ..
            })
        ));
    }

    #[test]
    fn released_operands_fail() {
        let mut v = Vector::zeros(2).unwrap();
        let mut m = Matrix::zeros(2, 2).unwrap();

        m.release().unwrap();
        assert!(matches!(
            dot_product(&v, &m),
            Err(NetErr::NullTensor { what: "matrix" })
        ));

        v.release().unwrap();
        assert!(matches!(
            dot_product(&v, &m),
            Err(NetErr::NullTensor { what: "vector" })
        ));
    }
}
