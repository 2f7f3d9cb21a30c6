use super::{LossFn, loss_fn::paired_views};
use crate::{Result, tensor::Vector};

/// Mean squared error loss function.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, actual: &Vector, predicted: &Vector) -> Result<f64> {
        let (a, p) = paired_views(actual, predicted)?;

        Ok((&a - &p).mapv(|x| x.powi(2)).mean().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetErr;

    fn vector(xs: &[f64]) -> Vector {
        Vector::from_vec(xs.to_vec()).unwrap()
    }

    #[test]
    fn one_off_by_one() {
        let loss = Mse.loss(&vector(&[1., 2., 3.]), &vector(&[1., 2., 4.])).unwrap();
        assert!((loss - 1. / 3.).abs() < 1e-6);
    }

    #[test]
    fn identical_vectors_have_no_loss() {
        let v = vector(&[0.3, -1., 8.]);
        assert_eq!(Mse.loss(&v, &v).unwrap(), 0.);
    }

    #[test]
    fn lengths_must_match() {
        let res = Mse.loss(&vector(&[1., 2., 3.]), &vector(&[1., 2.]));
        assert!(matches!(
            res,
            Err(NetErr::ShapeMismatch {
                got: 2,
                expected: 3,
                ..
            })
        ));
    }
}
