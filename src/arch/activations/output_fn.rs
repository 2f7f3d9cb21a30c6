use super::SoftMax;
use crate::{Result, tensor::Vector};

/// The activation function applied after the output layer's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFn {
    SoftMax(SoftMax),
    Linear,
}

impl OutputFn {
    pub fn softmax() -> Self {
        Self::SoftMax(SoftMax::new())
    }

    pub fn linear() -> Self {
        Self::Linear
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SoftMax(_) => "softmax",
            Self::Linear => "linear",
        }
    }

    /// Applies the function to `vector` in place.
    ///
    /// # Returns
    /// `NullTensor` if the vector was released.
    pub fn apply(&self, vector: &mut Vector) -> Result<()> {
        let values = vector.view_mut()?;

        match self {
            Self::SoftMax(a) => a.apply(values),
            Self::Linear => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetErr;

    #[test]
    fn linear_is_the_identity() {
        let mut v = Vector::from_vec(vec![-1., 0., 4.]).unwrap();
        OutputFn::linear().apply(&mut v).unwrap();

        assert_eq!(v.to_vec().unwrap(), vec![-1., 0., 4.]);
    }

    #[test]
    fn softmax_keeps_the_length() {
        let mut v = Vector::from_vec(vec![1., 2., 3.]).unwrap();
        OutputFn::softmax().apply(&mut v).unwrap();

        let values = v.to_vec().unwrap();
        assert_eq!(values.len(), 3);
        assert!((values.iter().sum::<f64>() - 1.).abs() < 1e-6);
    }

    #[test]
    fn released_vectors_are_rejected_even_by_linear() {
        let mut v = Vector::zeros(1).unwrap();
        v.release().unwrap();

        assert!(matches!(
            OutputFn::linear().apply(&mut v),
            Err(NetErr::NullTensor { .. })
        ));
    }
}
