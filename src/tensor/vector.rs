use std::fmt;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};

use super::{MAX_VECTOR_LEN, RandomFill, check_dim};
use crate::{NetErr, Result};

/// A bounded 1-D tensor.
///
/// The declared length is set before the backing storage exists and never changes; releasing the
/// vector drops the storage but keeps the length around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    len: usize,
    values: Option<Array1<f64>>,
}

impl Vector {
    /// Allocates a new vector.
    ///
    /// # Arguments
    /// * `len` - The length of the vector, in `1..=MAX_VECTOR_LEN`.
    /// * `fill` - If given, the vector is filled with bounded random values right away.
    ///
    /// # Returns
    /// The new vector or an error if `len` is out of bounds.
    pub fn allocate(len: usize, fill: Option<&RandomFill>) -> Result<Self> {
        check_dim("vector length", len, MAX_VECTOR_LEN)?;

        let mut vector = Self { len, values: None };
        vector.values = Some(Array1::zeros(len));

        if let Some(fill) = fill {
            fill.fill_vector(&mut vector)?;
        }

        Ok(vector)
    }

    /// Allocates a vector of zeros.
    pub fn zeros(len: usize) -> Result<Self> {
        Self::allocate(len, None)
    }

    /// Creates a vector owning the given values.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(values))
    }

    pub(crate) fn from_array(values: Array1<f64>) -> Result<Self> {
        let len = values.len();
        check_dim("vector length", len, MAX_VECTOR_LEN)?;

        Ok(Self {
            len,
            values: Some(values),
        })
    }

    /// Returns the declared length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Allocated vectors are never empty, this only exists for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once the backing storage has been released.
    pub fn is_released(&self) -> bool {
        self.values.is_none()
    }

    /// Gives a view of the values of this vector.
    ///
    /// # Returns
    /// A read-only view or `NullTensor` if the vector was released.
    pub fn view(&self) -> Result<ArrayView1<'_, f64>> {
        self.values
            .as_ref()
            .map(|v| v.view())
            .ok_or(NetErr::NullTensor { what: "vector" })
    }

    /// Gives a mutable view of the values of this vector.
    ///
    /// # Returns
    /// A mutable view or `NullTensor` if the vector was released.
    pub fn view_mut(&mut self) -> Result<ArrayViewMut1<'_, f64>> {
        self.values
            .as_mut()
            .map(|v| v.view_mut())
            .ok_or(NetErr::NullTensor { what: "vector" })
    }

    /// Copies the values of this vector out.
    pub fn to_vec(&self) -> Result<Vec<f64>> {
        Ok(self.view()?.to_vec())
    }

    /// Frees the backing storage of this vector.
    ///
    /// # Returns
    /// `NullTensor` if the storage was already released.
    pub fn release(&mut self) -> Result<()> {
        self.values
            .take()
            .map(drop)
            .ok_or(NetErr::NullTensor { what: "vector" })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(values) = &self.values else {
            return write!(f, "<released>");
        };

        for (i, x) in values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x:.4}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_sets_len_and_zeroes() {
        let v = Vector::zeros(3).unwrap();

        assert_eq!(v.len(), 3);
        assert_eq!(v.to_vec().unwrap(), vec![0.; 3]);
    }

    #[test]
    fn allocate_rejects_out_of_bounds_lengths() {
        assert!(matches!(
            Vector::zeros(0),
            Err(NetErr::InvalidDimension { got: 0, .. })
        ));
        assert!(matches!(
            Vector::zeros(MAX_VECTOR_LEN + 1),
            Err(NetErr::DimensionLimitExceeded { .. })
        ));
        assert!(matches!(
            Vector::from_vec(vec![]),
            Err(NetErr::InvalidDimension { .. })
        ));
    }

    #[test]
    fn release_twice_fails() {
        let mut v = Vector::from_vec(vec![1., 2.]).unwrap();

        v.release().unwrap();
        assert!(v.is_released());
        assert_eq!(v.len(), 2);
        assert!(matches!(v.release(), Err(NetErr::NullTensor { .. })));
        assert!(matches!(v.view(), Err(NetErr::NullTensor { .. })));
    }

    #[test]
    fn display_uses_four_decimals() {
        let v = Vector::from_vec(vec![1., 0.5, -2.25]).unwrap();
        assert_eq!(v.to_string(), "1.0000 0.5000 -2.2500");
    }
}
