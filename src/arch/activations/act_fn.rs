use super::{Elu, Relu, Sigmoid, Tanh};
use crate::{Result, tensor::Vector};

/// The activation function applied after every hidden layer's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Relu(Relu),
    Elu(Elu),
    Sigmoid(Sigmoid),
    Tanh(Tanh),
}

impl ActFn {
    pub fn relu() -> Self {
        Self::Relu(Relu::new())
    }

    pub fn elu(alpha: f64) -> Self {
        Self::Elu(Elu::new(alpha))
    }

    pub fn sigmoid() -> Self {
        Self::Sigmoid(Sigmoid::new())
    }

    pub fn tanh() -> Self {
        Self::Tanh(Tanh::new())
    }

    /// Returns a stable identifier for the function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relu(_) => "relu",
            Self::Elu(_) => "elu",
            Self::Sigmoid(_) => "sigmoid",
            Self::Tanh(_) => "tanh",
        }
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Relu(a) => a.f(x),
            Self::Elu(a) => a.f(x),
            Self::Sigmoid(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
        }
    }

    pub fn df(&self, x: f64) -> f64 {
        match self {
            Self::Relu(a) => a.df(x),
            Self::Elu(a) => a.df(x),
            Self::Sigmoid(a) => a.df(x),
            Self::Tanh(a) => a.df(x),
        }
    }

    /// Overwrites every value of `vector` with `f` of itself.
    ///
    /// # Returns
    /// `NullTensor` if the vector was released.
    pub fn apply(&self, vector: &mut Vector) -> Result<()> {
        vector.view_mut()?.mapv_inplace(|x| self.f(x));
        Ok(())
    }

    /// Overwrites every value of `vector` with `df` of itself.
    ///
    /// # Returns
    /// `NullTensor` if the vector was released.
    pub fn apply_prime(&self, vector: &mut Vector) -> Result<()> {
        vector.view_mut()?.mapv_inplace(|x| self.df(x));
        Ok(())
    }
}
