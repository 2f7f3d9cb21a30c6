/// Default `alpha` of the exponential linear unit.
pub const ELU_ALPHA: f64 = 1.;

/// Exponential linear unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elu {
    alpha: f64,
}

impl Default for Elu {
    fn default() -> Self {
        Self { alpha: ELU_ALPHA }
    }
}

impl Elu {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn f(&self, z: f64) -> f64 {
        if z >= 0. {
            z
        } else {
            self.alpha * (z.exp() - 1.)
        }
    }

    // Constant on the negative side, not `alpha * e^z`.
    pub fn df(&self, z: f64) -> f64 {
        if z >= 0. { 1. } else { self.alpha }
    }
}
