use std::time::{SystemTime, UNIX_EPOCH};

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use super::{Matrix, Vector};
use crate::{NetErr, Result};

/// Default amount of discrete steps a random value can take.
pub const DEFAULT_RANGE: u32 = 10;

/// Default scale applied to each random step.
pub const DEFAULT_FACTOR: f64 = 0.1332;

/// How the generator is seeded on each fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Reseed from the system clock on every fill.
    #[default]
    Clock,
    /// Reseed from the same value on every fill.
    Fixed(u64),
}

impl SeedStrategy {
    fn rng(&self) -> StdRng {
        match *self {
            SeedStrategy::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedStrategy::Clock => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or_default();

                StdRng::seed_from_u64(nanos)
            }
        }
    }
}

/// `k * factor` with `k` uniform over the integers in `[0, range)`.
struct ScaledSteps {
    steps: Uniform<u32>,
    factor: f64,
}

impl Distribution<f64> for ScaledSteps {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.steps.sample(rng) as f64 * self.factor
    }
}

/// Fills tensors with bounded pseudo-random values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFill {
    range: u32,
    factor: f64,
    seed: SeedStrategy,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            factor: DEFAULT_FACTOR,
            seed: SeedStrategy::Clock,
        }
    }
}

impl RandomFill {
    /// Creates a new `RandomFill`.
    ///
    /// # Arguments
    /// * `range` - The amount of discrete steps, values lie in `[0, range) * factor`.
    /// * `factor` - The scale of each step.
    /// * `seed` - How to reseed the generator on each fill.
    pub fn new(range: u32, factor: f64, seed: SeedStrategy) -> Self {
        Self {
            range,
            factor,
            seed,
        }
    }

    /// Creates the default `RandomFill` with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: SeedStrategy::Fixed(seed),
            ..Default::default()
        }
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn seed(&self) -> SeedStrategy {
        self.seed
    }

    /// Overwrites every value of `vector`.
    ///
    /// # Returns
    /// `NullTensor` if the vector was released, `InvalidDimension` if the range is zero.
    pub fn fill_vector(&self, vector: &mut Vector) -> Result<()> {
        let dist = self.distribution()?;
        let mut rng = self.seed.rng();
        let len = vector.len();

        vector
            .view_mut()?
            .assign(&Array1::random_using(len, dist, &mut rng));

        Ok(())
    }

    /// Overwrites every value of `matrix`.
    ///
    /// # Returns
    /// `NullTensor` if the matrix was released, `InvalidDimension` if the range is zero.
    pub fn fill_matrix(&self, matrix: &mut Matrix) -> Result<()> {
        let dist = self.distribution()?;
        let mut rng = self.seed.rng();
        let shape = matrix.shape();

        matrix
            .view_mut()?
            .assign(&Array2::random_using(shape, dist, &mut rng));

        Ok(())
    }

    fn distribution(&self) -> Result<ScaledSteps> {
        let steps = Uniform::new(0, self.range).map_err(|_| NetErr::InvalidDimension {
            what: "fill range",
            got: self.range as usize,
        })?;

        Ok(ScaledSteps {
            steps,
            factor: self.factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_bounds() {
        let fill = RandomFill::seeded(42);
        let mut m = Matrix::zeros(20, 20).unwrap();

        fill.fill_matrix(&mut m).unwrap();

        let upper = DEFAULT_RANGE as f64 * DEFAULT_FACTOR;
        assert!(m.view().unwrap().iter().all(|&x| (0. ..upper).contains(&x)));
    }

    #[test]
    fn values_are_multiples_of_the_factor() {
        let fill = RandomFill::new(4, 0.5, SeedStrategy::Fixed(7));
        let mut v = Vector::zeros(50).unwrap();

        fill.fill_vector(&mut v).unwrap();

        for x in v.to_vec().unwrap() {
            assert!([0., 0.5, 1., 1.5].contains(&x), "unexpected value {x}");
        }
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let fill = RandomFill::seeded(3);
        let a = Vector::allocate(30, Some(&fill)).unwrap();
        let b = Vector::allocate(30, Some(&fill)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn empty_range_is_rejected() {
        let fill = RandomFill::new(0, 1., SeedStrategy::Fixed(0));
        let mut v = Vector::zeros(2).unwrap();

        assert!(matches!(
            fill.fill_vector(&mut v),
            Err(NetErr::InvalidDimension {
                what: "fill range",
                ..
            })
        ));
    }
}
