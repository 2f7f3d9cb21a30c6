use log::warn;
use ndarray::ArrayViewMut1;

/// Normalized exponential over a whole vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SoftMax;

impl SoftMax {
    pub fn new() -> Self {
        Self
    }

    /// Applies the softmax in place.
    ///
    /// No value can be finalized before the exponential sum of the whole vector is known, so this
    /// takes two passes: one accumulating `sum(e^x)` and one writing `e^x / sum`.
    pub fn apply(&self, mut values: ArrayViewMut1<f64>) {
        let sum: f64 = values.iter().map(|x| x.exp()).sum();

        if !sum.is_finite() {
            warn!("softmax exponential sum is not finite: {sum}");
        }

        values.mapv_inplace(|x| x.exp() / sum);
    }
}
