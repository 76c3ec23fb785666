// src/scalar/create.rs
//
// Random leaf creation. Random leaves are meant as trainable parameters, so they
// are created with gradient tracking enabled.

use crate::scalar::Scalar;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

impl Scalar {
    /// A gradient-enabled leaf drawn uniformly from `[0, 1)`.
    pub fn rand() -> Scalar {
        Self::rand_with_rng(&mut rand::thread_rng())
    }

    /// Same as [`Scalar::rand`], drawing from the given generator.
    pub fn rand_with_rng<R: Rng>(rng: &mut R) -> Scalar {
        Scalar::with_requires_grad(rng.gen::<f64>(), true)
    }

    /// A gradient-enabled leaf drawn uniformly from `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn uniform(low: f64, high: f64) -> Scalar {
        Self::uniform_with_rng(&mut rand::thread_rng(), low, high)
    }

    /// Same as [`Scalar::uniform`], drawing from the given generator.
    pub fn uniform_with_rng<R: Rng>(rng: &mut R, low: f64, high: f64) -> Scalar {
        Scalar::with_requires_grad(rng.gen_range(low..high), true)
    }

    /// A gradient-enabled leaf drawn from the standard normal distribution.
    pub fn randn() -> Scalar {
        Self::randn_with_rng(&mut rand::thread_rng())
    }

    /// Same as [`Scalar::randn`], drawing from the given generator.
    pub fn randn_with_rng<R: Rng>(rng: &mut R) -> Scalar {
        let value: f64 = StandardNormal.sample(rng);
        Scalar::with_requires_grad(value, true)
    }
}
