use rand::distributions::Open01;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// The random draws the sampler needs.
pub trait UniformSource {
    /// A uniform value in the open interval (0, 1). Never exactly 0, so its logarithm is finite.
    fn uniform(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` is never zero.
    fn slot(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self) -> f64 {
        self.sample(Open01)
    }

    fn slot(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// A generator seeded once from the operating system, so separate runs give uncorrelated
/// samples.
pub fn entropy_rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::from_entropy()
}
