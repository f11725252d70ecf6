use std::{fmt, num::ParseIntError, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// A seed for reproducible cost matrix generation.
///
/// The same seed, dimensions, and value range always produce the same
/// matrices and index map.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use jobmatch_builder::MatrixSeed;
///
/// let seed = MatrixSeed::from_str("42")?;
/// assert_eq!(seed, MatrixSeed::new(42));
/// assert_eq!(seed.to_string(), "42");
/// # Ok::<(), std::num::ParseIntError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixSeed(u64);

impl MatrixSeed {
    /// Seed used when none is given.
    pub const DEFAULT: Self = Self(42);

    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Creates the generator this seed stands for.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::seed_from_u64(self.0)
    }
}

impl Default for MatrixSeed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MatrixSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatrixSeed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
