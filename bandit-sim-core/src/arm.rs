//! Arm references and the fixed arm set

use serde::{Deserialize, Serialize};

use crate::{BanditError, Result};

/// Reference to an arm, by position or by display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmRef<'a> {
    /// Positional index into the arm set
    Index(usize),
    /// Display name of the arm
    Name(&'a str),
}

impl From<usize> for ArmRef<'static> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for ArmRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

/// Ordered, immutable set of named arms
///
/// Index order is significant: it matches the row order of whatever
/// per-arm parameterization an environment carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmSet {
    names: Vec<String>,
}

impl ArmSet {
    /// Create a new arm set from names in index order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of arms
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set contains no arms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Arm names in index order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the arm at `index`, if any
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the arm named `name`, if any
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Resolve an arm reference to a positional index
    ///
    /// # Errors
    ///
    /// Returns [`BanditError::InvalidArm`] for an unknown name or an
    /// out-of-range index.
    pub fn resolve(&self, arm: ArmRef<'_>) -> Result<usize> {
        match arm {
            ArmRef::Index(index) if index < self.names.len() => Ok(index),
            ArmRef::Index(index) => Err(BanditError::InvalidArm(index.to_string())),
            ArmRef::Name(name) => self
                .index_of(name)
                .ok_or_else(|| BanditError::InvalidArm(name.to_string())),
        }
    }

    /// Sample an arm index uniformly at random
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arms() -> ArmSet {
        ArmSet::new(["Politics", "Sports", "Tech", "Lifestyle"])
    }

    #[test]
    fn resolves_by_index_and_name() {
        let arms = arms();
        assert_eq!(arms.resolve(ArmRef::Index(2)).unwrap(), 2);
        assert_eq!(arms.resolve(ArmRef::Name("Tech")).unwrap(), 2);
        assert_eq!(arms.resolve("Lifestyle".into()).unwrap(), 3);
        assert_eq!(arms.resolve(0.into()).unwrap(), 0);
    }

    #[test]
    fn rejects_unknown_arms() {
        let arms = arms();
        assert!(matches!(
            arms.resolve(ArmRef::Index(4)),
            Err(BanditError::InvalidArm(_))
        ));
        assert!(matches!(
            arms.resolve(ArmRef::Name("Weather")),
            Err(BanditError::InvalidArm(_))
        ));
    }

    #[test]
    fn preserves_insertion_order() {
        let arms = arms();
        assert_eq!(arms.len(), 4);
        assert_eq!(arms.name(0), Some("Politics"));
        assert_eq!(arms.name(3), Some("Lifestyle"));
        assert_eq!(arms.index_of("Sports"), Some(1));
        assert_eq!(arms.name(4), None);
    }

    #[test]
    fn samples_within_range() {
        use rand::SeedableRng;

        let arms = arms();
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(arms.sample(&mut rng) < arms.len());
        }
    }
}
