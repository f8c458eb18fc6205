//! User contexts and the fixed feature schema

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{BanditError, Result};

/// Ordered, immutable list of named feature dimensions
///
/// Index order is significant: position `j` in the schema names
/// coordinate `j` of every [`Context`] an environment emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Create a new schema from feature names in index order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Dimensionality of the schema
    #[must_use]
    pub fn dim(&self) -> usize {
        self.names.len()
    }

    /// Feature names in index order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the feature at `index`, if any
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the feature named `name`, if any
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Check a context vector against the schema dimensionality
    ///
    /// # Errors
    ///
    /// Returns [`BanditError::DimensionMismatch`] when the context length
    /// differs from [`Self::dim`].
    pub fn validate(&self, context: &Context) -> Result<()> {
        if context.len() == self.dim() {
            Ok(())
        } else {
            Err(BanditError::DimensionMismatch {
                expected: self.dim(),
                actual: context.len(),
            })
        }
    }
}

/// A sampled user feature vector
///
/// Value object: created fresh per sampler call and owned exclusively by
/// the caller; environments retain no reference to emitted contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Feature values in schema order
    pub data: Array1<f64>,
}

impl Context {
    /// Create a new context from a feature vector
    #[must_use]
    pub fn new(data: Array1<f64>) -> Self {
        Self { data }
    }

    /// Number of feature values
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the context holds no feature values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy the feature values into a plain vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }
}

impl From<Vec<f64>> for Context {
    fn from(values: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(values))
    }
}
