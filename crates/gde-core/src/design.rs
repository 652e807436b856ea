//! Design vector domain type.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, GdeError};

/// One point in normalized design space.
///
/// Components are real numbers constrained to the closed interval `[0, 1]`.
/// A vector is immutable once recorded into a result history; proposals
/// always produce a fresh vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignVector(Vec<f64>);

impl DesignVector {
    /// Creates a design vector, validating every component.
    ///
    /// Fails for empty vectors and for components that are non-finite or
    /// outside `[0, 1]`.
    pub fn new(values: Vec<f64>) -> Result<Self, GdeError> {
        if values.is_empty() {
            return Err(GdeError::Design(ErrorInfo::new(
                "design-empty",
                "design vector must have at least one component",
            )));
        }
        for (idx, &value) in values.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GdeError::Design(
                    ErrorInfo::new("design-out-of-domain", "component outside [0, 1]")
                        .with_context("component", idx.to_string())
                        .with_context("value", value.to_string()),
                ));
            }
        }
        Ok(Self(values))
    }

    /// Creates a design vector by clipping every component into `[0, 1]`.
    ///
    /// Non-finite components collapse deterministically: `NaN` becomes `0.0`,
    /// infinities clamp to the nearest bound. The clip bounds are exactly
    /// `0.0` and `1.0`.
    pub fn clamped(values: Vec<f64>) -> Self {
        let clipped = values
            .into_iter()
            .map(|value| if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) })
            .collect();
        Self(clipped)
    }

    /// Returns the components as a slice.
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of components.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Canonical SHA-256 hash over the big-endian bit patterns of the
    /// components. Stable across platforms for identical vectors.
    pub fn canonical_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for &value in &self.0 {
            hasher.update(value.to_bits().to_be_bytes());
        }
        hex_digest(&hasher.finalize())
    }

    /// Consumes the vector and returns the raw components.
    pub fn into_components(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for DesignVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

fn hex_digest(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
