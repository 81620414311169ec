//! Binary classifier inference.
//!
//! The model is trained in Python (scikit-learn `SVC`) and exported as JSON;
//! this module evaluates the decision function only, no training.
//!
//! Export shape:
//!
//! ```text
//! {
//!   "kernel": "rbf", "gamma": 0.111,
//!   "classes": [0, 1],
//!   "support_vectors": [[... 9 standardized features ...], ...],
//!   "dual_coef": [...],
//!   "intercept": -0.42
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::ArtifactError;
use crate::data::model::FEATURE_COUNT;

/// Anything that maps a standardized feature vector to a class label.
pub trait Classifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> i64;
}

/// Kernel function and its hyper-parameters, named as scikit-learn does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kernel", rename_all = "lowercase")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    fn eval(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => {
                let sq: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
                (-gamma * sq).exp()
            }
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * dot(a, b) + coef0).powi(i32::try_from(degree).unwrap_or(i32::MAX)),
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        }
    }

    fn params(&self) -> Vec<f64> {
        match *self {
            Kernel::Linear => Vec::new(),
            Kernel::Rbf { gamma } => vec![gamma],
            Kernel::Poly { gamma, coef0, .. } | Kernel::Sigmoid { gamma, coef0 } => {
                vec![gamma, coef0]
            }
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// A fitted two-class support-vector classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvmClassifier {
    #[serde(flatten)]
    pub kernel: Kernel,
    /// `[negative, positive]` labels; positive wins when the decision value is > 0.
    pub classes: Vec<i64>,
    pub support_vectors: Vec<Vec<f64>>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
}

impl SvmClassifier {
    /// Structural checks run once after loading.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.len() != 2 {
            return Err(ArtifactError::ClassCount(self.classes.len()));
        }
        if self.support_vectors.is_empty() {
            return Err(ArtifactError::NoSupportVectors);
        }
        if let Some(sv) = self
            .support_vectors
            .iter()
            .find(|sv| sv.len() != FEATURE_COUNT)
        {
            return Err(ArtifactError::FeatureCount {
                expected: FEATURE_COUNT,
                found: sv.len(),
            });
        }
        if self.dual_coef.len() != self.support_vectors.len() {
            return Err(ArtifactError::DualCoefLength {
                expected: self.support_vectors.len(),
                found: self.dual_coef.len(),
            });
        }
        if self.support_vectors.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ArtifactError::NonFinite {
                field: "support_vectors",
            });
        }
        if self.dual_coef.iter().any(|v| !v.is_finite()) {
            return Err(ArtifactError::NonFinite { field: "dual_coef" });
        }
        if let Kernel::Poly { degree, .. } = self.kernel {
            if i32::try_from(degree).is_err() {
                return Err(ArtifactError::Degree(degree));
            }
        }
        if !self.intercept.is_finite() || self.kernel.params().iter().any(|v| !v.is_finite()) {
            return Err(ArtifactError::NonFinite { field: "intercept" });
        }
        Ok(())
    }

    /// Signed distance from the separating surface.
    pub fn decision_function(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, coef)| coef * self.kernel.eval(sv, features))
            .sum::<f64>()
            + self.intercept
    }

    pub fn n_support(&self) -> usize {
        self.support_vectors.len()
    }
}

impl Classifier for SvmClassifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> i64 {
        if self.decision_function(features) > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}
