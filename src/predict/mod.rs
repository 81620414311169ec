//! Prediction layer: standardization, classification, and the decision
//! procedure that ties them to the range checks.
//!
//! ```text
//!   raw form strings
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ ReadingSet  │  parse, blank → absent
//!   └────────────┘
//!        │
//!        ▼
//!   ┌────────────┐   any value > max
//!   │  decision   │ ─────────────────▶ Contaminated(exceedances)
//!   └────────────┘
//!        │ all within range
//!        ▼
//!   ┌────────────┐     ┌────────────┐
//!   │   scaler    │ ──▶ │ classifier │ ──▶ Verdict
//!   └────────────┘     └────────────┘
//! ```

use anyhow::{bail, Context, Result};
use thiserror::Error;

use crate::config::{AppConfig, ScalerSource};
use crate::data::loader;
use decision::Predictor;
use scaler::StandardScaler;

pub mod classifier;
pub mod decision;
pub mod scaler;

/// A loaded artifact is structurally unusable.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("expected {expected} features, found {found}")]
    FeatureCount { expected: usize, found: usize },

    #[error("feature {index} is '{found}', expected '{expected}'")]
    FeatureName {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("{field} contains a non-finite value")]
    NonFinite { field: &'static str },

    #[error("scale for feature {index} must be positive, got {value}")]
    NonPositiveScale { index: usize, value: f64 },

    #[error("binary classifier needs exactly 2 classes, found {0}")]
    ClassCount(usize),

    #[error("classifier has no support vectors")]
    NoSupportVectors,

    #[error("dual_coef has {found} entries for {expected} support vectors")]
    DualCoefLength { expected: usize, found: usize },

    #[error("polynomial degree {0} is out of range")]
    Degree(u32),

    #[error("feature table has no rows")]
    EmptyTable,

    #[error("feature table column '{0}' has no values")]
    EmptyColumn(&'static str),
}

/// Load the classifier and scaler named by `config` into a [`Predictor`].
///
/// Also returns where the scaler came from. Any failure here is fatal: the
/// app does not start without both.
pub fn load_predictor(config: &AppConfig) -> Result<(Predictor, ScalerSource)> {
    let model = loader::load_classifier(&config.model_path)?;
    log::info!(
        "Loaded classifier {} ({} support vectors)",
        config.model_path.display(),
        model.n_support()
    );

    let Some(source) = config.scaler_source() else {
        bail!(
            "no scaler: neither {} nor {} exists",
            config.scaler_path.display(),
            config.feature_table_path.display()
        );
    };

    let scaler = match &source {
        ScalerSource::Persisted(path) => {
            let scaler = loader::load_scaler(path)?;
            log::info!("Loaded scaler {}", path.display());
            scaler
        }
        ScalerSource::FitFromTable(path) => {
            log::warn!(
                "No scaler at {}; fitting from {}. Persist one with `fit_scaler` to pin serving normalization.",
                config.scaler_path.display(),
                path.display()
            );
            let table = loader::load_feature_table(path)?;
            StandardScaler::fit(&table)
                .with_context(|| format!("fitting scaler on {}", path.display()))?
        }
    };

    let predictor = Predictor::new(scaler, Box::new(model))?;
    Ok((predictor, source))
}
