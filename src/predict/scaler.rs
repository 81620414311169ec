use serde::{Deserialize, Serialize};

use super::ArtifactError;
use crate::data::model::{FeatureTable, Quantity, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// StandardScaler – per-feature (x - mean) / scale
// ---------------------------------------------------------------------------

/// Standardization parameters fitted on the historical feature table.
///
/// Serialized alongside the classifier so serving uses exactly the
/// normalization the model was trained with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Feature-table column names, in trained order.
    pub features: Vec<String>,
    pub mean: Vec<f64>,
    /// Population standard deviation; `1.0` for constant columns.
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit on a feature table.
    ///
    /// Missing cells are imputed with their column mean first, then mean and
    /// population standard deviation (ddof = 0) are computed per column.
    pub fn fit(table: &FeatureTable) -> Result<Self, ArtifactError> {
        if table.is_empty() {
            return Err(ArtifactError::EmptyTable);
        }

        let mut mean = Vec::with_capacity(FEATURE_COUNT);
        let mut scale = Vec::with_capacity(FEATURE_COUNT);

        for quantity in Quantity::ALL {
            let col = quantity.index();
            let present: Vec<f64> = table.rows.iter().filter_map(|row| row[col]).collect();
            if present.is_empty() {
                return Err(ArtifactError::EmptyColumn(quantity.column()));
            }
            let col_mean = present.iter().sum::<f64>() / present.len() as f64;

            // Imputed cells sit exactly on the mean, so they only grow the
            // denominator.
            let n = table.len() as f64;
            let var = present
                .iter()
                .map(|&v| (v - col_mean).powi(2))
                .sum::<f64>()
                / n;
            let std = var.sqrt();

            mean.push(col_mean);
            scale.push(if std > 0.0 { std } else { 1.0 });
        }

        Ok(Self {
            features: Quantity::ALL.iter().map(|q| q.column().to_string()).collect(),
            mean,
            scale,
        })
    }

    /// Check that the parameters line up with the trained feature order.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (field, len) in [
            ("features", self.features.len()),
            ("mean", self.mean.len()),
            ("scale", self.scale.len()),
        ] {
            if len != FEATURE_COUNT {
                log::debug!("scaler field '{field}' has {len} entries");
                return Err(ArtifactError::FeatureCount {
                    expected: FEATURE_COUNT,
                    found: len,
                });
            }
        }

        for (index, (quantity, found)) in Quantity::ALL.iter().zip(&self.features).enumerate() {
            if quantity.column() != found.as_str() {
                return Err(ArtifactError::FeatureName {
                    index,
                    expected: quantity.column().to_string(),
                    found: found.clone(),
                });
            }
        }

        if self.mean.iter().any(|v| !v.is_finite()) {
            return Err(ArtifactError::NonFinite { field: "mean" });
        }
        if self.scale.iter().any(|v| !v.is_finite()) {
            return Err(ArtifactError::NonFinite { field: "scale" });
        }
        if let Some((index, &value)) = self.scale.iter().enumerate().find(|(_, s)| **s <= 0.0) {
            return Err(ArtifactError::NonPositiveScale { index, value });
        }
        Ok(())
    }

    /// Standardize one sample. Absent values map to the mean, i.e. `0.0`.
    pub fn transform(&self, values: &[Option<f64>; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            if let Some(v) = values[i] {
                *slot = (v - self.mean[i]) / self.scale[i];
            }
        }
        out
    }
}
