use std::fmt;

use super::classifier::Classifier;
use super::scaler::StandardScaler;
use super::ArtifactError;
use crate::data::model::{Quantity, ReadingSet};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Binary classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Potable,
    NotPotable,
}

impl Verdict {
    /// Class `1` is potable, anything else is not.
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            Verdict::Potable
        } else {
            Verdict::NotPotable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Potable => "potable",
            Verdict::NotPotable => "not potable",
        }
    }

    pub fn is_potable(self) -> bool {
        self == Verdict::Potable
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A quantity whose reading is above its configured maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exceedance {
    pub quantity: Quantity,
    pub value: f64,
    pub max: f64,
}

/// Result of one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// At least one reading exceeds its maximum; the classifier was not run.
    Contaminated(Vec<Exceedance>),
    /// Every reading is within range and the classifier produced a verdict.
    Scored(Verdict),
}

impl Outcome {
    /// Names of the offending quantities, empty for a scored outcome.
    pub fn offending(&self) -> Vec<&'static str> {
        match self {
            Outcome::Contaminated(list) => list.iter().map(|e| e.quantity.name()).collect(),
            Outcome::Scored(_) => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Range check
// ---------------------------------------------------------------------------

/// Every present reading strictly above its maximum, in feature order.
///
/// Minimums are not checked and absent readings are never flagged.
pub fn exceedances(readings: &ReadingSet) -> Vec<Exceedance> {
    readings
        .iter()
        .filter_map(|(quantity, value)| {
            let value = value?;
            let range = quantity.range();
            range.exceeded_by(value).then_some(Exceedance {
                quantity,
                value,
                max: range.max,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Predictor – immutable model state built once at startup
// ---------------------------------------------------------------------------

/// Scaler and classifier loaded at startup, read-only afterwards.
pub struct Predictor {
    scaler: StandardScaler,
    classifier: Box<dyn Classifier>,
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("scaler", &self.scaler)
            .finish_non_exhaustive()
    }
}

impl Predictor {
    /// Bundle a validated scaler with a classifier.
    pub fn new(
        scaler: StandardScaler,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self, ArtifactError> {
        scaler.validate()?;
        Ok(Self { scaler, classifier })
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Range-check the readings, then score them if nothing is exceeded.
    pub fn decide(&self, readings: &ReadingSet) -> Outcome {
        let exceeded = exceedances(readings);
        if !exceeded.is_empty() {
            log::info!(
                "contaminated: {:?}",
                exceeded.iter().map(|e| e.quantity.name()).collect::<Vec<_>>()
            );
            return Outcome::Contaminated(exceeded);
        }

        let features = self.scaler.transform(readings.values());
        let class = self.classifier.predict(&features);
        let verdict = Verdict::from_class(class);
        log::info!("classifier returned class {class}: {verdict}");
        Outcome::Scored(verdict)
    }
}
