use std::fmt;

use thiserror::Error;

/// Number of measured quantities (and classifier features).
pub const FEATURE_COUNT: usize = 9;

// ---------------------------------------------------------------------------
// Quantity – one of the nine water-quality parameters
// ---------------------------------------------------------------------------

/// A measured water-quality parameter.
///
/// Declaration order is the feature order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantity {
    Ph,
    Hardness,
    Solids,
    Chloramines,
    Sulfate,
    Conductivity,
    OrganicCarbon,
    Trihalomethanes,
    Turbidity,
}

impl Quantity {
    /// All quantities in trained feature order.
    pub const ALL: [Quantity; FEATURE_COUNT] = [
        Quantity::Ph,
        Quantity::Hardness,
        Quantity::Solids,
        Quantity::Chloramines,
        Quantity::Sulfate,
        Quantity::Conductivity,
        Quantity::OrganicCarbon,
        Quantity::Trihalomethanes,
        Quantity::Turbidity,
    ];

    /// Display name, as shown on the form and in outcomes.
    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Ph => "pH",
            Quantity::Hardness => "Hardness",
            Quantity::Solids => "Solids",
            Quantity::Chloramines => "Chloramines",
            Quantity::Sulfate => "Sulfate",
            Quantity::Conductivity => "Conductivity",
            Quantity::OrganicCarbon => "Organic Carbon",
            Quantity::Trihalomethanes => "Trihalomethanes",
            Quantity::Turbidity => "Turbidity",
        }
    }

    /// Column header used by the historical feature table.
    pub const fn column(self) -> &'static str {
        match self {
            Quantity::Ph => "ph",
            Quantity::OrganicCarbon => "Organic_carbon",
            other => other.name(),
        }
    }

    /// Valid physical range for this quantity.
    pub const fn range(self) -> Range {
        let max = match self {
            Quantity::Ph => 14.0,
            Quantity::Hardness => 500.0,
            Quantity::Solids => 5000.0,
            Quantity::Chloramines => 20.0,
            Quantity::Sulfate => 500.0,
            Quantity::Conductivity => 5000.0,
            Quantity::OrganicCarbon => 50.0,
            Quantity::Trihalomethanes => 150.0,
            Quantity::Turbidity => 10.0,
        };
        Range { min: 0.0, max }
    }

    /// Position in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a quantity by its feature-table column header.
    pub fn from_column(header: &str) -> Option<Quantity> {
        Quantity::ALL
            .into_iter()
            .find(|q| q.column() == header.trim())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Range – fixed [min, max] per quantity
// ---------------------------------------------------------------------------

/// Closed valid range of a quantity.
///
/// Only `max` takes part in validation; `min` is kept for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Strictly above the maximum.
    pub fn exceeded_by(&self, value: f64) -> bool {
        value > self.max
    }
}

// ---------------------------------------------------------------------------
// ReadingSet – nine optional values submitted together
// ---------------------------------------------------------------------------

/// Errors raised while turning raw form input into a [`ReadingSet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    /// Text that does not parse as a number.
    #[error("{quantity}: '{input}' is not a number")]
    NotANumber { quantity: Quantity, input: String },

    /// Parsed, but NaN or infinite.
    #[error("{quantity}: '{input}' is not a finite number")]
    NotFinite { quantity: Quantity, input: String },
}

/// One submission: a value (or nothing) per quantity, in feature order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingSet {
    values: [Option<f64>; FEATURE_COUNT],
}

impl ReadingSet {
    pub fn new(values: [Option<f64>; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Parse the nine raw form strings, in feature order.
    ///
    /// Blank input means "absent". Anything else must be a finite `f64`;
    /// the first offending field is reported.
    pub fn parse<S: AsRef<str>>(raw: &[S; FEATURE_COUNT]) -> Result<Self, ReadingError> {
        let mut values = [None; FEATURE_COUNT];
        for (quantity, text) in Quantity::ALL.into_iter().zip(raw) {
            values[quantity.index()] = parse_value(quantity, text.as_ref())?;
        }
        Ok(Self { values })
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.values[quantity.index()]
    }

    pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
        self.values[quantity.index()] = value;
    }

    /// `(quantity, value)` pairs in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, Option<f64>)> + '_ {
        Quantity::ALL.into_iter().zip(self.values.iter().copied())
    }

    pub fn values(&self) -> &[Option<f64>; FEATURE_COUNT] {
        &self.values
    }
}

fn parse_value(quantity: Quantity, text: &str) -> Result<Option<f64>, ReadingError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| ReadingError::NotANumber {
        quantity,
        input: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ReadingError::NotFinite {
            quantity,
            input: text.to_string(),
        });
    }
    Ok(Some(value))
}

// ---------------------------------------------------------------------------
// FeatureTable – the historical dataset the scaler is fit on
// ---------------------------------------------------------------------------

/// Historical samples: nine features per row plus the potability label.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    /// Feature rows in trained order; `None` where the cell was empty.
    pub rows: Vec<[Option<f64>; FEATURE_COUNT]>,
    /// Potability label per row, when the column is present and filled.
    pub labels: Vec<Option<i64>>,
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count of missing cells per feature.
    pub fn missing_counts(&self) -> [usize; FEATURE_COUNT] {
        let mut counts = [0; FEATURE_COUNT];
        for row in &self.rows {
            for (count, cell) in counts.iter_mut().zip(row) {
                if cell.is_none() {
                    *count += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; FEATURE_COUNT]) -> [String; FEATURE_COUNT] {
        values.map(str::to_string)
    }

    #[test]
    fn feature_order_matches_declaration() {
        for (i, q) in Quantity::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
        assert_eq!(Quantity::ALL[6].name(), "Organic Carbon");
    }

    #[test]
    fn ranges_match_table() {
        let maxima: Vec<f64> = Quantity::ALL.iter().map(|q| q.range().max).collect();
        assert_eq!(
            maxima,
            vec![14.0, 500.0, 5000.0, 20.0, 500.0, 5000.0, 50.0, 150.0, 10.0]
        );
        assert!(Quantity::ALL.iter().all(|q| q.range().min == 0.0));
    }

    #[test]
    fn max_is_inclusive() {
        let r = Quantity::Ph.range();
        assert!(!r.exceeded_by(14.0));
        assert!(r.exceeded_by(15.0));
        // min is not enforced
        assert!(!r.exceeded_by(-3.0));
    }

    #[test]
    fn column_lookup() {
        assert_eq!(Quantity::from_column("ph"), Some(Quantity::Ph));
        assert_eq!(
            Quantity::from_column("Organic_carbon"),
            Some(Quantity::OrganicCarbon)
        );
        assert_eq!(Quantity::from_column(" Turbidity "), Some(Quantity::Turbidity));
        assert_eq!(Quantity::from_column("Potability"), None);
    }

    #[test]
    fn parse_blank_is_absent() {
        let set = ReadingSet::parse(&raw(["7", "", "  ", "5", "200", "400", "3", "50", "2"]))
            .unwrap();
        assert_eq!(set.get(Quantity::Ph), Some(7.0));
        assert_eq!(set.get(Quantity::Hardness), None);
        assert_eq!(set.get(Quantity::Solids), None);
        assert_eq!(set.get(Quantity::Turbidity), Some(2.0));
    }

    #[test]
    fn parse_rejects_text() {
        let err = ReadingSet::parse(&raw(["7", "abc", "1", "1", "1", "1", "1", "1", "1"]))
            .unwrap_err();
        assert_eq!(
            err,
            ReadingError::NotANumber {
                quantity: Quantity::Hardness,
                input: "abc".into()
            }
        );
        assert_eq!(err.to_string(), "Hardness: 'abc' is not a number");
    }

    #[test]
    fn parse_rejects_non_finite() {
        for bad in ["NaN", "inf", "-infinity"] {
            let err = ReadingSet::parse(&raw([bad, "1", "1", "1", "1", "1", "1", "1", "1"]))
                .unwrap_err();
            assert!(matches!(
                err,
                ReadingError::NotFinite {
                    quantity: Quantity::Ph,
                    ..
                }
            ));
        }
    }

    #[test]
    fn missing_counts_per_column() {
        let mut row = [Some(1.0); FEATURE_COUNT];
        row[0] = None;
        let table = FeatureTable {
            rows: vec![row, [Some(2.0); FEATURE_COUNT], row],
            labels: vec![Some(0), Some(1), None],
        };
        let counts = table.missing_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1..], [0; FEATURE_COUNT - 1]);
    }

    #[test]
    fn iter_pairs_in_order() {
        let mut set = ReadingSet::default();
        set.set(Quantity::Sulfate, Some(250.0));
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs.len(), FEATURE_COUNT);
        assert_eq!(pairs[4], (Quantity::Sulfate, Some(250.0)));
        assert_eq!(pairs[0], (Quantity::Ph, None));
    }
}
