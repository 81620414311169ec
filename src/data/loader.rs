use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{FeatureTable, Quantity, FEATURE_COUNT};
use crate::predict::classifier::SvmClassifier;
use crate::predict::scaler::StandardScaler;

/// Header of the label column in the historical table.
pub const LABEL_COLUMN: &str = "Potability";

// ---------------------------------------------------------------------------
// Feature table (CSV)
// ---------------------------------------------------------------------------

/// Load the historical feature table.
///
/// CSV layout: header row naming the nine feature columns (`ph`, `Hardness`,
/// …, `Organic_carbon`, …) in any order, plus an optional `Potability`
/// column. Empty cells are missing values. Unknown columns are ignored.
pub fn load_feature_table(path: &Path) -> Result<FeatureTable> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening feature table {}", path.display()))?;
    read_feature_table(reader)
}

fn read_feature_table<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<FeatureTable> {
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut feature_idx: BTreeMap<Quantity, usize> = BTreeMap::new();
    let mut label_idx = None;
    for (i, header) in headers.iter().enumerate() {
        if let Some(q) = Quantity::from_column(header) {
            feature_idx.insert(q, i);
        } else if header.trim() == LABEL_COLUMN {
            label_idx = Some(i);
        } else {
            log::debug!("ignoring feature table column '{header}'");
        }
    }

    let missing: Vec<&str> = Quantity::ALL
        .iter()
        .filter(|q| !feature_idx.contains_key(q))
        .map(|q| q.column())
        .collect();
    if !missing.is_empty() {
        bail!("feature table is missing columns: {}", missing.join(", "));
    }

    let mut table = FeatureTable::default();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut row = [None; FEATURE_COUNT];
        for (quantity, &col_idx) in &feature_idx {
            let cell = record.get(col_idx).unwrap_or("");
            row[quantity.index()] = parse_cell(cell)
                .with_context(|| format!("Row {row_no}, {}: '{cell}'", quantity.column()))?;
        }

        let label = match label_idx {
            Some(i) => {
                let cell = record.get(i).unwrap_or("");
                parse_label(cell)
                    .with_context(|| format!("Row {row_no}, {LABEL_COLUMN}: '{cell}'"))?
            }
            None => None,
        };

        table.rows.push(row);
        table.labels.push(label);
    }

    Ok(table)
}

fn parse_cell(s: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let v: f64 = s.parse().context("not a number")?;
    if !v.is_finite() {
        bail!("not a finite number");
    }
    Ok(Some(v))
}

/// Class labels must be whole numbers; `1.0` is accepted, `0.5` is not.
fn parse_label(s: &str) -> Result<Option<i64>> {
    match parse_cell(s)? {
        Some(v) if v.fract() != 0.0 => bail!("not a whole number"),
        v => Ok(v.map(|v| v as i64)),
    }
}

// ---------------------------------------------------------------------------
// JSON artifacts
// ---------------------------------------------------------------------------

/// Load and validate a persisted scaler.
pub fn load_scaler(path: &Path) -> Result<StandardScaler> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scaler {}", path.display()))?;
    let scaler: StandardScaler = serde_json::from_str(&text).context("parsing scaler JSON")?;
    scaler
        .validate()
        .with_context(|| format!("invalid scaler {}", path.display()))?;
    Ok(scaler)
}

/// Persist a scaler as pretty-printed JSON.
pub fn save_scaler(scaler: &StandardScaler, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(scaler).context("serializing scaler")?;
    std::fs::write(path, text).with_context(|| format!("writing scaler {}", path.display()))
}

/// Load and validate an exported support-vector classifier.
pub fn load_classifier(path: &Path) -> Result<SvmClassifier> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading classifier {}", path.display()))?;
    let model: SvmClassifier =
        serde_json::from_str(&text).context("parsing classifier JSON")?;
    model
        .validate()
        .with_context(|| format!("invalid classifier {}", path.display()))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::classifier::Kernel;
    use tempfile::tempdir;

    const HEADER: &str =
        "ph,Hardness,Solids,Chloramines,Sulfate,Conductivity,Organic_carbon,Trihalomethanes,Turbidity,Potability";

    fn read(text: &str) -> Result<FeatureTable> {
        read_feature_table(csv::Reader::from_reader(text.as_bytes()))
    }

    #[test]
    fn reads_rows_and_labels() {
        let text = format!(
            "{HEADER}\n\
             7.1,200,20000,7,330,420,14,66,4,0\n\
             ,150,15000,6,,400,12,,3.5,1\n"
        );
        let t = read(&text).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows[0][Quantity::Ph.index()], Some(7.1));
        assert_eq!(t.rows[1][Quantity::Ph.index()], None);
        assert_eq!(t.rows[1][Quantity::Sulfate.index()], None);
        assert_eq!(t.rows[1][Quantity::Turbidity.index()], Some(3.5));
        assert_eq!(t.labels, vec![Some(0), Some(1)]);
    }

    #[test]
    fn header_order_does_not_matter() {
        let text = "Turbidity,Potability,Trihalomethanes,Organic_carbon,Conductivity,Sulfate,Chloramines,Solids,Hardness,ph,extra\n\
                    1,1,2,3,4,5,6,7,8,9,x\n";
        let t = read(text).unwrap();
        let expected: Vec<Option<f64>> = (1..=9).rev().map(|v| Some(v as f64)).collect();
        assert_eq!(t.rows[0].to_vec(), expected);
        assert_eq!(t.labels, vec![Some(1)]);
    }

    #[test]
    fn label_column_is_optional() {
        let text = "ph,Hardness,Solids,Chloramines,Sulfate,Conductivity,Organic_carbon,Trihalomethanes,Turbidity\n\
                    1,2,3,4,5,6,7,8,9\n";
        let t = read(text).unwrap();
        assert_eq!(t.labels, vec![None]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = read("ph,Hardness\n1,2\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Solids"), "{msg}");
        assert!(msg.contains("Turbidity"), "{msg}");
    }

    #[test]
    fn bad_cell_names_row_and_column() {
        let text = format!("{HEADER}\n1,2,3,4,5,6,7,8,9,0\n1,abc,3,4,5,6,7,8,9,0\n");
        let err = read(&text).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1, Hardness"));
    }

    #[test]
    fn fractional_label_is_rejected() {
        let t = read(&format!("{HEADER}\n1,2,3,4,5,6,7,8,9,1.0\n")).unwrap();
        assert_eq!(t.labels, vec![Some(1)]);

        let err = read(&format!("{HEADER}\n1,2,3,4,5,6,7,8,9,0.5\n")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Row 0, Potability"), "{msg}");
        assert!(msg.contains("not a whole number"), "{msg}");
    }

    #[test]
    fn scaler_file_roundtrip_and_validation() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("water.csv");
        std::fs::write(
            &table_path,
            format!("{HEADER}\n1,2,3,4,5,6,7,8,9,0\n3,4,5,6,7,8,9,10,11,1\n"),
        )
        .unwrap();
        let table = load_feature_table(&table_path).unwrap();
        let scaler = StandardScaler::fit(&table).unwrap();

        let path = dir.path().join("scaler.json");
        save_scaler(&scaler, &path).unwrap();
        assert_eq!(load_scaler(&path).unwrap(), scaler);

        std::fs::write(&path, r#"{"features": [], "mean": [], "scale": []}"#).unwrap();
        assert!(load_scaler(&path).is_err());
    }

    #[test]
    fn classifier_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_svm.json");
        std::fs::write(
            &path,
            r#"{"kernel": "linear", "classes": [0, 1],
                "support_vectors": [[1,0,0,0,0,0,0,0,0]],
                "dual_coef": [1.0], "intercept": -0.5}"#,
        )
        .unwrap();
        let model = load_classifier(&path).unwrap();
        assert_eq!(model.kernel, Kernel::Linear);

        assert!(load_classifier(&dir.path().join("absent.json")).is_err());
    }
}
