//! Runtime configuration.
//!
//! Artifact locations come from environment variables, falling back to
//! file names in the working directory.

use std::path::PathBuf;

pub const MODEL_PATH_VAR: &str = "WATER_MODEL_PATH";
pub const SCALER_PATH_VAR: &str = "WATER_SCALER_PATH";
pub const FEATURE_TABLE_VAR: &str = "WATER_FEATURE_TABLE";

const DEFAULT_MODEL: &str = "model_svm.json";
const DEFAULT_SCALER: &str = "scaler.json";
const DEFAULT_FEATURE_TABLE: &str = "water_potability.csv";

/// Where the startup artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Exported classifier (JSON). Required.
    pub model_path: PathBuf,
    /// Persisted scaler (JSON). Preferred when present.
    pub scaler_path: PathBuf,
    /// Historical feature table (CSV), used to fit the scaler otherwise.
    pub feature_table_path: PathBuf,
}

/// How the scaler will be obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalerSource {
    Persisted(PathBuf),
    FitFromTable(PathBuf),
}

impl ScalerSource {
    /// Short label for the top bar.
    pub fn describe(&self) -> &'static str {
        match self {
            ScalerSource::Persisted(_) => "persisted scaler",
            ScalerSource::FitFromTable(_) => "scaler fitted at startup",
        }
    }
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };
        Self {
            model_path: get(MODEL_PATH_VAR, DEFAULT_MODEL),
            scaler_path: get(SCALER_PATH_VAR, DEFAULT_SCALER),
            feature_table_path: get(FEATURE_TABLE_VAR, DEFAULT_FEATURE_TABLE),
        }
    }

    /// Persisted scaler if the file exists, otherwise the feature table if
    /// that exists, otherwise `None`.
    pub fn scaler_source(&self) -> Option<ScalerSource> {
        if self.scaler_path.is_file() {
            Some(ScalerSource::Persisted(self.scaler_path.clone()))
        } else if self.feature_table_path.is_file() {
            Some(ScalerSource::FitFromTable(self.feature_table_path.clone()))
        } else {
            None
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.model_path, PathBuf::from("model_svm.json"));
        assert_eq!(cfg.scaler_path, PathBuf::from("scaler.json"));
        assert_eq!(cfg.feature_table_path, PathBuf::from("water_potability.csv"));
    }

    #[test]
    fn overrides_and_blank_values() {
        let vars: HashMap<&str, &str> = [
            (MODEL_PATH_VAR, "/srv/models/svm.json"),
            (SCALER_PATH_VAR, "   "),
        ]
        .into_iter()
        .collect();
        let cfg = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.model_path, PathBuf::from("/srv/models/svm.json"));
        assert_eq!(cfg.scaler_path, PathBuf::from("scaler.json"));
    }

    #[test]
    fn scaler_source_prefers_persisted() {
        let dir = tempdir().unwrap();
        let cfg = AppConfig {
            model_path: dir.path().join("model.json"),
            scaler_path: dir.path().join("scaler.json"),
            feature_table_path: dir.path().join("table.csv"),
        };
        assert_eq!(cfg.scaler_source(), None);

        std::fs::write(&cfg.feature_table_path, "ph\n").unwrap();
        assert_eq!(
            cfg.scaler_source(),
            Some(ScalerSource::FitFromTable(cfg.feature_table_path.clone()))
        );

        std::fs::write(&cfg.scaler_path, "{}").unwrap();
        let source = cfg.scaler_source().unwrap();
        assert_eq!(source, ScalerSource::Persisted(cfg.scaler_path.clone()));
        assert_eq!(source.describe(), "persisted scaler");
    }
}
