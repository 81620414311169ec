//! Fit the standardization scaler on the historical feature table and
//! persist it next to the classifier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use water_potability::config::AppConfig;
use water_potability::data::loader;
use water_potability::data::model::Quantity;
use water_potability::predict::scaler::StandardScaler;

#[derive(Debug, Parser)]
#[command(name = "fit_scaler")]
#[command(about = "Fit the feature scaler on the water potability table and save it as JSON")]
struct Cli {
    /// Feature table CSV [default: $WATER_FEATURE_TABLE or water_potability.csv]
    table: Option<PathBuf>,

    /// Output scaler JSON [default: $WATER_SCALER_PATH or scaler.json]
    output: Option<PathBuf>,
}

impl Cli {
    /// Positional paths win over the environment-derived config.
    fn resolve(self, config: AppConfig) -> (PathBuf, PathBuf) {
        (
            self.table.unwrap_or(config.feature_table_path),
            self.output.unwrap_or(config.scaler_path),
        )
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");
    let (table_path, scaler_path) = cli.resolve(AppConfig::from_env());

    let table = loader::load_feature_table(&table_path)?;
    log::info!("Read {} rows from {}", table.len(), table_path.display());

    for (quantity, missing) in Quantity::ALL.iter().zip(table.missing_counts()) {
        if missing > 0 {
            log::info!("{quantity}: {missing} missing values imputed with the column mean");
        }
    }

    let scaler = StandardScaler::fit(&table)
        .with_context(|| format!("fitting scaler on {}", table_path.display()))?;
    loader::save_scaler(&scaler, &scaler_path)?;

    println!("Wrote scaler for {} features to {}", scaler.features.len(), scaler_path.display());
    for ((name, mean), scale) in scaler.features.iter().zip(&scaler.mean).zip(&scaler.scale) {
        println!("  {name:<16} mean {mean:>12.4}  scale {scale:>12.4}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn config() -> AppConfig {
        AppConfig::from_lookup(|_| None)
    }

    #[test]
    fn no_arguments_fall_back_to_config() {
        let cli = Cli::try_parse_from(["fit_scaler"]).unwrap();
        let (table, output) = cli.resolve(config());
        assert_eq!(table, PathBuf::from("water_potability.csv"));
        assert_eq!(output, PathBuf::from("scaler.json"));
    }

    #[test]
    fn positionals_override_config() {
        let cli = Cli::try_parse_from(["fit_scaler", "data/water.csv", "out/s.json"]).unwrap();
        let (table, output) = cli.resolve(config());
        assert_eq!(table, PathBuf::from("data/water.csv"));
        assert_eq!(output, PathBuf::from("out/s.json"));
    }

    #[test]
    fn help_is_not_taken_as_a_path() {
        let err = Cli::try_parse_from(["fit_scaler", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = Cli::try_parse_from(["fit_scaler", "a.csv", "b.json", "junk"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("junk"));
    }
}
