//! Data layer: measured quantities, reading sets, and file loading.
//!
//! Architecture:
//! ```text
//!  form input            water_potability.csv      *.json artifacts
//!      │                        │                        │
//!      ▼                        ▼                        ▼
//!  ┌────────────┐        ┌──────────────┐        ┌──────────────┐
//!  │ ReadingSet  │        │ FeatureTable  │        │ scaler, SVM   │
//!  └────────────┘        └──────────────┘        └──────────────┘
//!        model                  loader                  loader
//! ```

pub mod loader;
pub mod model;
