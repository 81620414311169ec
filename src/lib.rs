//! Water quality assessment: range checks on nine measurements and a
//! potability verdict from a pre-trained classifier.

pub mod app;
pub mod config;
pub mod data;
pub mod predict;
pub mod state;
pub mod theme;
pub mod ui;
