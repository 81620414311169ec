use eframe::egui;

use crate::predict::decision::Predictor;
use crate::state::{AppState, Page};
use crate::ui::{form, pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PotabilityApp {
    pub state: AppState,
    predictor: Predictor,
}

impl PotabilityApp {
    /// Wrap the startup-loaded predictor; `summary` is shown in the top bar.
    pub fn new(predictor: Predictor, summary: impl Into<String>) -> Self {
        let mut state = AppState::default();
        state.artifact_summary = Some(summary.into());
        Self { state, predictor }
    }
}

impl eframe::App for PotabilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => pages::home_page(ui),
            Page::Prediction => form::prediction_page(ui, &mut self.state, &self.predictor),
            Page::Details => pages::details_page(ui),
            Page::Contact => pages::contact_page(ui),
        });
    }
}
