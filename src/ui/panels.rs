use eframe::egui::{self, RichText, Ui};

use crate::state::{AppState, Page};
use crate::theme;

const FOOTER: &str = "© 2024 created by varaprasad and team. All rights reserved.";

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Water Quality Analysis");
    ui.separator();

    let mut selected = state.page;
    for page in Page::ALL {
        ui.radio_value(&mut selected, page, page.title());
    }
    state.navigate(selected);

    ui.separator();

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui: &mut Ui| {
        ui.label(RichText::new(FOOTER).small());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Clear form").clicked() {
                state.reset_inputs();
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            for page in Page::ALL {
                if ui.button(page.title()).clicked() {
                    state.navigate(page);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if let Some(summary) = &state.artifact_summary {
            ui.label(RichText::new(summary).color(theme::ACCENT));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_credits_the_authors() {
        assert_eq!(
            FOOTER,
            "© 2024 created by varaprasad and team. All rights reserved."
        );
    }
}
