use eframe::egui::{self, RichText, Ui};

use crate::data::model::Quantity;
use crate::predict::decision::{Exceedance, Outcome, Predictor, Verdict};
use crate::state::{AppState, Submission};
use crate::theme;

const COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// Prediction page (central panel)
// ---------------------------------------------------------------------------

/// Render the nine inputs, the Predict button, and the last result.
pub fn prediction_page(ui: &mut Ui, state: &mut AppState, predictor: &Predictor) {
    ui.heading("Water Potability Prediction");
    ui.label("Enter the water quality parameters to predict potability.");
    ui.add_space(8.0);

    egui::Grid::new("readings")
        .num_columns(COLUMNS)
        .spacing([24.0, 10.0])
        .show(ui, |ui: &mut Ui| {
            for (i, quantity) in Quantity::ALL.into_iter().enumerate() {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(quantity.name());
                    ui.add(
                        egui::TextEdit::singleline(state.input_mut(quantity))
                            .hint_text(format!("{:.1}", quantity.range().max))
                            .desired_width(160.0),
                    );
                });
                if i % COLUMNS == COLUMNS - 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);
    if ui.button("Predict").clicked() {
        state.submit(predictor);
    }
    ui.add_space(8.0);

    match &state.last {
        None => {}
        Some(Submission::Rejected(e)) => {
            ui.label(RichText::new(format!("Invalid input: {e}")).color(theme::ERROR));
        }
        Some(Submission::Decided(Outcome::Contaminated(list))) => {
            ui.label(CONTAMINATED);
            ui.add_space(4.0);
            ui.label(
                RichText::new("Conclusion/Solution:")
                    .heading()
                    .color(theme::ACCENT),
            );
            for e in list {
                ui.label(advice(e));
            }
        }
        Some(Submission::Decided(Outcome::Scored(verdict))) => {
            ui.label(verdict_message(*verdict));
        }
    }
}

const CONTAMINATED: &str = "The water is contaminated and it is harmful to humans.";

/// Corrective hint for one out-of-range quantity.
pub fn advice(e: &Exceedance) -> String {
    let range = e.quantity.range();
    format!(
        "The {} should be in the range of {} to {:.1} to use for domestic usage",
        e.quantity.name(),
        range.min,
        e.max
    )
}

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Potable => {
            "The water is potable. That means the water is not contaminated and it can be used for domestic usage."
        }
        Verdict::NotPotable => "The water is not potable.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_names_quantity_and_range() {
        let e = Exceedance {
            quantity: Quantity::OrganicCarbon,
            value: 62.5,
            max: 50.0,
        };
        assert_eq!(
            advice(&e),
            "The Organic Carbon should be in the range of 0 to 50.0 to use for domestic usage"
        );
        let ph = Exceedance {
            quantity: Quantity::Ph,
            value: 20.0,
            max: 14.0,
        };
        assert_eq!(
            advice(&ph),
            "The pH should be in the range of 0 to 14.0 to use for domestic usage"
        );
    }

    #[test]
    fn verdict_messages_differ() {
        assert!(verdict_message(Verdict::Potable).starts_with("The water is potable"));
        assert_eq!(verdict_message(Verdict::NotPotable), "The water is not potable.");
    }
}
