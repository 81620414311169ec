use crate::data::model::{Quantity, ReadingError, ReadingSet, FEATURE_COUNT};
use crate::predict::decision::{Outcome, Predictor};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Pages reachable from the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Prediction,
    Details,
    Contact,
}

impl Page {
    /// Side panel order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Prediction, Page::Details, Page::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Prediction => "Water Potability Prediction",
            Page::Details => "Details",
            Page::Contact => "Contact Us",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the last click on "Predict" produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Decided(Outcome),
    Rejected(ReadingError),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Page shown in the central panel.
    pub page: Page,

    /// Raw text of the nine inputs, in feature order.
    pub inputs: [String; FEATURE_COUNT],

    /// Result of the last submission (None until "Predict" is pressed).
    pub last: Option<Submission>,

    /// Where the model artifacts came from, shown in the top bar.
    pub artifact_summary: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            inputs: default_inputs(),
            last: None,
            artifact_summary: None,
        }
    }
}

fn default_inputs() -> [String; FEATURE_COUNT] {
    std::array::from_fn(|_| "0".to_string())
}

impl AppState {
    /// Parse the inputs and run the decision procedure.
    pub fn submit(&mut self, predictor: &Predictor) {
        let submission = match ReadingSet::parse(&self.inputs) {
            Ok(readings) => Submission::Decided(predictor.decide(&readings)),
            Err(e) => {
                log::warn!("Rejected input: {e}");
                Submission::Rejected(e)
            }
        };
        self.last = Some(submission);
    }

    /// Restore every input to its initial value and clear the result.
    pub fn reset_inputs(&mut self) {
        self.inputs = default_inputs();
        self.last = None;
    }

    pub fn input_mut(&mut self, quantity: Quantity) -> &mut String {
        &mut self.inputs[quantity.index()]
    }

    /// Switch pages; the form keeps its contents.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            log::debug!("navigate to {}", page.title());
            self.page = page;
        }
    }
}
