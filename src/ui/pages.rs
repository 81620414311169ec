use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Quantity;
use crate::theme;

// ---------------------------------------------------------------------------
// Static content
// ---------------------------------------------------------------------------

const ABOUT_TITLE: &str =
    "Water quality Assessment on contaminated water and its impacts on Human Health";

const ABOUT_INTRO: &str = "An evaluation assessment of contaminated water and its impacts on human health involves a systematic analysis of various aspects related to water contamination and its effects on individuals and communities.";

const ABOUT_SECTIONS: [(&str, &str); 5] = [
    (
        "Water Quality Analysis",
        "This involves testing water samples to identify the presence and concentration of contaminants. It includes assessing parameters such as microbial content (bacteria, viruses, parasites), chemical composition (heavy metals, pesticides, toxins), and physical characteristics (turbidity, odor, color).",
    ),
    (
        "Exposure Assessment",
        "Evaluating how people come into contact with contaminated water. This includes assessing different exposure pathways such as ingestion (drinking, cooking, food preparation), inhalation (steam, aerosols), and dermal contact (bathing, swimming). Factors such as frequency, duration, and intensity of exposure are considered.",
    ),
    (
        "Health Risk Assessment",
        "Determining the potential health risks associated with exposure to contaminated water. This involves considering toxicity data for identified contaminants, epidemiological studies linking exposure to adverse health outcomes, and factors influencing susceptibility (age, health status, genetics). Quantitative risk assessment may be conducted to estimate the likelihood and severity of health effects.",
    ),
    (
        "Health Impact Analysis",
        "Examining the actual health effects observed in populations exposed to contaminated water. This includes reviewing medical records, conducting epidemiological studies, and monitoring health indicators such as morbidity (incidence of illness) and mortality (death rates). Long-term health impacts, such as chronic diseases or developmental issues, may also be assessed.",
    ),
    (
        "Social and Economic Implications",
        "Assessing the broader social and economic consequences of water contamination. This includes evaluating impacts on livelihoods, productivity, healthcare costs, and community well-being. Consideration is given to both immediate effects and long-term implications for sustainable development.",
    ),
];

/// Glossary entry for one measured parameter.
pub struct GlossaryEntry {
    pub quantity: Quantity,
    pub heading: &'static str,
    pub text: &'static str,
    pub link: &'static str,
}

pub const GLOSSARY: [GlossaryEntry; 9] = [
    GlossaryEntry {
        quantity: Quantity::Ph,
        heading: "pH",
        text: "pH measures the acidity or alkalinity of water. The acceptable pH range for drinking water is generally between 6.5 and 8.5. Extreme pH levels can affect the taste of water and potentially indicate the presence of corrosive or scaling substances, which can impact plumbing and affect the effectiveness of water treatment processes.",
        link: "https://en.m.wikipedia.org/wiki/PH",
    },
    GlossaryEntry {
        quantity: Quantity::Hardness,
        heading: "Hardness",
        text: "Hardness refers to the concentration of minerals, primarily calcium and magnesium, dissolved in water. While hard water is not usually a health concern, it can cause scaling in pipes and appliances, decrease soap effectiveness, and lead to skin and hair irritation. Acceptable hardness levels vary but are typically below 100-150 mg/L as calcium carbonate.",
        link: "https://en.m.wikipedia.org/wiki/Hard_water",
    },
    GlossaryEntry {
        quantity: Quantity::Chloramines,
        heading: "Chloramines",
        text: "Chloramines are disinfection byproducts formed when chlorine reacts with organic matter in water. They are used as a secondary disinfectant in some water treatment systems. While chloramines themselves are not highly toxic, excessive levels can cause skin irritation and respiratory issues in sensitive individuals. The maximum residual disinfectant level for chloramines in drinking water is typically around 4.0 mg/L.",
        link: "https://en.m.wikipedia.org/wiki/Chloramine",
    },
    GlossaryEntry {
        quantity: Quantity::Solids,
        heading: "TDS (Total Dissolved Solids)",
        text: "TDS measures the total concentration of dissolved inorganic substances in water. Acceptable levels vary depending on the source and treatment of water but generally fall below 500 mg/L. Elevated TDS levels can affect the taste and appearance of water, and very high levels may indicate the presence of harmful contaminants.",
        link: "https://en.wikipedia.org/wiki/Total_dissolved_solids",
    },
    GlossaryEntry {
        quantity: Quantity::Sulfate,
        heading: "Sulfates",
        text: "Sulfates are naturally occurring compounds found in soil and rocks. While they are not typically harmful at low levels, high sulfate concentrations (>250 mg/L) can cause gastrointestinal issues, particularly in infants and individuals with certain medical conditions.",
        link: "https://en.m.wikipedia.org/wiki/Sulfate",
    },
    GlossaryEntry {
        quantity: Quantity::Conductivity,
        heading: "Conductivity",
        text: "Conductivity measures the ability of water to conduct electrical current, which is influenced by dissolved ions. It is often used as an indicator of overall water quality. Acceptable conductivity levels for drinking water vary but generally fall below 800 μS/cm. Elevated conductivity can indicate the presence of dissolved salts or pollutants.",
        link: "https://en.m.wikipedia.org/wiki/Electrical_resistivity_and_conductivity",
    },
    GlossaryEntry {
        quantity: Quantity::OrganicCarbon,
        heading: "Organic Carbon",
        text: "Organic carbon compounds can originate from natural sources or anthropogenic activities. High levels of organic carbon can contribute to taste and odor issues in water and serve as precursors to disinfection byproducts. Acceptable levels vary, but organic carbon concentrations are typically kept below 2-4 mg/L in treated drinking water.",
        link: "https://en.m.wikipedia.org/wiki/Total_organic_carbon",
    },
    GlossaryEntry {
        quantity: Quantity::Trihalomethanes,
        heading: "Trihalomethanes (THMs)",
        text: "THMs are disinfection byproducts formed when chlorine reacts with organic matter in water. Long-term exposure to elevated THM levels (>80 μg/L) has been associated with increased cancer risk and adverse reproductive outcomes. Regulations typically limit THM levels in drinking water to below 80 μg/L.",
        link: "https://en.m.wikipedia.org/wiki/Trihalomethane",
    },
    GlossaryEntry {
        quantity: Quantity::Turbidity,
        heading: "Turbidity",
        text: "Turbidity measures the cloudiness or clarity of water caused by suspended particles. While not directly harmful, high turbidity can indicate the presence of pathogens, organic matter, or other contaminants. Acceptable turbidity levels for drinking water are typically below 1 NTU (Nephelometric Turbidity Units).",
        link: "https://en.m.wikipedia.org/wiki/Turbidity",
    },
];

const MENTOR: &str = "Dr. V. Anusuya Devi, CSE";

const TEAM: [&str; 5] = [
    "Godugu Varaprasad",
    "U. Harsha Vardhan",
    "Ch. V. V. Sai Kumar Reddy",
    "A. V. Manoj Reddy",
    "P. Varun Tej",
];

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).strong().size(16.0));
}

/// About statement.
pub fn home_page(ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("ABOUT STATEMENT");
        ui.label(RichText::new(ABOUT_TITLE).size(18.0).color(theme::ACCENT));
        ui.separator();
        ui.label(ABOUT_INTRO);
        for (title, body) in ABOUT_SECTIONS {
            section(ui, title);
            ui.label(body);
        }
    });
}

/// Parameter glossary and the accepted ranges.
pub fn details_page(ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Description");
        for entry in &GLOSSARY {
            section(ui, entry.heading);
            ui.label(entry.text);
            ui.hyperlink_to("Read More", entry.link);
        }

        ui.add_space(12.0);
        section(ui, "Accepted ranges");
        range_table(ui);
    });
}

fn range_table(ui: &mut Ui) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Parameter");
            });
            header.col(|ui| {
                ui.strong("Min");
            });
            header.col(|ui| {
                ui.strong("Max");
            });
        })
        .body(|mut body| {
            for quantity in Quantity::ALL {
                let range = quantity.range();
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(quantity.name());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", range.min));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", range.max));
                    });
                });
            }
        });
}

/// Mentor and team listing.
pub fn contact_page(ui: &mut Ui) {
    ui.heading("Contact Us");
    section(ui, "Mentor");
    ui.label(MENTOR);
    section(ui, "Team Members");
    ui.columns(3, |cols| {
        for (i, name) in TEAM.iter().enumerate() {
            cols[i % 3].label(*name);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn glossary_covers_every_quantity_once() {
        let covered: BTreeSet<Quantity> = GLOSSARY.iter().map(|e| e.quantity).collect();
        assert_eq!(covered.len(), Quantity::ALL.len());
        assert!(GLOSSARY.iter().all(|e| e.link.starts_with("https://")));
    }
}
