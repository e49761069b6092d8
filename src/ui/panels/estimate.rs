// BilPris - ui/panels/estimate.rs
//
// Estimate form and result section.
//
// The form is editable at any time; the request button is enabled only
// once a brand and a model are chosen and no estimate request is already
// in flight. The result area renders the `EstimateView` state set by
// gui.rs from estimate-progress messages.

use crate::app::state::{AppState, EstimateView};
use crate::core::model::{format_nok, Fuel, Gearbox};
use crate::ui::theme;
use crate::util::constants;

/// Render the estimate form and the current result state.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Prisestimat");
    ui.separator();

    egui::Grid::new("estimate_form")
        .num_columns(2)
        .spacing([8.0, theme::FORM_ROW_SPACING])
        .show(ui, |ui| {
            ui.label("Årsmodell:");
            ui.add(
                egui::DragValue::new(&mut state.year)
                    .range(constants::MIN_YEAR..=constants::MAX_YEAR),
            );
            ui.end_row();

            ui.label("Kilometerstand:");
            ui.add(
                egui::DragValue::new(&mut state.km)
                    .range(0..=constants::MAX_KM)
                    .speed(1_000)
                    .suffix(" km"),
            );
            ui.end_row();

            ui.label("Drivstoff:");
            egui::ComboBox::from_id_salt("fuel_select")
                .selected_text(state.fuel.label())
                .show_ui(ui, |ui| {
                    for fuel in Fuel::all() {
                        ui.selectable_value(&mut state.fuel, *fuel, fuel.label());
                    }
                });
            ui.end_row();

            ui.label("Girkasse:");
            egui::ComboBox::from_id_salt("gearbox_select")
                .selected_text(state.gearbox.label())
                .show_ui(ui, |ui| {
                    for gearbox in Gearbox::all() {
                        ui.selectable_value(&mut state.gearbox, *gearbox, gearbox.label());
                    }
                });
            ui.end_row();
        });

    ui.add_space(theme::FORM_ROW_SPACING);

    let can_request =
        state.estimate_request().is_some() && state.estimate != EstimateView::Loading;
    ui.add_enabled_ui(can_request, |ui| {
        if ui.button("Hent prisestimat").clicked() {
            state.begin_estimate();
        }
    });

    ui.add_space(theme::SECTION_SPACING);

    match &state.estimate {
        EstimateView::Idle => {
            ui.label(
                egui::RichText::new("Velg merke og modell, og fyll inn detaljene.")
                    .color(theme::MUTED_TEXT),
            );
        }
        EstimateView::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    egui::RichText::new("Beregner prisestimat...").color(theme::MUTED_TEXT),
                );
            });
        }
        EstimateView::Ready(figures) => {
            egui::Grid::new("estimate_result")
                .num_columns(2)
                .spacing([8.0, theme::FORM_ROW_SPACING])
                .show(ui, |ui| {
                    ui.label("Median:");
                    ui.label(
                        egui::RichText::new(format_nok(figures.median))
                            .strong()
                            .color(theme::MEDIAN_TEXT),
                    );
                    ui.end_row();

                    ui.label("Gjennomsnitt:");
                    ui.label(
                        egui::RichText::new(format_nok(figures.average))
                            .color(theme::PRICE_TEXT),
                    );
                    ui.end_row();

                    ui.label("Laveste:");
                    ui.label(
                        egui::RichText::new(format_nok(figures.min)).color(theme::PRICE_TEXT),
                    );
                    ui.end_row();

                    ui.label("Høyeste:");
                    ui.label(
                        egui::RichText::new(format_nok(figures.max)).color(theme::PRICE_TEXT),
                    );
                    ui.end_row();
                });
        }
        EstimateView::NoListings(message) => {
            // Server message verbatim, e.g. "Ingen priser funnet for angitte kriterier".
            ui.label(egui::RichText::new(message).color(theme::MUTED_TEXT));
        }
        EstimateView::Failed(detail) => {
            ui.label(
                egui::RichText::new("Kunne ikke hente prisestimat")
                    .strong()
                    .color(theme::ERROR_TEXT),
            );
            ui.label(egui::RichText::new(detail).small().color(theme::MUTED_TEXT));
        }
    }
}
