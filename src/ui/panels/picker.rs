// BilPris - ui/panels/picker.rs
//
// Brand and model selection panel: the two collaborating selects.
//
// The brand select drives the model select. A brand change enters the
// loading state synchronously (so the placeholder is visible this very
// frame) and sets `state.pending_model_fetch`; gui.rs consumes the flag
// and issues the request. Selecting the already-chosen brand again is
// not a change and fetches nothing.
//
// The model select renders the current `ModelSelect` state: outside the
// populated state it is disabled and shows only that state's
// pre-selected placeholder.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the vehicle picker.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Kjøretøy");
    ui.separator();

    egui::Grid::new("picker_grid")
        .num_columns(2)
        .spacing([8.0, theme::FORM_ROW_SPACING])
        .show(ui, |ui| {
            // ---- Brand select ----
            ui.label("Merke:");
            let brand_text = state.selected_brand.as_deref().unwrap_or("Velg merke");
            let mut chosen_brand: Option<&'static str> = None;

            egui::ComboBox::from_id_salt("brand_select")
                .selected_text(brand_text)
                .width(theme::SELECT_WIDTH)
                .show_ui(ui, |ui| {
                    for &brand in constants::BRANDS {
                        let is_current = state.selected_brand.as_deref() == Some(brand);
                        if ui.selectable_label(is_current, brand).clicked() {
                            chosen_brand = Some(brand);
                        }
                    }
                });

            // Only an actual change fires the dependent fetch; re-picking
            // the current brand is a no-op, as with a native select.
            if let Some(brand) = chosen_brand {
                if state.selected_brand.as_deref() != Some(brand) {
                    state.on_brand_selected(brand.to_string());
                }
            }
            ui.end_row();

            // ---- Model select (dependent) ----
            ui.label("Modell:");
            let enabled = state.model_select.enabled();
            let mut chosen_model: Option<usize> = None;

            ui.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_id_salt("model_select")
                    .selected_text(state.model_select.display_text().to_owned())
                    .width(theme::SELECT_WIDTH)
                    .show_ui(ui, |ui| {
                        let selected = state.model_select.selected_index();
                        for (idx, entry) in state.model_select.models().iter().enumerate() {
                            if ui
                                .selectable_label(selected == Some(idx), &entry.name)
                                .clicked()
                            {
                                chosen_model = Some(idx);
                            }
                        }
                    });
            });

            if let Some(idx) = chosen_model {
                state.on_model_selected(idx);
            }
            ui.end_row();
        });

    if state.model_select.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(
                egui::RichText::new(constants::PLACEHOLDER_LOADING).color(theme::MUTED_TEXT),
            );
        });
    }
}
