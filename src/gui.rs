// BilPris - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and drives the two fetch managers.

use crate::app::estimate::EstimateFetchManager;
use crate::app::fetch::ModelsFetchManager;
use crate::app::state::{AppState, EstimateView};
use crate::core::model::{EstimateProgress, ModelsProgress};
use crate::ui;

/// The BilPris application.
pub struct BilPrisApp {
    pub state: AppState,
    pub models_fetch: ModelsFetchManager,
    pub estimate_fetch: EstimateFetchManager,
}

impl BilPrisApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            models_fetch: ModelsFetchManager::new(),
            estimate_fetch: EstimateFetchManager::new(),
        }
    }
}

impl eframe::App for BilPrisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll model-list outcomes. Outcomes arrive in resolution order and
        // each one fully replaces the select's content, so when requests
        // overlap the last response to resolve wins.
        // TODO: discard outcomes from a superseded brand selection (needs a
        // request generation counter carried through the progress message).
        let messages = self.models_fetch.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                ModelsProgress::Completed { brand, models } => {
                    let count = models.len();
                    self.state.model_select.apply_models(models);
                    self.state.status_message = if count > 0 {
                        format!("Fant {count} modeller for {brand}.")
                    } else {
                        format!("Ingen modeller for {brand}.")
                    };
                }
                ModelsProgress::Failed { brand, .. } => {
                    // Detail already logged by the fetch thread.
                    self.state.model_select.apply_failure();
                    self.state.status_message = format!("Kunne ikke hente modeller for {brand}.");
                }
            }
        }

        // Poll estimate outcomes.
        let estimate_messages = self.estimate_fetch.poll_progress();
        let had_estimate = !estimate_messages.is_empty();
        for msg in estimate_messages {
            match msg {
                EstimateProgress::Completed { response } => {
                    self.state.apply_estimate_response(response);
                }
                EstimateProgress::Failed { error } => {
                    self.state.estimate = EstimateView::Failed(error);
                    self.state.status_message = "Kunne ikke hente prisestimat.".to_string();
                }
            }
        }

        // Repaint while a request is in flight so outcomes appear promptly.
        if had_messages
            || had_estimate
            || self.state.model_select.is_loading()
            || self.state.estimate == EstimateView::Loading
        {
            ctx.request_repaint();
        }

        // ---- Handle intents set by panels ----
        // pending_model_fetch: the picker registered a brand change; the
        // loading placeholder is already showing. One GET per change.
        if let Some(brand) = self.state.pending_model_fetch.take() {
            self.models_fetch.start_fetch(&self.state.server_url, &brand);
        }
        // pending_estimate: the estimate panel requested figures.
        if let Some(request) = self.state.pending_estimate.take() {
            self.estimate_fetch
                .start_fetch(&self.state.server_url, request);
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.state.server_url)
                            .small()
                            .color(ui::theme::MUTED_TEXT),
                    );
                });
            });
        });

        // Central panel: picker on top, estimate below.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::picker::render(ui, &mut self.state);
            ui.add_space(ui::theme::SECTION_SPACING);
            ui::panels::estimate::render(ui, &mut self.state);
        });
    }
}
