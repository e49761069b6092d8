// BilPris - app/state.rs
//
// Application state management. Holds the current selections, the
// dependent model select, the estimate form and its display state.
// Owned by the eframe::App implementation.
//
// Panels request work by setting the `pending_*` intent fields; gui.rs
// consumes them each frame and drives the fetch managers. The loading
// states themselves are entered synchronously here, the moment the
// user's change happens, so the placeholder is already visible on the
// frame the request starts.

use crate::core::model::{EstimateRequest, Fuel, Gearbox, PriceEstimate};
use crate::core::select::ModelSelect;
use crate::util::constants;

/// Rendered state of the estimate section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EstimateView {
    /// Nothing requested yet (or invalidated by a selection change).
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// Figures received.
    Ready(PriceEstimate),

    /// The backend found no listings; carries its message verbatim.
    NoListings(String),

    /// The request failed or was rejected; carries the detail shown to
    /// the user (the log has the full cause).
    Failed(String),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the estimate backend.
    pub server_url: String,

    /// Currently chosen brand (None until the user picks one).
    pub selected_brand: Option<String>,

    /// The dependent model select.
    pub model_select: ModelSelect,

    /// Model year field of the estimate form.
    pub year: i32,

    /// Mileage field of the estimate form (km).
    pub km: u32,

    /// Fuel field of the estimate form.
    pub fuel: Fuel,

    /// Gearbox field of the estimate form.
    pub gearbox: Gearbox,

    /// Rendered state of the estimate section.
    pub estimate: EstimateView,

    /// Brand whose model list should be fetched; set by the picker panel,
    /// consumed by gui.rs each frame.
    pub pending_model_fetch: Option<String>,

    /// Estimate request to issue; set by the estimate panel, consumed by
    /// gui.rs each frame.
    pub pending_estimate: Option<EstimateRequest>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state pointing at the given backend.
    pub fn new(server_url: String, debug_mode: bool) -> Self {
        Self {
            server_url,
            selected_brand: None,
            model_select: ModelSelect::default(),
            year: constants::DEFAULT_YEAR,
            km: constants::DEFAULT_KM,
            fuel: Fuel::default(),
            gearbox: Gearbox::default(),
            estimate: EstimateView::default(),
            pending_model_fetch: None,
            pending_estimate: None,
            status_message: "Klar. Velg et bilmerke for å starte.".to_string(),
            debug_mode,
        }
    }

    /// Handle a brand change: enter the loading state immediately and
    /// queue exactly one model-list request. Any displayed estimate no
    /// longer matches the selection and is discarded.
    pub fn on_brand_selected(&mut self, brand: String) {
        self.model_select.begin_loading();
        self.estimate = EstimateView::Idle;
        self.status_message = format!("Henter modeller for {brand}...");
        self.selected_brand = Some(brand.clone());
        self.pending_model_fetch = Some(brand);
    }

    /// Handle a model choice. Any displayed estimate is for the previous
    /// model and is discarded.
    pub fn on_model_selected(&mut self, index: usize) {
        self.model_select.select(index);
        self.estimate = EstimateView::Idle;
        if let Some(entry) = self.model_select.selected_entry() {
            self.status_message = format!("Valgt modell: {}.", entry.name);
        }
    }

    /// Build an estimate request from the current form, if both a brand
    /// and a model are chosen.
    pub fn estimate_request(&self) -> Option<EstimateRequest> {
        let brand = self.selected_brand.clone()?;
        let model = self.model_select.selected_entry()?.value.clone();
        Some(EstimateRequest {
            brand,
            model,
            year: self.year,
            km: self.km,
            fuel: self.fuel,
            gearbox: self.gearbox,
        })
    }

    /// Enter the estimate loading state and queue the request.
    /// No-op if the form is incomplete.
    pub fn begin_estimate(&mut self) {
        if let Some(request) = self.estimate_request() {
            self.estimate = EstimateView::Loading;
            self.status_message = format!(
                "Beregner prisestimat for {} {}...",
                request.brand, request.model
            );
            self.pending_estimate = Some(request);
        }
    }

    /// Apply a decoded estimate body to the display state.
    pub fn apply_estimate_response(&mut self, response: crate::core::model::EstimateResponse) {
        if let Some(figures) = response.price_estimate {
            self.estimate = EstimateView::Ready(figures);
            self.status_message = "Prisestimat klart.".to_string();
        } else if let Some(message) = response.message {
            self.status_message = "Ingen treff for angitte kriterier.".to_string();
            self.estimate = EstimateView::NoListings(message);
        } else if let Some(error) = response.error {
            self.status_message = "Tjeneren avviste forespørselen.".to_string();
            self.estimate = EstimateView::Failed(error);
        } else {
            self.status_message = "Uventet svar fra tjeneren.".to_string();
            self.estimate = EstimateView::Failed("Uventet svar fra tjeneren".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{EstimateResponse, ModelEntry};

    fn state_with_selection() -> AppState {
        let mut state = AppState::new("http://127.0.0.1:5000".to_string(), false);
        state.on_brand_selected("Toyota".to_string());
        state.model_select.apply_models(vec![ModelEntry {
            value: "corolla".to_string(),
            name: "Corolla".to_string(),
        }]);
        state.on_model_selected(0);
        state
    }

    #[test]
    fn test_brand_change_enters_loading_and_queues_one_fetch() {
        let mut state = AppState::new("http://127.0.0.1:5000".to_string(), false);
        state.on_brand_selected("Volvo".to_string());

        assert!(state.model_select.is_loading());
        assert_eq!(state.pending_model_fetch.as_deref(), Some("Volvo"));
        assert_eq!(state.selected_brand.as_deref(), Some("Volvo"));
    }

    #[test]
    fn test_estimate_request_requires_brand_and_model() {
        let mut state = AppState::new("http://127.0.0.1:5000".to_string(), false);
        assert!(state.estimate_request().is_none());

        state.on_brand_selected("Toyota".to_string());
        assert!(state.estimate_request().is_none());

        state.model_select.apply_models(vec![ModelEntry {
            value: "corolla".to_string(),
            name: "Corolla".to_string(),
        }]);
        // Placeholder still pre-selected: not a valid choice.
        assert!(state.estimate_request().is_none());

        state.on_model_selected(0);
        let request = state.estimate_request().unwrap();
        assert_eq!(request.brand, "Toyota");
        assert_eq!(request.model, "corolla");
    }

    #[test]
    fn test_brand_change_discards_estimate() {
        let mut state = state_with_selection();
        state.apply_estimate_response(EstimateResponse {
            price_estimate: Some(PriceEstimate {
                min: 1,
                max: 4,
                median: 2,
                average: 3,
            }),
            ..Default::default()
        });
        assert!(matches!(state.estimate, EstimateView::Ready(_)));

        state.on_brand_selected("Volvo".to_string());
        assert_eq!(state.estimate, EstimateView::Idle);
    }

    #[test]
    fn test_estimate_response_mapping() {
        let mut state = state_with_selection();

        state.apply_estimate_response(EstimateResponse {
            message: Some("Ingen priser funnet".to_string()),
            ..Default::default()
        });
        assert_eq!(
            state.estimate,
            EstimateView::NoListings("Ingen priser funnet".to_string())
        );

        state.apply_estimate_response(EstimateResponse {
            error: Some("Ugyldig merke eller modell".to_string()),
            ..Default::default()
        });
        assert_eq!(
            state.estimate,
            EstimateView::Failed("Ugyldig merke eller modell".to_string())
        );

        state.apply_estimate_response(EstimateResponse::default());
        assert!(matches!(state.estimate, EstimateView::Failed(_)));
    }
}
