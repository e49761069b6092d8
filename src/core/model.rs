// BilPris - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI.
// These types are the shared vocabulary across all layers: the wire
// shapes of the backend's two endpoints, the selection-form options,
// and the progress messages background fetch threads send to the UI.

use serde::Deserialize;

// =============================================================================
// Model list (wire shape of GET /models)
// =============================================================================

/// One selectable model for the chosen brand.
///
/// `value` is the option's underlying identifier as the backend knows it;
/// `name` is the human-readable label shown to the user. Both are carried
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelEntry {
    pub value: String,
    pub name: String,
}

/// Success body of the model-list endpoint.
///
/// A body without a `models` field deserialises to an empty list; both are
/// rendered as "no models". Unknown fields (the backend echoes `brand`)
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelListResponse {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

// =============================================================================
// Price estimate (wire shape of GET /estimate)
// =============================================================================

/// Aggregated listing prices for the requested vehicle, in NOK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceEstimate {
    pub min: i64,
    pub max: i64,
    pub median: i64,
    pub average: i64,
}

/// Body of the estimate endpoint. Exactly one of the three optional
/// fields is expected to be present:
///   - `price_estimate` on success,
///   - `message` when no listings matched the criteria,
///   - `error` on a rejected request (unknown brand/model, missing params).
///
/// The echoed request fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimateResponse {
    pub price_estimate: Option<PriceEstimate>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Parameters of one estimate request, gathered from the selection form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRequest {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: u32,
    pub fuel: Fuel,
    pub gearbox: Gearbox,
}

impl EstimateRequest {
    /// Query parameters in the order the backend documents them.
    pub fn query_params(&self) -> [(&'static str, String); 6] {
        [
            ("brand", self.brand.clone()),
            ("model", self.model.clone()),
            ("year", self.year.to_string()),
            ("km", self.km.to_string()),
            ("fuel", self.fuel.param().to_string()),
            ("gearbox", self.gearbox.param().to_string()),
        ]
    }
}

// =============================================================================
// Form options
// =============================================================================

/// Fuel types the backend's listing search understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fuel {
    #[default]
    Bensin,
    Diesel,
    El,
    Hybrid,
}

impl Fuel {
    /// All variants in display order.
    pub fn all() -> &'static [Fuel] {
        &[Fuel::Bensin, Fuel::Diesel, Fuel::El, Fuel::Hybrid]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Fuel::Bensin => "Bensin",
            Fuel::Diesel => "Diesel",
            Fuel::El => "Elektrisk",
            Fuel::Hybrid => "Hybrid",
        }
    }

    /// Query parameter value the backend expects.
    pub fn param(&self) -> &'static str {
        match self {
            Fuel::Bensin => "bensin",
            Fuel::Diesel => "diesel",
            Fuel::El => "el",
            Fuel::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Gearbox types the backend's listing search understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gearbox {
    #[default]
    Manuell,
    Automat,
}

impl Gearbox {
    /// All variants in display order.
    pub fn all() -> &'static [Gearbox] {
        &[Gearbox::Manuell, Gearbox::Automat]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Gearbox::Manuell => "Manuell",
            Gearbox::Automat => "Automat",
        }
    }

    /// Query parameter value the backend expects.
    pub fn param(&self) -> &'static str {
        match self {
            Gearbox::Manuell => "manuell",
            Gearbox::Automat => "automat",
        }
    }
}

impl std::fmt::Display for Gearbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Fetch progress (for UI updates)
// =============================================================================

/// Outcome of one model-list request, sent from the fetch thread to the
/// UI thread. The loading state is entered synchronously by the UI when
/// the request starts, so only the resolution is messaged.
#[derive(Debug, Clone)]
pub enum ModelsProgress {
    /// The request resolved and the body had the expected shape.
    /// `models` may be empty.
    Completed {
        brand: String,
        models: Vec<ModelEntry>,
    },

    /// The request failed in transport, or the body was unreadable or
    /// not JSON. The detail has already been logged by the fetch thread.
    Failed { brand: String, error: String },
}

/// Outcome of one estimate request.
#[derive(Debug, Clone)]
pub enum EstimateProgress {
    /// The request resolved to a parseable estimate body (which may still
    /// carry a server-side `message` or `error` instead of figures).
    Completed { response: EstimateResponse },

    /// Transport or parse failure. Detail logged by the fetch thread.
    Failed { error: String },
}

// =============================================================================
// Formatting
// =============================================================================

/// Format an NOK amount with thousands separators, e.g. `123 456 kr`.
pub fn format_nok(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped} kr")
    } else {
        format!("{grouped} kr")
    }
}
