// BilPris - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BilPris";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "BilPris";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend endpoints
// =============================================================================

/// Base URL of the estimate backend when neither the CLI flag nor the
/// config file provides one. Matches the backend's development default.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Path of the model-list endpoint, relative to the server base URL.
pub const MODELS_PATH: &str = "/models";

/// Query parameter carrying the selected brand on the model-list endpoint.
pub const MODELS_BRAND_PARAM: &str = "brand";

/// Path of the price-estimate endpoint, relative to the server base URL.
pub const ESTIMATE_PATH: &str = "/estimate";

// =============================================================================
// Model-select placeholder text
// =============================================================================
// The backend serves the Norwegian market; the user-visible strings are
// kept in that language. Each placeholder is the sole content of
// the model select while the corresponding state is active, and is never a
// selectable choice.

/// Shown before any brand has been chosen.
pub const PLACEHOLDER_IDLE: &str = "Velg merke først";

/// Shown from the moment a brand is chosen until the model request resolves.
pub const PLACEHOLDER_LOADING: &str = "Henter modeller...";

/// Pre-selected head entry of a populated model list.
pub const PLACEHOLDER_SELECT: &str = "Velg modell";

/// Shown when the backend reports no models for the chosen brand.
pub const PLACEHOLDER_EMPTY: &str = "Ingen modeller";

/// Shown when the model request failed (transport error or unreadable body).
pub const PLACEHOLDER_ERROR: &str = "Kunne ikke hente";

// =============================================================================
// Selection form
// =============================================================================

/// Brands offered in the brand select. The backend keys its model data by
/// brand name and exposes no brand-listing endpoint, so the client ships
/// the list.
pub const BRANDS: &[&str] = &[
    "Audi",
    "BMW",
    "Citroen",
    "Ford",
    "Honda",
    "Hyundai",
    "Kia",
    "Mazda",
    "Mercedes-Benz",
    "Mitsubishi",
    "Nissan",
    "Opel",
    "Peugeot",
    "Renault",
    "Skoda",
    "Subaru",
    "Suzuki",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

/// Earliest selectable model year.
pub const MIN_YEAR: i32 = 1960;

/// Latest selectable model year.
pub const MAX_YEAR: i32 = 2026;

/// Initial value of the model-year field.
pub const DEFAULT_YEAR: i32 = 2018;

/// Upper bound of the mileage field (km).
pub const MAX_KM: u32 = 500_000;

/// Initial value of the mileage field (km).
pub const DEFAULT_KM: u32 = 100_000;

// =============================================================================
// Per-frame UI message budgets
// =============================================================================

/// Maximum number of fetch-progress messages processed by the UI update loop
/// per frame. Any remaining messages are left in the channel and processed
/// on subsequent frames. Fetches produce a single outcome message each, so
/// this bound is only reached when many overlapping requests resolve at once.
pub const MAX_FETCH_MESSAGES_PER_FRAME: usize = 32;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
