// BilPris - ui/theme.rs
//
// Colour and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for the estimate figures.
pub const PRICE_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Colour for the median figure (the headline number).
pub const MEDIAN_TEXT: Color32 = Color32::from_rgb(74, 222, 128); // Green 400

/// Colour for failure messages.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Colour for muted/secondary text (placeholders, empty results).
pub const MUTED_TEXT: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [520.0, 560.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [420.0, 480.0];
pub const SELECT_WIDTH: f32 = 260.0;
pub const FORM_ROW_SPACING: f32 = 6.0;
pub const SECTION_SPACING: f32 = 12.0;
