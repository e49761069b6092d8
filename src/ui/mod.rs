// BilPris - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, the fetch managers, or any I/O.
// Panels communicate intents through flag fields on AppState.

pub mod panels;
pub mod theme;
