// BilPris - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and serde only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod model;
pub mod select;
