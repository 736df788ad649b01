//! Service Menu GUI Library
//!
//! Fetches a catalog of services, groups them by category and renders them
//! with category navigation and a detail modal.
//! The desktop binary is in `src/main.rs`.

pub mod catalog;
pub mod config;
pub mod controller;
/// View state, category grouping and the navigation context
pub mod state;
/// egui rendering of the service menu
pub mod ui;
