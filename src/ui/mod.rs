// UI module
// Contains layout, components, and egui scrolling for the service menu

/// Reusable widgets
pub mod components;
/// Frame layout
pub mod layout;
/// Section scrolling
pub mod scroll;

pub use components::*;
pub use layout::render_app_layout;
pub use scroll::SectionScroller;
