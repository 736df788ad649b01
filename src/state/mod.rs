// State management module
// View state, category grouping and the navigation context

/// Ordered category index
pub mod grouping;
/// Category selector from the launch route
pub mod navigation;
/// State rendered by the service menu
pub mod view_state;

pub use grouping::{distinct_categories, CategoryGroup, CategoryGroups};
pub use navigation::{NavigationContext, ALL_CATEGORIES};
pub use view_state::{ViewPhase, ViewState, FETCH_FAILURE_MESSAGE};
