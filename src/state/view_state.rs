// View state
// Everything the service menu view renders from, owned by one controller

use super::grouping::{distinct_categories, CategoryGroups};
use super::navigation::{NavigationContext, ALL_CATEGORIES};
use crate::catalog::ServiceRecord;

/// Message shown in place of the whole view when the catalog fetch fails
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to load services.";

/// What the view should display this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase<'a> {
    /// Fetch failed; show only the message
    Failed(&'a str),
    /// Fetch still pending; show only a loading indicator
    Loading,
    /// Services loaded; show navigator, sections and modal
    Ready,
}

/// State of the service menu view
///
/// Fields are private so the invariants hold:
/// - an open modal always has an active service
/// - while loading there are no services and no error
#[derive(Debug, Clone)]
pub struct ViewState {
    services: Vec<ServiceRecord>,
    loading: bool,
    error: Option<String>,
    active_service: Option<ServiceRecord>,
    modal_open: bool,
    categories: Vec<String>,
    active_category: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            loading: true,
            error: None,
            active_service: None,
            modal_open: false,
            categories: Vec::new(),
            active_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ViewState {
    /// Fresh state for a newly mounted view (loading, category "All")
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched services and derive the category list
    ///
    /// Only the first result is applied. Returns false if the state was
    /// already populated.
    pub fn load_succeeded(&mut self, services: Vec<ServiceRecord>) -> bool {
        if !self.loading {
            tracing::warn!("Ignoring catalog result for an already loaded view");
            return false;
        }
        self.categories = distinct_categories(&services);
        self.services = services;
        self.loading = false;
        true
    }

    /// Record a failed fetch
    ///
    /// Returns false if the state was already populated.
    pub fn load_failed(&mut self) -> bool {
        if !self.loading {
            tracing::warn!("Ignoring catalog failure for an already loaded view");
            return false;
        }
        self.error = Some(FETCH_FAILURE_MESSAGE.to_string());
        self.loading = false;
        true
    }

    /// Apply the navigation context's category selector
    ///
    /// Anything other than "All" overrides the active category.
    /// Returns true if the active category changed.
    pub fn sync_navigation(&mut self, navigation: &NavigationContext) -> bool {
        let selected = navigation.selected_category();
        if selected == ALL_CATEGORIES || selected == self.active_category {
            return false;
        }
        self.active_category = selected.to_string();
        true
    }

    /// Open the detail modal for a service
    pub fn open_service(&mut self, service: ServiceRecord) {
        self.active_service = Some(service);
        self.modal_open = true;
    }

    /// Close the detail modal, keeping the last active service
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Set the highlighted category
    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
    }

    /// Display phase for this frame
    pub fn phase(&self) -> ViewPhase<'_> {
        if let Some(error) = &self.error {
            ViewPhase::Failed(error)
        } else if self.loading {
            ViewPhase::Loading
        } else {
            ViewPhase::Ready
        }
    }

    /// Services grouped by category, rebuilt on each call
    pub fn groups(&self) -> CategoryGroups<'_> {
        CategoryGroups::build(&self.services)
    }

    /// All fetched services in source order
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Whether the fetch is still pending
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Service shown in (or last shown in) the detail modal
    pub fn active_service(&self) -> Option<&ServiceRecord> {
        self.active_service.as_ref()
    }

    /// Whether the detail modal is open
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Currently highlighted category
    pub fn active_category(&self) -> &str {
        &self.active_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ServiceRecord> {
        vec![
            ServiceRecord::new(1, "Food"),
            ServiceRecord::new(2, "Food"),
            ServiceRecord::new(3, "Drinks"),
        ]
    }

    #[test]
    fn test_view_state_creation() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert!(state.services().is_empty());
        assert!(state.error().is_none());
        assert!(!state.modal_open());
        assert_eq!(state.active_category(), ALL_CATEGORIES);
        assert_eq!(state.phase(), ViewPhase::Loading);
    }

    #[test]
    fn test_load_succeeded() {
        let mut state = ViewState::new();
        assert!(state.load_succeeded(sample()));

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.categories(), ["Food", "Drinks"]);
        assert_eq!(state.groups().get("Food").unwrap().len(), 2);
        assert_eq!(state.groups().get("Drinks").unwrap().len(), 1);
        assert_eq!(state.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_load_empty() {
        let mut state = ViewState::new();
        state.load_succeeded(Vec::new());

        assert!(state.categories().is_empty());
        assert!(state.groups().is_empty());
        assert_eq!(state.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_load_failed() {
        let mut state = ViewState::new();
        assert!(state.load_failed());

        assert!(!state.is_loading());
        assert!(state.services().is_empty());
        assert_eq!(state.phase(), ViewPhase::Failed(FETCH_FAILURE_MESSAGE));
    }

    #[test]
    fn test_only_first_result_is_applied() {
        let mut state = ViewState::new();
        state.load_succeeded(sample());

        assert!(!state.load_failed());
        assert!(!state.load_succeeded(Vec::new()));
        assert_eq!(state.services().len(), 3);
        assert_eq!(state.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_open_and_close_modal() {
        let mut state = ViewState::new();
        state.load_succeeded(sample());
        let record = state.services()[2].clone();

        state.open_service(record.clone());
        assert!(state.modal_open());
        assert_eq!(state.active_service(), Some(&record));

        state.close_modal();
        assert!(!state.modal_open());
        assert_eq!(state.active_service(), Some(&record)); // Kept after close
    }

    #[test]
    fn test_sync_navigation_overrides_default() {
        let mut state = ViewState::new();
        state.load_succeeded(sample());

        assert!(state.sync_navigation(&NavigationContext::with_category("Drinks")));
        assert_eq!(state.active_category(), "Drinks");
    }

    #[test]
    fn test_sync_navigation_all_is_ignored() {
        let mut state = ViewState::new();
        state.set_active_category("Food");

        assert!(!state.sync_navigation(&NavigationContext::default()));
        assert_eq!(state.active_category(), "Food");
    }
}
