// Navigation context
// Read-only view of the category selector in the launch route

use reqwest::Url;

/// Category selector value meaning "no particular category"
pub const ALL_CATEGORIES: &str = "All";

/// Base used to resolve relative routes such as `/services?category=Food`
const ROUTE_BASE: &str = "app://menu/";

/// Navigation state the view reads its category selector from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    category: Option<String>,
}

impl NavigationContext {
    /// Context with an explicit category selector
    pub fn with_category(category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            category: (!category.is_empty()).then_some(category),
        }
    }

    /// Parse the `category` query parameter out of a route
    ///
    /// Unparseable routes yield the default context.
    pub fn from_route(route: &str) -> Self {
        let url = match Url::parse(ROUTE_BASE).and_then(|base| base.join(route)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(route = %route, error = %e, "Ignoring unparseable route");
                return Self::default();
            }
        };

        let category = url
            .query_pairs()
            .find(|(key, _)| key == "category")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        Self { category }
    }

    /// Selected category, or [`ALL_CATEGORIES`] when none is given
    pub fn selected_category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}
