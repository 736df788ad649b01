// Category grouping
// Derives the ordered category index from a flat list of services

use crate::catalog::ServiceRecord;
use std::collections::HashMap;

/// Services belonging to one category, in source order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    /// Category key
    pub category: &'a str,
    /// Records in this category
    pub services: Vec<&'a ServiceRecord>,
}

/// Ordered mapping from category to its services
///
/// Categories appear in the order they are first seen in the source list.
/// Borrowed from the source list, so it is rebuilt rather than stored.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups<'a> {
    groups: Vec<CategoryGroup<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> CategoryGroups<'a> {
    /// Group services by their category key
    pub fn build(services: &'a [ServiceRecord]) -> Self {
        let mut groups = Self::default();
        for service in services {
            let category = service.category_key();
            let slot = match groups.index.get(category) {
                Some(&slot) => slot,
                None => {
                    groups.groups.push(CategoryGroup {
                        category,
                        services: Vec::new(),
                    });
                    groups.index.insert(category, groups.groups.len() - 1);
                    groups.groups.len() - 1
                }
            };
            groups.groups[slot].services.push(service);
        }
        groups
    }

    /// Services for a category, if it exists
    pub fn get(&self, category: &str) -> Option<&[&'a ServiceRecord]> {
        self.index
            .get(category)
            .map(|&slot| self.groups[slot].services.as_slice())
    }

    /// Iterate groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    /// Category keys in first-seen order
    pub fn categories(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.category.to_string()).collect()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no categories
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped services
    pub fn total_services(&self) -> usize {
        self.groups.iter().map(|g| g.services.len()).sum()
    }
}

/// Distinct category keys in first-seen order
pub fn distinct_categories(services: &[ServiceRecord]) -> Vec<String> {
    CategoryGroups::build(services).categories()
}
