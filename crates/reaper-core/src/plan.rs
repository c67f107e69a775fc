//! Deletion plans.

use serde::{Deserialize, Serialize};

/// Ordered set of resource locators selected for removal.
///
/// An empty plan is valid and means there is nothing to clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeletionPlan {
    locators: Vec<String>,
}

impl DeletionPlan {
    /// Creates a plan from the given locators.
    #[must_use]
    pub const fn new(locators: Vec<String>) -> Self {
        Self { locators }
    }

    /// Returns the planned locators in order.
    #[must_use]
    pub fn locators(&self) -> &[String] {
        &self.locators
    }

    /// Returns the number of planned deletions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Returns true if nothing is planned for deletion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// Returns true if the plan contains the given locator.
    #[must_use]
    pub fn contains(&self, locator: &str) -> bool {
        self.locators.iter().any(|l| l == locator)
    }

    /// Iterates over the planned locators.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.locators.iter()
    }
}

impl FromIterator<String> for DeletionPlan {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DeletionPlan {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DeletionPlan {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.locators.into_iter()
    }
}
