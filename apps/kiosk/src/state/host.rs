//! # Parent Context
//!
//! The selected category belongs to the page that embeds the navigation bar
//! (it also filters the product grid). The session reads it and asks for
//! changes through [`NavHost`]; it never stores a copy.

use std::sync::Mutex;

use taborder_core::CategoryId;
use tracing::debug;

use super::lock;

/// What the embedding page provides to the navigation bar.
pub trait NavHost: Send + Sync {
    /// Currently selected category; `None` means "show all".
    fn selected_category(&self) -> Option<CategoryId>;

    /// Called when a category button is clicked.
    fn on_category_select(&self, category: Option<CategoryId>);
}

/// Host that simply remembers the last selection.
///
/// Used by the headless binary and in tests.
#[derive(Debug, Default)]
pub struct LocalSelection {
    selected: Mutex<Option<CategoryId>>,
}

impl LocalSelection {
    pub fn new(selected: Option<CategoryId>) -> Self {
        LocalSelection {
            selected: Mutex::new(selected),
        }
    }
}

impl NavHost for LocalSelection {
    fn selected_category(&self) -> Option<CategoryId> {
        *lock(&self.selected)
    }

    fn on_category_select(&self, category: Option<CategoryId>) {
        debug!(?category, "Category selected");
        *lock(&self.selected) = category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_selection_round_trip() {
        let host = LocalSelection::default();
        assert_eq!(host.selected_category(), None);

        host.on_category_select(Some(CategoryId(7)));
        assert_eq!(host.selected_category(), Some(CategoryId(7)));

        host.on_category_select(None);
        assert_eq!(host.selected_category(), None);
    }
}
