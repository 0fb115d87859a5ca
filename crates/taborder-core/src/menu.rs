//! # Menu Selection
//!
//! Builds the category buttons of the navigation bar and forwards clicks to
//! the parent. The selected category is owned by the parent; nothing here
//! stores it.
//!
//! ```text
//!   selected = Some(7), categories = [1 "Drinks", 7 "Mains"]
//!
//!   [ All Menu ]  [ Drinks ]  [*Mains*]
//!     None         Some(1)     Some(7)   ◄── highlighted iff target == selected
//! ```
//!
//! An empty or not-yet-fetched category list renders only the "all" button.

use serde::Serialize;
use ts_rs::TS;

use crate::locale::NavLocale;
use crate::types::{Category, CategoryId};

/// One button of the category strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuButton {
    /// Category the button selects; `None` is the "all" button.
    pub target: Option<CategoryId>,
    pub label: String,
    pub highlighted: bool,
}

impl MenuButton {
    /// Forwards a click to the parent's selection callback.
    ///
    /// A click has no other effect.
    pub fn click<F>(&self, on_category_select: F)
    where
        F: FnOnce(Option<CategoryId>),
    {
        on_category_select(self.target);
    }
}

/// The category strip: the "all" button followed by one button per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MenuBar {
    pub buttons: Vec<MenuButton>,
}

impl MenuBar {
    /// Builds the strip for the current selection.
    pub fn render(
        categories: &[Category],
        selected: Option<CategoryId>,
        locale: &NavLocale,
    ) -> Self {
        let all = MenuButton {
            target: None,
            label: locale.all_menu.to_string(),
            highlighted: selected.is_none(),
        };

        let buttons = std::iter::once(all)
            .chain(categories.iter().map(|c| MenuButton {
                target: Some(c.category_id),
                label: c.category_name.clone(),
                highlighted: selected == Some(c.category_id),
            }))
            .collect();

        MenuBar { buttons }
    }

    /// The "all" button.
    pub fn all_button(&self) -> Option<&MenuButton> {
        self.buttons.first()
    }

    /// Button for a target, if rendered.
    pub fn button(&self, target: Option<CategoryId>) -> Option<&MenuButton> {
        self.buttons.iter().find(|b| b.target == target)
    }

    /// Buttons currently highlighted.
    pub fn highlighted(&self) -> impl Iterator<Item = &MenuButton> {
        self.buttons.iter().filter(|b| b.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageCode;

    fn categories() -> Vec<Category> {
        vec![Category::new(1, "Drinks"), Category::new(7, "Mains")]
    }

    fn en() -> &'static NavLocale {
        NavLocale::for_language(LanguageCode::En)
    }

    #[test]
    fn test_highlights_only_selected_category() {
        let bar = MenuBar::render(&categories(), Some(CategoryId(7)), en());

        let lit: Vec<_> = bar.highlighted().map(|b| b.target).collect();
        assert_eq!(lit, vec![Some(CategoryId(7))]);
    }

    #[test]
    fn test_null_selection_highlights_all_button() {
        let bar = MenuBar::render(&categories(), None, en());

        let lit: Vec<_> = bar.highlighted().map(|b| b.target).collect();
        assert_eq!(lit, vec![None]);
        assert_eq!(bar.all_button().unwrap().label, "All Menu");
    }

    #[test]
    fn test_empty_list_renders_only_all_button() {
        let bar = MenuBar::render(&[], Some(CategoryId(3)), en());
        assert_eq!(bar.buttons.len(), 1);
        assert_eq!(bar.buttons[0].target, None);
        // Selection points at a category that is not rendered: nothing lit
        assert_eq!(bar.highlighted().count(), 0);
    }

    #[test]
    fn test_buttons_keep_backend_order() {
        let cats = vec![Category::new(9, "Desserts"), Category::new(2, "Starters")];
        let bar = MenuBar::render(&cats, None, en());
        let labels: Vec<_> = bar.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["All Menu", "Desserts", "Starters"]);
    }

    #[test]
    fn test_click_forwards_target() {
        let bar = MenuBar::render(&categories(), None, en());

        let mut picked = None;
        bar.button(Some(CategoryId(1))).unwrap().click(|id| picked = Some(id));
        assert_eq!(picked, Some(Some(CategoryId(1))));

        // The bar itself is unchanged by a click
        assert!(bar.all_button().unwrap().highlighted);
    }
}
