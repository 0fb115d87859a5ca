//! # Menu State
//!
//! Remote data behind the category bar: the category list for the current
//! (company, language) and the company's feature toggles. Both are fetched
//! once per key and rendered with defaults until they resolve.

use std::sync::Arc;

use taborder_core::{Category, CompanyId, FeatureToggles, LanguageCode, MenuKey};
use taborder_remote::{FetchState, KeyedFetcher, MenuSource};
use tokio::sync::watch;
use tracing::debug;

pub type CategoryFetch = FetchState<MenuKey, Vec<Category>>;
pub type ToggleFetch = FetchState<CompanyId, FeatureToggles>;

/// Fetchers for the category bar.
pub struct MenuState {
    source: Arc<dyn MenuSource>,
    categories: KeyedFetcher<MenuKey, Vec<Category>>,
    toggles: KeyedFetcher<CompanyId, FeatureToggles>,
}

impl MenuState {
    pub fn new(source: Arc<dyn MenuSource>) -> Self {
        MenuState {
            source,
            categories: KeyedFetcher::new("categories"),
            toggles: KeyedFetcher::new("toggles"),
        }
    }

    /// Requests data for the given tenant.
    ///
    /// Unchanged keys are not refetched. Without a company nothing is
    /// requested and both data sets fall back to their defaults.
    pub fn sync(&mut self, company: Option<&CompanyId>, language: LanguageCode) {
        let Some(company) = company else {
            debug!("No company configured, skipping menu fetches");
            self.categories.clear();
            self.toggles.clear();
            return;
        };

        let source = self.source.clone();
        self.categories
            .request(MenuKey::new(company.clone(), language), move |key| async move {
                source.categories(&key.company, key.language).await
            });

        let source = self.source.clone();
        self.toggles.request(company.clone(), move |company| async move {
            source.toggles(&company).await
        });
    }

    /// Resolved categories, empty while loading or after a failure.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.state().value_or_default()
    }

    /// Resolved toggles, all off while loading or after a failure.
    pub fn toggles(&self) -> FeatureToggles {
        self.toggles.state().value_or_default()
    }

    pub fn subscribe_categories(&self) -> watch::Receiver<CategoryFetch> {
        self.categories.subscribe()
    }

    pub fn subscribe_toggles(&self) -> watch::Receiver<ToggleFetch> {
        self.toggles.subscribe()
    }
}

impl std::fmt::Debug for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuState")
            .field("categories", &self.categories.key())
            .field("toggles", &self.toggles.key())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::StaticSource;
    use taborder_core::CategoryId;

    fn company() -> CompanyId {
        CompanyId::new("bistro-7").unwrap()
    }

    #[tokio::test]
    async fn test_defaults_until_resolved() {
        let menu = MenuState::new(Arc::new(StaticSource::default()));
        assert!(menu.categories().is_empty());
        assert!(!menu.toggles().is_toggle_counter_on);
    }

    #[tokio::test]
    async fn test_sync_fetches_both() {
        let source = Arc::new(StaticSource::with_menu(
            vec![Category::new(1, "Mains"), Category::new(2, "Drinks")],
            true,
        ));
        let mut menu = MenuState::new(source.clone());
        menu.sync(Some(&company()), LanguageCode::En);

        let mut categories = menu.subscribe_categories();
        let mut toggles = menu.subscribe_toggles();
        categories.wait_for(|s| !s.is_loading()).await.unwrap();
        toggles.wait_for(|s| !s.is_loading()).await.unwrap();

        let ids: Vec<_> = menu.categories().iter().map(|c| c.category_id).collect();
        assert_eq!(ids, vec![CategoryId(1), CategoryId(2)]);
        assert!(menu.toggles().is_toggle_counter_on);
        assert_eq!(source.category_calls(), 1);
        assert_eq!(source.toggle_calls(), 1);
    }

    #[tokio::test]
    async fn test_language_change_refetches_categories_only() {
        let source = Arc::new(StaticSource::default());
        let mut menu = MenuState::new(source.clone());

        menu.sync(Some(&company()), LanguageCode::En);
        menu.subscribe_categories()
            .wait_for(|s| !s.is_loading())
            .await
            .unwrap();
        menu.subscribe_toggles()
            .wait_for(|s| !s.is_loading())
            .await
            .unwrap();

        menu.sync(Some(&company()), LanguageCode::Ko);
        menu.subscribe_categories()
            .wait_for(|s| !s.is_loading())
            .await
            .unwrap();

        assert_eq!(source.category_calls(), 2);
        assert_eq!(source.toggle_calls(), 1);
    }

    #[tokio::test]
    async fn test_no_company_requests_nothing() {
        let source = Arc::new(StaticSource::default());
        let mut menu = MenuState::new(source.clone());
        menu.sync(None, LanguageCode::En);

        assert!(matches!(
            *menu.subscribe_categories().borrow(),
            FetchState::Idle
        ));
        assert_eq!(source.category_calls(), 0);
        assert_eq!(source.toggle_calls(), 0);
    }
}
