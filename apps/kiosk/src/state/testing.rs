//! In-memory menu sources for session tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use taborder_core::{Category, CompanyId, FeatureToggles, LanguageCode};
use taborder_remote::{MenuSource, RemoteError, RemoteResult};

/// Serves fixed data and counts requests.
#[derive(Debug, Default)]
pub struct StaticSource {
    categories: Vec<Category>,
    counter_on: bool,
    fail_toggles: bool,
    category_calls: AtomicUsize,
    toggle_calls: AtomicUsize,
}

impl StaticSource {
    pub fn with_menu(categories: Vec<Category>, counter_on: bool) -> Self {
        StaticSource {
            categories,
            counter_on,
            ..Default::default()
        }
    }

    /// Categories resolve; the toggle request returns HTTP 500.
    pub fn failing_toggles(categories: Vec<Category>) -> Self {
        StaticSource {
            categories,
            fail_toggles: true,
            ..Default::default()
        }
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }

    pub fn toggle_calls(&self) -> usize {
        self.toggle_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for StaticSource {
    async fn categories(
        &self,
        _company: &CompanyId,
        _language: LanguageCode,
    ) -> RemoteResult<Vec<Category>> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.clone())
    }

    async fn toggles(&self, company: &CompanyId) -> RemoteResult<FeatureToggles> {
        self.toggle_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_toggles {
            return Err(RemoteError::Status {
                url: format!("/toggles/{}", company),
                status: 500,
            });
        }
        Ok(FeatureToggles {
            is_toggle_counter_on: self.counter_on,
        })
    }
}
