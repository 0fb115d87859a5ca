//! # Menu Source
//!
//! The two read-only endpoints the navigation consumes.
//!
//! ```text
//! GET {base}/categories?company={company}&language={language}
//!     → [{ "categoryId": 1, "categoryName": "Drinks" }, ...]
//!
//! GET {base}/toggles?company={company}
//!     → { "isToggleCounterOn": true }
//! ```
//!
//! [`MenuSource`] is the seam the session depends on; [`HttpMenuSource`] is
//! the production implementation. Tests plug in in-memory sources.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use taborder_core::{Category, CompanyId, FeatureToggles, LanguageCode};

use crate::config::RemoteSettings;
use crate::error::{RemoteError, RemoteResult};

/// Provider of remote menu data.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Ordered category list for a company in a language.
    async fn categories(
        &self,
        company: &CompanyId,
        language: LanguageCode,
    ) -> RemoteResult<Vec<Category>>;

    /// Feature toggles for a company.
    async fn toggles(&self, company: &CompanyId) -> RemoteResult<FeatureToggles>;
}

/// [`MenuSource`] backed by the TabOrder HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMenuSource {
    /// Creates a source from remote settings.
    pub fn new(settings: &RemoteSettings) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| RemoteError::InvalidConfig(e.to_string()))?;

        Self::with_client(client, &settings.base_url)
    }

    /// Creates a source around an existing client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> RemoteResult<Self> {
        // A trailing slash makes Url::join append instead of replacing the
        // last path segment
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');

        Ok(HttpMenuSource {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    /// URL of the category endpoint.
    pub fn categories_url(&self, company: &CompanyId, language: LanguageCode) -> RemoteResult<Url> {
        let mut url = self.base_url.join("categories")?;
        url.query_pairs_mut()
            .append_pair("company", company.as_str())
            .append_pair("language", language.as_str());
        Ok(url)
    }

    /// URL of the toggle endpoint.
    pub fn toggles_url(&self, company: &CompanyId) -> RemoteResult<Url> {
        let mut url = self.base_url.join("toggles")?;
        url.query_pairs_mut().append_pair("company", company.as_str());
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> RemoteResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn categories(
        &self,
        company: &CompanyId,
        language: LanguageCode,
    ) -> RemoteResult<Vec<Category>> {
        let url = self.categories_url(company, language)?;
        self.get_json(url).await
    }

    async fn toggles(&self, company: &CompanyId) -> RemoteResult<FeatureToggles> {
        let url = self.toggles_url(company)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpMenuSource {
        HttpMenuSource::with_client(reqwest::Client::new(), base).unwrap()
    }

    #[test]
    fn test_categories_url() {
        let company = CompanyId::new("demo-bistro").unwrap();
        let url = source("https://tab-order-server.vercel.app/api")
            .categories_url(&company, LanguageCode::Ko)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://tab-order-server.vercel.app/api/categories?company=demo-bistro&language=ko"
        );
    }

    #[test]
    fn test_toggles_url_with_trailing_slash() {
        let company = CompanyId::new("cafe").unwrap();
        let url = source("http://localhost:3000/api/").toggles_url(&company).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/toggles?company=cafe");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = HttpMenuSource::with_client(reqwest::Client::new(), "::nope::");
        assert!(matches!(result, Err(RemoteError::InvalidUrl(_))));
    }
}
