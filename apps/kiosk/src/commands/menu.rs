//! # Menu Commands
//!
//! Rendering the navigation bar and reacting to category clicks and tenant
//! changes.

use tracing::debug;

use crate::error::ApiError;
use crate::state::NavState;
use taborder_core::{CategoryId, CompanyId, LanguageCode, NavView};

/// Renders the current view.
///
/// While the admin page is open this is `{ "kind": "admin_page" }` and the
/// bar is not rendered at all.
pub fn get_nav_view(nav: &NavState) -> NavView {
    debug!("get_nav_view command");
    nav.view()
}

/// Category button click. `None` is the "all" button.
///
/// The click goes through the rendered button, which forwards it to the
/// page; the returned view reflects whatever the page reports back.
pub fn select_category(nav: &NavState, category_id: Option<i32>) -> Result<NavView, ApiError> {
    debug!(?category_id, "select_category command");
    if !nav.click_category(category_id.map(CategoryId)) {
        let id = category_id.map_or_else(|| "all".to_string(), |id| id.to_string());
        return Err(ApiError::not_found("Category", &id));
    }
    Ok(nav.view())
}

/// Switches the display language.
///
/// Accepts the canonical codes and the common aliases ("kr", "jp", "cn").
pub fn set_language(nav: &NavState, language: &str) -> Result<NavView, ApiError> {
    debug!(language = %language, "set_language command");
    let language: LanguageCode = language.parse()?;
    nav.set_language(language);
    Ok(nav.view())
}

/// Switches the tenant. An empty or missing id stops all menu fetches.
pub fn set_company(nav: &NavState, company: Option<&str>) -> Result<NavView, ApiError> {
    debug!(?company, "set_company command");
    let company = match company.map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(CompanyId::new(raw)?),
        _ => None,
    };
    nav.set_company(company);
    Ok(nav.view())
}
