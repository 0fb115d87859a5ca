//! # Domain Types
//!
//! Core domain types shared by the navigation logic, the remote provider and
//! the kiosk session.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   CompanyId     │   │  LanguageCode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category_id    │   │  tenant key     │   │  En / Ko / Ja   │       │
//! │  │  category_name  │   │  (query param)  │   │  Zh             │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ FeatureToggles  │   │    MenuKey      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  toggle_counter │   │  company +      │                             │
//! │  │  (default off)  │   │  language       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::validation::{validate_company_id, ValidationResult};

// =============================================================================
// Category
// =============================================================================

/// Identifier of a menu category as assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct CategoryId(pub i32);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CategoryId {
    fn from(id: i32) -> Self {
        CategoryId(id)
    }
}

/// A menu category, in the order the backend returns them.
///
/// Wire format: `{ "categoryId": 7, "categoryName": "Mains" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Category {
            category_id: CategoryId(id),
            category_name: name.into(),
        }
    }
}

// =============================================================================
// Company
// =============================================================================

/// Tenant identifier that scopes remote category and toggle data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct CompanyId(String);

impl CompanyId {
    /// Creates a company id after trimming and validating it.
    pub fn new(id: impl AsRef<str>) -> ValidationResult<Self> {
        let id = id.as_ref().trim();
        validate_company_id(id)?;
        Ok(CompanyId(id.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Language
// =============================================================================

/// Languages the navigation bar ships display strings for.
///
/// The set is closed: every variant has a locale table, so a missing
/// translation cannot happen at runtime. Unknown codes are rejected when
/// parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LanguageCode {
    #[default]
    En,
    Ko,
    Ja,
    Zh,
}

impl LanguageCode {
    /// All supported languages.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::En,
        LanguageCode::Ko,
        LanguageCode::Ja,
        LanguageCode::Zh,
    ];

    /// Code sent to the backend in the `language` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ko => "ko",
            LanguageCode::Ja => "ja",
            LanguageCode::Zh => "zh",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(LanguageCode::En),
            "ko" | "kr" => Ok(LanguageCode::Ko),
            "ja" | "jp" => Ok(LanguageCode::Ja),
            "zh" | "cn" => Ok(LanguageCode::Zh),
            other => Err(CoreError::UnsupportedLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// Remote Keys & Toggles
// =============================================================================

/// Request key for the category list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuKey {
    pub company: CompanyId,
    pub language: LanguageCode,
}

impl MenuKey {
    pub fn new(company: CompanyId, language: LanguageCode) -> Self {
        MenuKey { company, language }
    }
}

impl std::fmt::Display for MenuKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.company, self.language)
    }
}

/// Per-company feature toggles.
///
/// Wire format: `{ "isToggleCounterOn": true }`. A missing field reads as
/// `false`, same as a toggle that has not been fetched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeatureToggles {
    #[serde(default)]
    pub is_toggle_counter_on: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        let json = r#"[{"categoryId":1,"categoryName":"Drinks"},{"categoryId":7,"categoryName":"Mains"}]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories, vec![Category::new(1, "Drinks"), Category::new(7, "Mains")]);
    }

    #[test]
    fn test_category_ignores_extra_fields() {
        let json = r#"{"categoryId":3,"categoryName":"Sides","sortOrder":2}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.category_id, CategoryId(3));
    }

    #[test]
    fn test_company_id_is_trimmed() {
        let company = CompanyId::new("  bistro-12 ").unwrap();
        assert_eq!(company.as_str(), "bistro-12");
    }

    #[test]
    fn test_company_id_rejects_empty() {
        assert!(CompanyId::new("   ").is_err());
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<LanguageCode>().unwrap(), LanguageCode::En);
        assert_eq!("KO".parse::<LanguageCode>().unwrap(), LanguageCode::Ko);
        assert_eq!("jp".parse::<LanguageCode>().unwrap(), LanguageCode::Ja);
        assert!(matches!(
            "fr".parse::<LanguageCode>(),
            Err(CoreError::UnsupportedLanguage(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&LanguageCode::Ko).unwrap(), r#""ko""#);
    }

    #[test]
    fn test_toggles_default_off() {
        let toggles: FeatureToggles = serde_json::from_str("{}").unwrap();
        assert!(!toggles.is_toggle_counter_on);

        let toggles: FeatureToggles =
            serde_json::from_str(r#"{"isToggleCounterOn":true}"#).unwrap();
        assert!(toggles.is_toggle_counter_on);
    }
}
