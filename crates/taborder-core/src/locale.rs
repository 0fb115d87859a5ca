//! # Locale Table
//!
//! Display strings for the navigation bar, one table per [`LanguageCode`].
//! Category names come from the backend already localized; only the fixed
//! buttons live here.

use serde::Serialize;

use crate::types::LanguageCode;

/// Fixed labels of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLocale {
    /// Label of the "show every category" button.
    pub all_menu: &'static str,
    pub call_waiter: &'static str,
    pub bill_out: &'static str,
}

const EN: NavLocale = NavLocale {
    all_menu: "All Menu",
    call_waiter: "Call Waiter",
    bill_out: "Bill Out",
};

const KO: NavLocale = NavLocale {
    all_menu: "전체 메뉴",
    call_waiter: "직원 호출",
    bill_out: "계산하기",
};

const JA: NavLocale = NavLocale {
    all_menu: "全メニュー",
    call_waiter: "スタッフ呼び出し",
    bill_out: "お会計",
};

const ZH: NavLocale = NavLocale {
    all_menu: "全部菜单",
    call_waiter: "呼叫服务员",
    bill_out: "结账",
};

impl NavLocale {
    /// Returns the table for a language.
    pub const fn for_language(language: LanguageCode) -> &'static NavLocale {
        match language {
            LanguageCode::En => &EN,
            LanguageCode::Ko => &KO,
            LanguageCode::Ja => &JA,
            LanguageCode::Zh => &ZH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_labels() {
        for language in LanguageCode::ALL {
            let locale = NavLocale::for_language(language);
            assert!(!locale.all_menu.is_empty());
            assert!(!locale.call_waiter.is_empty());
            assert!(!locale.bill_out.is_empty());
        }
    }

    #[test]
    fn test_english_labels() {
        let locale = NavLocale::for_language(LanguageCode::En);
        assert_eq!(locale.all_menu, "All Menu");
        assert_eq!(locale.bill_out, "Bill Out");
    }
}
