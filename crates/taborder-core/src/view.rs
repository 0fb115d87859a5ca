//! # Navigation View Model
//!
//! What the frontend draws for a given session state.
//!
//! ## Rendering Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  overlay == AdminPin ──► NavView::AdminPage { language }               │
//! │                          (navigation bar not rendered at all)          │
//! │                                                                         │
//! │  otherwise ──────────► NavView::NavBar                                 │
//! │                          ├── menu (category strip)                     │
//! │                          ├── waiter overlay   if overlay == Waiter     │
//! │                          ├── bill-out overlay (always mounted,         │
//! │                          │     is_open iff overlay == Bill)            │
//! │                          └── toast            (always mounted)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::locale::NavLocale;
use crate::menu::MenuBar;
use crate::notification::{NotificationChannel, NotificationId};
use crate::overlay::OverlayState;
use crate::types::{Category, CategoryId, FeatureToggles, LanguageCode};

/// Everything the view depends on, borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct ViewInput<'a> {
    pub overlay: OverlayState,
    pub language: LanguageCode,
    pub categories: &'a [Category],
    pub selected: Option<CategoryId>,
    pub toggles: FeatureToggles,
    pub notifications: &'a NotificationChannel,
}

/// Top-level view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum NavView {
    /// Admin pin page replaces the whole navigation.
    AdminPage { language: LanguageCode },
    /// Regular navigation bar.
    NavBar { bar: NavBarView },
}

/// The regular navigation bar and what sits on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavBarView {
    pub menu: MenuBar,
    pub call_waiter_label: String,
    pub bill_out_label: String,
    pub waiter_open: bool,
    pub bill_out: BillOutProps,
    pub toast: ToastView,
}

/// Props handed to the bill-out form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillOutProps {
    pub is_open: bool,
    /// Remote toggle, passed through unmodified.
    pub is_toggle_counter_on: bool,
}

/// Props handed to the toast component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToastView {
    pub id: Option<NotificationId>,
    pub message: String,
    pub is_active: bool,
    pub persistent: bool,
}

impl From<&NotificationChannel> for ToastView {
    fn from(channel: &NotificationChannel) -> Self {
        match channel.current() {
            Some(n) => ToastView {
                id: Some(n.id),
                message: n.message.clone(),
                is_active: n.active,
                persistent: n.persistent,
            },
            None => ToastView {
                id: None,
                message: String::new(),
                is_active: false,
                persistent: true,
            },
        }
    }
}

impl NavView {
    /// Renders the view for the given state.
    pub fn render(input: ViewInput<'_>) -> Self {
        if input.overlay.is_admin() {
            return NavView::AdminPage {
                language: input.language,
            };
        }

        let locale = NavLocale::for_language(input.language);
        NavView::NavBar {
            bar: NavBarView {
                menu: MenuBar::render(input.categories, input.selected, locale),
                call_waiter_label: locale.call_waiter.to_string(),
                bill_out_label: locale.bill_out.to_string(),
                waiter_open: input.overlay == OverlayState::Waiter,
                bill_out: BillOutProps {
                    is_open: input.overlay == OverlayState::Bill,
                    is_toggle_counter_on: input.toggles.is_toggle_counter_on,
                },
                toast: ToastView::from(input.notifications),
            },
        }
    }

    /// The navigation bar, unless the admin page is showing.
    pub fn nav_bar(&self) -> Option<&NavBarView> {
        match self {
            NavView::NavBar { bar } => Some(bar),
            NavView::AdminPage { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(overlay: OverlayState, notifications: &'a NotificationChannel) -> ViewInput<'a> {
        ViewInput {
            overlay,
            language: LanguageCode::En,
            categories: &[],
            selected: None,
            toggles: FeatureToggles {
                is_toggle_counter_on: true,
            },
            notifications,
        }
    }

    #[test]
    fn test_admin_page_replaces_nav_bar() {
        let channel = NotificationChannel::new();
        let mut view_input = input(OverlayState::AdminPin, &channel);
        view_input.language = LanguageCode::Ko;

        let view = NavView::render(view_input);
        assert_eq!(
            view,
            NavView::AdminPage {
                language: LanguageCode::Ko
            }
        );
        assert!(view.nav_bar().is_none());
    }

    #[test]
    fn test_waiter_overlay_on_top_of_nav_bar() {
        let channel = NotificationChannel::new();
        let view = NavView::render(input(OverlayState::Waiter, &channel));
        let bar = view.nav_bar().unwrap();
        assert!(bar.waiter_open);
        assert!(!bar.bill_out.is_open);
    }

    #[test]
    fn test_bill_out_always_mounted_with_toggle() {
        let channel = NotificationChannel::new();

        let view = NavView::render(input(OverlayState::None, &channel));
        let bar = view.nav_bar().unwrap();
        assert!(!bar.bill_out.is_open);
        assert!(bar.bill_out.is_toggle_counter_on);

        let view = NavView::render(input(OverlayState::Bill, &channel));
        assert!(view.nav_bar().unwrap().bill_out.is_open);
    }

    #[test]
    fn test_toast_defaults_and_current_message() {
        let mut channel = NotificationChannel::new();
        let toast = ToastView::from(&channel);
        assert_eq!(toast.message, "");
        assert!(!toast.is_active);
        assert!(toast.persistent);

        channel.show("Bill requested", false);
        let view = NavView::render(input(OverlayState::None, &channel));
        let toast = &view.nav_bar().unwrap().toast;
        assert_eq!(toast.message, "Bill requested");
        assert!(toast.is_active);
        assert!(!toast.persistent);
    }

    #[test]
    fn test_view_json_shape() {
        let channel = NotificationChannel::new();
        let view = NavView::render(input(OverlayState::None, &channel));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "nav_bar");
        assert_eq!(json["bar"]["billOut"]["isToggleCounterOn"], true);
        assert_eq!(json["bar"]["menu"]["buttons"][0]["label"], "All Menu");
    }
}
