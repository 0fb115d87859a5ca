//! # Session State
//!
//! Everything the navigation bar keeps between commands.
//!
//! ## State Layout
//! ```text
//! NavState
//! ├── overlay:        CoordinatorState   (which overlay is open + signal)
//! ├── notifications:  NotificationState  (single toast slot + timers)
//! ├── menu:           Mutex<MenuState>   (category / toggle fetches)
//! ├── tenant:         Mutex<Tenant>      (company, display language)
//! └── host:           Arc<dyn NavHost>   (selected category, owned by page)
//! ```
//!
//! Locks are never nested except `tenant` → `menu` while resyncing, and
//! `view()` takes them one at a time.

pub mod host;
pub mod menu;
pub mod notification;
pub mod overlay;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use taborder_core::{
    CategoryId, CompanyId, LanguageCode, MenuBar, NavLocale, NavView, OverlayCommand, Transition,
    ViewInput,
};
use taborder_remote::{KioskConfig, MenuSource, RemoteResult};
use tokio::sync::watch;
use tracing::{debug, info};

pub use host::{LocalSelection, NavHost};
pub use menu::MenuState;
pub use notification::NotificationState;
pub use overlay::CoordinatorState;

/// Locks a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone)]
struct Tenant {
    company: Option<CompanyId>,
    language: LanguageCode,
}

/// Root state of one navigation bar.
pub struct NavState {
    overlay: CoordinatorState,
    notifications: NotificationState,
    menu: Mutex<MenuState>,
    tenant: Mutex<Tenant>,
    host: Arc<dyn NavHost>,
}

impl NavState {
    /// Builds the session from configuration. Nothing is fetched until
    /// [`NavState::start`].
    pub fn new(
        config: &KioskConfig,
        source: Arc<dyn MenuSource>,
        host: Arc<dyn NavHost>,
    ) -> RemoteResult<Self> {
        let tenant = Tenant {
            company: config.company()?,
            language: config.language(),
        };

        Ok(NavState {
            overlay: CoordinatorState::new(),
            notifications: NotificationState::new(config.notification.auto_dismiss()),
            menu: Mutex::new(MenuState::new(source)),
            tenant: Mutex::new(tenant),
            host,
        })
    }

    /// Issues the initial fetches. Must run inside a Tokio runtime.
    pub fn start(&self) {
        let tenant = lock(&self.tenant);
        info!(
            company = tenant.company.as_ref().map(CompanyId::as_str),
            language = %tenant.language,
            "Navigation session started"
        );
        lock(&self.menu).sync(tenant.company.as_ref(), tenant.language);
    }

    pub fn overlay(&self) -> &CoordinatorState {
        &self.overlay
    }

    /// Applies an overlay request.
    pub fn apply(&self, command: OverlayCommand) -> Transition {
        self.overlay.apply(command)
    }

    /// Read-only overlay-active signal for the embedding page.
    pub fn overlay_active(&self) -> watch::Receiver<bool> {
        self.overlay.subscribe()
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    /// Handle given to the bill-out form for reporting outcomes.
    pub fn notifier(&self) -> NotificationState {
        self.notifications.clone()
    }

    pub fn language(&self) -> LanguageCode {
        lock(&self.tenant).language
    }

    pub fn company(&self) -> Option<CompanyId> {
        lock(&self.tenant).company.clone()
    }

    /// Switches the display language and refetches the categories.
    pub fn set_language(&self, language: LanguageCode) {
        let mut tenant = lock(&self.tenant);
        if tenant.language == language {
            return;
        }
        info!(from = %tenant.language, to = %language, "Display language changed");
        tenant.language = language;
        lock(&self.menu).sync(tenant.company.as_ref(), tenant.language);
    }

    /// Switches the tenant; `None` stops fetching and clears menu data.
    pub fn set_company(&self, company: Option<CompanyId>) {
        let mut tenant = lock(&self.tenant);
        if tenant.company == company {
            return;
        }
        info!(company = company.as_ref().map(CompanyId::as_str), "Company changed");
        tenant.company = company;
        lock(&self.menu).sync(tenant.company.as_ref(), tenant.language);
    }

    /// Clicks the category button for `target` on the current bar.
    ///
    /// The click reaches the page through the button. Returns false when the
    /// bar has no such button (unknown or not yet fetched category).
    pub fn click_category(&self, target: Option<CategoryId>) -> bool {
        let categories = lock(&self.menu).categories();
        let locale = NavLocale::for_language(self.language());
        let bar = MenuBar::render(&categories, self.host.selected_category(), locale);

        match bar.button(target) {
            Some(button) => {
                button.click(|category| self.host.on_category_select(category));
                true
            }
            None => {
                debug!(?target, "No such category button, click ignored");
                false
            }
        }
    }

    /// Selected category as reported by the page.
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.host.selected_category()
    }

    /// Waits until neither menu fetch is in flight.
    pub async fn menu_settled(&self) {
        let (mut categories, mut toggles) = {
            let menu = lock(&self.menu);
            (menu.subscribe_categories(), menu.subscribe_toggles())
        };
        // Senders live in self.menu, so the channels stay open
        let _ = categories.wait_for(|s| !s.is_loading()).await;
        let _ = toggles.wait_for(|s| !s.is_loading()).await;
    }

    /// Renders the current view.
    pub fn view(&self) -> NavView {
        let language = self.language();
        let (categories, toggles) = {
            let menu = lock(&self.menu);
            (menu.categories(), menu.toggles())
        };
        let selected = self.host.selected_category();
        let overlay = self.overlay.state();

        self.notifications.with_channel(|notifications| {
            NavView::render(ViewInput {
                overlay,
                language,
                categories: &categories,
                selected,
                toggles,
                notifications,
            })
        })
    }
}

impl std::fmt::Debug for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavState")
            .field("overlay", &self.overlay)
            .field("tenant", &*lock(&self.tenant))
            .field("menu", &*lock(&self.menu))
            .finish_non_exhaustive()
    }
}
