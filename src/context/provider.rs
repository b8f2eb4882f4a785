//! Session-scoped theme and application context.
//!
//! [`AppContext`] is created once per session and handed to whatever needs
//! it; there is no global. User interactions arrive as [`ContextEvent`]s.
//! The context updates its [`ContextSnapshot`], persists explicit choices to
//! its [`PreferenceStore`] (best-effort), notifies subscribers, and returns the
//! [`Action`]s its collaborators must carry out: flipping the document-level
//! style flag and navigating.
//!
//! ```text
//! ContextEvent → handle_event → snapshot change → subscribers
//!                     │                 │
//!                     ▼                 ▼
//!             PreferenceStore       Vec<Action> → document / router
//! ```

use super::observe::{Observable, SubscriptionId};
use super::resolve::{resolve_theme, stored_preference, OsThemeSignal};
use crate::domain::{AppId, ThemeMode};
use crate::storage::{PreferenceStore, PRIMARY_APP_KEY, THEME_KEY};
use serde::Serialize;

/// The shared presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    /// Active light/dark theme.
    pub theme: ThemeMode,
    /// Application the current route belongs to.
    pub app: AppId,
}

/// User interactions and navigation that affect the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextEvent {
    /// The theme switch was flipped.
    ToggleTheme,
    /// A theme was picked explicitly.
    SetTheme(ThemeMode),
    /// The router moved to a new path.
    RouteChanged { path: String },
    /// An app was picked in the app switcher.
    SelectApp(AppId),
}

/// Side effects for collaborators outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Set or clear the document-level dark style flag.
    ApplyDocumentTheme { dark: bool },
    /// Navigate the client-side router.
    Navigate { path: String },
}

/// Theme and app identity for one session.
pub struct AppContext<'a, S: PreferenceStore> {
    store: S,
    snapshot: Observable<'a, ContextSnapshot>,
}

impl<'a, S: PreferenceStore> AppContext<'a, S> {
    /// Creates the context at application mount.
    ///
    /// The theme resolves from the stored choice, then `os`, then `fallback`.
    /// Nothing is written: only explicit theme changes are persisted, so an
    /// unchosen theme keeps following the OS on later mounts. The app comes
    /// from `route`. Returns the context and the actions that apply the
    /// initial theme.
    pub fn mount(
        store: S,
        route: &str,
        os: &dyn OsThemeSignal,
        fallback: ThemeMode,
    ) -> (Self, Vec<Action>) {
        let _span = tracing::debug_span!("context_mount", route = %route).entered();

        let theme = resolve_theme(&store, os, fallback);
        let app = AppId::from_path(route);

        tracing::debug!(theme = %theme, app = %app, "context mounted");

        let context = Self {
            store,
            snapshot: Observable::new(ContextSnapshot { theme, app }),
        };
        (context, vec![Action::ApplyDocumentTheme { dark: theme.is_dark() }])
    }

    /// Current theme and app.
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot {
        *self.snapshot.get()
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.snapshot.get().theme
    }

    /// Current application.
    #[must_use]
    pub fn app(&self) -> AppId {
        self.snapshot.get().app
    }

    /// The last app picked explicitly in the app switcher, if any.
    #[must_use]
    pub fn primary_app(&self) -> Option<AppId> {
        stored_preference(&self.store, PRIMARY_APP_KEY)
    }

    /// The backing preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Registers a listener that runs whenever the snapshot changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&ContextSnapshot) + 'a) -> SubscriptionId {
        self.snapshot.subscribe(listener)
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.snapshot.unsubscribe(id)
    }

    /// Processes an event and returns the actions collaborators must run.
    pub fn handle_event(&mut self, event: &ContextEvent) -> Vec<Action> {
        let _span = tracing::debug_span!("context_event", event = ?event).entered();

        match event {
            ContextEvent::ToggleTheme => self.set_theme(self.theme().toggled()),
            ContextEvent::SetTheme(theme) => self.set_theme(*theme),
            ContextEvent::RouteChanged { path } => {
                let app = AppId::from_path(path);
                if self.snapshot.update(|s| s.app = app) {
                    tracing::debug!(app = %app, "app changed by navigation");
                }
                vec![]
            }
            ContextEvent::SelectApp(app) => {
                let app = *app;
                persist(&mut self.store, PRIMARY_APP_KEY, app.as_str());
                self.snapshot.update(|s| s.app = app);
                tracing::debug!(app = %app, "app selected");
                vec![Action::Navigate {
                    path: app.root_path().to_string(),
                }]
            }
        }
    }

    fn set_theme(&mut self, theme: ThemeMode) -> Vec<Action> {
        if !self.snapshot.update(|s| s.theme = theme) {
            return vec![];
        }
        persist(&mut self.store, THEME_KEY, theme.as_str());
        tracing::debug!(theme = %theme, "theme changed");
        vec![Action::ApplyDocumentTheme { dark: theme.is_dark() }]
    }
}

impl<S: PreferenceStore + std::fmt::Debug> std::fmt::Debug for AppContext<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("store", &self.store)
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

/// Fire-and-forget write; a failure leaves the previous stored value.
fn persist<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key = %key, value = %value, error = %e, "failed to persist preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::resolve::NoOsSignal;
    use crate::storage::MemoryPreferenceStore;
    use std::cell::RefCell;

    fn mount(store: MemoryPreferenceStore, route: &str) -> AppContext<'static, MemoryPreferenceStore> {
        AppContext::mount(store, route, &NoOsSignal, ThemeMode::Light).0
    }

    #[test]
    fn mount_applies_stored_theme() {
        let store = MemoryPreferenceStore::with_entries([(THEME_KEY, "dark")]);
        let (context, actions) =
            AppContext::mount(store, "/mimir/racks", &ThemeMode::Light, ThemeMode::Light);

        assert_eq!(context.theme(), ThemeMode::Dark);
        assert_eq!(context.app(), AppId::Mimir);
        assert_eq!(actions, vec![Action::ApplyDocumentTheme { dark: true }]);
    }

    #[test]
    fn mount_does_not_persist_unchosen_theme() {
        let (context, actions) =
            AppContext::mount(MemoryPreferenceStore::new(), "/", &ThemeMode::Dark, ThemeMode::Light);

        assert_eq!(actions, vec![Action::ApplyDocumentTheme { dark: true }]);
        assert_eq!(context.store().get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn untouched_theme_follows_os_on_remount() {
        let (context, _) =
            AppContext::mount(MemoryPreferenceStore::new(), "/", &ThemeMode::Dark, ThemeMode::Light);
        assert_eq!(context.theme(), ThemeMode::Dark);

        let store = context.store().clone();
        let (context, actions) = AppContext::mount(store, "/", &ThemeMode::Light, ThemeMode::Light);
        assert_eq!(context.theme(), ThemeMode::Light);
        assert_eq!(actions, vec![Action::ApplyDocumentTheme { dark: false }]);
    }

    #[test]
    fn toggle_persists_and_flags_document() {
        let mut context = mount(MemoryPreferenceStore::new(), "/");

        let actions = context.handle_event(&ContextEvent::ToggleTheme);
        assert_eq!(actions, vec![Action::ApplyDocumentTheme { dark: true }]);
        assert_eq!(context.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        context.handle_event(&ContextEvent::ToggleTheme);
        assert_eq!(context.theme(), ThemeMode::Light);
        assert_eq!(context.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn setting_current_theme_is_a_noop() {
        let mut context = mount(MemoryPreferenceStore::new(), "/");
        assert!(context
            .handle_event(&ContextEvent::SetTheme(ThemeMode::Light))
            .is_empty());
    }

    #[test]
    fn failed_writes_do_not_block_transitions() {
        let store = MemoryPreferenceStore::with_entries([(THEME_KEY, "light")]).read_only();
        let mut context = mount(store, "/");

        let actions = context.handle_event(&ContextEvent::SetTheme(ThemeMode::Dark));
        assert_eq!(context.theme(), ThemeMode::Dark);
        assert_eq!(actions.len(), 1);
        assert_eq!(context.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn selecting_app_navigates_and_persists() {
        let mut context = mount(MemoryPreferenceStore::new(), "/inventory");
        assert_eq!(context.app(), AppId::Oculus);
        assert_eq!(context.primary_app(), None);

        let actions = context.handle_event(&ContextEvent::SelectApp(AppId::Helius));
        assert_eq!(
            actions,
            vec![Action::Navigate {
                path: "/helius".to_string()
            }]
        );
        assert_eq!(context.app(), AppId::Helius);
        assert_eq!(context.primary_app(), Some(AppId::Helius));
    }

    #[test]
    fn route_changes_derive_app_without_persisting() {
        let mut context = mount(MemoryPreferenceStore::new(), "/");

        assert!(context
            .handle_event(&ContextEvent::RouteChanged {
                path: "/flow/orders".to_string()
            })
            .is_empty());
        assert_eq!(context.app(), AppId::Flow);
        assert_eq!(context.primary_app(), None);
    }

    #[test]
    fn subscribers_see_each_change_once() {
        let seen = RefCell::new(Vec::new());
        let mut context = AppContext::mount(
            MemoryPreferenceStore::new(),
            "/",
            &NoOsSignal,
            ThemeMode::Light,
        )
        .0;
        let id = context.subscribe(|s| seen.borrow_mut().push(*s));

        context.handle_event(&ContextEvent::ToggleTheme);
        context.handle_event(&ContextEvent::RouteChanged {
            path: "/".to_string(),
        });
        context.handle_event(&ContextEvent::RouteChanged {
            path: "/hyperion".to_string(),
        });
        context.unsubscribe(id);
        context.handle_event(&ContextEvent::ToggleTheme);

        assert_eq!(
            *seen.borrow(),
            vec![
                ContextSnapshot {
                    theme: ThemeMode::Dark,
                    app: AppId::Oculus
                },
                ContextSnapshot {
                    theme: ThemeMode::Dark,
                    app: AppId::Hyperion
                },
            ]
        );
    }
}
