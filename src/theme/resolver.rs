//! Theme preference resolution and persistence.

use tracing::{debug, warn};

use super::state::ThemeState;
use super::store::{open_store, PreferenceStore};
use super::system::SystemSignal;
use crate::config::ThemeConfig;
use crate::page::{Affordance, Page, RootElement, ToggleControl};

struct Elements {
    root: Box<dyn RootElement>,
    toggle: Box<dyn ToggleControl>,
}

/// Decides whether the page renders dark or light, and keeps it that way.
///
/// An explicit preference in the store always wins over the system color
/// scheme. The only way to create or change that preference is
/// [`on_toggle_requested`](Self::on_toggle_requested).
///
/// The page is probed once, at construction. If either the root element or
/// the toggle control is missing, the resolver is inert: every operation
/// becomes a no-op that neither touches the page nor writes the store.
///
/// # Example
///
/// ```rust
/// use folio::page::memory::MemoryPage;
/// use folio::{FixedSignal, MemoryStore, ThemePreferenceResolver, ThemeState};
///
/// let page = MemoryPage::complete();
/// let store = MemoryStore::new();
/// let mut resolver =
///     ThemePreferenceResolver::new(&page, store.clone(), FixedSignal::new(true));
///
/// assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);
/// assert!(page.is_dark());
///
/// resolver.on_toggle_requested();
/// assert!(!page.is_dark());
/// ```
pub struct ThemePreferenceResolver {
    key: String,
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn SystemSignal>,
    elements: Option<Elements>,
    dark_affordance: Affordance,
    light_affordance: Affordance,
    current: Option<ThemeState>,
}

impl ThemePreferenceResolver {
    /// Creates a resolver with the default key and affordances.
    pub fn new(
        page: &dyn Page,
        store: impl PreferenceStore + 'static,
        signal: impl SystemSignal + 'static,
    ) -> Self {
        Self::from_parts(
            page,
            &ThemeConfig::default(),
            Box::new(store),
            Box::new(signal),
        )
    }

    /// Creates a resolver whose store is chosen by the configured scope.
    pub fn from_config(
        page: &dyn Page,
        config: &ThemeConfig,
        signal: Box<dyn SystemSignal>,
    ) -> Self {
        let store = open_store(config.scope, config.storage_path.as_deref());
        Self::from_parts(page, config, store, signal)
    }

    /// Creates a resolver from configuration and already boxed collaborators.
    pub fn from_parts(
        page: &dyn Page,
        config: &ThemeConfig,
        store: Box<dyn PreferenceStore>,
        signal: Box<dyn SystemSignal>,
    ) -> Self {
        let elements = match (page.root(), page.theme_toggle()) {
            (Some(root), Some(toggle)) => Some(Elements { root, toggle }),
            _ => {
                debug!("theme root or toggle absent, theme switching disabled");
                None
            }
        };
        Self {
            key: config.storage_key.clone(),
            store,
            signal,
            elements,
            dark_affordance: config.dark_affordance.clone(),
            light_affordance: config.light_affordance.clone(),
            current: None,
        }
    }

    /// Sets the key the preference is stored under.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Whether the page had the elements this resolver needs.
    pub fn is_active(&self) -> bool {
        self.elements.is_some()
    }

    /// The state most recently applied to the page, if any.
    pub fn current_state(&self) -> Option<ThemeState> {
        self.current
    }

    /// The explicit preference, if one is stored.
    ///
    /// An unreadable store or an unrecognized value counts as no preference.
    pub fn stored_preference(&self) -> Option<ThemeState> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "theme preference unreadable, ignoring it");
                return None;
            }
        };
        let state = ThemeState::from_stored(&raw);
        if state.is_none() {
            debug!(value = %raw, "ignoring unrecognized theme preference");
        }
        state
    }

    /// Resolves the state without applying it.
    pub fn resolve(&self) -> ThemeState {
        self.stored_preference()
            .unwrap_or_else(|| ThemeState::from_prefers_dark(self.signal.prefers_dark()))
    }

    /// Resolves the page-load state and applies it.
    pub fn resolve_initial_state(&mut self) -> ThemeState {
        let state = self.resolve();
        debug!(%state, "resolved initial theme");
        self.apply_state(state);
        state
    }

    /// Applies a state to the page.
    ///
    /// The root flag and the toggle affordance change together; applying
    /// the same state again leaves the page as it was.
    pub fn apply_state(&mut self, state: ThemeState) {
        let Some(elements) = self.elements.as_mut() else {
            return;
        };
        elements.root.set_dark(state.is_dark());
        let affordance = match state {
            ThemeState::Dark => &self.dark_affordance,
            ThemeState::Light => &self.light_affordance,
        };
        elements.toggle.show(affordance);
        self.current = Some(state);
    }

    /// Follows a live system color scheme change, unless the user has
    /// made an explicit choice.
    pub fn on_system_preference_changed(&mut self, matches: bool) {
        if !self.is_active() {
            return;
        }
        if let Some(stored) = self.stored_preference() {
            debug!(%stored, "explicit theme preference set, ignoring system change");
            return;
        }
        let state = ThemeState::from_prefers_dark(matches);
        debug!(%state, "following system color scheme");
        self.apply_state(state);
    }

    /// Flips the applied state and stores it as the explicit preference.
    pub fn on_toggle_requested(&mut self) {
        if !self.is_active() {
            return;
        }
        let current = self.current.unwrap_or_else(|| self.resolve());
        let next = current.toggled();
        self.apply_state(next);
        if let Err(e) = self.store.set(&self.key, next.as_str()) {
            warn!(error = %e, "could not store theme preference");
        }
        debug!(state = %next, "theme toggled");
    }
}

impl std::fmt::Debug for ThemePreferenceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceResolver")
            .field("key", &self.key)
            .field("active", &self.is_active())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::memory::{MemoryFlag, MemoryPage};
    use crate::theme::error::StoreError;
    use crate::theme::store::MemoryStore;
    use crate::theme::system::FixedSignal;

    fn resolver_with(
        stored: Option<&str>,
        prefers_dark: bool,
    ) -> (MemoryPage, MemoryStore, ThemePreferenceResolver) {
        let page = MemoryPage::complete();
        let store = match stored {
            Some(value) => MemoryStore::with_entry("theme", value),
            None => MemoryStore::new(),
        };
        let resolver =
            ThemePreferenceResolver::new(&page, store.clone(), FixedSignal::new(prefers_dark));
        (page, store, resolver)
    }

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get("theme").unwrap()
    }

    #[test]
    fn test_stored_dark_wins() {
        let (page, _, mut resolver) = resolver_with(Some("dark"), false);
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);
        assert!(page.is_dark());
    }

    #[test]
    fn test_stored_light_beats_dark_system() {
        let (page, _, mut resolver) = resolver_with(Some("light"), true);
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Light);
        assert!(!page.is_dark());
    }

    #[test]
    fn test_absent_follows_system() {
        let (_, _, mut dark) = resolver_with(None, true);
        assert_eq!(dark.resolve_initial_state(), ThemeState::Dark);

        let (_, _, mut light) = resolver_with(None, false);
        assert_eq!(light.resolve_initial_state(), ThemeState::Light);
    }

    #[test]
    fn test_malformed_stored_value_counts_as_absent() {
        let (_, _, mut resolver) = resolver_with(Some("purple"), true);
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);
    }

    #[test]
    fn test_initial_light_offers_switch_to_dark() {
        let (page, store, mut resolver) = resolver_with(None, false);
        resolver.resolve_initial_state();

        let shown = page.theme_toggle.as_ref().unwrap().shown().unwrap();
        assert_eq!(shown, ThemeConfig::default().light_affordance);
        assert_eq!(shown.label, "Switch to dark mode");
        assert_eq!(stored(&store), None, "resolving never writes the store");
    }

    #[test]
    fn test_dark_shows_sun_affordance() {
        let (page, _, mut resolver) = resolver_with(Some("dark"), false);
        resolver.resolve_initial_state();
        let shown = page.theme_toggle.as_ref().unwrap().shown().unwrap();
        assert_eq!(shown.icon, "\u{2600}");
    }

    #[test]
    fn test_apply_state_is_idempotent() {
        let (page, _, mut resolver) = resolver_with(None, false);
        resolver.apply_state(ThemeState::Dark);
        let once = (page.is_dark(), page.theme_toggle.as_ref().unwrap().shown());
        resolver.apply_state(ThemeState::Dark);
        let twice = (page.is_dark(), page.theme_toggle.as_ref().unwrap().shown());
        assert_eq!(once, twice);
        assert_eq!(resolver.current_state(), Some(ThemeState::Dark));
    }

    #[test]
    fn test_toggle_flips_and_stores() {
        let (page, store, mut resolver) = resolver_with(None, false);
        resolver.resolve_initial_state();

        resolver.on_toggle_requested();
        assert!(page.is_dark());
        assert_eq!(stored(&store).as_deref(), Some("dark"));

        resolver.on_toggle_requested();
        assert!(!page.is_dark());
        assert_eq!(stored(&store).as_deref(), Some("light"));
        assert_eq!(resolver.current_state(), Some(ThemeState::Light));
    }

    #[test]
    fn test_toggle_before_initial_resolution_uses_resolved_state() {
        let (page, store, mut resolver) = resolver_with(None, true);
        resolver.on_toggle_requested();
        assert!(!page.is_dark());
        assert_eq!(stored(&store).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_followed_without_preference() {
        let (page, _, mut resolver) = resolver_with(None, false);
        resolver.resolve_initial_state();
        resolver.on_system_preference_changed(true);
        assert!(page.is_dark());
        resolver.on_system_preference_changed(false);
        assert!(!page.is_dark());
    }

    #[test]
    fn test_system_change_ignored_with_preference() {
        let (page, _, mut resolver) = resolver_with(Some("light"), false);
        resolver.resolve_initial_state();
        resolver.on_system_preference_changed(true);
        assert!(!page.is_dark());
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let (page, _, mut resolver) = resolver_with(None, false);
        resolver.resolve_initial_state();
        resolver.on_toggle_requested();
        resolver.on_system_preference_changed(false);
        assert!(page.is_dark());
    }

    #[test]
    fn test_missing_toggle_makes_resolver_inert() {
        let mut page = MemoryPage::complete();
        page.theme_toggle = None;
        let store = MemoryStore::new();
        let mut resolver =
            ThemePreferenceResolver::new(&page, store.clone(), FixedSignal::new(true));

        assert!(!resolver.is_active());
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);
        resolver.on_toggle_requested();
        resolver.on_system_preference_changed(true);

        let root = page.root.as_ref().unwrap();
        assert_eq!(root.writes(), 0);
        assert!(store.is_empty());
        assert_eq!(resolver.current_state(), None);
    }

    #[test]
    fn test_missing_root_makes_resolver_inert() {
        let mut page = MemoryPage::complete();
        page.root = None;
        let mut resolver =
            ThemePreferenceResolver::new(&page, MemoryStore::new(), FixedSignal::new(false));
        resolver.resolve_initial_state();
        assert!(page.theme_toggle.as_ref().unwrap().shown().is_none());
    }

    #[test]
    fn test_custom_key() {
        let page = MemoryPage::complete();
        let store = MemoryStore::with_entry("site-theme", "dark");
        let mut resolver =
            ThemePreferenceResolver::new(&page, store.clone(), FixedSignal::new(false))
                .with_key("site-theme");
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);
        resolver.on_toggle_requested();
        assert_eq!(store.get("site-theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "broken".into(),
                source: std::io::Error::other("unreadable"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "broken".into(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    #[test]
    fn test_broken_store_degrades_to_system_signal() {
        let page = MemoryPage::complete();
        let mut resolver = ThemePreferenceResolver::new(&page, BrokenStore, FixedSignal::new(true));
        assert_eq!(resolver.resolve_initial_state(), ThemeState::Dark);

        // The toggle still takes effect on the page even if it cannot persist.
        resolver.on_toggle_requested();
        assert!(!page.is_dark());
    }

    #[test]
    fn test_root_flag_written_once_per_apply() {
        let page = MemoryPage::complete();
        let root: &MemoryFlag = page.root.as_ref().unwrap();
        let mut resolver =
            ThemePreferenceResolver::new(&page, MemoryStore::new(), FixedSignal::new(false));
        resolver.resolve_initial_state();
        resolver.on_toggle_requested();
        assert_eq!(root.writes(), 2);
    }
}
