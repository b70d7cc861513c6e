//! Wiring every feature onto a page.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::config::SiteConfig;
use crate::events::{Event, EventHub, Interaction};
use crate::filter::ProjectFilter;
use crate::nav::NavDrawer;
use crate::page::Page;
use crate::scroll::ScrollButtons;
use crate::theme::{PreferenceStore, SystemSignal, ThemePreferenceResolver, ThemeState};
use crate::typewriter::Typewriter;
use crate::year;

/// The mounted behavior of one page view.
///
/// Mounting probes the page once per feature, registers a handler for each
/// feature whose elements are present, resolves and applies the initial
/// theme and stamps the footer year. Features with missing elements are
/// simply not subscribed.
///
/// # Example
///
/// ```rust
/// use folio::config::SiteConfig;
/// use folio::events::{Event, EventHub};
/// use folio::page::memory::MemoryPage;
/// use folio::site::Site;
/// use folio::{FixedSignal, MemoryStore, ThemeState};
///
/// let page = MemoryPage::complete();
/// let mut hub = EventHub::new();
/// let site = Site::mount(
///     &page,
///     &SiteConfig::default(),
///     Box::new(MemoryStore::new()),
///     Box::new(FixedSignal::new(false)),
///     &mut hub,
/// );
/// assert_eq!(site.initial_theme(), ThemeState::Light);
///
/// hub.dispatch(&Event::ThemeToggleClicked);
/// assert!(page.is_dark());
/// ```
pub struct Site {
    theme: Rc<RefCell<ThemePreferenceResolver>>,
    nav: Rc<RefCell<NavDrawer>>,
    filter: Rc<RefCell<ProjectFilter>>,
    scroll: Rc<RefCell<ScrollButtons>>,
    typewriter: Typewriter,
    initial_theme: ThemeState,
}

impl Site {
    /// Mounts with the preference store chosen by `config.theme.scope`.
    pub fn mount_configured(
        page: &dyn Page,
        config: &SiteConfig,
        signal: Box<dyn SystemSignal>,
        hub: &mut EventHub,
    ) -> Self {
        let resolver = ThemePreferenceResolver::from_config(page, &config.theme, signal);
        Self::assemble(page, config, resolver, hub)
    }

    /// Mounts with an explicit preference store.
    pub fn mount(
        page: &dyn Page,
        config: &SiteConfig,
        store: Box<dyn PreferenceStore>,
        signal: Box<dyn SystemSignal>,
        hub: &mut EventHub,
    ) -> Self {
        let resolver = ThemePreferenceResolver::from_parts(page, &config.theme, store, signal);
        Self::assemble(page, config, resolver, hub)
    }

    fn assemble(
        page: &dyn Page,
        config: &SiteConfig,
        mut resolver: ThemePreferenceResolver,
        hub: &mut EventHub,
    ) -> Self {
        let initial_theme = resolver.resolve_initial_state();
        let theme = Rc::new(RefCell::new(resolver));
        if theme.borrow().is_active() {
            let toggle = theme.clone();
            hub.on(Interaction::ThemeToggle, move |_| {
                toggle.borrow_mut().on_toggle_requested();
            });
            let system = theme.clone();
            hub.on(Interaction::ColorScheme, move |event| {
                if let Event::ColorSchemeChanged { prefers_dark } = event {
                    system.borrow_mut().on_system_preference_changed(*prefers_dark);
                }
            });
        }

        let nav = Rc::new(RefCell::new(NavDrawer::new(page)));
        if nav.borrow().is_active() {
            let toggle = nav.clone();
            hub.on(Interaction::NavToggle, move |_| toggle.borrow_mut().toggle());
            let link = nav.clone();
            hub.on(Interaction::NavLink, move |_| link.borrow_mut().close());
        }

        let filter = Rc::new(RefCell::new(ProjectFilter::new(page, &config.filter)));
        if filter.borrow().is_active() {
            let select = filter.clone();
            hub.on(Interaction::FilterSelect, move |event| {
                if let Event::FilterSelected { category } = event {
                    select.borrow_mut().select(category);
                }
            });
        }

        let scroll = Rc::new(RefCell::new(ScrollButtons::new(page, &config.scroll)));
        if scroll.borrow().is_active() {
            let observe = scroll.clone();
            hub.on(Interaction::Scroll, move |event| {
                if let Event::Scrolled { offset, max_offset } = event {
                    observe.borrow_mut().observe(*offset, *max_offset);
                }
            });
        }

        if let Some(mut slot) = page.year_slot() {
            year::stamp(slot.as_mut(), year::copyright_year());
        }

        let typewriter = Typewriter::new(page, &config.typewriter);
        debug!(theme = %initial_theme, "site mounted");

        Self {
            theme,
            nav,
            filter,
            scroll,
            typewriter,
            initial_theme,
        }
    }

    /// The theme resolved when the page loaded.
    pub fn initial_theme(&self) -> ThemeState {
        self.initial_theme
    }

    pub fn theme(&self) -> Ref<'_, ThemePreferenceResolver> {
        self.theme.borrow()
    }

    pub fn nav(&self) -> Ref<'_, NavDrawer> {
        self.nav.borrow()
    }

    pub fn filter(&self) -> Ref<'_, ProjectFilter> {
        self.filter.borrow()
    }

    pub fn scroll(&self) -> Ref<'_, ScrollButtons> {
        self.scroll.borrow()
    }

    /// Writes the next typewriter frame; see [`Typewriter::advance`].
    pub fn advance_typewriter(&mut self) -> Option<Duration> {
        self.typewriter.advance()
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("theme", &self.theme)
            .field("nav", &self.nav)
            .field("filter", &self.filter)
            .field("scroll", &self.scroll)
            .field("typewriter", &self.typewriter)
            .finish()
    }
}
