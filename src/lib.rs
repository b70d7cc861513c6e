//! # Folio - interactive behavior for static portfolio sites
//!
//! Folio is the model behind a brochure site's interactivity: the
//! dark/light theme switch, the mobile navigation drawer, a looping
//! typewriter headline, a project filter, scroll-aware floating buttons and
//! the footer year. It never touches markup: hosts expose their elements
//! through the small traits in [`page`] and feed interactions in through an
//! [`events::EventHub`].
//!
//! ## Theme preference
//!
//! The part with real rules is [`ThemePreferenceResolver`]:
//!
//! - An explicit stored preference (`"dark"` / `"light"`) always wins
//! - Without one, the page follows the system color scheme, live
//! - Only the toggle writes the preference, and it is never deleted
//!
//! ```rust
//! use folio::page::memory::MemoryPage;
//! use folio::{FixedSignal, MemoryStore, PreferenceStore, ThemePreferenceResolver, ThemeState};
//!
//! let page = MemoryPage::complete();
//! let store = MemoryStore::with_entry("theme", "light");
//! let mut resolver =
//!     ThemePreferenceResolver::new(&page, store.clone(), FixedSignal::new(true));
//!
//! // The explicit choice beats the dark system scheme.
//! assert_eq!(resolver.resolve_initial_state(), ThemeState::Light);
//!
//! resolver.on_toggle_requested();
//! assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
//! ```
//!
//! ## Mounting a page
//!
//! [`site::Site::mount`] wires every feature whose elements are present
//! onto an [`events::EventHub`]. Missing elements disable their feature
//! silently.
//!
//! ## Storage scope
//!
//! [`StorageScope::Persistent`] keeps the preference across visits in a
//! JSON file ([`FileStore`]); [`StorageScope::Session`] keeps it in memory
//! for the session ([`MemoryStore`]). Both follow live system changes while
//! no explicit preference exists.

pub mod config;
pub mod events;
pub mod filter;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod site;
pub mod theme;
pub mod typewriter;
pub mod year;

pub use config::{ConfigError, SiteConfig};
pub use theme::{
    open_store, reset_scheme_detector, set_scheme_detector, FileStore, FixedSignal, MemoryStore,
    OsColorScheme, PreferenceStore, StorageScope, StoreError, SystemSignal,
    ThemePreferenceResolver, ThemeState,
};
