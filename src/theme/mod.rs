//! Theme preference resolution.
//!
//! This module provides:
//!
//! - [`ThemeState`]: The resolved light or dark appearance
//! - [`ThemePreferenceResolver`]: Resolves, applies and toggles the appearance
//! - [`PreferenceStore`]: Where the explicit choice lives ([`MemoryStore`], [`FileStore`])
//! - [`SystemSignal`]: The host's "prefers dark" signal ([`OsColorScheme`], [`FixedSignal`])
//!
//! An explicit stored preference always wins over the system color scheme;
//! without one, the page follows the system, including live changes.

mod error;
mod resolver;
mod state;
mod store;
mod system;

pub use error::StoreError;
pub use resolver::ThemePreferenceResolver;
pub use state::ThemeState;
pub use store::{open_store, FileStore, MemoryStore, PreferenceStore, StorageScope};
pub use system::{
    reset_scheme_detector, set_scheme_detector, FixedSignal, OsColorScheme, SystemSignal,
};
