//! The host's ambient light/dark signal.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// A readable "prefers dark" signal from the host environment.
///
/// Change notifications are delivered separately, as
/// [`Event::ColorSchemeChanged`](crate::events::Event::ColorSchemeChanged)
/// dispatched through the [`EventHub`](crate::events::EventHub).
pub trait SystemSignal {
    fn prefers_dark(&self) -> bool;
}

type SchemeDetector = fn() -> bool;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to read the operating system color scheme.
///
/// This is useful for testing or when you want to force a specific scheme.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the operating system detector.
pub fn reset_scheme_detector() {
    set_scheme_detector(os_scheme_detector);
}

fn detect_prefers_dark() -> bool {
    let detector = SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_scheme_detector() -> bool {
    match detect_os_theme() {
        OsThemeMode::Dark => true,
        OsThemeMode::Light => false,
    }
}

/// The operating system color scheme.
///
/// The OS gives no push notifications here, so hosts call [`poll`] on an
/// interval and dispatch a change event whenever it returns a value.
///
/// [`poll`]: OsColorScheme::poll
#[derive(Debug, Default)]
pub struct OsColorScheme {
    last: Cell<Option<bool>>,
}

impl OsColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the scheme and returns it only if it differs from the last
    /// value this instance saw.
    ///
    /// The first poll establishes a baseline and never reports a change.
    pub fn poll(&self) -> Option<bool> {
        let now = detect_prefers_dark();
        match self.last.replace(Some(now)) {
            Some(previous) if previous != now => Some(now),
            _ => None,
        }
    }
}

impl SystemSignal for OsColorScheme {
    fn prefers_dark(&self) -> bool {
        let now = detect_prefers_dark();
        self.last.set(Some(now));
        now
    }
}

/// A signal whose value is set by the host.
///
/// Clones share the value. Used by embedders that receive the scheme from
/// elsewhere, and by tests.
#[derive(Debug, Clone, Default)]
pub struct FixedSignal {
    prefers_dark: Rc<Cell<bool>>,
}

impl FixedSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(prefers_dark)),
        }
    }

    pub fn set(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl SystemSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}
