//! Interaction subscriptions.
//!
//! The host turns page interactions into [`Event`]s and hands them to
//! [`EventHub::dispatch`]. Features register a callback per
//! [`Interaction`] when they are mounted and hold no other reference to
//! the page.
//!
//! Everything runs on one thread: `dispatch` calls each handler for the
//! event to completion, in registration order, before returning.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use folio::events::{Event, EventHub, Interaction};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let mut hub = EventHub::new();
//! let counter = clicks.clone();
//! hub.on(Interaction::ThemeToggle, move |_| counter.set(counter.get() + 1));
//!
//! hub.dispatch(&Event::ThemeToggleClicked);
//! assert_eq!(clicks.get(), 1);
//! ```

use std::collections::HashMap;

/// A named interaction a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    ThemeToggle,
    ColorScheme,
    NavToggle,
    NavLink,
    Scroll,
    FilterSelect,
}

/// Something that happened on the page or in the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeToggleClicked,
    ColorSchemeChanged { prefers_dark: bool },
    NavToggleClicked,
    NavLinkActivated,
    Scrolled { offset: f64, max_offset: f64 },
    FilterSelected { category: String },
}

impl Event {
    pub fn interaction(&self) -> Interaction {
        match self {
            Event::ThemeToggleClicked => Interaction::ThemeToggle,
            Event::ColorSchemeChanged { .. } => Interaction::ColorScheme,
            Event::NavToggleClicked => Interaction::NavToggle,
            Event::NavLinkActivated => Interaction::NavLink,
            Event::Scrolled { .. } => Interaction::Scroll,
            Event::FilterSelected { .. } => Interaction::FilterSelect,
        }
    }
}

type Handler = Box<dyn FnMut(&Event)>;

/// Registry of interaction handlers.
#[derive(Default)]
pub struct EventHub {
    handlers: HashMap<Interaction, Vec<Handler>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Registrations last as long as the hub.
    pub fn on<F>(&mut self, interaction: Interaction, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.handlers
            .entry(interaction)
            .or_default()
            .push(Box::new(handler));
    }

    pub fn has_handlers(&self, interaction: Interaction) -> bool {
        self.handlers
            .get(&interaction)
            .is_some_and(|handlers| !handlers.is_empty())
    }

    /// Runs every handler subscribed to the event's interaction.
    ///
    /// Returns the number of handlers that ran; zero means nothing on this
    /// page cares about the event.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.interaction()) else {
            tracing::trace!(?event, "no handlers");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(interaction, handlers)| (*interaction, handlers.len()))
            .collect();
        f.debug_struct("EventHub").field("handlers", &counts).finish()
    }
}
