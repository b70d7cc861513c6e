//! Page collaborators.
//!
//! The engine never touches markup. Each feature reads from and writes to
//! a handful of small element traits, obtained once from a [`Page`] probe:
//!
//! - [`RootElement`]: the document root carrying the dark flag
//! - [`ToggleControl`]: the theme switch showing an [`Affordance`]
//! - [`Drawer`] and [`NavButton`]: the collapsible mobile navigation
//! - [`FilterItem`] and [`FilterButton`]: project cards and category buttons
//! - [`FloatingButton`]: the scroll buttons
//! - [`TextSlot`]: text targets for the typewriter and the footer year
//!
//! A probe that returns `None` means the element is not on this page, and
//! the feature that needs it stays inert.
//!
//! [`memory`] holds shared-handle implementations of every trait, used by
//! the CLI and by tests to observe what the engine did.

pub mod memory;

use serde::Deserialize;

/// Icon and label shown by the theme toggle.
///
/// The toggle always advertises the action available, not the current
/// state: while dark it offers the sun and "switch to light".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Affordance {
    pub icon: String,
    pub label: String,
}

impl Affordance {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }
}

pub trait RootElement {
    /// Sets or clears the dark styling flag.
    fn set_dark(&mut self, dark: bool);
}

pub trait ToggleControl {
    fn show(&mut self, affordance: &Affordance);
}

pub trait Drawer {
    fn set_open(&mut self, open: bool);
}

pub trait NavButton {
    /// Mirrors the drawer state for assistive technology (`aria-expanded`).
    fn set_expanded(&mut self, expanded: bool);
}

pub trait FilterItem {
    fn categories(&self) -> Vec<String>;
    fn set_visible(&mut self, visible: bool);
}

pub trait FilterButton {
    fn category(&self) -> String;
    fn set_active(&mut self, active: bool);
}

pub trait FloatingButton {
    fn set_visible(&mut self, visible: bool);
}

pub trait TextSlot {
    fn set_text(&mut self, text: &str);
}

/// Probe for the elements present on the current page.
///
/// Every accessor defaults to "absent", so a host implements only what its
/// markup actually has.
pub trait Page {
    fn root(&self) -> Option<Box<dyn RootElement>> {
        None
    }

    fn theme_toggle(&self) -> Option<Box<dyn ToggleControl>> {
        None
    }

    fn nav_drawer(&self) -> Option<Box<dyn Drawer>> {
        None
    }

    fn nav_button(&self) -> Option<Box<dyn NavButton>> {
        None
    }

    fn project_items(&self) -> Vec<Box<dyn FilterItem>> {
        Vec::new()
    }

    fn filter_buttons(&self) -> Vec<Box<dyn FilterButton>> {
        Vec::new()
    }

    fn back_to_top(&self) -> Option<Box<dyn FloatingButton>> {
        None
    }

    fn to_bottom(&self) -> Option<Box<dyn FloatingButton>> {
        None
    }

    fn typed_text(&self) -> Option<Box<dyn TextSlot>> {
        None
    }

    fn year_slot(&self) -> Option<Box<dyn TextSlot>> {
        None
    }
}
