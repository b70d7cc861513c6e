//! Collapsible navigation drawer.

use tracing::debug;

use crate::page::{Drawer, NavButton, Page};

/// Open/closed state of the mobile navigation drawer.
///
/// The drawer and its button are probed once; if either is missing the
/// drawer stays closed and every call is a no-op.
pub struct NavDrawer {
    elements: Option<(Box<dyn Drawer>, Box<dyn NavButton>)>,
    open: bool,
}

impl NavDrawer {
    pub fn new(page: &dyn Page) -> Self {
        let elements = match (page.nav_drawer(), page.nav_button()) {
            (Some(drawer), Some(button)) => Some((drawer, button)),
            _ => None,
        };
        Self {
            elements,
            open: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.elements.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Closes the drawer, e.g. after a navigation link was followed.
    pub fn close(&mut self) {
        if self.open {
            self.set_open(false);
        }
    }

    fn set_open(&mut self, open: bool) {
        let Some((drawer, button)) = self.elements.as_mut() else {
            return;
        };
        drawer.set_open(open);
        button.set_expanded(open);
        self.open = open;
        debug!(open, "navigation drawer");
    }
}

impl std::fmt::Debug for NavDrawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavDrawer")
            .field("active", &self.is_active())
            .field("open", &self.open)
            .finish()
    }
}
