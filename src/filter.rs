//! Client-side project filter.

use tracing::debug;

use crate::config::FilterConfig;
use crate::page::{FilterButton, FilterItem, Page};

/// Shows the projects tagged with a selected category.
pub struct ProjectFilter {
    all_category: String,
    items: Vec<Box<dyn FilterItem>>,
    buttons: Vec<Box<dyn FilterButton>>,
    selected: Option<String>,
}

impl ProjectFilter {
    pub fn new(page: &dyn Page, config: &FilterConfig) -> Self {
        Self {
            all_category: config.all_category.clone(),
            items: page.project_items(),
            buttons: page.filter_buttons(),
            selected: None,
        }
    }

    /// Whether there is anything to filter.
    pub fn is_active(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selects a category and returns how many projects remain visible.
    ///
    /// The catch-all category shows every project. The button whose
    /// category matches becomes the only active one.
    pub fn select(&mut self, category: &str) -> usize {
        let show_all = category == self.all_category;
        let mut visible = 0;
        for item in &mut self.items {
            let matches = show_all || item.categories().iter().any(|c| c == category);
            item.set_visible(matches);
            if matches {
                visible += 1;
            }
        }
        for button in &mut self.buttons {
            let active = button.category() == category;
            button.set_active(active);
        }
        self.selected = Some(category.to_string());
        debug!(category, visible, "project filter");
        visible
    }
}

impl std::fmt::Debug for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectFilter")
            .field("items", &self.items.len())
            .field("buttons", &self.buttons.len())
            .field("selected", &self.selected)
            .finish()
    }
}
