//! In-memory page elements.
//!
//! Every handle is a cheap clone over shared state: the page hands one
//! clone to the engine and the caller keeps another to read back what the
//! engine wrote.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{
    Affordance, Drawer, FilterButton, FilterItem, FloatingButton, NavButton, Page, RootElement,
    TextSlot, ToggleControl,
};

/// A boolean element property (a class, `hidden`, `aria-expanded`).
#[derive(Debug, Clone, Default)]
pub struct MemoryFlag {
    value: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryFlag {
    pub fn new(initial: bool) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub fn get(&self) -> bool {
        self.value.get()
    }

    /// Number of times the engine wrote this flag.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn write(&self, value: bool) {
        self.value.set(value);
        self.writes.set(self.writes.get() + 1);
    }
}

impl RootElement for MemoryFlag {
    fn set_dark(&mut self, dark: bool) {
        self.write(dark);
    }
}

impl Drawer for MemoryFlag {
    fn set_open(&mut self, open: bool) {
        self.write(open);
    }
}

impl NavButton for MemoryFlag {
    fn set_expanded(&mut self, expanded: bool) {
        self.write(expanded);
    }
}

impl FloatingButton for MemoryFlag {
    fn set_visible(&mut self, visible: bool) {
        self.write(visible);
    }
}

/// The theme toggle; remembers the last affordance shown.
#[derive(Debug, Clone, Default)]
pub struct MemoryToggle {
    shown: Rc<RefCell<Option<Affordance>>>,
}

impl MemoryToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<Affordance> {
        self.shown.borrow().clone()
    }
}

impl ToggleControl for MemoryToggle {
    fn show(&mut self, affordance: &Affordance) {
        *self.shown.borrow_mut() = Some(affordance.clone());
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryText {
    text: Rc<RefCell<String>>,
}

impl MemoryText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextSlot for MemoryText {
    fn set_text(&mut self, text: &str) {
        let mut current = self.text.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

/// A project card tagged with categories.
#[derive(Debug, Clone)]
pub struct MemoryProject {
    pub name: String,
    categories: Vec<String>,
    visible: MemoryFlag,
}

impl MemoryProject {
    pub fn new(name: &str, categories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            visible: MemoryFlag::new(true),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl FilterItem for MemoryProject {
    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible.write(visible);
    }
}

#[derive(Debug, Clone)]
pub struct MemoryFilterButton {
    category: String,
    active: MemoryFlag,
}

impl MemoryFilterButton {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            active: MemoryFlag::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl FilterButton for MemoryFilterButton {
    fn category(&self) -> String {
        self.category.clone()
    }

    fn set_active(&mut self, active: bool) {
        self.active.write(active);
    }
}

/// A page assembled from in-memory elements.
///
/// Fields left `None` (or empty) are absent from the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    pub root: Option<MemoryFlag>,
    pub theme_toggle: Option<MemoryToggle>,
    pub nav_drawer: Option<MemoryFlag>,
    pub nav_button: Option<MemoryFlag>,
    pub projects: Vec<MemoryProject>,
    pub filter_buttons: Vec<MemoryFilterButton>,
    pub back_to_top: Option<MemoryFlag>,
    pub to_bottom: Option<MemoryFlag>,
    pub typed_text: Option<MemoryText>,
    pub year: Option<MemoryText>,
}

impl MemoryPage {
    /// An empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every single-instance element present and no projects.
    pub fn complete() -> Self {
        Self {
            root: Some(MemoryFlag::new(false)),
            theme_toggle: Some(MemoryToggle::new()),
            nav_drawer: Some(MemoryFlag::new(false)),
            nav_button: Some(MemoryFlag::new(false)),
            projects: Vec::new(),
            filter_buttons: Vec::new(),
            back_to_top: Some(MemoryFlag::new(false)),
            to_bottom: Some(MemoryFlag::new(false)),
            typed_text: Some(MemoryText::new()),
            year: Some(MemoryText::new()),
        }
    }

    pub fn with_project(mut self, name: &str, categories: &[&str]) -> Self {
        self.projects.push(MemoryProject::new(name, categories));
        self
    }

    pub fn with_filter_button(mut self, category: &str) -> Self {
        self.filter_buttons.push(MemoryFilterButton::new(category));
        self
    }

    /// Whether the root currently carries the dark flag.
    pub fn is_dark(&self) -> bool {
        self.root.as_ref().is_some_and(MemoryFlag::get)
    }
}

impl Page for MemoryPage {
    fn root(&self) -> Option<Box<dyn RootElement>> {
        self.root.clone().map(|el| Box::new(el) as Box<dyn RootElement>)
    }

    fn theme_toggle(&self) -> Option<Box<dyn ToggleControl>> {
        self.theme_toggle.clone().map(|el| Box::new(el) as Box<dyn ToggleControl>)
    }

    fn nav_drawer(&self) -> Option<Box<dyn Drawer>> {
        self.nav_drawer.clone().map(|el| Box::new(el) as Box<dyn Drawer>)
    }

    fn nav_button(&self) -> Option<Box<dyn NavButton>> {
        self.nav_button.clone().map(|el| Box::new(el) as Box<dyn NavButton>)
    }

    fn project_items(&self) -> Vec<Box<dyn FilterItem>> {
        self.projects
            .iter()
            .cloned()
            .map(|p| Box::new(p) as Box<dyn FilterItem>)
            .collect()
    }

    fn filter_buttons(&self) -> Vec<Box<dyn FilterButton>> {
        self.filter_buttons
            .iter()
            .cloned()
            .map(|b| Box::new(b) as Box<dyn FilterButton>)
            .collect()
    }

    fn back_to_top(&self) -> Option<Box<dyn FloatingButton>> {
        self.back_to_top.clone().map(|el| Box::new(el) as Box<dyn FloatingButton>)
    }

    fn to_bottom(&self) -> Option<Box<dyn FloatingButton>> {
        self.to_bottom.clone().map(|el| Box::new(el) as Box<dyn FloatingButton>)
    }

    fn typed_text(&self) -> Option<Box<dyn TextSlot>> {
        self.typed_text.clone().map(|el| Box::new(el) as Box<dyn TextSlot>)
    }

    fn year_slot(&self) -> Option<Box<dyn TextSlot>> {
        self.year.clone().map(|el| Box::new(el) as Box<dyn TextSlot>)
    }
}
