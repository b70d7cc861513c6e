//! Scroll-direction-aware floating buttons.

use crate::config::ScrollConfig;
use crate::page::{FloatingButton, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which floating buttons should be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub back_to_top: bool,
    pub to_bottom: bool,
}

/// Shows "back to top" while the reader scrolls up and "to bottom" while
/// they scroll down, once past the threshold.
///
/// Near the top both are hidden; "to bottom" also hides within
/// `bottom_margin` of the end. A button is written only when its
/// visibility changes. Either button may be absent from the page.
pub struct ScrollButtons {
    threshold: f64,
    bottom_margin: f64,
    last_offset: f64,
    direction: Option<Direction>,
    shown: Visibility,
    back_to_top: Option<Box<dyn FloatingButton>>,
    to_bottom: Option<Box<dyn FloatingButton>>,
}

impl ScrollButtons {
    pub fn new(page: &dyn Page, config: &ScrollConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin,
            last_offset: 0.0,
            direction: None,
            shown: Visibility::default(),
            back_to_top: page.back_to_top(),
            to_bottom: page.to_bottom(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.back_to_top.is_some() || self.to_bottom.is_some()
    }

    /// Direction of the last movement. An unchanged offset keeps it.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Records a new scroll position and updates the buttons.
    pub fn observe(&mut self, offset: f64, max_offset: f64) -> Visibility {
        if offset > self.last_offset {
            self.direction = Some(Direction::Down);
        } else if offset < self.last_offset {
            self.direction = Some(Direction::Up);
        }
        self.last_offset = offset;

        let past_threshold = offset > self.threshold;
        let near_end = offset >= max_offset - self.bottom_margin;
        let next = Visibility {
            back_to_top: past_threshold && self.direction == Some(Direction::Up),
            to_bottom: past_threshold && !near_end && self.direction == Some(Direction::Down),
        };

        if next.back_to_top != self.shown.back_to_top {
            if let Some(button) = self.back_to_top.as_mut() {
                button.set_visible(next.back_to_top);
            }
        }
        if next.to_bottom != self.shown.to_bottom {
            if let Some(button) = self.to_bottom.as_mut() {
                button.set_visible(next.to_bottom);
            }
        }
        self.shown = next;
        next
    }
}

impl std::fmt::Debug for ScrollButtons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollButtons")
            .field("last_offset", &self.last_offset)
            .field("direction", &self.direction)
            .field("shown", &self.shown)
            .finish()
    }
}
