//! Footer copyright year.

use chrono::{Datelike, Local};

use crate::page::TextSlot;

/// The current calendar year in local time.
pub fn copyright_year() -> i32 {
    Local::now().year()
}

/// Writes `year` into the slot.
pub fn stamp(slot: &mut dyn TextSlot, year: i32) {
    slot.set_text(&year.to_string());
}
