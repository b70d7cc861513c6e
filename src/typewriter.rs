//! Looping typewriter animation.
//!
//! [`TypewriterState`] is the whole animation: which phrase, how many
//! characters are on screen, and whether they are being typed or deleted.
//! The host owns it and calls [`tick`](TypewriterState::tick) whenever the
//! previous frame's delay has elapsed.

use std::time::Duration;

use crate::config::TypewriterConfig;
use crate::page::{Page, TextSlot};

/// Text to show and how long to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Animation state for a looping list of phrases.
///
/// Each tick types or deletes exactly one character. A fully typed phrase
/// holds for `hold_delay_ms`; the empty line holds for `restart_delay_ms`
/// before the next phrase starts, wrapping after the last one.
///
/// # Example
///
/// ```rust
/// use folio::config::TypewriterConfig;
/// use folio::typewriter::TypewriterState;
///
/// let config = TypewriterConfig {
///     phrases: vec!["hi".into()],
///     ..TypewriterConfig::default()
/// };
/// let mut state = TypewriterState::new(&config);
/// let texts: Vec<String> = (0..4).filter_map(|_| state.tick()).map(|f| f.text).collect();
/// assert_eq!(texts, ["h", "hi", "h", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct TypewriterState {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
    restart_delay: Duration,
}

impl TypewriterState {
    pub fn new(config: &TypewriterConfig) -> Self {
        Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            type_delay: Duration::from_millis(config.type_delay_ms),
            delete_delay: Duration::from_millis(config.delete_delay_ms),
            hold_delay: Duration::from_millis(config.hold_delay_ms),
            restart_delay: Duration::from_millis(config.restart_delay_ms),
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one step. Returns `None` when there are no phrases.
    pub fn tick(&mut self) -> Option<Frame> {
        let phrase = self.phrases.get(self.phrase_index)?;
        let len = phrase.len();

        let delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.restart_delay
            } else {
                self.delete_delay
            }
        } else {
            if self.char_index < len {
                self.char_index += 1;
            }
            if self.char_index >= len {
                self.deleting = true;
                self.hold_delay
            } else {
                self.type_delay
            }
        };

        Some(Frame {
            text: phrase[..self.char_index].iter().collect(),
            delay,
        })
    }
}

/// A [`TypewriterState`] bound to the page's typed-text slot.
pub struct Typewriter {
    state: TypewriterState,
    slot: Option<Box<dyn TextSlot>>,
}

impl Typewriter {
    pub fn new(page: &dyn Page, config: &TypewriterConfig) -> Self {
        Self {
            state: TypewriterState::new(config),
            slot: page.typed_text(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    /// Writes the next frame and returns how long to wait before the
    /// following one. `None` stops the animation.
    pub fn advance(&mut self) -> Option<Duration> {
        let slot = self.slot.as_mut()?;
        let frame = self.state.tick()?;
        slot.set_text(&frame.text);
        Some(frame.delay)
    }
}

impl std::fmt::Debug for Typewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typewriter")
            .field("active", &self.is_active())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::memory::MemoryPage;
    use proptest::prelude::*;

    fn config(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            type_delay_ms: 10,
            delete_delay_ms: 5,
            hold_delay_ms: 100,
            restart_delay_ms: 50,
        }
    }

    #[test]
    fn test_full_cycle_and_wrap() {
        let mut state = TypewriterState::new(&config(&["ab", "c"]));
        let frames: Vec<(String, u64)> = (0..8)
            .map(|_| state.tick().unwrap())
            .map(|f| (f.text, f.delay.as_millis() as u64))
            .collect();

        let expected: Vec<(String, u64)> = [
            ("a", 10),
            ("ab", 100),
            ("a", 5),
            ("", 50),
            ("c", 100),
            ("", 50),
            ("a", 10),
            ("ab", 100),
        ]
        .iter()
        .map(|(t, d)| (t.to_string(), *d))
        .collect();
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_deleting_phase_starts_at_full_phrase() {
        let mut state = TypewriterState::new(&config(&["ab", "c"]));
        state.tick();
        assert!(!state.is_deleting());
        state.tick();
        assert!(state.is_deleting(), "full phrase switches to deleting");
        state.tick();
        assert!(state.is_deleting());
        state.tick();
        assert!(!state.is_deleting());
        assert_eq!(state.phrase_index(), 1);
    }

    #[test]
    fn test_no_phrases_no_frames() {
        let mut state = TypewriterState::new(&config(&[]));
        assert_eq!(state.tick(), None);
    }

    #[test]
    fn test_multibyte_phrases_slice_by_char() {
        let mut state = TypewriterState::new(&config(&["héllo ☀"]));
        let texts: Vec<String> = (0..7).map(|_| state.tick().unwrap().text).collect();
        assert_eq!(texts[1], "hé");
        assert_eq!(texts[6], "héllo ☀");
    }

    #[test]
    fn test_empty_phrase_is_skipped_over() {
        let mut state = TypewriterState::new(&config(&["", "x"]));
        assert_eq!(state.tick().unwrap().text, "");
        assert_eq!(state.tick().unwrap().text, "");
        assert_eq!(state.phrase_index(), 1);
        assert_eq!(state.tick().unwrap().text, "x");
    }

    #[test]
    fn test_bound_typewriter_writes_slot() {
        let page = MemoryPage::complete();
        let mut typewriter = Typewriter::new(&page, &config(&["ok"]));
        assert_eq!(typewriter.advance(), Some(Duration::from_millis(10)));
        assert_eq!(page.typed_text.as_ref().unwrap().text(), "o");
    }

    #[test]
    fn test_bound_typewriter_without_slot_stops() {
        let page = MemoryPage::new();
        let mut typewriter = Typewriter::new(&page, &config(&["ok"]));
        assert!(!typewriter.is_active());
        assert_eq!(typewriter.advance(), None);
        assert_eq!(typewriter.state().phrase_index(), 0);
    }

    proptest! {
        #[test]
        fn prop_frames_are_prefixes_changing_by_one_char(
            phrases in prop::collection::vec("[a-zé☀ ]{0,8}", 1..4),
            ticks in 1usize..80,
        ) {
            let refs: Vec<&str> = phrases.iter().map(String::as_str).collect();
            let mut state = TypewriterState::new(&config(&refs));
            let mut previous = 0usize;
            for _ in 0..ticks {
                let index = state.phrase_index();
                let frame = state.tick().unwrap();
                prop_assert!(phrases[index].starts_with(&frame.text));
                let count = frame.text.chars().count();
                prop_assert!(count.abs_diff(previous) <= 1);
                previous = count;
            }
        }
    }
}
