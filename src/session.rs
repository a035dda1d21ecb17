//! Interactive session state.
//!
//! Holds what the screen shows (current value, toggles, info line) and routes
//! every value change through the history buffer and the magic-word rules.

use log::debug;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::entropy::SecureRng;
use crate::history::History;
use crate::pass::{Generator, MAX_LENGTH, MIN_LENGTH, Strength, clamp_length, magic, strength};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagicState {
    #[default]
    Off,
    /// Snapshot taken; edits still refresh it.
    Armed,
    /// At least one masked value generated; snapshot frozen.
    Applied,
}

pub struct Session<R = OsRng> {
    generator: Generator<R>,
    history: History,
    value: String,
    length: usize,
    use_punctuation: bool,
    magic: MagicState,
    remembered: Option<String>,
    info: String,
    edits: usize,
    over_limit: bool,
}

impl Session<OsRng> {
    pub fn new() -> Self {
        Self::with_generator(Generator::new())
    }
}

impl Default for Session<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRng> Session<R> {
    pub fn with_generator(generator: Generator<R>) -> Self {
        Self {
            generator,
            history: History::new(),
            value: String::new(),
            length: MIN_LENGTH,
            use_punctuation: true,
            magic: MagicState::Off,
            remembered: None,
            info: "No Password ...".to_string(),
            edits: 0,
            over_limit: false,
        }
    }

    /// Generate a new value, or a masked variant of the snapshot in magic mode.
    pub fn generate(&mut self) {
        let new = match (self.magic, self.remembered.as_deref()) {
            (MagicState::Armed | MagicState::Applied, Some(snapshot)) => {
                self.magic = MagicState::Applied;
                self.generator.mask(snapshot)
            }
            _ => self.generator.generate(self.length, self.use_punctuation),
        };

        self.change_value(new, None);
        self.info = format!("Password({}) generated!", self.value.chars().count());
    }

    /// Apply a manual edit. `cursor` is the char position just after the
    /// edit point. Returns the cursor to use after the edit was accepted.
    pub fn edit(&mut self, value: String, cursor: usize) -> usize {
        let over = value.chars().count() > MAX_LENGTH;
        self.change_value(value, Some(cursor));
        let cursor = if over { cursor.saturating_sub(1) } else { cursor };
        cursor.min(self.value.chars().count())
    }

    fn change_value(&mut self, mut new: String, cursor: Option<usize>) {
        self.over_limit = false;
        if new.chars().count() > MAX_LENGTH {
            // drop the character that was just inserted, else the last one
            let inserted = cursor
                .and_then(|c| c.checked_sub(1))
                .and_then(|at| new.char_indices().nth(at));
            let idx = inserted
                .or_else(|| new.char_indices().next_back())
                .map(|(idx, _)| idx);
            if let Some(idx) = idx {
                new.remove(idx);
            }
            if let Some((end, _)) = new.char_indices().nth(MAX_LENGTH) {
                new[end..].zeroize();
                new.truncate(end);
            }
            self.over_limit = true;
        }

        self.history.record(&new);
        self.value.zeroize();
        self.value = new;
        self.edits += 1;

        let length = self.value.chars().count();
        if !magic::is_eligible(&self.value) {
            if self.magic != MagicState::Off {
                debug!("value no longer eligible for magic word");
            }
            self.clear_magic();
        } else if self.magic == MagicState::Armed {
            if let Some(snapshot) = self.remembered.as_mut() {
                snapshot.zeroize();
            }
            self.remembered = Some(self.value.clone());
        }

        self.info = if self.over_limit {
            format!("Reached max password length {}!", MAX_LENGTH)
        } else {
            format!("Password({}) edited.", length)
        };
    }

    fn clear_magic(&mut self) {
        self.magic = MagicState::Off;
        if let Some(mut snapshot) = self.remembered.take() {
            snapshot.zeroize();
        }
    }

    pub fn toggle_punctuation(&mut self) {
        self.use_punctuation = !self.use_punctuation;
        self.info = format!(
            "Punctuation {}",
            if self.use_punctuation { "on" } else { "off" }
        );
    }

    /// Change the requested length. Refused while magic mode locks it.
    pub fn set_length(&mut self, requested: usize) -> bool {
        if self.length_locked() {
            self.info = "Length is locked while Magic Word is on".to_string();
            return false;
        }
        self.length = clamp_length(requested);
        self.info = format!("New Password Length: {}", self.length);
        true
    }

    /// Snapshot the current value and switch to magic mode.
    pub fn enable_magic(&mut self) -> bool {
        if self.magic != MagicState::Off {
            return true;
        }
        if !self.can_magic() {
            self.info = format!(
                "Magic Word needs {} characters and {} letters",
                magic::MIN_MAGIC_LENGTH,
                magic::MIN_MAGIC_LETTERS
            );
            return false;
        }
        self.remembered = Some(self.value.clone());
        self.magic = MagicState::Armed;
        self.info = "Magic Word on".to_string();
        true
    }

    /// Put the remembered value back and leave magic mode.
    pub fn restore(&mut self) -> bool {
        let Some(snapshot) = self.remembered.take() else {
            return false;
        };
        self.magic = MagicState::Off;
        self.change_value(snapshot, None);
        self.info = format!("Password({}) restored.", self.value.chars().count());
        true
    }

    pub fn toggle_magic(&mut self) -> bool {
        match self.magic {
            MagicState::Off => self.enable_magic(),
            MagicState::Armed | MagicState::Applied => self.restore(),
        }
    }

    pub fn undo(&mut self) -> bool {
        match self.history.back() {
            Some(value) => {
                self.change_value(value, None);
                self.info = "Undo".to_string();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.forward() {
            Some(value) => {
                self.change_value(value, None);
                self.info = "Redo".to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn use_punctuation(&self) -> bool {
        self.use_punctuation
    }

    pub fn magic(&self) -> MagicState {
        self.magic
    }

    pub fn remembered(&self) -> Option<&str> {
        self.remembered.as_deref()
    }

    pub fn can_magic(&self) -> bool {
        magic::is_eligible(&self.value)
    }

    pub fn length_locked(&self) -> bool {
        self.magic != MagicState::Off
    }

    pub fn over_limit(&self) -> bool {
        self.over_limit
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn edits(&self) -> usize {
        self.edits
    }

    pub fn strength(&self) -> Strength {
        strength::estimate(&self.value)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl<R> Drop for Session<R> {
    fn drop(&mut self) {
        self.value.zeroize();
        if let Some(snapshot) = self.remembered.as_mut() {
            snapshot.zeroize();
        }
    }
}
