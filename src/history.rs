//! Linear undo/redo history of password values.

use log::debug;
use zeroize::Zeroize;

/// Ordered values plus a cursor. `cursor == None` means before the start.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
    skip: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value change after the cursor, discarding any redo entries.
    ///
    /// After `back`/`forward` the skip flag is set and the next call is
    /// consumed; if it carries the value under the cursor it is the echo of
    /// the navigation and nothing is recorded.
    pub fn record(&mut self, value: &str) {
        if std::mem::take(&mut self.skip) && self.current() == Some(value) {
            return;
        }

        let at = self.cursor.map_or(0, |c| c + 1);
        if at < self.entries.len() {
            debug!("history: dropping {} redo entries", self.entries.len() - at);
            for mut dropped in self.entries.drain(at..) {
                dropped.zeroize();
            }
        }

        self.entries.push(value.to_string());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry.
    pub fn back(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            self.cursor = None;
            return None;
        }

        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.skip = true;
                self.current().map(str::to_string)
            }
            _ => {
                self.cursor = Some(0);
                None
            }
        }
    }

    /// Step forward one entry.
    pub fn forward(&mut self) -> Option<String> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            self.cursor = self.entries.len().checked_sub(1);
            return None;
        }

        self.cursor = Some(next);
        self.skip = true;
        self.current().map(str::to_string)
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|c| self.entries.get(c))
            .map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_forward(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }
}

impl Drop for History {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            entry.zeroize();
        }
    }
}
