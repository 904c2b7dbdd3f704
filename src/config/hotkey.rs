//! Toggle hotkey parsing and matching.

use crate::input::events::{Key, KeyPress};

/// The mode-toggle binding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Default for KeyBinding {
    /// F12 with no modifiers, the original toggle key.
    fn default() -> Self {
        Self {
            key: Key::F(12),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }
}

impl KeyBinding {
    /// Parse a binding string like "F12", "Ctrl+Shift+D" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = None;

        for part in s.split('+').map(str::trim).filter(|part| !part.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => {
                    if key.is_some() {
                        return Err(format!("More than one key in: {s}"));
                    }
                    key = Some(
                        Key::from_name(part).ok_or_else(|| format!("Unknown key '{part}'"))?,
                    );
                }
            }
        }

        let key = key.ok_or_else(|| format!("No key specified in: {s}"))?;
        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check whether a key press matches this binding exactly, including the
    /// modifier state.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key == press.key
            && self.ctrl == press.ctrl
            && self.shift == press.shift
            && self.alt == press.alt
    }
}
