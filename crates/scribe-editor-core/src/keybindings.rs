//! Keyboard shortcuts for formatting actions.
//!
//! Platform-agnostic key types plus a table mapping key combinations to
//! registry ids. Platform code converts native key events into `KeyCombo`
//! and asks the config which action (if any) to dispatch.

use std::collections::HashMap;
use std::fmt;

use smol_str::SmolStr;

use crate::error::FormatError;
use crate::registry::get_formatting_action;

/// Key values for keyboard input.
///
/// Character keys are stored lowercased so Shift doesn't change identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl AsRef<str>) -> Self {
        Self::Character(SmolStr::new(s.as_ref().to_lowercase()))
    }

    /// Convert a DOM `KeyboardEvent.code` value.
    ///
    /// Physical codes are layout-independent, so `Shift+8` stays `8` instead
    /// of becoming `*`.
    pub fn from_dom_code(code: &str) -> Self {
        if let Some(letter) = code.strip_prefix("Key") {
            return Self::character(letter);
        }
        if let Some(digit) = code.strip_prefix("Digit") {
            return Self::character(digit);
        }
        match code {
            "Period" => Self::character("."),
            "Comma" => Self::character(","),
            "Slash" => Self::character("/"),
            "Minus" => Self::character("-"),
            "Equal" => Self::character("="),
            "Backquote" => Self::character("`"),
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Enter" | "NumpadEnter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            "Space" => Self::Space,
            _ => Self::Unidentified,
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Get the primary modifier + Shift for the platform.
    pub fn primary_shift(is_mac: bool) -> Self {
        if is_mac {
            Self::META_SHIFT
        } else {
            Self::CTRL_SHIFT
        }
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn primary(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary(is_mac),
        }
    }

    pub fn primary_shift(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary_shift(is_mac),
        }
    }
}

impl fmt::Display for KeyCombo {
    /// Tooltip form, e.g. `Ctrl+Shift+8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.meta {
            f.write_str("Cmd+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        match &self.key {
            Key::Character(c) => f.write_str(&c.to_uppercase()),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Maps key combinations to formatting action ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, &'static str>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::default_for(false)
    }
}

impl KeybindingConfig {
    /// An empty config with no shortcuts.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Default shortcuts for the platform.
    pub fn default_for(is_mac: bool) -> Self {
        let primary = |c: &str| KeyCombo::primary(Key::character(c), is_mac);
        let primary_shift = |c: &str| KeyCombo::primary_shift(Key::character(c), is_mac);

        let mut bindings = HashMap::new();
        bindings.insert(primary("b"), "bold");
        bindings.insert(primary("i"), "italic");
        bindings.insert(primary_shift("x"), "strikethrough");
        bindings.insert(primary("e"), "code");
        bindings.insert(primary("1"), "heading-1");
        bindings.insert(primary("2"), "heading-2");
        bindings.insert(primary("3"), "heading-3");
        bindings.insert(primary("4"), "heading-4");
        bindings.insert(primary("5"), "heading-5");
        bindings.insert(primary("6"), "heading-6");
        bindings.insert(primary_shift("8"), "bullet-list");
        bindings.insert(primary_shift("7"), "ordered-list");
        bindings.insert(primary_shift("9"), "task-list");
        bindings.insert(primary_shift("."), "blockquote");
        bindings.insert(primary_shift("c"), "code-block");
        bindings.insert(primary("k"), "link");
        bindings.insert(primary_shift("i"), "image");

        Self { bindings }
    }

    /// Bind a combo to a registered action, replacing any existing binding.
    pub fn bind(&mut self, combo: KeyCombo, id: &str) -> Result<(), FormatError> {
        let descriptor =
            get_formatting_action(id).ok_or_else(|| FormatError::UnknownAction(id.to_owned()))?;
        self.bindings.insert(combo, descriptor.id);
        Ok(())
    }

    /// Remove a binding. Returns the id it pointed at.
    pub fn unbind(&mut self, combo: &KeyCombo) -> Option<&'static str> {
        self.bindings.remove(combo)
    }

    /// Find the action id bound to a combo.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&'static str> {
        self.bindings.get(combo).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &'static str)> + '_ {
        self.bindings.iter().map(|(combo, id)| (combo, *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_resolve_to_registered_actions() {
        for is_mac in [false, true] {
            let config = KeybindingConfig::default_for(is_mac);
            assert!(!config.is_empty());
            for (_, id) in config.iter() {
                assert!(get_formatting_action(id).is_some(), "unregistered id {id}");
            }
        }
    }

    #[test]
    fn test_registry_hints_match_defaults() {
        let config = KeybindingConfig::default_for(false);
        for (combo, id) in config.iter() {
            let descriptor = get_formatting_action(id).unwrap();
            assert_eq!(descriptor.shortcut_hint, combo.to_string(), "hint for {id}");
        }
        let hinted = crate::registry::formatting_actions()
            .iter()
            .filter(|a| !a.shortcut_hint.is_empty())
            .count();
        assert_eq!(hinted, config.len());
    }

    #[test]
    fn test_primary_modifier_per_platform() {
        let ctrl_b = KeyCombo::with_modifiers(Key::character("b"), Modifiers::CTRL);
        let cmd_b = KeyCombo::with_modifiers(Key::character("b"), Modifiers::META);

        let linux = KeybindingConfig::default_for(false);
        assert_eq!(linux.lookup(&ctrl_b), Some("bold"));
        assert_eq!(linux.lookup(&cmd_b), None);

        let mac = KeybindingConfig::default_for(true);
        assert_eq!(mac.lookup(&cmd_b), Some("bold"));
        assert_eq!(mac.lookup(&ctrl_b), None);
    }

    #[test]
    fn test_character_keys_ignore_case() {
        let config = KeybindingConfig::default();
        let combo = KeyCombo::with_modifiers(Key::character("I"), Modifiers::CTRL_SHIFT);
        assert_eq!(config.lookup(&combo), Some("image"));
    }

    #[test]
    fn test_dom_codes() {
        assert_eq!(Key::from_dom_code("KeyB"), Key::character("b"));
        assert_eq!(Key::from_dom_code("Digit8"), Key::character("8"));
        assert_eq!(Key::from_dom_code("Period"), Key::character("."));
        assert_eq!(Key::from_dom_code("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_code("F13"), Key::Unidentified);

        let config = KeybindingConfig::default();
        let combo = KeyCombo::with_modifiers(Key::from_dom_code("Digit8"), Modifiers::CTRL_SHIFT);
        assert_eq!(config.lookup(&combo), Some("bullet-list"));
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut config = KeybindingConfig::empty();
        let combo = KeyCombo::primary(Key::character("h"), false);

        assert_eq!(
            config.bind(combo.clone(), "underline"),
            Err(FormatError::UnknownAction("underline".into()))
        );
        config.bind(combo.clone(), "horizontal-rule").unwrap();
        assert_eq!(config.lookup(&combo), Some("horizontal-rule"));
        assert_eq!(config.unbind(&combo), Some("horizontal-rule"));
        assert!(config.is_empty());
    }

    #[test]
    fn test_unmodified_key_is_unbound() {
        let config = KeybindingConfig::default();
        assert_eq!(config.lookup(&KeyCombo::new(Key::character("b"))), None);
    }
}
