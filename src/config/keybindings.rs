//! Keybinding configuration types and parsing.
//!
//! Keyboard shortcuts are configurable: each action maps to a list of
//! keybinding strings like `"C"`, `"Ctrl+Z"`, or `"Up"`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit
    Exit,

    // Canvas actions
    ClearCanvas,
    Undo,

    // Pen controls
    CycleColor,
    IncreaseThickness,
    DecreaseThickness,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Z" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        // Normalize by removing spaces around '+'
        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let parts: Vec<&str> = s_normalized.split('+').collect();

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {s}"));
        }

        // Joining with '+' turns the empty parts left behind by a trailing
        // "++" back into the literal '+' key.
        let key = key_parts.join("+");

        if key.is_empty() {
            Ok(Self {
                key: "+".to_string(),
                ctrl,
                shift,
                alt,
            })
        } else {
            Ok(Self {
                key,
                ctrl,
                shift,
                alt,
            })
        }
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// undo = ["U", "Ctrl+Z"]
/// clear_canvas = ["R"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_cycle_color")]
    pub cycle_color: Vec<String>,

    #[serde(default = "default_increase_thickness")]
    pub increase_thickness: Vec<String>,

    #[serde(default = "default_decrease_thickness")]
    pub decrease_thickness: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            undo: default_undo(),
            cycle_color: default_cycle_color(),
            increase_thickness: default_increase_thickness(),
            decrease_thickness: default_decrease_thickness(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or duplicated.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding, action) {
                return Err(format!(
                    "Duplicate keybinding '{binding_str}' assigned to both {existing_action:?} and {action:?}"
                ));
            }
            Ok(())
        };

        for binding_str in &self.exit {
            insert_binding(binding_str, Action::Exit)?;
        }

        for binding_str in &self.clear_canvas {
            insert_binding(binding_str, Action::ClearCanvas)?;
        }

        for binding_str in &self.undo {
            insert_binding(binding_str, Action::Undo)?;
        }

        for binding_str in &self.cycle_color {
            insert_binding(binding_str, Action::CycleColor)?;
        }

        for binding_str in &self.increase_thickness {
            insert_binding(binding_str, Action::IncreaseThickness)?;
        }

        for binding_str in &self.decrease_thickness {
            insert_binding(binding_str, Action::DecreaseThickness)?;
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["U".to_string(), "Ctrl+Z".to_string()]
}

fn default_cycle_color() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_increase_thickness() -> Vec<String> {
    vec!["Up".to_string(), "+".to_string()]
}

fn default_decrease_thickness() -> Vec<String> {
    vec!["Down".to_string(), "-".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn parse_modifier_order_is_irrelevant() {
        let binding1 = KeyBinding::parse("Ctrl+Shift+W").unwrap();
        let binding2 = KeyBinding::parse("Shift+Ctrl+W").unwrap();
        assert_eq!(binding1, binding2);
    }

    #[test]
    fn parse_with_spaces() {
        let binding = KeyBinding::parse("Ctrl + Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
    }

    #[test]
    fn parse_plus_as_the_key() {
        let binding = KeyBinding::parse("+").unwrap();
        assert_eq!(binding.key, "+");
        assert!(!binding.ctrl);

        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn matches_is_case_insensitive_on_the_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert!(binding.matches("z", true, false, false));
        assert!(binding.matches("Z", true, false, false));
        assert!(!binding.matches("z", false, false, false));
        assert!(!binding.matches("x", true, false, false));
    }

    #[test]
    fn default_map_contains_the_stock_bindings() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Exit));

        let cycle = KeyBinding::parse("C").unwrap();
        assert_eq!(map.get(&cycle), Some(&Action::CycleColor));

        let undo = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(map.get(&undo), Some(&Action::Undo));

        let up = KeyBinding::parse("Up").unwrap();
        assert_eq!(map.get(&up), Some(&Action::IncreaseThickness));
    }

    #[test]
    fn duplicate_keybindings_are_rejected() {
        let config = KeybindingsConfig {
            exit: vec!["Ctrl+Z".to_string()],
            undo: vec!["Ctrl+Z".to_string()],
            ..Default::default()
        };

        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains("Ctrl+Z"));
    }
}
