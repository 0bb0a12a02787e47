//! Keyboard-style input with edge detection
//!
//! Key events arrive between frames and are folded into per-action states.
//! `advance()` ages them once per frame: a fresh press is visible as
//! "pressed" for exactly one frame before it becomes "held".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical actions the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    ToggleHitboxes,
}

/// Per-frame input queries consumed by the simulation
pub trait InputSource {
    /// Down this frame (including the frame it was pressed)
    fn is_held(&self, action: Action) -> bool;
    /// Went down since the previous frame
    fn is_pressed(&self, action: Action) -> bool;
    /// Went up since the previous frame
    fn is_released(&self, action: Action) -> bool;
    /// Age edge states at the end of a frame
    fn advance(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyState {
    #[default]
    Up,
    Pressed,
    Down,
    Released,
}

impl KeyState {
    fn advanced(self) -> Self {
        match self {
            KeyState::Pressed => KeyState::Down,
            KeyState::Released => KeyState::Up,
            other => other,
        }
    }
}

/// Key name → action map. Several keys may drive the same action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub keys: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            ("a", Action::MoveLeft),
            ("Left", Action::MoveLeft),
            ("d", Action::MoveRight),
            ("Right", Action::MoveRight),
            ("w", Action::Jump),
            ("space", Action::Jump),
            ("Up", Action::Jump),
            ("h", Action::ToggleHitboxes),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_string(), action))
        .collect();
        Self { keys }
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.keys.get(key).copied()
    }
}

/// Keyboard input source fed by key press/release events
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    bindings: KeyBindings,
    states: HashMap<Action, KeyState>,
}

impl KeyboardInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            states: HashMap::new(),
        }
    }

    /// Record a key press; unbound keys are ignored
    pub fn press_key(&mut self, key: &str) {
        if let Some(action) = self.bindings.action_for(key) {
            self.press(action);
        }
    }

    /// Record a key release; unbound keys are ignored
    pub fn release_key(&mut self, key: &str) {
        if let Some(action) = self.bindings.action_for(key) {
            self.release(action);
        }
    }

    pub fn press(&mut self, action: Action) {
        let state = self.states.entry(action).or_default();
        // Auto-repeat presses while held must not re-trigger the edge
        if !matches!(state, KeyState::Down | KeyState::Pressed) {
            *state = KeyState::Pressed;
        }
    }

    pub fn release(&mut self, action: Action) {
        let state = self.states.entry(action).or_default();
        if !matches!(state, KeyState::Up | KeyState::Released) {
            *state = KeyState::Released;
        }
    }

    pub fn state(&self, action: Action) -> KeyState {
        self.states.get(&action).copied().unwrap_or_default()
    }
}

impl InputSource for KeyboardInput {
    fn is_held(&self, action: Action) -> bool {
        matches!(self.state(action), KeyState::Pressed | KeyState::Down)
    }

    fn is_pressed(&self, action: Action) -> bool {
        self.state(action) == KeyState::Pressed
    }

    fn is_released(&self, action: Action) -> bool {
        self.state(action) == KeyState::Released
    }

    fn advance(&mut self) {
        for state in self.states.values_mut() {
            *state = state.advanced();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_lasts_one_frame() {
        let mut input = KeyboardInput::default();
        input.press_key("space");
        assert!(input.is_pressed(Action::Jump));
        assert!(input.is_held(Action::Jump));

        input.advance();
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.is_held(Action::Jump));
        assert_eq!(input.state(Action::Jump), KeyState::Down);
    }

    #[test]
    fn test_release_edge_lasts_one_frame() {
        let mut input = KeyboardInput::default();
        input.press_key("h");
        input.advance();
        input.release_key("h");
        assert!(input.is_released(Action::ToggleHitboxes));
        assert!(!input.is_held(Action::ToggleHitboxes));

        input.advance();
        assert!(!input.is_released(Action::ToggleHitboxes));
        assert_eq!(input.state(Action::ToggleHitboxes), KeyState::Up);
    }

    #[test]
    fn test_repeat_press_does_not_retrigger() {
        let mut input = KeyboardInput::default();
        input.press(Action::Jump);
        input.advance();
        input.press(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_many_keys_one_action() {
        let mut input = KeyboardInput::default();
        input.press_key("Left");
        assert!(input.is_held(Action::MoveLeft));
        input.release_key("a");
        assert!(!input.is_held(Action::MoveLeft));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut input = KeyboardInput::new(KeyBindings {
            keys: HashMap::new(),
        });
        input.press_key("space");
        assert!(!input.is_held(Action::Jump));
        assert_eq!(input.state(Action::Jump), KeyState::Up);
    }

    #[test]
    fn test_bindings_from_json() {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{ "keys": { "k": "Jump", "j": "MoveLeft" } }"#).unwrap();
        assert_eq!(bindings.action_for("k"), Some(Action::Jump));
        assert_eq!(bindings.action_for("space"), None);
    }
}
