//! Typed per-frame signals delivered to game objects

use serde::{Deserialize, Serialize};

/// A signal pushed onto a game object by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Signal {
    /// Accelerate left
    MoveLeft,
    /// Accelerate right
    MoveRight,
    /// No horizontal intent, decay toward standstill
    MoveNeutral,
    /// Jump if standing on something
    Jump,
    /// Landed on ground; snap to this y position
    HitGround(f32),
}

/// LIFO stack of pending signals
///
/// The most recently pushed signal is consumed first. The simulation relies
/// on this to let `HitGround` (pushed last) land the player before `Jump`
/// is considered in the same frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalStack {
    signals: Vec<Signal>,
}

impl SignalStack {
    pub fn new() -> Self {
        Self {
            signals: Vec::with_capacity(4),
        }
    }

    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// Remove and return the most recently pushed signal
    pub fn pop(&mut self) -> Option<Signal> {
        self.signals.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_last_in_first_out() {
        let mut stack = SignalStack::new();
        stack.push(Signal::MoveRight);
        stack.push(Signal::Jump);
        stack.push(Signal::HitGround(4.0));
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop(), Some(Signal::HitGround(4.0)));
        assert_eq!(stack.pop(), Some(Signal::Jump));
        assert_eq!(stack.pop(), Some(Signal::MoveRight));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut stack = SignalStack::default();
        assert_eq!(stack.pop(), None);
        stack.push(Signal::MoveNeutral);
        stack.clear();
        assert_eq!(stack.pop(), None);
    }
}
