//! Panel trait for overlays that own their own cursor state

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// Trait for UI panels that can handle input
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;
}
