// Input configuration and remapping

use super::action::{default_command_bindings, default_movement_bindings, Action, InputSource};
use std::collections::HashMap;

/// Key-to-action table for the single local player.
///
/// Each source maps to at most one action; an action may have any number of
/// sources.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create a configuration with the default movement and command bindings
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        for (source, action) in default_movement_bindings()
            .into_iter()
            .chain(default_command_bindings())
        {
            config.bind(source, action);
        }
        config
    }

    /// Bind a source to an action, returning the action it was bound to before
    pub fn bind(&mut self, source: InputSource, action: Action) -> Option<Action> {
        self.bindings.insert(source, action)
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}
