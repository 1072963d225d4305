//! Models for slash command invocations.

use std::collections::HashMap;
use std::fmt;

/// Value of the `option` argument of the opt-in toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOption {
    On,
    Off,
}

impl ToggleOption {
    /// Parses the literal choice value sent by Discord.
    ///
    /// # Returns
    /// - `Some(ToggleOption)` - Value was `on` or `off`
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for ToggleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slash command invocation reduced to what command handlers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    /// String option values keyed by option name.
    pub options: HashMap<String, String>,
    pub user_id: String,
}

impl CommandInvocation {
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}
