//! Abstract keyboard key, independent of the browser binding.
//!
//! Converted from `KeyboardEvent.key` at the web boundary so the handlers can
//! be driven without `web-sys` types.

/// Abstract key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Tab key
    Tab,
    /// Any printable character
    Char(char),
    /// Any other named key (`ArrowUp`, `F5`, ...)
    Other(String),
}

impl InputKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => InputKey::Esc,
            "Enter" => InputKey::Enter,
            "Tab" => InputKey::Tab,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputKey::Char(c),
                    _ => InputKey::Other(key.to_string()),
                }
            }
        }
    }
}
