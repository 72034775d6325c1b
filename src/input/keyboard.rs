//! Keyboard bindings.

use super::Command;
use crate::calculator::Operator;

/// A key press as reported by the keyboard: the key value plus the shift state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// Key value, either the typed character (`"7"`, `"+"`) or a key name (`"Enter"`).
    pub key: String,
    /// Whether shift was held.
    pub shift: bool,
}

impl KeyPress {
    /// A key press without shift.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: false,
        }
    }

    /// A key press with shift held.
    pub fn shifted(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: true,
        }
    }
}

/// Resolve a key press to a command.
///
/// Bindings are checked in order, so `=` with shift held is addition while a
/// plain `=` evaluates. Keys without a binding return `None`.
pub fn command_for_key(press: &KeyPress) -> Option<Command> {
    let key = press.key.as_str();

    if let Some(digit) = single_digit(key) {
        return Some(Command::Digit(digit));
    }
    if key == "." {
        return Some(Command::Decimal);
    }
    if key == "+" || (key == "=" && press.shift) {
        return Some(Operator::Add.into());
    }
    if key == "-" {
        return Some(Operator::Subtract.into());
    }
    if key == "*" || key.eq_ignore_ascii_case("x") {
        return Some(Operator::Multiply.into());
    }
    if key == "/" {
        return Some(Operator::Divide.into());
    }

    match key {
        "Enter" | "=" => Some(Command::Evaluate),
        "Backspace" => Some(Command::Backspace),
        "Escape" => Some(Command::Clear),
        "%" => Some(Command::Percent),
        _ => None,
    }
}

fn single_digit(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}
