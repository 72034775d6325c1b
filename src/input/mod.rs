//! Input adapters: keyboard keys and button clicks mapped onto calculator commands.

mod keyboard;
mod pointer;
mod script;

pub use keyboard::{KeyPress, command_for_key};
pub use pointer::{Button, ButtonAction, ButtonOp};
pub use script::{parse_click, parse_clicks, parse_key_sequence};

use crate::calculator::{Calculator, Operator, TextSink};
use thiserror::Error;

/// Errors from reading textual key or click scripts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unterminated key name starting at offset {0}")]
    UnterminatedKey(usize),
    #[error("empty key name at offset {0}")]
    EmptyKey(usize),
    #[error("malformed click `{0}`, expected num:<digit>, op:<name> or action:<name>")]
    MalformedClick(String),
}

/// A single operation on the calculator.
///
/// Every key binding and button resolves to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9`
    Digit(char),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operator),
    /// Convert to a percentage
    Percent,
    /// Flip the sign
    ToggleSign,
    /// Delete the last character
    Backspace,
    /// Reset everything
    Clear,
    /// Evaluate the pending operator
    Evaluate,
}

impl Command {
    /// Get a short name for this command, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Percent => "percent",
            Self::ToggleSign => "sign",
            Self::Backspace => "backspace",
            Self::Clear => "clear",
            Self::Evaluate => "equals",
        }
    }
}

impl From<Operator> for Command {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

/// Apply a command to the calculator.
pub fn dispatch<D: TextSink, H: TextSink>(calculator: &mut Calculator<D, H>, command: Command) {
    tracing::debug!(command = command.name(), ?command, "Applying command");

    match command {
        Command::Digit(digit) => calculator.append_digit(digit),
        Command::Decimal => calculator.append_digit('.'),
        Command::Operator(operator) => calculator.choose_operator(operator),
        Command::Percent => calculator.percent(),
        Command::ToggleSign => calculator.toggle_sign(),
        Command::Backspace => calculator.backspace(),
        Command::Clear => calculator.clear_all(),
        Command::Evaluate => {
            calculator.compute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(commands: &[Command]) -> Calculator<String, String> {
        let mut calc = Calculator::new(String::new(), String::new());
        for &command in commands {
            dispatch(&mut calc, command);
        }
        calc
    }

    #[test]
    fn test_dispatch_sequence() {
        let calc = run(&[
            Command::Digit('2'),
            Command::Operator(Operator::Add),
            Command::Digit('3'),
            Command::Operator(Operator::Multiply),
            Command::Digit('4'),
            Command::Evaluate,
        ]);
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_dispatch_editing() {
        let calc = run(&[
            Command::Digit('5'),
            Command::Decimal,
            Command::Digit('2'),
            Command::ToggleSign,
            Command::Backspace,
        ]);
        assert_eq!(calc.display(), "-5.");

        let calc = run(&[Command::Digit('5'), Command::Digit('0'), Command::Percent]);
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_dispatch_clear() {
        let calc = run(&[
            Command::Digit('9'),
            Command::from(Operator::Subtract),
            Command::Clear,
        ]);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history(), "");
        assert_eq!(calc.operator(), None);
    }
}
