//! Button clicks.
//!
//! A button carries at most one of three attributes: `num` (a digit), `op`
//! (an operator or `percent`) and `action` (`clear`, `backspace`, `decimal`,
//! `sign`, `equals`). The first present attribute decides what it does.

use super::Command;
use crate::calculator::Operator;

/// Operator-row button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonOp {
    Percent,
    Operator(Operator),
}

/// Action-row button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Clear,
    Backspace,
    Decimal,
    Sign,
    Equals,
}

impl ButtonAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            "decimal" => Some(Self::Decimal),
            "sign" => Some(Self::Sign),
            "equals" => Some(Self::Equals),
            _ => None,
        }
    }
}

/// A calculator button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Num(char),
    Op(ButtonOp),
    Action(ButtonAction),
}

impl Button {
    /// Build a button from its `num`, `op` and `action` attributes.
    ///
    /// Returns `None` when the deciding attribute has an unknown value.
    pub fn from_attributes(num: Option<&str>, op: Option<&str>, action: Option<&str>) -> Option<Self> {
        if let Some(num) = num {
            let mut chars = num.chars();
            return match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => Some(Self::Num(digit)),
                _ => None,
            };
        }

        // An empty `op` falls through to `action`.
        if let Some(op) = op.filter(|op| !op.is_empty()) {
            return match op {
                "percent" => Some(Self::Op(ButtonOp::Percent)),
                name => Operator::from_name(name).map(|o| Self::Op(ButtonOp::Operator(o))),
            };
        }

        action
            .and_then(ButtonAction::from_name)
            .map(Self::Action)
    }

    /// The command a click on this button performs.
    pub fn command(self) -> Command {
        match self {
            Self::Num(digit) => Command::Digit(digit),
            Self::Op(ButtonOp::Percent) => Command::Percent,
            Self::Op(ButtonOp::Operator(operator)) => Command::Operator(operator),
            Self::Action(ButtonAction::Clear) => Command::Clear,
            Self::Action(ButtonAction::Backspace) => Command::Backspace,
            Self::Action(ButtonAction::Decimal) => Command::Decimal,
            Self::Action(ButtonAction::Sign) => Command::ToggleSign,
            Self::Action(ButtonAction::Equals) => Command::Evaluate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_attribute() {
        assert_eq!(
            Button::from_attributes(Some("7"), None, None),
            Some(Button::Num('7'))
        );
        assert_eq!(Button::from_attributes(Some("12"), None, None), None);
        // `num` wins even when other attributes are set.
        assert_eq!(
            Button::from_attributes(Some("3"), Some("plus"), Some("clear")),
            Some(Button::Num('3'))
        );
    }

    #[test]
    fn test_op_attribute() {
        assert_eq!(
            Button::from_attributes(None, Some("divide"), None).map(Button::command),
            Some(Command::Operator(Operator::Divide))
        );
        assert_eq!(
            Button::from_attributes(None, Some("percent"), None).map(Button::command),
            Some(Command::Percent)
        );
        assert_eq!(Button::from_attributes(None, Some("modulo"), None), None);
        // An unknown `op` does not fall back to the action.
        assert_eq!(
            Button::from_attributes(None, Some("modulo"), Some("clear")),
            None
        );
        assert_eq!(
            Button::from_attributes(None, Some(""), Some("clear")),
            Some(Button::Action(ButtonAction::Clear))
        );
    }

    #[test]
    fn test_action_attribute() {
        let cases = [
            ("clear", Command::Clear),
            ("backspace", Command::Backspace),
            ("decimal", Command::Decimal),
            ("sign", Command::ToggleSign),
            ("equals", Command::Evaluate),
        ];
        for (name, expected) in cases {
            assert_eq!(
                Button::from_attributes(None, None, Some(name)).map(Button::command),
                Some(expected)
            );
        }
        assert_eq!(Button::from_attributes(None, None, Some("undo")), None);
        assert_eq!(Button::from_attributes(None, None, None), None);
    }
}
