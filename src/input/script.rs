//! Textual key and click scripts, used to drive the calculator from the command line.
//!
//! A key script is a string where each character is one key press, except
//! `<Name>` which presses a named key (`<Enter>`, `<Backspace>`, `<Escape>`)
//! and `<S-key>` which presses `key` with shift held. Whitespace is skipped.
//!
//! A click script is a whitespace-separated list of `num:<digit>`,
//! `op:<name>` and `action:<name>` tokens.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Button, InputError, KeyPress};

lazy_static! {
    /// A bracketed key name, a stray `<`, or any other single character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([^<>]*)>|<|[^<]").unwrap();
}

/// Parse a key script into key presses.
pub fn parse_key_sequence(script: &str) -> Result<Vec<KeyPress>, InputError> {
    let mut presses = Vec::new();

    for captures in KEY_TOKEN.captures_iter(script) {
        let Some(token) = captures.get(0) else {
            continue;
        };

        let Some(name) = captures.get(1) else {
            let text = token.as_str();
            if text == "<" {
                return Err(InputError::UnterminatedKey(token.start()));
            }
            if !text.trim().is_empty() {
                presses.push(KeyPress::new(text));
            }
            continue;
        };

        let press = match name.as_str().strip_prefix("S-") {
            Some(key) => KeyPress::shifted(key),
            None => KeyPress::new(name.as_str()),
        };
        if press.key.is_empty() {
            return Err(InputError::EmptyKey(token.start()));
        }
        presses.push(press);
    }

    Ok(presses)
}

/// Parse a single click token such as `num:7` or `action:equals`.
pub fn parse_click(token: &str) -> Result<Button, InputError> {
    let malformed = || InputError::MalformedClick(token.to_string());

    let (kind, value) = token.split_once(':').ok_or_else(malformed)?;
    let button = match kind {
        "num" => Button::from_attributes(Some(value), None, None),
        "op" => Button::from_attributes(None, Some(value), None),
        "action" => Button::from_attributes(None, None, Some(value)),
        _ => None,
    };

    button.ok_or_else(malformed)
}

/// Parse a whitespace-separated click script.
pub fn parse_clicks(script: &str) -> Result<Vec<Button>, InputError> {
    script.split_whitespace().map(parse_click).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::input::{ButtonAction, ButtonOp};

    fn keys(script: &str) -> Vec<KeyPress> {
        parse_key_sequence(script).unwrap()
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            keys("12+3"),
            vec![
                KeyPress::new("1"),
                KeyPress::new("2"),
                KeyPress::new("+"),
                KeyPress::new("3"),
            ]
        );
        assert_eq!(keys("1 + 2"), keys("1+2"));
    }

    #[test]
    fn test_named_and_shifted_keys() {
        assert_eq!(
            keys("9<Backspace><S-=><Enter>"),
            vec![
                KeyPress::new("9"),
                KeyPress::new("Backspace"),
                KeyPress::shifted("="),
                KeyPress::new("Enter"),
            ]
        );
    }

    #[test]
    fn test_malformed_key_scripts() {
        assert_eq!(
            parse_key_sequence("12<Enter"),
            Err(InputError::UnterminatedKey(2))
        );
        assert_eq!(parse_key_sequence("1<>"), Err(InputError::EmptyKey(1)));
        assert_eq!(parse_key_sequence("<S->"), Err(InputError::EmptyKey(0)));
    }

    #[test]
    fn test_click_tokens() {
        assert_eq!(parse_click("num:4"), Ok(Button::Num('4')));
        assert_eq!(
            parse_click("op:minus"),
            Ok(Button::Op(ButtonOp::Operator(Operator::Subtract)))
        );
        assert_eq!(
            parse_click("action:sign"),
            Ok(Button::Action(ButtonAction::Sign))
        );
        assert!(matches!(
            parse_click("num:x"),
            Err(InputError::MalformedClick(_))
        ));
        assert!(parse_click("equals").is_err());
        assert!(parse_click("key:1").is_err());
    }

    #[test]
    fn test_click_script() {
        let clicks = parse_clicks("num:5 op:percent  action:equals").unwrap();
        assert_eq!(clicks.len(), 3);
        assert!(parse_clicks("num:5 bogus").is_err());
        assert!(parse_clicks("").unwrap().is_empty());
    }
}
