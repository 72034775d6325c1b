//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;
use thiserror::Error;

use super::state::{DIVIDE_BY_ZERO_MESSAGE, Snapshot};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Text to place on the clipboard for a calculator state.
///
/// This is the raw operand rather than the shortened display text, except
/// after a division by zero, where the message itself is copied.
pub fn text_for_clipboard(snapshot: &Snapshot) -> &str {
    if snapshot.display == DIVIDE_BY_ZERO_MESSAGE {
        &snapshot.display
    } else {
        &snapshot.current
    }
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Write)?;

    tracing::debug!(text, "Copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, Operator};

    #[test]
    fn test_copies_raw_operand() {
        let mut calc = Calculator::new(String::new(), String::new());
        for digit in "12345678901234567890".chars() {
            calc.append_digit(digit);
        }
        let snapshot = calc.snapshot();
        assert_eq!(snapshot.display, "1.23456789e+19");
        assert_eq!(text_for_clipboard(&snapshot), "12345678901234567890");
    }

    #[test]
    fn test_copies_error_message() {
        let mut calc = Calculator::new(String::new(), String::new());
        calc.append_digit('1');
        calc.choose_operator(Operator::Divide);
        calc.compute();
        let snapshot = calc.snapshot();
        assert_eq!(text_for_clipboard(&snapshot), DIVIDE_BY_ZERO_MESSAGE);
    }
}
