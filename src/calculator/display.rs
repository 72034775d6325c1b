//! Output side of the calculator: text sinks and display formatting.

use serde::{Deserialize, Serialize};

use super::number::{format_exponential, parse_number};

/// Something that shows a line of text, such as the main display or the
/// history line above it.
pub trait TextSink {
    /// Replace the shown text.
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// How long values are shortened before they reach the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Longest text shown verbatim.
    pub max_len: usize,
    /// Fractional digits used once a value is shown in exponential form.
    pub exponential_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_len: 18,
            exponential_digits: 8,
        }
    }
}

impl DisplayFormat {
    /// Format text for the display.
    ///
    /// Text longer than `max_len` is reinterpreted as a number and shown in
    /// exponential notation; anything else is shown as is.
    pub fn render(&self, text: &str) -> String {
        if text.len() > self.max_len {
            format_exponential(parse_number(text), self.exponential_digits)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_verbatim() {
        let format = DisplayFormat::default();
        assert_eq!(format.render("123456789012345678"), "123456789012345678");
        assert_eq!(format.render("0."), "0.");
        assert_eq!(format.render("Cannot divide by 0"), "Cannot divide by 0");
    }

    #[test]
    fn test_long_numeral_goes_exponential() {
        let format = DisplayFormat::default();
        assert_eq!(format.render("1234567890123456789"), "1.23456789e+18");
        assert_eq!(format.render("0.0000000000012345678"), "1.23456780e-12");
    }

    #[test]
    fn test_custom_limits() {
        let format = DisplayFormat {
            max_len: 4,
            exponential_digits: 2,
        };
        assert_eq!(format.render("12345"), "1.23e+4");
        assert_eq!(format.render("1234"), "1234");
    }

    #[test]
    fn test_string_sink_replaces() {
        let mut sink = String::from("old");
        sink.set_text("new");
        assert_eq!(sink, "new");
    }
}
