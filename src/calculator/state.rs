//! The calculator state machine.
//!
//! Key presses accumulate into the current operand, an operator moves it to the
//! pending slot, and evaluation folds the two together. Evaluation is strictly
//! left to right: choosing a second operator evaluates the first one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::display::{DisplayFormat, TextSink};
use super::number::{format_number, parse_number};
use super::rounding::{DEFAULT_DECIMALS, round_nice};

/// Message shown instead of a result when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by 0";

/// A binary operator waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[serde(rename = "plus")]
    Add,
    #[serde(rename = "minus")]
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Name used by button attributes (`plus`, `minus`, `multiply`, `divide`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Look up an operator by its button attribute name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plus" => Some(Self::Add),
            "minus" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator. Returns `None` for division by zero.
    fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Left operand together with the operator that will consume it.
///
/// Keeping both in one value means an operator can never be pending without
/// its left operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pending {
    pub operator: Operator,
    pub previous: String,
}

/// Coarse state of the machine, derived from its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Typing or editing the current operand.
    Entering,
    /// An operator was chosen and the right operand is being typed.
    OperatorPending,
    /// A result or the divide-by-zero message is on the display.
    Evaluated,
}

/// What a call to [`Calculator::compute`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing was pending.
    Idle,
    /// A result was produced and shown.
    Computed(f64),
    /// Division by zero; the machine was reset and the message shown.
    DivideByZero,
}

/// Serializable view of the machine and what it last rendered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub history: String,
    pub current: String,
    pub pending: Option<Pending>,
    pub last_result: Option<f64>,
    pub phase: Phase,
}

/// Calculator with its display and history outputs.
#[derive(Debug)]
pub struct Calculator<D: TextSink, H: TextSink> {
    current: String,
    pending: Option<Pending>,
    last_result: Option<f64>,
    evaluated: bool,
    format: DisplayFormat,
    decimals: i32,
    display: D,
    history: H,
}

impl<D: TextSink, H: TextSink> Calculator<D, H> {
    /// Create a calculator with default formatting and rounding.
    pub fn new(display: D, history: H) -> Self {
        Self::with_settings(display, history, DisplayFormat::default(), DEFAULT_DECIMALS)
    }

    /// Create a calculator with explicit display limits and rounding precision.
    pub fn with_settings(display: D, history: H, format: DisplayFormat, decimals: i32) -> Self {
        let mut calculator = Self {
            current: String::new(),
            pending: None,
            last_result: None,
            evaluated: false,
            format,
            decimals,
            display,
            history,
        };
        calculator.clear_all();
        calculator
    }

    /// The operand being typed, or the last result.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The left operand, while an operator is pending.
    pub fn previous(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.previous.as_str())
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// The most recent computed value.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Whether a result or the divide-by-zero message is showing.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Get the coarse state derived from the fields.
    pub fn phase(&self) -> Phase {
        if self.evaluated {
            Phase::Evaluated
        } else if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Entering
        }
    }

    /// The display output.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The history output.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Reset every field and refresh both outputs.
    pub fn clear_all(&mut self) {
        self.current = "0".to_string();
        self.pending = None;
        self.last_result = None;
        self.evaluated = false;
        self.show("0");
        self.refresh_history();
    }

    /// Append a digit or `.` to the current operand.
    ///
    /// After an evaluation the digit starts a new operand instead.
    pub fn append_digit(&mut self, digit: char) {
        if self.evaluated {
            self.current = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.evaluated = false;
        } else if digit == '.' {
            if !self.current.contains('.') {
                self.current.push('.');
            }
        } else if self.current == "0" {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }

        self.show_current();
    }

    /// Select the pending operator, evaluating any operator already pending.
    pub fn choose_operator(&mut self, operator: Operator) {
        if self.pending.is_some() && !self.evaluated {
            self.compute();
        }

        let previous = std::mem::replace(&mut self.current, "0".to_string());
        self.pending = Some(Pending { operator, previous });
        self.evaluated = false;
        self.refresh_history();
        self.show("0");
    }

    /// Flip the sign of the current operand. `"0"` stays as it is.
    pub fn toggle_sign(&mut self) {
        if self.current == "0" {
            return;
        }

        self.current = match self.current.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current),
        };
        self.show_current();
    }

    /// Replace the current operand with one hundredth of its value.
    pub fn percent(&mut self) {
        let value = round_nice(parse_number(&self.current) / 100.0, self.decimals);
        self.current = format_number(value);
        self.show_current();
    }

    /// Remove the last character of the current operand.
    ///
    /// Ignored right after an evaluation.
    pub fn backspace(&mut self) {
        if self.evaluated {
            return;
        }

        if self.current.len() <= 1 || (self.current.len() == 2 && self.current.starts_with('-')) {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
        self.show_current();
    }

    /// Evaluate the pending operator against the current operand.
    pub fn compute(&mut self) -> Outcome {
        let Some(pending) = self.pending.take() else {
            return Outcome::Idle;
        };

        let a = parse_number(&pending.previous);
        let b = parse_number(&self.current);

        let Some(result) = pending.operator.apply(a, b) else {
            tracing::warn!(dividend = %pending.previous, "Division by zero, resetting");
            self.display.set_text(DIVIDE_BY_ZERO_MESSAGE);
            self.current = "0".to_string();
            self.refresh_history();
            self.evaluated = true;
            return Outcome::DivideByZero;
        };

        let result = round_nice(result, self.decimals);
        tracing::debug!(
            lhs = %pending.previous,
            operator = %pending.operator,
            rhs = %self.current,
            result,
            "Computed"
        );

        self.last_result = Some(result);
        self.current = format_number(result);
        self.show_current();
        self.refresh_history();
        self.evaluated = true;
        Outcome::Computed(result)
    }

    /// Capture the state together with the rendered text.
    pub fn snapshot(&self) -> Snapshot
    where
        D: AsRef<str>,
        H: AsRef<str>,
    {
        Snapshot {
            display: self.display.as_ref().to_string(),
            history: self.history.as_ref().to_string(),
            current: self.current.clone(),
            pending: self.pending.clone(),
            last_result: self.last_result,
            phase: self.phase(),
        }
    }

    fn show(&mut self, text: &str) {
        let rendered = self.format.render(text);
        self.display.set_text(&rendered);
    }

    fn show_current(&mut self) {
        let rendered = self.format.render(&self.current);
        self.display.set_text(&rendered);
    }

    fn refresh_history(&mut self) {
        match &self.pending {
            Some(pending) => {
                let line = format!("{} {}", pending.previous, pending.operator.symbol());
                self.history.set_text(&line);
            }
            None => self.history.set_text(""),
        }
    }
}
