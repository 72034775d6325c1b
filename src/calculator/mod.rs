//! Calculator module: the input-driven state machine and its output formatting.
//!
//! This module provides functionality to:
//! - Accumulate key presses into operands and apply a single pending operator
//! - Round results to hide floating-point noise
//! - Format operands for a fixed-width display
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod number;
mod rounding;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard, text_for_clipboard};
pub use display::{DisplayFormat, TextSink};
pub use number::{format_exponential, format_number, parse_number};
pub use rounding::{DEFAULT_DECIMALS, round_nice};
pub use state::{
    Calculator, DIVIDE_BY_ZERO_MESSAGE, Operator, Outcome, Pending, Phase, Snapshot,
};
