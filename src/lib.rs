//! A keyboard-driven calculator with a single pending operator.
//!
//! The [`calculator`] module holds the state machine and its output formatting,
//! [`input`] maps keyboard keys and button clicks onto calculator commands, and
//! [`config`] loads the optional TOML settings.

pub mod calculator;
pub mod config;
pub mod input;
