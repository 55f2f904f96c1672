//! Command-line interface.
//!
//! Argument parsing lives in [`args`], command handlers in
//! [`commands`].

pub mod args;
pub mod commands;
