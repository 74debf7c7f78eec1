//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector engine and
//! the command-line front end:
//! - **Warning System** - colored terminal output for suspicious input

pub mod warning;
