//! richview CLI library
//!
//! Argument definitions, the `render` and `runs` commands, and the ANSI painter
//! the binary prints with.

pub mod cli;
pub mod commands;
pub mod paint;
