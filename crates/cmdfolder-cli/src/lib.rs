//! darkcli library.
//!
//! Command-line definition and the demonstration command tree served by the
//! `darkcli` binary.

pub mod cli;
pub mod demo;
