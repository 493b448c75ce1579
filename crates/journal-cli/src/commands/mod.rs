//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod offsets;
pub mod render;
pub mod variables;
pub mod watch;
