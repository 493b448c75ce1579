//! # journal-core
//!
//! Core library for the Skyrim SE journal variables.
//!
//! This crate provides:
//! - Memory reading, in-process and (on Windows) from another process
//! - Multi-hop address chains wired from named offsets
//! - The in-game calendar and player location formatters
//! - The catalog of built-in, user-formattable variables

pub mod calendar;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod escape;
pub mod local_time;
pub mod location;
pub mod memory;
pub mod offset;
pub mod variable;

pub use calendar::{GameDate, Month, Weekday, format_game_time};
pub use catalog::{Catalog, GAME_TIME_ID, LOCAL_TIME_ID, PLAYER_POSITION_ID};
pub use chain::AddressChain;
pub use config::{JournalConfig, JournalConfigBuilder};
pub use error::{Error, Result};
pub use escape::{Escapes, NOT_AVAILABLE, replace_all, substitute};
pub use local_time::{format_local_time, format_time};
pub use location::{Position, format_player_location};
pub use memory::{LocalMemory, ReadMemory, current_module_base, decode_text};
#[cfg(target_os = "windows")]
pub use memory::{MemoryReader, ProcessHandle};
pub use offset::{FindOffset, JournalTargets, OffsetTable, load_offsets, save_offsets};
pub use variable::{ConverterKind, Variable};
