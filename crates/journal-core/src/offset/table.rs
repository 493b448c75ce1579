use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Symbolic names understood by the offset lookup
pub mod names {
    pub const GAME_TIME: &str = "GameTime";
    pub const GAME_TIME_OFFSET: &str = "GameTime.Offset";
    pub const PLAYER_CHARACTER: &str = "PlayerCharacter";
    pub const PLAYER_POSITION: &str = "PlayerCharacter.Position";
    pub const PLAYER_CELL: &str = "PlayerCharacter.Cell";
    pub const PLAYER_WORLDSPACE: &str = "PlayerCharacter.Worldspace";
    pub const WORLDSPACE_FULLNAME: &str = "Worldspace.Fullname";
    pub const CELL_FULLNAME: &str = "Cell.Fullname";
}

/// Lookup of byte offsets by symbolic name.
///
/// Implemented by whatever discovered the offsets (a hook framework, a
/// signature scan, a file on disk).
pub trait FindOffset {
    fn find_offset(&self, name: &str) -> Option<u64>;

    /// Store the offset for `name` into `slot`. Leaves the slot untouched
    /// and returns `false` when the name is unknown.
    fn find_into(&self, name: &str, slot: &mut u64) -> bool {
        match self.find_offset(name) {
            Some(offset) => {
                *slot = offset;
                true
            }
            None => false,
        }
    }
}

impl FindOffset for HashMap<String, u64> {
    fn find_offset(&self, name: &str) -> Option<u64> {
        self.get(name).copied()
    }
}

/// Named offsets for one game build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetTable {
    pub version: String,
    pub targets: BTreeMap<String, u64>,
}

impl OffsetTable {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            targets: BTreeMap::new(),
        }
    }

    /// Offsets for Skyrim Special Edition 1.5.97
    pub fn builtin() -> Self {
        let mut table = Self::new("1.5.97.0");
        table
            .insert(names::GAME_TIME, 0x1ec3bc8)
            .insert(names::GAME_TIME_OFFSET, 0x34)
            .insert(names::PLAYER_CHARACTER, 0x2f26ef8)
            .insert(names::PLAYER_POSITION, 0x54)
            .insert(names::PLAYER_CELL, 0x60)
            .insert(names::PLAYER_WORLDSPACE, 0x628)
            .insert(names::WORLDSPACE_FULLNAME, 0x28)
            .insert(names::CELL_FULLNAME, 0x28);
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, offset: u64) -> &mut Self {
        self.targets.insert(name.into(), offset);
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FindOffset for OffsetTable {
    fn find_offset(&self, name: &str) -> Option<u64> {
        self.targets.get(name).copied()
    }
}

pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    let content = fs::read_to_string(&path)?;
    let table = serde_json::from_str(&content)?;
    Ok(table)
}

pub fn save_offsets<P: AsRef<Path>>(path: P, table: &OffsetTable) -> Result<()> {
    let content = serde_json::to_string_pretty(table)?;
    fs::write(path, content)?;
    Ok(())
}
