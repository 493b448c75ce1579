use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FindOffset, names};
use crate::chain::AddressChain;
use crate::location::Position;
use crate::memory::ReadMemory;

/// Address chains for every game value the journal reads.
///
/// Chains are wired once at startup. A chain whose root offset was not
/// found stays unwired for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTargets {
    /// Days since the start of a new game, as `f32`
    pub game_time: AddressChain,
    /// PlayerCharacter -> position (`NiPoint3`)
    pub player_position: AddressChain,
    /// PlayerCharacter -> cell -> full name -> text
    pub cell_name: AddressChain,
    /// PlayerCharacter -> worldspace -> full name -> text
    pub worldspace_name: AddressChain,
}

impl Default for JournalTargets {
    fn default() -> Self {
        Self {
            game_time: AddressChain::new(1),
            player_position: AddressChain::new(1),
            cell_name: AddressChain::new(3),
            worldspace_name: AddressChain::new(3),
        }
    }
}

impl JournalTargets {
    /// Look up every chain slot by symbolic name
    pub fn wire<F: FindOffset + ?Sized>(finder: &F) -> Self {
        let mut targets = Self::default();

        wire_slot(finder, names::GAME_TIME, &mut targets.game_time, 0);
        wire_slot(finder, names::GAME_TIME_OFFSET, &mut targets.game_time, 1);
        wire_slot(finder, names::PLAYER_CHARACTER, &mut targets.player_position, 0);
        wire_slot(finder, names::PLAYER_POSITION, &mut targets.player_position, 1);
        wire_slot(finder, names::PLAYER_CELL, &mut targets.cell_name, 1);
        wire_slot(finder, names::PLAYER_WORLDSPACE, &mut targets.worldspace_name, 1);
        wire_slot(finder, names::WORLDSPACE_FULLNAME, &mut targets.worldspace_name, 2);
        wire_slot(finder, names::CELL_FULLNAME, &mut targets.cell_name, 2);

        // Names hang off the same player object as the position
        let player = targets.player_position.root();
        for chain in [&mut targets.cell_name, &mut targets.worldspace_name] {
            if let Some(root) = chain.slot_mut(0) {
                *root = player;
            }
        }

        targets
    }

    pub fn game_time<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<f32> {
        self.game_time.read_game_time(reader, base)
    }

    pub fn player_position<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<Position> {
        self.player_position
            .read_f32x3(reader, base)
            .and_then(Position::from_raw)
    }

    pub fn cell_name<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<String> {
        self.cell_name.read_text(reader, base)
    }

    pub fn worldspace_name<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<String> {
        self.worldspace_name.read_text(reader, base)
    }
}

fn wire_slot<F: FindOffset + ?Sized>(finder: &F, name: &str, chain: &mut AddressChain, index: usize) {
    let Some(slot) = chain.slot_mut(index) else {
        return;
    };
    if finder.find_into(name, slot) {
        debug!("  {}: 0x{:X}", name, *slot);
    } else {
        debug!("  {}: not found", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetTable;

    #[test]
    fn test_wire_builtin() {
        let targets = JournalTargets::wire(&OffsetTable::builtin());
        assert_eq!(targets.game_time.offsets(), &[0x1ec3bc8, 0x34]);
        assert_eq!(targets.player_position.offsets(), &[0x2f26ef8, 0x54]);
        assert_eq!(targets.cell_name.offsets(), &[0x2f26ef8, 0x60, 0x28, 0]);
        assert_eq!(targets.worldspace_name.offsets(), &[0x2f26ef8, 0x628, 0x28, 0]);
    }

    #[test]
    fn test_wire_empty_leaves_everything_unwired() {
        let targets = JournalTargets::wire(&OffsetTable::new("none"));
        assert_eq!(targets, JournalTargets::default());
        assert!(!targets.game_time.is_wired());
        assert!(!targets.player_position.is_wired());
        assert!(!targets.cell_name.is_wired());
        assert!(!targets.worldspace_name.is_wired());
    }

    #[test]
    fn test_wire_partial() {
        let mut table = OffsetTable::new("partial");
        table
            .insert(names::PLAYER_CHARACTER, 0x2f26ef8)
            .insert(names::PLAYER_POSITION, 0x54);
        let targets = JournalTargets::wire(&table);

        assert!(!targets.game_time.is_wired());
        assert!(targets.player_position.is_wired());
        // Root is shared, field offsets stay unset
        assert_eq!(targets.cell_name.offsets(), &[0x2f26ef8, 0, 0, 0]);
    }
}
