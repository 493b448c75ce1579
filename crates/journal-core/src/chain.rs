//! Multi-hop pointer chains into game memory.
//!
//! A chain `[o0, o1, .., oN]` is walked from the module base: each of the
//! first N offsets is added to the cursor and the pointer stored there is
//! loaded; the last offset is added without a load and yields the leaf
//! address the typed readers work on.
//!
//! ```text
//! base + o0 -> *p1 + o1 -> *p2 + .. -> *pN + oN = leaf
//! ```
//!
//! Null pointers along the way are normal (the object does not exist yet,
//! e.g. in the main menu) and end the walk with `None`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::memory::ReadMemory;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressChain {
    offsets: Vec<u64>,
}

impl AddressChain {
    /// An unwired chain of `hops` dereferences (all offsets zero)
    pub fn new(hops: usize) -> Self {
        Self {
            offsets: vec![0; hops + 1],
        }
    }

    pub fn from_offsets(offsets: impl Into<Vec<u64>>) -> Self {
        Self {
            offsets: offsets.into(),
        }
    }

    /// Number of pointer loads performed by `resolve`
    pub fn hops(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut u64> {
        self.offsets.get_mut(index)
    }

    pub fn root(&self) -> u64 {
        self.offsets.first().copied().unwrap_or(0)
    }

    /// A chain whose root offset was never discovered can not be resolved
    pub fn is_wired(&self) -> bool {
        self.root() != 0
    }

    /// Walk the chain and return the leaf address
    pub fn resolve<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<u64> {
        if base == 0 || !self.is_wired() {
            return None;
        }

        let (last, hops) = self.offsets.split_last()?;
        let mut cursor = base;
        for (hop, offset) in hops.iter().enumerate() {
            let address = cursor.wrapping_add(*offset);
            cursor = match reader.read_u64(address) {
                Ok(0) => {
                    trace!("Null pointer at hop {} ({:#x})", hop, address);
                    return None;
                }
                Ok(pointer) => pointer,
                Err(e) => {
                    trace!("Unreadable pointer at hop {}: {}", hop, e);
                    return None;
                }
            };
        }

        Some(cursor.wrapping_add(*last))
    }

    /// Read a finite float at the leaf
    pub fn read_f32<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<f32> {
        let leaf = self.resolve(reader, base)?;
        reader.read_f32(leaf).ok().filter(|v| v.is_finite())
    }

    /// Read the game clock.
    ///
    /// Zero, subnormal and negative values show up before a save is loaded
    /// and are treated as missing.
    pub fn read_game_time<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<f32> {
        self.read_f32(reader, base)
            .filter(|v| v.is_normal() && *v >= 0.0)
    }

    /// Read three consecutive finite floats at the leaf
    pub fn read_f32x3<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<[f32; 3]> {
        let leaf = self.resolve(reader, base)?;
        reader
            .read_f32x3(leaf)
            .ok()
            .filter(|v| v.iter().all(|c| c.is_finite()))
    }

    /// Read the NUL-terminated text at the leaf
    pub fn read_text<R: ReadMemory + ?Sized>(&self, reader: &R, base: u64) -> Option<String> {
        let leaf = self.resolve(reader, base)?;
        reader.read_c_string(leaf).ok()
    }
}
