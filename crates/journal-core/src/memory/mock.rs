//! In-memory fake of the game's address space for tests.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// Sparse byte map; any byte never written is unmapped.
#[derive(Debug, Default)]
pub struct MockMemoryReader {
    base: u64,
    bytes: BTreeMap<u64, u8>,
    reads: Cell<usize>,
}

impl MockMemoryReader {
    /// Number of `read_bytes` calls served so far, including failed ones
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl ReadMemory for MockMemoryReader {
    fn base_address(&self) -> u64 {
        self.base
    }

    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        (0..size as u64)
            .map(|i| {
                let addr = address
                    .checked_add(i)
                    .ok_or_else(|| Error::read_failed(address, "address range overflows"))?;
                self.bytes
                    .get(&addr)
                    .copied()
                    .ok_or_else(|| Error::read_failed(addr, "unmapped"))
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MockMemoryBuilder {
    base: u64,
    bytes: BTreeMap<u64, u8>,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    pub fn write_bytes(mut self, address: u64, data: &[u8]) -> Self {
        for (i, byte) in data.iter().enumerate() {
            self.bytes.insert(address.wrapping_add(i as u64), *byte);
        }
        self
    }

    pub fn write_u64(self, address: u64, value: u64) -> Self {
        self.write_bytes(address, &value.to_le_bytes())
    }

    pub fn write_f32(self, address: u64, value: f32) -> Self {
        self.write_bytes(address, &value.to_le_bytes())
    }

    pub fn write_c_string(self, address: u64, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        self.write_bytes(address, &data)
    }

    pub fn build(self) -> MockMemoryReader {
        MockMemoryReader {
            base: self.base,
            bytes: self.bytes,
            reads: Cell::new(0),
        }
    }
}
