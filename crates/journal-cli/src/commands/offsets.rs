//! Offsets command implementation.

use std::path::Path;

use anyhow::Result;
use journal_core::{OffsetTable, save_offsets};

/// Parse a hex address string (with or without 0x prefix)
pub fn parse_hex_address(s: &str) -> Result<u64> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(s, 16).map_err(|e| anyhow::anyhow!("Invalid hex address: {}", e))
}

/// Run the offsets command
pub fn run(output: Option<&Path>) -> Result<()> {
    let table = OffsetTable::builtin();

    if let Some(path) = output {
        save_offsets(path, &table)?;
        eprintln!("Saved {} offsets ({}) to {}", table.len(), table.version, path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&table)?);
    }

    Ok(())
}
