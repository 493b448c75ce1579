//! Variables command implementation.

use std::path::PathBuf;

use anyhow::Result;
use journal_core::{Catalog, JournalConfig};

use super::offsets::parse_hex_address;

/// Preferred load address of SkyrimSE.exe
pub const DEFAULT_IMAGE_BASE: u64 = 0x1_4000_0000;

/// Build a configuration from command line options
pub fn make_config(base_address: u64, offsets: Option<PathBuf>) -> JournalConfig {
    let builder = JournalConfig::builder().base_address(base_address);
    let builder = match offsets {
        Some(path) => builder.offsets_path(path),
        None => builder,
    };
    builder.build()
}

/// Run the variables command
pub fn run(offsets: Option<PathBuf>, base: &str, json: bool) -> Result<()> {
    let config = make_config(parse_hex_address(base)?, offsets);
    let catalog = Catalog::build(&config, &config.offset_table()?);

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.variables())?);
        return Ok(());
    }

    for variable in catalog.variables() {
        println!("[{}] {}", variable.id, variable.name);
        println!("  format: {}", variable.params);
        for line in variable.info.lines() {
            println!("  | {}", line);
        }
        println!();
    }

    Ok(())
}
