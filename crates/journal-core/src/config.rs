//! Startup configuration for the variable catalog.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::offset::{OffsetTable, load_offsets};

/// Configuration for building the catalog
#[derive(Debug, Clone, Default)]
pub struct JournalConfig {
    /// Load address of the game module; chains are resolved relative to it
    pub base_address: u64,
    /// Offset table to use instead of the built-in one
    pub offsets_path: Option<PathBuf>,
}

impl JournalConfig {
    /// Create a new configuration builder
    pub fn builder() -> JournalConfigBuilder {
        JournalConfigBuilder::default()
    }

    /// Load the configured offset table, or the built-in one if none is set
    pub fn offset_table(&self) -> Result<OffsetTable> {
        match &self.offsets_path {
            Some(path) => {
                let table = load_offsets(path)?;
                info!("Loaded offsets version {} from {}", table.version, path.display());
                Ok(table)
            }
            None => Ok(OffsetTable::builtin()),
        }
    }
}

/// Builder for JournalConfig
#[derive(Debug, Clone, Default)]
pub struct JournalConfigBuilder {
    base_address: Option<u64>,
    offsets_path: Option<PathBuf>,
}

impl JournalConfigBuilder {
    /// Set the module base address
    pub fn base_address(mut self, address: u64) -> Self {
        self.base_address = Some(address);
        self
    }

    /// Read offsets from a JSON file
    pub fn offsets_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.offsets_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> JournalConfig {
        JournalConfig {
            base_address: self.base_address.unwrap_or_default(),
            offsets_path: self.offsets_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::save_offsets;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_defaults() {
        let config = JournalConfig::builder().build();
        assert_eq!(config.base_address, 0);
        assert!(config.offsets_path.is_none());
        assert_eq!(config.offset_table().unwrap(), OffsetTable::builtin());
    }

    #[test]
    fn test_offsets_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut table = OffsetTable::new("custom");
        table.insert("GameTime", 0x10);
        save_offsets(temp_file.path(), &table).unwrap();

        let config = JournalConfig::builder()
            .base_address(0x1_4000_0000)
            .offsets_path(temp_file.path())
            .build();
        assert_eq!(config.base_address, 0x1_4000_0000);
        assert_eq!(config.offset_table().unwrap(), table);
    }

    #[test]
    fn test_missing_offsets_file_is_error() {
        let config = JournalConfig::builder()
            .offsets_path("missing-offsets.json")
            .build();
        assert!(config.offset_table().is_err());
    }
}
