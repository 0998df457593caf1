use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::StaticNetworkParameters;
use crate::domain::{
    PackedSeed, SeedTable, SeedTableError, MAINNET_PACKED_SEEDS, MAINNET_PORT,
    MAINNET_TEXTUAL_SEEDS,
};
use crate::service::SeedPeerProvider;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    network: NetworkSection,
    #[serde(default)]
    seeds: SeedsSection,
}

#[derive(Debug, Deserialize, Default)]
struct NetworkSection {
    port: Option<u16>,
}

#[derive(Debug, Deserialize, Default)]
struct SeedsSection {
    packed: Option<Vec<u32>>,
    textual: Option<Vec<String>>,
}

/// TOML-based seed configuration.
///
/// Loaded once when the node starts; there is no reload.
///
/// # Config File Format
///
/// ```toml
/// [network]
/// port = 8121
///
/// [seeds]
/// packed = [0x0100007F]
/// textual = [
///     "162.243.57.246",
///     "seed.example.org",
/// ]
/// ```
///
/// Any missing key falls back to the mainnet value. An explicit empty list
/// disables that table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    params: StaticNetworkParameters,
    table: SeedTable,
}

impl SeedConfig {
    /// Mainnet port and seed set.
    pub fn mainnet() -> Self {
        Self {
            params: StaticNetworkParameters::mainnet(),
            table: SeedTable::mainnet(),
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if a textual
    /// seed is structurally invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;

        let port = file.network.port.unwrap_or(MAINNET_PORT);

        let packed = match file.seeds.packed {
            Some(raw) => raw.into_iter().map(PackedSeed::new).collect(),
            None => MAINNET_PACKED_SEEDS.to_vec(),
        };
        let textual = match file.seeds.textual {
            Some(entries) => entries,
            None => MAINNET_TEXTUAL_SEEDS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            params: StaticNetworkParameters::new(port),
            table: SeedTable::new(packed, textual)?,
        })
    }

    /// Network parameters carrying the configured port.
    pub fn network_parameters(&self) -> StaticNetworkParameters {
        self.params
    }

    /// The configured seed tables.
    pub fn table(&self) -> &SeedTable {
        &self.table
    }

    /// Build a provider using the system resolver.
    pub fn into_provider(self) -> SeedPeerProvider {
        SeedPeerProvider::new(Arc::new(self.table), Arc::new(self.params))
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error from the I/O operation.
        #[source]
        source: io::Error,
    },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Seed table failed structural validation.
    #[error("Invalid seed table: {0}")]
    Table(#[from] SeedTableError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NetworkParameters;

    #[test]
    fn test_empty_file_is_mainnet() {
        let config = SeedConfig::parse("").unwrap();
        assert_eq!(config, SeedConfig::mainnet());
    }

    #[test]
    fn test_parse_hex_packed_and_port() {
        let config = SeedConfig::parse(
            r#"
            [network]
            port = 18121

            [seeds]
            packed = [0x0100007F, 0x0101A8C0]
            textual = []
            "#,
        )
        .unwrap();

        assert_eq!(config.network_parameters().port(), 18121);
        assert_eq!(
            config.table().packed(),
            &[PackedSeed::new(0x0100_007F), PackedSeed::new(0x0101_A8C0)]
        );
        assert!(config.table().textual().is_empty());
    }

    #[test]
    fn test_missing_textual_falls_back_to_mainnet() {
        let config = SeedConfig::parse("[seeds]\npacked = []\n").unwrap();
        assert_eq!(config.table().textual().len(), MAINNET_TEXTUAL_SEEDS.len());
        assert_eq!(config.network_parameters().port(), 8121);
    }

    #[test]
    fn test_out_of_range_packed_is_parse_error() {
        let err = SeedConfig::parse("[seeds]\npacked = [-1]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_blank_textual_is_table_error() {
        let err = SeedConfig::parse("[seeds]\ntextual = [\"\"]\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Table(SeedTableError::InvalidTextualEntry { index: 0, .. })
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = SeedConfig::load("/nonexistent/seeds.toml").unwrap_err();
        match err {
            ConfigError::Io { path, source } => {
                assert_eq!(path, "/nonexistent/seeds.toml");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
