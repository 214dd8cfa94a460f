pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sales-dashboard")]
#[command(about = "Retail sales dashboard API over a CSV or generated dataset")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Sales CSV file; a generated dataset is used when it is missing
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    #[arg(long)]
    pub max_rows: Option<usize>,

    #[arg(long)]
    pub mock_records: Option<usize>,

    /// Seed for reproducible mock data
    #[arg(long)]
    pub mock_seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML (若有指定) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.data_path {
            config.data.csv_path = path.clone();
        }
        if let Some(max_rows) = self.max_rows {
            config.data.max_rows = max_rows;
        }
        if let Some(mock_records) = self.mock_records {
            config.data.mock_records = mock_records;
        }
        if self.mock_seed.is_some() {
            config.data.mock_seed = self.mock_seed;
        }
    }
}
