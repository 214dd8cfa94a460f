use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SalesError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// "*" 代表允許任何來源
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub csv_path: PathBuf,
    /// 只載入前 N 列，其餘捨棄
    pub max_rows: usize,
    pub mock_records: usize,
    pub mock_seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/sales_data.csv"),
            max_rows: 90_000,
            mock_records: 5_000,
            mock_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_limit: usize,
    pub max_page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_page_size: 1_000,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SalesError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SalesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SALES_DATA_PATH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SalesError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;

        let csv_path = self.data.csv_path.to_string_lossy();
        validation::validate_path("data.csv_path", &csv_path)?;
        validation::validate_positive_number("data.max_rows", self.data.max_rows, 1)?;
        validation::validate_positive_number("data.mock_records", self.data.mock_records, 1)?;

        validation::validate_positive_number("query.max_page_size", self.query.max_page_size, 1)?;
        validation::validate_range(
            "query.default_limit",
            self.query.default_limit,
            1,
            self.query.max_page_size,
        )?;

        for origin in &self.server.cors_origins {
            validation::validate_non_empty_string("server.cors_origins", origin)?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.server.cors_origins.iter().any(|o| o == "*")
    }
}

impl ConfigProvider for TomlConfig {
    fn csv_path(&self) -> &Path {
        &self.data.csv_path
    }

    fn max_rows(&self) -> usize {
        self.data.max_rows
    }

    fn mock_records(&self) -> usize {
        self.data.mock_records
    }

    fn mock_seed(&self) -> Option<u64> {
        self.data.mock_seed
    }

    fn default_limit(&self) -> usize {
        self.query.default_limit
    }

    fn max_page_size(&self) -> usize {
        self.query.max_page_size
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080
cors_origins = ["http://localhost:5173"]

[data]
csv_path = "fixtures/sales.csv"
max_rows = 500
mock_records = 50
mock_seed = 7

[query]
default_limit = 20
max_page_size = 200
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.csv_path(), Path::new("fixtures/sales.csv"));
        assert_eq!(config.max_rows(), 500);
        assert_eq!(config.mock_seed(), Some(7));
        assert_eq!(config.default_limit(), 20);
        assert!(!config.allows_any_origin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[server]\nport = 6000\n").unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.max_rows(), 90_000);
        assert_eq!(config.mock_records(), 5_000);
        assert_eq!(config.default_limit(), 10);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SALES_DASHBOARD_TEST_CSV", "/srv/data/sales.csv");

        let toml_content = r#"
[data]
csv_path = "${SALES_DASHBOARD_TEST_CSV}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.csv_path(), Path::new("/srv/data/sales.csv"));

        std::env::remove_var("SALES_DASHBOARD_TEST_CSV");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[query]\ndefault_limit = 50\nmax_page_size = 20\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[data]\nmax_rows = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, SalesError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[data]\nmock_records = 42\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.mock_records(), 42);
    }
}
