use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// 資料載入來源 (CSV、mock 產生器…)
#[async_trait]
pub trait DataSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load(&self) -> Result<Vec<Record>>;
}

pub trait ConfigProvider: Send + Sync {
    fn csv_path(&self) -> &Path;
    fn max_rows(&self) -> usize;
    fn mock_records(&self) -> usize;
    fn mock_seed(&self) -> Option<u64>;
    fn default_limit(&self) -> usize;
    fn max_page_size(&self) -> usize;
}
