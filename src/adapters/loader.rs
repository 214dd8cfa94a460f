use crate::adapters::csv_source::CsvSource;
use crate::adapters::mock_source::MockSource;
use crate::domain::model::{DataOrigin, Dataset};
use crate::domain::ports::{ConfigProvider, DataSource};

/// 啟動時載入資料集。CSV 不存在或讀取失敗時改用 mock 資料，不會回傳錯誤。
pub async fn load_dataset<C: ConfigProvider + ?Sized>(config: &C) -> Dataset {
    let csv_path = config.csv_path();
    let mock = MockSource::new(config.mock_records(), config.mock_seed());

    if !csv_path.exists() {
        tracing::warn!("⚠️  CSV file not found at: {}", csv_path.display());
        tracing::info!("💡 Using mock data instead");
        return load_mock(&mock).await;
    }

    let source = CsvSource::new(csv_path, config.max_rows());
    tracing::info!("📂 Loading data from: {}", source.describe());
    tracing::info!("⚡ Loading at most {} rows", config.max_rows());

    match source.load().await {
        Ok(records) => {
            tracing::info!("✅ Successfully loaded {} records from CSV", records.len());
            Dataset::new(
                records,
                DataOrigin::Csv {
                    path: csv_path.to_path_buf(),
                },
            )
        }
        Err(e) => {
            tracing::error!("❌ Error loading CSV: {}", e);
            tracing::warn!("⚠️  Falling back to mock data");
            load_mock(&mock).await
        }
    }
}

async fn load_mock(mock: &MockSource) -> Dataset {
    match mock.load().await {
        Ok(records) => Dataset::new(records, DataOrigin::Mock),
        Err(e) => {
            tracing::error!("❌ Mock data generation failed: {}", e);
            Dataset::new(Vec::new(), DataOrigin::Mock)
        }
    }
}
