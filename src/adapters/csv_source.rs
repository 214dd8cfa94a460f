use crate::domain::model::Record;
use crate::domain::ports::DataSource;
use crate::utils::error::{Result, SalesError};
use async_trait::async_trait;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

const PROGRESS_INTERVAL: usize = 5_000;

/// Reads the first `max_rows` rows of a sales CSV export.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    max_rows: usize,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, max_rows: usize) -> Self {
        Self {
            path: path.into(),
            max_rows,
        }
    }

    pub fn read_records(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path)?;
        read_csv(file, self.max_rows)
    }
}

/// 逐列讀取 CSV，欄位順序保留，所有值都以字串存放
pub fn read_csv<R: Read>(reader: R, max_rows: usize) -> Result<Vec<Record>> {
    let (records, truncated) = read_rows(reader, max_rows)?;
    if truncated {
        tracing::warn!("⚠️  Reached {} row limit, remaining rows skipped", max_rows);
    }
    Ok(records)
}

/// 回傳讀到的紀錄，以及上限之後是否還有未讀取的列
fn read_rows<R: Read>(reader: R, max_rows: usize) -> Result<(Vec<Record>, bool)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    tracing::debug!("CSV headers: {:?}", headers.iter().collect::<Vec<_>>());

    let mut rows = csv_reader.records();
    let mut records = Vec::new();
    for row in rows.by_ref().take(max_rows) {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
            .collect();
        records.push(record);

        if records.len() % PROGRESS_INTERVAL == 0 {
            tracing::info!("📊 Loaded {} rows...", records.len());
        }
    }

    // 上限後的下一列只用來判斷是否截斷，其錯誤忽略
    let truncated = records.len() == max_rows && rows.next().is_some();
    Ok((records, truncated))
}

#[async_trait]
impl DataSource for CsvSource {
    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<Record>> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.read_records())
            .await
            .map_err(|e| SalesError::DataLoadError {
                message: format!("CSV loader task failed: {}", e),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::{self, Field};

    #[test]
    fn test_read_csv_keeps_headers_as_keys() {
        let data = "Transaction ID,Customer Name, Quantity \nTXN1,Neha Yadav,3\nTXN2,Arjun Nair,1\n";
        let records = read_csv(data.as_bytes(), 100).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Customer Name"), Some(&Value::from("Neha Yadav")));
        assert_eq!(fields::resolve_int(&records[0], Field::Quantity), 3);
        assert_eq!(fields::resolve(&records[1], Field::TransactionId), "TXN2");
    }

    #[test]
    fn test_read_csv_stops_at_max_rows() {
        let mut data = String::from("id,quantity\n");
        for i in 0..20 {
            data.push_str(&format!("{},{}\n", i, i));
        }
        let records = read_csv(data.as_bytes(), 5).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[4].get("id"), Some(&Value::from("4")));
    }

    #[test]
    fn test_truncation_only_when_rows_remain() {
        let data = "id,quantity\n1,2\n3,4\n";
        let (records, truncated) = read_rows(data.as_bytes(), 2).unwrap();
        assert_eq!(records.len(), 2);
        assert!(!truncated);

        let (records, truncated) = read_rows(data.as_bytes(), 1).unwrap();
        assert_eq!(records.len(), 1);
        assert!(truncated);

        let (_, truncated) = read_rows(data.as_bytes(), 10).unwrap();
        assert!(!truncated);
    }

    #[test]
    fn test_rows_after_limit_are_not_parsed() {
        let data = "id,quantity\n1,2\n3,4,5,6\n";
        assert_eq!(read_csv(data.as_bytes(), 1).unwrap().len(), 1);
        assert!(read_csv(data.as_bytes(), 10).is_err());
    }
}
