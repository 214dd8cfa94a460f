use crate::core::{aggregate, filter, paginate, sort};
use crate::domain::model::{
    DataOrigin, Dataset, FilterOptions, FilterSpec, PageRequest, PageResult, Record, SortKey,
    Statistics,
};
use std::sync::Arc;
use std::time::Instant;

/// 唯讀資料集上的記憶體查詢引擎
///
/// clone 只複製 `Arc`，所有副本共用同一份資料；不做快取，每次呼叫都從完整集合重新計算。
#[derive(Debug, Clone)]
pub struct SalesEngine {
    dataset: Arc<Dataset>,
}

impl SalesEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(Dataset::new(records, DataOrigin::Mock))
    }

    pub fn records(&self) -> &[Record] {
        &self.dataset.records
    }

    pub fn record_count(&self) -> usize {
        self.dataset.records.len()
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.dataset.origin
    }

    /// filter → sort → paginate
    pub fn query(&self, spec: &FilterSpec, sort_key: SortKey, page: PageRequest) -> PageResult<'_> {
        let started = Instant::now();

        let mut matched = filter::filter(self.records(), spec);
        sort::sort(&mut matched, sort_key);
        let result = paginate::paginate(matched, page);

        tracing::debug!(
            "🔎 Query matched {} of {} records (sort: {}, page {}/{}) in {:?}",
            result.total_items,
            self.record_count(),
            sort_key.as_str(),
            result.current_page,
            result.total_pages,
            started.elapsed()
        );
        result
    }

    pub fn statistics(&self) -> Statistics {
        aggregate::statistics(self.records())
    }

    pub fn filter_options(&self) -> FilterOptions {
        aggregate::filter_options(self.records())
    }
}
