use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 單筆交易。欄位名稱依資料來源而異 (camelCase、"Title Case"、snake_case)，
/// 讀取時一律透過 `core::fields::resolve`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

impl FromIterator<(String, serde_json::Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// 資料集來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Csv { path: PathBuf },
    Mock,
}

impl DataOrigin {
    pub fn label(&self) -> String {
        match self {
            DataOrigin::Csv { path } => format!("csv:{}", path.display()),
            DataOrigin::Mock => "mock".to_string(),
        }
    }
}

/// 啟動時載入一次的唯讀資料集
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub origin: DataOrigin,
}

impl Dataset {
    pub fn new(records: Vec<Record>, origin: DataOrigin) -> Self {
        Self { records, origin }
    }
}

/// 解析後的過濾參數；空集合與 `None` 上下限不排除任何紀錄
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Already trimmed and lowercased.
    pub search: String,
    pub customer_region: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub product_category: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_method: BTreeSet<String>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn with_search(mut self, query: &str) -> Self {
        self.search = query.trim().to_lowercase();
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    QuantityDesc,
    QuantityAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::QuantityDesc,
        SortKey::QuantityAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// 未知或缺少的排序鍵一律視為 date-desc
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("date-asc") => SortKey::DateAsc,
            Some("quantity-desc") => SortKey::QuantityDesc,
            Some("quantity-asc") => SortKey::QuantityAsc,
            Some("name-asc") => SortKey::NameAsc,
            Some("name-desc") => SortKey::NameDesc,
            _ => SortKey::DateDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::QuantityDesc => "quantity-desc",
            SortKey::QuantityAsc => "quantity-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }
}

/// 1-indexed page request. Both values are positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(page: usize, limit: usize) -> Option<Self> {
        if page == 0 || limit == 0 {
            return None;
        }
        Some(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<'a> {
    pub items: Vec<&'a Record>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_units: i64,
    pub total_amount: f64,
    pub unique_customers: usize,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub customer_region: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub product_category: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_method: BTreeSet<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.customer_region.is_empty()
            && self.gender.is_empty()
            && self.product_category.is_empty()
            && self.tags.is_empty()
            && self.payment_method.is_empty()
    }
}
