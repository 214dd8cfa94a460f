use crate::core::fields::{self, Field};
use crate::domain::model::{Record, SortKey};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// 客戶名稱的排序鍵，近似地區化排序 (localeCompare)
///
/// 依序比較：去除重音並轉小寫的主鍵、保留重音的小寫字串、大小寫
/// (小寫在前)，最後以原始字串收尾，確保排序為全序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey {
    base: String,
    accented: String,
    case: Vec<bool>,
    raw: String,
}

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self {
            base: unidecode::unidecode(name).to_lowercase(),
            accented: name.to_lowercase(),
            case: name.chars().map(char::is_uppercase).collect(),
            raw: name.to_string(),
        }
    }
}

/// 缺少或無法解析的日期排在最前 (None < Some)
fn date_key(record: &Record) -> Option<NaiveDate> {
    fields::resolve_date(record, Field::Date)
}

fn quantity_key(record: &Record) -> i64 {
    fields::resolve_int(record, Field::Quantity)
}

fn name_key(record: &Record) -> NameKey {
    NameKey::new(&fields::resolve(record, Field::CustomerName))
}

/// 穩定排序：鍵值相同的紀錄維持原有相對順序
pub fn sort(records: &mut [&Record], key: SortKey) {
    match key {
        SortKey::DateDesc => records.sort_by_cached_key(|r| Reverse(date_key(r))),
        SortKey::DateAsc => records.sort_by_cached_key(|r| date_key(r)),
        SortKey::QuantityDesc => records.sort_by_cached_key(|r| Reverse(quantity_key(r))),
        SortKey::QuantityAsc => records.sort_by_cached_key(|r| quantity_key(r)),
        SortKey::NameAsc => records.sort_by_cached_key(|r| name_key(r)),
        SortKey::NameDesc => records.sort_by_cached_key(|r| Reverse(name_key(r))),
    }
}
