use crate::core::fields::{self, Field};
use crate::domain::model::{FilterSpec, Record};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub const AGE_MIN_DEFAULT: i64 = 0;
pub const AGE_MAX_DEFAULT: i64 = 999;

pub fn date_start_default() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn date_end_default() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// 單一過濾條件，彼此獨立，以 AND 組合
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// 已轉小寫的關鍵字，比對客戶名稱或電話
    Search(String),
    /// 欄位值必須完全符合允許集合之一
    Membership { field: Field, allowed: BTreeSet<String> },
    AgeRange { min: i64, max: i64 },
    DateRange { start: NaiveDate, end: NaiveDate },
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Search(query) => {
                let name = fields::resolve(record, Field::CustomerName).to_lowercase();
                let phone = fields::resolve(record, Field::PhoneNumber).to_lowercase();
                name.contains(query.as_str()) || phone.contains(query.as_str())
            }
            Predicate::Membership { field, allowed } => {
                allowed.contains(&fields::resolve(record, *field))
            }
            Predicate::AgeRange { min, max } => {
                let age = fields::resolve_int(record, Field::Age);
                *min <= age && age <= *max
            }
            Predicate::DateRange { start, end } => {
                let raw = fields::resolve(record, Field::Date);
                // 沒有日期的紀錄不受日期區間影響；無法解析的日期則排除
                if raw.is_empty() {
                    return true;
                }
                match fields::parse_date(&raw) {
                    Some(date) => *start <= date && date <= *end,
                    None => false,
                }
            }
        }
    }
}

/// 建立有效的過濾條件；空集合與未設定的上下限不產生條件
pub fn build_predicates(spec: &FilterSpec) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    let query = spec.search.trim().to_lowercase();
    if !query.is_empty() {
        predicates.push(Predicate::Search(query));
    }

    let memberships = [
        (Field::CustomerRegion, &spec.customer_region),
        (Field::Gender, &spec.gender),
        (Field::ProductCategory, &spec.product_category),
        (Field::Tags, &spec.tags),
        (Field::PaymentMethod, &spec.payment_method),
    ];
    for (field, allowed) in memberships {
        if !allowed.is_empty() {
            predicates.push(Predicate::Membership {
                field,
                allowed: allowed.clone(),
            });
        }
    }

    if spec.age_min.is_some() || spec.age_max.is_some() {
        predicates.push(Predicate::AgeRange {
            min: spec.age_min.unwrap_or(AGE_MIN_DEFAULT),
            max: spec.age_max.unwrap_or(AGE_MAX_DEFAULT),
        });
    }

    if spec.date_start.is_some() || spec.date_end.is_some() {
        predicates.push(Predicate::DateRange {
            start: spec.date_start.unwrap_or_else(date_start_default),
            end: spec.date_end.unwrap_or_else(date_end_default),
        });
    }

    predicates
}

pub fn apply_predicates<'a, I>(records: I, predicates: &[Predicate]) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}

/// 回傳符合所有條件的紀錄，保持輸入順序
pub fn filter<'a>(records: &'a [Record], spec: &FilterSpec) -> Vec<&'a Record> {
    let predicates = build_predicates(spec);
    tracing::debug!("Applying {} active filter predicates", predicates.len());
    apply_predicates(records, &predicates)
}
