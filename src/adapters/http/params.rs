//! Query-string parsing for `GET /api/sales`.
//!
//! Malformed numbers and dates are rejected rather than guessed, so a bad
//! `page` or `limit` can never produce a silently wrong slice.

use crate::core::fields;
use crate::domain::model::{FilterSpec, PageRequest, SortKey};
use crate::utils::error::{Result, SalesError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuery {
    pub search: Option<String>,
    pub customer_region: Option<String>,
    pub gender: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub product_category: Option<String>,
    pub tags: Option<String>,
    pub payment_method: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesRequest {
    pub filters: FilterSpec,
    pub sort: SortKey,
    pub page: PageRequest,
}

impl SalesQuery {
    pub fn into_request(self, default_limit: usize, max_page_size: usize) -> Result<SalesRequest> {
        let page = parse_positive("page", self.page.as_deref(), PageRequest::DEFAULT_PAGE)?;
        let limit = parse_positive("limit", self.limit.as_deref(), default_limit)?;
        if limit > max_page_size {
            return Err(SalesError::invalid_parameter(
                "limit",
                &limit.to_string(),
                format!("must not exceed {}", max_page_size),
            ));
        }
        let page = PageRequest::new(page, limit).ok_or_else(|| {
            SalesError::invalid_parameter("page", &page.to_string(), "must be a positive integer")
        })?;

        let filters = FilterSpec {
            customer_region: split_list(self.customer_region.as_deref()),
            gender: split_list(self.gender.as_deref()),
            product_category: split_list(self.product_category.as_deref()),
            tags: split_list(self.tags.as_deref()),
            payment_method: split_list(self.payment_method.as_deref()),
            age_min: parse_optional_int("ageMin", self.age_min.as_deref())?,
            age_max: parse_optional_int("ageMax", self.age_max.as_deref())?,
            date_start: parse_optional_date("dateStart", self.date_start.as_deref())?,
            date_end: parse_optional_date("dateEnd", self.date_end.as_deref())?,
            ..FilterSpec::default()
        }
        .with_search(self.search.as_deref().unwrap_or_default());

        Ok(SalesRequest {
            filters,
            sort: SortKey::parse(self.sort_by.as_deref()),
            page,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 逗號分隔的多選值，空白項目忽略
pub fn split_list(value: Option<&str>) -> BTreeSet<String> {
    non_blank(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_positive(field: &str, value: Option<&str>, default: usize) -> Result<usize> {
    let Some(raw) = non_blank(value) else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SalesError::invalid_parameter(field, raw, "must be a positive integer")),
    }
}

fn parse_optional_int(field: &str, value: Option<&str>) -> Result<Option<i64>> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| SalesError::invalid_parameter(field, raw, "must be an integer"))
        })
        .transpose()
}

fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    non_blank(value)
        .map(|raw| {
            fields::parse_date(raw).ok_or_else(|| {
                SalesError::invalid_parameter(field, raw, "must be a date such as 2023-06-01")
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> SalesQuery {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_defaults_when_absent() {
        let request = SalesQuery::default().into_request(10, 100).unwrap();
        assert_eq!(request.page, PageRequest::default());
        assert_eq!(request.sort, SortKey::DateDesc);
        assert!(request.filters.is_empty());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let request = query(&[("page", ""), ("limit", " "), ("ageMin", ""), ("gender", "")])
            .into_request(25, 100)
            .unwrap();
        assert_eq!(request.page.page(), 1);
        assert_eq!(request.page.limit(), 25);
        assert!(request.filters.is_empty());
    }

    #[test]
    fn test_parses_all_filters() {
        let request = query(&[
            ("search", "  PRIYA "),
            ("customerRegion", "North, East,,"),
            ("tags", "Sale"),
            ("ageMin", "20"),
            ("ageMax", "30"),
            ("dateStart", "2023-06-01"),
            ("sortBy", "name-asc"),
            ("page", "2"),
            ("limit", "5"),
        ])
        .into_request(10, 100)
        .unwrap();

        assert_eq!(request.filters.search, "priya");
        assert_eq!(
            request.filters.customer_region.iter().collect::<Vec<_>>(),
            vec!["East", "North"]
        );
        assert_eq!(request.filters.age_min, Some(20));
        assert_eq!(request.filters.age_max, Some(30));
        assert_eq!(request.filters.date_start, NaiveDate::from_ymd_opt(2023, 6, 1));
        assert_eq!(request.filters.date_end, None);
        assert_eq!(request.sort, SortKey::NameAsc);
        assert_eq!((request.page.page(), request.page.limit()), (2, 5));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        for (key, value) in [("page", "abc"), ("page", "0"), ("limit", "-5"), ("ageMin", "twenty")] {
            let err = query(&[(key, value)]).into_request(10, 100).unwrap_err();
            assert!(err.is_client_error(), "{}={} should be rejected", key, value);
        }
    }

    #[test]
    fn test_rejects_bad_dates_and_oversized_limit() {
        assert!(query(&[("dateEnd", "31/31/2023")]).into_request(10, 100).is_err());
        assert!(query(&[("limit", "101")]).into_request(10, 100).is_err());
        assert!(query(&[("limit", "100")]).into_request(10, 100).is_ok());
    }
}
