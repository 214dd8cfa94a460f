use crate::core::fields::{self, Field};
use crate::domain::model::{FilterOptions, Record, Statistics};
use std::collections::{BTreeSet, HashSet};

/// 全資料集統計，永遠針對完整集合計算，不受查詢條件影響
pub fn statistics(records: &[Record]) -> Statistics {
    let mut total_units: i64 = 0;
    let mut total_amount = 0.0;
    let mut customers = HashSet::new();

    for record in records {
        total_units = total_units.saturating_add(fields::resolve_int(record, Field::Quantity));
        total_amount += fields::resolve_float(record, Field::TotalAmount);

        let customer_id = fields::resolve(record, Field::CustomerId);
        if !customer_id.is_empty() {
            customers.insert(customer_id);
        }
    }

    Statistics {
        total_units,
        total_amount,
        unique_customers: customers.len(),
        total_transactions: records.len(),
    }
}

fn distinct(records: &[Record], field: Field) -> BTreeSet<String> {
    records
        .iter()
        .map(|record| fields::resolve(record, field))
        .filter(|value| !value.is_empty())
        .collect()
}

/// 各分類欄位的非空相異值 (遞增排序)
pub fn filter_options(records: &[Record]) -> FilterOptions {
    FilterOptions {
        customer_region: distinct(records, Field::CustomerRegion),
        gender: distinct(records, Field::Gender),
        product_category: distinct(records, Field::ProductCategory),
        tags: distinct(records, Field::Tags),
        payment_method: distinct(records, Field::PaymentMethod),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new()
                .with("customerId", "CUST00001")
                .with("quantity", 3)
                .with("totalAmount", 1500)
                .with("customerRegion", "North")
                .with("gender", "Female"),
            Record::new()
                .with("Customer ID", "CUST00001")
                .with("Quantity", "2")
                .with("Final Amount", "499.5")
                .with("Customer Region", "East")
                .with("Tags", "Sale"),
            Record::new()
                .with("customer_id", "CUST00002")
                .with("quantity", "n/a")
                .with("total_amount", "oops")
                .with("customer_region", "North"),
            Record::new().with("quantity", "-4"),
        ]
    }

    #[test]
    fn test_statistics_totals() {
        let stats = statistics(&sample());
        // 負數數量照實加總: 3 + 2 + 0 - 4
        assert_eq!(stats.total_units, 1);
        assert!((stats.total_amount - 1999.5).abs() < 1e-9);
        assert_eq!(stats.unique_customers, 2);
        assert_eq!(stats.total_transactions, 4);
    }

    #[test]
    fn test_statistics_sum_negative_quantities_as_is() {
        let records = vec![
            Record::new().with("quantity", 5),
            Record::new().with("Quantity", "-3"),
        ];
        assert_eq!(statistics(&records).total_units, 2);
    }

    #[test]
    fn test_statistics_empty() {
        assert_eq!(statistics(&[]), Statistics::default());
    }

    #[test]
    fn test_filter_options_sorted_and_distinct() {
        let options = filter_options(&sample());
        assert_eq!(
            options.customer_region.iter().collect::<Vec<_>>(),
            vec!["East", "North"]
        );
        assert_eq!(options.gender.len(), 1);
        assert_eq!(options.tags.iter().collect::<Vec<_>>(), vec!["Sale"]);
        assert!(options.payment_method.is_empty());
    }

    #[test]
    fn test_filter_options_serialize_as_arrays() {
        let json = serde_json::to_value(filter_options(&sample())).unwrap();
        assert_eq!(json["customerRegion"], serde_json::json!(["East", "North"]));
        assert_eq!(json["paymentMethod"], serde_json::json!([]));
    }
}
