use proptest::prelude::*;
use sales_dashboard::core::fields::{self, Field};
use sales_dashboard::core::{filter, paginate, sort};
use sales_dashboard::core::{FilterSpec, PageRequest, Record, SortKey};

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["Neha Yadav", "rahul kumar", "Priya Singh", "", "Amit Sharma"]),
        prop::option::of((2021i32..2024, 1u32..13, 1u32..29)),
        prop::option::of(-3i64..20),
        prop::sample::select(vec!["North", "South", "East"]),
        0i64..80,
    )
        .prop_map(|(name, date, quantity, region, age)| {
            let mut record = Record::new()
                .with("customerName", name)
                .with("customerRegion", region)
                .with("age", age);
            if let Some((y, m, d)) = date {
                record = record.with("date", format!("{:04}-{:02}-{:02}", y, m, d));
            }
            if let Some(q) = quantity {
                record = record.with("quantity", q.to_string());
            }
            record
        })
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn filtered_records_come_from_input(
        records in prop::collection::vec(record_strategy(), 0..40),
        min in 0i64..60,
        span in 0i64..40,
    ) {
        let spec = FilterSpec {
            age_min: Some(min),
            age_max: Some(min + span),
            customer_region: ["North".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let matched = filter::filter(&records, &spec);
        prop_assert!(matched.len() <= records.len());
        for record in matched {
            prop_assert!(records.iter().any(|r| std::ptr::eq(r, record)));
            let age = fields::resolve_int(record, Field::Age);
            prop_assert!(min <= age && age <= min + span);
            prop_assert_eq!(fields::resolve(record, Field::CustomerRegion), "North");
        }
    }

    #[test]
    fn sorting_is_deterministic_and_idempotent(
        records in prop::collection::vec(record_strategy(), 0..40),
        key in sort_key_strategy(),
    ) {
        let mut once: Vec<&Record> = records.iter().collect();
        sort::sort(&mut once, key);
        let mut twice = once.clone();
        sort::sort(&mut twice, key);
        prop_assert_eq!(&once, &twice);

        let mut again: Vec<&Record> = records.iter().collect();
        sort::sort(&mut again, key);
        prop_assert_eq!(&once, &again);
    }

    #[test]
    fn quantity_sort_is_ordered(
        records in prop::collection::vec(record_strategy(), 0..40),
    ) {
        let mut sorted: Vec<&Record> = records.iter().collect();
        sort::sort(&mut sorted, SortKey::QuantityAsc);
        for pair in sorted.windows(2) {
            prop_assert!(
                fields::resolve_int(pair[0], Field::Quantity) <= fields::resolve_int(pair[1], Field::Quantity)
            );
        }
    }

    #[test]
    fn pages_cover_sequence_exactly_once(
        records in prop::collection::vec(record_strategy(), 0..60),
        limit in 1usize..15,
    ) {
        let all: Vec<&Record> = records.iter().collect();
        let first = paginate::paginate(all.clone(), PageRequest::new(1, limit).unwrap());
        prop_assert_eq!(first.total_pages, (records.len() + limit - 1) / limit);
        prop_assert_eq!(first.total_items, records.len());

        let mut concatenated: Vec<&Record> = Vec::new();
        for page in 1..=first.total_pages {
            let result = paginate::paginate(all.clone(), PageRequest::new(page, limit).unwrap());
            prop_assert!(result.items.len() <= limit);
            concatenated.extend(result.items);
        }
        prop_assert_eq!(concatenated.len(), all.len());
        for (a, b) in concatenated.iter().zip(all.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }
}
