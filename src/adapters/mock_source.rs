use crate::domain::model::Record;
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];
const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
const CATEGORIES: [&str; 5] = ["Clothing", "Electronics", "Food", "Books", "Sports"];
const TAGS: [&str; 5] = ["Premium", "Sale", "New", "Featured", "Limited"];
const PAYMENT_METHODS: [&str; 5] = ["Credit Card", "Debit Card", "Cash", "UPI", "Net Banking"];
const NAMES: [&str; 12] = [
    "Neha Yadav",
    "Rahul Kumar",
    "Priya Singh",
    "Amit Sharma",
    "Anjali Verma",
    "Vikram Patel",
    "Sneha Gupta",
    "Rohan Mehta",
    "Divya Reddy",
    "Arjun Nair",
    "Sanya Kapoor",
    "Karan Malhotra",
];

const MOCK_YEAR: i32 = 2023;

/// 沒有 CSV 時使用的模擬交易資料
#[derive(Debug, Clone)]
pub struct MockSource {
    size: usize,
    seed: Option<u64>,
}

impl MockSource {
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    pub fn generate(&self) -> Vec<Record> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!("📝 Generating {} mock records...", self.size);
        let records: Vec<Record> = (0..self.size).map(|i| mock_record(i, &mut rng)).collect();
        tracing::info!("✅ Generated {} mock records", records.len());
        records
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn mock_record<R: Rng>(index: usize, rng: &mut R) -> Record {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    // 1..=28 日在任何月份都有效
    let date = NaiveDate::from_ymd_opt(MOCK_YEAR, month, day)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    Record::new()
        .with("transactionId", format!("TXN{:06}", index + 1))
        .with("date", date)
        .with("customerId", format!("CUST{:05}", rng.gen_range(0..10_000u32)))
        .with("customerName", pick(rng, &NAMES))
        .with("phoneNumber", format!("+91 {:010}", rng.gen_range(0..10_000_000_000u64)))
        .with("gender", pick(rng, &GENDERS))
        .with("age", Value::from(rng.gen_range(18..68u32)))
        .with("customerRegion", pick(rng, &REGIONS))
        .with("productCategory", pick(rng, &CATEGORIES))
        .with("tags", pick(rng, &TAGS))
        .with("quantity", Value::from(rng.gen_range(1..=10u32)))
        .with("totalAmount", Value::from(rng.gen_range(500..5_500u32)))
        .with("paymentMethod", pick(rng, &PAYMENT_METHODS))
}

#[async_trait]
impl DataSource for MockSource {
    fn describe(&self) -> String {
        format!("{} generated records", self.size)
    }

    async fn load(&self) -> Result<Vec<Record>> {
        Ok(self.generate())
    }
}
