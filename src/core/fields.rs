//! 欄位解析：不同來源的欄位名稱不一致
//!
//! CSV 匯出使用 "Title Case" 或 snake_case 標頭，mock 資料使用 camelCase。
//! 其他元件一律透過 [`resolve`] 取值，不需要知道紀錄來自哪種命名方式。

use crate::domain::model::Record;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TransactionId,
    Date,
    CustomerId,
    CustomerName,
    PhoneNumber,
    Gender,
    Age,
    CustomerRegion,
    ProductCategory,
    Tags,
    Quantity,
    TotalAmount,
    PaymentMethod,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::TransactionId,
        Field::Date,
        Field::CustomerId,
        Field::CustomerName,
        Field::PhoneNumber,
        Field::Gender,
        Field::Age,
        Field::CustomerRegion,
        Field::ProductCategory,
        Field::Tags,
        Field::Quantity,
        Field::TotalAmount,
        Field::PaymentMethod,
    ];

    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// 可接受的來源欄位名稱，優先序由高到低；第一個為標準名稱
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::TransactionId => &["transactionId", "Transaction ID", "transaction_id", "Transaction_ID"],
            Field::Date => &["date", "Date"],
            Field::CustomerId => &["customerId", "Customer ID", "customer_id", "Customer_ID"],
            Field::CustomerName => &["customerName", "Customer Name", "customer_name", "Customer_Name"],
            Field::PhoneNumber => &["phoneNumber", "Phone Number", "phone_number", "Phone_Number"],
            Field::Gender => &["gender", "Gender"],
            Field::Age => &["age", "Age"],
            Field::CustomerRegion => &["customerRegion", "Customer Region", "customer_region", "Customer_Region"],
            Field::ProductCategory => &["productCategory", "Product Category", "product_category", "Product_Category"],
            Field::Tags => &["tags", "Tags"],
            Field::Quantity => &["quantity", "Quantity"],
            Field::TotalAmount => &[
                "totalAmount",
                "Total Amount",
                "total_amount",
                "finalAmount",
                "Final Amount",
                "Final_Amount",
            ],
            Field::PaymentMethod => &["paymentMethod", "Payment Method", "payment_method", "Payment_Method"],
        }
    }
}

/// 回傳 `field` 去除前後空白後的字串值，所有別名都沒有值時回傳 `""`
///
/// null 與空字串視為缺少，繼續找下一個別名；只有空白的值視為存在，
/// 停止搜尋並在 trim 後得到 `""`。
pub fn resolve(record: &Record, field: Field) -> String {
    field
        .aliases()
        .iter()
        .find_map(|alias| record.get(alias).and_then(coerce_to_string))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// 整數值；缺少或非數字時為 0
pub fn resolve_int(record: &Record, field: Field) -> i64 {
    parse_leading_int(&resolve(record, field)).unwrap_or(0)
}

/// 浮點數值；缺少或非數字時為 0.0
pub fn resolve_float(record: &Record, field: Field) -> f64 {
    parse_leading_float(&resolve(record, field)).unwrap_or(0.0)
}

/// 日期值；缺少或無法解析時為 `None`
pub fn resolve_date(record: &Record, field: Field) -> Option<NaiveDate> {
    parse_date(&resolve(record, field))
}

/// 解析開頭的整數 ("25", "25 yrs", "3.7" → 3)
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(|c: char| c == '+' || c == '-'));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// 解析開頭的十進位數字 ("1999.50", "2e3", "12.5 INR")
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(s.starts_with(|c: char| c == '+' || c == '-'));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指數部分必須後接數字才算數
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}
