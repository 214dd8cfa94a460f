pub mod aggregate;
pub mod engine;
pub mod fields;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use crate::domain::model::{
    DataOrigin, Dataset, FilterOptions, FilterSpec, PageRequest, PageResult, Record, SortKey,
    Statistics,
};
pub use crate::domain::ports::{ConfigProvider, DataSource};
pub use crate::utils::error::Result;
