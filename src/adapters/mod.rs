// Adapters layer: concrete implementations for external systems (CSV files, mock data, HTTP).

pub mod csv_source;
pub mod http;
pub mod loader;
pub mod mock_source;
