use crate::adapters::http::error::ApiError;
use crate::adapters::http::params::SalesQuery;
use crate::adapters::http::AppState;
use crate::domain::model::{FilterOptions, Record, Statistics};
use crate::utils::error::SalesError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

#[derive(Debug, Serialize)]
struct SalesResponse<'a> {
    success: bool,
    data: Vec<&'a Record>,
    pagination: Pagination,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub data_loaded: bool,
    pub record_count: usize,
    pub data_source: String,
    pub memory_usage: String,
}

const SALES_ERROR: &str = "Error fetching sales data";

/// GET /api/sales
pub async fn get_sales(
    State(state): State<AppState>,
    query: Result<Query<SalesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(
            SALES_ERROR,
            SalesError::invalid_parameter("query", "", rejection.body_text()),
        )
    })?;

    let request = query
        .into_request(state.default_limit, state.max_page_size)
        .map_err(|e| ApiError::new(SALES_ERROR, e))?;

    let result = state
        .engine
        .query(&request.filters, request.sort, request.page);

    let response = SalesResponse {
        success: true,
        pagination: Pagination {
            current_page: result.current_page,
            total_pages: result.total_pages,
            total_items: result.total_items,
            items_per_page: result.items_per_page,
        },
        data: result.items,
    };
    Ok(Json(response).into_response())
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<Statistics>> {
    Json(ApiResponse::ok(state.engine.statistics()))
}

/// GET /api/filter-options
pub async fn get_filter_options(State(state): State<AppState>) -> Json<ApiResponse<FilterOptions>> {
    Json(ApiResponse::ok(state.engine.filter_options()))
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let record_count = state.engine.record_count();
    Json(HealthResponse {
        success: true,
        message: "Server is running",
        data_loaded: record_count > 0,
        record_count,
        data_source: state.engine.origin().label(),
        memory_usage: state.monitor.memory_usage_label(),
    })
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": "Route not found",
            "error": format!("No route for {}", uri.path()),
        })),
    )
}
