use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddressResponse, CheckQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /check_data handler - Look up the address for a phone number
///
/// The phone number is used as the key exactly as given; no format check
/// is applied on reads.
#[utoipa::path(
    get,
    path = routes::CHECK_DATA,
    summary = "Get the address for a phone number",
    params(CheckQuery),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 400, description = "Missing phone query parameter"),
        (status = 404, description = "Address not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "addresses"
)]
pub async fn check_data_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<(StatusCode, Json<AddressResponse>), ApiError> {
    match state.records.lookup(&query.phone).await? {
        Some(address) => {
            tracing::info!("Found address for phone: {}", query.phone);
            Ok((StatusCode::OK, Json(AddressResponse { address })))
        }
        None => {
            tracing::info!("Address not found for phone: {}", query.phone);
            Err(ApiError::AddressNotFound)
        }
    }
}
