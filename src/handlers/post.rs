use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddressRequest, MessageResponse};
use crate::phone;
use crate::routes;
use crate::service::WriteOutcome;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /write_data handler - Write the address for a phone number
///
/// Creates the record or replaces an existing one. An empty address is
/// answered with 200 and an "address required" message, not an error.
#[utoipa::path(
    post,
    path = routes::WRITE_DATA,
    summary = "Write the address for a phone number",
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address written or replaced, or address missing",
            body = MessageResponse),
        (status = 422, description = "Invalid phone number format", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "addresses"
)]
pub async fn write_data_handler(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let phone = phone::validate(&request.phone)?;

    let outcome = state
        .records
        .create_or_replace(&phone, &request.address)
        .await?;

    match outcome {
        WriteOutcome::AddressRequired => {
            tracing::info!("Rejected empty address for phone: {}", phone)
        }
        WriteOutcome::Replaced => tracing::info!("Replaced address for phone: {}", phone),
        WriteOutcome::Created => tracing::info!("Wrote address for phone: {}", phone),
        WriteOutcome::Updated => tracing::info!("Updated address for phone: {}", phone),
    }

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: outcome.message().to_string(),
        }),
    ))
}
