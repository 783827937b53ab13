use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddressRequest, MessageResponse};
use crate::phone;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// PUT /write_data handler - Update the address of an existing record
#[utoipa::path(
    put,
    path = routes::WRITE_DATA,
    summary = "Update the address for a phone number",
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = MessageResponse),
        (status = 404, description = "Phone number not found", body = ErrorResponse),
        (status = 422, description = "Invalid phone number format", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "addresses"
)]
pub async fn update_data_handler(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let phone = phone::validate(&request.phone)?;

    match state.records.update_existing(&phone, &request.address).await? {
        Some(outcome) => {
            tracing::info!("Updated address for phone: {}", phone);
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: outcome.message().to_string(),
                }),
            ))
        }
        None => {
            tracing::info!("Update for unknown phone: {}", phone);
            Err(ApiError::PhoneNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_json, send_get, send_json, setup_test_app};
    use crate::store::AddressStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_update_data_success() {
        let (app, store) = setup_test_app();
        store.set("+79991234567", "Moscow, Red Sq 1").await.unwrap();

        let response = send_json(
            &app,
            "PUT",
            "/write_data",
            serde_json::json!({ "phone": "+79991234567", "address": "Moscow, Red Sq 2" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "address updated" })
        );
        assert_eq!(
            store.get("+79991234567").await.unwrap(),
            Some("Moscow, Red Sq 2".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_data_not_found() {
        let (app, store) = setup_test_app();

        let response = send_json(
            &app,
            "PUT",
            "/write_data",
            serde_json::json!({ "phone": "89991234567", "address": "Tula" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "phone number not found" })
        );
        assert_eq!(store.get("89991234567").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_data_invalid_phone() {
        let (app, _) = setup_test_app();

        let response = send_json(
            &app,
            "PUT",
            "/write_data",
            serde_json::json!({ "phone": "+7(999)1234567", "address": "Tula" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_data_invalid_json() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/write_data")
                    .header("content-type", "application/json")
                    .body(Body::from("{invalid json}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Axum's Json extractor returns 400 for syntactically invalid JSON
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (app, _) = setup_test_app();
        let lookup = "/check_data?phone=%2B79991234567";

        let response = send_get(&app, lookup).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_json(
            &app,
            "POST",
            "/write_data",
            serde_json::json!({ "phone": "+79991234567", "address": "Moscow, Red Sq 1" }),
        )
        .await;
        assert_eq!(body_json(response).await["message"], "address written");

        let response = send_get(&app, lookup).await;
        assert_eq!(body_json(response).await["address"], "Moscow, Red Sq 1");

        let response = send_json(
            &app,
            "PUT",
            "/write_data",
            serde_json::json!({ "phone": "+79991234567", "address": "Moscow, Red Sq 2" }),
        )
        .await;
        assert_eq!(body_json(response).await["message"], "address updated");

        let response = send_get(&app, lookup).await;
        assert_eq!(body_json(response).await["address"], "Moscow, Red Sq 2");

        let response = send_json(
            &app,
            "POST",
            "/write_data",
            serde_json::json!({ "phone": "79991234567", "address": "Moscow, Red Sq 3" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
