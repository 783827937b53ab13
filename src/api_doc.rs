use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{AddressRequest, AddressResponse, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PhoneAddressLookup",
        version = "1.0",
        description = "Look up and store addresses by phone number"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::check_data_handler,
        handlers::post::write_data_handler,
        handlers::put::update_data_handler
    ),
    components(
        schemas(
            AddressRequest,
            AddressResponse,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "addresses", description = "Phone number to address operations")
    )
)]
pub struct ApiDoc;
