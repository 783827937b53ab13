use serde::{Deserialize, Serialize};

/// Query parameters for the lookup endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckQuery {
    /// Phone number to look up
    pub phone: String,
}

/// Request body for both write endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressRequest {
    #[schema(example = "+79991234567")]
    pub phone: String,
    #[schema(example = "Moscow, Red Sq 1")]
    pub address: String,
}

/// Response type for successful lookups
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressResponse {
    pub address: String,
}

/// Response type for write operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
