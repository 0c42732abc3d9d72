use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Acknowledgement returned by write endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Database connectivity report
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub time: String,
}
