use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rejections from the submission pipeline. The `Display` text is what the
/// user is shown.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Please fill in all fields.")]
    MissingField { field: &'static str },

    #[error("Please enter a valid age (minimum 5).")]
    InvalidAge,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number (11-14 characters, including optional + to include country code).")]
    InvalidPhone,

    #[error("{counselor} is not available at {slot}. Please choose a different slot.")]
    SlotUnavailable { counselor: String, slot: String },
}

impl BookingError {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::MissingField { .. } => "missing_field",
            BookingError::InvalidAge => "invalid_age",
            BookingError::InvalidEmail => "invalid_email",
            BookingError::InvalidPhone => "invalid_phone",
            BookingError::SlotUnavailable { .. } => "slot_unavailable",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] BookingError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.kind()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = serde_json::json!({ "view": "form", "error": self.to_string(), "kind": kind });
        (status, axum::Json(body)).into_response()
    }
}
