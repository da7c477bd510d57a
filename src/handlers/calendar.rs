use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::BookingForm;
use crate::services::calendar::{generate_ics, session_window};
use crate::state::AppState;

// POST /api/booking/calendar
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Json(form): Json<BookingForm>,
) -> Result<Response, AppError> {
    let summary = state.controller.on_submit(&form)?;

    let placed = session_window(&summary)
        .zip(generate_ics(&summary, &state.config.business_name));
    let Some(((start, _), ics)) = placed else {
        tracing::warn!(date = %form.date, slot = %form.slot, "booking cannot be placed on a calendar");
        return Err(AppError::NotFound(
            "no calendar entry for this date and duration".to_string(),
        ));
    };

    let filename = format!("session-{}.ics", start.format("%Y-%m-%d"));
    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
