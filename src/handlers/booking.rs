use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingForm, BookingSummary, SelectOption};
use crate::services::summary::render_summary_html;
use crate::services::{SlotOptions, SlotSelection};
use crate::state::AppState;

static BOOKING_HTML: &str = include_str!("../web/booking.html");

pub async fn booking_page() -> Html<&'static str> {
    Html(BOOKING_HTML)
}

// GET /api/counselors
pub async fn get_counselors(State(state): State<Arc<AppState>>) -> Json<Vec<SelectOption>> {
    Json(state.controller.counselor_options())
}

// GET /api/slots
pub async fn get_slots(State(state): State<Arc<AppState>>) -> Json<Vec<SelectOption>> {
    Json(state.controller.slot_options())
}

// POST /api/booking/counselor-change
#[derive(Deserialize)]
pub struct CounselorChange {
    #[serde(default)]
    pub counselor: String,
}

pub async fn counselor_change(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CounselorChange>,
) -> Json<SlotOptions> {
    Json(state.controller.on_counselor_change(&payload.counselor))
}

// POST /api/booking/slot-change
#[derive(Deserialize)]
pub struct SlotChange {
    #[serde(default)]
    pub counselor: String,
    #[serde(default)]
    pub slot: String,
}

pub async fn slot_change(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SlotChange>,
) -> Json<SlotSelection> {
    Json(
        state
            .controller
            .on_slot_change(&payload.counselor, &payload.slot),
    )
}

// POST /api/booking/age-input
#[derive(Deserialize)]
pub struct AgeInput {
    #[serde(default)]
    pub age: String,
}

#[derive(Serialize)]
pub struct AgeResponse {
    age: String,
    minor: bool,
    note: &'static str,
}

pub async fn age_input(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AgeInput>,
) -> Json<AgeResponse> {
    let annotation = state.controller.on_age_input(&payload.age);
    let note = annotation.note();
    Json(AgeResponse {
        age: annotation.age,
        minor: annotation.minor,
        note,
    })
}

// POST /api/booking/submit
#[derive(Serialize)]
pub struct SubmitResponse {
    view: &'static str,
    summary: BookingSummary,
    total: String,
    html: String,
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(form): Json<BookingForm>,
) -> Result<Json<SubmitResponse>, AppError> {
    let summary = state.controller.on_submit(&form)?;
    let html = render_summary_html(&summary);

    Ok(Json(SubmitResponse {
        view: "summary",
        total: summary.cost_display(),
        summary,
        html,
    }))
}
