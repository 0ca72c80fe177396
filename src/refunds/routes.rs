//! Refund route handlers

use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::pricing::format_price;
use crate::AppState;

use super::calculators::{
    calculate_refund_preview, can_cancel_booking, get_cancellation_time_category,
    get_time_until_departure_at, hours_before_departure,
};
use super::models::CancellationEligibility;
use super::requests::{CanCancelRequest, RefundPreviewRequest, TimeUntilQuery};
use super::responses::{RefundPreviewResponse, TimeUntilResponse};

/// Routes mounted under `/api/refunds`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preview", post(refund_preview))
        .route("/can-cancel", post(can_cancel))
        .route("/time-until", get(time_until))
}

async fn refund_preview(
    Json(req): Json<RefundPreviewRequest>,
) -> Result<Json<RefundPreviewResponse>> {
    if req.original_amount.is_sign_negative() && !req.original_amount.is_zero() {
        return Err(AppError::BadRequest(
            "original_amount must not be negative".to_string(),
        ));
    }

    let refund = calculate_refund_preview(req.original_amount, req.departure_time, req.cancelled_at);
    tracing::debug!(
        penalty_percentage = refund.penalty_percentage,
        hours_before_departure = refund.hours_before_departure,
        "Refund preview calculated"
    );

    Ok(Json(RefundPreviewResponse {
        formatted_refund_amount: format_price(refund.refund_amount),
        formatted_penalty_amount: format_price(refund.penalty_amount),
        time_category: get_cancellation_time_category(refund.hours_before_departure),
        refund,
    }))
}

async fn can_cancel(Json(req): Json<CanCancelRequest>) -> Json<CancellationEligibility> {
    Json(can_cancel_booking(req.departure_time, req.booking_status))
}

async fn time_until(Query(query): Query<TimeUntilQuery>) -> Json<TimeUntilResponse> {
    let now = Utc::now();
    Json(TimeUntilResponse {
        time: get_time_until_departure_at(query.departure_time, now),
        time_category: get_cancellation_time_category(hours_before_departure(
            query.departure_time,
            now,
        )),
    })
}
