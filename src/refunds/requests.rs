//! Request DTOs for refund API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::BookingStatus;

/// Request to preview a cancellation refund
#[derive(Debug, Deserialize)]
pub struct RefundPreviewRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub original_amount: Decimal,
    pub departure_time: DateTime<Utc>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Request to check whether a booking can be cancelled now
#[derive(Debug, Deserialize)]
pub struct CanCancelRequest {
    pub departure_time: DateTime<Utc>,
    pub booking_status: BookingStatus,
}

/// Query for the countdown to departure
#[derive(Debug, Deserialize)]
pub struct TimeUntilQuery {
    pub departure_time: DateTime<Utc>,
}
