//! Response DTOs for refund API endpoints.

use serde::Serialize;

use super::models::{CancellationTimeCategory, RefundCalculation, TimeUntilDeparture};

/// Refund preview with display hints
#[derive(Debug, Serialize)]
pub struct RefundPreviewResponse {
    #[serde(flatten)]
    pub refund: RefundCalculation,
    pub formatted_refund_amount: String,
    pub formatted_penalty_amount: String,
    pub time_category: CancellationTimeCategory,
}

/// Countdown to departure with display hints
#[derive(Debug, Serialize)]
pub struct TimeUntilResponse {
    #[serde(flatten)]
    pub time: TimeUntilDeparture,
    pub time_category: CancellationTimeCategory,
}
