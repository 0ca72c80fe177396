//! Value types for cancellation refunds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Notice window a cancellation falls into.
///
/// Thresholds, in hours before departure, are checked in this order and the
/// first match wins:
///
/// | Tier       | Hours before departure | Penalty | Cancellable |
/// |------------|------------------------|---------|-------------|
/// | `TooLate`  | `< -0.5`               | 100%    | no          |
/// | `Free`     | `>= 24`                | 0%      | yes         |
/// | `Standard` | `>= 2`                 | 20%     | yes         |
/// | `Late`     | `>= 0.5`               | 50%     | yes         |
/// | `NoRefund` | otherwise              | 100%    | yes         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancellationTier {
    TooLate,
    Free,
    Standard,
    Late,
    NoRefund,
}

impl CancellationTier {
    /// Classify a (possibly negative) number of hours before departure.
    ///
    /// NaN lands in `NoRefund`, matching every comparison failing.
    pub fn from_hours(hours_before_departure: f64) -> Self {
        if hours_before_departure < -0.5 {
            CancellationTier::TooLate
        } else if hours_before_departure >= 24.0 {
            CancellationTier::Free
        } else if hours_before_departure >= 2.0 {
            CancellationTier::Standard
        } else if hours_before_departure >= 0.5 {
            CancellationTier::Late
        } else {
            CancellationTier::NoRefund
        }
    }

    pub fn penalty_percentage(self) -> u32 {
        match self {
            CancellationTier::Free => 0,
            CancellationTier::Standard => 20,
            CancellationTier::Late => 50,
            CancellationTier::TooLate | CancellationTier::NoRefund => 100,
        }
    }

    /// `TooLate` and `NoRefund` both keep the whole fare, but only `NoRefund`
    /// still lets the rider release the seat.
    pub fn can_cancel(self) -> bool {
        !matches!(self, CancellationTier::TooLate)
    }

    pub fn reason(self) -> &'static str {
        match self {
            CancellationTier::TooLate => "Cannot cancel (ride departed more than 30 minutes ago)",
            CancellationTier::Free => "Free cancellation (24+ hours notice)",
            CancellationTier::Standard => "Standard cancellation (2-24 hours notice)",
            CancellationTier::Late => "Late cancellation (30min-2 hours notice)",
            CancellationTier::NoRefund => "No refund (less than 30 minutes notice)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CancellationTier::TooLate => "#6B7280",
            CancellationTier::Free => "#10B981",
            CancellationTier::Standard => "#F59E0B",
            CancellationTier::Late => "#F97316",
            CancellationTier::NoRefund => "#EF4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CancellationTier::TooLate => "close-circle",
            CancellationTier::Free => "checkmark-circle",
            CancellationTier::Standard => "time",
            CancellationTier::Late => "warning",
            CancellationTier::NoRefund => "alert-circle",
        }
    }
}

/// Outcome of cancelling a paid booking at a given moment.
///
/// `refund_amount` and `penalty_amount` are exact (unrounded); only
/// `message` is formatted to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundCalculation {
    #[serde(with = "rust_decimal::serde::str")]
    pub original_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub refund_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub penalty_amount: Decimal,
    pub penalty_percentage: u32,
    pub hours_before_departure: f64,
    pub reason: String,
    pub message: String,
    pub can_cancel: bool,
}

/// Display hints for a cancellation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancellationTimeCategory {
    pub category: CancellationTier,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Distance in time between now and a departure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeUntilDeparture {
    pub hours: i64,
    pub minutes: i64,
    pub is_after_departure: bool,
    pub display_text: String,
}

/// Lifecycle state of a booking as stored by the backend.
///
/// Statuses this service doesn't know about deserialize to `Other` and are
/// judged on departure time alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    #[serde(other)]
    Other,
}

/// Whether a booking may be cancelled right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationEligibility {
    pub can_cancel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
