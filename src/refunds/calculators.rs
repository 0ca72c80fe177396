//! Cancellation refund calculations.
//!
//! Pure functions over timestamps. Anything that depends on "now" has an
//! `_at` variant taking the clock explicitly.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::format_price;

use super::models::{
    BookingStatus, CancellationEligibility, CancellationTier, CancellationTimeCategory,
    RefundCalculation, TimeUntilDeparture,
};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// How long after departure a booking can still be cancelled.
const CANCELLATION_GRACE_MINUTES: i64 = 30;

/// Hours from `at` until departure; negative once the ride has left.
pub fn hours_before_departure(departure_time: DateTime<Utc>, at: DateTime<Utc>) -> f64 {
    (departure_time - at).num_milliseconds() as f64 / MS_PER_HOUR
}

/// Preview the refund a rider gets for cancelling a paid booking.
///
/// # Arguments
/// * `original_amount` - What the rider paid
/// * `departure_time` - Scheduled departure of the ride
/// * `cancelled_at` - Moment of cancellation (default: now)
pub fn calculate_refund_preview(
    original_amount: Decimal,
    departure_time: DateTime<Utc>,
    cancelled_at: Option<DateTime<Utc>>,
) -> RefundCalculation {
    let cancelled_at = cancelled_at.unwrap_or_else(Utc::now);
    let hours_before_departure = hours_before_departure(departure_time, cancelled_at);
    let tier = CancellationTier::from_hours(hours_before_departure);

    let penalty_percentage = tier.penalty_percentage();
    let penalty_amount = original_amount * (Decimal::from(penalty_percentage) / dec!(100));
    let refund_amount = (original_amount - penalty_amount).max(Decimal::ZERO);

    let message = refund_message(tier.can_cancel(), penalty_percentage, refund_amount, penalty_amount);

    RefundCalculation {
        original_amount,
        refund_amount,
        penalty_amount,
        penalty_percentage,
        hours_before_departure,
        reason: tier.reason().to_string(),
        message,
        can_cancel: tier.can_cancel(),
    }
}

fn refund_message(
    can_cancel: bool,
    penalty_percentage: u32,
    refund_amount: Decimal,
    penalty_amount: Decimal,
) -> String {
    if !can_cancel {
        "This ride can no longer be cancelled because it departed more than 30 minutes ago."
            .to_string()
    } else if penalty_percentage == 0 {
        format!("You will receive a full refund of {}.", format_price(refund_amount))
    } else if penalty_percentage == 100 {
        format!(
            "You will not receive a refund. The full {} will be kept as a cancellation penalty.",
            format_price(penalty_amount)
        )
    } else {
        format!(
            "You will receive a refund of {}. A cancellation fee of {} ({}%) applies.",
            format_price(refund_amount),
            format_price(penalty_amount),
            penalty_percentage
        )
    }
}

/// Color and icon for the cancellation window, for display only.
pub fn get_cancellation_time_category(hours_before_departure: f64) -> CancellationTimeCategory {
    let category = CancellationTier::from_hours(hours_before_departure);
    CancellationTimeCategory {
        category,
        color: category.color(),
        icon: category.icon(),
    }
}

pub fn get_time_until_departure(departure_time: DateTime<Utc>) -> TimeUntilDeparture {
    get_time_until_departure_at(departure_time, Utc::now())
}

/// Whole hours and remaining minutes between `now` and departure.
pub fn get_time_until_departure_at(
    departure_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TimeUntilDeparture {
    let diff = departure_time - now;
    let is_after_departure = diff < Duration::zero();
    let total_minutes = diff.num_milliseconds().abs() / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let span = if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    };
    let display_text = if is_after_departure {
        format!("{} ago", span)
    } else {
        format!("{} until departure", span)
    };

    TimeUntilDeparture {
        hours,
        minutes,
        is_after_departure,
        display_text,
    }
}

pub fn can_cancel_booking(
    departure_time: DateTime<Utc>,
    booking_status: BookingStatus,
) -> CancellationEligibility {
    can_cancel_booking_at(departure_time, booking_status, Utc::now())
}

/// Gate for showing the cancel button.
///
/// Inherited ambiguity: this check uses the wall clock and a strict `>` past
/// the 30 minute grace period, while `calculate_refund_preview` uses its own
/// `cancelled_at` and `>= -0.5` hours. The two can disagree right at the
/// boundary; keep them as separate checks.
pub fn can_cancel_booking_at(
    departure_time: DateTime<Utc>,
    booking_status: BookingStatus,
    now: DateTime<Utc>,
) -> CancellationEligibility {
    let reason = match booking_status {
        BookingStatus::Cancelled => Some("Booking is already cancelled"),
        BookingStatus::Completed => Some("Booking is already completed"),
        BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::Other => {
            let since_departure = now.signed_duration_since(departure_time);
            (since_departure > Duration::minutes(CANCELLATION_GRACE_MINUTES))
                .then_some("Cannot cancel more than 30 minutes after departure")
        }
    };

    CancellationEligibility {
        can_cancel: reason.is_none(),
        reason: reason.map(str::to_string),
    }
}
