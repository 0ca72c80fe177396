//! Cancellation refund module.
//!
//! Works out how much of a fare comes back when a rider cancels, based on
//! how much notice they gave, plus the display helpers the booking screens use.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

pub use calculators::{
    calculate_refund_preview, can_cancel_booking, can_cancel_booking_at,
    get_cancellation_time_category, get_time_until_departure, get_time_until_departure_at,
    hours_before_departure,
};
pub use models::{
    BookingStatus, CancellationEligibility, CancellationTier, CancellationTimeCategory,
    RefundCalculation, TimeUntilDeparture,
};
pub use routes::router;
