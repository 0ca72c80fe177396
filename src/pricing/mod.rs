//! Fare pricing module for the carpool app.
//!
//! Suggests per-seat prices from trip distance and duration, applies group
//! discounts for multi-seat bookings, and quotes trips end to end using the
//! Distance Matrix API.

pub mod calculators;
pub mod distance;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    calculate_driver_earnings, calculate_group_discount, calculate_group_pricing,
    calculate_suggested_price, format_price, round_money,
};
pub use distance::{fetch_distance_and_duration, DistanceClient};
pub use models::{Coordinates, GroupPricingResult, PriceBreakdown, PricingResult, TravelEstimate};
pub use routes::router;
pub use services::{PricingError, TripQuote};
