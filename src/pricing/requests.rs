//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{Coordinates, PriceBreakdown};

/// Request to suggest a per-seat price
#[derive(Debug, Deserialize)]
pub struct SuggestedPriceRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_in_miles: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub duration_in_minutes: Decimal,
}

/// Request to apply the group discount to a per-seat price
#[derive(Debug, Deserialize)]
pub struct GroupPricingRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_seat: Decimal,
    pub seats: u32,
    #[serde(default)]
    pub price_breakdown: PriceBreakdown,
}

/// Request to calculate what a driver earns
#[derive(Debug, Deserialize)]
pub struct DriverEarningsRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_seat: Decimal,
    pub total_passengers: u32,
}

/// Request to quote a trip between two points
#[derive(Debug, Deserialize)]
pub struct TripQuoteRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    #[serde(default = "default_seats")]
    pub seats: u32,
}

fn default_seats() -> u32 {
    1
}
