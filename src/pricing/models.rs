//! Value types produced by the fare calculators.
//!
//! Money fields serialize as strings so clients never see float artifacts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-component view of a suggested price, each field rounded to cents.
///
/// `base_fee` includes the driver incentive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gas_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub peak_multiplier: Decimal,
}

impl Default for PriceBreakdown {
    fn default() -> Self {
        Self {
            base_fee: Decimal::ZERO,
            distance_fee: Decimal::ZERO,
            time_fee: Decimal::ZERO,
            gas_fee: Decimal::ZERO,
            peak_multiplier: Decimal::ONE,
        }
    }
}

/// Suggested per-seat price with its breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub suggested_price: Decimal,
    pub price_breakdown: PriceBreakdown,
}

/// Per-seat price after the group discount for a multi-seat booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupPricingResult {
    #[serde(flatten)]
    pub pricing: PricingResult,
    pub discount_percentage: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub discounted_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub savings: Decimal,
}

/// Point on the map, decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Driving distance and time between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelEstimate {
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_in_miles: Decimal,
    pub duration_in_minutes: u32,
}
