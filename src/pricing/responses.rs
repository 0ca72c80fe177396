//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::format_price;
use super::models::{GroupPricingResult, PricingResult, TravelEstimate};

/// Response for a suggested price
#[derive(Debug, Serialize)]
pub struct SuggestedPriceResponse {
    #[serde(flatten)]
    pub result: PricingResult,
    pub formatted_price: String,
}

impl From<PricingResult> for SuggestedPriceResponse {
    fn from(result: PricingResult) -> Self {
        Self {
            formatted_price: format_price(result.suggested_price),
            result,
        }
    }
}

/// Response for group pricing
#[derive(Debug, Serialize)]
pub struct GroupPricingResponse {
    #[serde(flatten)]
    pub result: GroupPricingResult,
    pub formatted_discounted_price: String,
    pub formatted_total_price: String,
    pub formatted_savings: String,
}

impl From<GroupPricingResult> for GroupPricingResponse {
    fn from(result: GroupPricingResult) -> Self {
        Self {
            formatted_discounted_price: format_price(result.discounted_price),
            formatted_total_price: format_price(result.total_price),
            formatted_savings: format_price(result.savings),
            result,
        }
    }
}

/// Response for driver earnings
#[derive(Debug, Serialize)]
pub struct DriverEarningsResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub earnings: Decimal,
    pub discount_percentage: u32,
    pub formatted_earnings: String,
}

/// Response for a full trip quote
#[derive(Debug, Serialize)]
pub struct TripQuoteResponse {
    pub travel: TravelEstimate,
    pub pricing: GroupPricingResponse,
}
