//! Pricing route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::calculators::{
    calculate_driver_earnings, calculate_group_discount, calculate_group_pricing,
    calculate_suggested_price, format_price,
};
use super::requests::{
    DriverEarningsRequest, GroupPricingRequest, SuggestedPriceRequest, TripQuoteRequest,
};
use super::responses::{
    DriverEarningsResponse, GroupPricingResponse, SuggestedPriceResponse, TripQuoteResponse,
};
use super::services::{self, validate_amount, validate_seats};

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggested", post(suggested_price))
        .route("/group", post(group_pricing))
        .route("/driver-earnings", post(driver_earnings))
        .route("/quote", post(quote_trip))
}

async fn suggested_price(
    Json(req): Json<SuggestedPriceRequest>,
) -> Result<Json<SuggestedPriceResponse>> {
    validate_amount("distance_in_miles", req.distance_in_miles)?;
    validate_amount("duration_in_minutes", req.duration_in_minutes)?;

    let result = calculate_suggested_price(req.distance_in_miles, req.duration_in_minutes);
    Ok(Json(result.into()))
}

async fn group_pricing(Json(req): Json<GroupPricingRequest>) -> Result<Json<GroupPricingResponse>> {
    validate_amount("base_price_per_seat", req.base_price_per_seat)?;
    validate_seats("seats", req.seats)?;

    let result = calculate_group_pricing(req.base_price_per_seat, req.seats, req.price_breakdown);
    Ok(Json(result.into()))
}

async fn driver_earnings(
    Json(req): Json<DriverEarningsRequest>,
) -> Result<Json<DriverEarningsResponse>> {
    validate_amount("price_per_seat", req.price_per_seat)?;
    validate_seats("total_passengers", req.total_passengers)?;

    let earnings = calculate_driver_earnings(req.price_per_seat, req.total_passengers);
    Ok(Json(DriverEarningsResponse {
        earnings,
        discount_percentage: calculate_group_discount(req.total_passengers),
        formatted_earnings: format_price(earnings),
    }))
}

async fn quote_trip(
    State(state): State<AppState>,
    Json(req): Json<TripQuoteRequest>,
) -> Result<Json<TripQuoteResponse>> {
    let quote =
        services::quote_trip(&state.distance, &state.cache, req.origin, req.destination, req.seats)
            .await?;

    Ok(Json(TripQuoteResponse {
        travel: quote.travel,
        pricing: quote.pricing.into(),
    }))
}
