//! Pricing service functions with network and cache access.
//!
//! These combine the route lookup with the pure calculators to quote a trip.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::cache::AppCache;

use super::calculators::{calculate_group_pricing, calculate_suggested_price};
use super::distance::DistanceClient;
use super::models::{Coordinates, GroupPricingResult, TravelEstimate};

/// A priced trip: the route estimate plus group pricing for the seats asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripQuote {
    pub travel: TravelEstimate,
    pub pricing: GroupPricingResult,
}

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Distance Matrix API key is not configured")]
    MissingApiKey,

    #[error("Distance and duration unavailable for {origin} to {destination}")]
    DistanceUnavailable { origin: String, destination: String },
}

impl PricingError {
    fn invalid(field: &str, message: &str) -> Self {
        PricingError::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Largest distance, duration or price accepted from a caller.
///
/// Keeps every intermediate sum and product in the calculators inside
/// `Decimal` range, even multiplied by `u32::MAX` seats.
pub const MAX_INPUT_AMOUNT: Decimal = dec!(1000000000);

/// Reject negative or out-of-range amounts, distances and durations.
pub fn validate_amount(field: &str, value: Decimal) -> Result<(), PricingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PricingError::invalid(field, "must not be negative"));
    }
    if value > MAX_INPUT_AMOUNT {
        return Err(PricingError::invalid(field, "is too large"));
    }
    Ok(())
}

/// Seat and passenger counts start at one.
pub fn validate_seats(field: &str, seats: u32) -> Result<(), PricingError> {
    if seats == 0 {
        return Err(PricingError::invalid(field, "must be at least 1"));
    }
    Ok(())
}

pub fn validate_coordinates(field: &str, point: Coordinates) -> Result<(), PricingError> {
    let lat_ok = point.lat.is_finite() && (-90.0..=90.0).contains(&point.lat);
    let lng_ok = point.lng.is_finite() && (-180.0..=180.0).contains(&point.lng);
    if !lat_ok || !lng_ok {
        return Err(PricingError::invalid(field, "latitude or longitude out of range"));
    }
    Ok(())
}

/// Look up a route, serving repeat lookups from the cache.
///
/// Failed lookups are not cached, so the next quote retries the API.
pub async fn lookup_distance(
    client: &DistanceClient,
    cache: &AppCache,
    origin: Coordinates,
    destination: Coordinates,
) -> Result<TravelEstimate, PricingError> {
    if client.api_key().is_none() {
        return Err(PricingError::MissingApiKey);
    }

    let cache_key = AppCache::distance_key(origin, destination);
    if let Some(cached) = cache.distances.get(&cache_key).await {
        debug!("Cache HIT for route: {}", cache_key);
        return Ok(cached);
    }
    debug!("Cache MISS for route: {}", cache_key);

    let estimate = client
        .fetch(origin, destination)
        .await
        .ok_or_else(|| PricingError::DistanceUnavailable {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })?;

    cache.distances.insert(cache_key, estimate).await;

    Ok(estimate)
}

/// Quote a trip between two points for `seats` riders.
///
/// # Arguments
/// * `client` - Distance Matrix client
/// * `cache` - Application cache (for route lookup)
/// * `origin` - Pickup point
/// * `destination` - Drop-off point
/// * `seats` - Seats booked together, at least 1
pub async fn quote_trip(
    client: &DistanceClient,
    cache: &AppCache,
    origin: Coordinates,
    destination: Coordinates,
    seats: u32,
) -> Result<TripQuote, PricingError> {
    validate_seats("seats", seats)?;
    validate_coordinates("origin", origin)?;
    validate_coordinates("destination", destination)?;

    let travel = lookup_distance(client, cache, origin, destination).await?;
    let base = calculate_suggested_price(
        travel.distance_in_miles,
        Decimal::from(travel.duration_in_minutes),
    );
    let pricing = calculate_group_pricing(base.suggested_price, seats, base.price_breakdown);

    Ok(TripQuote { travel, pricing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const UNREACHABLE: &str = "http://127.0.0.1:1/maps/api/distancematrix/json";

    fn campus() -> Coordinates {
        Coordinates::new(40.1020, -88.2272)
    }

    fn downtown() -> Coordinates {
        Coordinates::new(41.8781, -87.6298)
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::invalid("seats", "must be at least 1");
        assert_eq!(err.to_string(), "Invalid seats: must be at least 1");

        let err = PricingError::DistanceUnavailable {
            origin: "1,2".to_string(),
            destination: "3,4".to_string(),
        };
        assert!(err.to_string().contains("1,2 to 3,4"));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("distance", dec!(0)).is_ok());
        assert!(validate_amount("distance", dec!(12.5)).is_ok());
        assert!(validate_amount("distance", MAX_INPUT_AMOUNT).is_ok());
        assert!(validate_amount("distance", dec!(-0.01)).is_err());
        assert_eq!(
            validate_amount("distance", Decimal::MAX),
            Err(PricingError::invalid("distance", "is too large"))
        );
    }

    #[test]
    fn test_largest_accepted_inputs_stay_in_range() {
        let result = calculate_suggested_price(MAX_INPUT_AMOUNT, MAX_INPUT_AMOUNT);
        let group = calculate_group_pricing(result.suggested_price, u32::MAX, result.price_breakdown);
        assert!(group.total_price > result.suggested_price);
    }

    #[test]
    fn test_validate_seats() {
        assert!(validate_seats("seats", 1).is_ok());
        assert_eq!(
            validate_seats("seats", 0),
            Err(PricingError::invalid("seats", "must be at least 1"))
        );
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates("origin", campus()).is_ok());
        assert!(validate_coordinates("origin", Coordinates::new(91.0, 0.0)).is_err());
        assert!(validate_coordinates("origin", Coordinates::new(0.0, -180.5)).is_err());
        assert!(validate_coordinates("origin", Coordinates::new(f64::NAN, 0.0)).is_err());
    }

    #[tokio::test]
    async fn test_lookup_requires_api_key() {
        let client = DistanceClient::new(None, UNREACHABLE);
        let result = lookup_distance(&client, &AppCache::new(), campus(), downtown()).await;
        assert_eq!(result, Err(PricingError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_lookup_serves_cached_route_without_network() {
        let client = DistanceClient::new(Some("key".to_string()), UNREACHABLE);
        let cache = AppCache::new();
        let estimate = TravelEstimate {
            distance_in_miles: dec!(10),
            duration_in_minutes: 20,
        };
        cache
            .distances
            .insert(AppCache::distance_key(campus(), downtown()), estimate)
            .await;

        let result = lookup_distance(&client, &cache, campus(), downtown()).await;
        assert_eq!(result, Ok(estimate));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_cached() {
        let client = DistanceClient::new(Some("key".to_string()), UNREACHABLE);
        let cache = AppCache::new();

        let result = lookup_distance(&client, &cache, campus(), downtown()).await;

        assert!(matches!(result, Err(PricingError::DistanceUnavailable { .. })));
        let key = AppCache::distance_key(campus(), downtown());
        assert!(cache.distances.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_quote_trip_fetches_once_then_hits_cache() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/maps/api/distancematrix/json",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({
                        "status": "OK",
                        "rows": [{ "elements": [{
                            "status": "OK",
                            "distance": { "value": 16093 },
                            "duration": { "value": 1200 }
                        }] }]
                    }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = DistanceClient::new(
            Some("key".to_string()),
            format!("http://{}/maps/api/distancematrix/json", addr),
        );
        let cache = AppCache::new();

        let first = quote_trip(&client, &cache, campus(), downtown(), 3).await.unwrap();
        let second = quote_trip(&client, &cache, campus(), downtown(), 3).await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(first.travel.distance_in_miles, dec!(10.00));
        assert_eq!(first.travel.duration_in_minutes, 20);
        assert_eq!(first.pricing.pricing.suggested_price, dec!(17.4));
        assert_eq!(first.pricing.discounted_price, dec!(13.05));
        assert_eq!(first.pricing.total_price, dec!(39.15));
        assert_eq!(first.pricing.savings, dec!(4.35));
    }

    #[tokio::test]
    async fn test_quote_trip_rejects_zero_seats() {
        let client = DistanceClient::new(Some("key".to_string()), UNREACHABLE);
        let result = quote_trip(&client, &AppCache::new(), campus(), downtown(), 0).await;
        assert!(matches!(result, Err(PricingError::InvalidInput { .. })));
    }
}
