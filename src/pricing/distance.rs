//! Google Maps Distance Matrix lookups.
//!
//! Turns a pair of coordinates into a driving distance (miles) and duration
//! (minutes) for the fare calculator. Every failure is logged and collapses
//! to `None`; callers show "pricing unavailable" instead of an error.
//!
//! No request timeout is set here. Callers that need bounded latency wrap
//! the future in `tokio::time::timeout`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::calculators::round_money;
use super::models::{Coordinates, TravelEstimate};

pub const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

const MILES_PER_METER: Decimal = dec!(0.000621371);

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    distance: Option<Measurement>,
    duration: Option<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    value: u64, // meters or seconds
}

/// Why a lookup produced no estimate
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Distance Matrix API error: {0}")]
    Status(String),

    #[error("Distance Matrix element error: {0}")]
    ElementStatus(String),

    #[error("No distance data returned")]
    MissingData,
}

/// Thin wrapper around a shared `reqwest::Client` and the API credentials
#[derive(Debug, Clone)]
pub struct DistanceClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl DistanceClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Look up a driving route with the configured key.
    ///
    /// Returns `None` when no key is configured or the lookup fails.
    pub async fn fetch(&self, origin: Coordinates, destination: Coordinates) -> Option<TravelEstimate> {
        let api_key = self.api_key.as_deref()?;
        fetch_distance_and_duration(&self.http_client, &self.base_url, origin, destination, api_key)
            .await
    }
}

/// Fetch driving distance and duration between two points.
///
/// Issues a single GET against `base_url`. Non-OK HTTP status, non-OK API
/// status, malformed JSON and transport errors are logged and yield `None`.
pub async fn fetch_distance_and_duration(
    client: &reqwest::Client,
    base_url: &str,
    origin: Coordinates,
    destination: Coordinates,
    api_key: &str,
) -> Option<TravelEstimate> {
    match request_distance_matrix(client, base_url, origin, destination, api_key).await {
        Ok(estimate) => Some(estimate),
        Err(e) => {
            tracing::error!(
                %origin,
                %destination,
                "Error fetching distance and duration: {}",
                e
            );
            None
        }
    }
}

async fn request_distance_matrix(
    client: &reqwest::Client,
    base_url: &str,
    origin: Coordinates,
    destination: Coordinates,
    api_key: &str,
) -> Result<TravelEstimate, DistanceError> {
    let params = [
        ("origins", origin.to_string()),
        ("destinations", destination.to_string()),
        ("units", "imperial".to_string()),
        ("mode", "driving".to_string()),
        ("key", api_key.to_string()),
    ];

    let response = client
        .get(base_url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?;

    let matrix: DistanceMatrixResponse = response.json().await?;
    extract_estimate(&matrix)
}

/// Pull the first origin/destination element out of a matrix response.
fn extract_estimate(matrix: &DistanceMatrixResponse) -> Result<TravelEstimate, DistanceError> {
    if matrix.status != "OK" {
        return Err(DistanceError::Status(matrix.status.clone()));
    }

    let element = matrix
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or(DistanceError::MissingData)?;

    if element.status != "OK" {
        return Err(DistanceError::ElementStatus(element.status.clone()));
    }

    let meters = element.distance.as_ref().ok_or(DistanceError::MissingData)?.value;
    let seconds = element.duration.as_ref().ok_or(DistanceError::MissingData)?.value;

    Ok(TravelEstimate {
        distance_in_miles: meters_to_miles(meters),
        duration_in_minutes: seconds_to_minutes(seconds),
    })
}

fn meters_to_miles(meters: u64) -> Decimal {
    round_money(Decimal::from(meters) * MILES_PER_METER, 2)
}

/// Whole minutes, halves rounding up.
fn seconds_to_minutes(seconds: u64) -> u32 {
    u32::try_from(seconds.saturating_add(30) / 60).unwrap_or(u32::MAX)
}
