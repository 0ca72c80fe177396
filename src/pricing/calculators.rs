//! Core fare calculation functions.
//!
//! Pure functions for pricing math - no network or cache access.
//! Rounding happens per field, in the order written here; rounding only the
//! final aggregate can drift a cent from what riders are quoted.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{GroupPricingResult, PriceBreakdown, PricingResult};

/// Flat fee charged on every trip.
pub const BASE_FEE: Decimal = dec!(4.50);
/// Assumed pump price, USD per gallon.
pub const GAS_PRICE_PER_GALLON: Decimal = dec!(3.50);
/// Assumed fuel economy of a driver's car.
pub const MILES_PER_GALLON: Decimal = dec!(25);
pub const RATE_PER_MILE: Decimal = dec!(0.55);
pub const RATE_PER_MINUTE: Decimal = dec!(0.15);
/// Floor for the driver incentive on short trips.
pub const MIN_DRIVER_INCENTIVE: Decimal = dec!(3.00);
pub const DRIVER_INCENTIVE_PER_MILE: Decimal = dec!(0.20);
/// Reserved for surge pricing; always 1.0 for now.
pub const PEAK_MULTIPLIER: Decimal = Decimal::ONE;

/// Round to specified decimal places, halves rounding up.
///
/// Fares are never negative, so rounding away from zero is the same as the
/// round-half-up riders see in the app. The result always carries exactly
/// `places` decimals, so `17.4` comes back as `17.40`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use carpool_fares::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Suggest a per-seat price for a trip.
///
/// The price is the sum of a flat base fee, a gas share, a per-mile fee, a
/// per-minute fee and a driver incentive. The incentive is folded into
/// `base_fee` in the returned breakdown.
///
/// # Arguments
/// * `distance_in_miles` - Driving distance, must be non-negative
/// * `duration_in_minutes` - Driving time, must be non-negative
pub fn calculate_suggested_price(
    distance_in_miles: Decimal,
    duration_in_minutes: Decimal,
) -> PricingResult {
    let gas_fee = distance_in_miles / MILES_PER_GALLON * GAS_PRICE_PER_GALLON;
    let distance_fee = distance_in_miles * RATE_PER_MILE;
    let time_fee = duration_in_minutes * RATE_PER_MINUTE;
    let driver_incentive = MIN_DRIVER_INCENTIVE.max(distance_in_miles * DRIVER_INCENTIVE_PER_MILE);

    let suggested_price = round_money(
        BASE_FEE + gas_fee + distance_fee + time_fee + driver_incentive,
        2,
    );

    PricingResult {
        suggested_price,
        price_breakdown: PriceBreakdown {
            base_fee: round_money(BASE_FEE + driver_incentive, 2),
            distance_fee: round_money(distance_fee, 2),
            time_fee: round_money(time_fee, 2),
            gas_fee: round_money(gas_fee, 2),
            peak_multiplier: PEAK_MULTIPLIER,
        },
    }
}

/// Discount percentage for booking several seats together.
///
/// Zero seats is outside the contract and falls into the no-discount tier.
pub fn calculate_group_discount(seats: u32) -> u32 {
    match seats {
        0 | 1 => 0,
        2 => 15,
        3 => 25,
        _ => 40,
    }
}

/// Per-seat price after the group discount, rounded to cents.
fn discounted_seat_price(price_per_seat: Decimal, discount_percentage: u32) -> Decimal {
    let multiplier = Decimal::ONE - Decimal::from(discount_percentage) / dec!(100);
    round_money(price_per_seat * multiplier, 2)
}

/// Apply the group discount to a per-seat price.
///
/// `total_price` is computed from the already rounded discounted price.
pub fn calculate_group_pricing(
    base_price_per_seat: Decimal,
    seats: u32,
    price_breakdown: PriceBreakdown,
) -> GroupPricingResult {
    let discount_percentage = calculate_group_discount(seats);
    let discounted_price = discounted_seat_price(base_price_per_seat, discount_percentage);
    let total_price = round_money(discounted_price * Decimal::from(seats), 2);
    let savings = round_money(base_price_per_seat - discounted_price, 2);

    GroupPricingResult {
        pricing: PricingResult {
            suggested_price: base_price_per_seat,
            price_breakdown,
        },
        discount_percentage,
        discounted_price,
        total_price,
        savings,
    }
}

/// What the driver collects for a trip with `total_passengers` riders.
///
/// Always equal to `calculate_group_pricing(price_per_seat, total_passengers, ..).total_price`.
pub fn calculate_driver_earnings(price_per_seat: Decimal, total_passengers: u32) -> Decimal {
    let discounted_price =
        discounted_seat_price(price_per_seat, calculate_group_discount(total_passengers));
    round_money(discounted_price * Decimal::from(total_passengers), 2)
}

/// Format a price for display, e.g. `$17.40`.
pub fn format_price(price: Decimal) -> String {
    format!("${}", round_money(price, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_money(dec!(13.055), 2), dec!(13.06));
    }

    #[test]
    fn test_round_money_fixes_scale() {
        assert_eq!(round_money(dec!(17.4), 2).to_string(), "17.40");
        assert_eq!(round_money(dec!(1.400), 2).to_string(), "1.40");
        assert_eq!(round_money(dec!(5), 2).to_string(), "5.00");
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(0), 2), dec!(0));
    }

    // ==================== calculate_suggested_price tests ====================

    #[test]
    fn test_suggested_price_reference_trip() {
        let result = calculate_suggested_price(dec!(10), dec!(20));

        assert_eq!(result.suggested_price, dec!(17.4));
        assert_eq!(result.price_breakdown.base_fee, dec!(7.5)); // 4.50 + 3.00 incentive
        assert_eq!(result.price_breakdown.distance_fee, dec!(5.5));
        assert_eq!(result.price_breakdown.time_fee, dec!(3.0));
        assert_eq!(result.price_breakdown.gas_fee, dec!(1.4));
        assert_eq!(result.price_breakdown.peak_multiplier, dec!(1));
    }

    #[test]
    fn test_suggested_price_zero_trip_hits_floor() {
        let result = calculate_suggested_price(Decimal::ZERO, Decimal::ZERO);

        // Base fee plus the minimum incentive
        assert_eq!(result.suggested_price, dec!(7.50));
        assert_eq!(result.price_breakdown.base_fee, dec!(7.50));
        assert_eq!(result.price_breakdown.gas_fee, dec!(0));
    }

    #[test]
    fn test_suggested_price_long_trip_uses_per_mile_incentive() {
        // 100 miles: incentive = max(3, 20) = 20
        let result = calculate_suggested_price(dec!(100), dec!(90));

        assert_eq!(result.price_breakdown.base_fee, dec!(24.50));
        assert_eq!(result.price_breakdown.gas_fee, dec!(14.00));
        assert_eq!(result.price_breakdown.distance_fee, dec!(55.00));
        assert_eq!(result.price_breakdown.time_fee, dec!(13.50));
        assert_eq!(result.suggested_price, dec!(107.00));
    }

    #[test]
    fn test_suggested_price_rounds_to_cents() {
        // 12.37 mi, 23 min
        // gas = 1.7318, distance = 6.8035, time = 3.45, incentive = 3
        // total = 4.5 + 1.7318 + 6.8035 + 3.45 + 3 = 19.4853
        let result = calculate_suggested_price(dec!(12.37), dec!(23));

        assert_eq!(result.suggested_price, dec!(19.49));
        assert_eq!(result.price_breakdown.gas_fee, dec!(1.73));
        assert_eq!(result.price_breakdown.distance_fee, dec!(6.80));
        assert_eq!(result.price_breakdown.time_fee, dec!(3.45));
    }

    #[test]
    fn test_suggested_price_never_below_floor() {
        for miles in [0, 1, 3, 7, 15, 42, 250] {
            for minutes in [0, 5, 30, 180] {
                let result = calculate_suggested_price(Decimal::from(miles), Decimal::from(minutes));
                assert!(result.suggested_price >= dec!(4.50));
            }
        }
    }

    #[test]
    fn test_suggested_price_is_deterministic() {
        let a = calculate_suggested_price(dec!(33.3), dec!(41));
        let b = calculate_suggested_price(dec!(33.3), dec!(41));
        assert_eq!(a, b);
    }

    // ==================== calculate_group_discount tests ====================

    #[test]
    fn test_group_discount_tiers() {
        assert_eq!(calculate_group_discount(1), 0);
        assert_eq!(calculate_group_discount(2), 15);
        assert_eq!(calculate_group_discount(3), 25);
        assert_eq!(calculate_group_discount(4), 40);
        assert_eq!(calculate_group_discount(10), 40);
    }

    #[test]
    fn test_group_discount_zero_seats_gets_no_discount() {
        assert_eq!(calculate_group_discount(0), 0);
    }

    // ==================== calculate_group_pricing tests ====================

    #[test]
    fn test_group_pricing_three_seats() {
        let base = calculate_suggested_price(dec!(10), dec!(20));
        let group = calculate_group_pricing(base.suggested_price, 3, base.price_breakdown);

        assert_eq!(group.discount_percentage, 25);
        assert_eq!(group.discounted_price, dec!(13.05));
        assert_eq!(group.total_price, dec!(39.15));
        assert_eq!(group.savings, dec!(4.35));
        assert_eq!(group.pricing.suggested_price, dec!(17.4));
        assert_eq!(group.pricing.price_breakdown, base.price_breakdown);
    }

    #[test]
    fn test_group_pricing_single_seat_is_undiscounted() {
        let group = calculate_group_pricing(dec!(12.34), 1, PriceBreakdown::default());

        assert_eq!(group.discount_percentage, 0);
        assert_eq!(group.discounted_price, dec!(12.34));
        assert_eq!(group.total_price, dec!(12.34));
        assert_eq!(group.savings, dec!(0));
    }

    #[test]
    fn test_group_pricing_rounds_each_field() {
        // 10.01 * 0.85 = 8.5085 -> 8.51; total uses the rounded price
        let group = calculate_group_pricing(dec!(10.01), 2, PriceBreakdown::default());

        assert_eq!(group.discounted_price, dec!(8.51));
        assert_eq!(group.total_price, dec!(17.02));
        assert_eq!(group.savings, dec!(1.50));
    }

    #[test]
    fn test_group_pricing_rounding_order_diverges_from_single_round() {
        // 9.99 * 0.6 = 5.994 -> 5.99; 5.99 * 7 = 41.93
        // Rounding once at the end would give 41.958 -> 41.96
        let group = calculate_group_pricing(dec!(9.99), 7, PriceBreakdown::default());

        assert_eq!(group.discounted_price, dec!(5.99));
        assert_eq!(group.total_price, dec!(41.93));
    }

    #[test]
    fn test_group_pricing_invariants() {
        for price in [dec!(0), dec!(4.5), dec!(9.99), dec!(17.4), dec!(63.27)] {
            for seats in 1..=8 {
                let group = calculate_group_pricing(price, seats, PriceBreakdown::default());
                assert!(group.discounted_price <= group.pricing.suggested_price);
                assert_eq!(
                    group.total_price,
                    round_money(group.discounted_price * Decimal::from(seats), 2)
                );
                assert_eq!(group.savings, round_money(price - group.discounted_price, 2));
            }
        }
    }

    // ==================== calculate_driver_earnings tests ====================

    #[test]
    fn test_driver_earnings_matches_group_total() {
        for price in [dec!(0), dec!(7.5), dec!(9.99), dec!(10.01), dec!(17.4), dec!(123.45)] {
            for passengers in 1..=10 {
                let group = calculate_group_pricing(price, passengers, PriceBreakdown::default());
                assert_eq!(calculate_driver_earnings(price, passengers), group.total_price);
            }
        }
    }

    #[test]
    fn test_driver_earnings_four_passengers() {
        // 20 * 0.6 = 12, 12 * 4 = 48
        assert_eq!(calculate_driver_earnings(dec!(20), 4), dec!(48));
    }

    // ==================== format_price tests ====================

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(17.4)), "$17.40");
        assert_eq!(format_price(dec!(0)), "$0.00");
        assert_eq!(format_price(dec!(5)), "$5.00");
        assert_eq!(format_price(dec!(39.15)), "$39.15");
        assert_eq!(format_price(dec!(2.345)), "$2.35");
    }
}
