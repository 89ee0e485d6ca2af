//! Pure arithmetic over delivery pay, expense, and vehicle inputs
//!
//! Every function here operates on caller-supplied slices and scalars with no
//! I/O, so results are deterministic for a given input.

use std::cmp::Ordering;

use crate::analytics::models::{VehicleDepreciationResult, VehicleState};
use crate::analytics::AnalyticsError;

/// Depreciation per mile driven (USD)
const DEPRECIATION_RATE_PER_MILE: f64 = 0.08;

/// Total revenue across deliveries: sum of base pay plus sum of tips.
///
/// The slices are summed independently and need not be the same length.
/// Empty slices contribute 0.
pub fn revenue(base_pay: &[f64], tips: &[f64]) -> f64 {
    let total_base_pay: f64 = base_pay.iter().sum();
    let total_tips: f64 = tips.iter().sum();
    total_base_pay + total_tips
}

pub fn net_profit(revenue: f64, expenses: f64) -> f64 {
    revenue - expenses
}

/// Profit margin as a fraction of revenue.
///
/// Not guarded against `revenue == 0`; division by zero propagates the IEEE
/// result (±inf or NaN). Callers must check before invoking.
pub fn profit_margin(revenue: f64, expenses: f64) -> f64 {
    (revenue - expenses) / revenue
}

/// Downtime metric computed as `sum / (len + 1)`.
///
/// Despite the name this is not a median. The formula is preserved verbatim
/// for compatibility with existing reports; see DESIGN.md.
pub fn median_downtime(downtime: &[f64]) -> f64 {
    let sum: f64 = downtime.iter().sum();
    sum / (downtime.len() + 1) as f64
}

/// Sum of itemized expenses. Empty slice yields 0.
pub fn total_expenses(expenses: &[f64]) -> f64 {
    expenses.iter().sum()
}

/// Estimated vehicle depreciation from miles driven since purchase.
///
/// When the recorded odometer already covers the shift's delivery miles, the
/// odometer delta is authoritative. When delivery miles exceed it, the
/// delivery miles are used instead and `miles_need_update` is set so the
/// caller knows to refresh the vehicle record.
pub fn vehicle_depreciation(
    vehicle: &VehicleState,
    delivery_miles: u32,
) -> VehicleDepreciationResult {
    let miles_from_deliveries = vehicle.starting_miles + delivery_miles;

    let (miles_driven_since_purchase, miles_need_update) =
        if miles_from_deliveries > vehicle.current_miles {
            (delivery_miles, true)
        } else {
            (vehicle.current_miles - vehicle.starting_miles, false)
        };

    let total_depreciation = miles_driven_since_purchase as f64 * DEPRECIATION_RATE_PER_MILE;
    let current_value = (vehicle.purchase_price - total_depreciation).max(0.0);
    let depreciation_percentage = if vehicle.purchase_price > 0.0 {
        (total_depreciation / vehicle.purchase_price) * 100.0
    } else {
        0.0
    };

    VehicleDepreciationResult {
        purchase_price: vehicle.purchase_price,
        current_value,
        total_depreciation,
        miles_driven_since_purchase,
        starting_miles: vehicle.starting_miles,
        depreciation_percentage,
        delivery_miles,
        miles_need_update,
    }
}

/// Gallons of gas used for the given mileage. Returns 0 for non-positive mpg.
pub fn gas_used(mpg: f64, miles_driven: f64) -> f64 {
    if mpg <= 0.0 {
        return 0.0;
    }
    miles_driven / mpg
}

/// Estimated gas cost for the given mileage and price per gallon.
pub fn gas_cost(mpg: f64, miles_driven: f64, gas_price_per_gallon: f64) -> f64 {
    gas_used(mpg, miles_driven) * gas_price_per_gallon
}

/// Total gas cost across deliveries, one mpg value per mileage entry.
///
/// Fails with `InvalidArgument` when the slices differ in length, before any
/// summation happens.
pub fn total_gas_cost(
    miles: &[f64],
    mpg: &[f64],
    gas_price_per_gallon: f64,
) -> Result<f64, AnalyticsError> {
    if miles.len() != mpg.len() {
        return Err(AnalyticsError::InvalidArgument(format!(
            "miles and mpg lengths differ: {} vs {}",
            miles.len(),
            mpg.len()
        )));
    }

    let total = miles
        .iter()
        .zip(mpg.iter())
        .map(|(&m, &g)| gas_cost(g, m, gas_price_per_gallon))
        .sum();
    Ok(total)
}

/// Names sorted descending by their matching profit.
///
/// The sort is stable, so names with equal profit keep their original
/// relative order. Mismatched lengths yield an empty vector rather than an
/// error.
pub fn rank_by_profit(names: &[&str], profits: &[f64]) -> Vec<String> {
    if names.len() != profits.len() {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..names.len()).collect();
    indices.sort_by(|&a, &b| {
        profits[b]
            .partial_cmp(&profits[a])
            .unwrap_or(Ordering::Equal)
    });

    indices.into_iter().map(|i| names[i].to_string()).collect()
}

/// Human-readable ranking of platforms (or restaurants) by profit.
pub fn compare_profit_report(names: &[&str], profits: &[f64]) -> String {
    if names.len() != profits.len() {
        return String::from("Platforms ranked by profit:\n");
    }

    let mut indices: Vec<usize> = (0..names.len()).collect();
    indices.sort_by(|&a, &b| {
        profits[b]
            .partial_cmp(&profits[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut result = String::from("Platforms ranked by profit:\n");
    for i in indices {
        result.push_str(&format!("{}: ${:.2}\n", names[i], profits[i]));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_sums_both_slices() {
        let base_pay = [10.0, 12.5, 8.0];
        let tips = [3.0, 5.5];
        assert!((revenue(&base_pay, &tips) - 39.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_empty_is_zero() {
        assert_eq!(revenue(&[], &[]), 0.0);
    }

    #[test]
    fn test_net_profit() {
        assert_eq!(net_profit(100.0, 30.0), 70.0);
    }

    #[test]
    fn test_profit_margin() {
        assert!((profit_margin(100.0, 25.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_profit_margin_zero_revenue_is_unguarded() {
        let margin = profit_margin(0.0, 25.0);
        assert!(margin.is_infinite() && margin < 0.0);
    }

    #[test]
    fn test_median_downtime_uses_len_plus_one() {
        // sum / (n + 1), not an actual median
        assert!((median_downtime(&[10.0, 20.0, 30.0]) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_downtime_empty_is_zero() {
        assert_eq!(median_downtime(&[]), 0.0);
    }

    #[test]
    fn test_total_expenses() {
        assert!((total_expenses(&[12.0, 7.5]) - 19.5).abs() < 1e-9);
        assert_eq!(total_expenses(&[]), 0.0);
    }

    fn fixture_vehicle() -> VehicleState {
        VehicleState {
            starting_miles: 1000,
            current_miles: 1500,
            purchase_price: 15000.0,
        }
    }

    #[test]
    fn test_vehicle_depreciation_odometer_authoritative() {
        let result = vehicle_depreciation(&fixture_vehicle(), 400);
        assert_eq!(result.miles_driven_since_purchase, 500);
        assert!((result.total_depreciation - 40.0).abs() < 1e-9);
        assert!((result.current_value - 14960.0).abs() < 1e-9);
        assert!(!result.miles_need_update);
    }

    #[test]
    fn test_vehicle_depreciation_stale_odometer() {
        let result = vehicle_depreciation(&fixture_vehicle(), 600);
        assert_eq!(result.miles_driven_since_purchase, 600);
        assert!((result.total_depreciation - 48.0).abs() < 1e-9);
        assert!((result.current_value - 14952.0).abs() < 1e-9);
        assert!(result.miles_need_update);
    }

    #[test]
    fn test_vehicle_depreciation_value_floors_at_zero() {
        let vehicle = VehicleState {
            starting_miles: 0,
            current_miles: 100_000,
            purchase_price: 500.0,
        };
        let result = vehicle_depreciation(&vehicle, 0);
        assert_eq!(result.current_value, 0.0);
    }

    #[test]
    fn test_gas_used() {
        assert!((gas_used(25.0, 100.0) - 4.0).abs() < 1e-9);
        assert_eq!(gas_used(0.0, 100.0), 0.0);
        assert_eq!(gas_used(-5.0, 100.0), 0.0);
    }

    #[test]
    fn test_gas_cost() {
        assert!((gas_cost(25.0, 100.0, 3.5) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_gas_cost() {
        let total = total_gas_cost(&[10.0, 20.0], &[25.0, 25.0], 3.0).unwrap();
        let expected = (10.0 / 25.0 + 20.0 / 25.0) * 3.0;
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_total_gas_cost_mismatched_lengths() {
        let err = total_gas_cost(&[10.0], &[25.0, 30.0], 3.0).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn test_rank_by_profit_descending() {
        let ranked = rank_by_profit(&["A", "B", "C"], &[10.0, 30.0, 20.0]);
        assert_eq!(ranked, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_rank_by_profit_stable_on_ties() {
        let ranked = rank_by_profit(&["A", "B", "C"], &[20.0, 20.0, 30.0]);
        assert_eq!(ranked, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_rank_by_profit_mismatched_is_empty() {
        assert!(rank_by_profit(&["A", "B"], &[10.0]).is_empty());
    }

    #[test]
    fn test_compare_profit_report() {
        let report = compare_profit_report(&["DoorDash", "UberEats"], &[120.0, 145.5]);
        assert!(report.starts_with("Platforms ranked by profit:\n"));
        let uber_pos = report.find("UberEats: $145.50").unwrap();
        let dash_pos = report.find("DoorDash: $120.00").unwrap();
        assert!(uber_pos < dash_pos);
    }
}
