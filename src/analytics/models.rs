//! Data models for the delivery analytics engine

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed delivery's timestamp and pay components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryFact {
    pub timestamp: DateTime<Utc>,
    pub base_pay: f64,
    pub tips: f64,
}

impl DeliveryFact {
    pub fn new(timestamp: DateTime<Utc>, base_pay: f64, tips: f64) -> Self {
        Self {
            timestamp,
            base_pay,
            tips,
        }
    }

    /// Combined pay for this delivery
    pub fn profit(&self) -> f64 {
        self.base_pay + self.tips
    }
}

/// Odometer and purchase snapshot for the driver's vehicle
///
/// Input only; the engine never mutates it. `current_miles` is the recorded
/// odometer reading and may lag behind actual delivery mileage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleState {
    pub starting_miles: u32,
    pub current_miles: u32,
    pub purchase_price: f64,
}

/// Computed depreciation snapshot returned to the caller
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDepreciationResult {
    pub purchase_price: f64,
    pub current_value: f64,
    pub total_depreciation: f64,
    pub miles_driven_since_purchase: u32,
    pub starting_miles: u32,
    pub depreciation_percentage: f64,
    pub delivery_miles: u32,
    /// Set when delivery mileage exceeds the recorded odometer reading,
    /// meaning the vehicle record is stale and should be refreshed
    pub miles_need_update: bool,
}

impl fmt::Display for VehicleDepreciationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchase Price: ${:.2}\n\
             Starting Miles: {}\n\
             Miles from Deliveries: {}\n\
             Total Miles Driven Since Purchase: {}\n\
             Total Depreciation: ${:.2}\n\
             Current Estimated Value: ${:.2}\n\
             Depreciation: {:.1}%",
            self.purchase_price,
            self.starting_miles,
            self.delivery_miles,
            self.miles_driven_since_purchase,
            self.total_depreciation,
            self.current_value,
            self.depreciation_percentage
        )?;

        if self.miles_need_update {
            write!(
                f,
                "\n\nNote: delivery miles exceed recorded vehicle miles.\n  \
                 Vehicle odometer should be updated to: {}",
                self.starting_miles + self.delivery_miles
            )?;
        }

        Ok(())
    }
}

/// Monthly income projection against the driver's target
///
/// Derived, immutable value object; built once per request and returned to
/// the caller without being persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPlan {
    pub target_monthly_income: f64,
    pub estimated_expenses: f64,
    pub projected_monthly_income: f64,
    pub projected_net_profit: f64,
    pub income_gap: f64,
    pub additional_daily_required: f64,
    pub optimal_schedule: String,
    pub recommendations: String,
}

/// Delivery summary for the configured analysis window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReportData {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_earnings: f64,
    pub avg_earnings: f64,
    pub delivery_count: u32,
    pub optimal_hours: String,
}

/// Overall financial summary for the configured analysis window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralReportData {
    pub total_income: f64,
    pub current_month_income: f64,
    pub avg_per_delivery: f64,
    pub total_deliveries: u32,
    pub projected_monthly_income: f64,
}
