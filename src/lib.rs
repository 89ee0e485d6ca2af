//! Delivery Analytics - financial analytics engine for gig-delivery drivers
//!
//! Aggregates raw per-delivery records (pay, tips, time, mileage) into
//! derived financial metrics, finds the most profitable recurring work-hour
//! windows from historical data, and projects a monthly income plan against
//! a target. Storage, account management, and the GUI live in the host
//! application; this crate only consumes already-materialized delivery facts
//! through the [`analytics::DeliveryDataSource`] and
//! [`analytics::EarningsAggregateSource`] traits.

pub mod analytics;

pub use analytics::{
    AnalyticsError, DeliveryDataSource, DeliveryFact, EarningsAggregateSource, FinancialPlan,
    FinancialPlanProjector, HistoricalProfitAnalyzer, VehicleDepreciationResult, VehicleState,
};
