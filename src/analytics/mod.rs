//! Delivery financial analytics - metrics, historical analysis, and planning

pub mod history;
pub mod metrics;
pub mod models;
pub mod report;

pub use history::{DeliveryDataSource, HistoricalProfitAnalyzer};
pub use models::*;
pub use report::{EarningsAggregateSource, FinancialPlanProjector};

/// Error type for analytics operations
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// Out-of-range hours, mismatched array lengths, or malformed time ranges
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Historical analysis invoked without a delivery data source
    #[error("delivery data source is not configured")]
    NotConfigured,
}
