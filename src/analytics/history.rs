//! Historical profit analysis over dated delivery facts
//!
//! Buckets per-delivery profit by day-of-week and hour-of-day, answering
//! "what does this day/hour range usually earn" and "which contiguous block
//! of hours is worth working on each day".

use chrono::{DateTime, Datelike, Timelike, Utc};
use log::debug;

use crate::analytics::models::DeliveryFact;
use crate::analytics::AnalyticsError;

/// Day names indexed Monday = 0 through Sunday = 6
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Source of historical delivery facts.
///
/// `fetch_range` returns every fact whose timestamp falls inside
/// `[start, end]`, both bounds inclusive, in no particular order.
pub trait DeliveryDataSource {
    fn fetch_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DeliveryFact>;
}

/// Analyzer over a bounded window of historical delivery facts.
///
/// Stateless per call: each operation fetches, buckets, and discards its own
/// working data, so repeated calls with identical inputs produce identical
/// output and concurrent calls cannot interfere.
pub struct HistoricalProfitAnalyzer {
    source: Option<Box<dyn DeliveryDataSource>>,
}

impl Default for HistoricalProfitAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoricalProfitAnalyzer {
    /// Analyzer without a data source; historical operations will fail with
    /// `NotConfigured` until one is attached.
    pub fn new() -> Self {
        Self { source: None }
    }

    pub fn with_source(source: Box<dyn DeliveryDataSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn set_source(&mut self, source: Box<dyn DeliveryDataSource>) {
        self.source = Some(source);
    }

    fn source(&self) -> Result<&dyn DeliveryDataSource, AnalyticsError> {
        self.source
            .as_deref()
            .ok_or(AnalyticsError::NotConfigured)
    }

    /// Expected profit for the reference timestamp's day of week within an
    /// hour range, summed over the historical window.
    ///
    /// The hour range is inclusive on both ends. When `start_hour > end_hour`
    /// the range wraps past midnight (e.g. 22 to 2 covers 10 PM through 2 AM).
    pub fn expected_profit(
        &self,
        reference: DateTime<Utc>,
        historical_start: DateTime<Utc>,
        historical_end: DateTime<Utc>,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<f64, AnalyticsError> {
        let source = self.source()?;

        if start_hour > 23 || end_hour > 23 {
            return Err(AnalyticsError::InvalidArgument(
                "hours must be between 0 and 23".to_string(),
            ));
        }
        if historical_start > historical_end {
            return Err(AnalyticsError::InvalidArgument(
                "historical start must not be after historical end".to_string(),
            ));
        }

        let target_day = reference.weekday();
        let facts = source.fetch_range(historical_start, historical_end);

        let mut total_profit = 0.0;
        for fact in &facts {
            if fact.timestamp.weekday() != target_day {
                continue;
            }

            let hour = fact.timestamp.hour();
            let in_hour_range = if start_hour <= end_hour {
                hour >= start_hour && hour <= end_hour
            } else {
                // Overnight range, e.g. 10 PM to 2 AM
                hour >= start_hour || hour <= end_hour
            };

            if in_hour_range {
                total_profit += fact.profit();
            }
        }

        Ok(total_profit)
    }

    /// Most profitable contiguous block of `hours_per_block` hours for each
    /// day of the week, formatted one line per day.
    ///
    /// Blocks never wrap past midnight. Comparison is strict, so the earliest
    /// best block wins ties and a day with no recorded profit reports the
    /// block starting at midnight with $0.00.
    pub fn optimal_work_hours(
        &self,
        hours_per_block: u32,
        historical_start: DateTime<Utc>,
        historical_end: DateTime<Utc>,
    ) -> Result<String, AnalyticsError> {
        let source = self.source()?;

        if !(1..=24).contains(&hours_per_block) {
            return Err(AnalyticsError::InvalidArgument(
                "hours per block must be between 1 and 24".to_string(),
            ));
        }
        if historical_start > historical_end {
            return Err(AnalyticsError::InvalidArgument(
                "historical start must not be after historical end".to_string(),
            ));
        }

        let facts = source.fetch_range(historical_start, historical_end);

        // Fixed 7x24 grid rather than a map: deterministic iteration order
        // and O(1) cell access, rebuilt fresh on every call.
        let mut profit_matrix = [[0.0f64; 24]; 7];
        for fact in &facts {
            let day = fact.timestamp.weekday().num_days_from_monday() as usize;
            let hour = fact.timestamp.hour() as usize;
            profit_matrix[day][hour] += fact.profit();
        }
        debug!("profit matrix built from {} deliveries", facts.len());

        let block = hours_per_block as usize;
        let mut result = String::from("Optimal Work Hours by Day:\n===========================\n");

        for (day, row) in profit_matrix.iter().enumerate() {
            let mut best_start_hour = 0;
            let mut best_profit = 0.0f64;

            for start_hour in 0..=(24 - block) {
                let block_profit: f64 = row[start_hour..start_hour + block].iter().sum();
                if block_profit > best_profit {
                    best_profit = block_profit;
                    best_start_hour = start_hour;
                }
            }

            let end_hour = best_start_hour + block;
            result.push_str(&format!(
                "{:<9}: {} - {} (Avg Profit: ${:.2})\n",
                DAY_NAMES[day],
                format_hour(best_start_hour),
                format_hour(end_hour),
                best_profit
            ));
        }

        Ok(result)
    }
}

/// Format an hour (0-24) as a 12-hour clock time, e.g. "9:00 AM", "5:00 PM".
fn format_hour(hour: usize) -> String {
    match hour {
        0 | 24 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        h if h < 12 => format!("{}:00 AM", h),
        h => format!("{}:00 PM", h - 12),
    }
}
