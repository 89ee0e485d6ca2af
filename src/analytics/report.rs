//! Financial plan projection and report assembly
//!
//! Extrapolates historical daily averages into a monthly projection against
//! the driver's income target, and packages delivery/financial summaries for
//! a host reporting layer.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::analytics::history::{DeliveryDataSource, HistoricalProfitAnalyzer};
use crate::analytics::models::{DeliveryReportData, FinancialPlan, GeneralReportData};
use crate::analytics::AnalyticsError;

/// Default analysis window in days
pub const DEFAULT_DAYS_TO_ANALYZE: i64 = 90;

/// Default target work hours per day for schedule optimization
pub const DEFAULT_TARGET_WORK_HOURS: u32 = 6;

/// Days used when extrapolating a daily average to a month
const DAYS_PER_MONTH: f64 = 30.0;

/// Scalar earnings aggregates over a historical window.
///
/// How these are aggregated is the collaborator's concern; the projector
/// treats them as opaque query results.
pub trait EarningsAggregateSource {
    fn total_earnings(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64;
    fn delivery_count(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> u32;
    fn current_month_income(&self) -> f64;
    fn average_earnings(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64;
}

/// Projects historical earnings into a monthly financial plan.
///
/// Configuration is held per instance rather than globally, so concurrent
/// projections with different targets cannot interfere.
pub struct FinancialPlanProjector {
    analyzer: HistoricalProfitAnalyzer,
    aggregates: Box<dyn EarningsAggregateSource>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    days_to_analyze: i64,
    target_monthly_income: f64,
    estimated_expenses: f64,
    other_monthly_income: f64,
    target_work_hours_per_day: u32,
}

impl FinancialPlanProjector {
    /// Projector over the last 90 days ending now, with zeroed targets.
    pub fn new(
        deliveries: Box<dyn DeliveryDataSource>,
        aggregates: Box<dyn EarningsAggregateSource>,
    ) -> Self {
        let end_date = Utc::now();
        let start_date = end_date - Duration::days(DEFAULT_DAYS_TO_ANALYZE);

        Self {
            analyzer: HistoricalProfitAnalyzer::with_source(deliveries),
            aggregates,
            start_date,
            end_date,
            days_to_analyze: DEFAULT_DAYS_TO_ANALYZE,
            target_monthly_income: 0.0,
            estimated_expenses: 0.0,
            other_monthly_income: 0.0,
            target_work_hours_per_day: DEFAULT_TARGET_WORK_HOURS,
        }
    }

    // ---- window configuration ----

    pub fn set_date_range(
        &mut self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<(), AnalyticsError> {
        if start_date > end_date {
            return Err(AnalyticsError::InvalidArgument(
                "start date must not be after end date".to_string(),
            ));
        }
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Analysis window of `days_back` days ending now.
    pub fn set_days_back(&mut self, days_back: i64) -> Result<(), AnalyticsError> {
        if days_back <= 0 {
            return Err(AnalyticsError::InvalidArgument(
                "days back must be positive".to_string(),
            ));
        }
        self.days_to_analyze = days_back;
        self.end_date = Utc::now();
        self.start_date = self.end_date - Duration::days(days_back);
        Ok(())
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    // ---- plan configuration ----

    pub fn set_target_monthly_income(&mut self, target: f64) -> Result<(), AnalyticsError> {
        if target < 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "target income must be non-negative".to_string(),
            ));
        }
        self.target_monthly_income = target;
        Ok(())
    }

    pub fn set_estimated_expenses(&mut self, expenses: f64) -> Result<(), AnalyticsError> {
        if expenses < 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "expenses must be non-negative".to_string(),
            ));
        }
        self.estimated_expenses = expenses;
        Ok(())
    }

    /// Monthly income from sources other than delivery work, e.g. interest
    /// on linked bank accounts.
    pub fn set_other_monthly_income(&mut self, other_income: f64) -> Result<(), AnalyticsError> {
        if other_income < 0.0 {
            return Err(AnalyticsError::InvalidArgument(
                "other income must be non-negative".to_string(),
            ));
        }
        self.other_monthly_income = other_income;
        Ok(())
    }

    pub fn set_target_work_hours_per_day(&mut self, hours: u32) -> Result<(), AnalyticsError> {
        if !(1..=24).contains(&hours) {
            return Err(AnalyticsError::InvalidArgument(
                "hours must be between 1 and 24".to_string(),
            ));
        }
        self.target_work_hours_per_day = hours;
        Ok(())
    }

    // ---- reports ----

    /// Monthly financial plan: projection, income gap, optimal schedule, and
    /// recommendations, all frozen into the returned value.
    pub fn create_financial_plan(&self) -> Result<FinancialPlan, AnalyticsError> {
        let total_earnings = self.aggregates.total_earnings(self.start_date, self.end_date);

        let daily_average = total_earnings / self.days_to_analyze as f64;
        let projected_delivery_income = daily_average * DAYS_PER_MONTH;
        let projected_monthly_income = projected_delivery_income + self.other_monthly_income;
        let income_gap = self.target_monthly_income - projected_monthly_income;
        let additional_daily_required = income_gap / DAYS_PER_MONTH;
        let projected_net_profit = projected_monthly_income - self.estimated_expenses;

        let optimal_schedule = self.analyzer.optimal_work_hours(
            self.target_work_hours_per_day,
            self.start_date,
            self.end_date,
        )?;

        let recommendations = self.build_recommendations(
            projected_delivery_income,
            projected_monthly_income,
            income_gap,
            additional_daily_required,
            projected_net_profit,
            &optimal_schedule,
        );

        debug!(
            "financial plan: projected ${:.2}/month against target ${:.2}",
            projected_monthly_income, self.target_monthly_income
        );

        Ok(FinancialPlan {
            target_monthly_income: self.target_monthly_income,
            estimated_expenses: self.estimated_expenses,
            projected_monthly_income,
            projected_net_profit,
            income_gap,
            additional_daily_required,
            optimal_schedule,
            recommendations,
        })
    }

    fn build_recommendations(
        &self,
        projected_delivery_income: f64,
        projected_monthly_income: f64,
        income_gap: f64,
        additional_daily_required: f64,
        projected_net_profit: f64,
        optimal_schedule: &str,
    ) -> String {
        let mut text = String::from("=== Financial Plan Recommendations ===\n\n");

        text.push_str("--- Income Breakdown ---\n");
        text.push_str(&format!(
            "Projected Delivery Income: ${:.2}/month\n",
            projected_delivery_income
        ));
        if self.other_monthly_income > 0.0 {
            text.push_str(&format!(
                "Other Income (from bank accounts): ${:.2}/month\n",
                self.other_monthly_income
            ));
        }
        text.push_str(&format!(
            "Total Projected Income: ${:.2}/month\n\n",
            projected_monthly_income
        ));

        if income_gap > 0.0 {
            text.push_str(&format!(
                "You need an additional ${:.2}/month to meet your goal.\n",
                income_gap
            ));
            text.push_str(&format!(
                "That's approximately ${:.2} more per day from deliveries.\n\n",
                additional_daily_required
            ));
        } else {
            text.push_str("You're on track to meet or exceed your monthly income goal!\n\n");
        }

        text.push_str("Optimal Work Schedule:\n");
        text.push_str(optimal_schedule);
        text.push('\n');

        if projected_net_profit < 0.0 {
            text.push_str(&format!(
                "\nWarning: projected expenses (${:.2}) exceed projected income (${:.2}).\n",
                self.estimated_expenses, projected_monthly_income
            ));
            text.push_str("Consider reducing expenses or increasing work hours.\n");
        } else {
            text.push_str(&format!(
                "\nProjected monthly net profit: ${:.2}\n",
                projected_net_profit
            ));
        }

        text
    }

    /// Delivery summary plus the optimal schedule for the configured window.
    pub fn delivery_report(&self) -> Result<DeliveryReportData, AnalyticsError> {
        let optimal_hours = self.analyzer.optimal_work_hours(
            self.target_work_hours_per_day,
            self.start_date,
            self.end_date,
        )?;

        Ok(DeliveryReportData {
            start_date: self.start_date,
            end_date: self.end_date,
            total_earnings: self.aggregates.total_earnings(self.start_date, self.end_date),
            avg_earnings: self.aggregates.average_earnings(self.start_date, self.end_date),
            delivery_count: self.aggregates.delivery_count(self.start_date, self.end_date),
            optimal_hours,
        })
    }

    /// Overall financial summary for the configured window.
    pub fn general_report(&self) -> GeneralReportData {
        let total_income = self.aggregates.total_earnings(self.start_date, self.end_date);
        let daily_average = total_income / self.days_to_analyze as f64;

        GeneralReportData {
            total_income,
            current_month_income: self.aggregates.current_month_income(),
            avg_per_delivery: self.aggregates.average_earnings(self.start_date, self.end_date),
            total_deliveries: self.aggregates.delivery_count(self.start_date, self.end_date),
            projected_monthly_income: daily_average * DAYS_PER_MONTH,
        }
    }

    /// Expected profit for one day-of-week and hour range over the configured
    /// window.
    pub fn query_singular_report(
        &self,
        day_timestamp: DateTime<Utc>,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<f64, AnalyticsError> {
        self.analyzer.expected_profit(
            day_timestamp,
            self.start_date,
            self.end_date,
            start_hour,
            end_hour,
        )
    }

    /// Full report rendered as a formatted string.
    pub fn export_data(&self) -> Result<String, AnalyticsError> {
        let delivery_data = self.delivery_report()?;
        let general_data = self.general_report();

        let mut export = String::from("=== Delivery Financial Report ===\n");
        export.push_str(&format!("Generated: {}\n", Utc::now().format("%Y-%m-%d")));
        export.push_str(&format!(
            "Analysis Period: {} to {}\n\n",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        ));

        export.push_str("--- Delivery Summary ---\n");
        export.push_str(&format!(
            "Total Deliveries: {}\n",
            delivery_data.delivery_count
        ));
        export.push_str(&format!(
            "Total Earnings: ${:.2}\n",
            delivery_data.total_earnings
        ));
        export.push_str(&format!(
            "Average per Delivery: ${:.2}\n\n",
            delivery_data.avg_earnings
        ));

        export.push_str("--- Financial Summary ---\n");
        export.push_str(&format!(
            "Current Month Income: ${:.2}\n",
            general_data.current_month_income
        ));
        export.push_str(&format!(
            "Projected Monthly Income: ${:.2}\n\n",
            general_data.projected_monthly_income
        ));

        export.push_str("--- Optimal Schedule ---\n");
        export.push_str(&delivery_data.optimal_hours);

        Ok(export)
    }
}
