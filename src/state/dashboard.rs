//! Dashboard Metrics
//!
//! The aggregate snapshot served by the API and the pure adapters that
//! reshape it into chart-ready series. Everything here is derived from one
//! response, so the cards and charts are always mutually consistent.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use super::models::flexible_f64;

/// Fixed month labels for the payroll-expense chart.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Aggregate snapshot from the dashboard endpoint.
///
/// `Default` is the all-zero/empty snapshot rendered before the first
/// successful fetch. SQL aggregates over empty tables arrive as `null`,
/// so the scalar fields deserialize null as zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    pub total_employees: u32,
    #[serde(deserialize_with = "null_to_zero")]
    pub avg_salary: f64,
    /// Net payroll totals for up to the last 12 months, chronological.
    pub payroll_expenses: Vec<f64>,
    /// Department name to payroll total. Kept sorted so doughnut labels
    /// and values always zip in the same order.
    pub department_payroll_data: BTreeMap<String, f64>,
    pub employee_growth: Vec<MonthlyHires>,
    pub highest_salary_employees: Vec<TopEarner>,
    pub pending_leaves: u32,
    #[serde(deserialize_with = "null_to_zero")]
    pub bonuses_incentives_paid: f64,
}

/// New-hire count for one calendar month.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyHires {
    pub year: i32,
    pub month: u32,
    pub count: u32,
}

/// One entry of the highest-paid ranking.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopEarner {
    pub name: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub salary: f64,
}

/// Labels and values in matching order, ready for a chart renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// A series with no values draws as an empty frame.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, or 0.0 for an empty series.
    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(0.0, f64::max)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl DashboardMetrics {
    /// Monthly payroll expenses under the fixed Jan-Dec labels.
    pub fn payroll_expense_series(&self) -> ChartSeries {
        ChartSeries {
            labels: MONTH_LABELS.iter().map(|month| month.to_string()).collect(),
            values: self.payroll_expenses.clone(),
        }
    }

    /// Per-department payroll totals in deterministic label order.
    pub fn department_payroll_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.department_payroll_data.keys().cloned().collect(),
            values: self.department_payroll_data.values().cloned().collect(),
        }
    }

    /// New hires per month, labelled "year-month".
    pub fn hire_growth_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self
                .employee_growth
                .iter()
                .map(|hires| format!("{}-{}", hires.year, hires.month))
                .collect(),
            values: self.employee_growth.iter().map(|hires| hires.count as f64).collect(),
        }
    }
}

/// Format an amount the way the metric cards display it: whole numbers
/// without decimals, fractional amounts with two.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_snapshot_is_all_zero_and_empty() {
        let metrics = DashboardMetrics::default();

        assert_eq!(metrics.total_employees, 0);
        assert_eq!(metrics.pending_leaves, 0);
        assert_eq!(format_amount(metrics.avg_salary), "0");
        assert_eq!(format_amount(metrics.bonuses_incentives_paid), "0");

        assert!(metrics.payroll_expense_series().is_empty());
        assert!(metrics.department_payroll_series().is_empty());
        assert!(metrics.hire_growth_series().is_empty());
        assert!(metrics.highest_salary_employees.is_empty());
    }

    #[test]
    fn deserializes_the_backend_payload() {
        let metrics: DashboardMetrics = serde_json::from_value(json!({
            "totalEmployees": 42,
            "avgSalary": 52000.25,
            "departmentData": {"Engineering": 12, "Sales": 8},
            "payrollExpenses": [1000.0, 1200.0, 900.0],
            "pendingLeaves": 3,
            "employeeGrowth": [
                {"year": 2024, "month": 11, "count": 2},
                {"year": 2024, "month": 12, "count": 5}
            ],
            "departmentPayrollData": {"Sales": 8000.0, "Engineering": 24000.0},
            "highestSalaryEmployees": [
                {"name": "Ada Lovelace", "salary": 91000.0},
                {"name": "Grace Hopper", "salary": "88000.00"}
            ],
            "bonusesIncentivesPaid": 4500.0
        }))
        .unwrap();

        assert_eq!(metrics.total_employees, 42);
        assert_eq!(metrics.payroll_expenses.len(), 3);
        assert_eq!(metrics.highest_salary_employees[1].salary, 88000.0);
    }

    #[test]
    fn null_aggregates_deserialize_as_zero() {
        let metrics: DashboardMetrics = serde_json::from_value(json!({
            "totalEmployees": 0,
            "avgSalary": null,
            "bonusesIncentivesPaid": null
        }))
        .unwrap();

        assert_eq!(metrics.avg_salary, 0.0);
        assert_eq!(metrics.bonuses_incentives_paid, 0.0);
    }

    #[test]
    fn expense_series_carries_the_fixed_month_labels() {
        let metrics = DashboardMetrics {
            payroll_expenses: vec![100.0, 200.0],
            ..Default::default()
        };

        let series = metrics.payroll_expense_series();
        assert_eq!(series.labels.len(), 12);
        assert_eq!(series.labels[0], "Jan");
        assert_eq!(series.labels[11], "Dec");
        assert_eq!(series.values, vec![100.0, 200.0]);
    }

    #[test]
    fn department_series_pairs_labels_and_values_deterministically() {
        let metrics: DashboardMetrics = serde_json::from_value(json!({
            "departmentPayrollData": {"Sales": 8000.0, "Engineering": 24000.0, "HR": 5000.0}
        }))
        .unwrap();

        let series = metrics.department_payroll_series();
        assert_eq!(series.labels, vec!["Engineering", "HR", "Sales"]);
        assert_eq!(series.values, vec![24000.0, 5000.0, 8000.0]);
        assert_eq!(series.total(), 37000.0);
    }

    #[test]
    fn growth_series_labels_as_year_month() {
        let metrics = DashboardMetrics {
            employee_growth: vec![
                MonthlyHires { year: 2024, month: 11, count: 2 },
                MonthlyHires { year: 2025, month: 1, count: 4 },
            ],
            ..Default::default()
        };

        let series = metrics.hire_growth_series();
        assert_eq!(series.labels, vec!["2024-11", "2025-1"]);
        assert_eq!(series.values, vec![2.0, 4.0]);
        assert_eq!(series.max(), 4.0);
    }

    #[test]
    fn amounts_format_for_cards() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(52000.0), "52000");
        assert_eq!(format_amount(52000.25), "52000.25");
        assert_eq!(format_amount(3500.5), "3500.50");
    }
}
