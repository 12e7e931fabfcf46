//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod chart;
pub mod employee_form;
pub mod loading;
pub mod metric_card;
pub mod sidebar;

pub use chart::{BarChart, DoughnutChart, LineChart};
pub use employee_form::EmployeeForm;
pub use loading::TableSkeleton;
pub use metric_card::MetricCard;
pub use sidebar::Sidebar;
