//! View State
//!
//! Model types and the fetch/submit lifecycle primitives each page builds
//! its own state from. Pages own their state exclusively; nothing here is
//! shared mutable across pages.

pub mod dashboard;
pub mod fetch;
pub mod models;

pub use dashboard::{ChartSeries, DashboardMetrics, MonthlyHires, TopEarner};
pub use fetch::{FetchGuard, SubmitPhase, ViewToken};
pub use models::{Employee, EmployeeDraft, PayrollRecord};
