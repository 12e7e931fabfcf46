//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod login;
pub mod payroll;

pub use dashboard::Dashboard;
pub use employees::Employees;
pub use leaves::Leaves;
pub use login::Login;
pub use payroll::Payroll;
