//! Domain Models
//!
//! Server-owned records and the transient add-employee draft.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Employee record as served by the API.
///
/// Read-only on the client; new records are created through
/// [`EmployeeDraft`] and the list is refetched rather than patched.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub employee_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    // The list endpoint serializes salary as a number, the create echo as
    // a string.
    #[serde(deserialize_with = "flexible_f64")]
    pub salary: f64,
    pub hire_date: NaiveDate,
}

/// One payroll run row, joined server-side with employee and payslip data.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PayrollRecord {
    pub employee_id: u32,
    pub employee_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(deserialize_with = "flexible_f64")]
    pub net_salary: f64,
    pub pay_date: NaiveDate,
    #[serde(default)]
    pub payslip_generated: bool,
    /// Download URL when a payslip PDF exists for this run.
    #[serde(default)]
    pub payslip_pdf: Option<String>,
}

/// Transient add-employee form input.
///
/// Every field mirrors a creatable [`Employee`] field as the raw input
/// string. The draft is posted verbatim as the create request body and
/// reset to empty only on a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    pub status: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeDraft {
    /// True until the user has typed into any field.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Accept a JSON number or a numeric string for a decimal field.
pub(crate) fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => Ok(value),
        Decimal::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_salary_accepts_number_and_string() {
        let from_list: Employee = serde_json::from_value(json!({
            "employee_id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@earnest.dev",
            "phone_number": null,
            "address": null,
            "department": "Engineering",
            "role": "Analyst",
            "status": "active",
            "salary": 52000.0,
            "hire_date": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(from_list.salary, 52000.0);
        assert_eq!(from_list.hire_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let from_echo: Employee = serde_json::from_value(json!({
            "employee_id": 8,
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@earnest.dev",
            "salary": "61000.00",
            "hire_date": "2024-04-15"
        }))
        .unwrap();
        assert_eq!(from_echo.salary, 61000.0);
        assert_eq!(from_echo.status, None);
    }

    #[test]
    fn payroll_record_parses_with_and_without_payslip() {
        let without: PayrollRecord = serde_json::from_value(json!({
            "employee_id": 3,
            "employee_name": "Ada Lovelace",
            "role": "Analyst",
            "department": "Engineering",
            "net_salary": 3500.5,
            "pay_date": "2024-05-31",
            "payslip_generated": false,
            "payslip_pdf": null
        }))
        .unwrap();
        assert_eq!(without.payslip_pdf, None);

        let with: PayrollRecord = serde_json::from_value(json!({
            "employee_id": 3,
            "employee_name": "Ada Lovelace",
            "role": null,
            "department": null,
            "net_salary": 3500.5,
            "pay_date": "2024-05-31",
            "payslip_generated": true,
            "payslip_pdf": "https://x/y.pdf"
        }))
        .unwrap();
        assert_eq!(with.payslip_pdf.as_deref(), Some("https://x/y.pdf"));
    }

    #[test]
    fn draft_serializes_every_creatable_field_verbatim() {
        let draft = EmployeeDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@earnest.dev".to_string(),
            phone_number: "555-0100".to_string(),
            address: "12 Analytical Way".to_string(),
            department: "Engineering".to_string(),
            role: "Analyst".to_string(),
            status: "active".to_string(),
            salary: "52000".to_string(),
            hire_date: "2024-03-01".to_string(),
        };

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@earnest.dev",
                "phone_number": "555-0100",
                "address": "12 Analytical Way",
                "department": "Engineering",
                "role": "Analyst",
                "status": "active",
                "salary": "52000",
                "hire_date": "2024-03-01"
            })
        );
    }

    #[test]
    fn draft_starts_empty_and_resets_empty() {
        let mut draft = EmployeeDraft::default();
        assert!(draft.is_empty());

        draft.email = "ada@earnest.dev".to_string();
        assert!(!draft.is_empty());

        draft = EmployeeDraft::default();
        assert!(draft.is_empty());
    }
}
