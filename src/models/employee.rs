use serde::{Deserialize, Serialize};

/// Row of the `employees` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i64,
    pub full_name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// User-supplied fields for create and full-field update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub full_name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub designation: Option<String>,
    pub description: Option<String>,
}

impl EmployeeInput {
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}
