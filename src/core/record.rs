//! Typed rows decoded at the store boundary
//!
//! Each query has its own record shape: plain choice records feed the
//! selection prompts, the `*Details` records carry resolved names for the
//! listing tables.

use tabled::Tabled;

/// A department row
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Department {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
}

/// A role, as offered in selection prompts
#[derive(Debug, Clone, PartialEq)]
pub struct RoleChoice {
    pub id: i64,
    pub title: String,
}

/// An employee, as offered in selection prompts
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeChoice {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeChoice {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A role joined with its department, for listing
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct RoleDetails {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Salary")]
    pub salary: f64,
    #[tabled(rename = "Department")]
    pub department: String,
}

/// An employee with role, department, and manager names resolved
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct EmployeeDetails {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Department")]
    pub department: String,
    #[tabled(rename = "Salary")]
    pub salary: f64,
    /// Empty cell when the employee has no manager
    #[tabled(rename = "Manager", display_with = "display_optional")]
    pub manager: Option<String>,
}

fn display_optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let employee = EmployeeChoice {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_missing_manager_renders_empty() {
        assert_eq!(display_optional(&None), "");
        assert_eq!(
            display_optional(&Some("Grace Hopper".to_string())),
            "Grace Hopper"
        );
    }
}
