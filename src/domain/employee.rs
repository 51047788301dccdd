use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Employment status of an employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::Terminated => "TERMINATED",
            EmployeeStatus::OnLeave => "ON_LEAVE",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(EmployeeStatus::Active),
            "INACTIVE" => Ok(EmployeeStatus::Inactive),
            "TERMINATED" => Ok(EmployeeStatus::Terminated),
            "ON_LEAVE" => Ok(EmployeeStatus::OnLeave),
            other => Err(format!("Unknown employee status: {}", other)),
        }
    }
}

/// Employee row
///
/// # Invariants
/// - `email` is unique
/// - `department_id` references an existing department
/// - `user_id`, when present, references an existing user (at most one
///   employee per user)
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Uuid,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub address: String,
    pub status: EmployeeStatus,
    pub user_id: Option<Uuid>,
}

impl Employee {
    /// Full name is derived at read time, never stored
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            EmployeeStatus::Active,
            EmployeeStatus::Inactive,
            EmployeeStatus::Terminated,
            EmployeeStatus::OnLeave,
        ] {
            assert_eq!(status.as_str().parse::<EmployeeStatus>().unwrap(), status);
        }
    }

    #[test]
    fn on_leave_serializes_with_underscore() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"ON_LEAVE\""
        );
    }
}
