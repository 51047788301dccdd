use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Category of leave being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Maternity,
    Paternity,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "ANNUAL",
            LeaveType::Sick => "SICK",
            LeaveType::Unpaid => "UNPAID",
            LeaveType::Maternity => "MATERNITY",
            LeaveType::Paternity => "PATERNITY",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANNUAL" => Ok(LeaveType::Annual),
            "SICK" => Ok(LeaveType::Sick),
            "UNPAID" => Ok(LeaveType::Unpaid),
            "MATERNITY" => Ok(LeaveType::Maternity),
            "PATERNITY" => Ok(LeaveType::Paternity),
            other => Err(format!("Unknown leave type: {}", other)),
        }
    }
}

/// Lifecycle status of a leave request
///
/// # Status Transitions
/// ```text
/// Pending -> Approved
///      \--> Rejected
///      \--> Cancelled (by the owning employee only)
/// ```
///
/// Approved, Rejected and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    /// Checks if a transition from the current status to `next` is valid
    pub fn can_transition_to(&self, next: LeaveStatus) -> bool {
        use LeaveStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Pending, Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(LeaveStatus::Pending),
            "APPROVED" => Ok(LeaveStatus::Approved),
            "REJECTED" => Ok(LeaveStatus::Rejected),
            "CANCELLED" => Ok(LeaveStatus::Cancelled),
            other => Err(format!("Unknown leave status: {}", other)),
        }
    }
}

/// Leave request row
///
/// # Invariants
/// - `end_date >= start_date`
/// - `start_date` is in the future at creation time
/// - status transitions follow [`LeaveStatus::can_transition_to`]
/// - `updated_at >= created_at`
#[derive(Debug, Clone)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
