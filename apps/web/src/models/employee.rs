#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PlannedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Volunteer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub employment_type: EmploymentType,
    pub is_active: bool,
}

impl PlannedRecord for EmployeeProfile {
    const NAME: &'static str = "EmployeeProfile";
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "Employee identifier"),
        ("full_name", "Name as on official documents"),
        ("email", "Work email"),
        ("phone", "Mobile number"),
        ("designation", "Job title"),
        ("department", "Programs, field operations, finance or administration"),
        ("date_of_joining", "First working day"),
        ("employment_type", "full_time, part_time, contract or volunteer"),
        ("is_active", "False once the employee has left"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Workplace,
    Payroll,
    Facilities,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InReview,
    Resolved,
}

/// A grievance raised by staff. `raised_by` is empty for anonymous complaints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintEntry {
    pub id: Uuid,
    pub raised_by: Option<Uuid>,
    pub category: ComplaintCategory,
    pub subject: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub raised_on: DateTime<Utc>,
}

impl ComplaintEntry {
    pub fn is_anonymous(&self) -> bool {
        self.raised_by.is_none()
    }
}

impl PlannedRecord for ComplaintEntry {
    const NAME: &'static str = "ComplaintEntry";
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "Complaint identifier"),
        ("raised_by", "Employee who raised it; empty when anonymous"),
        ("category", "workplace, payroll, facilities or other"),
        ("subject", "One-line summary"),
        ("description", "Full account of the issue"),
        ("status", "open, in_review or resolved"),
        ("raised_on", "When the complaint was raised"),
    ];
}
