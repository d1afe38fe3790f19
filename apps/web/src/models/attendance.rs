#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PlannedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    OnLeave,
}

/// One employee's attendance for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

impl PlannedRecord for AttendanceRecord {
    const NAME: &'static str = "AttendanceRecord";
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "Record identifier"),
        ("employee_id", "Employee the record belongs to"),
        ("date", "Working day"),
        ("check_in", "Time the employee arrived, if they did"),
        ("check_out", "Time the employee left"),
        ("status", "present, absent, half_day or on_leave"),
        ("remarks", "Free-text note from the supervisor"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Casual,
    Sick,
    Earned,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
}

impl LeaveApplication {
    /// Calendar days covered, both ends included. Zero when the range is reversed.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(-1) + 1
    }
}

impl PlannedRecord for LeaveApplication {
    const NAME: &'static str = "LeaveApplication";
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "Application identifier"),
        ("employee_id", "Employee applying"),
        ("leave_type", "casual, sick, earned or unpaid"),
        ("start_date", "First day of leave"),
        ("end_date", "Last day of leave"),
        ("reason", "Reason given by the employee"),
        ("status", "pending, approved or rejected"),
        ("applied_on", "When the application was made"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::testing::assert_fields_match;

    fn leave(start: (i32, u32, u32), end: (i32, u32, u32)) -> LeaveApplication {
        LeaveApplication {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            reason: "Fever".into(),
            status: LeaveStatus::Pending,
            applied_on: Utc::now(),
        }
    }

    #[test]
    fn test_attendance_fields_match_struct() {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            check_in: NaiveTime::from_hms_opt(9, 30, 0),
            check_out: None,
            status: AttendanceStatus::HalfDay,
            remarks: None,
        };
        assert_fields_match(&record);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "half_day");
        assert_eq!(value["check_in"], "09:30:00");
        assert!(value["check_out"].is_null());
    }

    #[test]
    fn test_leave_fields_match_struct() {
        assert_fields_match(&leave((2024, 7, 1), (2024, 7, 3)));
    }

    #[test]
    fn test_leave_status_parses_snake_case() {
        let status: LeaveStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, LeaveStatus::Approved);
        assert!(serde_json::from_str::<LeaveType>("\"Casual\"").is_err());
    }

    #[test]
    fn test_leave_days_inclusive() {
        assert_eq!(leave((2024, 7, 1), (2024, 7, 3)).days(), 3);
        assert_eq!(leave((2024, 7, 1), (2024, 7, 1)).days(), 1);
        assert_eq!(leave((2024, 7, 5), (2024, 7, 1)).days(), 0);
    }
}
