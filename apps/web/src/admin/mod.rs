//! Staff back-office modules. None are built yet; each is described so the staff
//! area can show what is coming.

pub mod handlers;

use serde::Serialize;

use crate::models::attendance::{AttendanceRecord, LeaveApplication};
use crate::models::employee::{ComplaintEntry, EmployeeProfile};
use crate::models::RecordOutline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminModule {
    Attendance,
    Payroll,
    Accounts,
    Employees,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    UnderConstruction,
}

impl AdminModule {
    pub const ALL: [AdminModule; 4] = [
        AdminModule::Attendance,
        AdminModule::Payroll,
        AdminModule::Accounts,
        AdminModule::Employees,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AdminModule::Attendance => "attendance",
            AdminModule::Payroll => "payroll",
            AdminModule::Accounts => "accounts",
            AdminModule::Employees => "employees",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            AdminModule::Attendance => "Attendance & Leave",
            AdminModule::Payroll => "Payroll",
            AdminModule::Accounts => "Accounts",
            AdminModule::Employees => "Employee Records",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            AdminModule::Attendance => {
                "Daily attendance for office and field staff, with leave applications and approvals."
            }
            AdminModule::Payroll => "Monthly salary runs, stipends for field volunteers and payslips.",
            AdminModule::Accounts => {
                "Donation receipts, program expenses and the books behind our annual audit."
            }
            AdminModule::Employees => {
                "One profile per staff member, and a channel for raising workplace complaints."
            }
        }
    }

    pub fn planned_features(self) -> &'static [&'static str] {
        match self {
            AdminModule::Attendance => &[
                "Mark daily check-in and check-out",
                "Apply for leave and track approval",
                "Monthly attendance summary per employee",
            ],
            AdminModule::Payroll => &[
                "Salary structures per designation",
                "Monthly payroll run using attendance data",
                "Downloadable payslips",
            ],
            AdminModule::Accounts => &[
                "Donation receipts with 80G certificates",
                "Expense entries tagged by program",
                "Year-end statements for the auditor",
            ],
            AdminModule::Employees => &[
                "Employee profiles and employment history",
                "Anonymous complaint box",
                "Complaint tracking from open to resolved",
            ],
        }
    }

    pub fn planned_records(self) -> Vec<RecordOutline> {
        match self {
            AdminModule::Attendance => vec![
                RecordOutline::of::<AttendanceRecord>(),
                RecordOutline::of::<LeaveApplication>(),
            ],
            AdminModule::Payroll | AdminModule::Accounts => Vec::new(),
            AdminModule::Employees => vec![
                RecordOutline::of::<EmployeeProfile>(),
                RecordOutline::of::<ComplaintEntry>(),
            ],
        }
    }

    pub fn overview(self) -> ModuleOverview {
        ModuleOverview {
            slug: self.slug(),
            title: self.title(),
            summary: self.summary(),
            status: ModuleStatus::UnderConstruction,
            planned_features: self.planned_features(),
            planned_records: self.planned_records(),
        }
    }
}

/// A placeholder module as listed by the staff area and the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOverview {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub status: ModuleStatus,
    pub planned_features: &'static [&'static str],
    pub planned_records: Vec<RecordOutline>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for module in AdminModule::ALL {
            assert_eq!(AdminModule::from_slug(module.slug()), Some(module));
        }
        assert_eq!(AdminModule::from_slug("inventory"), None);
    }

    #[test]
    fn test_overview_serialises_status() {
        let value = serde_json::to_value(AdminModule::Attendance.overview()).unwrap();
        assert_eq!(value["status"], "under_construction");
        assert_eq!(value["planned_records"][1]["name"], "LeaveApplication");
        assert_eq!(value["planned_features"].as_array().unwrap().len(), 3);
    }
}
