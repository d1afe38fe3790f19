//! Back-office records planned for the staff area.
//!
//! Nothing stores or mutates these yet. They fix the shape of the data so the
//! placeholder pages can show what each module will hold.

pub mod attendance;
pub mod employee;

use serde::Serialize;

/// A record type with a human-readable description of each field.
pub trait PlannedRecord {
    const NAME: &'static str;
    const FIELDS: &'static [(&'static str, &'static str)];
}

/// Field listing for a planned record, as shown on the placeholder pages.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutline {
    pub name: &'static str,
    pub fields: Vec<FieldOutline>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOutline {
    pub name: &'static str,
    pub description: &'static str,
}

impl RecordOutline {
    pub fn of<R: PlannedRecord>() -> Self {
        Self {
            name: R::NAME,
            fields: R::FIELDS
                .iter()
                .map(|&(name, description)| FieldOutline { name, description })
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use serde::Serialize;

    use super::PlannedRecord;

    /// Asserts that `FIELDS` names exactly the keys the record serialises to.
    pub fn assert_fields_match<R: PlannedRecord + Serialize>(sample: &R) {
        let value = serde_json::to_value(sample).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut declared: Vec<&str> = R::FIELDS.iter().map(|(name, _)| *name).collect();
        keys.sort_unstable();
        declared.sort_unstable();
        assert_eq!(keys, declared, "{}", R::NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::EmployeeProfile;

    #[test]
    fn test_outline_lists_every_field() {
        let outline = RecordOutline::of::<EmployeeProfile>();
        assert_eq!(outline.name, "EmployeeProfile");
        assert_eq!(outline.fields.len(), EmployeeProfile::FIELDS.len());
        assert_eq!(outline.fields[0].name, "id");
    }
}
