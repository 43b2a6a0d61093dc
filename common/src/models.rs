use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student represents one enrolled student row
///
/// `student_id` is assigned by the store and never changes; `email` is unique
/// across all students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

/// Insert payload for a new student
///
/// `enrollment_date` stays text here; the store casts it to a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_date_serializes_as_calendar_date() {
        let student = Student {
            student_id: 1,
            first_name: "Thomas".to_string(),
            last_name: "Wood".to_string(),
            email: "t@example.com".to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2020, 9, 5).unwrap(),
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["enrollment_date"], "2020-09-05");
        assert_eq!(json["student_id"], 1);
    }
}
