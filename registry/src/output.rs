// Table rendering for terminal output

use chrono::NaiveDate;
use common::models::Student;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "ID")]
    student_id: i32,
    #[tabled(rename = "First name")]
    first_name: String,
    #[tabled(rename = "Last name")]
    last_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Enrolled")]
    enrollment_date: NaiveDate,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.student_id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            enrollment_date: student.enrollment_date,
        }
    }
}

/// Render a student listing as a terminal table
pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found".to_string();
    }

    Table::new(students.iter().map(StudentRow::from))
        .with(Style::rounded())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student {
            student_id: 1,
            first_name: "Thomas".to_string(),
            last_name: "Wood".to_string(),
            email: "t@example.com".to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2020, 9, 5).unwrap(),
        }
    }

    #[test]
    fn test_render_includes_fields_and_headers() {
        let rendered = render_students(&[sample()]);
        assert!(rendered.contains("Email"));
        assert!(rendered.contains("t@example.com"));
        assert!(rendered.contains("2020-09-05"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_students(&[]), "No students found");
    }
}
