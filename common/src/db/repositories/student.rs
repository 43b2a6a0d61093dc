// Student repository implementation

use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{NewStudent, Student};
use async_trait::async_trait;
use tracing::instrument;

/// Storage contract for student records
///
/// The typed methods surface the error kind to the caller. The `try_*`
/// variants preserve the older convenience contract: failures are logged and
/// reported only as a boolean, so interactive callers can keep going without
/// inspecting the error.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Fetch every stored student, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<Student>, DatabaseError>;

    /// Insert one student row.
    ///
    /// # Errors
    /// Returns `DatabaseError::DuplicateKey` when the email is already taken.
    async fn add(&self, student: &NewStudent) -> Result<(), DatabaseError>;

    /// Change the email of the student matching `student_id`.
    ///
    /// # Errors
    /// Returns `DatabaseError::NotFound` when no row matches `student_id`,
    /// `DatabaseError::DuplicateKey` when the new email is already taken.
    async fn update_email(&self, student_id: i32, new_email: &str) -> Result<(), DatabaseError>;

    /// Delete the student matching `student_id`.
    ///
    /// `student_id` is the primary key, so the statement matches at most one
    /// row; matching none is reported as `DatabaseError::NotFound`.
    async fn delete(&self, student_id: i32) -> Result<(), DatabaseError>;

    /// Insert a student, logging the error instead of returning it.
    async fn try_add(&self, student: &NewStudent) -> bool {
        match self.add(student).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, email = %student.email, "Error inserting student");
                false
            }
        }
    }

    /// Update a student's email, logging the error instead of returning it.
    async fn try_update_email(&self, student_id: i32, new_email: &str) -> bool {
        match self.update_email(student_id, new_email).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, student_id, "Error updating student email");
                false
            }
        }
    }

    /// Delete a student, logging the error instead of returning it.
    async fn try_delete(&self, student_id: i32) -> bool {
        match self.delete(student_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, student_id, "Error deleting student");
                false
            }
        }
    }
}

/// Repository for student-related database operations
#[derive(Clone)]
pub struct StudentRepository {
    pool: DbPool,
}

impl StudentRepository {
    /// Create a new StudentRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for StudentRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Student>, DatabaseError> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students")
            .fetch_all(self.pool.pool())
            .await?;

        Ok(students)
    }

    #[instrument(skip(self, student), fields(email = %student.email))]
    async fn add(&self, student: &NewStudent) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO students (first_name, last_name, email, enrollment_date)
            VALUES ($1, $2, $3, CAST($4 AS DATE))
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.enrollment_date)
        .execute(self.pool.pool())
        .await?;

        tracing::info!(email = %student.email, "Student inserted");
        Ok(())
    }

    #[instrument(skip(self, new_email))]
    async fn update_email(&self, student_id: i32, new_email: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE students SET email = $1 WHERE student_id = $2")
            .bind(new_email)
            .bind(student_id)
            .execute(self.pool.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "Student not found: {}",
                student_id
            )));
        }

        tracing::info!(student_id, "Student email updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, student_id: i32) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(student_id)
            .execute(self.pool.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "Student not found: {}",
                student_id
            )));
        }

        tracing::info!(student_id, "Student deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store stub that rejects every write with a fixed error kind
    struct RejectingStore {
        error: fn() -> DatabaseError,
    }

    #[async_trait]
    impl StudentStore for RejectingStore {
        async fn list_all(&self) -> Result<Vec<Student>, DatabaseError> {
            Err((self.error)())
        }

        async fn add(&self, _student: &NewStudent) -> Result<(), DatabaseError> {
            Err((self.error)())
        }

        async fn update_email(&self, _id: i32, _email: &str) -> Result<(), DatabaseError> {
            Err((self.error)())
        }

        async fn delete(&self, _id: i32) -> Result<(), DatabaseError> {
            Err((self.error)())
        }
    }

    /// Store stub that accepts every write
    struct AcceptingStore;

    #[async_trait]
    impl StudentStore for AcceptingStore {
        async fn list_all(&self) -> Result<Vec<Student>, DatabaseError> {
            Ok(Vec::new())
        }

        async fn add(&self, _student: &NewStudent) -> Result<(), DatabaseError> {
            Ok(())
        }

        async fn update_email(&self, _id: i32, _email: &str) -> Result<(), DatabaseError> {
            Ok(())
        }

        async fn delete(&self, _id: i32) -> Result<(), DatabaseError> {
            Ok(())
        }
    }

    fn sample_student() -> NewStudent {
        NewStudent {
            first_name: "Thomas".to_string(),
            last_name: "Wood".to_string(),
            email: "t@example.com".to_string(),
            enrollment_date: "2020-09-05".to_string(),
        }
    }

    #[tokio::test]
    async fn test_try_wrappers_report_success() {
        let store = AcceptingStore;
        assert!(store.try_add(&sample_student()).await);
        assert!(store.try_update_email(1, "new@example.com").await);
        assert!(store.try_delete(1).await);
    }

    #[tokio::test]
    async fn test_try_wrappers_swallow_constraint_errors() {
        let store = RejectingStore {
            error: || DatabaseError::DuplicateKey("students_email_key".to_string()),
        };
        assert!(!store.try_add(&sample_student()).await);
        assert!(!store.try_update_email(1, "taken@example.com").await);
    }

    #[tokio::test]
    async fn test_try_wrappers_swallow_connectivity_errors() {
        let store = RejectingStore {
            error: || DatabaseError::ConnectionFailed("connection refused".to_string()),
        };
        assert!(!store.try_add(&sample_student()).await);
        assert!(!store.try_delete(1).await);
    }

    #[tokio::test]
    async fn test_list_all_propagates_errors() {
        let store = RejectingStore {
            error: || DatabaseError::QueryFailed("relation does not exist".to_string()),
        };
        assert!(store.list_all().await.is_err());
    }
}
