use std::collections::HashMap;
use std::sync::Arc;

use models::Student;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::roster::{ClassStore, StudentStore};

/// Result of a registration attempt that found both records.
#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    AlreadyRegistered,
}

/// Enrollment index: class id -> student ids, in registration order.
///
/// Holds handles to both stores so it can check existence at registration
/// time. Nothing cleans the index up afterwards: deleting a student or class
/// leaves its ids dangling here, and listings compensate by filtering against
/// the live student collection.
#[derive(Clone)]
pub struct RegistrationIndex {
    students: StudentStore,
    classes: ClassStore,
    inner: Arc<RwLock<HashMap<i64, Vec<i64>>>>,
}

impl RegistrationIndex {
    pub fn new(students: StudentStore, classes: ClassStore) -> Self {
        Self {
            students,
            classes,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register `student_id` into `class_id`.
    ///
    /// Both ids must resolve to a record at call time (linear scan, first
    /// match). Registering an existing pair is a no-op reported as
    /// [`RegisterOutcome::AlreadyRegistered`].
    pub async fn register(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<RegisterOutcome, ServiceError> {
        if !self.students.contains(student_id).await {
            return Err(ServiceError::not_found("Student"));
        }
        if !self.classes.contains(class_id).await {
            return Err(ServiceError::not_found("Class"));
        }

        let mut index = self.inner.write().await;
        let roster = index.entry(class_id).or_default();
        if roster.contains(&student_id) {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }
        roster.push(student_id);
        debug!(student_id, class_id, "student registered");
        Ok(RegisterOutcome::Registered)
    }

    /// Students currently enrolled in `class_id`, in student-store insertion
    /// order (not registration order).
    ///
    /// No class-existence check here: an unknown class id simply yields an
    /// empty list. Dangling student ids are filtered out by the scan over the
    /// live student collection.
    pub async fn students_in_class(&self, class_id: i64) -> Vec<Student> {
        let ids = {
            let index = self.inner.read().await;
            match index.get(&class_id) {
                Some(ids) => ids.clone(),
                None => return Vec::new(),
            }
        };
        self.students
            .list()
            .await
            .into_iter()
            .filter(|s| ids.contains(&s.id))
            .collect()
    }
}
