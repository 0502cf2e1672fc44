use std::sync::Arc;

use models::Student;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Ordered in-memory student collection.
///
/// Ids come from the caller and are NOT unique keys: a create with a duplicate
/// id appends, and id lookups (`update`/`delete`) only ever touch the first
/// record in insertion order whose id matches. The collection stays a `Vec`
/// for exactly this reason.
#[derive(Clone, Default)]
pub struct StudentStore {
    inner: Arc<RwLock<Vec<Student>>>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加记录；不检查 id 是否已存在
    pub async fn create(&self, student: Student) -> Student {
        let mut rows = self.inner.write().await;
        rows.push(student.clone());
        student
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<Student> {
        let rows = self.inner.read().await;
        rows.clone()
    }

    /// Replace the first record whose id matches `id`, keeping its position.
    /// `replacement.id` is stored as given even when it differs from `id`.
    pub async fn update(&self, id: i64, replacement: Student) -> Result<Student, ServiceError> {
        let mut rows = self.inner.write().await;
        match rows.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                *slot = replacement.clone();
                Ok(replacement)
            }
            None => Err(ServiceError::not_found("Student")),
        }
    }

    /// Remove and return the first record whose id matches `id`.
    pub async fn delete(&self, id: i64) -> Result<Student, ServiceError> {
        let mut rows = self.inner.write().await;
        match rows.iter().position(|s| s.id == id) {
            Some(index) => Ok(rows.remove(index)),
            None => Err(ServiceError::not_found("Student")),
        }
    }

    /// Existence check by linear scan, used by the registration index.
    pub async fn contains(&self, id: i64) -> bool {
        let rows = self.inner.read().await;
        rows.iter().any(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, first_name: &str) -> Student {
        Student {
            id,
            first_name: first_name.into(),
            middle_name: "".into(),
            last_name: "Tester".into(),
            age: 20,
            city: "Springfield".into(),
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let store = StudentStore::new();
        let s = store.create(student(1, "Ada")).await;
        let all = store.list().await;
        assert_eq!(all, vec![s]);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = StudentStore::new();
        store.create(student(1, "Ada")).await;
        store.create(student(2, "Grace")).await;

        let replacement = student(1, "Adeline");
        let updated = store.update(1, replacement.clone()).await.expect("update");
        assert_eq!(updated, replacement);

        // Replaced at position 0, not appended.
        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], replacement);
        assert_eq!(all[1].id, 2);
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_leaves_store_untouched() {
        let store = StudentStore::new();
        let err = store.update(999, student(999, "Ghost")).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Student"));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let store = StudentStore::new();
        store.create(student(1, "Ada")).await;
        let removed = store.delete(1).await.expect("first delete");
        assert_eq!(removed.id, 1);
        assert_eq!(store.delete(1).await.unwrap_err(), ServiceError::not_found("Student"));
    }

    #[tokio::test]
    async fn duplicate_ids_append_and_update_hits_first_match_only() {
        let store = StudentStore::new();
        store.create(student(1, "First")).await;
        store.create(student(1, "Second")).await;
        assert_eq!(store.list().await.len(), 2);

        store.update(1, student(1, "Patched")).await.expect("update");
        let all = store.list().await;
        assert_eq!(all[0].first_name, "Patched");
        // The duplicate stays unreachable by id-based update.
        assert_eq!(all[1].first_name, "Second");
    }

    #[tokio::test]
    async fn update_may_change_the_id_without_consistency_check() {
        let store = StudentStore::new();
        store.create(student(1, "Ada")).await;
        let updated = store.update(1, student(42, "Ada")).await.expect("update");
        assert_eq!(updated.id, 42);
        assert_eq!(store.list().await[0].id, 42);
    }
}
