use std::sync::Arc;

use models::Class;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Ordered in-memory class collection. Same shape and semantics as
/// [`crate::roster::StudentStore`]: append-only create, first-match id lookups.
#[derive(Clone, Default)]
pub struct ClassStore {
    inner: Arc<RwLock<Vec<Class>>>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, class: Class) -> Class {
        let mut rows = self.inner.write().await;
        rows.push(class.clone());
        class
    }

    pub async fn list(&self) -> Vec<Class> {
        let rows = self.inner.read().await;
        rows.clone()
    }

    pub async fn update(&self, id: i64, replacement: Class) -> Result<Class, ServiceError> {
        let mut rows = self.inner.write().await;
        match rows.iter_mut().find(|c| c.id == id) {
            Some(slot) => {
                *slot = replacement.clone();
                Ok(replacement)
            }
            None => Err(ServiceError::not_found("Class")),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<Class, ServiceError> {
        let mut rows = self.inner.write().await;
        match rows.iter().position(|c| c.id == id) {
            Some(index) => Ok(rows.remove(index)),
            None => Err(ServiceError::not_found("Class")),
        }
    }

    pub async fn contains(&self, id: i64) -> bool {
        let rows = self.inner.read().await;
        rows.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: i64, name: &str) -> Class {
        Class {
            id,
            class_name: name.into(),
            description: "desc".into(),
            start_date: "2026-01-05".into(),
            end_date: "2026-03-27".into(),
            number_of_hours: 40,
        }
    }

    #[tokio::test]
    async fn crud_mirrors_student_store_semantics() {
        let store = ClassStore::new();
        store.create(class(10, "Rust")).await;
        store.create(class(11, "Databases")).await;

        let updated = store.update(10, class(10, "Advanced Rust")).await.expect("update");
        assert_eq!(updated.class_name, "Advanced Rust");
        assert_eq!(store.list().await[0].class_name, "Advanced Rust");

        let removed = store.delete(11).await.expect("delete");
        assert_eq!(removed.id, 11);
        assert_eq!(store.delete(11).await.unwrap_err(), ServiceError::not_found("Class"));
    }

    #[tokio::test]
    async fn duplicate_class_ids_append() {
        let store = ClassStore::new();
        store.create(class(10, "Morning section")).await;
        store.create(class(10, "Evening section")).await;
        assert_eq!(store.list().await.len(), 2);

        // Delete removes the first match; the duplicate becomes reachable.
        let removed = store.delete(10).await.expect("delete");
        assert_eq!(removed.class_name, "Morning section");
        assert_eq!(store.list().await[0].class_name, "Evening section");
    }
}
