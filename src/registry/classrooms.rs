//! Classroom operations.

use tracing::info;

use super::{plans, Registry};
use crate::cache::CacheKey;
use crate::error::{RegistryError, Result};
use crate::query::{self, ClassroomFilter};
use crate::relations;
use crate::store::{Classroom, Student};

impl Registry {
    // == Create Classroom ==
    /// Stores a new classroom. A code that is already taken is rejected.
    pub async fn create_classroom(
        &self,
        code: &str,
        title: &str,
        description: &str,
    ) -> Result<Classroom> {
        let classroom = self
            .write_invalidate(|store| {
                let key = code.to_string();
                if store.classrooms().contains(&key) {
                    return Err(RegistryError::AlreadyExists(key));
                }
                let classroom = Classroom::new(code, title, description);
                store.classrooms_mut().put(key, classroom.clone());
                Ok((classroom, plans::classroom_created(code)))
            })
            .await?;

        info!("Created classroom {}", classroom.code);
        Ok(classroom)
    }

    // == Get Classroom ==
    pub async fn get_classroom(&self, code: &str) -> Result<Classroom> {
        self.read_through(CacheKey::classroom(code), |store| {
            query::find_classroom(store, code)
                .ok_or_else(|| RegistryError::ClassroomNotFound(code.to_string()))
        })
        .await
    }

    // == Search Classrooms ==
    /// Classrooms matching every supplied text fragment, case-insensitively.
    pub async fn search_classrooms(&self, filter: &ClassroomFilter) -> Result<Vec<Classroom>> {
        self.read_through(CacheKey::classroom_search(filter), |store| {
            Ok(query::search_classrooms(store, filter))
        })
        .await
    }

    // == Update Classroom ==
    /// Replaces title and description of an existing classroom.
    pub async fn update_classroom(
        &self,
        code: &str,
        title: &str,
        description: &str,
    ) -> Result<Classroom> {
        self.write_invalidate(|store| {
            let key = code.to_string();
            if !store.classrooms().contains(&key) {
                return Err(RegistryError::ClassroomNotFound(key));
            }
            let classroom = Classroom::new(code, title, description);
            store.classrooms_mut().put(key, classroom.clone());

            let students = store.enrollments().students_of(code);
            Ok((classroom, plans::classroom_updated(code, &students)))
        })
        .await
    }

    // == Delete Classroom ==
    /// Removes a classroom and every enrollment in it.
    pub async fn delete_classroom(&self, code: &str) -> Result<()> {
        self.write_invalidate(|store| {
            let students = relations::remove_classroom(store, code)?;
            Ok(((), plans::classroom_deleted(code, &students)))
        })
        .await?;

        info!("Deleted classroom {}", code);
        Ok(())
    }

    // == Roster Of ==
    pub async fn roster_of(&self, code: &str) -> Result<Vec<Student>> {
        self.read_through(CacheKey::roster_of(code), |store| {
            relations::roster_of(store, code)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::{CacheKey, CacheStore};
    use crate::error::{RegistryError, Result};
    use crate::query::ClassroomFilter;
    use crate::registry::Registry;
    use crate::store::{Classroom, EntityStore};

    async fn registry_with_classrooms() -> Registry {
        let registry = Registry::new(EntityStore::shared(), CacheStore::new(100));
        registry
            .create_classroom("INF-102", "ProgramacionI", "Programacion1")
            .await
            .unwrap();
        registry
            .create_classroom("INF-103", "ProgramacionII", "Programacion2")
            .await
            .unwrap();
        registry
    }

    #[tokio::test]
    async fn test_create_duplicate_code_is_rejected() {
        let registry = registry_with_classrooms().await;

        assert_eq!(
            registry.create_classroom("INF-102", "Other", "Other").await,
            Err(RegistryError::AlreadyExists("INF-102".to_string()))
        );
        assert_eq!(
            registry.get_classroom("INF-102").await.unwrap().title,
            "ProgramacionI"
        );
    }

    #[tokio::test]
    async fn test_update_missing_classroom() {
        let registry = registry_with_classrooms().await;

        assert_eq!(
            registry.update_classroom("INF-999", "A", "B").await,
            Err(RegistryError::ClassroomNotFound("INF-999".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_evicts_point_lookup() {
        let registry = registry_with_classrooms().await;
        registry.get_classroom("INF-102").await.unwrap();
        assert!(registry.is_cached(&CacheKey::classroom("INF-102")).await);

        registry
            .update_classroom("INF-102", "Estructuras", "Datos")
            .await
            .unwrap();

        assert!(!registry.is_cached(&CacheKey::classroom("INF-102")).await);
        assert_eq!(
            registry.get_classroom("INF-102").await.unwrap(),
            Classroom::new("INF-102", "Estructuras", "Datos")
        );
    }

    #[tokio::test]
    async fn test_search_classrooms_shapes() {
        let registry = registry_with_classrooms().await;
        let codes = |found: Result<Vec<Classroom>>| {
            found.unwrap().into_iter().map(|c| c.code).collect::<Vec<_>>()
        };

        assert_eq!(
            codes(registry.search_classrooms(&ClassroomFilter::default()).await),
            vec!["INF-102", "INF-103"]
        );
        assert_eq!(
            codes(registry
                .search_classrooms(&ClassroomFilter::new(None, Some("PROGRAMACION2")))
                .await),
            vec!["INF-103"]
        );
        assert_eq!(
            codes(registry
                .search_classrooms(&ClassroomFilter::new(Some("ii"), Some("2")))
                .await),
            vec!["INF-103"]
        );
    }

    #[tokio::test]
    async fn test_delete_classroom_twice() {
        let registry = registry_with_classrooms().await;

        assert!(registry.delete_classroom("INF-102").await.is_ok());
        assert_eq!(
            registry.delete_classroom("INF-102").await,
            Err(RegistryError::NothingToDelete)
        );
        assert_eq!(
            registry.search_classrooms(&ClassroomFilter::default()).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_roster_of_missing_classroom() {
        let registry = registry_with_classrooms().await;

        assert_eq!(
            registry.roster_of("INF-999").await,
            Err(RegistryError::ClassroomNotFound("INF-999".to_string()))
        );
    }

    #[tokio::test]
    async fn test_recreated_classroom_has_empty_roster() {
        let registry = registry_with_classrooms().await;
        registry.create_student("Jorge", "Vasquez").await.unwrap();
        registry.enroll_student(1, "INF-102").await.unwrap();
        assert_eq!(registry.roster_of("INF-102").await.unwrap().len(), 1);

        registry.delete_classroom("INF-102").await.unwrap();
        registry
            .create_classroom("INF-102", "ProgramacionI", "Programacion1")
            .await
            .unwrap();

        assert!(registry.roster_of("INF-102").await.unwrap().is_empty());
        assert!(registry.classrooms_of(1).await.unwrap().is_empty());
    }
}
