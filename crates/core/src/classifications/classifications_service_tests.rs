#[cfg(test)]
mod tests {
    use crate::auth::{AuthContext, Role};
    use crate::classifications::{
        Classification, ClassificationRepositoryTrait, ClassificationService,
        ClassificationServiceTrait, ClassificationSummary, ClassificationUpdate,
        NewClassification,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct MockClassificationRepository {
        classifications: Arc<Mutex<Vec<Classification>>>,
    }

    impl MockClassificationRepository {
        fn new() -> Self {
            Self {
                classifications: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn add(&self, id: &str, name: &str) {
            self.classifications.lock().unwrap().push(Classification {
                id: id.to_string(),
                name: name.to_string(),
                created_at: chrono::Utc::now().naive_utc(),
            });
        }
    }

    #[async_trait]
    impl ClassificationRepositoryTrait for MockClassificationRepository {
        async fn create(&self, new_classification: NewClassification) -> Result<Classification> {
            let classification = Classification {
                id: uuid::Uuid::new_v4().to_string(),
                name: new_classification.name,
                created_at: chrono::Utc::now().naive_utc(),
            };
            self.classifications
                .lock()
                .unwrap()
                .push(classification.clone());
            Ok(classification)
        }

        async fn update(&self, update: ClassificationUpdate) -> Result<Classification> {
            let mut classifications = self.classifications.lock().unwrap();
            let classification = classifications
                .iter_mut()
                .find(|c| c.id == update.id)
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(update.id.clone())))?;
            classification.name = update.name;
            Ok(classification.clone())
        }

        async fn delete(&self, classification_id: &str) -> Result<usize> {
            let mut classifications = self.classifications.lock().unwrap();
            let before = classifications.len();
            classifications.retain(|c| c.id != classification_id);
            Ok(before - classifications.len())
        }

        fn get_by_id(&self, classification_id: &str) -> Result<Classification> {
            self.classifications
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == classification_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(classification_id.to_string()))
                })
        }

        fn find_by_name(&self, name: &str) -> Result<Option<Classification>> {
            Ok(self
                .classifications
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.name == name)
                .cloned())
        }

        fn list(&self) -> Result<Vec<Classification>> {
            Ok(self.classifications.lock().unwrap().clone())
        }

        fn list_with_counts(&self) -> Result<Vec<ClassificationSummary>> {
            Ok(self
                .classifications
                .lock()
                .unwrap()
                .iter()
                .map(|c| ClassificationSummary {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    created_at: c.created_at,
                    data_count: 0,
                })
                .collect())
        }
    }

    fn admin_ctx() -> AuthContext {
        AuthContext::new("admin-1", "admin@example.com", true, Role::Admin)
    }

    fn broker_ctx() -> AuthContext {
        AuthContext::new("broker-1", "broker@example.com", false, Role::Broker)
    }

    #[tokio::test]
    async fn create_classification_trims_and_persists() {
        let repo = Arc::new(MockClassificationRepository::new());
        let service = ClassificationService::new(repo.clone());

        let created = service
            .create_classification(
                &admin_ctx(),
                NewClassification {
                    name: "  Renta Fija  ".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.name, "Renta Fija");
    }

    #[tokio::test]
    async fn create_classification_rejects_duplicates() {
        let repo = Arc::new(MockClassificationRepository::new());
        repo.add("c1", "Renta Fija");
        let service = ClassificationService::new(repo);

        let err = service
            .create_classification(
                &admin_ctx(),
                NewClassification {
                    name: "Renta Fija".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Classification(_)));
    }

    #[tokio::test]
    async fn create_classification_rejects_non_admins() {
        let repo = Arc::new(MockClassificationRepository::new());
        let service = ClassificationService::new(repo.clone());

        let err = service
            .create_classification(
                &broker_ctx(),
                NewClassification {
                    name: "Renta Variable".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Forbidden(_)));
        assert!(repo.classifications.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rename_allows_keeping_own_name() {
        let repo = Arc::new(MockClassificationRepository::new());
        repo.add("c1", "Renta Fija");
        let service = ClassificationService::new(repo);

        // Renaming to its own current name is not a duplicate.
        let updated = service
            .update_classification(
                &admin_ctx(),
                ClassificationUpdate {
                    id: "c1".to_string(),
                    name: "Renta Fija".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renta Fija");
    }

    #[tokio::test]
    async fn rename_rejects_name_held_by_other_classification() {
        let repo = Arc::new(MockClassificationRepository::new());
        repo.add("c1", "Renta Fija");
        repo.add("c2", "Renta Variable");
        let service = ClassificationService::new(repo);

        let err = service
            .update_classification(
                &admin_ctx(),
                ClassificationUpdate {
                    id: "c2".to_string(),
                    name: "Renta Fija".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Classification(_)));
    }

    #[tokio::test]
    async fn empty_name_is_invalid() {
        let repo = Arc::new(MockClassificationRepository::new());
        let service = ClassificationService::new(repo);

        let err = service
            .create_classification(
                &admin_ctx(),
                NewClassification {
                    name: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Classification(_)));
    }
}
