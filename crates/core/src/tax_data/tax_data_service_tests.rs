#[cfg(test)]
mod tests {
    use crate::auth::{AuthContext, Role};
    use crate::errors::{DatabaseError, Error, Result};
    use crate::tax_data::{
        NewTaxData, TaxData, TaxDataRepositoryTrait, TaxDataSearchResponse,
        TaxDataSearchResponseMeta, TaxDataService, TaxDataServiceTrait, TaxDataSummary,
        TaxDataUpdate,
    };
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    struct MockTaxDataRepository {
        records: Arc<Mutex<Vec<TaxData>>>,
    }

    impl MockTaxDataRepository {
        fn new() -> Self {
            Self {
                records: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn add(&self, id: &str, classification_id: &str, name: &str) {
            self.records.lock().unwrap().push(TaxData {
                id: id.to_string(),
                classification_id: classification_id.to_string(),
                name: name.to_string(),
                amount: Some(dec!(100)),
                factor: None,
                record_date: None,
                created_at: chrono::Utc::now().naive_utc(),
            });
        }
    }

    #[async_trait]
    impl TaxDataRepositoryTrait for MockTaxDataRepository {
        async fn create(&self, _new_data: NewTaxData) -> Result<TaxData> {
            unimplemented!()
        }

        async fn update(&self, _update: TaxDataUpdate) -> Result<TaxData> {
            unimplemented!()
        }

        async fn delete(&self, tax_data_id: &str) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != tax_data_id);
            Ok(before - records.len())
        }

        fn get_by_id(&self, tax_data_id: &str) -> Result<TaxData> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == tax_data_id)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(tax_data_id.to_string())))
        }

        fn find_by_classification_and_name(
            &self,
            classification_id: &str,
            name: &str,
        ) -> Result<Option<TaxData>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.classification_id == classification_id && r.name == name)
                .cloned())
        }

        fn search(
            &self,
            _page: i64,
            _page_size: i64,
            query: Option<String>,
            classification_id: Option<String>,
        ) -> Result<TaxDataSearchResponse> {
            let records = self.records.lock().unwrap();
            let data: Vec<TaxData> = records
                .iter()
                .filter(|r| {
                    query
                        .as_ref()
                        .map(|q| r.name.contains(q.as_str()))
                        .unwrap_or(true)
                })
                .filter(|r| {
                    classification_id
                        .as_ref()
                        .map(|c| &r.classification_id == c)
                        .unwrap_or(true)
                })
                .cloned()
                .collect();
            let total_row_count = data.len() as i64;
            Ok(TaxDataSearchResponse {
                data,
                meta: TaxDataSearchResponseMeta { total_row_count },
            })
        }

        fn summary(&self) -> Result<TaxDataSummary> {
            Ok(TaxDataSummary::default())
        }
    }

    fn admin_ctx() -> AuthContext {
        AuthContext::new("admin-1", "admin@example.com", true, Role::Admin)
    }

    fn specialist_ctx() -> AuthContext {
        AuthContext::new("spec-1", "spec@example.com", false, Role::TaxSpecialist)
    }

    #[tokio::test]
    async fn delete_requires_admin() {
        let repo = Arc::new(MockTaxDataRepository::new());
        repo.add("d1", "c1", "Registro A");
        let service = TaxDataService::new(repo.clone());

        let err = service
            .delete_tax_data(&specialist_ctx(), "d1")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
        assert_eq!(repo.records.lock().unwrap().len(), 1);

        let deleted = service.delete_tax_data(&admin_ctx(), "d1").await.unwrap();
        assert_eq!(deleted, 1);
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_filters_by_name_and_classification() {
        let repo = Arc::new(MockTaxDataRepository::new());
        repo.add("d1", "c1", "Bono Serie A");
        repo.add("d2", "c1", "Bono Serie B");
        repo.add("d3", "c2", "Bono Serie A");
        let service = TaxDataService::new(repo);

        let response = service
            .search_tax_data(1, 50, Some("Serie A".to_string()), Some("c1".to_string()))
            .unwrap();

        assert_eq!(response.meta.total_row_count, 1);
        assert_eq!(response.data[0].id, "d1");
    }
}
