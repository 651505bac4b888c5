//! Category CRUD, listing and name search, all scoped to a tenant.

use std::sync::Arc;

use tracing::info;

use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_database::CategoryStore;
use warehouse_entity::category::MaterialCategory;

/// Manages material categories.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Category storage.
    repo: Arc<dyn CategoryStore>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(repo: Arc<dyn CategoryStore>) -> Self {
        Self { repo }
    }

    /// Creates a category and returns its ID.
    pub async fn create(&self, category: &MaterialCategory) -> AppResult<i64> {
        let id = self.repo.create(category).await?;
        info!(id, company_id = category.company_id, "Category created");
        Ok(id)
    }

    /// Gets a tenant's category by ID.
    pub async fn get_by_id(&self, id: i64, company_id: i64) -> AppResult<MaterialCategory> {
        self.repo
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("category {id} not found")))
    }

    /// Overwrites a category selected by its ID and tenant.
    pub async fn update(&self, category: &MaterialCategory) -> AppResult<()> {
        if !self.repo.update(category).await? {
            return Err(AppError::not_found(format!(
                "category {} not found",
                category.id
            )));
        }
        Ok(())
    }

    /// Deletes a tenant's category.
    pub async fn delete(&self, id: i64, company_id: i64) -> AppResult<()> {
        if !self.repo.delete(id, company_id).await? {
            return Err(AppError::not_found(format!("category {id} not found")));
        }
        info!(id, company_id, "Category deleted");
        Ok(())
    }

    /// Lists one page of a tenant's categories.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<MaterialCategory>> {
        self.repo.list(params).await
    }

    /// Finds categories whose name starts with the query.
    pub async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialCategory>> {
        self.repo.search(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_core::error::ErrorKind;
    use warehouse_database::memory::MemoryCategoryRepository;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(MemoryCategoryRepository::new()))
    }

    fn category(name: &str, company_id: i64) -> MaterialCategory {
        MaterialCategory {
            name: name.to_string(),
            company_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_other_tenant_sees_not_found() {
        let svc = service();
        let id = svc.create(&category("Fasteners", 7)).await.unwrap();

        let err = svc.get_by_id(id, 8).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = svc.delete(id, 8).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let mut hijack = category("Renamed", 8);
        hijack.id = id;
        let err = svc.update(&hijack).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        assert_eq!(svc.get_by_id(id, 7).await.unwrap().name, "Fasteners");
    }

    #[tokio::test]
    async fn test_update_and_delete_own_category() {
        let svc = service();
        let id = svc.create(&category("Fasteners", 7)).await.unwrap();

        let mut renamed = category("Fixings", 7);
        renamed.id = id;
        svc.update(&renamed).await.unwrap();
        assert_eq!(svc.get_by_id(id, 7).await.unwrap().name, "Fixings");

        svc.delete(id, 7).await.unwrap();
        let err = svc.delete(id, 7).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_search_orders_by_name_and_pages() {
        let svc = service();
        for name in ["Pipes steel", "pipes copper", "Pumps", "Pipes PVC"] {
            svc.create(&category(name, 7)).await.unwrap();
        }
        svc.create(&category("Pipes other tenant", 8)).await.unwrap();

        let all = svc
            .search(&SearchParams::new("pipes", ListParams::new(10, 0, 7)))
            .await
            .unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["pipes copper", "Pipes PVC", "Pipes steel"]);

        let second = svc
            .search(&SearchParams::new("pipes", ListParams::new(1, 1, 7)))
            .await
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Pipes PVC");
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_as_text() {
        let svc = service();
        for name in ["50% off", "500 series", "A_1", "AB1"] {
            svc.create(&category(name, 7)).await.unwrap();
        }

        let percent = svc
            .search(&SearchParams::new("50%", ListParams::new(10, 0, 7)))
            .await
            .unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].name, "50% off");

        let underscore = svc
            .search(&SearchParams::new("a_", ListParams::new(10, 0, 7)))
            .await
            .unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].name, "A_1");
    }
}
