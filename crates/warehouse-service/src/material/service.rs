//! Partition-aware material CRUD, listing and search.

use std::sync::Arc;

use tracing::info;

use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_database::MaterialGateway;
use warehouse_entity::material::{
    Material, MaterialDraft, MaterialFields, MaterialIds, MaterialPartition, MaterialSearchHit,
};

/// Reads and writes material rows in a single partition at a time.
#[derive(Debug, Clone)]
pub struct MaterialService {
    /// Storage gateway for all partitions.
    gateway: Arc<dyn MaterialGateway>,
}

impl MaterialService {
    /// Creates a new material service.
    pub fn new(gateway: Arc<dyn MaterialGateway>) -> Self {
        Self { gateway }
    }

    /// Inserts a material into Planning or Purchased.
    ///
    /// Purchased inserts receive a freshly minted `item_id`.
    pub async fn create(
        &self,
        partition: MaterialPartition,
        fields: &MaterialFields,
    ) -> AppResult<MaterialIds> {
        ensure_writable(partition)?;
        let draft = MaterialDraft::encode(fields, None)?;
        let ids = self.gateway.create(partition, &draft).await?;
        info!(
            %partition,
            id = ids.id,
            item_id = ?ids.item_id,
            company_id = fields.company_id,
            "Material created"
        );
        Ok(ids)
    }

    /// Gets a material from a partition by ID.
    pub async fn get_by_id(&self, partition: MaterialPartition, id: i64) -> AppResult<Material> {
        if id == 0 {
            return Err(AppError::empty_id());
        }
        self.gateway
            .find_by_id(partition, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{partition} material {id} not found")))
    }

    /// Overwrites the fields of a Planning or Purchased material.
    ///
    /// The row must belong to `fields.company_id`; its `item_id` is kept.
    pub async fn update(
        &self,
        partition: MaterialPartition,
        id: i64,
        fields: &MaterialFields,
    ) -> AppResult<()> {
        ensure_writable(partition)?;
        if id == 0 {
            return Err(AppError::empty_id());
        }
        let draft = MaterialDraft::encode(fields, None)?;
        if !self.gateway.update(partition, id, &draft).await? {
            return Err(AppError::not_found(format!(
                "{partition} material {id} not found"
            )));
        }
        info!(%partition, id, "Material updated");
        Ok(())
    }

    /// Deletes a material from any partition.
    pub async fn delete(&self, partition: MaterialPartition, id: i64) -> AppResult<()> {
        if id == 0 {
            return Err(AppError::empty_id());
        }
        if !self.gateway.delete(partition, id).await? {
            return Err(AppError::not_found(format!(
                "{partition} material {id} not found"
            )));
        }
        info!(%partition, id, "Material deleted");
        Ok(())
    }

    /// Lists one page of a tenant's materials in a partition.
    pub async fn list(
        &self,
        partition: MaterialPartition,
        params: &ListParams,
    ) -> AppResult<Vec<Material>> {
        self.gateway.list(partition, params).await
    }

    /// Finds Planning and Purchased materials whose name starts with the query.
    pub async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialSearchHit>> {
        self.gateway.search(params).await
    }
}

/// Archive partitions are filled only by lifecycle moves.
fn ensure_writable(partition: MaterialPartition) -> AppResult<()> {
    if partition.is_archive() {
        return Err(AppError::validation(format!(
            "{partition} materials can only be read or deleted"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_database::memory::MemoryMaterialGateway;

    fn service() -> (MemoryMaterialGateway, MaterialService) {
        let gateway = MemoryMaterialGateway::new();
        let service = MaterialService::new(Arc::new(gateway.clone()));
        (gateway, service)
    }

    fn fields(name: &str) -> MaterialFields {
        MaterialFields {
            name: name.to_string(),
            company_id: 7,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_extension_fields_survive_create_and_read() {
        let (_, service) = service();
        let mut f = fields("Paint");
        f.other_fields = serde_json::json!({"color": "red", "qty_check": 3})
            .as_object()
            .cloned()
            .unwrap();

        let ids = service.create(MaterialPartition::Planning, &f).await.unwrap();
        let read = service
            .get_by_id(MaterialPartition::Planning, ids.id)
            .await
            .unwrap();

        assert_eq!(read.fields.other_fields, f.other_fields);
        assert_eq!(read.fields.other_fields["color"], "red");
        assert_eq!(read.fields.other_fields["qty_check"], 3);
    }

    #[tokio::test]
    async fn test_purchased_create_mints_item_id() {
        let (_, service) = service();
        let ids = service
            .create(MaterialPartition::Purchased, &fields("Cable"))
            .await
            .unwrap();
        assert!(ids.id > 0);
        assert!(ids.item_id.is_some_and(|item_id| item_id > 0));
    }

    #[tokio::test]
    async fn test_archives_reject_writes_without_storage_calls() {
        let (gateway, service) = service();
        let err = service
            .create(MaterialPartition::PurchasedArchive, &fields("Pipe"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        let err = service
            .update(MaterialPartition::PlanningArchive, 1, &fields("Pipe"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_keeps_item_id_and_checks_tenant() {
        let (_, service) = service();
        let ids = service
            .create(MaterialPartition::Purchased, &fields("Glue"))
            .await
            .unwrap();

        let mut changed = fields("Glue, 2 kg");
        service
            .update(MaterialPartition::Purchased, ids.id, &changed)
            .await
            .unwrap();
        let read = service
            .get_by_id(MaterialPartition::Purchased, ids.id)
            .await
            .unwrap();
        assert_eq!(read.fields.name, "Glue, 2 kg");
        assert_eq!(read.item_id, ids.item_id);

        changed.company_id = 8;
        let err = service
            .update(MaterialPartition::Purchased, ids.id, &changed)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_, service) = service();
        let err = service
            .delete(MaterialPartition::PlanningArchive, 5)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_pages_by_id() {
        let (_, service) = service();
        for name in ["a", "b", "c", "d"] {
            service
                .create(MaterialPartition::Planning, &fields(name))
                .await
                .unwrap();
        }
        let page = service
            .list(MaterialPartition::Planning, &ListParams::new(2, 1, 7))
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|m| m.fields.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_search_spans_active_partitions() {
        let (_, service) = service();
        service
            .create(MaterialPartition::Planning, &fields("Bolt M8"))
            .await
            .unwrap();
        service
            .create(MaterialPartition::Purchased, &fields("Bolt M6"))
            .await
            .unwrap();

        let hits = service
            .search(&SearchParams::new("bolt", ListParams::new(10, 0, 7)))
            .await
            .unwrap();
        let found: Vec<_> = hits
            .iter()
            .map(|h| (h.partition, h.material.fields.name.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (MaterialPartition::Purchased, "Bolt M6"),
                (MaterialPartition::Planning, "Bolt M8"),
            ]
        );
    }
}
