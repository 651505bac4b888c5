//! Atomic moves of a material between partitions.
//!
//! A move reads the source row under a lock, deletes it and inserts its
//! twins, all inside one gateway transaction. Any failure rolls every
//! statement back, so a row is only ever visible in one active partition.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_database::{MaterialGateway, MaterialTransaction};
use warehouse_entity::material::{MaterialDraft, MaterialPartition};

/// Identity assigned to a material when it moves into Purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedMaterial {
    /// ID of the new Purchased row.
    pub purchased_id: i64,
    /// Item ID carried by the material from now on.
    pub item_id: i64,
}

/// Moves materials Planning → Purchased → PurchasedArchive.
#[derive(Debug, Clone)]
pub struct MaterialLifecycle {
    gateway: Arc<dyn MaterialGateway>,
}

impl MaterialLifecycle {
    /// Creates a new lifecycle manager.
    pub fn new(gateway: Arc<dyn MaterialGateway>) -> Self {
        Self { gateway }
    }

    /// Moves a planned material into Purchased and keeps a copy in PlanningArchive.
    pub async fn move_to_purchased(&self, planning_id: i64) -> AppResult<MovedMaterial> {
        if planning_id == 0 {
            return Err(AppError::empty_id());
        }

        let mut tx = self.gateway.begin().await?;
        match purchase(tx.as_mut(), planning_id).await {
            Ok(moved) => {
                tx.commit().await?;
                info!(
                    planning_id,
                    purchased_id = moved.purchased_id,
                    item_id = moved.item_id,
                    "Material moved to purchased"
                );
                Ok(moved)
            }
            Err(e) => abort(tx, e).await,
        }
    }

    /// Retires a purchased material into PurchasedArchive, keeping its item ID.
    pub async fn move_to_archive(&self, purchased_id: i64) -> AppResult<()> {
        if purchased_id == 0 {
            return Err(AppError::empty_id());
        }

        let mut tx = self.gateway.begin().await?;
        match archive(tx.as_mut(), purchased_id).await {
            Ok(archived_id) => {
                tx.commit().await?;
                info!(purchased_id, archived_id, "Material moved to archive");
                Ok(())
            }
            Err(e) => abort(tx, e).await,
        }
    }
}

async fn purchase(tx: &mut dyn MaterialTransaction, planning_id: i64) -> AppResult<MovedMaterial> {
    let material = tx
        .find_for_update(MaterialPartition::Planning, planning_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("planning material {planning_id} not found")))?;

    // One encoding feeds both inserts.
    let draft = MaterialDraft::encode(&material.fields, material.item_id)?;

    if !tx.delete(MaterialPartition::Planning, planning_id).await? {
        return Err(AppError::not_found(format!(
            "planning material {planning_id} not found"
        )));
    }
    let purchased = tx.insert(MaterialPartition::Purchased, &draft).await?;
    tx.insert(MaterialPartition::PlanningArchive, &draft).await?;

    let item_id = purchased
        .item_id
        .ok_or_else(|| AppError::database("purchased insert returned no item_id"))?;
    Ok(MovedMaterial {
        purchased_id: purchased.id,
        item_id,
    })
}

async fn archive(tx: &mut dyn MaterialTransaction, purchased_id: i64) -> AppResult<i64> {
    let material = tx
        .find_for_update(MaterialPartition::Purchased, purchased_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("purchased material {purchased_id} not found")))?;

    let draft = MaterialDraft::encode(&material.fields, material.item_id)?;

    if !tx.delete(MaterialPartition::Purchased, purchased_id).await? {
        return Err(AppError::not_found(format!(
            "purchased material {purchased_id} not found"
        )));
    }
    let archived = tx.insert(MaterialPartition::PurchasedArchive, &draft).await?;
    Ok(archived.id)
}

/// Roll back and return the error that caused the abort.
async fn abort<T>(tx: Box<dyn MaterialTransaction>, err: AppError) -> AppResult<T> {
    if let Err(rollback_err) = tx.rollback().await {
        warn!(error = %rollback_err, "Rollback after failed move also failed");
    }
    Err(err)
}
