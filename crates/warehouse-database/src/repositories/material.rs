//! PostgreSQL implementation of the material gateway.
//!
//! The four partition tables share one column layout, so every statement is
//! built from the same column list with the partition's table name.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgExecutor};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_entity::material::{
    Material, MaterialDraft, MaterialIds, MaterialPartition, MaterialSearchHit,
};

use crate::gateway::{MaterialGateway, MaterialTransaction};

/// Every column except `id` and `item_id`, in bind order.
const FIELD_COLUMNS: [&str; 28] = [
    "warehouse_id",
    "name",
    "by_invoice",
    "article",
    "product_category",
    "unit",
    "total_quantity",
    "volume",
    "price_without_vat",
    "total_without_vat",
    "supplier_id",
    "location",
    "contract",
    "file",
    "status",
    "comments",
    "reserve",
    "received_date",
    "last_updated",
    "min_stock_level",
    "expiration_date",
    "responsible_person",
    "storage_cost",
    "warehouse_section",
    "barcode",
    "incoming_delivery_number",
    "other_fields",
    "company_id",
];

fn select_columns() -> String {
    format!("id, item_id, {}", FIELD_COLUMNS.join(", "))
}

fn select_sql(partition: MaterialPartition, lock: bool) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1{}",
        select_columns(),
        partition.table(),
        if lock { " FOR UPDATE" } else { "" }
    )
}

fn insert_sql(partition: MaterialPartition) -> String {
    let item_id = if partition.mints_item_id() {
        "COALESCE($1, nextval('material_item_id_seq'))"
    } else {
        "$1"
    };
    let placeholders: Vec<String> = (2..=FIELD_COLUMNS.len() + 1)
        .map(|n| format!("${n}"))
        .collect();
    format!(
        "INSERT INTO {} (item_id, {}) VALUES ({item_id}, {}) RETURNING id, item_id",
        partition.table(),
        FIELD_COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// Fields bind to `$1..$28`; the id is `$29` and the tenant guard reuses `$28`.
fn update_sql(partition: MaterialPartition) -> String {
    let assignments: Vec<String> = FIELD_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ${} AND company_id = ${} RETURNING id",
        partition.table(),
        assignments.join(", "),
        FIELD_COLUMNS.len() + 1,
        FIELD_COLUMNS.len()
    )
}

fn list_sql(partition: MaterialPartition) -> String {
    format!(
        "SELECT {} FROM {} WHERE company_id = $1 ORDER BY id ASC LIMIT $2 OFFSET $3",
        select_columns(),
        partition.table()
    )
}

fn search_sql() -> String {
    let columns = select_columns();
    format!(
        "SELECT * FROM ( \
            SELECT 'planning' AS partition, {columns} FROM {planning} \
                WHERE company_id = $1 AND name ILIKE $2 \
            UNION ALL \
            SELECT 'purchased' AS partition, {columns} FROM {purchased} \
                WHERE company_id = $1 AND name ILIKE $2 \
         ) hits ORDER BY name ASC, partition ASC, id ASC LIMIT $3 OFFSET $4",
        planning = MaterialPartition::Planning.table(),
        purchased = MaterialPartition::Purchased.table(),
    )
}

/// Bind the 28 field columns in [`FIELD_COLUMNS`] order.
fn bind_fields<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    draft: &'q MaterialDraft<'q>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    let f = draft.fields;
    query
        .bind(f.warehouse_id)
        .bind(&f.name)
        .bind(&f.by_invoice)
        .bind(&f.article)
        .bind(&f.product_category)
        .bind(&f.unit)
        .bind(f.total_quantity)
        .bind(f.volume)
        .bind(f.price_without_vat)
        .bind(f.total_without_vat)
        .bind(f.supplier_id)
        .bind(&f.location)
        .bind(f.contract)
        .bind(&f.file)
        .bind(&f.status)
        .bind(&f.comments)
        .bind(&f.reserve)
        .bind(f.received_date)
        .bind(f.last_updated)
        .bind(f.min_stock_level)
        .bind(f.expiration_date)
        .bind(&f.responsible_person)
        .bind(f.storage_cost)
        .bind(&f.warehouse_section)
        .bind(&f.barcode)
        .bind(&f.incoming_delivery_number)
        .bind(&draft.other_fields)
        .bind(f.company_id)
}

async fn fetch_material<'e, E>(
    executor: E,
    partition: MaterialPartition,
    id: i64,
    lock: bool,
) -> AppResult<Option<Material>>
where
    E: PgExecutor<'e>,
{
    let sql = select_sql(partition, lock);
    sqlx::query_as::<_, Material>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to read {partition} material {id}"),
                e,
            )
        })
}

async fn insert_material<'e, E>(
    executor: E,
    partition: MaterialPartition,
    draft: &MaterialDraft<'_>,
) -> AppResult<MaterialIds>
where
    E: PgExecutor<'e>,
{
    let sql = insert_sql(partition);
    let query = sqlx::query_as::<_, MaterialIds>(&sql).bind(draft.item_id);
    bind_fields(query, draft)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert {partition} material"),
                e,
            )
        })
}

async fn delete_material<'e, E>(executor: E, partition: MaterialPartition, id: i64) -> AppResult<bool>
where
    E: PgExecutor<'e>,
{
    let sql = format!("DELETE FROM {} WHERE id = $1", partition.table());
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(executor)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to delete {partition} material {id}"),
                e,
            )
        })?;
    Ok(result.rows_affected() > 0)
}

/// Search row: a material plus the name of the partition it came from.
#[derive(Debug, FromRow)]
struct SearchRow {
    partition: String,
    #[sqlx(flatten)]
    material: Material,
}

impl TryFrom<SearchRow> for MaterialSearchHit {
    type Error = AppError;

    fn try_from(row: SearchRow) -> Result<Self, Self::Error> {
        let partition = match row.partition.as_str() {
            "planning" => MaterialPartition::Planning,
            "purchased" => MaterialPartition::Purchased,
            other => {
                return Err(AppError::database(format!(
                    "Unexpected search partition '{other}'"
                )));
            }
        };
        Ok(Self {
            partition,
            material: row.material,
        })
    }
}

/// Material gateway backed by the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgMaterialGateway {
    pool: PgPool,
}

impl PgMaterialGateway {
    /// Create a new material gateway.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialGateway for PgMaterialGateway {
    async fn begin(&self) -> AppResult<Box<dyn MaterialTransaction>> {
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Box::new(PgMaterialTransaction { tx }))
    }

    async fn find_by_id(
        &self,
        partition: MaterialPartition,
        id: i64,
    ) -> AppResult<Option<Material>> {
        fetch_material(&self.pool, partition, id, false).await
    }

    async fn list(
        &self,
        partition: MaterialPartition,
        params: &ListParams,
    ) -> AppResult<Vec<Material>> {
        let sql = list_sql(partition);
        sqlx::query_as::<_, Material>(&sql)
            .bind(params.company_id)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {partition} materials"),
                    e,
                )
            })
    }

    async fn create(
        &self,
        partition: MaterialPartition,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<MaterialIds> {
        insert_material(&self.pool, partition, draft).await
    }

    async fn update(
        &self,
        partition: MaterialPartition,
        id: i64,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<bool> {
        let sql = update_sql(partition);
        let query = sqlx::query_as::<_, (i64,)>(&sql);
        let updated = bind_fields(query, draft)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to update {partition} material {id}"),
                    e,
                )
            })?;
        Ok(updated.is_some())
    }

    async fn delete(&self, partition: MaterialPartition, id: i64) -> AppResult<bool> {
        delete_material(&self.pool, partition, id).await
    }

    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialSearchHit>> {
        let sql = search_sql();
        let rows = sqlx::query_as::<_, SearchRow>(&sql)
            .bind(params.page.company_id)
            .bind(params.like_prefix())
            .bind(params.page.limit)
            .bind(params.page.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search materials", e)
            })?;

        rows.into_iter().map(MaterialSearchHit::try_from).collect()
    }
}

/// A live sqlx transaction. Dropping it without commit rolls it back,
/// including when the enclosing request future is cancelled.
pub struct PgMaterialTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl MaterialTransaction for PgMaterialTransaction {
    async fn find_for_update(
        &mut self,
        partition: MaterialPartition,
        id: i64,
    ) -> AppResult<Option<Material>> {
        fetch_material(&mut *self.tx, partition, id, true).await
    }

    async fn delete(&mut self, partition: MaterialPartition, id: i64) -> AppResult<bool> {
        delete_material(&mut *self.tx, partition, id).await
    }

    async fn insert(
        &mut self,
        partition: MaterialPartition,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<MaterialIds> {
        insert_material(&mut *self.tx, partition, draft).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
        })
    }
}
