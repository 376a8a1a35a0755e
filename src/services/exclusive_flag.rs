//! "At most one flagged row per partition" for main branches and cover images.
//!
//! Callers run [`enforce_exclusive`] inside the same transaction that writes the
//! flagged record, *before* that write. The partition's parent row is locked
//! first so two concurrent writers of the same partition are serialized, then
//! every other flagged row is demoted. The record's own write follows, and the
//! commit publishes both at once. Demoting first also keeps the partial unique
//! index (`... WHERE is_main` / `... WHERE is_cover`) satisfied at every
//! statement.

use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use crate::entity::{branches, companies, product_images, products};
use crate::error::{AppError, AppResult};

/// An entity holding a boolean flag that may be set on one row per partition.
pub trait ExclusiveFlag: EntityTrait {
    /// Entity whose rows define the partitions (company, product).
    type Partition: EntityTrait;

    const FLAG: &'static str;

    fn id_column() -> Self::Column;
    fn partition_column() -> Self::Column;
    fn flag_column() -> Self::Column;
    fn partition_id_column() -> <Self::Partition as EntityTrait>::Column;
}

impl ExclusiveFlag for branches::Entity {
    type Partition = companies::Entity;

    const FLAG: &'static str = "is_main";

    fn id_column() -> Self::Column {
        branches::Column::Id
    }

    fn partition_column() -> Self::Column {
        branches::Column::CompanyId
    }

    fn flag_column() -> Self::Column {
        branches::Column::IsMain
    }

    fn partition_id_column() -> companies::Column {
        companies::Column::Id
    }
}

impl ExclusiveFlag for product_images::Entity {
    type Partition = products::Entity;

    const FLAG: &'static str = "is_cover";

    fn id_column() -> Self::Column {
        product_images::Column::Id
    }

    fn partition_column() -> Self::Column {
        product_images::Column::ProductId
    }

    fn flag_column() -> Self::Column {
        product_images::Column::IsCover
    }

    fn partition_id_column() -> products::Column {
        products::Column::Id
    }
}

/// Takes a row lock on the partition's parent. Returns `false` if it does not exist.
pub async fn lock_partition<E, C>(conn: &C, partition_id: Uuid) -> Result<bool, DbErr>
where
    E: ExclusiveFlag,
    C: ConnectionTrait,
{
    let parent = E::Partition::find()
        .filter(E::partition_id_column().eq(partition_id))
        .lock(LockType::Update)
        .one(conn)
        .await?;
    Ok(parent.is_some())
}

/// Clears the flag on every row of the partition except `keep_id`.
pub async fn demote_siblings<E, C>(conn: &C, partition_id: Uuid, keep_id: Uuid) -> Result<u64, DbErr>
where
    E: ExclusiveFlag,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::flag_column(), Expr::value(false))
        .filter(E::partition_column().eq(partition_id))
        .filter(E::flag_column().eq(true))
        .filter(E::id_column().ne(keep_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Prepares a write of record `record_id` whose flag will be `flagged`.
///
/// No-op when the flag is false or the record has no partition yet. Must be
/// called on the transaction that performs the write. Returns the number of
/// demoted siblings.
pub async fn enforce_exclusive<E, C>(
    conn: &C,
    partition_id: Option<Uuid>,
    record_id: Uuid,
    flagged: bool,
) -> AppResult<u64>
where
    E: ExclusiveFlag,
    C: ConnectionTrait,
{
    let Some(partition_id) = partition_id.filter(|_| flagged) else {
        return Ok(0);
    };

    if !lock_partition::<E, C>(conn, partition_id).await? {
        return Err(AppError::NotFound);
    }

    let demoted = demote_siblings::<E, C>(conn, partition_id, record_id).await?;
    if demoted > 0 {
        tracing::debug!(
            flag = E::FLAG,
            %partition_id,
            %record_id,
            demoted,
            "demoted flagged siblings"
        );
    }
    Ok(demoted)
}
