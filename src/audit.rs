use serde_json::Value;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult, middleware::auth::AuthUser};

/// One row of `audit_logs`.
#[derive(Debug)]
pub struct AuditEntry<'a> {
    pub user_id: Option<Uuid>,
    pub action: &'a str,
    pub resource: &'a str,
    pub metadata: Value,
}

pub async fn log_audit(pool: &DbPool, entry: AuditEntry<'_>) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO audit_logs (id, user_id, action, resource, metadata)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.user_id)
    .bind(entry.action)
    .bind(entry.resource)
    .bind(entry.metadata)
    .execute(pool)
    .await?;

    Ok(())
}

/// Records an admin write. A failed insert is logged and swallowed so the
/// write itself still succeeds.
pub async fn audit_write(
    pool: &DbPool,
    user: &AuthUser,
    action: &str,
    resource: &str,
    metadata: Value,
) {
    let entry = AuditEntry {
        user_id: Some(user.user_id),
        action,
        resource,
        metadata,
    };
    if let Err(err) = log_audit(pool, entry).await {
        tracing::warn!(error = %err, action, resource, "audit log failed");
    }
}
