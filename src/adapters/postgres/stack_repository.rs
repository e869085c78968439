//! PostgreSQL implementation of StackRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool};

use super::rows::{get, style_from_label, user_id};
use crate::domain::foundation::{DomainError, StackId, UserId};
use crate::domain::stack::{NewStack, Stack};
use crate::ports::StackRepository;

const STACK_COLUMNS: &str = "id_stack, id_usuario, fecha_inicio, fecha_final, estilo";

#[derive(Clone)]
pub struct PostgresStackRepository {
    pool: PgPool,
}

impl PostgresStackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StackRepository for PostgresStackRepository {
    async fn delete_all_for_user(&self, owner: UserId) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let deleted = delete_stacks(&mut tx, "id_usuario = $1", owner.as_i64()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit stack deletion", e))?;

        tracing::debug!(user_id = %owner, deleted, "Deleted user stacks");
        Ok(deleted)
    }

    async fn create(&self, stack: &NewStack) -> Result<Stack, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO stack (id_usuario, fecha_inicio, fecha_final, estilo)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            STACK_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(stack.owner.as_i64())
            .bind(stack.start_date)
            .bind(stack.end_date)
            .bind(stack.style.map(|s| s.db_label()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert stack", e))?;

        row_to_stack(&row)
    }

    async fn delete(&self, id: StackId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        delete_stacks(&mut tx, "id_stack = $1", id.as_i64()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit stack deletion", e))
    }

    async fn list_by_user(&self, owner: UserId) -> Result<Vec<Stack>, DomainError> {
        let sql = format!(
            "SELECT {} FROM stack WHERE id_usuario = $1 ORDER BY fecha_inicio DESC, id_stack DESC",
            STACK_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(owner.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch stacks", e))?;

        rows.iter().map(row_to_stack).collect()
    }

    async fn find_active_on(
        &self,
        owner: UserId,
        date: NaiveDate,
    ) -> Result<Option<Stack>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM stack
            WHERE id_usuario = $1 AND fecha_inicio <= $2 AND fecha_final >= $2
            ORDER BY fecha_inicio DESC, id_stack DESC
            LIMIT 1
            "#,
            STACK_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(owner.as_i64())
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch active stack", e))?;

        row.as_ref().map(row_to_stack).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Deletes item links, outfits, then stacks matching `filter` (over `stack`).
async fn delete_stacks(
    conn: &mut PgConnection,
    filter: &str,
    key: i64,
) -> Result<u64, DomainError> {
    let links = format!(
        r#"
        DELETE FROM outfit_prenda WHERE id_outfit IN (
            SELECT id_outfit FROM outfit
            WHERE id_stack IN (SELECT id_stack FROM stack WHERE {})
        )
        "#,
        filter
    );
    sqlx::query(&links)
        .bind(key)
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to delete outfit items", e))?;

    let outfits = format!(
        "DELETE FROM outfit WHERE id_stack IN (SELECT id_stack FROM stack WHERE {})",
        filter
    );
    sqlx::query(&outfits)
        .bind(key)
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to delete stack outfits", e))?;

    let stacks = format!("DELETE FROM stack WHERE {}", filter);
    let result = sqlx::query(&stacks)
        .bind(key)
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to delete stacks", e))?;

    Ok(result.rows_affected())
}

fn row_to_stack(row: &PgRow) -> Result<Stack, DomainError> {
    let owner: i64 = get(row, "id_usuario")?;
    let style: Option<String> = get(row, "estilo")?;

    Ok(Stack {
        id: StackId::new(get(row, "id_stack")?),
        owner: user_id(owner)?,
        start_date: get(row, "fecha_inicio")?,
        end_date: get(row, "fecha_final")?,
        style: style.as_deref().map(style_from_label).transpose()?,
    })
}
