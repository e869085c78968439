//! PostgreSQL implementation of InventoryReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{row_to_item, ITEM_SELECT};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wardrobe::{ClothingItem, Style};
use crate::ports::InventoryReader;

/// Reads active garments from the `prenda` table.
#[derive(Clone)]
pub struct PostgresInventoryReader {
    pool: PgPool,
}

impl PostgresInventoryReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryReader for PostgresInventoryReader {
    async fn fetch_items(
        &self,
        owner: UserId,
        style: Option<Style>,
    ) -> Result<Vec<ClothingItem>, DomainError> {
        let sql = format!(
            r#"{}
            WHERE p.id_usuario = $1
              AND p.status = TRUE
              AND ($2::VARCHAR IS NULL OR p.estilo = $2)
            ORDER BY p.id_categoria, p.id_prenda
            "#,
            ITEM_SELECT
        );

        let rows = sqlx::query(&sql)
            .bind(owner.as_i64())
            .bind(style.map(|s| s.db_label()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch inventory", e))?;

        rows.iter().map(row_to_item).collect()
    }
}
