//! PostgreSQL implementation of ItemRepository.
//!
//! Catalogue names are resolved inside the write transaction, so a rename
//! of a palette entry cannot slip between lookup and insert.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use super::rows::{row_to_item, ITEM_SELECT};
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, UserId};
use crate::domain::wardrobe::{ClothingItem, ItemFilter, ItemUpdate, NewClothingItem};
use crate::ports::{ItemRepository, ItemWrite};

#[derive(Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn color_id(conn: &mut PgConnection, name: &str) -> Result<Option<i32>, DomainError> {
    sqlx::query_scalar("SELECT id_color FROM color WHERE LOWER(color_principal) = LOWER($1)")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to resolve color", e))
}

async fn fetch_item(
    conn: &mut PgConnection,
    owner: UserId,
    id: ItemId,
) -> Result<Option<ClothingItem>, DomainError> {
    let sql = format!(
        "{} WHERE p.id_prenda = $1 AND p.id_usuario = $2",
        ITEM_SELECT
    );
    let row = sqlx::query(&sql)
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to fetch item", e))?;
    row.as_ref().map(row_to_item).transpose()
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn register(&self, item: &NewClothingItem) -> Result<ItemWrite, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let Some(primary) = color_id(&mut tx, &item.primary_color).await? else {
            return Ok(ItemWrite::UnknownColor(item.primary_color.clone()));
        };
        let secondary = match item.secondary_color.as_deref() {
            Some(name) => match color_id(&mut tx, name).await? {
                Some(id) => Some(id),
                None => return Ok(ItemWrite::UnknownColor(name.to_string())),
            },
            None => None,
        };
        let subcategory = match item.subcategory.as_deref() {
            Some(name) => {
                let found: Option<i32> = sqlx::query_scalar(
                    r#"
                    SELECT id_subcategoria FROM subcategoria_prenda
                    WHERE id_categoria = $1 AND LOWER(nombre_subcategoria) = LOWER($2)
                    "#,
                )
                .bind(item.category.id())
                .bind(name)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to resolve subcategory", e))?;
                match found {
                    Some(id) => Some(id),
                    None => return Ok(ItemWrite::UnknownSubcategory(name.to_string())),
                }
            }
            None => None,
        };

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO prenda (id_usuario, nombre_prenda, id_categoria, id_subcategoria,
                                estilo, id_color, id_color_secundario, ruta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_prenda
            "#,
        )
        .bind(item.owner.as_i64())
        .bind(&item.name)
        .bind(item.category.id())
        .bind(subcategory)
        .bind(item.style.db_label())
        .bind(primary)
        .bind(secondary)
        .bind(&item.image_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert item", e))?;

        let created = fetch_item(&mut tx, item.owner, ItemId::new(id))
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "Inserted item vanished"))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit item", e))?;

        Ok(ItemWrite::Saved(created))
    }

    async fn list(
        &self,
        owner: UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<ClothingItem>, DomainError> {
        let sql = format!(
            r#"{}
            WHERE p.id_usuario = $1
              AND ($2 OR p.status = TRUE)
              AND ($3::VARCHAR IS NULL OR p.estilo = $3)
              AND ($4::INT IS NULL OR p.id_categoria = $4)
              AND ($5::VARCHAR IS NULL OR c.color_principal ILIKE '%' || $5 || '%')
              AND ($6::VARCHAR IS NULL OR p.nombre_prenda ILIKE '%' || $6 || '%')
              AND ($7::VARCHAR IS NULL OR sc.nombre_subcategoria ILIKE '%' || $7 || '%')
            ORDER BY p.id_prenda DESC
            "#,
            ITEM_SELECT
        );

        let rows = sqlx::query(&sql)
            .bind(owner.as_i64())
            .bind(filter.include_inactive)
            .bind(filter.style.map(|s| s.db_label()))
            .bind(filter.category.map(|c| c.id()))
            .bind(filter.color.as_deref().map(str::trim))
            .bind(filter.name.as_deref().map(str::trim))
            .bind(filter.subcategory.as_deref().map(str::trim))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list items", e))?;

        rows.iter().map(row_to_item).collect()
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        id: ItemId,
    ) -> Result<Option<ClothingItem>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;
        fetch_item(&mut conn, owner, id).await
    }

    async fn update(
        &self,
        owner: UserId,
        id: ItemId,
        update: &ItemUpdate,
    ) -> Result<ItemWrite, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let secondary = match update.secondary_color.as_deref() {
            Some(name) => match color_id(&mut tx, name).await? {
                Some(id) => Some(id),
                None => return Ok(ItemWrite::UnknownColor(name.to_string())),
            },
            None => None,
        };

        let result = sqlx::query(
            r#"
            UPDATE prenda
            SET nombre_prenda = COALESCE($3, nombre_prenda),
                estilo = COALESCE($4, estilo),
                id_color_secundario = COALESCE($5, id_color_secundario),
                status = COALESCE($6, status)
            WHERE id_prenda = $1 AND id_usuario = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(update.name.as_deref())
        .bind(update.style.map(|s| s.db_label()))
        .bind(secondary)
        .bind(update.active)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update item", e))?;

        if result.rows_affected() == 0 {
            return Ok(ItemWrite::NotFound);
        }

        let updated = fetch_item(&mut tx, owner, id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "Updated item vanished"))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit item update", e))?;

        Ok(ItemWrite::Saved(updated))
    }
}
