//! PostgreSQL implementation of OutfitRepository.
//!
//! Each write runs in its own transaction; dropping the transaction on an
//! early return rolls it back.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use super::rows::{category_from_id, fetch_outfit, fetch_outfits_where, OutfitBinds};
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OutfitId, StackId, UserId};
use crate::domain::outfit::{NewOutfit, Outfit, OutfitFilter, OutfitKind};
use crate::domain::wardrobe::Category;
use crate::ports::{ItemReplacement, OutfitRepository};

#[derive(Clone)]
pub struct PostgresOutfitRepository {
    pool: PgPool,
}

impl PostgresOutfitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutfitRepository for PostgresOutfitRepository {
    async fn create(&self, outfit: &NewOutfit) -> Result<Outfit, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if outfit.stack_id.is_none() {
            // Links go with the outfit through ON DELETE CASCADE
            sqlx::query("DELETE FROM outfit WHERE id_usuario = $1 AND id_stack IS NULL")
                .bind(outfit.owner.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to delete previous unique outfit", e))?;
        }

        let row = sqlx::query(
            r#"
            INSERT INTO outfit (id_usuario, estilo, id_stack, fecha_asignada)
            VALUES ($1, $2, $3, $4)
            RETURNING id_outfit
            "#,
        )
        .bind(outfit.owner.as_i64())
        .bind(outfit.style.map(|s| s.db_label()))
        .bind(outfit.stack_id.map(|s| s.as_i64()))
        .bind(outfit.assigned_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert outfit", e))?;

        let id = OutfitId::new(
            row.try_get("id_outfit")
                .map_err(|e| DomainError::database("Failed to read outfit id", e))?,
        );

        for item_id in &outfit.item_ids {
            let linked = sqlx::query(
                r#"
                INSERT INTO outfit_prenda (id_outfit, id_prenda)
                SELECT $1, p.id_prenda FROM prenda p
                WHERE p.id_prenda = $2 AND p.id_usuario = $3
                "#,
            )
            .bind(id.as_i64())
            .bind(item_id.as_i64())
            .bind(outfit.owner.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to link outfit item", e))?;

            if linked.rows_affected() != 1 {
                return Err(DomainError::new(
                    ErrorCode::ItemNotFound,
                    format!("Item {} does not belong to user {}", item_id, outfit.owner),
                ));
            }
        }

        let created = fetch_outfit(&mut tx, id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Inserted outfit vanished")
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit outfit", e))?;

        Ok(created)
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        id: OutfitId,
    ) -> Result<Option<Outfit>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;

        let outfit = fetch_outfit(&mut conn, id).await?;
        Ok(outfit.filter(|o| o.owner == owner))
    }

    async fn find_by_stack(&self, stack_id: StackId) -> Result<Vec<Outfit>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;

        fetch_outfits_where(
            &mut conn,
            "o.id_stack = $1",
            "o.fecha_asignada, o.id_outfit",
            OutfitBinds::Stack(stack_id),
        )
        .await
    }

    async fn find_by_stack_and_date(
        &self,
        stack_id: StackId,
        date: NaiveDate,
    ) -> Result<Option<Outfit>, DomainError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id_outfit FROM outfit
            WHERE id_stack = $1 AND fecha_asignada = $2
            ORDER BY id_outfit
            LIMIT 1
            "#,
        )
        .bind(stack_id.as_i64())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch outfit for date", e))?;

        let Some(id) = id else {
            return Ok(None);
        };
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;
        fetch_outfit(&mut conn, OutfitId::new(id)).await
    }

    async fn set_favorite(
        &self,
        owner: UserId,
        id: OutfitId,
        favorite: bool,
    ) -> Result<Option<Outfit>, DomainError> {
        let result = sqlx::query(
            "UPDATE outfit SET favorito = $3 WHERE id_outfit = $1 AND id_usuario = $2",
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(favorite)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update favorite flag", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(owner, id).await
    }

    async fn list_filtered(
        &self,
        owner: UserId,
        filter: &OutfitFilter,
    ) -> Result<Vec<Outfit>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;

        fetch_outfits_where(
            &mut conn,
            r#"o.id_usuario = $1
              AND ($2::BOOL IS NULL OR o.favorito = $2)
              AND ($3::BOOL IS NULL OR (o.id_stack IS NULL) = $3)
              AND ($4::INT IS NULL OR EXTRACT(ISODOW FROM o.fecha_asignada) = $4)"#,
            "(o.id_stack IS NOT NULL), o.fecha_asignada DESC NULLS LAST, o.id_outfit DESC",
            OutfitBinds::Owner {
                owner,
                favorite: filter.favorite,
                unique: filter.kind.map(|k| k == OutfitKind::Unique),
                iso_weekday: filter.weekday.map(|d| d.number_from_monday() as i32),
            },
        )
        .await
    }

    async fn replace_item(
        &self,
        owner: UserId,
        id: OutfitId,
        category: Category,
        new_item: ItemId,
    ) -> Result<ItemReplacement, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // 1. Outfit ownership
        let owned: Option<i64> = sqlx::query_scalar(
            "SELECT id_outfit FROM outfit WHERE id_outfit = $1 AND id_usuario = $2",
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to check outfit ownership", e))?;
        if owned.is_none() {
            return Ok(ItemReplacement::OutfitNotFound);
        }

        // 2. New item ownership and category
        let new_category: Option<i32> = sqlx::query_scalar(
            "SELECT id_categoria FROM prenda WHERE id_prenda = $1 AND id_usuario = $2",
        )
        .bind(new_item.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to check item ownership", e))?;
        let Some(new_category) = new_category else {
            return Ok(ItemReplacement::ItemNotFound);
        };
        let actual = category_from_id(new_category)?;
        if actual != category {
            return Ok(ItemReplacement::CategoryMismatch { actual });
        }

        // 3. Current item of that category
        let current: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT op.id_prenda
            FROM outfit_prenda op
            JOIN prenda p ON p.id_prenda = op.id_prenda
            WHERE op.id_outfit = $1 AND p.id_categoria = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(category.id())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to find current item", e))?;
        let Some(current) = current else {
            return Ok(ItemReplacement::NothingToReplace);
        };

        // 4. Swap the link
        sqlx::query(
            "UPDATE outfit_prenda SET id_prenda = $3 WHERE id_outfit = $1 AND id_prenda = $2",
        )
        .bind(id.as_i64())
        .bind(current)
        .bind(new_item.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to replace outfit item", e))?;

        let updated = fetch_outfit(&mut tx, id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Updated outfit vanished")
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit item replacement", e))?;

        Ok(ItemReplacement::Replaced(updated))
    }
}
