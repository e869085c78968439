//! Row mapping shared by the PostgreSQL adapters.

use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OutfitId, StackId, UserId};
use crate::domain::outfit::Outfit;
use crate::domain::wardrobe::{Category, ClothingItem, ColorRef, Style};

/// Item columns with category, subcategory and color names joined in.
pub(super) const ITEM_SELECT: &str = r#"
    SELECT p.id_prenda, p.id_usuario, p.nombre_prenda, p.id_categoria,
           sc.nombre_subcategoria, p.estilo,
           p.id_color, c.color_principal,
           p.id_color_secundario, c2.color_principal AS color_secundario,
           p.ruta, p.status, p.favorito
    FROM prenda p
    JOIN color c ON p.id_color = c.id_color
    LEFT JOIN color c2 ON p.id_color_secundario = c2.id_color
    LEFT JOIN subcategoria_prenda sc ON p.id_subcategoria = sc.id_subcategoria
"#;

const OUTFIT_COLUMNS: &str =
    "o.id_outfit, o.id_usuario, o.estilo, o.id_stack, o.fecha_asignada, o.favorito";

pub(super) fn row_to_item(row: &PgRow) -> Result<ClothingItem, DomainError> {
    let owner: i64 = get(row, "id_usuario")?;
    let category_id: i32 = get(row, "id_categoria")?;
    let style: String = get(row, "estilo")?;
    let secondary_id: Option<i32> = get(row, "id_color_secundario")?;
    let primary_name: String = get(row, "color_principal")?;
    let secondary_name: Option<String> = get(row, "color_secundario")?;

    Ok(ClothingItem {
        id: ItemId::new(get(row, "id_prenda")?),
        owner: user_id(owner)?,
        name: get(row, "nombre_prenda")?,
        category: category_from_id(category_id)?,
        subcategory: get(row, "nombre_subcategoria")?,
        style: style_from_label(&style)?,
        primary_color: ColorRef::new(get(row, "id_color")?, primary_name),
        secondary_color: secondary_id
            .zip(secondary_name)
            .map(|(id, name)| ColorRef::new(id, name)),
        image_url: get(row, "ruta")?,
        active: get(row, "status")?,
        favorite: get(row, "favorito")?,
    })
}

/// Loads one outfit with its items.
pub(super) async fn fetch_outfit(
    conn: &mut PgConnection,
    id: OutfitId,
) -> Result<Option<Outfit>, DomainError> {
    let sql = format!("SELECT {} FROM outfit o WHERE o.id_outfit = $1", OUTFIT_COLUMNS);
    let row = sqlx::query(&sql)
        .bind(id.as_i64())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to fetch outfit", e))?;

    match row {
        Some(row) => Ok(attach_items(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Loads outfits matching a `WHERE` clause over alias `o`, in the given order.
pub(super) async fn fetch_outfits_where(
    conn: &mut PgConnection,
    clause: &str,
    order_by: &str,
    bind: OutfitBinds,
) -> Result<Vec<Outfit>, DomainError> {
    let sql = format!(
        "SELECT {} FROM outfit o WHERE {} ORDER BY {}",
        OUTFIT_COLUMNS, clause, order_by
    );
    let query = sqlx::query(&sql);
    let query = match bind {
        OutfitBinds::Stack(stack_id) => query.bind(stack_id.as_i64()),
        OutfitBinds::Owner {
            owner,
            favorite,
            unique,
            iso_weekday,
        } => query
            .bind(owner.as_i64())
            .bind(favorite)
            .bind(unique)
            .bind(iso_weekday),
    };
    let rows = query
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to fetch outfits", e))?;

    attach_items(conn, rows).await
}

/// Bind values for [`fetch_outfits_where`].
pub(super) enum OutfitBinds {
    Stack(StackId),
    /// `$1` owner, then the optional favorite, unique and ISO weekday criteria.
    Owner {
        owner: UserId,
        favorite: Option<bool>,
        unique: Option<bool>,
        iso_weekday: Option<i32>,
    },
}

async fn attach_items(
    conn: &mut PgConnection,
    rows: Vec<PgRow>,
) -> Result<Vec<Outfit>, DomainError> {
    let mut outfits = rows
        .iter()
        .map(row_to_outfit)
        .collect::<Result<Vec<_>, _>>()?;
    if outfits.is_empty() {
        return Ok(outfits);
    }

    let ids: Vec<i64> = outfits.iter().map(|o| o.id.as_i64()).collect();
    let sql = format!(
        r#"
        SELECT op.id_outfit AS link_outfit, item.*
        FROM outfit_prenda op
        JOIN ({}) item ON item.id_prenda = op.id_prenda
        WHERE op.id_outfit = ANY($1)
        ORDER BY item.id_categoria
        "#,
        ITEM_SELECT
    );
    let item_rows = sqlx::query(&sql)
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| DomainError::database("Failed to fetch outfit items", e))?;

    let mut by_outfit: HashMap<i64, Vec<ClothingItem>> = HashMap::new();
    for row in &item_rows {
        let outfit_id: i64 = get(row, "link_outfit")?;
        by_outfit.entry(outfit_id).or_default().push(row_to_item(row)?);
    }
    for outfit in &mut outfits {
        outfit.items = by_outfit.remove(&outfit.id.as_i64()).unwrap_or_default();
    }
    Ok(outfits)
}

fn row_to_outfit(row: &PgRow) -> Result<Outfit, DomainError> {
    let owner: i64 = get(row, "id_usuario")?;
    let style: Option<String> = get(row, "estilo")?;
    let stack_id: Option<i64> = get(row, "id_stack")?;

    Ok(Outfit {
        id: OutfitId::new(get(row, "id_outfit")?),
        owner: user_id(owner)?,
        style: style.as_deref().map(style_from_label).transpose()?,
        stack_id: stack_id.map(StackId::new),
        assigned_date: get(row, "fecha_asignada")?,
        favorite: get(row, "favorito")?,
        items: Vec::new(),
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

pub(super) fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to read column {}", column), e))
}

pub(super) fn user_id(raw: i64) -> Result<UserId, DomainError> {
    UserId::new(raw).map_err(DomainError::from)
}

pub(super) fn style_from_label(label: &str) -> Result<Style, DomainError> {
    Style::from_db_label(label).ok_or_else(|| {
        DomainError::new(ErrorCode::InternalError, format!("Invalid style: {}", label))
    })
}

pub(super) fn category_from_id(id: i32) -> Result<Category, DomainError> {
    Category::from_id(id).ok_or_else(|| {
        DomainError::new(ErrorCode::InternalError, format!("Invalid category: {}", id))
    })
}
