use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

use crate::meals::dto::MealSlot;
use crate::nutrition::FoodItem;

#[derive(Debug, FromRow)]
pub struct MealLogRow {
    pub slot: String,
    pub items: Json<Vec<FoodItem>>,
}

/// The item list for one (user, date, slot) key, or None when nothing was
/// logged there yet.
pub async fn fetch_items(
    db: &PgPool,
    user_id: Uuid,
    date: Date,
    slot: MealSlot,
) -> anyhow::Result<Option<Vec<FoodItem>>> {
    let items = sqlx::query_scalar::<_, Json<Vec<FoodItem>>>(
        r#"
        SELECT items
        FROM meal_logs
        WHERE user_id = $1 AND log_date = $2 AND slot = $3
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(slot.as_str())
    .fetch_optional(db)
    .await?;
    Ok(items.map(|json| json.0))
}

/// Wholesale replace of the item list for one key.
pub async fn replace_items(
    db: &PgPool,
    user_id: Uuid,
    date: Date,
    slot: MealSlot,
    items: Vec<FoodItem>,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO meal_logs (user_id, log_date, slot, items, updated_at)
        VALUES ($1, $2, $3, $4, now())
        ON CONFLICT (user_id, log_date, slot) DO UPDATE SET
            items = EXCLUDED.items,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(slot.as_str())
    .bind(Json(items))
    .execute(db)
    .await?;
    Ok(())
}

/// Every slot row logged for a date.
pub async fn fetch_day(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<Vec<MealLogRow>> {
    let rows = sqlx::query_as::<_, MealLogRow>(
        r#"
        SELECT slot, items
        FROM meal_logs
        WHERE user_id = $1 AND log_date = $2
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
