use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct WeightRow {
    pub entry_date: Date,
    pub weight_kg: f64,
}

pub async fn list(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WeightRow>> {
    let rows = sqlx::query_as::<_, WeightRow>(
        r#"
        SELECT entry_date, weight_kg
        FROM weight_entries
        WHERE user_id = $1
        ORDER BY entry_date ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// One entry per (user, date); a second submission the same day overwrites.
pub async fn upsert(db: &PgPool, user_id: Uuid, date: Date, weight_kg: f64) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO weight_entries (user_id, entry_date, weight_kg)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET weight_kg = EXCLUDED.weight_kg
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(weight_kg)
    .execute(db)
    .await?;
    Ok(())
}
