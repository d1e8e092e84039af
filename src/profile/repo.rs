use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::nutrition::{MacroGrams, NutritionTargets, ProfileMetrics};
use crate::profile::dto::BodyFat;

#[derive(Debug, FromRow)]
struct ProfileRow {
    biological_sex: String,
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    body_fat: String,
    activity_level: String,
    goal: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

/// A user's persisted profile: physiological inputs plus derived targets.
#[derive(Debug, Clone)]
pub struct StoredProfile {
    pub metrics: ProfileMetrics,
    pub body_fat: BodyFat,
    pub targets: NutritionTargets,
}

impl TryFrom<ProfileRow> for StoredProfile {
    type Error = anyhow::Error;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(StoredProfile {
            metrics: ProfileMetrics {
                biological_sex: row.biological_sex.parse()?,
                age: u32::try_from(row.age)?,
                height_cm: row.height_cm,
                weight_kg: row.weight_kg,
                activity_level: row.activity_level.parse()?,
                goal: row.goal.parse()?,
            },
            body_fat: row.body_fat.parse()?,
            targets: NutritionTargets {
                calories: row.calories,
                protein_g: row.protein_g,
                carbs_g: row.carbs_g,
                fat_g: row.fat_g,
            },
        })
    }
}

pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<StoredProfile>> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT biological_sex, age, height_cm, weight_kg, body_fat,
               activity_level, goal, calories, protein_g, carbs_g, fat_g
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    row.map(StoredProfile::try_from).transpose()
}

pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    metrics: &ProfileMetrics,
    body_fat: BodyFat,
    targets: &NutritionTargets,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, biological_sex, age, height_cm, weight_kg,
                              body_fat, activity_level, goal,
                              calories, protein_g, carbs_g, fat_g, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now())
        ON CONFLICT (user_id) DO UPDATE SET
            biological_sex = EXCLUDED.biological_sex,
            age = EXCLUDED.age,
            height_cm = EXCLUDED.height_cm,
            weight_kg = EXCLUDED.weight_kg,
            body_fat = EXCLUDED.body_fat,
            activity_level = EXCLUDED.activity_level,
            goal = EXCLUDED.goal,
            calories = EXCLUDED.calories,
            protein_g = EXCLUDED.protein_g,
            carbs_g = EXCLUDED.carbs_g,
            fat_g = EXCLUDED.fat_g,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(metrics.biological_sex.as_str())
    .bind(i32::try_from(metrics.age)?)
    .bind(metrics.height_cm)
    .bind(metrics.weight_kg)
    .bind(body_fat.as_str())
    .bind(metrics.activity_level.as_str())
    .bind(metrics.goal.as_str())
    .bind(targets.calories)
    .bind(targets.protein_g)
    .bind(targets.carbs_g)
    .bind(targets.fat_g)
    .execute(db)
    .await?;
    Ok(())
}

/// Merge-write only the gram targets, leaving calories and the
/// physiological fields alone. Returns false when no profile row exists.
pub async fn update_macros(db: &PgPool, user_id: Uuid, grams: &MacroGrams) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE profiles
        SET protein_g = $2, carbs_g = $3, fat_g = $4, updated_at = now()
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .bind(grams.protein_g)
    .bind(grams.carbs_g)
    .bind(grams.fat_g)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
