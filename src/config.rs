use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Endpoints and credentials for the third-party food and vision services.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    pub nutrition_base_url: String,
    pub nutrition_api_key: String,
    pub barcode_base_url: String,
    pub vision_base_url: String,
    pub vision_api_key: String,
    pub vision_model: String,
    pub vision_model_version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub lookup: LookupConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "nourify".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "nourify-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        let lookup = LookupConfig {
            nutrition_base_url: std::env::var("NUTRITION_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.calorieninjas.com".into()),
            nutrition_api_key: std::env::var("NUTRITION_API_KEY")?,
            barcode_base_url: std::env::var("BARCODE_API_BASE_URL")
                .unwrap_or_else(|_| "https://world.openfoodfacts.org".into()),
            vision_base_url: std::env::var("VISION_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.clarifai.com".into()),
            vision_api_key: std::env::var("VISION_API_KEY")?,
            vision_model: std::env::var("VISION_MODEL")
                .unwrap_or_else(|_| "food-item-recognition".into()),
            vision_model_version: std::env::var("VISION_MODEL_VERSION")
                .unwrap_or_else(|_| "1d5fd481e0cf4826aa72ec3ff049e044".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            lookup,
        })
    }
}
