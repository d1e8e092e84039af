use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::LookupConfig;
use crate::foods::error::LookupError;
use crate::nutrition::FoodItem;

/// Amount every lookup template is normalized to. The client rescales from
/// here when the user adjusts the logged amount.
pub const TEMPLATE_AMOUNT_G: f64 = 100.0;

/// Source of `FoodItem` templates: free-text search and barcode lookup.
#[async_trait]
pub trait FoodDataClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>, LookupError>;
    async fn by_barcode(&self, barcode: &str) -> Result<FoodItem, LookupError>;
}

/// Production client: CalorieNinjas for text search, Open Food Facts for
/// barcode lookup.
pub struct NutritionApi {
    http: reqwest::Client,
    config: LookupConfig,
}

impl NutritionApi {
    pub fn new(http: reqwest::Client, config: LookupConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl FoodDataClient for NutritionApi {
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>, LookupError> {
        let url = format!("{}/v1/nutrition", self.config.nutrition_base_url);
        let payload = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .header("X-Api-Key", &self.config.nutrition_api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        let items = parse_search_payload(payload)?;
        debug!(query, hits = items.len(), "food search");
        Ok(items)
    }

    async fn by_barcode(&self, barcode: &str) -> Result<FoodItem, LookupError> {
        let url = format!(
            "{}/api/v3/product/{}.json",
            self.config.barcode_base_url, barcode
        );
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        let payload = response
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        let item = parse_product_payload(payload)?;
        debug!(barcode, name = %item.name, "barcode lookup");
        Ok(item)
    }
}

// --- wire shapes ---

#[derive(Debug, Deserialize)]
struct SearchPayload {
    items: Vec<SearchPayloadItem>,
}

// CalorieNinjas values are per 100g of the queried food.
#[derive(Debug, Deserialize)]
struct SearchPayloadItem {
    name: String,
    #[serde(default)]
    calories: f64,
    #[serde(default)]
    protein_g: f64,
    #[serde(default)]
    carbohydrates_total_g: f64,
    #[serde(default)]
    fat_total_g: f64,
}

#[derive(Debug, Deserialize)]
struct ProductPayload {
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default)]
    energy_kcal_100g: f64,
    #[serde(rename = "proteins_100g", default)]
    proteins_100g: f64,
    #[serde(rename = "carbohydrates_100g", default)]
    carbohydrates_100g: f64,
    #[serde(rename = "fat_100g", default)]
    fat_100g: f64,
}

/// Convert an untyped CalorieNinjas payload into 100g templates.
pub(crate) fn parse_search_payload(
    payload: serde_json::Value,
) -> Result<Vec<FoodItem>, LookupError> {
    let parsed: SearchPayload =
        serde_json::from_value(payload).map_err(|e| LookupError::Parse(e.to_string()))?;
    Ok(parsed
        .items
        .into_iter()
        .map(|item| FoodItem {
            name: item.name,
            amount_grams: TEMPLATE_AMOUNT_G,
            calories: item.calories,
            protein_g: item.protein_g,
            carbs_g: item.carbohydrates_total_g,
            fat_g: item.fat_total_g,
        })
        .collect())
}

/// Convert an untyped Open Food Facts v3 payload into a 100g template.
/// Missing nutriment fields default to 0; a missing product is `NotFound`.
pub(crate) fn parse_product_payload(payload: serde_json::Value) -> Result<FoodItem, LookupError> {
    let parsed: ProductPayload =
        serde_json::from_value(payload).map_err(|e| LookupError::Parse(e.to_string()))?;
    let product = parsed.product.ok_or(LookupError::NotFound)?;
    Ok(FoodItem {
        name: product
            .product_name
            .unwrap_or_else(|| "Name not found".into()),
        amount_grams: TEMPLATE_AMOUNT_G,
        calories: product.nutriments.energy_kcal_100g,
        protein_g: product.nutriments.proteins_100g,
        carbs_g: product.nutriments.carbohydrates_100g,
        fat_g: product.nutriments.fat_100g,
    })
}
