use crate::adapters::{fetch_detail, get_json};
use crate::config::AppConfig;
use crate::error::SearchError;
use crate::normalize::{NutrientSummaries, RawRecipe};
use log::debug;
use reqwest::Client;
use std::fmt;

/// The nutrients the filter endpoint accepts range bounds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientKind {
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl NutrientKind {
    /// Suffix used in the endpoint's min/max query parameters
    /// (minProtein, maxProtein, ...).
    fn query_name(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "Calories",
            NutrientKind::Protein => "Protein",
            NutrientKind::Fat => "Fat",
            NutrientKind::Carbs => "Carbs",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "calories" => Some(NutrientKind::Calories),
            "protein" => Some(NutrientKind::Protein),
            "fat" => Some(NutrientKind::Fat),
            "carbs" | "carbohydrates" => Some(NutrientKind::Carbs),
            _ => None,
        }
    }
}

impl fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_name())
    }
}

/// Out-of-order bounds are silently swapped rather than rejected.
pub(crate) fn order_bounds(min: f64, max: f64) -> (f64, f64) {
    if min <= max {
        (min, max)
    } else {
        debug!("Swapping out-of-order nutrient bounds {min}..{max}");
        (max, min)
    }
}

/// Search by a nutrient range, capped to one result, then fetch the full
/// detail by id. Mirrors the ingredient adapter's two-step shape; the filter
/// endpoint returns a bare array of summaries.
pub async fn search(
    client: &Client,
    config: &AppConfig,
    nutrient: NutrientKind,
    min: f64,
    max: f64,
    max_minutes: Option<u32>,
) -> Result<Option<RawRecipe>, SearchError> {
    let (min, max) = order_bounds(min, max);

    let url = format!("{}/recipes/findByNutrients", config.recipe_api.base_url);
    let mut query = vec![
        ("apiKey".to_string(), config.recipe_api.api_key.clone()),
        ("number".to_string(), "1".to_string()),
    ];
    query.push((format!("min{}", nutrient.query_name()), min.to_string()));
    query.push((format!("max{}", nutrient.query_name()), max.to_string()));
    if let Some(minutes) = max_minutes {
        query.push(("maxReadyTime".to_string(), minutes.to_string()));
    }

    let summaries: NutrientSummaries = get_json(client, &url, &query).await?;
    let Some(summary) = summaries.into_iter().next() else {
        debug!("No recipes in {nutrient} range {min}..{max}");
        return Ok(None);
    };

    let payload = fetch_detail(
        client,
        &config.recipe_api.base_url,
        &config.recipe_api.api_key,
        summary.id,
    )
    .await?;

    Ok(Some(RawRecipe::Structured {
        payload,
        cuisine_hint: None,
    }))
}
