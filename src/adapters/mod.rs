//! Source adapters: one module per search mode, each owning that backend's
//! request and response shape. Adapters return `Ok(None)` for a clean empty
//! result and `Err(..)` for transport/status/decode failures; the orchestrator
//! folds both into the public "not found" outcome.

use crate::error::SearchError;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod ingredient;
pub mod meal_type;
pub mod nutrients;
pub mod personality;

pub use self::meal_type::{FixedPicker, LinkPicker, MealType, RandomPicker};
pub use self::nutrients::NutrientKind;

/// One user-selected search, with its mode-specific parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMode {
    ByPersonality {
        personality: String,
        diet: String,
    },
    ByIngredient {
        ingredient: String,
        max_minutes: u32,
    },
    ByNutrients {
        nutrient: NutrientKind,
        min: f64,
        max: f64,
        max_minutes: Option<u32>,
    },
    ByMealType {
        meal_type: MealType,
    },
}

impl SearchMode {
    /// Canonical key for the process-lifetime memo cache.
    pub fn cache_key(&self) -> String {
        match self {
            SearchMode::ByPersonality { personality, diet } => {
                format!("personality:{personality}:{diet}")
            }
            SearchMode::ByIngredient {
                ingredient,
                max_minutes,
            } => format!("ingredient:{ingredient}:{max_minutes}"),
            SearchMode::ByNutrients {
                nutrient,
                min,
                max,
                max_minutes,
            } => format!("nutrients:{nutrient}:{min}:{max}:{max_minutes:?}"),
            SearchMode::ByMealType { meal_type } => format!("meal-type:{meal_type}"),
        }
    }
}

/// GET a JSON endpoint and decode the body, treating a non-success status as
/// an error before attempting the decode.
pub(crate) async fn get_json<T, Q>(client: &Client, url: &str, query: &Q) -> Result<T, SearchError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    debug!("GET {url}");
    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// GET a page and return its body, treating a non-success status as an error.
pub(crate) async fn get_html(client: &Client, url: &str) -> Result<String, SearchError> {
    debug!("GET {url}");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status));
    }
    Ok(response.text().await?)
}

/// Fetch the full detail payload for a search-result id. The search endpoints
/// return only summaries, so every two-step adapter ends here.
pub(crate) async fn fetch_detail(
    client: &Client,
    base_url: &str,
    api_key: &str,
    id: u64,
) -> Result<crate::normalize::StructuredRecipe, SearchError> {
    let url = format!("{base_url}/recipes/{id}/information");
    let query = [("apiKey", api_key), ("includeNutrition", "true")];
    get_json(client, &url, &query).await
}
