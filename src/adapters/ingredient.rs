use crate::adapters::{fetch_detail, get_json};
use crate::config::AppConfig;
use crate::error::SearchError;
use crate::normalize::{RawRecipe, SearchResponse};
use log::debug;
use reqwest::Client;

/// Search by a free-text ingredient, capped to one result, then fetch that
/// result's full detail. The search endpoint only returns summaries, so an
/// empty result list ends the search without a detail fetch.
pub async fn search(
    client: &Client,
    config: &AppConfig,
    ingredient: &str,
    max_minutes: u32,
) -> Result<Option<RawRecipe>, SearchError> {
    let url = format!("{}/recipes/complexSearch", config.recipe_api.base_url);
    let query = [
        ("apiKey", config.recipe_api.api_key.clone()),
        ("query", ingredient.to_string()),
        ("maxReadyTime", max_minutes.to_string()),
        ("number", "1".to_string()),
    ];

    let response: SearchResponse = get_json(client, &url, &query).await?;
    let Some(summary) = response.results.into_iter().next() else {
        debug!("No recipes matched ingredient {ingredient:?}");
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
