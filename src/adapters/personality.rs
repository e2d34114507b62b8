use crate::adapters::get_json;
use crate::config::AppConfig;
use crate::cuisine::CuisineTable;
use crate::error::SearchError;
use crate::normalize::{RandomResponse, RawRecipe};
use log::{debug, warn};
use reqwest::Client;

/// Random recipe constrained by diet and the cuisine inferred from the
/// personality table.
///
/// The diet label is passed through verbatim; invalid values are the
/// backend's problem. If the filtered call fails, one unfiltered call is
/// attempted before giving up. An empty result list is final and is not
/// retried.
pub async fn search(
    client: &Client,
    config: &AppConfig,
    table: &CuisineTable,
    personality: &str,
    diet: &str,
) -> Result<Option<RawRecipe>, SearchError> {
    let cuisine = table.infer(personality);
    debug!("Inferred cuisine {cuisine} for personality {personality:?}");

    let url = format!("{}/recipes/random", config.recipe_api.base_url);
    let filtered = [
        ("apiKey", config.recipe_api.api_key.clone()),
        ("number", "1".to_string()),
        ("tags", format!("{diet},{cuisine}")),
    ];

    let response = match get_json::<RandomResponse, _>(client, &url, &filtered).await {
        Ok(response) => response,
        Err(err) => {
            warn!("Filtered random-recipe call failed ({err}), retrying unfiltered");
            let unfiltered = [
                ("apiKey", config.recipe_api.api_key.clone()),
                ("number", "1".to_string()),
            ];
            get_json::<RandomResponse, _>(client, &url, &unfiltered).await?
        }
    };

    Ok(response
        .recipes
        .into_iter()
        .next()
        .map(|payload| RawRecipe::Structured {
            payload,
            cuisine_hint: Some(cuisine.to_string()),
        }))
}
