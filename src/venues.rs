use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::model::Venue;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;

/// Hard cap on venues returned, regardless of backend result size.
pub const MAX_VENUES: usize = 5;

#[derive(Debug, Deserialize)]
struct BusinessSearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
struct Business {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    review_count: Option<u64>,
    #[serde(default)]
    location: Option<BusinessLocation>,
}

#[derive(Debug, Deserialize)]
struct BusinessLocation {
    #[serde(default)]
    address1: Option<String>,
}

impl From<Business> for Venue {
    fn from(business: Business) -> Self {
        Venue {
            name: business.name,
            rating: business.rating,
            address: business
                .location
                .and_then(|location| location.address1)
                .filter(|address| !address.trim().is_empty()),
            review_count: business.review_count,
        }
    }
}

/// Find up to [`MAX_VENUES`] businesses matching the cuisine near a location,
/// in the backend's own relevance order.
///
/// A blank location is a no-op: no network call is issued and the result is
/// empty.
pub async fn search(
    client: &Client,
    config: &ApiConfig,
    location: &str,
    cuisine: &str,
) -> Result<Vec<Venue>, SearchError> {
    if location.trim().is_empty() {
        return Ok(Vec::new());
    }

    let url = format!("{}/businesses/search", config.base_url);
    let term = format!("{cuisine} restaurants");
    let limit = MAX_VENUES.to_string();
    debug!("Searching venues: term={term:?} location={location:?}");

    let response = client
        .get(&url)
        .query(&[
            ("term", term.as_str()),
            ("location", location),
            ("limit", limit.as_str()),
        ])
        .header(AUTHORIZATION, format!("Bearer {}", config.api_key))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status));
    }

    let parsed: BusinessSearchResponse = serde_json::from_str(&response.text().await?)?;
    Ok(parsed
        .businesses
        .into_iter()
        .take(MAX_VENUES)
        .map(Venue::from)
        .collect())
}
