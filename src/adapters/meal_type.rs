use crate::adapters::get_html;
use crate::config::AppConfig;
use crate::error::SearchError;
use crate::normalize::{RawRecipe, ScrapedRecipe};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use scraper::{Html, Selector};
use std::fmt;
use std::sync::Mutex;

/// Hrefs containing this fragment are treated as recipe detail links.
const RECIPE_LINK_FRAGMENT: &str = "/recipe/";

/// Meal-type categories, each bound to a static category-listing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MealType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "dessert" => Some(MealType::Dessert),
            _ => None,
        }
    }

    fn category_path(&self) -> &'static str {
        match self {
            MealType::Breakfast => "/recipes/breakfast/",
            MealType::Lunch => "/recipes/lunch/",
            MealType::Dinner => "/recipes/dinner/",
            MealType::Dessert => "/recipes/dessert/",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Dessert => "Dessert",
        };
        f.write_str(label)
    }
}

/// Strategy for choosing one link out of the scraped category listing.
///
/// Injected so tests can pin the choice; production uses [`RandomPicker`].
pub trait LinkPicker: Send + Sync {
    /// Index to pick among `count` candidates, or `None` when there are none
    /// to pick from.
    fn pick(&self, count: usize) -> Option<usize>;
}

/// Uniform random choice, optionally seeded for reproducibility.
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPicker for RandomPicker {
    fn pick(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let mut rng = self.rng.lock().expect("picker rng lock");
        Some(rng.gen_range(0..count))
    }
}

/// Always picks the given index; out of range picks nothing.
pub struct FixedPicker(pub usize);

impl LinkPicker for FixedPicker {
    fn pick(&self, count: usize) -> Option<usize> {
        (self.0 < count).then_some(self.0)
    }
}

/// Fetch the category listing for a meal type, pick one recipe link, fetch
/// its detail page and scrape it.
///
/// A failed listing fetch ends the search with nothing further attempted; a
/// listing without recipe links is a clean empty result.
pub async fn search(
    client: &Client,
    config: &AppConfig,
    picker: &dyn LinkPicker,
    meal_type: MealType,
) -> Result<Option<RawRecipe>, SearchError> {
    let listing_url = format!("{}{}", config.site.base_url, meal_type.category_path());
    let listing = get_html(client, &listing_url).await?;

    let links = recipe_links(&listing, &config.site.base_url);
    debug!("Found {} recipe links under {meal_type}", links.len());

    let Some(index) = picker.pick(links.len()) else {
        return Ok(None);
    };

    let detail = get_html(client, &links[index]).await?;
    let document = Html::parse_document(&detail);
    let page = ScrapedRecipe::from_document(&document)?;

    Ok(Some(RawRecipe::Scraped(page)))
}

/// Collect all anchors on a listing page whose href matches the recipe-URL
/// pattern, absolutized against the site base and deduplicated in order.
fn recipe_links(listing_html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(listing_html);
    let anchor = Selector::parse("a[href]").expect("invalid static selector");

    let mut links = Vec::new();
    for element in document.select(&anchor) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.contains(RECIPE_LINK_FRAGMENT) {
            continue;
        }
        let absolute = if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{base_url}{href}")
        } else {
            continue;
        };
        if !links.contains(&absolute) {
            links.push(absolute);
        }
    }
    links
}
