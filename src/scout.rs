use crate::adapters::{
    self, LinkPicker, MealType, NutrientKind, RandomPicker, SearchMode,
};
use crate::cache::SearchCache;
use crate::config::AppConfig;
use crate::cuisine::CuisineTable;
use crate::error::SearchError;
use crate::model::{NormalizedRecipe, Venue};
use crate::normalize::{Normalize, RawRecipe};
use crate::venues;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeScoutBot/1.0)";

/// Orchestrator: dispatches a [`SearchMode`] to exactly one adapter, folds
/// every failure into the not-found outcome, and memoizes found recipes for
/// the process lifetime.
pub struct RecipeScout {
    config: AppConfig,
    client: Client,
    cuisines: CuisineTable,
    cache: SearchCache,
    picker: Box<dyn LinkPicker>,
}

impl RecipeScout {
    /// Creates a new builder for configuring a scout
    pub fn builder() -> RecipeScoutBuilder {
        RecipeScoutBuilder::default()
    }

    /// Run one search. Returns `None` for everything that is not a usable
    /// recipe: empty backend results, transport failures, bad payloads.
    ///
    /// Each call performs at most two sequential backend requests (plus the
    /// personality mode's documented one-shot unfiltered retry). Dropping the
    /// returned future cancels the in-flight request.
    pub async fn search(&self, mode: &SearchMode) -> Option<NormalizedRecipe> {
        let key = mode.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            debug!("Cache hit for {key}");
            return Some(hit);
        }

        let raw = match self.dispatch(mode).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Search failed ({key}): {err}");
                None
            }
        };

        let recipe = raw.map(Normalize::normalize);
        if let Some(found) = &recipe {
            self.cache.insert(key, found);
        }
        recipe
    }

    async fn dispatch(&self, mode: &SearchMode) -> Result<Option<RawRecipe>, SearchError> {
        match mode {
            SearchMode::ByPersonality { personality, diet } => {
                adapters::personality::search(
                    &self.client,
                    &self.config,
                    &self.cuisines,
                    personality,
                    diet,
                )
                .await
            }
            SearchMode::ByIngredient {
                ingredient,
                max_minutes,
            } => {
                adapters::ingredient::search(&self.client, &self.config, ingredient, *max_minutes)
                    .await
            }
            SearchMode::ByNutrients {
                nutrient,
                min,
                max,
                max_minutes,
            } => {
                adapters::nutrients::search(
                    &self.client,
                    &self.config,
                    *nutrient,
                    *min,
                    *max,
                    *max_minutes,
                )
                .await
            }
            SearchMode::ByMealType { meal_type } => {
                adapters::meal_type::search(
                    &self.client,
                    &self.config,
                    self.picker.as_ref(),
                    *meal_type,
                )
                .await
            }
        }
    }

    /// Random recipe constrained by diet and the personality's inferred
    /// cuisine.
    pub async fn by_personality(&self, personality: &str, diet: &str) -> Option<NormalizedRecipe> {
        self.search(&SearchMode::ByPersonality {
            personality: personality.to_string(),
            diet: diet.to_string(),
        })
        .await
    }

    /// Best match for a free-text ingredient within a preparation-time cap.
    pub async fn by_ingredient(
        &self,
        ingredient: &str,
        max_minutes: u32,
    ) -> Option<NormalizedRecipe> {
        self.search(&SearchMode::ByIngredient {
            ingredient: ingredient.to_string(),
            max_minutes,
        })
        .await
    }

    /// Best match within a nutrient range, optionally time-capped.
    pub async fn by_nutrients(
        &self,
        nutrient: NutrientKind,
        min: f64,
        max: f64,
        max_minutes: Option<u32>,
    ) -> Option<NormalizedRecipe> {
        self.search(&SearchMode::ByNutrients {
            nutrient,
            min,
            max,
            max_minutes,
        })
        .await
    }

    /// One scraped recipe from a meal-type category page.
    pub async fn by_meal_type(&self, meal_type: MealType) -> Option<NormalizedRecipe> {
        self.search(&SearchMode::ByMealType { meal_type }).await
    }

    /// Companion lookup: venues matching a cuisine near a location, capped at
    /// [`venues::MAX_VENUES`]. Backend failure and zero results look alike.
    pub async fn venues_near(&self, location: &str, cuisine: &str) -> Vec<Venue> {
        match venues::search(&self.client, &self.config.venue_api, location, cuisine).await {
            Ok(found) => found,
            Err(err) => {
                warn!("Venue lookup failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Builder for configuring a [`RecipeScout`]
#[derive(Default)]
pub struct RecipeScoutBuilder {
    config: Option<AppConfig>,
    timeout: Option<Duration>,
    picker: Option<Box<dyn LinkPicker>>,
}

impl RecipeScoutBuilder {
    /// Use an explicit configuration instead of loading file + environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the per-request timeout from the configuration
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Replace the link-selection strategy used by the meal-type scrape
    pub fn link_picker(mut self, picker: impl LinkPicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }

    /// Build the scout, loading configuration if none was supplied
    ///
    /// # Errors
    /// Returns `SearchError` if configuration loading or HTTP client
    /// construction fails.
    pub fn build(self) -> Result<RecipeScout, SearchError> {
        let config = match self.config {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(config.timeout_secs));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(RecipeScout {
            config,
            client,
            cuisines: CuisineTable::new(),
            cache: SearchCache::new(),
            picker: self.picker.unwrap_or_else(|| Box::new(RandomPicker::new())),
        })
    }
}
