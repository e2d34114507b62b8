use crate::cuisine::DEFAULT_CUISINE;
use crate::model::{NormalizedRecipe, Nutrient, ReadyTime};
use crate::normalize::Normalize;
use serde::Deserialize;

/// Full recipe payload from the structured API family.
///
/// Every field is optional on the wire; normalization supplies the fallbacks
/// so no downstream code ever sees a missing key.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredRecipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "readyInMinutes", default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub nutrition: Option<NutritionBlock>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

/// One ingredient entry. `original` is the full display line with quantity;
/// some endpoints only fill `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionBlock {
    #[serde(default)]
    pub nutrients: Vec<NutrientEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutrientEntry {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Response wrapper for the random-recipe endpoint: `{"recipes": [...]}`
#[derive(Debug, Deserialize)]
pub struct RandomResponse {
    #[serde(default)]
    pub recipes: Vec<StructuredRecipe>,
}

/// Response wrapper for complexSearch: `{"results": [...]}`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SummaryEntry>,
}

/// A search-result summary; only the id is needed for the detail fetch.
#[derive(Debug, Deserialize)]
pub struct SummaryEntry {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// The nutrient-filter endpoint returns a bare array of summaries.
pub type NutrientSummaries = Vec<SummaryEntry>;

impl StructuredRecipe {
    /// Normalize with a cuisine the adapter inferred before the request.
    ///
    /// The source's own `cuisines` field wins when present; the hint comes
    /// next; [`DEFAULT_CUISINE`] is the last resort.
    pub fn normalize_with_cuisine(self, cuisine_hint: Option<String>) -> NormalizedRecipe {
        let cuisine = self
            .cuisines
            .into_iter()
            .find(|c| !c.trim().is_empty())
            .or(cuisine_hint)
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string());

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Unknown Recipe".to_string(),
        };

        NormalizedRecipe {
            title,
            image_url: self.image.unwrap_or_default(),
            ready_minutes: self
                .ready_in_minutes
                .map(ReadyTime::Minutes)
                .unwrap_or(ReadyTime::Unknown),
            ingredients: self
                .extended_ingredients
                .into_iter()
                .filter_map(|entry| entry.original.or(entry.name))
                .filter(|line| !line.trim().is_empty())
                .collect(),
            instructions: self.instructions.unwrap_or_default(),
            nutrients: self
                .nutrition
                .map(|block| {
                    block
                        .nutrients
                        .into_iter()
                        .map(|entry| Nutrient {
                            name: entry.name,
                            amount: entry.amount,
                            unit: entry.unit,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            cuisine,
        }
    }
}

impl Normalize for StructuredRecipe {
    fn normalize(self) -> NormalizedRecipe {
        self.normalize_with_cuisine(None)
    }
}
