use crate::model::NormalizedRecipe;

mod scraped;
mod structured;

pub use self::scraped::ScrapedRecipe;
pub use self::structured::{
    NutrientSummaries, RandomResponse, SearchResponse, StructuredRecipe, SummaryEntry,
};

/// Converts one backend family's raw payload into the canonical record.
///
/// Total on well-formed input: missing optional fields become fallbacks or
/// empty collections, never an error, and running it on equal payloads yields
/// equal records.
pub trait Normalize {
    fn normalize(self) -> NormalizedRecipe;
}

/// Raw best-match payload tagged by the adapter family that produced it.
#[derive(Debug, Clone)]
pub enum RawRecipe {
    /// JSON payload from the structured recipe API, with the cuisine the
    /// adapter inferred before issuing the request (if any)
    Structured {
        payload: StructuredRecipe,
        cuisine_hint: Option<String>,
    },
    /// Fields extracted from a scraped recipe detail page
    Scraped(ScrapedRecipe),
}

impl Normalize for RawRecipe {
    fn normalize(self) -> NormalizedRecipe {
        match self {
            RawRecipe::Structured {
                payload,
                cuisine_hint,
            } => payload.normalize_with_cuisine(cuisine_hint),
            RawRecipe::Scraped(page) => page.normalize(),
        }
    }
}
