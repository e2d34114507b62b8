use serde::Serialize;
use std::fmt;

/// Preparation time as reported by the source. The scraped site does not
/// reliably expose a duration, so `Unknown` is a first-class value that
/// renders as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadyTime {
    Minutes(u32),
    Unknown,
}

impl fmt::Display for ReadyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyTime::Minutes(minutes) => write!(f, "{minutes}"),
            ReadyTime::Unknown => write!(f, "N/A"),
        }
    }
}

/// One nutrition entry. Scraped sources cannot separate the unit from the
/// amount column, so `unit` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// The canonical recipe record every adapter produces.
///
/// Once built, nothing downstream needs to know which backend the record came
/// from. `ingredients` and `nutrients` are never absent; a source without them
/// yields empty vectors. A record always carries a non-empty `title`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecipe {
    pub title: String,
    pub image_url: String,
    pub ready_minutes: ReadyTime,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub nutrients: Vec<Nutrient>,
    pub cuisine: String,
}

/// A business returned by the companion venue lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub name: String,
    pub rating: f64,
    pub address: Option<String>,
    pub review_count: Option<u64>,
}
