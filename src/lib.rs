//! Recipe search over heterogeneous backends.
//!
//! Four source adapters (personality-driven random search, ingredient search,
//! nutrient-range search, and a meal-type HTML scrape) each fetch one
//! best-match recipe and normalize it into a single canonical
//! [`NormalizedRecipe`] shape. A companion lookup finds venues matching the
//! recipe's inferred cuisine near a user-supplied location.
//!
//! ```no_run
//! use recipe_scout::RecipeScout;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scout = RecipeScout::builder().build()?;
//! if let Some(recipe) = scout.by_personality("Extraversion", "Vegan").await {
//!     println!("{}", recipe.title);
//!     let venues = scout.venues_near("Austin, TX", &recipe.cuisine).await;
//!     println!("{} venues nearby", venues.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cache;
pub mod config;
pub mod cuisine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod scout;
pub mod venues;

pub use adapters::{FixedPicker, LinkPicker, MealType, NutrientKind, RandomPicker, SearchMode};
pub use config::{ApiConfig, AppConfig, SiteConfig};
pub use cuisine::{CuisineTable, DEFAULT_CUISINE};
pub use error::SearchError;
pub use model::{NormalizedRecipe, Nutrient, ReadyTime, Venue};
pub use normalize::{Normalize, RawRecipe};
pub use scout::{RecipeScout, RecipeScoutBuilder};
