use log::debug;
use recipe_scout::{MealType, NormalizedRecipe, NutrientKind, RecipeScout, Venue};
use std::env;

const USAGE: &str = "Usage:
  recipe-scout personality <personality> <diet> [--location <loc>]
  recipe-scout ingredient <name> <max-minutes> [--location <loc>]
  recipe-scout nutrients <kind> <min> <max> [max-minutes] [--location <loc>]
  recipe-scout meal-type <breakfast|lunch|dinner|dessert> [--location <loc>]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let location = take_location(&mut args)?;
    debug!("mode args: {args:?}, location: {location:?}");

    let scout = RecipeScout::builder().build()?;

    let mode = args.first().ok_or(USAGE)?.clone();
    let recipe = match mode.as_str() {
        "personality" => {
            let personality = args.get(1).ok_or(USAGE)?;
            let diet = args.get(2).ok_or(USAGE)?;
            scout.by_personality(personality, diet).await
        }
        "ingredient" => {
            let ingredient = args.get(1).ok_or(USAGE)?;
            let max_minutes: u32 = args.get(2).ok_or(USAGE)?.parse()?;
            scout.by_ingredient(ingredient, max_minutes).await
        }
        "nutrients" => {
            let kind = NutrientKind::from_label(args.get(1).ok_or(USAGE)?)
                .ok_or("Unknown nutrient; expected calories, protein, fat or carbs")?;
            let min: f64 = args.get(2).ok_or(USAGE)?.parse()?;
            let max: f64 = args.get(3).ok_or(USAGE)?.parse()?;
            let max_minutes = match args.get(4) {
                Some(raw) => Some(raw.parse::<u32>()?),
                None => None,
            };
            scout.by_nutrients(kind, min, max, max_minutes).await
        }
        "meal-type" => {
            let meal_type = MealType::from_label(args.get(1).ok_or(USAGE)?)
                .ok_or("Unknown meal type; expected breakfast, lunch, dinner or dessert")?;
            scout.by_meal_type(meal_type).await
        }
        _ => return Err(USAGE.into()),
    };

    match recipe {
        Some(recipe) => {
            print_recipe(&recipe);
            if let Some(location) = location {
                let venues = scout.venues_near(&location, &recipe.cuisine).await;
                print_venues(&venues);
            }
        }
        None => println!("No recipe found."),
    }

    Ok(())
}

/// Pull `--location <value>` out of the argument list, wherever it appears.
fn take_location(args: &mut Vec<String>) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let Some(position) = args.iter().position(|arg| arg == "--location") else {
        return Ok(None);
    };
    if position + 1 >= args.len() {
        return Err("--location requires a value".into());
    }
    args.remove(position);
    Ok(Some(args.remove(position)))
}

fn print_recipe(recipe: &NormalizedRecipe) {
    println!("Recommended Recipe: {}", recipe.title);
    if !recipe.image_url.is_empty() {
        println!("Image: {}", recipe.image_url);
    }
    println!("Total Preparation Time: {} minutes", recipe.ready_minutes);

    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            println!("- {ingredient}");
        }
    }

    if recipe.instructions.is_empty() {
        println!("\nNo instructions available.");
    } else {
        println!("\nInstructions:\n{}", recipe.instructions);
    }

    if !recipe.nutrients.is_empty() {
        println!("\nNutrition Information:");
        for nutrient in &recipe.nutrients {
            if nutrient.unit.is_empty() {
                println!("- {}: {}", nutrient.name, nutrient.amount);
            } else {
                println!("- {}: {} {}", nutrient.name, nutrient.amount, nutrient.unit);
            }
        }
    }
}

fn print_venues(venues: &[Venue]) {
    if venues.is_empty() {
        println!("\nNo nearby restaurants found.");
        return;
    }
    println!("\nNearby Restaurants:");
    for venue in venues {
        let address = venue.address.as_deref().unwrap_or("Address not available");
        println!("- {} ({}) - {}", venue.name, venue.rating, address);
    }
}
