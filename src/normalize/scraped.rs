use crate::cuisine::DEFAULT_CUISINE;
use crate::error::SearchError;
use crate::model::{NormalizedRecipe, Nutrient, ReadyTime};
use crate::normalize::Normalize;
use html_escape::decode_html_entities;
use log::debug;
use scraper::{ElementRef, Html, Selector};

// Detail-page markers. Comma lists cover the site's current card markup plus
// the older class names still present on some category archives.
const TITLE_SELECTOR: &str = "h1";
const IMAGE_SELECTOR: &str = "img.primary-image__image, .recipe-hero img, article img";
const INGREDIENT_SELECTOR: &str =
    "li.mm-recipes-structured-ingredients__list-item, .recipe-ingredients li";
const STEP_SELECTOR: &str = ".mm-recipes-steps p, .recipe-directions p";
const NUTRITION_ROW_SELECTOR: &str =
    ".mm-recipes-nutrition-facts-summary__table tr, table.nutrition-summary tr";

/// Fields extracted from one scraped recipe detail page.
///
/// Missing markers degrade the record (empty fields) rather than failing;
/// only a page without any title is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedRecipe {
    pub title: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub nutrients: Vec<Nutrient>,
}

impl ScrapedRecipe {
    pub fn from_document(document: &Html) -> Result<Self, SearchError> {
        let title = select_text(document, TITLE_SELECTOR)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SearchError::Scrape("no recipe title on page".to_string()))?;

        let image_url = first_image_url(document).unwrap_or_default();
        let ingredients = select_lines(document, INGREDIENT_SELECTOR);
        let instructions = select_lines(document, STEP_SELECTOR).join("\n");
        let nutrients = nutrition_rows(document);

        debug!(
            "Scraped \"{}\": {} ingredients, {} nutrition rows",
            title,
            ingredients.len(),
            nutrients.len()
        );

        Ok(ScrapedRecipe {
            title,
            image_url,
            ingredients,
            instructions,
            nutrients,
        })
    }
}

impl Normalize for ScrapedRecipe {
    fn normalize(self) -> NormalizedRecipe {
        NormalizedRecipe {
            title: self.title,
            image_url: self.image_url,
            // Duration is not reliably present on the scraped pages
            ready_minutes: ReadyTime::Unknown,
            ingredients: self.ingredients,
            instructions: self.instructions,
            nutrients: self.nutrients,
            cuisine: DEFAULT_CUISINE.to_string(),
        }
    }
}

fn selector(raw: &str) -> Selector {
    // All selectors are compile-time constants
    Selector::parse(raw).expect("invalid static selector")
}

fn element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    let compact = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    decode_html_entities(&compact).into_owned()
}

fn select_text(document: &Html, raw_selector: &str) -> Option<String> {
    document
        .select(&selector(raw_selector))
        .next()
        .map(element_text)
}

fn select_lines(document: &Html, raw_selector: &str) -> Vec<String> {
    document
        .select(&selector(raw_selector))
        .map(element_text)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Lazy-loaded images keep the real URL in `data-src`; `src` is the fallback.
fn first_image_url(document: &Html) -> Option<String> {
    let image = document.select(&selector(IMAGE_SELECTOR)).next()?;
    image
        .value()
        .attr("data-src")
        .or_else(|| image.value().attr("src"))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// Parse two-column nutrition rows into name/amount pairs. The site renders
/// the amount and label in either column order depending on the template, and
/// never exposes a separate unit.
fn nutrition_rows(document: &Html) -> Vec<Nutrient> {
    let cell_selector = selector("td, th");
    document
        .select(&selector(NUTRITION_ROW_SELECTOR))
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&cell_selector).map(element_text).collect();
            if cells.len() < 2 {
                return None;
            }
            let (amount_cell, name_cell) = if leading_number(&cells[0]).is_some() {
                (&cells[0], &cells[1])
            } else {
                (&cells[1], &cells[0])
            };
            let amount = leading_number(amount_cell)?;
            if name_cell.is_empty() {
                return None;
            }
            Some(Nutrient {
                name: name_cell.clone(),
                amount,
                unit: String::new(),
            })
        })
        .collect()
}

/// Extract the leading numeric value from a cell like "9g" or "320".
fn leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}
