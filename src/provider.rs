//! TheMealDB recipe provider.
//!
//! Three query shapes: search by starting letter, single random draw, and
//! free-text search. Raw records carry up to 20 numbered ingredient/measure
//! field pairs and a free-text instruction blob; mapping turns them into
//! game recipes. Batch operations fan out onto background threads and join
//! all-or-nothing: one failed fetch discards the whole batch.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::thread;

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::recipe::{Ingredient, Recipe};
use crate::rewards::{difficulty_for_ingredient_count, stat_bonus_for_category};

pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Letters used to seed the grimoire on startup.
const STARTER_LETTERS: [char; 4] = ['a', 'b', 'c', 'p'];

/// Random draws issued per "data injection" request.
const RANDOM_BATCH_SIZE: usize = 10;

const INSTRUCTION_FALLBACK: &str = "Suivre votre intuition.";

/// Instruction lines at or under this many characters (trimmed) are
/// headings or noise in the source data and get dropped.
const MIN_INSTRUCTION_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    Http(String),
    MalformedResponse(String),
    WorkerPanicked,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(detail) => write!(f, "request failed: {}", detail),
            ProviderError::MalformedResponse(detail) => {
                write!(f, "malformed provider response: {}", detail)
            }
            ProviderError::WorkerPanicked => write!(f, "fetch worker panicked"),
        }
    }
}

impl Error for ProviderError {}

#[derive(Deserialize)]
struct MealsResponse {
    /// Null (not an empty array) when the query matched nothing.
    meals: Option<Vec<MealRecord>>,
}

/// One raw provider record. The numbered `strIngredientN`/`strMeasureN`
/// pairs land in `fields` via the flatten map.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl MealRecord {
    fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Walks the numbered pairs in order, keeping every non-blank ingredient.
/// A missing or blank measure becomes "QS" (quantité suffisante).
fn extract_ingredients(record: &MealRecord) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for i in 1..=20 {
        if let Some(name) = record.field(&format!("strIngredient{}", i)) {
            let quantity = record
                .field(&format!("strMeasure{}", i))
                .unwrap_or("QS");
            ingredients.push(Ingredient::new(name, quantity));
        }
    }
    ingredients
}

/// Splits the instruction blob on any line-break flavor and keeps the lines
/// long enough to be real steps. An empty result gets the fallback step.
fn extract_instructions(blob: Option<&str>) -> Vec<String> {
    let steps: Vec<String> = blob
        .unwrap_or_default()
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_INSTRUCTION_CHARS)
        .map(str::to_string)
        .collect();
    if steps.is_empty() {
        vec![INSTRUCTION_FALLBACK.to_string()]
    } else {
        steps
    }
}

/// Maps one provider record to a game recipe. `rng` only feeds the
/// flavor-text casting time.
pub fn map_meal(record: &MealRecord, rng: &mut impl Rng) -> Recipe {
    let ingredients = extract_ingredients(record);
    let instructions = extract_instructions(record.instructions.as_deref());
    let category = record.category.as_deref().unwrap_or("");
    let area = record.area.as_deref().unwrap_or("Inconnue");

    Recipe {
        id: record.id.clone(),
        // English titles kept for the authenticity of the scroll
        title: record.title.clone(),
        description: format!(
            "Une recette exotique venue de la région {}. (Scroll in Common Tongue)",
            area
        ),
        difficulty: difficulty_for_ingredient_count(ingredients.len()),
        stat_bonus: stat_bonus_for_category(category).to_string(),
        ingredients,
        instructions,
        prep_time: format!("{} min", rng.gen_range(20..60)),
        image_url: record.thumbnail.clone(),
        is_critical_success: false,
        is_critical_fail: false,
    }
}

/// Minimal query-string escaping for the free-text search parameter.
fn encode_query(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

fn get_meals(url: &str) -> Result<Vec<MealRecord>, ProviderError> {
    let response: MealsResponse = ureq::get(url)
        .set("User-Agent", "grimoire")
        .call()
        .map_err(|e| ProviderError::Http(e.to_string()))?
        .into_json()
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
    Ok(response.meals.unwrap_or_default())
}

fn map_all(records: Vec<MealRecord>) -> Vec<Recipe> {
    let mut rng = rand::thread_rng();
    records.iter().map(|r| map_meal(r, &mut rng)).collect()
}

/// Fetches every meal whose name starts with `letter`.
pub fn fetch_by_letter(letter: char) -> Result<Vec<Recipe>, ProviderError> {
    let records = get_meals(&format!("{}/search.php?f={}", MEALDB_BASE_URL, letter))?;
    Ok(map_all(records))
}

/// Fetches one random meal.
pub fn fetch_random() -> Result<Recipe, ProviderError> {
    let records = get_meals(&format!("{}/random.php", MEALDB_BASE_URL))?;
    let record = records.into_iter().next().ok_or_else(|| {
        ProviderError::MalformedResponse("random draw returned no meal".to_string())
    })?;
    let mut rng = rand::thread_rng();
    Ok(map_meal(&record, &mut rng))
}

/// Free-text search. Zero matches is an empty vec, not an error.
pub fn search_remote(query: &str) -> Result<Vec<Recipe>, ProviderError> {
    let records = get_meals(&format!(
        "{}/search.php?s={}",
        MEALDB_BASE_URL,
        encode_query(query.trim())
    ))?;
    Ok(map_all(records))
}

/// Joins a set of worker handles all-or-nothing: the first failure wins
/// and the partial results are discarded.
fn join_all(
    handles: Vec<thread::JoinHandle<Result<Vec<Recipe>, ProviderError>>>,
) -> Result<Vec<Recipe>, ProviderError> {
    let mut all = Vec::new();
    let mut first_error = None;
    for handle in handles {
        match handle.join() {
            Ok(Ok(batch)) => all.extend(batch),
            Ok(Err(e)) => first_error = first_error.or(Some(e)),
            Err(_) => first_error = first_error.or(Some(ProviderError::WorkerPanicked)),
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(all),
    }
}

/// Initial grimoire population: the four starter letters fetched
/// concurrently.
pub fn fetch_starter_batch() -> Result<Vec<Recipe>, ProviderError> {
    let handles: Vec<_> = STARTER_LETTERS
        .iter()
        .map(|&letter| thread::spawn(move || fetch_by_letter(letter)))
        .collect();
    join_all(handles)
}

/// Ten concurrent random draws, for the "random data injection" action.
pub fn fetch_random_batch() -> Result<Vec<Recipe>, ProviderError> {
    let handles: Vec<_> = (0..RANDOM_BATCH_SIZE)
        .map(|_| thread::spawn(|| fetch_random().map(|recipe| vec![recipe])))
        .collect();
    join_all(handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn record(value: Value) -> MealRecord {
        serde_json::from_value(value).unwrap()
    }

    fn sample_record() -> MealRecord {
        record(json!({
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strCategory": "Pasta",
            "strArea": "Italian",
            "strInstructions":
                "Bring a large pot of water to a boil.\r\nShort\r\nAdd the penne and cook until al dente.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/penne.jpg",
            "strIngredient1": "penne rigate",
            "strMeasure1": "1 pound",
            "strIngredient2": "olive oil",
            "strMeasure2": "",
            "strIngredient3": "",
            "strMeasure3": "1 tbsp",
            "strIngredient4": null,
        }))
    }

    #[test]
    fn test_map_meal_extracts_numbered_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let recipe = map_meal(&sample_record(), &mut rng);

        assert_eq!(recipe.id, "52771");
        assert_eq!(recipe.title, "Spicy Arrabiata Penne");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0], Ingredient::new("penne rigate", "1 pound"));
        // Blank measure falls back to QS; blank/null ingredients are skipped
        assert_eq!(recipe.ingredients[1], Ingredient::new("olive oil", "QS"));
    }

    #[test]
    fn test_map_meal_filters_short_instruction_lines() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let recipe = map_meal(&sample_record(), &mut rng);
        assert_eq!(
            recipe.instructions,
            vec![
                "Bring a large pot of water to a boil.".to_string(),
                "Add the penne and cook until al dente.".to_string(),
            ]
        );
    }

    #[test]
    fn test_map_meal_difficulty_and_stat_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let recipe = map_meal(&sample_record(), &mut rng);
        // 2 ingredients -> Level1; Pasta -> +2 CON
        assert_eq!(recipe.difficulty, Difficulty::Level1);
        assert_eq!(recipe.stat_bonus, "+2 CON");
        assert_eq!(
            recipe.description,
            "Une recette exotique venue de la région Italian. (Scroll in Common Tongue)"
        );
        assert!(recipe.image_url.is_some());
    }

    #[test]
    fn test_map_meal_prep_time_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let recipe = map_meal(&sample_record(), &mut rng);
            let minutes: u32 = recipe
                .prep_time
                .strip_suffix(" min")
                .unwrap()
                .parse()
                .unwrap();
            assert!((20..60).contains(&minutes));
        }
    }

    #[test]
    fn test_map_meal_instruction_fallback() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sparse = record(json!({
            "idMeal": "1",
            "strMeal": "Mystery",
            "strCategory": "Goat",
            "strArea": null,
            "strInstructions": "Cook it.\nStir.",
            "strMealThumb": null,
        }));
        let recipe = map_meal(&sparse, &mut rng);
        assert_eq!(recipe.instructions, vec!["Suivre votre intuition.".to_string()]);
        assert_eq!(recipe.stat_bonus, "+2 CON");
        assert!(recipe.description.contains("Inconnue"));
        assert!(recipe.image_url.is_none());
    }

    #[test]
    fn test_map_meal_twenty_pair_scan() {
        let mut meal = json!({
            "idMeal": "2",
            "strMeal": "Everything Stew",
            "strCategory": "Miscellaneous",
            "strArea": "Unknown",
            "strInstructions": "Put everything in the pot and simmer.",
            "strMealThumb": null,
        });
        for i in 1..=20 {
            meal[format!("strIngredient{}", i)] = json!(format!("Ingredient {}", i));
            meal[format!("strMeasure{}", i)] = json!("1");
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let recipe = map_meal(&record(meal), &mut rng);
        assert_eq!(recipe.ingredients.len(), 20);
        assert_eq!(recipe.difficulty, Difficulty::Level9);
    }

    #[test]
    fn test_meals_response_null_is_empty() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(response.meals.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("chicken soup"), "chicken%20soup");
        assert_eq!(encode_query("crème brûlée"), "cr%C3%A8me%20br%C3%BBl%C3%A9e");
        assert_eq!(encode_query("plain"), "plain");
    }
}
