//! Recipe data model and user-authored recipe drafts.
//!
//! Recipes come from three sources: the remote provider (see `provider`),
//! the fixed critical-roll literals (see `roll`), and drafts typed in by the
//! player. All three converge on the same `Recipe` shape.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spell-level difficulty tiers. Reward tables in `rewards` key off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Cantrip (Très Facile)")]
    Cantrip,
    #[serde(rename = "Niveau 1 (Facile)")]
    Level1,
    #[serde(rename = "Niveau 3 (Moyen)")]
    Level3,
    #[serde(rename = "Niveau 9 (Héroïque)")]
    Level9,
}

impl Difficulty {
    /// All tiers in ascending order
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Cantrip,
        Difficulty::Level1,
        Difficulty::Level3,
        Difficulty::Level9,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Cantrip => "Cantrip (Très Facile)",
            Difficulty::Level1 => "Niveau 1 (Facile)",
            Difficulty::Level3 => "Niveau 3 (Moyen)",
            Difficulty::Level9 => "Niveau 9 (Héroïque)",
        }
    }

    pub fn parse(label: &str) -> Option<Difficulty> {
        Difficulty::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Next tier, wrapping. Used by the authoring form's tier selector.
    pub fn cycle(&self) -> Difficulty {
        match self {
            Difficulty::Cantrip => Difficulty::Level1,
            Difficulty::Level1 => Difficulty::Level3,
            Difficulty::Level3 => Difficulty::Level9,
            Difficulty::Level9 => Difficulty::Cantrip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-form quantity label ("500g", "Beaucoup", "QS"), never parsed
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// A recipe scroll.
///
/// Invariants: `instructions` and `ingredients` are non-empty (every source
/// substitutes a fallback before constructing), and at most one of the two
/// critical flags is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// "Casting time" label, e.g. "30 min"
    pub prep_time: String,
    pub difficulty: Difficulty,
    /// e.g. "+3 STR"
    pub stat_bonus: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_critical_success: bool,
    #[serde(default)]
    pub is_critical_fail: bool,
}

impl Recipe {
    pub fn is_critical(&self) -> bool {
        self.is_critical_success || self.is_critical_fail
    }
}

// Fallback substitutions for sparse drafts
const DRAFT_DESCRIPTION_FALLBACK: &str = "Une recette secrète de famille.";
const DRAFT_PREP_TIME_FALLBACK: &str = "30 min";
const DRAFT_INSTRUCTION_FALLBACK: &str = "Cuisiner avec le coeur.";
const DRAFT_STAT_BONUS: &str = "+1 Creativity";

/// Parses one free-text ingredient line: first token is the quantity, the
/// remainder is the name. A single-token line is all name, quantity "1".
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let mut parts = line.trim().split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        Ingredient::new(first, "1")
    } else {
        Ingredient::new(rest.join(" "), first)
    }
}

/// Parses an ingredient block, one ingredient per non-blank line.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Parses an instruction block, one step per non-blank line.
pub fn parse_instructions(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Generates a collision-resistant id for a user-authored recipe.
pub fn fresh_recipe_id(rng: &mut impl Rng) -> String {
    format!(
        "custom-{}-{:04x}",
        Utc::now().timestamp_millis(),
        rng.gen::<u16>()
    )
}

/// A recipe being typed into the authoring form. Free-text blocks are kept
/// raw until `build`, so the player can edit them freely.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub difficulty: Option<Difficulty>,
    pub ingredients_text: String,
    pub instructions_text: String,
}

impl RecipeDraft {
    /// Required-field validation, mirroring the form's required markers.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Recipe_Name is required".to_string());
        }
        if self.ingredients_text.is_empty() {
            return Err("Ingredients_List is required".to_string());
        }
        if self.instructions_text.is_empty() {
            return Err("Execution_Steps is required".to_string());
        }
        Ok(())
    }

    /// Builds the final recipe, substituting fallbacks for anything sparse.
    pub fn build(&self, id: String) -> Recipe {
        let mut ingredients = parse_ingredients(&self.ingredients_text);
        if ingredients.is_empty() {
            ingredients.push(Ingredient::new("Magie", "1"));
        }
        let mut instructions = parse_instructions(&self.instructions_text);
        if instructions.is_empty() {
            instructions.push(DRAFT_INSTRUCTION_FALLBACK.to_string());
        }

        Recipe {
            id,
            title: self.title.trim().to_string(),
            description: if self.description.trim().is_empty() {
                DRAFT_DESCRIPTION_FALLBACK.to_string()
            } else {
                self.description.trim().to_string()
            },
            ingredients,
            instructions,
            prep_time: if self.prep_time.trim().is_empty() {
                DRAFT_PREP_TIME_FALLBACK.to_string()
            } else {
                self.prep_time.trim().to_string()
            },
            difficulty: self.difficulty.unwrap_or(Difficulty::Level1),
            stat_bonus: DRAFT_STAT_BONUS.to_string(),
            image_url: None,
            is_critical_success: false,
            is_critical_fail: false,
        }
    }
}
