//! The d20 roll engine.
//!
//! A roll draws 1-20 and decides which recipe the kitchen presents: a 1
//! summons the fixed critical-fail scroll, a 20 the critical-success feast,
//! anything else a uniform pick from the repository. Each outcome also
//! grants a flat XP award at roll time, separate from whatever the cooking
//! session earns later.

use std::error::Error;
use std::fmt;

use rand::Rng;

use crate::progress::{PlayerProgress, Reward};
use crate::recipe::{Difficulty, Ingredient, Recipe};
use crate::repository::RecipeRepository;
use crate::rewards::{ROLL_CRIT_FAIL_XP, ROLL_CRIT_SUCCESS_XP, ROLL_NORMAL_XP};

/// Where a presented recipe came from. Resolved to a concrete [`Recipe`]
/// only when the kitchen renders it or a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    /// A repository entry, by id.
    Normal(String),
    CriticalFail,
    CriticalSuccess,
}

impl RecipeSource {
    /// Looks the source up against the repository. `None` only if a normal
    /// id has no matching entry, which cannot happen for ids handed out by
    /// [`roll`] (the repository never deletes).
    pub fn resolve(&self, repo: &RecipeRepository) -> Option<Recipe> {
        match self {
            RecipeSource::Normal(id) => repo.get(id).cloned(),
            RecipeSource::CriticalFail => Some(critical_fail_recipe()),
            RecipeSource::CriticalSuccess => Some(critical_success_recipe()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    /// The raw d20 value, 1-20.
    pub value: u8,
    pub source: RecipeSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    /// The repository has nothing to draw from yet.
    NoRecipes,
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollError::NoRecipes => write!(f, "no recipes available to roll"),
        }
    }
}

impl Error for RollError {}

/// Rolls the d20 and applies the immediate XP award.
///
/// The repository must be non-empty: the guard runs before anything is
/// drawn or granted, so a failed roll leaves the ledger untouched.
pub fn roll(
    repo: &RecipeRepository,
    rng: &mut impl Rng,
    progress: &mut PlayerProgress,
) -> Result<DiceRoll, RollError> {
    if repo.is_empty() {
        return Err(RollError::NoRecipes);
    }

    let value: u8 = rng.gen_range(1..=20);
    let (source, xp) = match value {
        1 => (RecipeSource::CriticalFail, ROLL_CRIT_FAIL_XP),
        20 => (RecipeSource::CriticalSuccess, ROLL_CRIT_SUCCESS_XP),
        _ => {
            // Non-empty checked above
            let picked = repo
                .pick_random(rng)
                .map(|r| r.id.clone())
                .unwrap_or_default();
            (RecipeSource::Normal(picked), ROLL_NORMAL_XP)
        }
    };
    progress.apply(Reward::xp(xp));

    Ok(DiceRoll { value, source })
}

/// The scroll summoned on a natural 1.
pub fn critical_fail_recipe() -> Recipe {
    Recipe {
        id: "crit-fail".to_string(),
        title: "Invocation de la Pizza".to_string(),
        description: "Le sort a échoué. Vos réserves de mana sont épuisées. \
                      Faites appel à un mercenaire (Uber Eats)."
            .to_string(),
        ingredients: vec![
            Ingredient::new("Smartphone", "1"),
            Ingredient::new("Carte de crédit", "1"),
        ],
        instructions: vec![
            "Ouvrir l'application de livraison.".to_string(),
            "Commander une 4 fromages.".to_string(),
            "Attendre le PNJ livreur.".to_string(),
        ],
        prep_time: "30-45 min".to_string(),
        difficulty: Difficulty::Cantrip,
        stat_bonus: "+5 PV, -2 DEX".to_string(),
        image_url: None,
        is_critical_success: false,
        is_critical_fail: true,
    }
}

/// The feast summoned on a natural 20.
pub fn critical_success_recipe() -> Recipe {
    Recipe {
        id: "crit-success".to_string(),
        title: "Le Festin des Héros (Lasagnes Maison)".to_string(),
        description: "Un plat légendaire capable de restaurer tous les points \
                      de vie du groupe. Nécessite une grande concentration."
            .to_string(),
        ingredients: vec![
            Ingredient::new("Pâtes à lasagne", "500g"),
            Ingredient::new("Viande hachée", "600g"),
            Ingredient::new("Sauce tomate magique", "800g"),
            Ingredient::new("Béchamel", "1L"),
            Ingredient::new("Mozzarella", "Beaucoup"),
        ],
        instructions: vec![
            "Préchauffer le four (Le Creuset Infernal) à 200°C.".to_string(),
            "Faire revenir la viande avec les oignons.".to_string(),
            "Assembler les couches tel un architecte nain.".to_string(),
            "Cuire 40 minutes jusqu'à ce que le fromage bouillonne comme de la lave.".to_string(),
        ],
        prep_time: "1h 30min".to_string(),
        difficulty: Difficulty::Level9,
        stat_bonus: "+20 PV, +5 CHA".to_string(),
        image_url: None,
        is_critical_success: true,
        is_critical_fail: false,
    }
}
