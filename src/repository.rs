//! In-memory recipe collection.
//!
//! Holds every recipe known to the running game: provider batches merged in
//! as they arrive, plus user-authored entries. Uniqueness is enforced on the
//! recipe id at every merge; insertion order is kept for stable display.
//! There is no deletion and nothing is persisted.

use rand::Rng;

use crate::recipe::Recipe;

#[derive(Debug, Clone, Default)]
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
}

impl RecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends only recipes whose id is not already present. Returns how
    /// many were actually added, so callers can report the delta.
    ///
    /// Merging is idempotent and, with respect to the final id set,
    /// commutative, so concurrent provider batches may land in any order.
    pub fn merge(&mut self, batch: Vec<Recipe>) -> usize {
        let mut added = 0;
        for recipe in batch {
            if self.get(&recipe.id).is_none() {
                self.recipes.push(recipe);
                added += 1;
            }
        }
        added
    }

    /// Unconditional append for user-authored recipes. The caller is
    /// responsible for supplying a fresh unique id (`fresh_recipe_id`).
    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring match against the title or any ingredient
    /// name. An empty term matches everything. The caller paginates.
    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        let needle = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.ingredients
                        .iter()
                        .any(|i| i.name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Uniform random pick. None when the collection is empty.
    pub fn pick_random(&self, rng: &mut impl Rng) -> Option<&Recipe> {
        if self.recipes.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.recipes.len());
        Some(&self.recipes[index])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Difficulty, Ingredient};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn recipe(id: &str, title: &str, ingredient: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            ingredients: vec![Ingredient::new(ingredient, "1")],
            instructions: vec!["Mélanger.".to_string()],
            prep_time: "30 min".to_string(),
            difficulty: Difficulty::Level1,
            stat_bonus: "+2 CON".to_string(),
            image_url: None,
            is_critical_success: false,
            is_critical_fail: false,
        }
    }

    #[test]
    fn test_merge_deduplicates_by_id() {
        let mut repo = RecipeRepository::new();
        let added = repo.merge(vec![
            recipe("1", "Ratatouille", "Aubergine"),
            recipe("2", "Gratin", "Pomme de terre"),
        ]);
        assert_eq!(added, 2);

        let added = repo.merge(vec![
            recipe("2", "Gratin encore", "Fromage"),
            recipe("3", "Tarte", "Pomme"),
        ]);
        assert_eq!(added, 1);
        assert_eq!(repo.len(), 3);
        // First write wins for a given id
        assert_eq!(repo.get("2").unwrap().title, "Gratin");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let batch = vec![
            recipe("1", "Ratatouille", "Aubergine"),
            recipe("2", "Gratin", "Pomme de terre"),
        ];
        let mut repo = RecipeRepository::new();
        repo.merge(batch.clone());
        let added_again = repo.merge(batch);
        assert_eq!(added_again, 0);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_merge_commutes_on_id_sets() {
        let batch_a = vec![
            recipe("1", "Ratatouille", "Aubergine"),
            recipe("2", "Gratin", "Pomme de terre"),
        ];
        let batch_b = vec![
            recipe("2", "Gratin", "Pomme de terre"),
            recipe("3", "Tarte", "Pomme"),
        ];

        let mut ab = RecipeRepository::new();
        ab.merge(batch_a.clone());
        ab.merge(batch_b.clone());

        let mut ba = RecipeRepository::new();
        ba.merge(batch_b);
        ba.merge(batch_a);

        let mut ids_ab: Vec<String> = ab.iter().map(|r| r.id.clone()).collect();
        let mut ids_ba: Vec<String> = ba.iter().map(|r| r.id.clone()).collect();
        ids_ab.sort();
        ids_ba.sort();
        assert_eq!(ids_ab, ids_ba);
    }

    #[test]
    fn test_add_is_unconditional() {
        let mut repo = RecipeRepository::new();
        repo.add(recipe("custom-1", "Ma soupe", "Carotte"));
        repo.add(recipe("custom-2", "Ma soupe", "Carotte"));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_search_matches_title_and_ingredient() {
        let mut repo = RecipeRepository::new();
        repo.merge(vec![
            recipe("1", "Poulet Basquaise", "Poulet"),
            recipe("2", "Gratin Dauphinois", "Pomme de terre"),
            recipe("3", "Salade", "poulet fumé"),
        ]);

        let hits = repo.search("POULET");
        assert_eq!(hits.len(), 2);

        let hits = repo.search("dauphinois");
        assert_eq!(hits.len(), 1);

        assert!(repo.search("dragon").is_empty());
    }

    #[test]
    fn test_search_empty_term_matches_everything() {
        let mut repo = RecipeRepository::new();
        repo.merge(vec![recipe("1", "A", "a"), recipe("2", "B", "b")]);
        assert_eq!(repo.search("").len(), 2);
    }

    #[test]
    fn test_pick_random_empty_is_none() {
        let repo = RecipeRepository::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(repo.pick_random(&mut rng).is_none());
    }

    #[test]
    fn test_pick_random_draws_from_collection() {
        let mut repo = RecipeRepository::new();
        repo.merge(vec![recipe("1", "A", "a"), recipe("2", "B", "b")]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            let picked = repo.pick_random(&mut rng).unwrap();
            assert!(picked.id == "1" || picked.id == "2");
        }
    }
}
