//! Reward policy: the fixed game-balance tables.
//!
//! Every constant here is contractual: sessions, rolls and the inventory
//! preview all read from the same tables, so changing a value rebalances
//! the whole game.

use crate::recipe::{Difficulty, Recipe};

// Immediate roll awards
pub const ROLL_CRIT_FAIL_XP: u64 = 10;
pub const ROLL_CRIT_SUCCESS_XP: u64 = 100;
pub const ROLL_NORMAL_XP: u64 = 50;

// Cooking session awards
pub const INGREDIENT_CHECK_XP: u64 = 15;
pub const STEP_COMPLETE_XP: u64 = 250;
pub const VICTORY_XP: u64 = 500;

// Critical-recipe gold payouts
pub const CRIT_FAIL_GOLD: u64 = 5;
pub const CRIT_SUCCESS_GOLD: u64 = 200;

// One-shot bonuses
pub const AUTHORED_RECIPE_XP: u64 = 150;
pub const AUTHORED_RECIPE_GOLD: u64 = 20;
pub const PLAYLIST_LINK_XP: u64 = 50;
pub const PLAYLIST_LINK_GOLD: u64 = 10;

/// Gold payout for finishing a recipe: pity gold on a critical fail, the
/// jackpot on a critical success, otherwise keyed to difficulty.
pub fn gold_for(recipe: &Recipe) -> u64 {
    if recipe.is_critical_fail {
        return CRIT_FAIL_GOLD;
    }
    if recipe.is_critical_success {
        return CRIT_SUCCESS_GOLD;
    }
    match recipe.difficulty {
        Difficulty::Cantrip => 30,
        Difficulty::Level1 => 50,
        Difficulty::Level3 => 100,
        Difficulty::Level9 => 150,
    }
}

/// Headline XP value shown on inventory cards for a difficulty tier.
pub fn xp_for(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::Cantrip => 50,
        Difficulty::Level1 => 100,
        Difficulty::Level3 => 200,
        Difficulty::Level9 => 500,
    }
}

/// Maps a provider category label to an RPG stat bonus.
pub fn stat_bonus_for_category(category: &str) -> &'static str {
    match category {
        "Beef" | "Lamb" | "Pork" => "+3 STR",
        "Chicken" => "+3 DEX",
        "Seafood" => "+4 DEX",
        "Vegetarian" => "+3 WIS",
        "Vegan" => "+4 WIS",
        "Starter" => "+2 WIS",
        "Dessert" => "+3 CHA",
        "Breakfast" => "+2 CON",
        "Pasta" => "+2 CON",
        "Side" => "+1 INT",
        "Miscellaneous" => "+2 INT",
        _ => "+2 CON",
    }
}

/// Maps an ingredient count to a difficulty tier.
pub fn difficulty_for_ingredient_count(count: usize) -> Difficulty {
    if count <= 5 {
        Difficulty::Level1
    } else if count <= 10 {
        Difficulty::Level3
    } else {
        Difficulty::Level9
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    fn plain_recipe(difficulty: Difficulty) -> Recipe {
        Recipe {
            id: "t".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            ingredients: vec![Ingredient::new("Sel", "QS")],
            instructions: vec!["Saler.".to_string()],
            prep_time: "30 min".to_string(),
            difficulty,
            stat_bonus: "+2 CON".to_string(),
            image_url: None,
            is_critical_success: false,
            is_critical_fail: false,
        }
    }

    #[test]
    fn test_gold_table_by_difficulty() {
        assert_eq!(gold_for(&plain_recipe(Difficulty::Cantrip)), 30);
        assert_eq!(gold_for(&plain_recipe(Difficulty::Level1)), 50);
        assert_eq!(gold_for(&plain_recipe(Difficulty::Level3)), 100);
        assert_eq!(gold_for(&plain_recipe(Difficulty::Level9)), 150);
    }

    #[test]
    fn test_gold_for_critical_flags() {
        let mut fail = plain_recipe(Difficulty::Level9);
        fail.is_critical_fail = true;
        assert_eq!(gold_for(&fail), 5);

        let mut success = plain_recipe(Difficulty::Cantrip);
        success.is_critical_success = true;
        assert_eq!(gold_for(&success), 200);
    }

    #[test]
    fn test_xp_table() {
        assert_eq!(xp_for(Difficulty::Cantrip), 50);
        assert_eq!(xp_for(Difficulty::Level1), 100);
        assert_eq!(xp_for(Difficulty::Level3), 200);
        assert_eq!(xp_for(Difficulty::Level9), 500);
    }

    #[test]
    fn test_stat_bonus_table() {
        assert_eq!(stat_bonus_for_category("Beef"), "+3 STR");
        assert_eq!(stat_bonus_for_category("Lamb"), "+3 STR");
        assert_eq!(stat_bonus_for_category("Pork"), "+3 STR");
        assert_eq!(stat_bonus_for_category("Chicken"), "+3 DEX");
        assert_eq!(stat_bonus_for_category("Seafood"), "+4 DEX");
        assert_eq!(stat_bonus_for_category("Vegetarian"), "+3 WIS");
        assert_eq!(stat_bonus_for_category("Vegan"), "+4 WIS");
        assert_eq!(stat_bonus_for_category("Starter"), "+2 WIS");
        assert_eq!(stat_bonus_for_category("Dessert"), "+3 CHA");
        assert_eq!(stat_bonus_for_category("Breakfast"), "+2 CON");
        assert_eq!(stat_bonus_for_category("Pasta"), "+2 CON");
        assert_eq!(stat_bonus_for_category("Side"), "+1 INT");
        assert_eq!(stat_bonus_for_category("Miscellaneous"), "+2 INT");
    }

    #[test]
    fn test_stat_bonus_unknown_category_falls_back() {
        assert_eq!(stat_bonus_for_category("Goat"), "+2 CON");
        assert_eq!(stat_bonus_for_category(""), "+2 CON");
    }

    #[test]
    fn test_difficulty_from_ingredient_count() {
        assert_eq!(difficulty_for_ingredient_count(1), Difficulty::Level1);
        assert_eq!(difficulty_for_ingredient_count(5), Difficulty::Level1);
        assert_eq!(difficulty_for_ingredient_count(6), Difficulty::Level3);
        assert_eq!(difficulty_for_ingredient_count(10), Difficulty::Level3);
        assert_eq!(difficulty_for_ingredient_count(11), Difficulty::Level9);
        assert_eq!(difficulty_for_ingredient_count(20), Difficulty::Level9);
    }
}
