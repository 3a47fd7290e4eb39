//! Top-level view switching and the kitchen recipe handoff.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// The four mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Home,
    Kitchen,
    Tavern,
    Inventory,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "QG",
            View::Kitchen => "Dice Kitchen",
            View::Tavern => "Sonic Tavern",
            View::Inventory => "Grimoire",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    pub view: View,
    /// A recipe picked directly from the inventory, waiting to be taken by
    /// the kitchen. Cleared whenever the player lands anywhere else so a
    /// stale selection cannot resurface on a later kitchen visit.
    pending_recipe: Option<Recipe>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            view: View::Home,
            pending_recipe: None,
        }
    }

    pub fn change_view(&mut self, target: View) {
        self.view = target;
        if target != View::Kitchen {
            self.pending_recipe = None;
        }
    }

    /// Stores the manual selection and jumps to the kitchen.
    pub fn select_recipe(&mut self, recipe: Recipe) {
        self.pending_recipe = Some(recipe);
        self.view = View::Kitchen;
    }

    /// Hands the pending selection to the kitchen, at most once.
    pub fn take_pending(&mut self) -> Option<Recipe> {
        self.pending_recipe.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending_recipe.is_some()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::critical_success_recipe;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.view, View::Home);
        assert!(!nav.has_pending());
    }

    #[test]
    fn test_select_recipe_forces_kitchen() {
        let mut nav = Navigator::new();
        nav.select_recipe(critical_success_recipe());
        assert_eq!(nav.view, View::Kitchen);
        assert!(nav.has_pending());
    }

    #[test]
    fn test_leaving_kitchen_clears_pending() {
        let mut nav = Navigator::new();
        nav.select_recipe(critical_success_recipe());
        nav.change_view(View::Tavern);
        nav.change_view(View::Kitchen);
        assert!(nav.take_pending().is_none());
    }

    #[test]
    fn test_pending_survives_direct_kitchen_change() {
        let mut nav = Navigator::new();
        nav.select_recipe(critical_success_recipe());
        nav.change_view(View::Kitchen);
        assert!(nav.has_pending());
    }

    #[test]
    fn test_take_pending_is_one_shot() {
        let mut nav = Navigator::new();
        nav.select_recipe(critical_success_recipe());
        assert!(nav.take_pending().is_some());
        assert!(nav.take_pending().is_none());
    }
}
