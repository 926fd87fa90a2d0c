use hearth_world::item::ItemStack;
use rayon::prelude::*;

use super::FurnaceRecipe;

/// Registered recipes, looked up in insertion order.
#[derive(Debug, Default, Clone)]
pub struct RecipeRegistry {
    furnace: Vec<FurnaceRecipe>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recipe: FurnaceRecipe) {
        log::debug!(
            "Registered furnace recipe for {}",
            recipe.input().material
        );
        self.furnace.push(recipe);
    }

    pub fn len(&self) -> usize {
        self.furnace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.furnace.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnaceRecipe> {
        self.furnace.iter()
    }

    /// The first registered recipe smelting `input`'s material.
    pub fn smelting_for(&self, input: &ItemStack) -> Option<&FurnaceRecipe> {
        if input.is_empty() {
            return None;
        }
        self.furnace
            .par_iter()
            .find_first(|recipe| recipe.input().material == input.material)
    }
}

#[cfg(test)]
mod test {
    use hearth_data::Material;
    use hearth_world::item::ItemStack;

    use super::RecipeRegistry;
    use crate::recipes::{FurnaceRecipe, Recipe};

    #[test]
    fn first_registered_recipe_wins() {
        let mut registry = RecipeRegistry::new();
        assert!(registry.is_empty());

        registry.add(FurnaceRecipe::new(&ItemStack::new(1, Material::Glass), Material::Sand));
        registry.add(FurnaceRecipe::new(
            &ItemStack::new(1, Material::CookedBeef),
            Material::Beef,
        ));
        registry.add(FurnaceRecipe::new(&ItemStack::new(2, Material::Glass), Material::Sand));
        assert_eq!(registry.len(), 3);

        let recipe = registry
            .smelting_for(&ItemStack::new(12, Material::Sand))
            .unwrap();
        assert_eq!(recipe.result(), ItemStack::new(1, Material::Glass));

        assert_eq!(
            registry
                .smelting_for(&ItemStack::new(1, Material::Beef))
                .map(Recipe::result),
            Some(ItemStack::new(1, Material::CookedBeef))
        );
        assert!(registry.smelting_for(&ItemStack::new(1, Material::Stone)).is_none());
        assert!(registry.smelting_for(&ItemStack::EMPTY).is_none());
        assert_eq!(registry.iter().count(), 3);
    }
}
