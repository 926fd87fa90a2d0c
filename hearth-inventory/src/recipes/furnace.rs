use hearth_data::Material;
use hearth_world::item::{ItemStack, MaterialData};

use super::Recipe;
use crate::InventoryError;

/// Smelts one item of `ingredient` into `output`, granting `experience`.
///
/// Legacy `data` subtypes are accepted by the constructors and setters but do
/// not change the ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnaceRecipe {
    output: ItemStack,
    ingredient: ItemStack,
    experience: f32,
}

fn check_experience(experience: f32) -> Result<f32, InventoryError> {
    if experience.is_nan() || experience < 0.0 {
        return Err(InventoryError::InvalidArgument(format!(
            "Experience must be a non-negative number, got {experience}"
        )));
    }
    Ok(experience)
}

impl FurnaceRecipe {
    pub fn new(result: &ItemStack, source: Material) -> Self {
        Self {
            output: result.clone(),
            ingredient: ItemStack::new(1, source),
            experience: 0.0,
        }
    }

    pub fn from_material_data(result: &ItemStack, source: MaterialData) -> Self {
        Self {
            output: result.clone(),
            ingredient: source.to_item_stack(1),
            experience: 0.0,
        }
    }

    pub fn from_material_data_with_experience(
        result: &ItemStack,
        source: MaterialData,
        experience: f32,
    ) -> Result<Self, InventoryError> {
        let mut recipe = Self::from_material_data(result, source);
        recipe.set_experience(experience)?;
        Ok(recipe)
    }

    #[deprecated(note = "Magic value, use new")]
    pub fn new_legacy(result: &ItemStack, source: Material, _data: i32) -> Self {
        Self::new(result, source)
    }

    #[deprecated(note = "Magic value, use from_material_data_with_experience")]
    pub fn new_legacy_with_experience(
        result: &ItemStack,
        source: Material,
        _data: i32,
        experience: f32,
    ) -> Result<Self, InventoryError> {
        let mut recipe = Self::new(result, source);
        recipe.set_experience(experience)?;
        Ok(recipe)
    }

    pub fn set_input(&mut self, input: Material) -> &mut Self {
        self.ingredient = ItemStack::new(1, input);
        self
    }

    pub fn set_input_data(&mut self, input: MaterialData) -> &mut Self {
        self.ingredient = input.to_item_stack(1);
        self
    }

    #[deprecated(note = "Magic value, use set_input")]
    pub fn set_input_legacy(&mut self, input: Material, _data: i32) -> &mut Self {
        self.set_input(input)
    }

    pub fn input(&self) -> ItemStack {
        self.ingredient.clone()
    }

    pub fn set_experience(&mut self, experience: f32) -> Result<(), InventoryError> {
        self.experience = check_experience(experience)?;
        Ok(())
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }
}

impl Recipe for FurnaceRecipe {
    fn result(&self) -> ItemStack {
        self.output.clone()
    }
}
