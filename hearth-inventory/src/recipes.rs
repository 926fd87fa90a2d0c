use hearth_world::item::ItemStack;

mod furnace;
mod registry;

pub use furnace::FurnaceRecipe;
pub use registry::RecipeRegistry;

/// Anything that produces an item.
pub trait Recipe {
    /// A copy of the item this recipe produces.
    fn result(&self) -> ItemStack;
}
