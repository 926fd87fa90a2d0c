use hearth_data::Material;

mod material_data;
mod meta;

pub use material_data::MaterialData;
pub use meta::ItemMeta;

/// A quantity of one material, optionally carrying meta.
///
/// Equality is exact: material, count and meta all have to match. Use
/// [`ItemStack::is_similar`] to ignore the count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub item_count: u32,
    pub material: Material,
    meta: Option<ItemMeta>,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item_count: 0,
        material: Material::Air,
        meta: None,
    };

    pub fn new(item_count: u32, material: Material) -> Self {
        Self {
            item_count,
            material,
            meta: None,
        }
    }

    /// Attaches `meta`. Empty meta is stored as no meta so both compare equal.
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.set_meta(Some(meta));
        self
    }

    pub fn set_meta(&mut self, meta: Option<ItemMeta>) {
        self.meta = meta.filter(|meta| !meta.is_empty());
    }

    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.material.is_air()
    }

    /// Whether both stacks could be merged into one slot, ignoring count.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material && self.meta == other.meta
    }

    pub fn copy_with_count(&self, item_count: u32) -> Self {
        let mut stack = self.clone();
        stack.item_count = item_count;
        stack
    }

    pub fn set_count(&mut self, item_count: u32) {
        self.item_count = item_count;
    }

    pub fn increment(&mut self, amount: u32) {
        self.item_count = self.item_count.saturating_add(amount);
    }

    pub fn decrement(&mut self, amount: u32) {
        self.item_count = self.item_count.saturating_sub(amount);
    }

    /// Takes up to `amount` items off this stack and returns them as a new stack.
    pub fn split(&mut self, amount: u32) -> Self {
        let taken = amount.min(self.item_count);
        let stack = self.copy_with_count(taken);
        self.decrement(taken);
        stack
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}
