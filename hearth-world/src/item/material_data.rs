use hearth_data::Material;

use super::ItemStack;

/// Legacy `(material, subtype)` pair. The subtype carries no behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialData {
    pub item_type: Material,
    pub data: u8,
}

impl MaterialData {
    pub const fn new(item_type: Material, data: u8) -> Self {
        Self { item_type, data }
    }

    pub fn to_item_stack(&self, item_count: u32) -> ItemStack {
        ItemStack::new(item_count, self.item_type)
    }
}

impl From<Material> for MaterialData {
    fn from(item_type: Material) -> Self {
        Self::new(item_type, 0)
    }
}
