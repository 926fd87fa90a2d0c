use std::collections::BTreeMap;

/// Extra per-stack data. Stacks only merge when their meta is equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub damage: u16,
    /// Enchantment key to level.
    pub enchantments: BTreeMap<String, u16>,
}

impl ItemMeta {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.lore.is_empty()
            && self.damage == 0
            && self.enchantments.is_empty()
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_enchantment(mut self, key: impl Into<String>, level: u16) -> Self {
        self.enchantments.insert(key.into(), level);
        self
    }
}
