use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct InventoryConfig {
    /// The max stack size reported by inventories with no override set.
    pub default_max_stack_size: u32,
    /// Overrides above this still apply but are logged, since the host may clip
    /// such stacks when saving.
    pub max_stack_size_limit: u32,
    /// Log a warning whenever a max stack size override is set, since overrides are not persisted.
    pub warn_on_max_stack_override: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            default_max_stack_size: 64,
            max_stack_size_limit: 127,
            warn_on_max_stack_override: true,
        }
    }
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_max_stack_size == 0 {
            return Err("default_max_stack_size must be at least 1".to_string());
        }
        if self.default_max_stack_size > self.max_stack_size_limit {
            return Err(format!(
                "default_max_stack_size ({}) must not exceed max_stack_size_limit ({})",
                self.default_max_stack_size, self.max_stack_size_limit
            ));
        }
        Ok(())
    }
}
