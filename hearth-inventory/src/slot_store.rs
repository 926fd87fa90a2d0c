use std::{cell::RefCell, rc::Rc};

use hearth_config::advanced_config;
use hearth_data::Material;
use hearth_world::item::ItemStack;

use crate::InventoryError;

/// Handle shared between an inventory's holder, its views and their cursors.
pub type SharedSlotStore = Rc<RefCell<SlotStore>>;

/// Fixed length array of slots.
///
/// The first `storage_size` slots form the storage section, the part generic
/// add/remove/contains matching works on. Placement operations keep every
/// occupied storage slot between 1 and [`SlotStore::effective_max_stack_size`].
/// [`SlotStore::set`] is the exception, it writes whatever it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotStore {
    slots: Vec<Option<ItemStack>>,
    storage_size: usize,
    max_stack_size_override: Option<u32>,
}

impl SlotStore {
    pub fn new(size: usize) -> Self {
        Self::with_storage(size, size)
    }

    /// A store whose storage section is shorter than the whole store.
    /// `storage_size` is capped at `size`.
    pub fn with_storage(size: usize, storage_size: usize) -> Self {
        Self {
            slots: vec![None; size],
            storage_size: storage_size.min(size),
            max_stack_size_override: None,
        }
    }

    pub fn shared(self) -> SharedSlotStore {
        Rc::new(RefCell::new(self))
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn storage_size(&self) -> usize {
        self.storage_size
    }

    pub fn get(&self, index: usize) -> Result<Option<ItemStack>, InventoryError> {
        self.slots
            .get(index)
            .cloned()
            .ok_or_else(|| InventoryError::out_of_range(index, self.size()))
    }

    /// Replaces the slot without merging. An empty stack clears it.
    pub fn set(&mut self, index: usize, stack: Option<ItemStack>) -> Result<(), InventoryError> {
        let size = self.size();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| InventoryError::out_of_range(index, size))?;
        *slot = stack.filter(|stack| !stack.is_empty());
        Ok(())
    }

    /// Replaces every slot. Slots past the end of `items` become empty.
    pub fn replace_all(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        let size = self.size();
        Self::replace_range(&mut self.slots, items, size)
    }

    /// Replaces the storage section. Slots past the end of `items` become empty.
    pub fn replace_storage(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        let storage_size = self.storage_size;
        Self::replace_range(&mut self.slots[..storage_size], items, storage_size)
    }

    fn replace_range(
        slots: &mut [Option<ItemStack>],
        items: &[Option<ItemStack>],
        capacity: usize,
    ) -> Result<(), InventoryError> {
        if items.len() > capacity {
            return Err(InventoryError::InvalidArgument(format!(
                "Got {} items but only {capacity} slots are available",
                items.len()
            )));
        }
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = items
                .get(index)
                .cloned()
                .flatten()
                .filter(|stack| !stack.is_empty());
        }
        Ok(())
    }

    pub fn contents(&self) -> Vec<Option<ItemStack>> {
        self.slots.clone()
    }

    pub fn storage_contents(&self) -> Vec<Option<ItemStack>> {
        self.storage_slots().to_vec()
    }

    pub(crate) fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<ItemStack>] {
        &mut self.slots
    }

    pub(crate) fn storage_slots(&self) -> &[Option<ItemStack>] {
        &self.slots[..self.storage_size]
    }

    pub(crate) fn storage_slots_mut(&mut self) -> &mut [Option<ItemStack>] {
        &mut self.slots[..self.storage_size]
    }

    pub fn max_stack_size_override(&self) -> Option<u32> {
        self.max_stack_size_override
    }

    /// The max stack size reported to callers: the override if one is set,
    /// otherwise the configured default.
    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size_override
            .unwrap_or(advanced_config().inventory.default_max_stack_size)
    }

    /// Sets or removes the per-store override.
    ///
    /// The override is not guaranteed to be persisted by the host: it is not part
    /// of [`SlotStore::contents`] and saving may clip stacks above the configured
    /// limit. Setting one is logged as a warning unless disabled in the config.
    pub fn set_max_stack_size_override(&mut self, size: Option<u32>) -> Result<(), InventoryError> {
        if size == Some(0) {
            return Err(InventoryError::InvalidArgument(
                "Max stack size must be at least 1".to_string(),
            ));
        }

        let config = &advanced_config().inventory;
        if let Some(size) = size {
            if config.warn_on_max_stack_override {
                log::warn!(
                    "Max stack size overridden to {size}; this value is not guaranteed to be persisted, set it again before relying on it"
                );
            }
            if size > config.max_stack_size_limit {
                log::warn!(
                    "Max stack size {size} exceeds {}; stacks this large may be clipped when saved",
                    config.max_stack_size_limit
                );
            }
        }

        self.max_stack_size_override = size;
        Ok(())
    }

    /// The cap placement operations use for `material`: the override if one is set,
    /// otherwise the smaller of the material's cap and [`SlotStore::max_stack_size`].
    pub fn effective_max_stack_size(&self, material: Material) -> u32 {
        let cap = match self.max_stack_size_override {
            Some(size) => size,
            None => material.max_stack_size().min(self.max_stack_size()),
        };
        cap.max(1)
    }
}
