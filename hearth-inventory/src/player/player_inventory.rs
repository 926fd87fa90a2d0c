use hearth_data::InventoryType;
use hearth_world::HumanEntity;
use uuid::Uuid;

use super::{HOTBAR_SIZE, PlayerInventory, SIZE, STORAGE_SIZE};
use crate::{Inventory, InventoryError, InventoryHolder, SharedSlotStore, SlotStore};

#[derive(Debug)]
pub struct PlayerInventoryView {
    store: SharedSlotStore,
    owner: HumanEntity,
    viewers: Vec<HumanEntity>,
    /// The hotbar's current selected slot.
    held_slot: usize,
}

impl PlayerInventoryView {
    pub fn new(owner: HumanEntity) -> Self {
        Self::from_store(SlotStore::with_storage(SIZE, STORAGE_SIZE).shared(), owner)
    }

    /// Wraps an existing store, which has to be laid out like a player inventory.
    pub fn from_store(store: SharedSlotStore, owner: HumanEntity) -> Self {
        Self {
            store,
            viewers: vec![owner.clone()],
            owner,
            held_slot: 0,
        }
    }
}

impl Inventory for PlayerInventoryView {
    fn store(&self) -> &SharedSlotStore {
        &self.store
    }

    fn inventory_type(&self) -> InventoryType {
        InventoryType::Player
    }

    fn title(&self) -> &str {
        InventoryType::Player.default_title()
    }

    fn holder(&self) -> Option<InventoryHolder> {
        Some(InventoryHolder::Player(self.owner.clone()))
    }

    fn viewers(&self) -> &[HumanEntity] {
        &self.viewers
    }

    fn add_viewer(&mut self, viewer: HumanEntity) {
        if !self.viewers.iter().any(|known| known.uuid == viewer.uuid) {
            self.viewers.push(viewer);
        }
    }

    fn remove_viewer(&mut self, uuid: &Uuid) -> Option<HumanEntity> {
        let index = self.viewers.iter().position(|viewer| viewer.uuid == *uuid)?;
        Some(self.viewers.remove(index))
    }
}

impl PlayerInventory for PlayerInventoryView {
    fn owner(&self) -> &HumanEntity {
        &self.owner
    }

    fn held_item_slot(&self) -> usize {
        self.held_slot
    }

    fn set_held_item_slot(&mut self, slot: i32) -> Result<(), InventoryError> {
        match usize::try_from(slot) {
            Ok(held) if held < HOTBAR_SIZE => {
                self.held_slot = held;
                Ok(())
            }
            _ => Err(InventoryError::HeldSlotOutOfRange(slot)),
        }
    }
}
