use hearth_data::{InventoryType, Material};
use hearth_world::{HumanEntity, Location};
use uuid::Uuid;

use crate::{Inventory, InventoryError, SharedSlotStore, SlotStore};

/// The block or entity an inventory belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryHolder {
    Player(HumanEntity),
    Block { material: Material, location: Location },
    Entity { uuid: Uuid, location: Location },
}

impl InventoryHolder {
    pub fn location(&self) -> Location {
        match self {
            Self::Player(player) => player.location.clone(),
            Self::Block { location, .. } | Self::Entity { location, .. } => location.clone(),
        }
    }
}

/// Largest custom chest-like inventory.
pub const MAX_CUSTOM_SIZE: usize = 54;

/// A generic inventory over one shared [`SlotStore`].
#[derive(Debug)]
pub struct InventoryView {
    store: SharedSlotStore,
    inventory_type: InventoryType,
    title: String,
    holder: Option<InventoryHolder>,
    viewers: Vec<HumanEntity>,
}

impl InventoryView {
    /// An inventory with the default size and title of `inventory_type`.
    pub fn new(inventory_type: InventoryType, holder: Option<InventoryHolder>) -> Self {
        Self::from_store(
            SlotStore::new(inventory_type.default_size()).shared(),
            inventory_type,
            inventory_type.default_title(),
            holder,
        )
    }

    /// A chest inventory with a custom size, which has to be a multiple of 9 up to 54.
    pub fn with_size(
        holder: Option<InventoryHolder>,
        size: usize,
        title: impl Into<String>,
    ) -> Result<Self, InventoryError> {
        if size == 0 || size % 9 != 0 || size > MAX_CUSTOM_SIZE {
            return Err(InventoryError::InvalidArgument(format!(
                "Size for custom inventory must be a multiple of 9 between 9 and {MAX_CUSTOM_SIZE}, got {size}"
            )));
        }
        Ok(Self::from_store(
            SlotStore::new(size).shared(),
            InventoryType::Chest,
            title,
            holder,
        ))
    }

    /// Wraps a store owned by the caller. Writes through this view are visible
    /// to every other handle on the store.
    pub fn from_store(
        store: SharedSlotStore,
        inventory_type: InventoryType,
        title: impl Into<String>,
        holder: Option<InventoryHolder>,
    ) -> Self {
        Self {
            store,
            inventory_type,
            title: title.into(),
            holder,
            viewers: Vec::new(),
        }
    }
}

impl Inventory for InventoryView {
    fn store(&self) -> &SharedSlotStore {
        &self.store
    }

    fn inventory_type(&self) -> InventoryType {
        self.inventory_type
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn holder(&self) -> Option<InventoryHolder> {
        self.holder.clone()
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
