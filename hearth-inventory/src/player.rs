use hearth_data::Material;
use hearth_world::{HumanEntity, item::ItemStack};

use crate::{Inventory, InventoryError};

mod player_inventory;

pub use player_inventory::PlayerInventoryView;

/*
    Inventory Layout:
    - 0-8: Hotbar
    - 9-35: Main Inventory
    - 36: Boots
    - 37: Leggings
    - 38: Chestplate
    - 39: Helmet
    - 40: Offhand
*/

pub const HOTBAR_SIZE: usize = 9;
pub const STORAGE_SIZE: usize = 36;
pub const SLOT_BOOTS: usize = 36;
pub const SLOT_LEGGINGS: usize = 37;
pub const SLOT_CHESTPLATE: usize = 38;
pub const SLOT_HELMET: usize = 39;
pub const SLOT_OFF_HAND: usize = 40;
pub const SIZE: usize = 41;

pub const ARMOR_SLOTS: std::ops::Range<usize> = SLOT_BOOTS..SLOT_OFF_HAND;
pub const EXTRA_SLOTS: std::ops::Range<usize> = SLOT_OFF_HAND..SIZE;

/// Slot-backed writes into a fixed section of the store. Missing trailing items
/// clear their slot.
fn replace_section<I: Inventory + ?Sized>(
    inventory: &mut I,
    section: std::ops::Range<usize>,
    items: &[Option<ItemStack>],
    what: &str,
) -> Result<(), InventoryError> {
    if items.len() > section.len() {
        return Err(InventoryError::InvalidArgument(format!(
            "Expected at most {} {what} items, got {}",
            section.len(),
            items.len()
        )));
    }
    for (offset, slot) in section.enumerate() {
        inventory.set_item(slot, items.get(offset).cloned().flatten())?;
    }
    Ok(())
}

fn section_contents<I: Inventory + ?Sized>(
    inventory: &I,
    section: std::ops::Range<usize>,
) -> Vec<Option<ItemStack>> {
    section
        .filter_map(|slot| inventory.get_item(slot).ok())
        .collect()
}

/// The inventory of a player: storage, armor, off hand and the held hotbar slot.
pub trait PlayerInventory: Inventory {
    fn owner(&self) -> &HumanEntity;

    /// Index of the selected hotbar slot, between 0 and 8.
    fn held_item_slot(&self) -> usize;

    fn set_held_item_slot(&mut self, slot: i32) -> Result<(), InventoryError>;

    /// Boots, leggings, chestplate and helmet, in that order.
    fn armor_contents(&self) -> Vec<Option<ItemStack>> {
        section_contents(self, ARMOR_SLOTS)
    }

    fn set_armor_contents(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        replace_section(self, ARMOR_SLOTS, items, "armor")
    }

    /// Slots that are neither storage nor armor, currently only the off hand.
    fn extra_contents(&self) -> Vec<Option<ItemStack>> {
        section_contents(self, EXTRA_SLOTS)
    }

    fn set_extra_contents(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        replace_section(self, EXTRA_SLOTS, items, "extra")
    }

    fn helmet(&self) -> Option<ItemStack> {
        self.get_item(SLOT_HELMET).ok().flatten()
    }

    fn set_helmet(&mut self, helmet: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item(SLOT_HELMET, helmet)
    }

    fn chestplate(&self) -> Option<ItemStack> {
        self.get_item(SLOT_CHESTPLATE).ok().flatten()
    }

    fn set_chestplate(&mut self, chestplate: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item(SLOT_CHESTPLATE, chestplate)
    }

    fn leggings(&self) -> Option<ItemStack> {
        self.get_item(SLOT_LEGGINGS).ok().flatten()
    }

    fn set_leggings(&mut self, leggings: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item(SLOT_LEGGINGS, leggings)
    }

    fn boots(&self) -> Option<ItemStack> {
        self.get_item(SLOT_BOOTS).ok().flatten()
    }

    fn set_boots(&mut self, boots: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item(SLOT_BOOTS, boots)
    }

    fn item_in_main_hand(&self) -> Option<ItemStack> {
        self.get_item(self.held_item_slot()).ok().flatten()
    }

    fn set_item_in_main_hand(&mut self, item: Option<ItemStack>) -> Result<(), InventoryError> {
        let slot = self.held_item_slot();
        self.set_item(slot, item)
    }

    fn item_in_off_hand(&self) -> Option<ItemStack> {
        self.get_item(SLOT_OFF_HAND).ok().flatten()
    }

    fn set_item_in_off_hand(&mut self, item: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item(SLOT_OFF_HAND, item)
    }

    #[deprecated(note = "Players can hold items in both hands, use item_in_main_hand")]
    fn item_in_hand(&self) -> Option<ItemStack> {
        self.item_in_main_hand()
    }

    #[deprecated(note = "Players can hold items in both hands, use set_item_in_main_hand")]
    fn set_item_in_hand(&mut self, item: Option<ItemStack>) -> Result<(), InventoryError> {
        self.set_item_in_main_hand(item)
    }

    /// Clears every slot holding the given legacy id, or every slot when `id` is -1,
    /// and returns how many items were removed. `data` is accepted for
    /// compatibility and does not narrow the match.
    #[deprecated(note = "Magic value, use remove or clear_all")]
    fn clear_legacy(&mut self, id: i32, _data: i32) -> u32 {
        let material = match id {
            -1 => None,
            id => match u16::try_from(id).ok().and_then(Material::from_legacy_id) {
                Some(material) => Some(material),
                None => return 0,
            },
        };

        let mut cleared = 0u32;
        let mut store = self.store().borrow_mut();
        for slot in store.slots_mut() {
            let matches = match (slot.as_ref(), material) {
                (Some(_), None) => true,
                (Some(stack), Some(material)) => stack.material == material,
                (None, _) => false,
            };
            if matches {
                if let Some(stack) = slot.take() {
                    cleared = cleared.saturating_add(stack.item_count);
                }
            }
        }
        log::debug!("Cleared {cleared} items from the inventory of {}", self.owner().name);
        cleared
    }
}
