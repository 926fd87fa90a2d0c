use std::collections::HashMap;

use hearth_data::{InventoryType, Material};
use hearth_world::{HumanEntity, Location, item::ItemStack};
use uuid::Uuid;

mod cursor;
mod error;
pub mod player;
pub mod recipes;
mod slot_store;
pub mod stack_merger;
mod view;

pub use cursor::SlotCursor;
pub use error::InventoryError;
pub use player::{PlayerInventory, PlayerInventoryView};
pub use slot_store::{SharedSlotStore, SlotStore};
pub use stack_merger::SlotMatcher;
pub use view::{InventoryHolder, InventoryView, MAX_CUSTOM_SIZE};

/// Everything a container exposes to plugins.
///
/// Implementors only provide the shared store and their metadata; slot access,
/// stacking and matching are shared through the default methods, which all
/// operate on the live store.
pub trait Inventory {
    fn store(&self) -> &SharedSlotStore;

    fn inventory_type(&self) -> InventoryType;

    fn title(&self) -> &str;

    fn holder(&self) -> Option<InventoryHolder>;

    fn viewers(&self) -> &[HumanEntity];

    fn add_viewer(&mut self, viewer: HumanEntity);

    fn remove_viewer(&mut self, uuid: &Uuid) -> Option<HumanEntity>;

    fn size(&self) -> usize {
        self.store().borrow().size()
    }

    fn name(&self) -> &str {
        self.title()
    }

    fn location(&self) -> Option<Location> {
        self.holder().map(|holder| holder.location())
    }

    fn max_stack_size(&self) -> u32 {
        self.store().borrow().max_stack_size()
    }

    /// Overrides the stack cap for every material in this inventory.
    ///
    /// The override is not saved with the contents and may be lost once the
    /// inventory is reloaded.
    fn set_max_stack_size(&mut self, size: u32) -> Result<(), InventoryError> {
        self.store()
            .borrow_mut()
            .set_max_stack_size_override(Some(size))
    }

    fn get_item(&self, index: usize) -> Result<Option<ItemStack>, InventoryError> {
        self.store().borrow().get(index)
    }

    fn set_item(&mut self, index: usize, stack: Option<ItemStack>) -> Result<(), InventoryError> {
        self.store().borrow_mut().set(index, stack)
    }

    fn add_item(&mut self, items: &[ItemStack]) -> Result<HashMap<usize, ItemStack>, InventoryError> {
        stack_merger::add_item(&mut self.store().borrow_mut(), items)
    }

    fn remove_item(
        &mut self,
        items: &[ItemStack],
    ) -> Result<HashMap<usize, ItemStack>, InventoryError> {
        stack_merger::remove_item(&mut self.store().borrow_mut(), items)
    }

    fn contents(&self) -> Vec<Option<ItemStack>> {
        self.store().borrow().contents()
    }

    fn set_contents(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        self.store().borrow_mut().replace_all(items)
    }

    fn storage_contents(&self) -> Vec<Option<ItemStack>> {
        self.store().borrow().storage_contents()
    }

    fn set_storage_contents(&mut self, items: &[Option<ItemStack>]) -> Result<(), InventoryError> {
        self.store().borrow_mut().replace_storage(items)
    }

    fn contains_material(&self, material: Material) -> bool {
        stack_merger::contains_material(&self.store().borrow(), material)
    }

    fn contains_material_amount(&self, material: Material, amount: i32) -> bool {
        stack_merger::contains_material_amount(&self.store().borrow(), material, amount)
    }

    fn contains_stack(&self, item: &ItemStack) -> bool {
        stack_merger::contains_stack(&self.store().borrow(), item)
    }

    fn contains_stack_amount(&self, item: &ItemStack, amount: i32) -> bool {
        stack_merger::contains_stack_amount(&self.store().borrow(), item, amount)
    }

    fn contains_at_least(&self, item: &ItemStack, amount: i32) -> bool {
        stack_merger::contains_at_least(&self.store().borrow(), item, amount)
    }

    fn all<M: Into<SlotMatcher>>(&self, matcher: M) -> HashMap<usize, ItemStack>
    where
        Self: Sized,
    {
        stack_merger::all(&self.store().borrow(), &matcher.into())
    }

    fn first<M: Into<SlotMatcher>>(&self, matcher: M) -> Option<usize>
    where
        Self: Sized,
    {
        stack_merger::first(&self.store().borrow(), &matcher.into())
    }

    fn first_empty(&self) -> Option<usize> {
        stack_merger::first_empty(&self.store().borrow())
    }

    fn remove<M: Into<SlotMatcher>>(&mut self, matcher: M)
    where
        Self: Sized,
    {
        stack_merger::remove(&mut self.store().borrow_mut(), &matcher.into());
    }

    fn clear(&mut self, index: usize) -> Result<(), InventoryError> {
        stack_merger::clear(&mut self.store().borrow_mut(), index)
    }

    fn clear_all(&mut self) {
        stack_merger::clear_all(&mut self.store().borrow_mut());
    }

    fn is_empty(&self) -> bool {
        stack_merger::is_empty(&self.store().borrow())
    }

    /// See [`SlotCursor::new`] for how `index` positions the cursor.
    fn cursor(&self, index: isize) -> Result<SlotCursor, InventoryError> {
        SlotCursor::new(self.store().clone(), index)
    }

    #[deprecated(note = "Magic value, use contains_material")]
    fn contains_legacy(&self, legacy_id: u16) -> bool {
        Material::from_legacy_id(legacy_id).is_some_and(|material| self.contains_material(material))
    }

    #[deprecated(note = "Magic value, use contains_material_amount")]
    fn contains_legacy_amount(&self, legacy_id: u16, amount: i32) -> bool {
        match Material::from_legacy_id(legacy_id) {
            Some(material) => self.contains_material_amount(material, amount),
            None => amount <= 0,
        }
    }

    #[deprecated(note = "Magic value, use all")]
    fn all_legacy(&self, legacy_id: u16) -> HashMap<usize, ItemStack>
    where
        Self: Sized,
    {
        Material::from_legacy_id(legacy_id)
            .map(|material| self.all(material))
            .unwrap_or_default()
    }

    #[deprecated(note = "Magic value, use first")]
    fn first_legacy(&self, legacy_id: u16) -> Option<usize>
    where
        Self: Sized,
    {
        Material::from_legacy_id(legacy_id).and_then(|material| self.first(material))
    }

    #[deprecated(note = "Magic value, use remove")]
    fn remove_legacy(&mut self, legacy_id: u16)
    where
        Self: Sized,
    {
        if let Some(material) = Material::from_legacy_id(legacy_id) {
            self.remove(material);
        }
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod test {
    use hearth_data::{InventoryType, Material};
    use hearth_world::item::ItemStack;

    use crate::{Inventory, InventoryView};

    fn chest() -> InventoryView {
        InventoryView::new(InventoryType::Chest, None)
    }

    #[test]
    fn legacy_ids_delegate_to_materials() {
        let mut inventory = chest();
        let legacy = Material::EnderPearl.legacy_id();
        inventory
            .set_item(3, Some(ItemStack::new(5, Material::EnderPearl)))
            .unwrap();

        assert!(inventory.contains_legacy(legacy));
        assert!(inventory.contains_legacy_amount(legacy, 5));
        assert!(!inventory.contains_legacy_amount(legacy, 6));
        assert_eq!(inventory.first_legacy(legacy), Some(3));
        assert_eq!(inventory.all_legacy(legacy).len(), 1);

        inventory.remove_legacy(legacy);
        assert!(inventory.is_empty());
    }

    #[test]
    fn unknown_legacy_ids_match_nothing() {
        let mut inventory = chest();
        inventory
            .set_item(0, Some(ItemStack::new(1, Material::Stone)))
            .unwrap();

        assert!(!inventory.contains_legacy(u16::MAX));
        assert!(inventory.contains_legacy_amount(u16::MAX, 0));
        assert_eq!(inventory.first_legacy(u16::MAX), None);
        assert!(inventory.all_legacy(u16::MAX).is_empty());
        inventory.remove_legacy(u16::MAX);
        assert!(!inventory.is_empty());
    }

    #[test]
    fn max_stack_size_override_caps_new_stacks() {
        let mut inventory = chest();
        assert_eq!(inventory.max_stack_size(), 64);

        inventory.set_max_stack_size(10).unwrap();
        assert_eq!(inventory.max_stack_size(), 10);

        let leftover = inventory
            .add_item(&[ItemStack::new(25, Material::Dirt)])
            .unwrap();
        assert!(leftover.is_empty());
        assert_eq!(inventory.all(Material::Dirt).len(), 3);
        assert_eq!(inventory.get_item(2).unwrap().unwrap().item_count, 5);
    }

    #[test]
    fn generic_matchers_accept_materials_and_stacks() {
        let mut inventory = chest();
        let pearls = ItemStack::new(2, Material::EnderPearl);
        inventory.set_item(1, Some(pearls.clone())).unwrap();
        inventory
            .set_item(6, Some(ItemStack::new(4, Material::EnderPearl)))
            .unwrap();

        assert_eq!(inventory.first(Material::EnderPearl), Some(1));
        assert_eq!(inventory.first(&pearls), Some(1));
        assert_eq!(inventory.all(Material::EnderPearl).len(), 2);

        inventory.remove(pearls);
        assert_eq!(inventory.first(Material::EnderPearl), Some(6));
    }

    #[test]
    fn contents_round_trip_through_the_view() {
        let mut inventory = InventoryView::new(InventoryType::Hopper, None);
        let items = vec![Some(ItemStack::new(1, Material::Coal)), None];
        inventory.set_contents(&items).unwrap();

        let contents = inventory.contents();
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[0], Some(ItemStack::new(1, Material::Coal)));
        assert!(contents[1..].iter().all(Option::is_none));

        assert!(inventory.set_contents(&vec![None; 6]).is_err());
    }

    #[test]
    fn cursor_sees_writes_made_through_the_view() {
        let mut inventory = InventoryView::new(InventoryType::Hopper, None);
        let mut cursor = inventory.cursor(-1).unwrap();
        inventory
            .set_item(4, Some(ItemStack::new(3, Material::Apple)))
            .unwrap();

        assert_eq!(
            cursor.previous(),
            Some(Some(ItemStack::new(3, Material::Apple)))
        );
        assert!(inventory.cursor(6).is_err());
    }
}
