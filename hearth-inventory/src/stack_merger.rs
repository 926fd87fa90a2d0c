//! Quantity aware operations over a [`SlotStore`].
//!
//! Everything here only looks at the storage section of the store and scans it
//! in ascending slot order, so the slot that receives merged items in
//! [`add_item`] and the slot drained first in [`remove_item`] are always the
//! lowest matching index.

use std::collections::HashMap;

use hearth_data::Material;
use hearth_world::item::ItemStack;

use crate::{InventoryError, SlotStore};

/// What a slot has to hold to match.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotMatcher {
    /// Any stack of this material, whatever its count or meta.
    Material(Material),
    /// A stack equal in material, meta and count.
    Exact(ItemStack),
}

impl SlotMatcher {
    pub fn matches(&self, stack: &ItemStack) -> bool {
        match self {
            Self::Material(material) => stack.material == *material,
            Self::Exact(expected) => stack == expected,
        }
    }
}

impl From<Material> for SlotMatcher {
    fn from(material: Material) -> Self {
        Self::Material(material)
    }
}

impl From<ItemStack> for SlotMatcher {
    fn from(stack: ItemStack) -> Self {
        Self::Exact(stack)
    }
}

impl From<&ItemStack> for SlotMatcher {
    fn from(stack: &ItemStack) -> Self {
        Self::Exact(stack.clone())
    }
}

fn ensure_not_empty(items: &[ItemStack]) -> Result<(), InventoryError> {
    match items.iter().position(ItemStack::is_empty) {
        Some(index) => Err(InventoryError::InvalidArgument(format!(
            "Item at index {index} is empty"
        ))),
        None => Ok(()),
    }
}

/// Stores `items`, topping up similar stacks first and then filling empty slots.
///
/// Returns what could not be stored, keyed by the index of the input it came from.
pub fn add_item(
    store: &mut SlotStore,
    items: &[ItemStack],
) -> Result<HashMap<usize, ItemStack>, InventoryError> {
    ensure_not_empty(items)?;

    let mut leftover = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        let max_size = store.effective_max_stack_size(item.material);
        let mut remaining = item.item_count;

        for stack in store.storage_slots_mut().iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if stack.is_similar(item) && stack.item_count < max_size {
                let moved = (max_size - stack.item_count).min(remaining);
                stack.increment(moved);
                remaining -= moved;
            }
        }

        for slot in store.storage_slots_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let moved = max_size.min(remaining);
                *slot = Some(item.copy_with_count(moved));
                remaining -= moved;
            }
        }

        if remaining > 0 {
            log::debug!(
                "{remaining} of {} {} did not fit",
                item.item_count,
                item.material
            );
            leftover.insert(index, item.copy_with_count(remaining));
        }
    }

    Ok(leftover)
}

/// Takes `items` out of the store, draining similar stacks in slot order.
///
/// Returns how much of each input could not be found, keyed by input index.
pub fn remove_item(
    store: &mut SlotStore,
    items: &[ItemStack],
) -> Result<HashMap<usize, ItemStack>, InventoryError> {
    ensure_not_empty(items)?;

    let mut leftover = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        let mut to_delete = item.item_count;

        for slot in store.storage_slots_mut() {
            if to_delete == 0 {
                break;
            }
            let Some(stack) = slot.as_mut() else {
                continue;
            };
            if !stack.is_similar(item) {
                continue;
            }

            let taken = stack.item_count.min(to_delete);
            stack.decrement(taken);
            to_delete -= taken;
            if stack.item_count == 0 {
                *slot = None;
            }
        }

        if to_delete > 0 {
            log::debug!(
                "Could not remove {to_delete} of {} {}",
                item.item_count,
                item.material
            );
            leftover.insert(index, item.copy_with_count(to_delete));
        }
    }

    Ok(leftover)
}

fn storage_stacks(store: &SlotStore) -> impl Iterator<Item = &ItemStack> {
    store.storage_slots().iter().flatten()
}

/// Total count of `material` across the storage section.
pub fn count(store: &SlotStore, material: Material) -> u64 {
    storage_stacks(store)
        .filter(|stack| stack.material == material)
        .map(|stack| u64::from(stack.item_count))
        .sum()
}

pub fn contains_material(store: &SlotStore, material: Material) -> bool {
    storage_stacks(store).any(|stack| stack.material == material)
}

/// Whether the counts of `material` add up to at least `amount`.
pub fn contains_material_amount(store: &SlotStore, material: Material, amount: i32) -> bool {
    if amount <= 0 {
        return true;
    }
    count(store, material) >= amount as u64
}

/// Whether any single slot holds exactly `item`, count included.
pub fn contains_stack(store: &SlotStore, item: &ItemStack) -> bool {
    storage_stacks(store).any(|stack| stack == item)
}

/// Whether at least `amount` slots hold exactly `item`, count included.
pub fn contains_stack_amount(store: &SlotStore, item: &ItemStack, amount: i32) -> bool {
    if amount <= 0 {
        return true;
    }
    storage_stacks(store).filter(|stack| *stack == item).count() >= amount as usize
}

/// Whether stacks similar to `item` add up to at least `amount`.
pub fn contains_at_least(store: &SlotStore, item: &ItemStack, amount: i32) -> bool {
    if amount <= 0 {
        return true;
    }
    let total: u64 = storage_stacks(store)
        .filter(|stack| stack.is_similar(item))
        .map(|stack| u64::from(stack.item_count))
        .sum();
    total >= amount as u64
}

pub fn all(store: &SlotStore, matcher: &SlotMatcher) -> HashMap<usize, ItemStack> {
    store
        .storage_slots()
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            slot.as_ref()
                .filter(|stack| matcher.matches(stack))
                .map(|stack| (index, stack.clone()))
        })
        .collect()
}

pub fn first(store: &SlotStore, matcher: &SlotMatcher) -> Option<usize> {
    store
        .storage_slots()
        .iter()
        .position(|slot| slot.as_ref().is_some_and(|stack| matcher.matches(stack)))
}

pub fn first_empty(store: &SlotStore) -> Option<usize> {
    store.storage_slots().iter().position(Option::is_none)
}

/// Clears every matching slot, whatever its count.
pub fn remove(store: &mut SlotStore, matcher: &SlotMatcher) {
    for slot in store.storage_slots_mut() {
        if slot.as_ref().is_some_and(|stack| matcher.matches(stack)) {
            *slot = None;
        }
    }
}

pub fn clear(store: &mut SlotStore, index: usize) -> Result<(), InventoryError> {
    store.set(index, None)
}

pub fn clear_all(store: &mut SlotStore) {
    for slot in store.slots_mut() {
        *slot = None;
    }
}

pub fn is_empty(store: &SlotStore) -> bool {
    store.slots().iter().all(Option::is_none)
}

#[cfg(test)]
mod test {
    use hearth_data::Material;
    use hearth_world::item::{ItemMeta, ItemStack};

    use super::*;

    fn stone(count: u32) -> ItemStack {
        ItemStack::new(count, Material::Stone)
    }

    fn total_stored(store: &SlotStore) -> u64 {
        store
            .slots()
            .iter()
            .flatten()
            .map(|stack| u64::from(stack.item_count))
            .sum()
    }

    #[test]
    fn add_merges_into_partial_stack() {
        let mut store = SlotStore::new(9);
        store.set(0, Some(stone(3))).unwrap();

        let leftover = add_item(&mut store, &[stone(5)]).unwrap();

        assert!(leftover.is_empty());
        assert_eq!(store.get(0).unwrap(), Some(stone(8)));
        assert_eq!(first_empty(&store), Some(1));
    }

    #[test]
    fn add_reports_what_did_not_fit() {
        let mut store = SlotStore::new(1);
        store.set(0, Some(stone(64))).unwrap();

        let leftover = add_item(&mut store, &[stone(1)]).unwrap();

        assert_eq!(leftover.len(), 1);
        assert_eq!(leftover[&0], stone(1));
        assert_eq!(store.get(0).unwrap(), Some(stone(64)));
    }

    #[test]
    fn add_splits_across_empty_slots() {
        let mut store = SlotStore::new(4);
        store.set(1, Some(ItemStack::new(10, Material::Dirt))).unwrap();

        let leftover = add_item(&mut store, &[stone(150)]).unwrap();

        assert!(leftover.is_empty());
        assert_eq!(store.get(0).unwrap(), Some(stone(64)));
        assert_eq!(store.get(1).unwrap(), Some(ItemStack::new(10, Material::Dirt)));
        assert_eq!(store.get(2).unwrap(), Some(stone(64)));
        assert_eq!(store.get(3).unwrap(), Some(stone(22)));
    }

    #[test]
    fn add_fills_partial_stacks_before_empty_slots() {
        let mut store = SlotStore::new(3);
        store.set(2, Some(stone(60))).unwrap();

        add_item(&mut store, &[stone(10)]).unwrap();

        assert_eq!(store.get(2).unwrap(), Some(stone(64)));
        assert_eq!(store.get(0).unwrap(), Some(stone(6)));
        assert_eq!(store.get(1).unwrap(), None);
    }

    #[test]
    fn add_respects_material_cap() {
        let mut store = SlotStore::new(2);
        let pearls = ItemStack::new(20, Material::EnderPearl);

        let leftover = add_item(&mut store, &[pearls]).unwrap();

        assert!(leftover.is_empty());
        assert_eq!(store.get(0).unwrap().unwrap().item_count, 16);
        assert_eq!(store.get(1).unwrap().unwrap().item_count, 4);
    }

    #[test]
    fn add_uses_override_for_every_material() {
        let mut store = SlotStore::new(2);
        store.set_max_stack_size_override(Some(5)).unwrap();

        let leftover = add_item(&mut store, &[stone(12)]).unwrap();

        assert_eq!(leftover[&0], stone(2));
        assert_eq!(store.get(0).unwrap(), Some(stone(5)));
        assert_eq!(store.get(1).unwrap(), Some(stone(5)));
    }

    #[test]
    fn add_keeps_different_meta_apart() {
        let mut store = SlotStore::new(2);
        let named = stone(1).with_meta(ItemMeta::default().with_display_name("Special"));
        store.set(0, Some(named.clone())).unwrap();

        add_item(&mut store, &[stone(4)]).unwrap();

        assert_eq!(store.get(0).unwrap(), Some(named));
        assert_eq!(store.get(1).unwrap(), Some(stone(4)));
    }

    #[test]
    fn add_rejects_empty_items_without_touching_the_store() {
        let mut store = SlotStore::new(2);
        let result = add_item(&mut store, &[stone(3), ItemStack::EMPTY]);

        assert!(matches!(result, Err(InventoryError::InvalidArgument(_))));
        assert!(is_empty(&store));
    }

    #[test]
    fn add_conserves_quantity() {
        let mut store = SlotStore::new(3);
        store.set(1, Some(ItemStack::new(1, Material::Apple))).unwrap();
        let requested = [
            stone(100),
            ItemStack::new(30, Material::Apple),
            ItemStack::new(40, Material::Snowball),
            stone(5),
        ];
        let before = total_stored(&store);

        let leftover = add_item(&mut store, &requested).unwrap();

        let requested_total: u64 = requested.iter().map(|s| u64::from(s.item_count)).sum();
        let leftover_total: u64 = leftover.values().map(|s| u64::from(s.item_count)).sum();
        assert_eq!(total_stored(&store) - before + leftover_total, requested_total);
    }

    #[test]
    fn add_only_touches_storage_section() {
        let mut store = SlotStore::with_storage(3, 1);

        let leftover = add_item(&mut store, &[stone(70)]).unwrap();

        assert_eq!(leftover[&0], stone(6));
        assert_eq!(store.get(1).unwrap(), None);
        assert_eq!(store.get(2).unwrap(), None);
    }

    #[test]
    fn remove_drains_in_slot_order() {
        let mut store = SlotStore::new(3);
        store.set(0, Some(stone(5))).unwrap();
        store.set(2, Some(stone(5))).unwrap();

        let leftover = remove_item(&mut store, &[stone(7)]).unwrap();

        assert!(leftover.is_empty());
        assert_eq!(store.get(0).unwrap(), None);
        assert_eq!(store.get(2).unwrap(), Some(stone(3)));
    }

    #[test]
    fn remove_reports_shortfall() {
        let mut store = SlotStore::new(2);
        store.set(1, Some(stone(4))).unwrap();

        let leftover =
            remove_item(&mut store, &[ItemStack::new(2, Material::Dirt), stone(10)]).unwrap();

        assert_eq!(leftover[&0], ItemStack::new(2, Material::Dirt));
        assert_eq!(leftover[&1], stone(6));
        assert!(is_empty(&store));
    }

    #[test]
    fn remove_then_add_restores_snapshot() {
        let mut store = SlotStore::new(4);
        store.set(0, Some(stone(20))).unwrap();
        store.set(1, Some(ItemStack::new(3, Material::Bread))).unwrap();
        let snapshot = store.contents();

        let taken = [stone(20)];
        assert!(remove_item(&mut store, &taken).unwrap().is_empty());
        assert!(add_item(&mut store, &taken).unwrap().is_empty());

        assert_eq!(store.contents(), snapshot);
    }

    #[test]
    fn contains_family() {
        let mut store = SlotStore::new(4);
        store.set(0, Some(stone(5))).unwrap();
        store.set(1, Some(stone(5))).unwrap();
        store.set(2, Some(stone(7))).unwrap();

        assert!(contains_material(&store, Material::Stone));
        assert!(!contains_material(&store, Material::Dirt));
        assert!(contains_material_amount(&store, Material::Stone, 17));
        assert!(!contains_material_amount(&store, Material::Stone, 18));
        assert!(contains_material_amount(&store, Material::Dirt, 0));

        assert!(contains_stack(&store, &stone(7)));
        assert!(!contains_stack(&store, &stone(6)));
        assert!(contains_stack_amount(&store, &stone(5), 2));
        assert!(!contains_stack_amount(&store, &stone(5), 3));
        assert!(contains_stack_amount(&store, &stone(1), -4));

        assert!(contains_at_least(&store, &stone(1), 17));
        assert!(!contains_at_least(&store, &stone(1), 18));
    }

    #[test]
    fn contains_at_least_is_monotonic() {
        let mut store = SlotStore::new(3);
        store.set(0, Some(stone(9))).unwrap();
        store.set(2, Some(stone(4))).unwrap();

        let mut seen_false = false;
        for amount in (-2..=20).rev() {
            let result = contains_at_least(&store, &stone(1), amount);
            if result {
                for smaller in -2..=amount {
                    assert!(contains_at_least(&store, &stone(1), smaller));
                }
            } else {
                seen_false = true;
            }
        }
        assert!(seen_false);
    }

    #[test]
    fn first_is_the_lowest_index_of_all() {
        let mut store = SlotStore::new(6);
        store.set(4, Some(stone(1))).unwrap();
        store.set(2, Some(stone(3))).unwrap();
        store.set(3, Some(ItemStack::new(2, Material::Dirt))).unwrap();

        let matcher = SlotMatcher::from(Material::Stone);
        let matches = all(&store, &matcher);
        assert_eq!(matches.len(), 2);
        assert_eq!(first(&store, &matcher), matches.keys().min().copied());

        let missing = SlotMatcher::from(Material::Glass);
        assert!(all(&store, &missing).is_empty());
        assert_eq!(first(&store, &missing), None);

        assert_eq!(first(&store, &SlotMatcher::from(stone(3))), Some(2));
        assert_eq!(first(&store, &SlotMatcher::from(stone(2))), None);
    }

    #[test]
    fn first_empty_edges() {
        assert_eq!(first_empty(&SlotStore::new(0)), None);
        assert_eq!(first_empty(&SlotStore::new(5)), Some(0));

        let mut store = SlotStore::new(1);
        store.set(0, Some(stone(1))).unwrap();
        assert_eq!(first_empty(&store), None);
    }

    #[test]
    fn remove_by_matcher_ignores_quantity() {
        let mut store = SlotStore::new(3);
        store.set(0, Some(stone(64))).unwrap();
        store.set(1, Some(stone(2))).unwrap();
        store.set(2, Some(ItemStack::new(2, Material::Dirt))).unwrap();

        remove(&mut store, &SlotMatcher::from(stone(2)));
        assert_eq!(store.get(1).unwrap(), None);
        assert_eq!(store.get(0).unwrap(), Some(stone(64)));

        remove(&mut store, &SlotMatcher::from(Material::Stone));
        assert_eq!(store.get(0).unwrap(), None);
        assert!(store.get(2).unwrap().is_some());
    }

    #[test]
    fn clear_single_and_all() {
        let mut store = SlotStore::new(2);
        store.set(0, Some(stone(1))).unwrap();
        store.set(1, Some(stone(1))).unwrap();

        clear(&mut store, 0).unwrap();
        assert_eq!(store.get(0).unwrap(), None);
        assert!(clear(&mut store, 2).is_err());

        clear_all(&mut store);
        assert!(is_empty(&store));
    }
}
