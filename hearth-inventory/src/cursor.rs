use hearth_world::item::ItemStack;

use crate::{InventoryError, SharedSlotStore};

/// Bidirectional cursor over the live slots of an inventory.
///
/// Behaves like a list iterator: the cursor sits between two slots, [`Iterator::next`]
/// returns the slot after it and [`SlotCursor::previous`] the slot before it. Each
/// item is `None` for an empty slot. Writes made through [`SlotCursor::set`] go
/// straight to the shared store.
#[derive(Debug)]
pub struct SlotCursor {
    store: SharedSlotStore,
    next_index: usize,
    last_returned: Option<usize>,
}

impl SlotCursor {
    /// A non-negative `index` makes the first `next()` return that slot. A negative
    /// one makes the first `previous()` return slot `size + index`.
    pub fn new(store: SharedSlotStore, index: isize) -> Result<Self, InventoryError> {
        let size = store.borrow().size();
        let position = if index < 0 {
            size as isize + index + 1
        } else {
            index
        };
        if position < 0 || position as usize > size {
            return Err(InventoryError::IndexOutOfRange { index, size });
        }

        Ok(Self {
            store,
            next_index: position as usize,
            last_returned: None,
        })
    }

    pub fn has_next(&self) -> bool {
        self.next_index < self.store.borrow().size()
    }

    pub fn has_previous(&self) -> bool {
        self.next_index > 0
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    pub fn previous(&mut self) -> Option<Option<ItemStack>> {
        let index = self.previous_index()?;
        let stack = self.store.borrow().get(index).ok()?;
        self.next_index = index;
        self.last_returned = Some(index);
        Some(stack)
    }

    /// Overwrites the slot last returned by `next` or `previous`.
    pub fn set(&mut self, stack: Option<ItemStack>) -> Result<(), InventoryError> {
        let index = self.last_returned.ok_or_else(|| {
            InventoryError::InvalidArgument(
                "set called before next or previous returned a slot".to_string(),
            )
        })?;
        self.store.borrow_mut().set(index, stack)
    }
}

impl Iterator for SlotCursor {
    type Item = Option<ItemStack>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let stack = self.store.borrow().get(index).ok()?;
        self.next_index += 1;
        self.last_returned = Some(index);
        Some(stack)
    }
}
