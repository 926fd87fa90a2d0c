use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Slot {index} is out of range for an inventory of size {size}")]
    IndexOutOfRange { index: isize, size: usize },
    /// Raised only by the held item slot setter, which has its own `[0, 8]` bound.
    #[error("Held item slot {0} is not between 0 and 8 inclusive")]
    HeldSlotOutOfRange(i32),
}

impl InventoryError {
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange {
            index: index as isize,
            size,
        }
    }
}
