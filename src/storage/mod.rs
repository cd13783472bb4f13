pub mod slot;
pub mod todos;

pub use slot::{validate_slot_name, FileSlotStore, MemorySlotStore, SlotStore};
pub use todos::TodoStorage;
