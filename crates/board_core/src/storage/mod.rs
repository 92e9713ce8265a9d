pub mod gateway;
mod slot;

pub use slot::{FileSlot, Slot, tasks_slot, theme_slot};
