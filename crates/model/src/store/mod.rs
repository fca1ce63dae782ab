//! Service implementations backed by a [`StoreDocument`]

mod document;
mod json;
mod memory;

pub use document::{SCHEMA_VERSION, StoreDocument};
pub use json::JsonStore;
pub use memory::{MemoryStore, Operation};
