pub mod memory;

pub use memory::{MemoryTable, StoreError};
