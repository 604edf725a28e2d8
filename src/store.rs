// src/store.rs

pub mod mock_store;
pub use mock_store::MockStore;
pub mod seed;
