//! JSON file registry store.

mod store;

pub use store::JsonFileStore;
