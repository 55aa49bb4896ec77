// file: src/repository/mod.rs
// description: Document store module exports
// reference: Internal module structure

pub mod scanner;
pub mod store;

pub use scanner::DirectoryStore;
pub use store::{DocumentStore, MemoryStore};
