//! Task storage for Tasklist
//!
//! This crate provides the `Task` entity, the `TaskStore` trait describing
//! the five storage operations (list, get, insert, update, delete), a
//! SQLite-backed implementation used by the server, and an in-memory
//! implementation for tests.

mod entities;
mod error;
mod memory;
mod sqlite;
mod store;

pub use entities::*;
pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use store::*;
