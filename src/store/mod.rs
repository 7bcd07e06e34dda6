//! Store Module
//!
//! Student storage: the repository contract, id strategies, and the
//! in-memory and MongoDB backends.

mod ids;
mod memory;
mod mongo;
mod repository;
mod table;


// Re-export public types
pub use ids::{strategy_for, IdStrategy, ObjectIds, SequentialIds};
pub use memory::MemoryRepository;
pub use mongo::{MongoRepository, LIST_LIMIT};
pub use repository::StudentRepository;
pub use table::StudentTable;
