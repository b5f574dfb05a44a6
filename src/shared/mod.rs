// Shared kernel used by the movie and review contexts

pub mod application; // Pagination
pub mod config; // Engine tunables
pub mod domain; // Actor identity
pub mod errors; // Shared error types
pub mod utils; // Validation, logging, keyed locks

pub use config::ReviewEngineConfig;
pub use domain::value_objects::{Actor, Role};
