pub mod keyed_locks;
pub mod logger;
pub mod validation;

pub use keyed_locks::{KeyedGuard, KeyedLocks};
pub use validation::Validator;
