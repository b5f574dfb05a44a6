pub mod movie_locks;
pub mod service;

pub use movie_locks::{MovieLease, MovieLocks};
pub use service::MovieService;
