pub mod movie;

pub use movie::{CastMember, Movie, MovieDetails};
