/// Test helper functions and engine builders
use super::factories::{MovieFactory, ReviewFactory};
use cinevault_lib::modules::movie::{Movie, RatingDistribution};
use cinevault_lib::modules::review::Review;
use cinevault_lib::shared::{Actor, ReviewEngineConfig};
use cinevault_lib::CatalogEngine;
use uuid::Uuid;

pub fn build_engine() -> CatalogEngine {
    CatalogEngine::in_memory(ReviewEngineConfig::default()).expect("default config is valid")
}

pub fn build_engine_with(config: ReviewEngineConfig) -> CatalogEngine {
    CatalogEngine::in_memory(config).expect("config is valid")
}

pub fn admin() -> Actor {
    Actor::admin(Uuid::new_v4())
}

pub fn user() -> Actor {
    Actor::user(Uuid::new_v4())
}

/// Add a movie to the catalog as a throwaway administrator
pub async fn seed_movie(engine: &CatalogEngine) -> Movie {
    engine
        .movies
        .create_movie(&admin(), MovieFactory::new().build())
        .await
        .expect("Movie creation should succeed")
}

pub async fn submit(engine: &CatalogEngine, actor: &Actor, movie_id: Uuid, rating: i64) -> Review {
    engine
        .reviews
        .submit_review(actor, ReviewFactory::for_movie(movie_id).with_rating(rating).build())
        .await
        .expect("Review submission should succeed")
}

pub async fn ratings(engine: &CatalogEngine, movie_id: Uuid) -> RatingDistribution {
    *engine
        .movies
        .get_movie(&movie_id)
        .await
        .expect("Movie should exist")
        .ratings()
}
