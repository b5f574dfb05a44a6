pub mod modules;
pub mod shared;

use modules::{
    movie::{InMemoryMovieRepository, MovieLocks, MovieRepository, MovieService},
    review::{
        InMemoryReviewRepository, RatingAggregateCoordinator, ReviewQueryService,
        ReviewRepository, ReviewService,
    },
};
use shared::errors::AppResult;
use shared::utils::logger::init_logger;
use shared::ReviewEngineConfig;
use std::sync::Arc;

/// Fully wired catalog: movie curation, review lifecycle and review reads
///
/// All services share one set of movie leases, so admin edits to a movie and
/// rating aggregation for that movie never interleave.
pub struct CatalogEngine {
    pub movies: Arc<MovieService>,
    pub reviews: Arc<ReviewService>,
    pub review_queries: Arc<ReviewQueryService>,
    pub coordinator: Arc<RatingAggregateCoordinator>,
}

impl CatalogEngine {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        config: ReviewEngineConfig,
    ) -> AppResult<Self> {
        config.validate()?;

        let movie_locks = Arc::new(MovieLocks::new());
        let coordinator = Arc::new(RatingAggregateCoordinator::new(
            movie_repo.clone(),
            review_repo.clone(),
            movie_locks.clone(),
        ));

        let movies = Arc::new(MovieService::new(movie_repo, movie_locks));
        let reviews = Arc::new(ReviewService::new(
            review_repo.clone(),
            coordinator.clone(),
            config,
        )?);
        let review_queries = Arc::new(ReviewQueryService::new(review_repo));

        Ok(Self {
            movies,
            reviews,
            review_queries,
            coordinator,
        })
    }

    /// Engine over fresh in-memory stores
    pub fn in_memory(config: ReviewEngineConfig) -> AppResult<Self> {
        Self::new(
            Arc::new(InMemoryMovieRepository::new()),
            Arc::new(InMemoryReviewRepository::new()),
            config,
        )
    }
}

/// Load configuration from the environment and build an in-memory engine
pub fn bootstrap() -> AppResult<CatalogEngine> {
    init_logger();

    let config = ReviewEngineConfig::from_env()?;
    let engine = CatalogEngine::in_memory(config)?;
    log::info!("Catalog engine ready (in-memory stores)");
    Ok(engine)
}
