/// Test data factories using builder pattern
use cinevault_lib::modules::movie::domain::MovieDetails;
use cinevault_lib::modules::review::SubmitReviewCommand;
use uuid::Uuid;

pub struct MovieFactory {
    title: String,
    director: String,
    year: i32,
    genres: Vec<String>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: "Test Movie".to_string(),
            director: "Test Director".to_string(),
            year: 2010,
            genres: vec!["Drama".to_string()],
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn build(self) -> MovieDetails {
        MovieDetails::new(self.title, self.director, self.year).with_genres(self.genres)
    }
}

pub struct ReviewFactory {
    command: SubmitReviewCommand,
}

impl ReviewFactory {
    pub fn for_movie(movie_id: Uuid) -> Self {
        Self {
            command: SubmitReviewCommand::new(movie_id, 3),
        }
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.command.rating = rating;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.command = self.command.with_title(title);
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.command = self.command.with_body(body);
        self
    }

    pub fn build(self) -> SubmitReviewCommand {
        self.command
    }
}
