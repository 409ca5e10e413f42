//! Movie record and the create/update DTOs validated against it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::genre::Genre;
use crate::types::MovieId;
use crate::validation::rules::validate_release_year;

/// A stored movie record.
///
/// Every `Movie` in the store satisfies the full schema; the only ways to
/// obtain one are [`Movie::from_new`] and loading a validated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: i32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// DTO for creating a movie. `rate` defaults to 0 when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(length(min = 1, code = "too_small", message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "validate_release_year"))]
    pub year: i32,
    #[validate(length(min = 1, code = "too_small", message = "Director must not be empty"))]
    pub director: String,
    #[validate(range(
        min = 1,
        code = "too_small",
        message = "Duration must be a positive number of minutes"
    ))]
    pub duration: i32,
    #[serde(default)]
    #[validate(range(
        min = 0.0,
        max = 10.0,
        code = "out_of_range",
        message = "Rate must be between 0 and 10"
    ))]
    pub rate: f64,
    #[validate(url(code = "invalid_url", message = "Poster must be a valid URL"))]
    pub poster: String,
    #[validate(length(min = 1, code = "too_small", message = "At least one genre is required"))]
    pub genre: Vec<Genre>,
}

/// DTO for partially updating a movie. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct MoviePatch {
    #[validate(length(min = 1, code = "too_small", message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_release_year"))]
    pub year: Option<i32>,
    #[validate(length(min = 1, code = "too_small", message = "Director must not be empty"))]
    pub director: Option<String>,
    #[validate(range(
        min = 1,
        code = "too_small",
        message = "Duration must be a positive number of minutes"
    ))]
    pub duration: Option<i32>,
    #[validate(range(
        min = 0.0,
        max = 10.0,
        code = "out_of_range",
        message = "Rate must be between 0 and 10"
    ))]
    pub rate: Option<f64>,
    #[validate(url(code = "invalid_url", message = "Poster must be a valid URL"))]
    pub poster: Option<String>,
    #[validate(length(min = 1, code = "too_small", message = "At least one genre is required"))]
    pub genre: Option<Vec<Genre>>,
}

impl Movie {
    /// Build a stored record from validated input and an assigned id.
    pub fn from_new(id: MovieId, input: NewMovie) -> Self {
        Self {
            id,
            title: input.title,
            year: input.year,
            director: input.director,
            duration: input.duration,
            poster: input.poster,
            genre: input.genre,
            rate: input.rate,
        }
    }

    /// Shallow merge: overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// Whether any of this movie's genres equals `name`, ignoring case.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches_ignore_case(name))
    }
}

impl MoviePatch {
    /// True when no field is present, so applying the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
