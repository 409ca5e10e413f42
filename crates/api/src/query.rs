//! Query parameter types for API handlers.

/// `?genre=` filter for the movie list.
///
/// Built from the raw query pairs so a malformed or repeated parameter can
/// never reject the request. When `genre` repeats, the first value wins.
#[derive(Debug, Default)]
pub struct GenreFilter {
    pub genre: Option<String>,
}

impl GenreFilter {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            genre: pairs
                .into_iter()
                .find(|(key, _)| key == "genre")
                .map(|(_, value)| value),
        }
    }

    /// The filter value, treating `?genre=` (empty) as no filter.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_genre_means_no_filter() {
        let filter = GenreFilter::from_pairs(pairs(&[("genre", "")]));
        assert_eq!(filter.genre(), None);
        assert_eq!(GenreFilter::default().genre(), None);
    }

    #[test]
    fn non_empty_genre_is_passed_through() {
        let filter = GenreFilter::from_pairs(pairs(&[("genre", "drama")]));
        assert_eq!(filter.genre(), Some("drama"));
    }

    #[test]
    fn first_genre_wins_and_other_keys_are_ignored() {
        let filter = GenreFilter::from_pairs(pairs(&[
            ("page", "2"),
            ("genre", "drama"),
            ("genre", "comedy"),
        ]));
        assert_eq!(filter.genre(), Some("drama"));
    }
}
