//! Core record types

use serde::{Deserialize, Serialize};

/// A single movie record as stored in the collection.
///
/// The store may attach its own generated identifier on insert; the service
/// never reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title
    pub name: String,
    /// Release year
    pub year: i32,
    /// Numeric rating
    pub stars: f64,
}

impl Movie {
    pub fn new(name: impl Into<String>, year: i32, stars: f64) -> Self {
        Self {
            name: name.into(),
            year,
            stars,
        }
    }

    /// Display line used by the list route, e.g. `"Batman (2021)"`.
    pub fn display_line(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}

/// The fixed sample set inserted by the insert route.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new("Batman", 2021, 1.5),
        Movie::new("Wonder Women", 2005, 2.0),
        Movie::new("When Harry Met Sally", 1985, 5.0),
        Movie::new("Hulk", 1985, 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_has_four_movies() {
        assert_eq!(sample_movies().len(), 4);
    }

    #[test]
    fn sample_set_contains_batman_2021() {
        let movies = sample_movies();
        assert!(movies.iter().any(|m| m.name == "Batman" && m.year == 2021));
    }

    #[test]
    fn display_line_formats_name_and_year() {
        let movie = Movie::new("Batman", 2021, 1.5);
        assert_eq!(movie.display_line(), "Batman (2021)");
    }

    #[test]
    fn movie_round_trips_through_serde() {
        let movie = Movie::new("Hulk", 1985, 5.0);
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(movie, back);
    }
}
