use serde::{Deserialize, Serialize};

/// Positional wire shape of a record: `[title, year, box_office, genres, rating]`.
type RawMovieRecord = (
    Option<String>,
    Option<String>,
    Option<TextOrNumber>,
    Option<Vec<String>>,
    Option<TextOrNumber>,
);

type WrittenMovieRecord = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<Vec<String>>,
    Option<String>,
);

/// Box office and rating are scraped as text but other tools store them as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

/// One movie or show as scraped from its title page. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMovieRecord", into = "WrittenMovieRecord")]
pub struct MovieRecord {
    pub title: Option<String>,
    /// Either `"2013"` or an en-dash range such as `"2013–2018"`.
    pub year_range: Option<String>,
    pub box_office: Option<String>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<String>,
}

impl From<RawMovieRecord> for MovieRecord {
    fn from((title, year_range, box_office, genres, rating): RawMovieRecord) -> Self {
        MovieRecord {
            title,
            year_range,
            box_office: box_office.map(String::from),
            genres,
            rating: rating.map(String::from),
        }
    }
}

impl From<MovieRecord> for WrittenMovieRecord {
    fn from(movie: MovieRecord) -> Self {
        (
            movie.title,
            movie.year_range,
            movie.box_office,
            movie.genres,
            movie.rating,
        )
    }
}
